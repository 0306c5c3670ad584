use thiserror::Error;

#[derive(Debug, Error)]
pub enum CepError {
    #[error("Missing or empty field: {0}")]
    MissingField(&'static str),

    #[error("Criterion type must be 'T' (tracking key) or 'R' (reference)")]
    InvalidCriterionType,

    #[error("Criterion exceeds the maximum length of {max} characters")]
    CriterionTooLong { max: usize },

    #[error("Date must be in dd-mm-yyyy format")]
    InvalidDateFormat,

    #[error("An 18-character beneficiary account must be a CLABE (digits only)")]
    InvalidClabe,

    #[error("Amount must be numeric")]
    InvalidAmount,

    #[error("Bank codes must be numeric")]
    InvalidBankCode,

    #[error("Invalid download format: {0} (expected XML, PDF or ZIP)")]
    InvalidFormat(String),

    #[error("HTTP request failed: {0}")]
    HttpRequest(String),

    #[error("Invalid bank list format: {0}")]
    InvalidBankListFormat(String),

    #[error("XML parse error: {0}")]
    XmlParse(String),
}
