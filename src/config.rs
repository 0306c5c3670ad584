//! Constants for the Banxico CEP service endpoints and form fields.

pub const BASE_URL: &str = "https://www.banxico.org.mx/cep";

/// Validation page. A plain GET warms the session; the form POST submits
/// the lookup against the same cookie jar.
pub const VALIDATION_PATH: &str = "/valida.do";

/// Receipt download endpoint. The service expects a GET carrying a
/// form-encoded body; unusual, but that is what the wire shows.
pub const DOWNLOAD_PATH: &str = "/descarga.do";

/// JSON directory of participating institutions.
pub const BANK_LIST_PATH: &str = "/instituciones.do";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// Form field names as the CEP validation page posts them.
pub const FIELD_CRITERION_TYPE: &str = "tipoCriterio";
pub const FIELD_DATE: &str = "fecha";
pub const FIELD_CRITERION: &str = "criterio";
pub const FIELD_SENDER_BANK: &str = "emisor";
pub const FIELD_RECEIVER_BANK: &str = "receptor";
pub const FIELD_ACCOUNT: &str = "cuenta";
pub const FIELD_AMOUNT: &str = "monto";
pub const FIELD_RECEIVER_KIND: &str = "receptorParticipante";
pub const FIELD_DOWNLOAD_FORMAT: &str = "formato";
