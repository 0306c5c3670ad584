//! Lookup criteria for a CEP payment query, and their validation.

use serde::{Deserialize, Serialize};

use crate::error::CepError;

/// How the payment is identified: by its SPEI tracking key or by the
/// numeric reference the sender assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionType {
    TrackingKey,
    Reference,
}

impl CriterionType {
    /// Resolve the wire code the CEP form uses.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "T" => Some(CriterionType::TrackingKey),
            "R" => Some(CriterionType::Reference),
            _ => None,
        }
    }

    /// Maximum criterion length the service accepts for this type.
    pub fn max_criterion_len(self) -> usize {
        match self {
            CriterionType::TrackingKey => 30,
            CriterionType::Reference => 7,
        }
    }
}

/// Raw lookup criteria as supplied by the caller. `validate` normalizes
/// the date in place; after a successful call the record is canonical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupCriteria {
    /// Operation date, dd-mm-yyyy (dd/mm/yyyy accepted and rewritten).
    pub date: String,
    /// "T" for tracking key, "R" for reference.
    pub criterion_type: String,
    pub criterion: String,
    pub sender_bank_code: String,
    pub receiver_bank_code: String,
    pub beneficiary_account: String,
    pub amount: String,
}

impl LookupCriteria {
    /// Validate and normalize in place. Checks run in a fixed order and
    /// the first failure wins; nothing is mutated unless all the checks
    /// up to the date rewrite pass.
    pub fn validate(&mut self) -> Result<(), CepError> {
        for (name, value) in [
            ("date", &self.date),
            ("criterion_type", &self.criterion_type),
            ("criterion", &self.criterion),
            ("sender_bank_code", &self.sender_bank_code),
            ("receiver_bank_code", &self.receiver_bank_code),
            ("beneficiary_account", &self.beneficiary_account),
            ("amount", &self.amount),
        ] {
            if value.trim().is_empty() {
                return Err(CepError::MissingField(name));
            }
        }

        let criterion_type = CriterionType::from_code(&self.criterion_type)
            .ok_or(CepError::InvalidCriterionType)?;

        let max = criterion_type.max_criterion_len();
        if self.criterion.chars().count() > max {
            return Err(CepError::CriterionTooLong { max });
        }

        self.date = normalize_date(&self.date)?;

        // CLABE digit check applies only to exactly-18-character accounts.
        // Shorter and longer identifiers (cards, cell numbers) pass through
        // unchecked; the live service behaves the same way, so this gap is
        // kept for compatibility.
        if self.beneficiary_account.chars().count() == 18
            && !self.beneficiary_account.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CepError::InvalidClabe);
        }

        // f64 parsing also admits "nan"/"inf"; those are not amounts.
        let amount = self.amount.replace(',', "");
        if !amount.parse::<f64>().map(f64::is_finite).unwrap_or(false) {
            return Err(CepError::InvalidAmount);
        }

        if !is_numeric(&self.sender_bank_code) || !is_numeric(&self.receiver_bank_code) {
            return Err(CepError::InvalidBankCode);
        }

        Ok(())
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Accept dd/mm/yyyy or dd-mm-yyyy and return the dashed form. No
/// calendar check: 31-02-2024 passes, matching the service.
fn normalize_date(date: &str) -> Result<String, CepError> {
    let dashed = date.replace('/', "-");
    let bytes = dashed.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[2] == b'-'
        && bytes[5] == b'-'
        && [0, 1, 3, 4, 6, 7, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit());
    if well_formed {
        Ok(dashed)
    } else {
        Err(CepError::InvalidDateFormat)
    }
}
