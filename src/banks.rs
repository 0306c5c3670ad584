//! Directory of SPEI participating institutions, fetched as JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CepError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub code: String,
    pub name: String,
}

/// Parse the bank-list JSON: a top-level object whose `instituciones`
/// array holds `[code, name]` pairs. The code arrives as a JSON string
/// or number depending on the service revision; both are accepted.
/// Order is preserved as the server sent it.
pub fn parse_bank_list(json: &str) -> Result<Vec<Bank>, CepError> {
    let doc: Value = serde_json::from_str(json)
        .map_err(|e| CepError::InvalidBankListFormat(e.to_string()))?;

    let entries = doc
        .get("instituciones")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            CepError::InvalidBankListFormat("missing 'instituciones' array".into())
        })?;

    let mut banks = Vec::with_capacity(entries.len());
    for entry in entries {
        let pair = entry.as_array().filter(|p| p.len() >= 2).ok_or_else(|| {
            CepError::InvalidBankListFormat("institution entry is not a [code, name] pair".into())
        })?;
        let code = match &pair[0] {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(CepError::InvalidBankListFormat(format!(
                    "institution code is neither string nor number: {other}"
                )));
            }
        };
        let name = pair[1]
            .as_str()
            .ok_or_else(|| {
                CepError::InvalidBankListFormat("institution name is not a string".into())
            })?
            .to_string();
        banks.push(Bank { code, name });
    }

    Ok(banks)
}

/// Case-insensitive substring search; first match in server order wins.
pub fn find_by_name<'a>(banks: &'a [Bank], query: &str) -> Option<&'a Bank> {
    let needle = query.to_lowercase();
    banks
        .iter()
        .find(|bank| bank.name.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bank_list() {
        let json = r#"{"instituciones": [["40012", "BBVA BANCOMER"], ["40002", "BANAMEX"]]}"#;
        let banks = parse_bank_list(json).unwrap();
        assert_eq!(banks.len(), 2);
        assert_eq!(banks[0].code, "40012");
        assert_eq!(banks[0].name, "BBVA BANCOMER");
        assert_eq!(banks[1].code, "40002");
    }

    #[test]
    fn test_numeric_codes_accepted() {
        let json = r#"{"instituciones": [[40012, "BBVA BANCOMER"]]}"#;
        let banks = parse_bank_list(json).unwrap();
        assert_eq!(banks[0].code, "40012");
    }

    #[test]
    fn test_missing_array_rejected() {
        for bad in [r#"{}"#, r#"{"instituciones": "nope"}"#, "[]", "not json"] {
            assert!(matches!(
                parse_bank_list(bad),
                Err(CepError::InvalidBankListFormat(_))
            ));
        }
    }

    #[test]
    fn test_malformed_entry_rejected() {
        let json = r#"{"instituciones": [["40012"]]}"#;
        assert!(matches!(
            parse_bank_list(json),
            Err(CepError::InvalidBankListFormat(_))
        ));
    }

    #[test]
    fn test_find_by_name_case_insensitive_substring() {
        let banks = vec![
            Bank {
                code: "40012".into(),
                name: "BBVA BANCOMER".into(),
            },
            Bank {
                code: "40002".into(),
                name: "BANAMEX".into(),
            },
        ];
        assert_eq!(find_by_name(&banks, "bbva").unwrap().code, "40012");
        assert_eq!(find_by_name(&banks, "BANco").unwrap().code, "40012");
        assert!(find_by_name(&banks, "santander").is_none());
    }
}
