//! The orchestrating client: validation, the two-step HTTP exchange,
//! and dispatch of raw bodies to the matching parser.

use std::fmt;
use std::str::FromStr;

use crate::banks::{self, Bank};
use crate::config;
use crate::criteria::LookupCriteria;
use crate::error::CepError;
use crate::http::{HttpConnector, HttpFetch};
use crate::parser::{self, PaymentDetails, QueryResult};
use crate::sanitize;

/// Receipt download formats the service offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadFormat {
    Xml,
    Pdf,
    Zip,
}

impl DownloadFormat {
    /// Wire value for the download form field.
    pub fn code(self) -> &'static str {
        match self {
            DownloadFormat::Xml => "XML",
            DownloadFormat::Pdf => "PDF",
            DownloadFormat::Zip => "ZIP",
        }
    }
}

impl FromStr for DownloadFormat {
    type Err = CepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "XML" => Ok(DownloadFormat::Xml),
            "PDF" => Ok(DownloadFormat::Pdf),
            "ZIP" => Ok(DownloadFormat::Zip),
            _ => Err(CepError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Client for the CEP service. Owns the HTTP connector and opens a
/// fresh session (own cookie jar) for every top-level operation, so no
/// server-side state carries over between calls; all parsing and
/// validation lives in the leaf modules.
pub struct CepClient {
    connector: Box<dyn HttpConnector>,
}

impl CepClient {
    pub fn new(connector: Box<dyn HttpConnector>) -> Self {
        Self { connector }
    }

    fn session(&self) -> Result<Box<dyn HttpFetch>, CepError> {
        self.connector.session().map_err(wrap_http)
    }

    /// Look up a payment and interpret the HTML response. Validates the
    /// criteria first; no network I/O happens on a validation failure.
    pub async fn query_payment(
        &self,
        criteria: &mut LookupCriteria,
    ) -> Result<QueryResult, CepError> {
        criteria.validate()?;
        tracing::debug!(
            criterion = %sanitize::mask_criterion(&criteria.criterion),
            account = %sanitize::mask_account(&criteria.beneficiary_account),
            date = %criteria.date,
            "querying payment"
        );

        let session = self.session()?;
        let body = submit_lookup(session.as_ref(), criteria).await?;
        Ok(parser::parse_query_response(&String::from_utf8_lossy(
            &body,
        )))
    }

    /// Download the payment receipt in the given format. The format is
    /// checked before validation and before any network call.
    pub async fn download_payment_file(
        &self,
        criteria: &mut LookupCriteria,
        format: &str,
    ) -> Result<Vec<u8>, CepError> {
        let format: DownloadFormat = format.parse()?;
        criteria.validate()?;
        tracing::debug!(
            criterion = %sanitize::mask_criterion(&criteria.criterion),
            %format,
            "downloading payment file"
        );

        // The lookup must land first so the session holds the receipt;
        // the download GET stays on the same session.
        let session = self.session()?;
        submit_lookup(session.as_ref(), criteria).await?;

        let form = vec![(config::FIELD_DOWNLOAD_FORMAT, format.code().to_string())];
        session
            .get_with_form_body(config::DOWNLOAD_PATH, &form)
            .await
            .map_err(wrap_http)
    }

    /// Download the XML receipt and extract the structured details.
    pub async fn get_payment_details(
        &self,
        criteria: &mut LookupCriteria,
    ) -> Result<PaymentDetails, CepError> {
        let bytes = self.download_payment_file(criteria, "XML").await?;
        parser::parse_payment_xml(&String::from_utf8_lossy(&bytes))
    }

    /// Fetch the directory of participating institutions.
    pub async fn get_bank_options(&self) -> Result<Vec<Bank>, CepError> {
        let body = self
            .session()?
            .get(config::BANK_LIST_PATH, &[])
            .await
            .map_err(wrap_http)?;
        banks::parse_bank_list(&String::from_utf8_lossy(&body))
    }

    /// Resolve a bank name (case-insensitive substring) to its code.
    pub async fn get_bank_code_by_name(&self, name: &str) -> Result<Option<String>, CepError> {
        let directory = self.get_bank_options().await?;
        Ok(banks::find_by_name(&directory, name).map(|bank| bank.code.clone()))
    }

}

/// The two-step exchange every lookup needs: a plain GET warms the
/// session, then the form POST submits the criteria. Both go through
/// the same session (same cookie jar) and are strictly sequential; the
/// server rejects a POST without the warm-up state.
async fn submit_lookup(
    session: &dyn HttpFetch,
    criteria: &LookupCriteria,
) -> Result<Vec<u8>, CepError> {
    session
        .get(config::VALIDATION_PATH, &[])
        .await
        .map_err(wrap_http)?;
    session
        .post_form(config::VALIDATION_PATH, &lookup_form(criteria))
        .await
        .map_err(wrap_http)
}

fn wrap_http(err: anyhow::Error) -> CepError {
    CepError::HttpRequest(err.to_string())
}

/// Form fields exactly as the validation page posts them.
fn lookup_form(criteria: &LookupCriteria) -> Vec<(&'static str, String)> {
    vec![
        (config::FIELD_CRITERION_TYPE, criteria.criterion_type.clone()),
        (config::FIELD_DATE, criteria.date.clone()),
        (config::FIELD_CRITERION, criteria.criterion.clone()),
        (config::FIELD_SENDER_BANK, criteria.sender_bank_code.clone()),
        (
            config::FIELD_RECEIVER_BANK,
            criteria.receiver_bank_code.clone(),
        ),
        (config::FIELD_ACCOUNT, criteria.beneficiary_account.clone()),
        (config::FIELD_AMOUNT, criteria.amount.clone()),
        (config::FIELD_RECEIVER_KIND, "0".to_string()),
    ]
}
