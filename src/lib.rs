//! Query Banxico's CEP service for SPEI payment receipts.
//!
//! The core is the response-interpretation pipeline: criteria validation
//! ([`criteria`]), the tolerant HTML result parser and the receipt XML
//! extractor ([`parser`]), and the institution directory ([`banks`]).
//! [`CepClient`] glues them to an injected HTTP collaborator
//! ([`http::HttpFetch`]); everything network-shaped stays behind that
//! trait.

pub mod banks;
pub mod cli;
pub mod client;
pub mod config;
pub mod criteria;
pub mod error;
pub mod http;
pub mod parser;
pub mod sanitize;

pub use banks::Bank;
pub use client::{CepClient, DownloadFormat};
pub use criteria::{CriterionType, LookupCriteria};
pub use error::CepError;
pub use http::{HttpConnector, HttpFetch, ReqwestConnector, ReqwestFetcher};
pub use parser::{PaymentDetails, QueryResult};
