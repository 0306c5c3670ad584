pub mod html;
pub mod xml;

pub use html::{QueryResult, TableRow, parse_query_response};
pub use xml::{BeneficiaryDetails, OperationDetails, PaymentDetails, SenderDetails, parse_payment_xml};
