//! Extraction of the payment-receipt XML the download endpoint returns.
//!
//! The receipt carries nearly everything as *attributes*: operation
//! fields on the root element, beneficiary fields on a `Beneficiario`
//! child, sender fields on an `Ordenante` child. Extraction is "read
//! attribute or null" throughout; an attribute or child element being
//! absent is normal, only a document that is not well-formed XML is an
//! error.

use serde::{Deserialize, Serialize};

use crate::error::CepError;

/// Fully extracted payment receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentDetails {
    pub operation: OperationDetails,
    pub beneficiary: BeneficiaryDetails,
    pub sender: SenderDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperationDetails {
    pub date: Option<String>,
    pub time: Option<String>,
    pub spei_key: Option<String>,
    pub tracking_key: Option<String>,
    pub certificate_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BeneficiaryDetails {
    pub bank: Option<String>,
    pub name: Option<String>,
    pub account_type: Option<String>,
    pub account: Option<String>,
    pub rfc: Option<String>,
    pub curp: Option<String>,
    pub concept: Option<String>,
    pub iva: Option<String>,
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SenderDetails {
    pub bank: Option<String>,
    pub name: Option<String>,
    pub account_type: Option<String>,
    pub account: Option<String>,
    pub rfc: Option<String>,
    pub curp: Option<String>,
}

// ---------------------------------------------------------------------------
// Wire model — attribute names exactly as the service emits them
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ReceiptDoc {
    #[serde(rename = "@FechaOperacion")]
    fecha_operacion: Option<String>,
    #[serde(rename = "@Hora")]
    hora: Option<String>,
    #[serde(rename = "@ClaveSPEI")]
    clave_spei: Option<String>,
    #[serde(rename = "@claveRastreo")]
    clave_rastreo: Option<String>,
    #[serde(rename = "@numeroCertificado")]
    numero_certificado: Option<String>,
    #[serde(rename = "Beneficiario")]
    beneficiario: Option<BeneficiarioElem>,
    #[serde(rename = "Ordenante")]
    ordenante: Option<OrdenanteElem>,
}

#[derive(Debug, Deserialize, Default)]
struct BeneficiarioElem {
    #[serde(rename = "@BancoReceptor")]
    banco_receptor: Option<String>,
    #[serde(rename = "@Nombre")]
    nombre: Option<String>,
    #[serde(rename = "@TipoCuenta")]
    tipo_cuenta: Option<String>,
    #[serde(rename = "@Cuenta")]
    cuenta: Option<String>,
    #[serde(rename = "@RFC")]
    rfc: Option<String>,
    #[serde(rename = "@CURP")]
    curp: Option<String>,
    #[serde(rename = "@Concepto")]
    concepto: Option<String>,
    #[serde(rename = "@IVA")]
    iva: Option<String>,
    #[serde(rename = "@MontoPago")]
    monto_pago: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct OrdenanteElem {
    #[serde(rename = "@BancoEmisor")]
    banco_emisor: Option<String>,
    #[serde(rename = "@Nombre")]
    nombre: Option<String>,
    #[serde(rename = "@TipoCuenta")]
    tipo_cuenta: Option<String>,
    #[serde(rename = "@Cuenta")]
    cuenta: Option<String>,
    #[serde(rename = "@RFC")]
    rfc: Option<String>,
    #[serde(rename = "@CURP")]
    curp: Option<String>,
}

/// Parse a payment-receipt document. Malformed or blank input is an
/// [`CepError::XmlParse`] carrying the underlying parser message.
pub fn parse_payment_xml(xml: &str) -> Result<PaymentDetails, CepError> {
    if xml.trim().is_empty() {
        return Err(CepError::XmlParse("empty document".into()));
    }
    let doc: ReceiptDoc =
        quick_xml::de::from_str(xml).map_err(|e| CepError::XmlParse(e.to_string()))?;

    Ok(PaymentDetails {
        operation: OperationDetails {
            date: doc.fecha_operacion,
            time: doc.hora,
            spei_key: doc.clave_spei,
            tracking_key: doc.clave_rastreo,
            certificate_number: doc.numero_certificado,
        },
        beneficiary: doc
            .beneficiario
            .map(|b| BeneficiaryDetails {
                bank: trimmed(b.banco_receptor),
                name: b.nombre,
                account_type: b.tipo_cuenta,
                account: b.cuenta,
                rfc: b.rfc,
                curp: b.curp,
                concept: b.concepto,
                iva: b.iva,
                amount: b.monto_pago,
            })
            .unwrap_or_default(),
        sender: doc
            .ordenante
            .map(|o| SenderDetails {
                bank: trimmed(o.banco_emisor),
                name: o.nombre,
                account_type: o.tipo_cuenta,
                account: o.cuenta,
                rfc: o.rfc,
                curp: o.curp,
            })
            .unwrap_or_default(),
    })
}

/// Bank names arrive padded with trailing spaces.
fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}
