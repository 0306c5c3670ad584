use comfy_table::{Cell, Table};

use crate::client::CepClient;
use crate::criteria::LookupCriteria;

pub async fn details(
    client: &CepClient,
    mut criteria: LookupCriteria,
    json: bool,
) -> anyhow::Result<()> {
    let details = client.get_payment_details(&mut criteria).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);

    let rows: Vec<(&str, &Option<String>)> = vec![
        ("Operation date", &details.operation.date),
        ("Time", &details.operation.time),
        ("SPEI key", &details.operation.spei_key),
        ("Tracking key", &details.operation.tracking_key),
        ("Certificate number", &details.operation.certificate_number),
        ("Beneficiary bank", &details.beneficiary.bank),
        ("Beneficiary name", &details.beneficiary.name),
        ("Beneficiary account", &details.beneficiary.account),
        ("Beneficiary RFC", &details.beneficiary.rfc),
        ("Concept", &details.beneficiary.concept),
        ("IVA", &details.beneficiary.iva),
        ("Amount", &details.beneficiary.amount),
        ("Sender bank", &details.sender.bank),
        ("Sender name", &details.sender.name),
        ("Sender account", &details.sender.account),
        ("Sender RFC", &details.sender.rfc),
    ];

    for (label, value) in rows {
        if let Some(value) = value {
            table.add_row(vec![Cell::new(label), Cell::new(value)]);
        }
    }

    println!("{table}");
    Ok(())
}
