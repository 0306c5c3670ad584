use comfy_table::{Cell, Table};

use crate::client::CepClient;
use crate::criteria::LookupCriteria;
use crate::parser::QueryResult;

pub async fn query(client: &CepClient, mut criteria: LookupCriteria) -> anyhow::Result<()> {
    match client.query_payment(&mut criteria).await? {
        QueryResult::NotFound => println!("No data returned for this payment."),
        QueryResult::Text { content } => println!("{content}"),
        QueryResult::Table {
            summary,
            headers,
            rows,
        } => {
            if let Some(summary) = summary {
                println!("{summary}\n");
            }
            let mut table = Table::new();
            table.set_header(headers.to_vec());
            for row in rows {
                table.add_row(vec![Cell::new(&row.label), Cell::new(&row.value)]);
            }
            println!("{table}");
        }
    }
    Ok(())
}
