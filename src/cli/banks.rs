use comfy_table::{Cell, Table};

use crate::client::CepClient;

pub async fn banks(client: &CepClient, find: Option<&str>) -> anyhow::Result<()> {
    let directory = client.get_bank_options().await?;

    if let Some(query) = find {
        match crate::banks::find_by_name(&directory, query) {
            Some(bank) => println!("{}  {}", bank.code, bank.name),
            None => println!("No institution matches '{query}'."),
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Code", "Name"]);
    for bank in &directory {
        table.add_row(vec![Cell::new(&bank.code), Cell::new(&bank.name)]);
    }
    println!("{table}");
    Ok(())
}
