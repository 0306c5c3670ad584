use std::path::Path;

use crate::client::CepClient;
use crate::criteria::LookupCriteria;

pub async fn download(
    client: &CepClient,
    mut criteria: LookupCriteria,
    format: &str,
    output: &str,
) -> anyhow::Result<()> {
    let bytes = client.download_payment_file(&mut criteria, format).await?;
    tokio::fs::write(Path::new(output), &bytes).await?;
    println!("Wrote {} bytes to {output}", bytes.len());
    Ok(())
}
