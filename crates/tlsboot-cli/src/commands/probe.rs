//! The `probe` command.

use std::io::Write;

use tlsboot_client::HarnessClient;
use tracing::debug;

use crate::cli::ProbeArgs;
use crate::error::CliError;

/// Runs the GET, JSON POST, and optional upload probes in sequence.
pub async fn execute(out: &mut impl Write, args: &ProbeArgs) -> Result<(), CliError> {
    debug!(url = %args.url, "Running probe command");

    let client = HarnessClient::new(&args.url, &args.ca)?;

    let reply = client.get_home().await?;
    writeln!(out, "GET response: {reply}")?;

    let reply = client.post_json(&args.message).await?;
    writeln!(out, "POST response: {reply}")?;

    if let Some(file) = &args.file {
        let reply = client.upload_file(file).await?;
        writeln!(out, "Upload response: {reply}")?;
    }

    Ok(())
}
