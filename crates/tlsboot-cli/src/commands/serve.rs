//! The `serve` command.

use tlsboot_server::{HarnessServer, ServerConfig};

use crate::cli::ServeArgs;
use crate::error::CliError;

/// Runs the TLS harness until it fails or is interrupted.
pub async fn execute(args: &ServeArgs) -> Result<(), CliError> {
    let config = ServerConfig::new(args.addr)
        .with_cert_path(&args.cert)
        .with_key_path(&args.key)
        .with_upload_dir(&args.upload_dir);

    HarnessServer::new(config).serve().await?;
    Ok(())
}
