//! The `issue` command.

use std::io::Write;

use tlsboot_pki::IssuanceRequest;
use tracing::debug;

use crate::cli::IssueArgs;
use crate::error::CliError;

/// Issues a certificate/key pair and reports the artifact paths.
pub fn execute(out: &mut impl Write, args: &IssueArgs) -> Result<(), CliError> {
    debug!(hosts = %args.hosts, days = args.days, "Running issue command");

    let request = IssuanceRequest::builder(&args.hosts)
        .cert_path(&args.cert)
        .key_path(&args.key)
        .organization(&args.org)
        .validity_days(args.days)
        .build()?;

    tlsboot_pki::issue(&request)?;

    writeln!(out, "Certificate written to {}", args.cert.display())?;
    writeln!(out, "Private key written to {}", args.key.display())?;
    Ok(())
}
