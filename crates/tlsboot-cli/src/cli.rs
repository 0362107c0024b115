//! Command-line argument parsing with clap.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tlsboot - issue, serve, and probe self-signed local TLS certificates.
#[derive(Parser, Debug, Clone)]
#[command(name = "tlsboot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Issue a self-signed certificate and private key.
    Issue(IssueArgs),

    /// Serve the TLS test endpoints using issued artifacts.
    Serve(ServeArgs),

    /// Probe a TLS endpoint with GET, JSON POST, and optional upload.
    Probe(ProbeArgs),
}

/// Arguments for the issue command.
#[derive(Parser, Debug, Clone)]
pub struct IssueArgs {
    /// Comma-separated host identities (DNS names and/or IP literals).
    #[arg(long, default_value = "localhost")]
    pub hosts: String,

    /// Certificate output path.
    #[arg(long, default_value = "cert.pem")]
    pub cert: PathBuf,

    /// Private key output path.
    #[arg(long, default_value = "key.pem")]
    pub key: PathBuf,

    /// Subject organization.
    #[arg(long, default_value = "Your Organization")]
    pub org: String,

    /// Validity period in days.
    #[arg(long, default_value_t = 365)]
    pub days: u32,
}

/// Arguments for the serve command.
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind the TLS listener to.
    #[arg(long, default_value = "0.0.0.0:8443")]
    pub addr: SocketAddr,

    /// Certificate path.
    #[arg(long, default_value = "cert.pem")]
    pub cert: PathBuf,

    /// Private key path.
    #[arg(long, default_value = "key.pem")]
    pub key: PathBuf,

    /// Directory uploaded files are saved into.
    #[arg(long, default_value = "uploads")]
    pub upload_dir: PathBuf,
}

/// Arguments for the probe command.
#[derive(Parser, Debug, Clone)]
pub struct ProbeArgs {
    /// Base URL of the TLS endpoint.
    #[arg(long, default_value = "https://localhost:8443")]
    pub url: String,

    /// Certificate to trust for the handshake.
    #[arg(long, default_value = "cert.pem")]
    pub ca: PathBuf,

    /// Message for the JSON POST probe.
    #[arg(long, default_value = "Hello, server!")]
    pub message: String,

    /// Optional file to upload as multipart form data.
    #[arg(long)]
    pub file: Option<PathBuf>,
}
