//! tlsboot binary entrypoint.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tlsboot_cli::CliError;
use tlsboot_cli::cli::{Cli, Commands};
use tlsboot_cli::commands::{issue, probe, serve};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Issue(args) => issue::execute(&mut stdout, &args)?,
        Commands::Serve(args) => serve::execute(&args).await?,
        Commands::Probe(args) => probe::execute(&mut stdout, &args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parses_issue_defaults() {
        let cli = Cli::parse_from(["tlsboot", "issue"]);
        match cli.command {
            Commands::Issue(args) => {
                assert_eq!(args.hosts, "localhost");
                assert_eq!(args.cert, PathBuf::from("cert.pem"));
                assert_eq!(args.key, PathBuf::from("key.pem"));
                assert_eq!(args.days, 365);
            }
            _ => panic!("expected issue command"),
        }
    }

    #[test]
    fn cli_parses_issue_overrides() {
        let cli = Cli::parse_from([
            "tlsboot", "issue", "--hosts", "localhost,127.0.0.1", "--org", "Test Org", "--days",
            "30",
        ]);
        match cli.command {
            Commands::Issue(args) => {
                assert_eq!(args.hosts, "localhost,127.0.0.1");
                assert_eq!(args.org, "Test Org");
                assert_eq!(args.days, 30);
            }
            _ => panic!("expected issue command"),
        }
    }

    #[test]
    fn cli_parses_serve() {
        let cli = Cli::parse_from(["tlsboot", "serve", "--addr", "127.0.0.1:9443"]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.addr, "127.0.0.1:9443".parse().unwrap());
                assert_eq!(args.upload_dir, PathBuf::from("uploads"));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn cli_parses_probe_with_file() {
        let cli = Cli::parse_from(["tlsboot", "probe", "--file", "testfile.txt"]);
        match cli.command {
            Commands::Probe(args) => {
                assert_eq!(args.url, "https://localhost:8443");
                assert_eq!(args.file, Some(PathBuf::from("testfile.txt")));
            }
            _ => panic!("expected probe command"),
        }
    }

    #[tokio::test]
    async fn run_issue_command() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("cert.pem");
        let key = dir.path().join("key.pem");
        let cli = Cli::parse_from([
            "tlsboot",
            "issue",
            "--cert",
            cert.to_str().unwrap(),
            "--key",
            key.to_str().unwrap(),
        ]);

        run(cli).await.unwrap();

        assert!(cert.exists());
        assert!(key.exists());
    }
}
