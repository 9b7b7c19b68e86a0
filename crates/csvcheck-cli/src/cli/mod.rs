//! CLI for the csvcheck client.

mod commands;
mod terminal;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use csvcheck_core::adapter::{FileActionAdapter, Ports};
use csvcheck_core::config::{self, CsvcheckConfig};
use csvcheck_core::file::PathFileSource;
use csvcheck_core::report::ReportSaver;
use csvcheck_core::transport::CurlTransport;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use commands::{run_check, run_download, run_ping, run_upload, run_validate};
use terminal::Terminal;

pub(crate) type CliAdapter = FileActionAdapter<CurlTransport>;

/// Top-level CLI for the csvcheck client.
#[derive(Debug, Parser)]
#[command(name = "csvcheck")]
#[command(about = "csvcheck: upload, validate and fetch reports from a CSV checking service", long_about = None)]
pub struct Cli {
    /// Service base URL (overrides `base_url` in config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory downloaded reports are saved in (overrides `download_dir`; default: current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check that the service is reachable.
    Ping,

    /// Upload a file to the service.
    Upload {
        /// Path to the file.
        path: PathBuf,
    },

    /// Validate a previously uploaded file (only its name is sent).
    Validate {
        /// Path to the file; its file name identifies the upload.
        path: PathBuf,
    },

    /// Upload, then validate; optionally fetch the error report.
    Check {
        /// Path to the file.
        path: PathBuf,
        /// Save the error report when errors were found.
        #[arg(long)]
        download: bool,
    },

    /// Save the latest error report.
    Download,
}

impl CliCommand {
    /// The file this command acts on, if any.
    fn selected_path(&self) -> Option<&Path> {
        match self {
            CliCommand::Upload { path }
            | CliCommand::Validate { path }
            | CliCommand::Check { path, .. } => Some(path.as_path()),
            CliCommand::Ping | CliCommand::Download => None,
        }
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(url) = &cli.base_url {
            cfg.base_url = url.clone();
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let download_dir = resolve_download_dir(cli.download_dir.as_deref(), &cfg)?;
        let selected = cli.command.selected_path().map(Path::to_path_buf);
        let adapter = Arc::new(build_adapter(&cfg, selected, download_dir)?);

        match cli.command {
            CliCommand::Ping => run_ping(&adapter).await?,
            CliCommand::Upload { .. } => run_upload(&adapter).await?,
            CliCommand::Validate { .. } => run_validate(&adapter).await?,
            CliCommand::Check { download, .. } => run_check(&adapter, download).await?,
            CliCommand::Download => run_download(&adapter).await?,
        }

        Ok(())
    }
}

/// `--download-dir`, then config `download_dir`, then the current directory.
pub(crate) fn resolve_download_dir(flag: Option<&Path>, cfg: &CsvcheckConfig) -> Result<PathBuf> {
    match flag.or(cfg.download_dir.as_deref()) {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().context("current directory"),
    }
}

/// Wires the adapter to the terminal, the filesystem and a curl transport.
pub(crate) fn build_adapter(
    cfg: &CsvcheckConfig,
    selected: Option<PathBuf>,
    download_dir: PathBuf,
) -> Result<CliAdapter> {
    let transport = CurlTransport::from_config(cfg)
        .with_context(|| format!("base URL {:?}", cfg.base_url))?;
    let terminal = Arc::new(Terminal);
    let saver = ReportSaver::new(transport.clone(), download_dir).with_notifier(terminal.clone());
    Ok(FileActionAdapter::new(
        transport,
        Ports {
            files: Arc::new(PathFileSource::new(selected)),
            results: terminal.clone(),
            notifier: terminal,
            navigator: Arc::new(saver),
        },
    ))
}

#[cfg(test)]
mod tests;
