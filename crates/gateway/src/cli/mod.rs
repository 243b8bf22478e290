pub mod config;

use clap::{Parser, Subcommand};

/// SessionVault — a cookie-session value store service.
#[derive(Debug, Parser)]
#[command(name = "sessionvault", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default when no subcommand is given).
    Serve,
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `SV_CONFIG` (or
/// `config.toml` by default). A missing file is not an error: the server
/// runs on pure defaults. Returns the parsed config and the path used.
pub fn load_config() -> anyhow::Result<(sv_domain::config::Config, String)> {
    let config_path =
        std::env::var("SV_CONFIG").unwrap_or_else(|_| "config.toml".into());

    let path = std::path::Path::new(&config_path);
    let config = if path.exists() {
        sv_domain::config::Config::load_from(path)
            .map_err(|e| anyhow::anyhow!("loading {config_path}: {e}"))?
    } else {
        sv_domain::config::Config::default()
    };

    Ok((config, config_path))
}
