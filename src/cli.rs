use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::ConfigOverrides;
use commands::serve;

#[derive(Parser)]
#[command(name = "farmdash")]
#[command(about = "Smart farming analytics dashboard host")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard page and the compiled frontend
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8080, 127.0.0.1:3000)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Directory holding the frontend bundle (wasm-pack output under pkg/)
        #[arg(short, long, env = "STATIC_DIR")]
        static_dir: Option<String>,

        /// Base URL of the analytics API the forms post to
        ///
        /// Leave empty to post to the same origin that serves the page.
        ///
        /// Examples:
        ///   http://localhost:5000
        ///   https://analytics.example.com
        #[arg(short, long, env = "API_BASE_URL")]
        api_base_url: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, static_dir, api_base_url } => {
                serve(ConfigOverrides { bind_address, static_dir, api_base_url }).await?;
            }
        }
        Ok(())
    }
}
