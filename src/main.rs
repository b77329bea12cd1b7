mod app;
mod render;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use termfolio::config;
use termfolio::core::{Session, VirtualFs};
use tracing_subscriber::EnvFilter;

/// Portfolio terminal.
#[derive(Parser)]
#[command(name = config::APP_NAME, version, about)]
struct Args {
    /// Dispatch a single line and print the resulting scrollback.
    #[arg(short = 'c', long = "command")]
    command: Option<String>,

    /// Load the namespace from a manifest file instead of the embedded one.
    #[arg(long)]
    manifest: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let fs = match &args.manifest {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading manifest {}", path.display()))?;
            Arc::new(VirtualFs::from_json(&json).context("parsing manifest")?)
        }
        None => VirtualFs::shared(),
    };

    if let Some(line) = args.command {
        let mut session = Session::new(fs);
        session.submit_line(&line).await;
        for line in session.history() {
            println!("{}", render::format_line(line));
        }
        return Ok(());
    }

    println!("{}", console::style(config::ASCII_BANNER).dim());
    println!("{}", console::style("Ctrl-D to quit").dim());
    println!();

    app::Repl::new(Session::new(fs)).run().await
}
