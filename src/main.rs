//! classmap - Java source tree to Mermaid class diagram

mod diagram_cli;

use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "classmap")]
#[command(about = "Generate a Mermaid class diagram from a Java source tree", version)]
pub struct Cli {
    /// Root directory to scan
    path: Option<PathBuf>,
    /// Output file (default: class_diagram.md, or CLASSMAP_OUTPUT)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Worker threads (1 = sequential, 0 = one per core)
    #[arg(short, long)]
    jobs: Option<usize>,
    /// Also write a JSON scan report to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the diagram, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(path) = cli.path.as_deref() else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    diagram_cli::run(path, cli.output, cli.jobs, cli.report.as_deref())
}
