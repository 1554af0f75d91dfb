//! diagram command - scan, render, emit

use arch::{scan_directory, ArchConfig, DiagramWriter, MermaidGenerator};
use std::path::{Path, PathBuf};

pub fn run(
    path: &Path,
    output: Option<PathBuf>,
    jobs: Option<usize>,
    report: Option<&Path>,
) -> anyhow::Result<()> {
    let mut config = ArchConfig::from_env();
    if let Some(output) = output {
        config = config.with_output(output);
    }
    if let Some(jobs) = jobs {
        config = config.with_jobs(jobs);
    }

    let outcome = scan_directory(path, &config)?;
    let artifact = MermaidGenerator::generate(&outcome.document);

    let writer = DiagramWriter::new(&config.output_path);
    let write_failure = writer.emit(&artifact, &mut std::io::stdout().lock())?;

    let mut diagnostics = outcome.diagnostics.clone();
    diagnostics.extend(write_failure);

    if !diagnostics.is_empty() {
        eprintln!("\n{} problem(s):", diagnostics.len());
        for diagnostic in &diagnostics {
            eprintln!("  {}", diagnostic);
        }
    }

    if let Some(report_path) = report {
        let mut scan_report = outcome.report(path);
        scan_report.diagnostics = diagnostics;
        scan_report.write_json(report_path)?;
        eprintln!("Report saved to: {}", report_path.display());
    }

    Ok(())
}
