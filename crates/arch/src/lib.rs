//! arch - 类图生成
//!
//! 文件发现、类型聚合、Mermaid classDiagram 渲染

mod assembler;
mod config;
mod diagnostics;
mod error;
mod mermaid;
mod pipeline;
mod scanner;
mod writer;

pub use assembler::{DiagramAssembler, DiagramDocument};
pub use config::ArchConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{ArchError, Result};
pub use mermaid::MermaidGenerator;
pub use pipeline::{process_file, scan_directory, FileOutcome, ScanOutcome, ScanReport};
pub use scanner::discover;
pub use writer::DiagramWriter;
