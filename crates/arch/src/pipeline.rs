use crate::assembler::{DiagramAssembler, DiagramDocument};
use crate::config::ArchConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::{ArchError, Result};
use crate::scanner::discover;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use syntax::{LanguageAdapter, SourceFile, SyntaxError, TypeDeclaration};

/// 单个文件的处理结果
#[derive(Debug, Default)]
pub struct FileOutcome {
    pub declarations: Vec<TypeDeclaration>,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileOutcome {
    fn failed(diagnostic: Diagnostic) -> Self {
        tracing::warn!("skipping {}", diagnostic);
        Self {
            declarations: Vec::new(),
            diagnostics: vec![diagnostic],
        }
    }
}

/// 读取 + 解析 + 提取一个文件，失败不向上传播
pub fn process_file(path: &Path, adapter: &mut dyn LanguageAdapter) -> FileOutcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => return FileOutcome::failed(Diagnostic::from_read_error(path, &err)),
    };
    let source = SourceFile::new(path, String::from_utf8_lossy(&bytes).into_owned());

    match adapter.declarations(&source) {
        Ok(declarations) => FileOutcome {
            declarations,
            diagnostics: Vec::new(),
        },
        Err(err) => FileOutcome::failed(parse_diagnostic(path, err)),
    }
}

fn parse_diagnostic(path: &Path, err: SyntaxError) -> Diagnostic {
    let message = match err {
        SyntaxError::Parse {
            line,
            column,
            message,
            ..
        } => format!("{}:{}: {}", line, column, message),
        other => other.to_string(),
    };
    Diagnostic::new(path, DiagnosticKind::Parse, message)
}

/// 一次扫描的结果
#[derive(Debug)]
pub struct ScanOutcome {
    pub document: DiagramDocument,
    /// 按路径排序
    pub diagnostics: Vec<Diagnostic>,
    pub files_scanned: usize,
    pub declarations: usize,
}

impl ScanOutcome {
    pub fn report(&self, root: &Path) -> ScanReport {
        ScanReport {
            root: root.to_path_buf(),
            files_scanned: self.files_scanned,
            declarations: self.declarations,
            class_blocks: self.document.class_blocks.len(),
            relationships: self.document.relationships.len(),
            diagnostics: self.diagnostics.clone(),
        }
    }
}

/// JSON 扫描报告
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub files_scanned: usize,
    pub declarations: usize,
    pub class_blocks: usize,
    pub relationships: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanReport {
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// 各 worker 私有的累加器，最后统一归并
#[derive(Default)]
struct Accumulator {
    assembler: DiagramAssembler,
    diagnostics: Vec<Diagnostic>,
    declarations: usize,
}

impl Accumulator {
    fn absorb(mut self, outcome: FileOutcome) -> Self {
        self.declarations += outcome.declarations.len();
        self.assembler.extend(&outcome.declarations);
        self.diagnostics.extend(outcome.diagnostics);
        self
    }

    fn merge(mut self, other: Accumulator) -> Self {
        self.assembler = self.assembler.merge(other.assembler);
        self.diagnostics.extend(other.diagnostics);
        self.declarations += other.declarations;
        self
    }
}

/// 扫描目录并生成类图文档
pub fn scan_directory(root: &Path, config: &ArchConfig) -> Result<ScanOutcome> {
    // 先创建一个适配器，语法不可用时直接失败
    let mut adapter = syntax::adapter_for(config.language)?;

    let files = discover(root, &config.extensions_for(adapter.as_ref()))?;
    tracing::info!(
        "scanning {} {} files under {}",
        files.len(),
        adapter.name(),
        root.display()
    );

    let acc = if config.is_parallel() {
        let language = config.language;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()?;
        // reduce 完成前不读取任何结果；worker 建不起适配器时整次扫描失败
        pool.install(|| {
            files
                .par_iter()
                .map_init(
                    || syntax::adapter_for(language).map_err(|err| err.to_string()),
                    |adapter, path| match adapter {
                        Ok(adapter) => Ok(process_file(path, adapter.as_mut())),
                        Err(message) => Err(ArchError::WorkerSetup(message.clone())),
                    },
                )
                .try_fold(Accumulator::default, |acc, outcome| {
                    outcome.map(|outcome| acc.absorb(outcome))
                })
                .try_reduce(Accumulator::default, |left, right| Ok(left.merge(right)))
        })?
    } else {
        files
            .iter()
            .map(|path| process_file(path, adapter.as_mut()))
            .fold(Accumulator::default(), Accumulator::absorb)
    };

    let Accumulator {
        assembler,
        mut diagnostics,
        declarations,
    } = acc;
    diagnostics.sort();

    tracing::info!(
        "{} declarations, {} class blocks, {} relationships, {} skipped files",
        declarations,
        assembler.block_count(),
        assembler.relationship_count(),
        diagnostics.len()
    );

    Ok(ScanOutcome {
        document: assembler.finish(),
        diagnostics,
        files_scanned: files.len(),
        declarations,
    })
}
