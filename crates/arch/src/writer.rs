use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 类图输出: 控制台 + 固定文件
pub struct DiagramWriter {
    output_path: PathBuf,
}

impl DiagramWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 先写控制台，再覆盖写文件
    ///
    /// 文件写入失败只返回诊断，不影响已经输出的控制台内容
    pub fn emit<W: Write>(&self, artifact: &str, console: &mut W) -> Result<Option<Diagnostic>> {
        console.write_all(artifact.as_bytes())?;
        console.flush()?;

        match fs::write(&self.output_path, artifact) {
            Ok(()) => {
                tracing::info!("diagram written to {}", self.output_path.display());
                Ok(None)
            }
            Err(err) => {
                let diagnostic =
                    Diagnostic::new(&self.output_path, DiagnosticKind::OutputWrite, err.to_string());
                tracing::error!("{}", diagnostic);
                Ok(Some(diagnostic))
            }
        }
    }
}
