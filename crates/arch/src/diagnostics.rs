use serde::Serialize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// 诊断种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// 文件在发现后消失或不可读
    FileNotFound,
    /// 解析器拒绝了文件内容
    Parse,
    /// 其它读取错误
    Io,
    /// 输出文件写入失败
    OutputWrite,
}

/// 单个文件的诊断，不进入类图
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(path: &Path, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
            message: message.into(),
        }
    }

    /// 按 io::ErrorKind 归类读取错误
    pub fn from_read_error(path: &Path, err: &io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                DiagnosticKind::FileNotFound
            }
            _ => DiagnosticKind::Io,
        };
        Self::new(path, kind, err.to_string())
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticKind::FileNotFound => "file not found",
            DiagnosticKind::Parse => "parse error",
            DiagnosticKind::Io => "io error",
            DiagnosticKind::OutputWrite => "output write error",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.kind, self.path.display(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_classification() {
        let path = Path::new("A.java");
        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let other = io::Error::new(io::ErrorKind::Other, "disk on fire");

        assert_eq!(Diagnostic::from_read_error(path, &missing).kind, DiagnosticKind::FileNotFound);
        assert_eq!(Diagnostic::from_read_error(path, &denied).kind, DiagnosticKind::FileNotFound);
        assert_eq!(Diagnostic::from_read_error(path, &other).kind, DiagnosticKind::Io);
    }

    #[test]
    fn test_display_includes_path() {
        let diag = Diagnostic::new(Path::new("src/A.java"), DiagnosticKind::Parse, "1:5: missing `;`");
        assert_eq!(diag.to_string(), "parse error: src/A.java: 1:5: missing `;`");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&DiagnosticKind::FileNotFound).unwrap();
        assert_eq!(json, "\"file_not_found\"");
    }
}
