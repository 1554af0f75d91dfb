use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyntaxError {
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("parser cancelled before producing a tree: {0}")]
    Cancelled(PathBuf),
    #[error("grammar unavailable: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
