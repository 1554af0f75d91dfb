use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot read directory {path}: {source}")]
    Discover {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Syntax error: {0}")]
    Syntax(#[from] syntax::SyntaxError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("worker could not create a language adapter: {0}")]
    WorkerSetup(String),
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, ArchError>;
