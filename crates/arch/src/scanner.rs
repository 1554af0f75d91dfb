use crate::error::{ArchError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 递归收集扩展名匹配的源文件
///
/// 根路径不是目录时返回空列表。顺序不保证。
pub fn discover(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files(root, extensions, &mut files)?;
    tracing::debug!("discovered {} files under {}", files.len(), root.display());
    Ok(files)
}

fn collect_files(dir: &Path, extensions: &[String], files: &mut Vec<PathBuf>) -> Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    let entries = fs::read_dir(dir).map_err(|source| ArchError::Discover {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let path = entry?.path();

        if path.is_dir() {
            collect_files(&path, extensions, files)?;
        } else if has_extension(&path, extensions) {
            files.push(path);
        }
    }

    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|ext| ext == e))
        .unwrap_or(false)
}
