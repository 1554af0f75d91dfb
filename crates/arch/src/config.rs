//! 扫描配置

use std::path::PathBuf;
use syntax::{Language, LanguageAdapter};

/// 默认输出文件，位于当前工作目录
pub const DEFAULT_OUTPUT: &str = "class_diagram.md";

/// 扫描配置
#[derive(Debug, Clone)]
pub struct ArchConfig {
    /// 输出文件 (每次运行覆盖)
    pub output_path: PathBuf,
    /// 源文件扩展名 (不含点)，为空时使用适配器自身的扩展名
    pub extensions: Vec<String>,
    /// 工作线程数: 1 = 顺序执行, 0 = 每核一个
    pub jobs: usize,
    pub language: Language,
}

impl Default for ArchConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            extensions: Vec::new(),
            jobs: 1,
            language: Language::Java,
        }
    }
}

impl ArchConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[doc(hidden)]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("CLASSMAP_OUTPUT") {
            if !v.trim().is_empty() {
                config.output_path = PathBuf::from(v);
            }
        }

        if let Some(v) = lookup("CLASSMAP_EXTENSIONS") {
            let extensions: Vec<String> = v
                .split(',')
                .map(|e| e.trim().trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect();
            if !extensions.is_empty() {
                config.extensions = extensions;
            }
        }

        if let Some(v) = lookup("CLASSMAP_JOBS") {
            if let Ok(jobs) = v.parse() {
                config.jobs = jobs;
            }
        }

        if let Some(v) = lookup("CLASSMAP_LANGUAGE") {
            match v.parse() {
                Ok(language) => config.language = language,
                Err(err) => tracing::warn!("ignoring CLASSMAP_LANGUAGE: {}", err),
            }
        }

        config
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.jobs != 1
    }

    /// 实际使用的扩展名过滤
    pub fn extensions_for(&self, adapter: &dyn LanguageAdapter) -> Vec<String> {
        if self.extensions.is_empty() {
            adapter.extensions().iter().map(|e| e.to_string()).collect()
        } else {
            self.extensions.clone()
        }
    }
}
