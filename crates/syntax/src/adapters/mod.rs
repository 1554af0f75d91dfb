mod java;

pub use java::JavaAdapter;

use crate::error::{Result, SyntaxError};
use crate::types::{SourceFile, TypeDeclaration};
use std::str::FromStr;
use tree_sitter::Tree;

/// 语言适配器 trait
///
/// `parse` 是外部解析器的边界，`extract` 在语法树上提取类型声明。
pub trait LanguageAdapter: Send {
    /// 语言名
    fn name(&self) -> &'static str;

    /// 识别的源文件扩展名 (不含点)
    fn extensions(&self) -> &'static [&'static str];

    /// 解析源文件，语法错误时返回 `SyntaxError::Parse`
    fn parse(&mut self, source: &SourceFile) -> Result<Tree>;

    /// 提取语法树中的全部类型声明 (含嵌套)
    fn extract(&self, tree: &Tree, source: &SourceFile) -> Vec<TypeDeclaration>;

    /// 解析 + 提取
    fn declarations(&mut self, source: &SourceFile) -> Result<Vec<TypeDeclaration>> {
        let tree = self.parse(source)?;
        Ok(self.extract(&tree, source))
    }
}

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Java,
}

impl FromStr for Language {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            other => Err(SyntaxError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// 为语言创建适配器
pub fn adapter_for(language: Language) -> Result<Box<dyn LanguageAdapter>> {
    match language {
        Language::Java => Ok(Box::new(JavaAdapter::new()?)),
    }
}
