//! syntax - 源码解析与类型提取
//!
//! 基于 tree-sitter 的语法树解析，提取类型声明及其结构关系

mod adapters;
mod error;
mod types;

pub use adapters::{adapter_for, JavaAdapter, Language, LanguageAdapter};
pub use error::{Result, SyntaxError};
pub use types::{
    EdgeKind, FieldSignature, Member, MethodSignature, RelationshipEdge, SourceFile,
    TypeDeclaration, TypeRef,
};
