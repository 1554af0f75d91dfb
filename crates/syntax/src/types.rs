use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// 源文件 - 路径 + 原始内容
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// 方法签名 - 只保留名字，参数与返回值被丢弃
///
/// 同名重载因此合并为一条。这是已知的近似，不是类型解析。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
}

/// 字段签名
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldSignature {
    pub name: String,
}

/// 字段声明的类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeRef {
    /// 基本类型: int, boolean, ...
    Primitive(String),
    /// 引用类型的简单名 (泛型容器取外层名)
    Reference(String),
}

/// 类型体中的成员
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Member {
    Method { name: String },
    /// 一条字段语句可以声明多个变量，共享同一类型
    Field {
        names: Vec<String>,
        type_ref: Option<TypeRef>,
    },
}

/// 类型声明 (class / interface / enum / record)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub methods: BTreeSet<MethodSignature>,
    pub fields: BTreeSet<FieldSignature>,
    /// 直接父类型 (extends / implements)，不传递
    pub supertype_names: BTreeSet<String>,
    /// 引用类型字段的类型名
    pub field_type_names: BTreeSet<String>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_supertype(mut self, name: impl Into<String>) -> Self {
        self.supertype_names.insert(name.into());
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.add_member(member);
        self
    }

    /// 按成员种类归入方法或字段
    pub fn add_member(&mut self, member: Member) {
        match member {
            Member::Method { name } => {
                self.methods.insert(MethodSignature { name });
            }
            Member::Field { names, type_ref } => {
                for name in names {
                    self.fields.insert(FieldSignature { name });
                }
                match type_ref {
                    Some(TypeRef::Reference(type_name)) => {
                        self.field_type_names.insert(type_name);
                    }
                    Some(TypeRef::Primitive(_)) | None => {}
                }
            }
        }
    }

    /// 该声明隐含的所有关系边
    pub fn edges(&self) -> Vec<RelationshipEdge> {
        let inheritance = self
            .supertype_names
            .iter()
            .map(|target| RelationshipEdge::new(&self.name, target, EdgeKind::Inheritance));
        let association = self
            .field_type_names
            .iter()
            .map(|target| RelationshipEdge::new(&self.name, target, EdgeKind::Association));
        inheritance.chain(association).collect()
    }
}

/// 关系种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// 继承 / 实现，两者不区分
    Inheritance,
    /// 字段类型关联
    Association,
}

/// 有向关系边
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

impl RelationshipEdge {
    pub fn new(source: &str, target: &str, kind: EdgeKind) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            kind,
        }
    }
}
