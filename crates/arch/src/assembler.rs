use crate::mermaid::MermaidGenerator;
use serde::Serialize;
use std::collections::BTreeSet;
use syntax::{RelationshipEdge, TypeDeclaration};

/// 聚合后的类图文档，两组内容均已去重并按字典序排列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagramDocument {
    pub class_blocks: Vec<String>,
    pub relationships: Vec<String>,
}

impl DiagramDocument {
    pub fn is_empty(&self) -> bool {
        self.class_blocks.is_empty() && self.relationships.is_empty()
    }
}

/// 类图聚合器
///
/// 以渲染后的字符串为键去重，渲染结果相同的两个声明视为同一节点。
#[derive(Debug, Default)]
pub struct DiagramAssembler {
    class_blocks: BTreeSet<String>,
    relationships: BTreeSet<String>,
}

impl DiagramAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入一个声明及其隐含的关系边
    pub fn add_declaration(&mut self, declaration: &TypeDeclaration) {
        self.class_blocks
            .insert(MermaidGenerator::class_block(declaration));
        for edge in declaration.edges() {
            self.add_edge(&edge);
        }
    }

    pub fn add_edge(&mut self, edge: &RelationshipEdge) {
        self.relationships
            .insert(MermaidGenerator::relationship_line(edge));
    }

    pub fn extend<'a, I>(&mut self, declarations: I)
    where
        I: IntoIterator<Item = &'a TypeDeclaration>,
    {
        for declaration in declarations {
            self.add_declaration(declaration);
        }
    }

    /// 合并另一个聚合器 (并行扫描的归并步骤)
    pub fn merge(mut self, other: DiagramAssembler) -> Self {
        self.class_blocks.extend(other.class_blocks);
        self.relationships.extend(other.relationships);
        self
    }

    pub fn block_count(&self) -> usize {
        self.class_blocks.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    pub fn finish(self) -> DiagramDocument {
        DiagramDocument {
            class_blocks: self.class_blocks.into_iter().collect(),
            relationships: self.relationships.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntax::{EdgeKind, Member, TypeRef};

    fn class_with_field(name: &str, field: &str, field_type: &str) -> TypeDeclaration {
        TypeDeclaration::new(name).with_member(Member::Field {
            names: vec![field.to_string()],
            type_ref: Some(TypeRef::Reference(field_type.to_string())),
        })
    }

    #[test]
    fn test_identical_declarations_deduplicate() {
        let mut assembler = DiagramAssembler::new();
        let a = class_with_field("A", "b", "B");
        assembler.add_declaration(&a);
        assembler.add_declaration(&a.clone());

        assert_eq!(assembler.block_count(), 1);
        assert_eq!(assembler.relationship_count(), 1);
    }

    #[test]
    fn test_same_name_different_members_are_distinct_blocks() {
        let mut assembler = DiagramAssembler::new();
        assembler.add_declaration(&TypeDeclaration::new("Util"));
        assembler.add_declaration(
            &TypeDeclaration::new("Util").with_member(Member::Method { name: "run".into() }),
        );

        assert_eq!(assembler.block_count(), 2);
    }

    #[test]
    fn test_finish_sorts_independent_of_insert_order() {
        let decls = vec![
            TypeDeclaration::new("Zebra").with_supertype("Animal"),
            class_with_field("Apple", "seed", "Seed"),
            TypeDeclaration::new("Mango"),
        ];

        let mut forward = DiagramAssembler::new();
        forward.extend(&decls);
        let mut backward = DiagramAssembler::new();
        backward.extend(decls.iter().rev());

        let doc = forward.finish();
        assert_eq!(doc, backward.finish());

        let headers: Vec<_> = doc
            .class_blocks
            .iter()
            .map(|b| b.lines().next().unwrap())
            .collect();
        assert_eq!(headers, vec!["class Apple {", "class Mango {", "class Zebra {"]);
        assert_eq!(doc.relationships, vec!["Apple --> Seed", "Zebra --|> Animal"]);
    }

    #[test]
    fn test_relationships_sort_on_full_line() {
        let mut assembler = DiagramAssembler::new();
        assembler.add_edge(&RelationshipEdge::new("B", "C", EdgeKind::Inheritance));
        assembler.add_edge(&RelationshipEdge::new("A", "B", EdgeKind::Association));
        assembler.add_edge(&RelationshipEdge::new("A", "B", EdgeKind::Inheritance));

        let doc = assembler.finish();
        assert_eq!(doc.relationships, vec!["A --> B", "A --|> B", "B --|> C"]);
    }

    #[test]
    fn test_merge_unions_both_sides() {
        let mut left = DiagramAssembler::new();
        left.add_declaration(&TypeDeclaration::new("A"));
        left.add_declaration(&TypeDeclaration::new("Shared"));
        let mut right = DiagramAssembler::new();
        right.add_declaration(&TypeDeclaration::new("B").with_supertype("A"));
        right.add_declaration(&TypeDeclaration::new("Shared"));

        let doc = left.merge(right).finish();
        assert_eq!(doc.class_blocks.len(), 3);
        assert_eq!(doc.relationships, vec!["B --|> A"]);
    }

    #[test]
    fn test_empty_assembler_yields_empty_document() {
        assert!(DiagramAssembler::new().finish().is_empty());
    }
}
