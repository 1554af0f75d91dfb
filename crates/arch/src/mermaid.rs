use crate::assembler::DiagramDocument;
use syntax::{EdgeKind, RelationshipEdge, TypeDeclaration};

const FENCE_OPEN: &str = "```mermaid";
const FENCE_CLOSE: &str = "```";
const KEYWORD: &str = "classDiagram";

/// Mermaid classDiagram 生成器
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// 渲染单个类块
    ///
    /// 方法在前，字段在后，各自已按名字升序
    pub fn class_block(declaration: &TypeDeclaration) -> String {
        let mut lines = vec![format!("class {} {{", declaration.name)];
        for method in &declaration.methods {
            lines.push(format!("  + {}()", method.name));
        }
        for field in &declaration.fields {
            lines.push(format!("  - {}", field.name));
        }
        lines.push("}".to_string());
        lines.join("\n")
    }

    /// 渲染关系行
    pub fn relationship_line(edge: &RelationshipEdge) -> String {
        let arrow = match edge.kind {
            EdgeKind::Inheritance => "--|>",
            EdgeKind::Association => "-->",
        };
        format!("{} {} {}", edge.source, arrow, edge.target)
    }

    /// 生成完整文档，以换行结尾
    pub fn generate(document: &DiagramDocument) -> String {
        let mut lines = vec![FENCE_OPEN.to_string(), KEYWORD.to_string()];
        lines.extend(document.class_blocks.iter().cloned());
        lines.extend(document.relationships.iter().cloned());
        lines.push(FENCE_CLOSE.to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntax::{Member, TypeRef};

    #[test]
    fn test_class_block_orders_methods_before_fields() {
        let decl = TypeDeclaration::new("Account")
            .with_member(Member::Field {
                names: vec!["owner".into(), "balance".into()],
                type_ref: Some(TypeRef::Primitive("long".into())),
            })
            .with_member(Member::Method { name: "withdraw".into() })
            .with_member(Member::Method { name: "deposit".into() });

        assert_eq!(
            MermaidGenerator::class_block(&decl),
            "class Account {\n  + deposit()\n  + withdraw()\n  - balance\n  - owner\n}"
        );
    }

    #[test]
    fn test_empty_class_block_keeps_header_and_closer() {
        let decl = TypeDeclaration::new("Marker");
        assert_eq!(MermaidGenerator::class_block(&decl), "class Marker {\n}");
    }

    #[test]
    fn test_relationship_arrows() {
        let inherit = RelationshipEdge::new("B", "C", EdgeKind::Inheritance);
        let assoc = RelationshipEdge::new("A", "B", EdgeKind::Association);
        assert_eq!(MermaidGenerator::relationship_line(&inherit), "B --|> C");
        assert_eq!(MermaidGenerator::relationship_line(&assoc), "A --> B");
    }

    #[test]
    fn test_generate_empty_document() {
        let doc = DiagramDocument::default();
        assert_eq!(
            MermaidGenerator::generate(&doc),
            "```mermaid\nclassDiagram\n```\n"
        );
    }

    #[test]
    fn test_generate_blocks_before_relationships() {
        let doc = DiagramDocument {
            class_blocks: vec!["class A {\n}".into()],
            relationships: vec!["A --|> Base".into()],
        };
        assert_eq!(
            MermaidGenerator::generate(&doc),
            "```mermaid\nclassDiagram\nclass A {\n}\nA --|> Base\n```\n"
        );
    }
}
