use super::LanguageAdapter;
use crate::error::{Result, SyntaxError};
use crate::types::{Member, SourceFile, TypeDeclaration, TypeRef};
use tree_sitter::{Node, Parser, Tree};

/// 被视为类型声明的节点
const TYPE_DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
];

/// 错误信息中源码片段的最大长度
const ERROR_SNIPPET_LEN: usize = 40;

/// Java 语言适配器 (tree-sitter-java)
pub struct JavaAdapter {
    parser: Parser,
}

impl JavaAdapter {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_java::language();
        parser.set_language(&language)?;
        Ok(Self { parser })
    }

    /// 显式栈遍历，深层表达式链不会耗尽线程栈
    fn collect_declarations(root: Node, content: &str, declarations: &mut Vec<TypeDeclaration>) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if TYPE_DECLARATION_KINDS.contains(&node.kind()) {
                if let Some(declaration) = Self::extract_declaration(node, content) {
                    declarations.push(declaration);
                }
            }

            // 嵌套类、局部类都在子树里
            stack.extend(node.children(&mut node.walk()));
        }
    }

    fn extract_declaration(node: Node, content: &str) -> Option<TypeDeclaration> {
        let name_node = node.child_by_field_name("name")?;
        let mut declaration = TypeDeclaration::new(&content[name_node.byte_range()]);

        for supertype in Self::supertypes(node, content) {
            declaration.supertype_names.insert(supertype);
        }

        let mut members = Vec::new();
        if node.kind() == "record_declaration" {
            if let Some(parameters) = node.child_by_field_name("parameters") {
                Self::collect_record_components(parameters, content, &mut members);
            }
        }
        if let Some(body) = node.child_by_field_name("body") {
            Self::collect_members(body, content, &mut members);
        }

        for member in members {
            declaration.add_member(member);
        }

        Some(declaration)
    }

    /// 直接父类型: superclass / super_interfaces / extends_interfaces
    fn supertypes(node: Node, content: &str) -> Vec<String> {
        let mut names = Vec::new();
        for child in node.children(&mut node.walk()) {
            match child.kind() {
                "superclass" => {
                    names.extend(
                        child
                            .named_children(&mut child.walk())
                            .filter_map(|t| Self::type_ref(t, content))
                            .map(Self::type_name),
                    );
                }
                "super_interfaces" | "extends_interfaces" => {
                    let type_list = child
                        .named_children(&mut child.walk())
                        .find(|c| c.kind() == "type_list");
                    if let Some(type_list) = type_list {
                        names.extend(
                            type_list
                                .named_children(&mut type_list.walk())
                                .filter_map(|t| Self::type_ref(t, content))
                                .map(Self::type_name),
                        );
                    }
                }
                _ => {}
            }
        }
        names
    }

    /// 类型体的直接成员，嵌套类型不算
    fn collect_members(body: Node, content: &str, members: &mut Vec<Member>) {
        for child in body.named_children(&mut body.walk()) {
            match child.kind() {
                "method_declaration" => {
                    if let Some(name_node) = child.child_by_field_name("name") {
                        members.push(Member::Method {
                            name: content[name_node.byte_range()].to_string(),
                        });
                    }
                }
                "field_declaration" | "constant_declaration" => {
                    members.push(Self::field_member(child, content));
                }
                "enum_constant" => {
                    if let Some(name_node) = child.child_by_field_name("name") {
                        members.push(Member::Field {
                            names: vec![content[name_node.byte_range()].to_string()],
                            type_ref: None,
                        });
                    }
                }
                "enum_body_declarations" => Self::collect_members(child, content, members),
                _ => {}
            }
        }
    }

    fn field_member(node: Node, content: &str) -> Member {
        let type_ref = node
            .child_by_field_name("type")
            .and_then(|t| Self::type_ref(t, content));

        let names = node
            .children(&mut node.walk())
            .filter(|c| c.kind() == "variable_declarator")
            .filter_map(|d| d.child_by_field_name("name"))
            .map(|n| content[n.byte_range()].to_string())
            .collect();

        Member::Field { names, type_ref }
    }

    fn collect_record_components(parameters: Node, content: &str, members: &mut Vec<Member>) {
        for parameter in parameters.named_children(&mut parameters.walk()) {
            if parameter.kind() != "formal_parameter" {
                continue;
            }
            if let Some(name_node) = parameter.child_by_field_name("name") {
                members.push(Member::Field {
                    names: vec![content[name_node.byte_range()].to_string()],
                    type_ref: parameter
                        .child_by_field_name("type")
                        .and_then(|t| Self::type_ref(t, content)),
                });
            }
        }
    }

    /// 类型节点 -> 简单名
    ///
    /// `List<B>` 取 `List`，`java.util.Map` 取 `Map`，`B[]` 取 `B`
    fn type_ref(node: Node, content: &str) -> Option<TypeRef> {
        match node.kind() {
            "integral_type" | "floating_point_type" | "boolean_type" | "void_type" => {
                Some(TypeRef::Primitive(content[node.byte_range()].to_string()))
            }
            "type_identifier" => Some(TypeRef::Reference(content[node.byte_range()].to_string())),
            "scoped_type_identifier" => node
                .named_children(&mut node.walk())
                .filter(|c| c.kind() == "type_identifier")
                .last()
                .map(|c| TypeRef::Reference(content[c.byte_range()].to_string())),
            "generic_type" => node
                .named_child(0)
                .and_then(|outer| Self::type_ref(outer, content)),
            "array_type" => node
                .child_by_field_name("element")
                .and_then(|element| Self::type_ref(element, content)),
            "annotated_type" => {
                let count = node.named_child_count();
                node.named_child(count.checked_sub(1)?)
                    .and_then(|inner| Self::type_ref(inner, content))
            }
            _ => None,
        }
    }

    fn type_name(type_ref: TypeRef) -> String {
        match type_ref {
            TypeRef::Primitive(name) | TypeRef::Reference(name) => name,
        }
    }

    /// 第一个 ERROR / MISSING 节点: (行, 列, 描述)，1 起始
    fn first_error(root: Node, content: &str) -> Option<(usize, usize, String)> {
        // 先序遍历，子节点逆序入栈以保持源码顺序
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.is_missing() {
                let pos = node.start_position();
                return Some((pos.row + 1, pos.column + 1, format!("missing `{}`", node.kind())));
            }
            if node.is_error() {
                let pos = node.start_position();
                let snippet: String = content
                    .get(node.byte_range())
                    .unwrap_or_default()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .chars()
                    .take(ERROR_SNIPPET_LEN)
                    .collect();
                return Some((pos.row + 1, pos.column + 1, format!("unexpected `{}`", snippet)));
            }

            let flagged: Vec<Node> = node
                .children(&mut node.walk())
                .filter(|c| c.has_error() || c.is_missing())
                .collect();
            stack.extend(flagged.into_iter().rev());
        }
        None
    }
}

impl LanguageAdapter for JavaAdapter {
    fn name(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn parse(&mut self, source: &SourceFile) -> Result<Tree> {
        let tree = self
            .parser
            .parse(source.contents.as_bytes(), None)
            .ok_or_else(|| SyntaxError::Cancelled(source.path.clone()))?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, column, message) = Self::first_error(root, &source.contents)
                .unwrap_or_else(|| (1, 1, "syntax error".to_string()));
            return Err(SyntaxError::Parse {
                path: source.path.clone(),
                line,
                column,
                message,
            });
        }

        Ok(tree)
    }

    fn extract(&self, tree: &Tree, source: &SourceFile) -> Vec<TypeDeclaration> {
        let mut declarations = Vec::new();
        Self::collect_declarations(tree.root_node(), &source.contents, &mut declarations);
        tracing::debug!(
            "{}: {} type declarations",
            source.path.display(),
            declarations.len()
        );
        declarations
    }
}
