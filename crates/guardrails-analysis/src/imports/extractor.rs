//! Import specifier extraction over tree-sitter syntax trees.
//!
//! Only specifiers that sit in a real import construct count, so imports
//! mentioned in comments or ordinary strings never reach the rule engines.

use std::cell::RefCell;
use std::path::Path;

use tree_sitter::{Node, Parser};

use guardrails_core::errors::ParseError;
use guardrails_core::types::collections::FxHashMap;

use super::error_tolerant::first_error_line;
use super::types::{ImportForm, ParsedImports, RawImport};
use crate::scanner::SourceLanguage;

thread_local! {
    static PARSERS: RefCell<FxHashMap<SourceLanguage, Parser>> = RefCell::new(FxHashMap::default());
}

/// Extract every import specifier from `source`.
///
/// Returns `Err` only when no tree could be produced at all. A damaged tree
/// yields the imports outside the damage plus `syntax_error`.
pub fn extract_imports(
    source: &str,
    path: &Path,
    language: SourceLanguage,
) -> Result<ParsedImports, ParseError> {
    let tree = PARSERS.with(|cell| {
        let mut parsers = cell.borrow_mut();
        if !parsers.contains_key(&language) {
            let mut parser = Parser::new();
            parser
                .set_language(&language.ts_language())
                .map_err(|e| ParseError::GrammarUnavailable {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            parsers.insert(language, parser);
        }
        let parser = parsers
            .get_mut(&language)
            .ok_or_else(|| ParseError::GrammarUnavailable {
                path: path.to_path_buf(),
                message: format!("no {language} parser"),
            })?;
        parser
            .parse(source, None)
            .ok_or_else(|| ParseError::GrammarUnavailable {
                path: path.to_path_buf(),
                message: "parser produced no tree".to_string(),
            })
    })?;

    let root = tree.root_node();
    let bytes = source.as_bytes();
    let mut imports = Vec::new();
    collect_imports(root, bytes, &mut imports);
    imports.sort_by(|a, b| (a.line, &a.specifier).cmp(&(b.line, &b.specifier)));

    let syntax_error = first_error_line(root).map(|line| ParseError::Syntax {
        path: path.to_path_buf(),
        line,
    });

    Ok(ParsedImports {
        imports,
        syntax_error,
    })
}

fn collect_imports(root: Node, source: &[u8], out: &mut Vec<RawImport>) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() {
            continue;
        }
        let claimed = match node.kind() {
            "import_statement" => {
                let source_node = node.child_by_field_name("source").or_else(|| {
                    first_named_child_of_kind(node, "import_require_clause")
                        .and_then(|clause| clause.child_by_field_name("source"))
                });
                push_literal(source_node, source, ImportForm::Import, out)
            }
            "export_statement" => push_literal(
                node.child_by_field_name("source"),
                source,
                ImportForm::ReExport,
                out,
            ),
            "call_expression" => {
                if let Some(form) = call_form(node, source) {
                    let argument = node
                        .child_by_field_name("arguments")
                        .and_then(first_named_child);
                    push_literal(argument, source, form, out);
                }
                false
            }
            _ => false,
        };
        if claimed {
            continue;
        }
        let mut cursor = node.walk();
        stack.extend(node.children(&mut cursor));
    }
}

fn call_form(call: Node, source: &[u8]) -> Option<ImportForm> {
    let function = call.child_by_field_name("function")?;
    match function.kind() {
        "import" => Some(ImportForm::Dynamic),
        "identifier" if function.utf8_text(source).ok()? == "require" => Some(ImportForm::Require),
        _ => None,
    }
}

/// Push the literal in `node` if it is a plain string. Returns whether an
/// import was recorded.
fn push_literal(
    node: Option<Node>,
    source: &[u8],
    form: ImportForm,
    out: &mut Vec<RawImport>,
) -> bool {
    let Some(node) = node else {
        return false;
    };
    let Some(specifier) = string_value(node, source) else {
        return false;
    };
    if specifier.is_empty() {
        return false;
    }
    out.push(RawImport {
        specifier,
        line: node.start_position().row as u32 + 1,
        form,
    });
    true
}

fn string_value(node: Node, source: &[u8]) -> Option<String> {
    match node.kind() {
        "string" => {}
        "template_string" if first_named_child_of_kind(node, "template_substitution").is_none() => {}
        _ => return None,
    }
    let text = node.utf8_text(source).ok()?;
    if text.len() < 2 {
        return None;
    }
    Some(text[1..text.len() - 1].to_string())
}

fn first_named_child(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    let child = node.named_children(&mut cursor).next();
    child
}

fn first_named_child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let child = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    child
}
