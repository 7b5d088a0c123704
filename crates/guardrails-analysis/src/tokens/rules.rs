//! Line-based token rules.

use std::ops::Range;

use regex::Regex;

use guardrails_core::config::TokenConfig;
use guardrails_core::errors::ConfigError;
use guardrails_core::types::collections::FxHashSet;

use super::types::{DesignTokenViolation, TokenViolationKind};
use crate::scanner::PathFilter;

const TAG_PATTERN: &str = r"<([A-Za-z][A-Za-z0-9]*)(?:[\s/>]|$)";
const HEX_COLOR_PATTERN: &str = r"#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{3,4})\b";
const FUNCTIONAL_COLOR_PATTERN: &str = r"\b(?:rgba?|hsla?)\(\s*\d[^)]*\)";
const PIXEL_PATTERN: &str = r"\b\d+(?:\.\d+)?px\b";

/// Compiled token rules. Pure: `scan_file` depends only on its arguments.
#[derive(Debug, Clone)]
pub struct TokenRules {
    forbidden_elements: FxHashSet<String>,
    raw_elements_allowed: PathFilter,
    token_refs: Vec<Regex>,
    tag: Regex,
    hex_color: Regex,
    functional_color: Regex,
    pixel: Regex,
}

impl TokenRules {
    pub fn compile(config: &TokenConfig) -> Result<Self, ConfigError> {
        let token_refs = config
            .effective_token_patterns()
            .iter()
            .map(|p| compile("tokens.token_patterns", p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            forbidden_elements: config.effective_forbidden_elements().into_iter().collect(),
            raw_elements_allowed: PathFilter::new(
                "tokens.raw_elements_allowed",
                &config.effective_raw_elements_allowed(),
            )?,
            token_refs,
            tag: compile("tokens", TAG_PATTERN)?,
            hex_color: compile("tokens", HEX_COLOR_PATTERN)?,
            functional_color: compile("tokens", FUNCTIONAL_COLOR_PATTERN)?,
            pixel: compile("tokens", PIXEL_PATTERN)?,
        })
    }

    /// All violations in one file, in line order.
    pub fn scan_file(&self, relative_path: &str, text: &str) -> Vec<DesignTokenViolation> {
        let check_elements = !self.raw_elements_allowed.is_match(relative_path);
        let mut out = Vec::new();
        let mut in_block_comment = false;

        for (index, line) in text.lines().enumerate() {
            let code = mask_comments(line, &mut in_block_comment);
            if code.trim().is_empty() {
                continue;
            }

            let line_no = index as u32 + 1;
            let mut push = |kind: TokenViolationKind, range: Range<usize>, message: String| {
                out.push(DesignTokenViolation {
                    file: relative_path.to_string(),
                    line: line_no,
                    column: line[..range.start].chars().count() as u32 + 1,
                    kind,
                    snippet: line[range].to_string(),
                    message,
                });
            };

            if check_elements {
                for caps in self.tag.captures_iter(&code) {
                    let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                        continue;
                    };
                    if !self.forbidden_elements.contains(name.as_str())
                        || !tag_position(&code, whole.start())
                    {
                        continue;
                    }
                    push(
                        TokenViolationKind::RawElement,
                        whole.start()..name.end(),
                        format!(
                            "Raw <{}> element; use an approved primitive instead",
                            name.as_str()
                        ),
                    );
                }
            }

            let refs = self.token_spans(&code);
            let wrapped = |r: &Range<usize>| refs.iter().any(|s| s.start <= r.start && r.end <= s.end);

            let hex = self
                .hex_color
                .find_iter(&code)
                .filter(|m| hex_position(&code, m.start()));
            let functional = self.functional_color.find_iter(&code);
            let mut colors: Vec<Range<usize>> = hex.chain(functional).map(|m| m.range()).collect();
            colors.sort_by_key(|r| r.start);
            for range in colors.into_iter().filter(|r| !wrapped(r)) {
                let literal = line[range.clone()].to_string();
                push(
                    TokenViolationKind::InlineColor,
                    range,
                    format!("Inline color {literal}; use a color token instead"),
                );
            }

            for m in self.pixel.find_iter(&code) {
                let range = m.range();
                if wrapped(&range) {
                    continue;
                }
                push(
                    TokenViolationKind::InlinePixelValue,
                    range,
                    format!("Inline pixel value {}; use a spacing or size token instead", m.as_str()),
                );
            }
        }
        out
    }

    fn token_spans(&self, line: &str) -> Vec<Range<usize>> {
        self.token_refs
            .iter()
            .flat_map(|re| re.find_iter(line).map(|m| m.range()))
            .collect()
    }
}

fn compile(field: &str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("invalid pattern '{pattern}': {e}"),
    })
}

/// Blank out comment text in `line`, keeping byte offsets so columns and
/// snippets still index the original. `in_block` carries an open `/* */`
/// across lines. A `//` comment runs to the end of the line; quoted text is
/// never treated as a comment opener.
fn mask_comments(line: &str, in_block: &mut bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut chars = line.char_indices();

    while let Some((i, c)) = chars.next() {
        if *in_block {
            if c == '*' && line[i + 1..].starts_with('/') {
                chars.next();
                *in_block = false;
                out.push_str("  ");
            } else {
                blank(&mut out, c);
            }
            continue;
        }
        match quote {
            Some(q) => {
                if c == '\\' {
                    out.push(c);
                    if let Some((_, escaped)) = chars.next() {
                        out.push(escaped);
                    }
                    continue;
                }
                if c == q {
                    quote = None;
                }
                out.push(c);
            }
            None => match c {
                '\'' | '"' | '`' => {
                    quote = Some(c);
                    out.push(c);
                }
                '/' if line[i + 1..].starts_with('*') => {
                    chars.next();
                    *in_block = true;
                    out.push_str("  ");
                }
                '/' if line[i + 1..].starts_with('/') => {
                    line[i..].chars().for_each(|c| blank(&mut out, c));
                    break;
                }
                _ => out.push(c),
            },
        }
    }
    out
}

fn blank(out: &mut String, c: char) {
    out.extend(std::iter::repeat(' ').take(c.len_utf8()));
}

/// `<` opens a tag unless it follows an identifier or a closing bracket
/// (generics, comparisons).
fn tag_position(line: &str, start: usize) -> bool {
    match line[..start].chars().next_back() {
        Some(c) => !(c.is_alphanumeric() || matches!(c, '_' | '$' | ')' | ']')),
        None => true,
    }
}

/// Hex colours are not preceded by `&` (entities) or a word character.
fn hex_position(line: &str, start: usize) -> bool {
    match line[..start].chars().next_back() {
        Some(c) => !(c == '&' || c.is_alphanumeric() || c == '_'),
        None => true,
    }
}
