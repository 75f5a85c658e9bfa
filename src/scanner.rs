//! Declaration scanning: a single pass over the filtered token stream.
//!
//! No parse tree is built. The classifier walks the token slice by index,
//! tracks the namespace currently in effect, and emits a construct for every
//! named declaration keyword. One-token lookbehind rules out anonymous
//! classes (`new class ...`), and a declaration keyword not followed by an
//! identifier is skipped rather than guessed at, which also rules out
//! `Foo::class` references and `new readonly class (...)` expressions.

use crate::construct::{Construct, ConstructKind};
use crate::lexer::{significant, tokenize, Token, TokenKind};

/// The namespace separator of the scanned language.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Grammar capabilities of the scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Recognize `enum` declarations (PHP 8.1+). When off, `enum` tokens
    /// are ordinary non-matching tokens.
    pub enum_support: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { enum_support: true }
    }
}

/// Scan one file's source text and return its declarations in textual order.
pub fn scan(source: &str, options: &ScanOptions) -> Vec<Construct> {
    let tokens = significant(tokenize(source));
    let mut namespace = String::new();
    let mut constructs = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        if token.kind == TokenKind::Namespace {
            // A later namespace declaration replaces the earlier one.
            namespace = collect_namespace(&tokens, index + 1);
            continue;
        }

        let Some(kind) = declaration_kind(token.kind, options) else {
            continue;
        };

        if index > 0 && tokens[index - 1].kind == TokenKind::New {
            continue;
        }

        match tokens.get(index + 1) {
            Some(name) if name.kind == TokenKind::Identifier => {
                constructs.push(Construct::new(qualify(&namespace, &name.text), kind));
            }
            // No simple name follows: anonymous or malformed, skip.
            _ => {}
        }
    }

    constructs
}

fn declaration_kind(token: TokenKind, options: &ScanOptions) -> Option<ConstructKind> {
    match token {
        TokenKind::Class => Some(ConstructKind::Class),
        TokenKind::Interface => Some(ConstructKind::Interface),
        TokenKind::Trait => Some(ConstructKind::Trait),
        TokenKind::Enum if options.enum_support => Some(ConstructKind::Enum),
        _ => None,
    }
}

/// Collect the qualified name following a `namespace` keyword.
///
/// Fast path: the lexer pre-joined the name into one qualified-name token.
/// Fallback: concatenate alternating identifier and separator tokens until
/// anything else (brace, semicolon) ends the name. Returns `""` for the
/// global namespace (`namespace;` or `namespace { ... }`).
fn collect_namespace(tokens: &[Token], start: usize) -> String {
    if let Some(token) = tokens.get(start) {
        if token.kind == TokenKind::QualifiedName {
            return token.text.clone();
        }
    }

    let mut name = String::new();
    for token in &tokens[start.min(tokens.len())..] {
        match token.kind {
            TokenKind::Identifier | TokenKind::NsSeparator => name.push_str(&token.text),
            _ => break,
        }
    }
    name
}

fn qualify(namespace: &str, simple_name: &str) -> String {
    format!("{namespace}{NAMESPACE_SEPARATOR}{simple_name}")
        .trim_matches(NAMESPACE_SEPARATOR)
        .to_string()
}
