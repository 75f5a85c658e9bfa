//! Minimal PHP lexer.
//!
//! Produces a flat token stream good enough for declaration scanning: it
//! keeps keyword adjacency intact while swallowing comments, strings,
//! heredocs, and inline HTML whole so their contents can never be mistaken
//! for declarations. It is not a full PHP tokenizer and never fails;
//! malformed source yields a best-effort stream.

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Text outside `<?php ... ?>` regions.
    InlineHtml,
    OpenTag,
    CloseTag,
    Whitespace,
    Comment,
    DocComment,
    /// The `namespace` keyword.
    Namespace,
    /// The `class` keyword.
    Class,
    /// The `interface` keyword.
    Interface,
    /// The `trait` keyword.
    Trait,
    /// The `enum` keyword.
    Enum,
    /// The `new` keyword.
    New,
    /// A bare single-part name (including keywords we do not special-case).
    Identifier,
    /// A backslash-joined name, pre-joined into one token (`Foo\Bar`).
    QualifiedName,
    /// A lone namespace separator.
    NsSeparator,
    /// `$name`.
    Variable,
    /// Quoted string, heredoc, or nowdoc, body included.
    StringLiteral,
    Number,
    /// Any other punctuation.
    Symbol,
}

/// One lexical token with its raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Tokenize PHP source into a flat token stream.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).run()
}

/// Drop whitespace and comment tokens so adjacency checks see only
/// significant tokens.
pub fn significant(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|t| {
            !matches!(
                t.kind,
                TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
            )
        })
        .collect()
}

fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte >= 0x80
}

fn is_ident_continue(byte: u8) -> bool {
    is_ident_start(byte) || byte.is_ascii_digit()
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    in_php: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            in_php: false,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while self.pos < self.src.len() {
            if self.in_php {
                self.lex_code();
            } else {
                self.lex_inline_html();
            }
        }
        self.tokens
    }

    fn bytes(&self) -> &[u8] {
        self.src.as_bytes()
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes().get(self.pos + offset).copied()
    }

    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn push(&mut self, kind: TokenKind, end: usize) {
        self.tokens.push(Token::new(kind, &self.src[self.pos..end]));
        self.pos = end;
    }

    fn lex_inline_html(&mut self) {
        match self.rest().find("<?") {
            Some(0) => {
                let tag_len = if self.rest().starts_with("<?php") {
                    5
                } else if self.rest().starts_with("<?=") {
                    3
                } else {
                    2
                };
                self.push(TokenKind::OpenTag, self.pos + tag_len);
                self.in_php = true;
            }
            Some(offset) => self.push(TokenKind::InlineHtml, self.pos + offset),
            None => self.push(TokenKind::InlineHtml, self.src.len()),
        }
    }

    fn lex_code(&mut self) {
        let byte = self.bytes()[self.pos];

        match byte {
            b' ' | b'\t' | b'\r' | b'\n' => self.lex_whitespace(),
            b'?' if self.peek(1) == Some(b'>') => {
                self.push(TokenKind::CloseTag, self.pos + 2);
                self.in_php = false;
            }
            b'/' if self.peek(1) == Some(b'/') => self.lex_line_comment(),
            b'/' if self.peek(1) == Some(b'*') => self.lex_block_comment(),
            // `#[` opens an attribute; a bare `#` is a line comment.
            b'#' if self.peek(1) == Some(b'[') => self.push(TokenKind::Symbol, self.pos + 2),
            b'#' => self.lex_line_comment(),
            b'\'' => self.lex_quoted(b'\''),
            b'"' => self.lex_quoted(b'"'),
            b'`' => self.lex_quoted(b'`'),
            b'<' if self.rest().starts_with("<<<") => self.lex_heredoc(),
            b'$' if self.peek(1).is_some_and(is_ident_start) => self.lex_variable(),
            b'\\' if self.peek(1).is_some_and(is_ident_start) => self.lex_name(),
            b'\\' => self.push(TokenKind::NsSeparator, self.pos + 1),
            b'0'..=b'9' => self.lex_number(),
            _ if is_ident_start(byte) => self.lex_name(),
            _ => self.push(TokenKind::Symbol, self.pos + 1),
        }
    }

    fn lex_whitespace(&mut self) {
        let mut end = self.pos;
        while self
            .bytes()
            .get(end)
            .is_some_and(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        {
            end += 1;
        }
        self.push(TokenKind::Whitespace, end);
    }

    fn lex_line_comment(&mut self) {
        // Line comments end at a newline or at a closing tag.
        let rest = self.rest();
        let newline = rest.find('\n').unwrap_or(rest.len());
        let close_tag = rest.find("?>").unwrap_or(rest.len());
        self.push(TokenKind::Comment, self.pos + newline.min(close_tag));
    }

    fn lex_block_comment(&mut self) {
        let kind = if self.rest().starts_with("/**") && !self.rest().starts_with("/**/") {
            TokenKind::DocComment
        } else {
            TokenKind::Comment
        };
        let end = match self.rest()[2..].find("*/") {
            Some(offset) => self.pos + 2 + offset + 2,
            // Unterminated comment swallows the rest of the file.
            None => self.src.len(),
        };
        self.push(kind, end);
    }

    fn lex_quoted(&mut self, quote: u8) {
        let mut end = self.pos + 1;
        while let Some(&b) = self.bytes().get(end) {
            if b == b'\\' && end + 1 < self.src.len() {
                end += 2;
                continue;
            }
            if b == quote {
                end += 1;
                self.push(TokenKind::StringLiteral, end);
                return;
            }
            end += 1;
        }
        // Unterminated string.
        self.push(TokenKind::StringLiteral, self.src.len());
    }

    fn lex_heredoc(&mut self) {
        let mut cursor = self.pos + 3;
        while self.bytes().get(cursor) == Some(&b' ') || self.bytes().get(cursor) == Some(&b'\t') {
            cursor += 1;
        }

        // Nowdoc labels are quoted: <<<'EOT' or <<<"EOT".
        let quote = match self.bytes().get(cursor).copied() {
            Some(q @ (b'\'' | b'"')) => {
                cursor += 1;
                Some(q)
            }
            _ => None,
        };

        let label_start = cursor;
        while self.bytes().get(cursor).copied().is_some_and(is_ident_continue) {
            cursor += 1;
        }

        if cursor == label_start {
            // Not a heredoc opener after all; treat `<` as an ordinary symbol.
            self.push(TokenKind::Symbol, self.pos + 1);
            return;
        }

        let label = self.src[label_start..cursor].to_string();

        if let Some(q) = quote {
            if self.bytes().get(cursor) == Some(&q) {
                cursor += 1;
            }
        }

        // Body runs until a line whose first non-blank token is the label.
        let mut end = self.src.len();
        let mut line_start = match self.src[cursor..].find('\n') {
            Some(offset) => cursor + offset + 1,
            None => self.src.len(),
        };

        while line_start < self.src.len() {
            let line_end = self.src[line_start..]
                .find('\n')
                .map_or(self.src.len(), |offset| line_start + offset);
            let line = &self.src[line_start..line_end];
            let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
            let candidate = &line[indent..];

            if candidate.starts_with(label.as_str())
                && !candidate
                    .as_bytes()
                    .get(label.len())
                    .copied()
                    .is_some_and(is_ident_continue)
            {
                end = line_start + indent + label.len();
                break;
            }
            line_start = line_end + 1;
        }

        self.push(TokenKind::StringLiteral, end);
    }

    fn lex_variable(&mut self) {
        let mut end = self.pos + 1;
        while self.bytes().get(end).copied().is_some_and(is_ident_continue) {
            end += 1;
        }
        self.push(TokenKind::Variable, end);
    }

    fn lex_number(&mut self) {
        let mut end = self.pos;
        while let Some(&b) = self.bytes().get(end) {
            if b.is_ascii_alphanumeric() || b == b'_' {
                end += 1;
            } else if b == b'.' && self.bytes().get(end + 1).is_some_and(|d| d.is_ascii_digit()) {
                end += 1;
            } else {
                break;
            }
        }
        self.push(TokenKind::Number, end);
    }

    /// Lex an identifier, joining `Foo\Bar\Baz` into a single qualified-name
    /// token the way PHP 8 does. Keywords are only recognized in single-part
    /// names, and case-insensitively.
    fn lex_name(&mut self) {
        let mut end = self.pos;
        let mut parts = 0;

        if self.bytes()[end] == b'\\' {
            end += 1;
            parts += 1;
        }

        loop {
            while self.bytes().get(end).copied().is_some_and(is_ident_continue) {
                end += 1;
            }
            parts += 1;

            if self.bytes().get(end) == Some(&b'\\')
                && self.bytes().get(end + 1).copied().is_some_and(is_ident_start)
            {
                end += 1;
            } else {
                break;
            }
        }

        let text = &self.src[self.pos..end];
        let kind = if parts > 1 {
            TokenKind::QualifiedName
        } else {
            keyword_kind(text).unwrap_or(TokenKind::Identifier)
        };
        self.push(kind, end);
    }
}

fn keyword_kind(word: &str) -> Option<TokenKind> {
    // PHP keywords are case-insensitive.
    const KEYWORDS: [(&str, TokenKind); 6] = [
        ("namespace", TokenKind::Namespace),
        ("class", TokenKind::Class),
        ("interface", TokenKind::Interface),
        ("trait", TokenKind::Trait),
        ("enum", TokenKind::Enum),
        ("new", TokenKind::New),
    ];

    KEYWORDS
        .iter()
        .find(|(keyword, _)| word.eq_ignore_ascii_case(keyword))
        .map(|&(_, kind)| kind)
}
