//! Stylesheet parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing),
//! extended with [CSS Nesting](https://www.w3.org/TR/css-nesting-1/).
//!
//! The parser works at statement level and keeps the raw prelude text of
//! every rule, so selectors can be tokenized later exactly as written.
//! Rules may nest inside rules and at-rules to any depth.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// A location in the source text (1-indexed, counted in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The source dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Syntax {
    /// Plain CSS (nesting allowed, `/* */` comments only).
    #[default]
    Css,
    /// SCSS: adds `//` line comments and `#{...}` interpolation.
    Scss,
}

impl Syntax {
    /// Pick the dialect from a file extension (`.scss` is SCSS, anything else CSS).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let is_scss = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("scss"));
        if is_scss { Self::Scss } else { Self::Css }
    }
}

/// A style rule: a selector prelude and a block of child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleNode {
    /// Raw selector text, trimmed.
    pub selector: String,
    /// Declarations, nested rules, at-rules and comments inside the block.
    pub nodes: Vec<Node>,
    /// Where the selector starts.
    pub position: Position,
}

/// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRuleNode {
    /// The at-keyword name (without the `@`).
    pub name: String,
    /// The prelude after the name, trimmed.
    pub params: String,
    /// The block contents, `None` for statement at-rules like `@import "x";`.
    pub nodes: Option<Vec<Node>>,
    /// Where the `@` is.
    pub position: Position,
}

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The property name.
    pub property: String,
    /// The value text, without `!important`.
    pub value: String,
    /// Whether the declaration has `!important`.
    pub important: bool,
    /// Where the property name starts.
    pub position: Position,
}

/// A comment between statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// The comment text without delimiters, trimmed.
    pub text: String,
    /// True for SCSS `//` comments.
    pub inline: bool,
    /// Where the comment starts.
    pub position: Position,
}

/// A node of the stylesheet tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A style rule.
    Rule(RuleNode),
    /// An at-rule.
    AtRule(AtRuleNode),
    /// A declaration.
    Declaration(Declaration),
    /// A comment.
    Comment(Comment),
}

impl Node {
    /// Child nodes of rules and block at-rules; empty for everything else.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Rule(rule) => &rule.nodes,
            Self::AtRule(at_rule) => at_rule.nodes.as_deref().unwrap_or_default(),
            Self::Declaration(_) | Self::Comment(_) => &[],
        }
    }

    /// Where this node starts in the source.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Rule(rule) => rule.position,
            Self::AtRule(at_rule) => at_rule.position,
            Self::Declaration(declaration) => declaration.position,
            Self::Comment(comment) => comment.position,
        }
    }
}

/// A parsed stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stylesheet {
    /// Top-level nodes in source order.
    pub nodes: Vec<Node>,
}

impl Stylesheet {
    /// Parse `source` in the given dialect.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for unbalanced blocks, brackets, strings or
    /// comments, rules without a selector, and words that are neither a
    /// rule nor a declaration.
    pub fn parse(source: &str, syntax: Syntax) -> Result<Self, ParseError> {
        StylesheetParser::new(source, syntax).parse_stylesheet()
    }
}

/// Structural errors in a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `{` without its `}`.
    #[error("{position}: unclosed block")]
    UnclosedBlock {
        /// Where the block opens.
        position: Position,
    },

    /// A `}` with no open block.
    #[error("{position}: unexpected '}}'")]
    UnexpectedClosingBrace {
        /// Where the brace is.
        position: Position,
    },

    /// A quoted string running to the end of the line or input.
    #[error("{position}: unclosed string")]
    UnclosedString {
        /// Where the string opens.
        position: Position,
    },

    /// A `/*` without `*/`.
    #[error("{position}: unclosed comment")]
    UnclosedComment {
        /// Where the comment opens.
        position: Position,
    },

    /// A `(`, `[` or `#{` without its closing bracket.
    #[error("{position}: unclosed bracket '{bracket}'")]
    UnclosedBracket {
        /// The opening bracket.
        bracket: char,
        /// Where it opens.
        position: Position,
    },

    /// A block with nothing in front of it.
    #[error("{position}: missing selector")]
    MissingSelector {
        /// Where the block opens.
        position: Position,
    },

    /// A statement that is neither a rule, an at-rule nor a declaration.
    #[error("{position}: unknown word '{word}'")]
    UnknownWord {
        /// The first word of the statement.
        word: String,
        /// Where the statement starts.
        position: Position,
    },
}

/// Stylesheet parser over a character buffer.
pub struct StylesheetParser {
    input: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
    syntax: Syntax,
}

impl StylesheetParser {
    /// Create a new parser for `source`.
    #[must_use]
    pub fn new(source: &str, syntax: Syntax) -> Self {
        Self {
            input: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            syntax,
        }
    }

    /// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
    ///
    /// # Errors
    ///
    /// See [`Stylesheet::parse`].
    pub fn parse_stylesheet(mut self) -> Result<Stylesheet, ParseError> {
        let nodes = self.consume_list_of_nodes(None)?;
        Ok(Stylesheet { nodes })
    }

    /// Consume nodes until the end of input (top level) or the `}` closing
    /// the block opened at `block_start`.
    fn consume_list_of_nodes(
        &mut self,
        block_start: Option<Position>,
    ) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();

        loop {
            self.consume_whitespace();

            match self.peek() {
                None => {
                    return match block_start {
                        Some(position) => Err(ParseError::UnclosedBlock { position }),
                        None => Ok(nodes),
                    };
                }

                Some('}') => {
                    if block_start.is_none() {
                        return Err(ParseError::UnexpectedClosingBrace {
                            position: self.current_position(),
                        });
                    }
                    let _ = self.consume();
                    return Ok(nodes);
                }

                // Stray semicolons between statements
                Some(';') => {
                    let _ = self.consume();
                }

                Some('/') if self.peek_at(1) == Some('*') => {
                    let position = self.current_position();
                    let raw = self.consume_block_comment()?;
                    nodes.push(Node::Comment(Comment {
                        text: raw[2..raw.len() - 2].trim().to_string(),
                        inline: false,
                        position,
                    }));
                }

                Some('/') if self.syntax == Syntax::Scss && self.peek_at(1) == Some('/') => {
                    let position = self.current_position();
                    let raw = self.consume_line_comment();
                    nodes.push(Node::Comment(Comment {
                        text: raw[2..].trim().to_string(),
                        inline: true,
                        position,
                    }));
                }

                Some(_) => {
                    if let Some(node) = self.consume_statement()? {
                        nodes.push(node);
                    }
                }
            }
        }
    }

    /// Consume one statement: everything up to a top-level `{`, `;` or `}`.
    ///
    /// A statement followed by a block is a rule or a block at-rule;
    /// otherwise it is a declaration or a statement at-rule.
    fn consume_statement(&mut self) -> Result<Option<Node>, ParseError> {
        let position = self.current_position();
        let mut prelude = String::new();
        let mut brackets: Vec<(char, Position)> = Vec::new();

        while let Some(c) = self.peek() {
            match c {
                '"' | '\'' => self.consume_string_into(&mut prelude)?,

                '/' if self.peek_at(1) == Some('*') => {
                    prelude.push_str(&self.consume_block_comment()?);
                }

                // SCSS line comments are dropped from preludes
                '/' if self.syntax == Syntax::Scss
                    && brackets.is_empty()
                    && self.peek_at(1) == Some('/') =>
                {
                    let _ = self.consume_line_comment();
                }

                '\\' => {
                    let _ = self.consume();
                    prelude.push('\\');
                    if let Some(escaped) = self.consume() {
                        prelude.push(escaped);
                    }
                }

                '#' if self.syntax == Syntax::Scss && self.peek_at(1) == Some('{') => {
                    brackets.push(('{', self.current_position()));
                    let _ = self.consume();
                    let _ = self.consume();
                    prelude.push_str("#{");
                }

                '(' | '[' => {
                    brackets.push((c, self.current_position()));
                    let _ = self.consume();
                    prelude.push(c);
                }

                ')' | ']' | '}' if brackets.last().is_some_and(|&(open, _)| closes(open, c)) => {
                    let _ = brackets.pop();
                    let _ = self.consume();
                    prelude.push(c);
                }

                '{' | ';' | '}' if brackets.is_empty() => break,

                _ => {
                    let _ = self.consume();
                    prelude.push(c);
                }
            }
        }

        if let Some(&(bracket, position)) = brackets.last() {
            return Err(ParseError::UnclosedBracket { bracket, position });
        }

        let text = prelude.trim();

        // "<{-token>": consume the block
        let children = if self.peek() == Some('{') {
            let block_start = self.current_position();
            let _ = self.consume();
            if text.is_empty() {
                return Err(ParseError::MissingSelector {
                    position: block_start,
                });
            }
            Some(self.consume_list_of_nodes(Some(block_start))?)
        } else {
            if self.peek() == Some(';') {
                let _ = self.consume();
            }
            None
        };

        if text.is_empty() {
            return Ok(None);
        }

        if let Some(rest) = text.strip_prefix('@') {
            let name: String = rest
                .chars()
                .take_while(|&ch| ch.is_alphanumeric() || ch == '-' || ch == '_')
                .collect();
            let params = rest[name.len()..].trim().to_string();
            return Ok(Some(Node::AtRule(AtRuleNode {
                name,
                params,
                nodes: children,
                position,
            })));
        }

        match children {
            Some(nodes) => Ok(Some(Node::Rule(RuleNode {
                selector: text.to_string(),
                nodes,
                position,
            }))),
            None => parse_declaration(text, position).map(|d| Some(Node::Declaration(d))),
        }
    }

    /// Consume a quoted string (including its quotes) into `out`.
    fn consume_string_into(&mut self, out: &mut String) -> Result<(), ParseError> {
        let position = self.current_position();
        let Some(quote) = self.consume() else {
            return Ok(());
        };
        out.push(quote);

        loop {
            match self.consume() {
                None | Some('\n') => return Err(ParseError::UnclosedString { position }),
                Some('\\') => {
                    out.push('\\');
                    if let Some(escaped) = self.consume() {
                        out.push(escaped);
                    }
                }
                Some(c) => {
                    out.push(c);
                    if c == quote {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    ///
    /// Returns the comment including its `/*` and `*/` delimiters.
    fn consume_block_comment(&mut self) -> Result<String, ParseError> {
        let position = self.current_position();
        let mut raw = String::new();
        for _ in 0..2 {
            if let Some(c) = self.consume() {
                raw.push(c);
            }
        }

        loop {
            match self.consume() {
                None => return Err(ParseError::UnclosedComment { position }),
                Some('*') if self.peek() == Some('/') => {
                    let _ = self.consume();
                    raw.push_str("*/");
                    return Ok(raw);
                }
                Some(c) => raw.push(c),
            }
        }
    }

    /// Consume a `//` comment up to (not including) the newline.
    fn consume_line_comment(&mut self) -> String {
        let mut raw = String::new();
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            raw.push(c);
            let _ = self.consume();
        }
        raw
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            let _ = self.consume();
        }
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    const fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// Whether `close` is the closing bracket for `open`.
const fn closes(open: char, close: char) -> bool {
    matches!((open, close), ('(', ')') | ('[', ']') | ('{', '}'))
}

/// Split a declaration statement into property and value.
fn parse_declaration(text: &str, position: Position) -> Result<Declaration, ParseError> {
    let mut quote: Option<char> = None;
    let mut depth = 0u32;
    let mut colon = None;

    for (i, c) in text.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ':') if depth == 0 => {
                colon = Some(i);
                break;
            }
            _ => {}
        }
    }

    let Some(colon) = colon else {
        let word = text.split_whitespace().next().unwrap_or(text).to_string();
        return Err(ParseError::UnknownWord { word, position });
    };

    let (value, important) = strip_important(&text[colon + 1..]);
    Ok(Declaration {
        property: text[..colon].trim().to_string(),
        value,
        important,
        position,
    })
}

/// [§ 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
///
/// "A declaration is important if it has a !important annotation, i.e.
/// if the last two (non-whitespace, non-comment) tokens in its value are
/// a <delim-token> with the value "!" followed by an <ident-token> with
/// a value that is an ASCII case-insensitive match for "important"."
fn strip_important(value: &str) -> (String, bool) {
    let trimmed = value.trim();
    let lower = trimmed.to_ascii_lowercase();
    let head = lower
        .strip_suffix("important")
        .and_then(|head| head.trim_end().strip_suffix('!'));
    match head {
        Some(rest) => (trimmed[..rest.len()].trim_end().to_string(), true),
        None => (trimmed.to_string(), false),
    }
}
