//! CSS selector parsing into a flat token chain.
//!
//! This module implements selector parsing per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/), but instead of
//! building a matching structure it keeps every simple selector, combinator
//! and comment as a [`SelectorNode`] in source order, together with its raw
//! text. Concatenating the raw text of a selector's nodes gives back the
//! selector as written (minus leading and trailing whitespace).

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The canonical value of this combinator: `" "`, `">"`, `"+"` or `"~"`.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(Self::Child),
            '+' => Some(Self::NextSibling),
            '~' => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

/// The kind of a single token in a selector chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html), e.g. `.nav-item`
    Class,
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors), e.g. `a`
    Tag,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors), e.g. `#main`
    Id,
    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors), e.g. `[href]`
    Attribute,
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes), e.g. `:hover`
    PseudoClass,
    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements), e.g. `::before`
    PseudoElement,
    /// A combinator between two compound selectors.
    Combinator(Combinator),
    /// A `/* ... */` comment inside the selector.
    Comment,
    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector), `*`
    Universal,
    /// The nesting selector `&`, left unresolved.
    Nesting,
}

/// One token of a selector chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorNode {
    /// What this token is.
    pub kind: NodeKind,
    /// The unescaped name (class name without the `.`, tag name, combinator
    /// value, pseudo name with its colons, comment text).
    pub value: String,
    /// The exact source text. Combinators carry their surrounding whitespace.
    pub raw: String,
}

impl SelectorNode {
    /// Create a node from its parts.
    pub fn new(kind: NodeKind, value: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            raw: raw.into(),
        }
    }

    /// Returns true if this is a class selector.
    #[must_use]
    pub const fn is_class(&self) -> bool {
        matches!(self.kind, NodeKind::Class)
    }

    /// Returns the combinator if this node is one.
    #[must_use]
    pub const fn combinator(&self) -> Option<Combinator> {
        match self.kind {
            NodeKind::Combinator(combinator) => Some(combinator),
            _ => None,
        }
    }
}

impl fmt::Display for SelectorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// A complex selector as a flat chain of tokens, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    /// The tokens in source order.
    pub nodes: Vec<SelectorNode>,
}

impl Selector {
    /// The trimmed string form of this selector, as used in messages.
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string().trim().to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            f.write_str(&node.raw)?;
        }
        Ok(())
    }
}

/// [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
///
/// "A selector list is a comma-separated list of selectors."
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorList {
    /// The selectors in source order.
    pub selectors: Vec<Selector>,
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", selector.text())?;
        }
        Ok(())
    }
}

/// Errors raised for selector strings that cannot be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorParseError {
    /// A selector in the list has no tokens at all (`.a,,.b`).
    #[error("empty selector in '{selector}'")]
    Empty {
        /// The full selector list being parsed.
        selector: String,
    },

    /// A `.`, `#` or `:` prefix is not followed by a name.
    #[error("expected a name after '{prefix}' in '{selector}'")]
    ExpectedName {
        /// The prefix character.
        prefix: char,
        /// The full selector list being parsed.
        selector: String,
    },

    /// A string, bracket, parenthesis or comment runs to the end of input.
    #[error("unterminated {what} in '{selector}'")]
    Unterminated {
        /// What was left open.
        what: &'static str,
        /// The full selector list being parsed.
        selector: String,
    },

    /// A character that cannot appear at this point of a selector.
    #[error("unexpected character '{found}' in '{selector}'")]
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// The full selector list being parsed.
        selector: String,
    },
}

/// Check if a character can start an identifier.
/// [§ 4.3.10 ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
const fn is_ident_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Check if a character can continue an identifier.
/// [§ 4.3.9 ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
const fn is_ident_char(c: char) -> bool {
    is_ident_start_char(c) || c.is_ascii_digit() || c == '-'
}

/// Legacy pseudo-elements that may be written with a single colon.
/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
const LEGACY_PSEUDO_ELEMENTS: [&str; 4] = ["before", "after", "first-line", "first-letter"];

/// Intermediate lexing result before whitespace is folded into combinators.
enum Piece {
    Node(SelectorNode),
    Space(String),
    Explicit(Combinator, char),
}

/// Lexer over one selector list string.
struct SelectorLexer<'a> {
    source: &'a str,
    chars: Peekable<Chars<'a>>,
}

impl<'a> SelectorLexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
        }
    }

    fn unterminated(&self, what: &'static str) -> SelectorParseError {
        SelectorParseError::Unterminated {
            what,
            selector: self.source.to_string(),
        }
    }

    fn expected_name(&self, prefix: char) -> SelectorParseError {
        SelectorParseError::ExpectedName {
            prefix,
            selector: self.source.to_string(),
        }
    }

    /// Consume an identifier, honouring CSS escapes and SCSS `#{...}`
    /// interpolation. Appends the source text to `raw` and returns the
    /// unescaped value.
    fn consume_ident(&mut self, raw: &mut String) -> Result<String, SelectorParseError> {
        let mut value = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == '\\' {
                let _ = self.chars.next();
                raw.push('\\');
                let escaped = self.chars.next().ok_or_else(|| self.unterminated("escape"))?;
                raw.push(escaped);
                value.push(escaped);
            } else if c == '#' && self.at_interpolation() {
                let interpolation = self.consume_balanced('{', '}', "interpolation")?;
                raw.push_str(&interpolation);
                value.push_str(&interpolation);
            } else if is_ident_char(c) {
                let _ = self.chars.next();
                raw.push(c);
                value.push(c);
            } else {
                break;
            }
        }
        Ok(value)
    }

    fn at_interpolation(&self) -> bool {
        let mut lookahead = self.chars.clone();
        lookahead.next() == Some('#') && lookahead.next() == Some('{')
    }

    /// Consume from the current position through the matching `close`,
    /// skipping over quoted strings. The current character must be `open`
    /// (or the `#` of an interpolation).
    fn consume_balanced(
        &mut self,
        open: char,
        close: char,
        what: &'static str,
    ) -> Result<String, SelectorParseError> {
        let mut text = String::new();
        let mut depth = 0u32;
        while let Some(c) = self.chars.next() {
            text.push(c);
            match c {
                '"' | '\'' => self.consume_string_into(c, &mut text)?,
                '\\' => {
                    if let Some(escaped) = self.chars.next() {
                        text.push(escaped);
                    }
                }
                _ if c == open => depth += 1,
                _ if c == close => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Ok(text);
                    }
                }
                _ => {}
            }
        }
        Err(self.unterminated(what))
    }

    /// Consume the rest of a quoted string whose opening quote was already
    /// pushed to `text`.
    fn consume_string_into(&mut self, quote: char, text: &mut String) -> Result<(), SelectorParseError> {
        while let Some(c) = self.chars.next() {
            text.push(c);
            if c == '\\' {
                if let Some(escaped) = self.chars.next() {
                    text.push(escaped);
                }
            } else if c == quote {
                return Ok(());
            }
        }
        Err(self.unterminated("string"))
    }

    /// Lex the whole input into one list of pieces per comma-separated selector.
    fn run(mut self) -> Result<Vec<Vec<Piece>>, SelectorParseError> {
        let mut selectors = Vec::new();
        let mut pieces = Vec::new();

        while let Some(&c) = self.chars.peek() {
            match c {
                // [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
                ',' => {
                    let _ = self.chars.next();
                    selectors.push(std::mem::take(&mut pieces));
                }

                // [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
                // Whitespace may turn out to be a descendant combinator, or just
                // padding around an explicit one. Decided when folding.
                c if c.is_whitespace() => {
                    let mut space = String::new();
                    while let Some(&ws) = self.chars.peek() {
                        if !ws.is_whitespace() {
                            break;
                        }
                        space.push(ws);
                        let _ = self.chars.next();
                    }
                    pieces.push(Piece::Space(space));
                }

                // [§ 16.2-16.4] Explicit combinators
                '>' | '+' | '~' => {
                    let _ = self.chars.next();
                    if let Some(combinator) = Combinator::from_char(c) {
                        pieces.push(Piece::Explicit(combinator, c));
                    }
                }

                // [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
                // "The class selector is given as a full stop (. U+002E)
                // immediately followed by an identifier."
                '.' => {
                    let _ = self.chars.next();
                    let mut raw = String::from(".");
                    let name = self.consume_ident(&mut raw)?;
                    if name.is_empty() {
                        return Err(self.expected_name('.'));
                    }
                    pieces.push(Piece::Node(SelectorNode::new(NodeKind::Class, name, raw)));
                }

                // [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
                '#' if !self.at_interpolation() => {
                    let _ = self.chars.next();
                    let mut raw = String::from("#");
                    let name = self.consume_ident(&mut raw)?;
                    if name.is_empty() {
                        return Err(self.expected_name('#'));
                    }
                    pieces.push(Piece::Node(SelectorNode::new(NodeKind::Id, name, raw)));
                }

                // [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
                '*' => {
                    let _ = self.chars.next();
                    pieces.push(Piece::Node(SelectorNode::new(NodeKind::Universal, "*", "*")));
                }

                // Nesting selector, with an optional SCSS suffix (`&-item`)
                '&' => {
                    let _ = self.chars.next();
                    let mut raw = String::from("&");
                    let suffix = self.consume_ident(&mut raw)?;
                    pieces.push(Piece::Node(SelectorNode::new(
                        NodeKind::Nesting,
                        format!("&{suffix}"),
                        raw,
                    )));
                }

                // [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
                '[' => {
                    let raw = self.consume_balanced('[', ']', "attribute selector")?;
                    let inner = &raw[1..raw.len() - 1];
                    let name: String = inner
                        .trim_start()
                        .chars()
                        .take_while(|&ch| is_ident_char(ch) || ch == '|')
                        .collect();
                    if name.is_empty() {
                        return Err(self.expected_name('['));
                    }
                    pieces.push(Piece::Node(SelectorNode::new(NodeKind::Attribute, name, raw)));
                }

                // [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
                // [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
                ':' => {
                    let _ = self.chars.next();
                    let mut raw = String::from(":");
                    let double = self.chars.peek() == Some(&':');
                    if double {
                        let _ = self.chars.next();
                        raw.push(':');
                    }
                    let name = self.consume_ident(&mut raw)?;
                    if name.is_empty() {
                        return Err(self.expected_name(':'));
                    }
                    let value = raw.clone();

                    // Functional pseudo-classes keep their arguments opaque
                    if self.chars.peek() == Some(&'(') {
                        raw.push_str(&self.consume_balanced('(', ')', "parenthesis")?);
                    }

                    let is_element = double
                        || LEGACY_PSEUDO_ELEMENTS.contains(&name.to_ascii_lowercase().as_str());
                    let kind = if is_element {
                        NodeKind::PseudoElement
                    } else {
                        NodeKind::PseudoClass
                    };
                    pieces.push(Piece::Node(SelectorNode::new(kind, value, raw)));
                }

                // Comments
                '/' => {
                    let _ = self.chars.next();
                    if self.chars.next() != Some('*') {
                        return Err(SelectorParseError::UnexpectedChar {
                            found: '/',
                            selector: self.source.to_string(),
                        });
                    }
                    let mut raw = String::from("/*");
                    let mut closed = false;
                    while let Some(ch) = self.chars.next() {
                        raw.push(ch);
                        if ch == '*' && self.chars.peek() == Some(&'/') {
                            let _ = self.chars.next();
                            raw.push('/');
                            closed = true;
                            break;
                        }
                    }
                    if !closed {
                        return Err(self.unterminated("comment"));
                    }
                    let text = raw[2..raw.len() - 2].trim().to_string();
                    pieces.push(Piece::Node(SelectorNode::new(NodeKind::Comment, text, raw)));
                }

                // [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
                // Also SCSS placeholders (`%name`) and bare interpolations.
                c if is_ident_start_char(c) || c == '-' || c == '%' || c == '\\' || c == '#' => {
                    let mut raw = String::new();
                    if c == '%' {
                        let _ = self.chars.next();
                        raw.push('%');
                    }
                    let name = self.consume_ident(&mut raw)?;
                    if raw.is_empty() || raw == "%" {
                        return Err(self.expected_name(c));
                    }
                    let value = if c == '%' { format!("%{name}") } else { name };
                    pieces.push(Piece::Node(SelectorNode::new(NodeKind::Tag, value, raw)));
                }

                found => {
                    return Err(SelectorParseError::UnexpectedChar {
                        found,
                        selector: self.source.to_string(),
                    });
                }
            }
        }

        selectors.push(pieces);
        Ok(selectors)
    }
}

/// Fold whitespace pieces into descendant combinators (or into the padding
/// of explicit combinators), dropping leading and trailing whitespace.
///
/// Comments never consume pending whitespace, so `.a /* x */ .b` still has a
/// single descendant combinator between `.a` and `.b`.
fn fold_pieces(pieces: Vec<Piece>, source: &str) -> Result<Selector, SelectorParseError> {
    let mut nodes: Vec<SelectorNode> = Vec::new();
    let mut pending: Option<(Option<Combinator>, String)> = None;

    for piece in pieces {
        match piece {
            Piece::Space(space) => match pending.as_mut() {
                Some((_, raw)) => raw.push_str(&space),
                None => pending = Some((None, space)),
            },
            Piece::Explicit(combinator, c) => match pending.as_mut() {
                Some((Some(_), _)) => {
                    return Err(SelectorParseError::UnexpectedChar {
                        found: c,
                        selector: source.to_string(),
                    });
                }
                Some((slot, raw)) => {
                    *slot = Some(combinator);
                    raw.push(c);
                }
                None => pending = Some((Some(combinator), c.to_string())),
            },
            Piece::Node(node) if node.kind == NodeKind::Comment => nodes.push(node),
            Piece::Node(node) => {
                if let Some((combinator, raw)) = pending.take() {
                    let has_left_side = nodes.iter().any(|n| n.kind != NodeKind::Comment);
                    match combinator {
                        Some(combinator) => nodes.push(SelectorNode::new(
                            NodeKind::Combinator(combinator),
                            combinator.value(),
                            raw,
                        )),
                        None if has_left_side => nodes.push(SelectorNode::new(
                            NodeKind::Combinator(Combinator::Descendant),
                            Combinator::Descendant.value(),
                            raw,
                        )),
                        None => {}
                    }
                }
                nodes.push(node);
            }
        }
    }

    // A trailing explicit combinator is kept (relative selector); trailing
    // whitespace is not.
    if let Some((Some(combinator), raw)) = pending {
        nodes.push(SelectorNode::new(
            NodeKind::Combinator(combinator),
            combinator.value(),
            raw,
        ));
    }

    if nodes.is_empty() {
        return Err(SelectorParseError::Empty {
            selector: source.to_string(),
        });
    }

    Ok(Selector { nodes })
}

/// Parse a raw selector list string into flat token chains.
///
/// [§ 4 Selector syntax](https://www.w3.org/TR/selectors-4/#syntax)
///
/// Supports:
/// - Type, class, ID, universal and nesting (`&`) selectors
/// - Attribute selectors with any operator and quoted values
/// - Pseudo-classes and pseudo-elements, including functional arguments
/// - All four combinators, with whitespace folded into descendant combinators
/// - Comments, CSS escapes and SCSS `#{...}` interpolation
///
/// # Errors
///
/// Returns a [`SelectorParseError`] for empty selectors in the list, names
/// missing after a prefix, unterminated constructs, doubled combinators and
/// characters that cannot start a simple selector.
pub fn parse_selector_list(raw: &str) -> Result<SelectorList, SelectorParseError> {
    let selectors = SelectorLexer::new(raw)
        .run()?
        .into_iter()
        .map(|pieces| fold_pieces(pieces, raw))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SelectorList { selectors })
}
