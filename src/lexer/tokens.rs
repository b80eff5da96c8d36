use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Spellings matched by the name patterns that are never names.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("_", TokenKind::Underscore);
        map.insert("do", TokenKind::Do);
        map.insert("infer", TokenKind::Infer);
        map.insert("instance", TokenKind::Instance);
        map.insert("intrinsic", TokenKind::Intrinsic);
        map.insert("set", TokenKind::Set);
        map.insert("trait", TokenKind::Trait);
        map.insert("type", TokenKind::Type);
        map.insert("when", TokenKind::When);
        map.insert("where", TokenKind::Where);
        map
    };
}

/// Lowercase names that act as binary operators when they appear between
/// two operands.
pub const OPERATOR_WORDS: [&str; 6] = ["as", "to", "by", "is", "and", "or"];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    CapitalName,
    LowercaseName,
    Number,
    Text,

    // Trivia
    Comment,
    LineBreak,

    /// A character no pattern matches. No grammar rule accepts it.
    Unrecognised,

    Underscore,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Colon,       // :
    DoubleColon, // ::
    FatArrow,    // =>
    Arrow,       // ->

    Caret,
    Star,
    Slash,
    Percent,
    Plus,
    Dash,

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    SlashEquals, // /=

    Dot,
    Semicolon,
    Comma,

    // Reserved
    Do,
    Infer,
    Instance,
    Intrinsic,
    Set,
    Trait,
    Type,
    When,
    Where,
}

/// Coarse classification of token kinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenClass {
    CapitalName,
    LowercaseName,
    Number,
    Text,
    Comment,
    LineBreak,
    Symbol,
    Unrecognised,
    EndOfInput,
}

impl TokenKind {
    pub fn class(&self) -> TokenClass {
        match self {
            TokenKind::EOF => TokenClass::EndOfInput,
            TokenKind::CapitalName => TokenClass::CapitalName,
            TokenKind::LowercaseName => TokenClass::LowercaseName,
            TokenKind::Number => TokenClass::Number,
            TokenKind::Text => TokenClass::Text,
            TokenKind::Comment => TokenClass::Comment,
            TokenKind::LineBreak => TokenClass::LineBreak,
            TokenKind::Unrecognised => TokenClass::Unrecognised,
            _ => TokenClass::Symbol,
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::Do
                | TokenKind::Infer
                | TokenKind::Instance
                | TokenKind::Intrinsic
                | TokenKind::Set
                | TokenKind::Trait
                | TokenKind::Type
                | TokenKind::When
                | TokenKind::Where
        )
    }

    /// Whether a token of this kind can be the last token of an operand.
    pub fn ends_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::CapitalName
                | TokenKind::LowercaseName
                | TokenKind::Number
                | TokenKind::Text
                | TokenKind::Underscore
                | TokenKind::CloseParen
                | TokenKind::CloseCurly
                | TokenKind::CloseBracket
        )
    }

    /// Source spelling of fixed tokens.
    pub fn symbol(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::Underscore => "_",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Colon => ":",
            TokenKind::DoubleColon => "::",
            TokenKind::FatArrow => "=>",
            TokenKind::Arrow => "->",
            TokenKind::Caret => "^",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Equals => "=",
            TokenKind::SlashEquals => "/=",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Do => "do",
            TokenKind::Infer => "infer",
            TokenKind::Instance => "instance",
            TokenKind::Intrinsic => "intrinsic",
            TokenKind::Set => "set",
            TokenKind::Trait => "trait",
            TokenKind::Type => "type",
            TokenKind::When => "when",
            TokenKind::Where => "where",
            _ => return None,
        })
    }

    /// Human-readable description used in "expected ..." messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::EOF => "end of input".to_string(),
            TokenKind::CapitalName => "capitalized name".to_string(),
            TokenKind::LowercaseName => "name".to_string(),
            TokenKind::Number => "number".to_string(),
            TokenKind::Text => "text".to_string(),
            TokenKind::Comment => "comment".to_string(),
            TokenKind::LineBreak => "line break".to_string(),
            TokenKind::Unrecognised => "unrecognised character".to_string(),
            kind => format!("`{}`", kind.symbol().unwrap_or("?")),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whether this is a lowercase name spelled like a binary operator.
    pub fn is_operator_word(&self) -> bool {
        self.kind == TokenKind::LowercaseName && OPERATOR_WORDS.contains(&self.value.as_str())
    }

    /// Description of the actual token, for "found ..." messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::CapitalName => format!("capitalized name `{}`", self.value),
            TokenKind::LowercaseName => format!("name `{}`", self.value),
            TokenKind::Number => format!("number `{}`", self.value),
            TokenKind::Text => format!("text {}", self.value),
            TokenKind::Comment => "comment".to_string(),
            TokenKind::Unrecognised => format!("unrecognised character {:?}", self.value),
            kind => kind.describe(),
        }
    }
}
