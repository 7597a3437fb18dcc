//! Token definitions for the shale lexer.
//!
//! A token is a classified lexical unit: a [`TokenKind`] plus the literal
//! source text it was scanned from. Tokens are immutable once produced and
//! carry no back-references into the input.

use std::fmt;

/// The closed vocabulary of token kinds.
///
/// The parser matches on these; the literal carries the payload for kinds
/// that have one (identifiers, literals, comments, illegal characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Returned forever once the input is exhausted.
    Eof,
    /// A character the lexer does not recognize; the literal is that character.
    Illegal,

    /// Identifier: `foo`, `_bar`, `x2`
    Ident,
    /// Integer literal, kept as its decimal source text: `42`
    Int,
    /// String literal with escapes already collapsed: `"hel\"lo"`
    String,
    /// Command substitution interior: the `ls *.go` of `$(ls *.go)`
    Command,
    /// Line comment including its marker: `# ...` or `// ...`
    Comment,

    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `**`
    Exponent,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `|`
    Pipe,

    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `..`
    Range,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    /// `f` — introduces a function literal
    Function,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// `true`
    True,
    /// `false`
    False,
    /// `while`
    While,
}

impl TokenKind {
    /// Classify a scanned word as a keyword kind or a plain identifier.
    pub fn lookup_ident(word: &str) -> TokenKind {
        match word {
            "f" => TokenKind::Function,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "while" => TokenKind::While,
            _ => TokenKind::Ident,
        }
    }

    /// Uppercase tag used by the token dump format and tests.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Command => "COMMAND",
            TokenKind::Comment => "COMMENT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Bang => "BANG",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Exponent => "EXPONENT",
            TokenKind::Slash => "SLASH",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOTEQ",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Pipe => "PIPE",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Range => "RANGE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Function => "FUNCTION",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::While => "WHILE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single token: kind plus the literal text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }
}

impl fmt::Display for Token {
    /// `KIND(literal)`, with control characters escaped for one-line output.
    /// EOF renders as a bare `EOF`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            return f.write_str("EOF");
        }
        let escaped = self
            .literal
            .replace('\n', "\\n")
            .replace('\t', "\\t")
            .replace('\r', "\\r");
        write!(f, "{}({})", self.kind, escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::lookup_ident("f"), TokenKind::Function);
        assert_eq!(TokenKind::lookup_ident("if"), TokenKind::If);
        assert_eq!(TokenKind::lookup_ident("else"), TokenKind::Else);
        assert_eq!(TokenKind::lookup_ident("return"), TokenKind::Return);
        assert_eq!(TokenKind::lookup_ident("true"), TokenKind::True);
        assert_eq!(TokenKind::lookup_ident("false"), TokenKind::False);
        assert_eq!(TokenKind::lookup_ident("while"), TokenKind::While);
        assert_eq!(TokenKind::lookup_ident("foo"), TokenKind::Ident);
        // Prefix of a keyword is still an identifier
        assert_eq!(TokenKind::lookup_ident("whil"), TokenKind::Ident);
        assert_eq!(TokenKind::lookup_ident("iff"), TokenKind::Ident);
    }

    #[test]
    fn test_display_format() {
        let tok = Token::new(TokenKind::Ident, "foo");
        assert_eq!(tok.to_string(), "IDENT(foo)");

        let tok = Token::new(TokenKind::Command, "echo \"a\tb\"");
        assert_eq!(tok.to_string(), "COMMAND(echo \"a\\tb\")");

        let tok = Token::new(TokenKind::Eof, "");
        assert_eq!(tok.to_string(), "EOF");
    }
}
