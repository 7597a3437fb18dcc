//! Lexer for shale source code.
//!
//! A hand-written character-level scanner. [`Lexer::next_token`] is pull
//! based: each call produces the next token, and once the input is exhausted
//! it returns an EOF token forever. The cursor only moves forward; the only
//! lookahead is a single-character peek used to recognize two-character
//! operators.
//!
//! # Token categories
//!
//! - **Keywords**: `f`, `if`, `else`, `return`, `true`, `false`, `while`
//! - **Literals**: identifiers, integers, strings, `$(...)` command text
//! - **Operators**: `= + - ! * ** / < > == != && || |`
//! - **Punctuation**: `, ; : . .. ( ) { } [ ]`
//! - **Comments**: `# ...` and `// ...` to end of line
//!
//! The lexer never fails: an unrecognized character becomes an `Illegal`
//! token and scanning continues. Malformed input (e.g. an unterminated
//! string) ends at end of input and the next pull returns EOF; detecting it
//! is the caller's concern.

use crate::token::{Token, TokenKind};

/// The shale lexer. Owns its cursor; one instance per input.
pub struct Lexer {
    input: Vec<char>,
    /// Index of the character in `ch`.
    position: usize,
    /// Index of the next character to read.
    read_position: usize,
    /// Current character, or `None` past end of input.
    ch: Option<char>,
}

impl Lexer {
    /// Create a lexer positioned on the first character of `input`.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    /// Produce the next token.
    ///
    /// Returns an EOF token once the input is exhausted, and keeps returning
    /// it on every subsequent call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(c) = self.ch else {
            return Token::new(TokenKind::Eof, "");
        };

        let tok = match c {
            '=' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            '*' => {
                if self.peek_char() == Some('*') {
                    self.read_char();
                    Token::new(TokenKind::Exponent, "**")
                } else {
                    Token::new(TokenKind::Asterisk, "*")
                }
            }
            '.' => {
                if self.peek_char() == Some('.') {
                    self.read_char();
                    Token::new(TokenKind::Range, "..")
                } else {
                    Token::new(TokenKind::Dot, ".")
                }
            }
            '&' => {
                if self.peek_char() == Some('&') {
                    self.read_char();
                    Token::new(TokenKind::And, "&&")
                } else {
                    // Bare `&` is not an operator in shale
                    Token::new(TokenKind::Illegal, "&")
                }
            }
            '|' => {
                if self.peek_char() == Some('|') {
                    self.read_char();
                    Token::new(TokenKind::Or, "||")
                } else {
                    Token::new(TokenKind::Pipe, "|")
                }
            }
            '/' => {
                if self.peek_char() == Some('/') {
                    return Token::new(TokenKind::Comment, self.read_line());
                }
                Token::new(TokenKind::Slash, "/")
            }
            '#' => return Token::new(TokenKind::Comment, self.read_line()),
            '+' => Token::new(TokenKind::Plus, "+"),
            '-' => Token::new(TokenKind::Minus, "-"),
            '<' => Token::new(TokenKind::Lt, "<"),
            '>' => Token::new(TokenKind::Gt, ">"),
            ',' => Token::new(TokenKind::Comma, ","),
            ';' => Token::new(TokenKind::Semicolon, ";"),
            ':' => Token::new(TokenKind::Colon, ":"),
            '(' => Token::new(TokenKind::LParen, "("),
            ')' => Token::new(TokenKind::RParen, ")"),
            '{' => Token::new(TokenKind::LBrace, "{"),
            '}' => Token::new(TokenKind::RBrace, "}"),
            '[' => Token::new(TokenKind::LBracket, "["),
            ']' => Token::new(TokenKind::RBracket, "]"),
            '"' => Token::new(TokenKind::String, self.read_string()),
            '$' => {
                if self.peek_char() == Some('(') {
                    self.read_char();
                    let literal = self.read_command();
                    // A command substitution already ends its statement, so a
                    // semicolon directly after the closing `)` is swallowed.
                    if self.peek_char() == Some(';') {
                        self.read_char();
                    }
                    Token::new(TokenKind::Command, literal)
                } else {
                    Token::new(TokenKind::Illegal, "$")
                }
            }
            c if is_letter(c) => {
                let word = self.read_identifier();
                return Token::new(TokenKind::lookup_ident(&word), word);
            }
            c if c.is_ascii_digit() => {
                return Token::new(TokenKind::Int, self.read_number());
            }
            c => {
                tracing::debug!(ch = %c, position = self.position, "illegal character");
                Token::new(TokenKind::Illegal, c.to_string())
            }
        };

        self.read_char();
        tok
    }

    /// Advance the cursor by one character.
    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Look at the next character without advancing.
    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    /// Scan the maximal run of letters, digits and underscores.
    /// The cursor ends on the first character past the run.
    fn read_identifier(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.ch {
            if !is_letter(c) && !c.is_ascii_digit() {
                break;
            }
            word.push(c);
            self.read_char();
        }
        word
    }

    /// Scan the maximal run of decimal digits, kept as source text.
    fn read_number(&mut self) -> String {
        let mut digits = String::new();
        while let Some(c) = self.ch {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.read_char();
        }
        digits
    }

    /// Scan a string literal. The cursor is on the opening quote on entry
    /// and on the closing quote (or at end of input) on exit.
    ///
    /// Exactly two escape sequences collapse: `\\` to a backslash and `\"`
    /// to a quote. A backslash before any other character is kept verbatim
    /// together with that character.
    fn read_string(&mut self) -> String {
        let mut literal = String::new();
        loop {
            self.read_char();
            match self.ch {
                None | Some('"') => break,
                Some('\\') => match self.peek_char() {
                    Some('\\') => {
                        literal.push('\\');
                        self.read_char();
                    }
                    Some('"') => {
                        literal.push('"');
                        self.read_char();
                    }
                    Some(other) => {
                        literal.push('\\');
                        literal.push(other);
                        self.read_char();
                    }
                    None => literal.push('\\'),
                },
                Some(c) => literal.push(c),
            }
        }
        literal
    }

    /// Scan the interior of a `$(...)` command substitution. The cursor is
    /// on the opening `(` on entry and on the closing `)` (or at end of
    /// input) on exit; neither delimiter lands in the literal.
    ///
    /// Termination is by parenthesis depth alone. The counter sees every
    /// `(` and `)` in the text, including ones inside quoted shell strings,
    /// so an individually unbalanced `)` inside quotes ends the capture
    /// early. Kept for compatibility with existing scripts.
    fn read_command(&mut self) -> String {
        let mut depth: usize = 1;
        let mut literal = String::new();
        loop {
            self.read_char();
            match self.ch {
                None => break,
                Some('(') => {
                    depth += 1;
                    literal.push('(');
                }
                Some(')') => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    literal.push(')');
                }
                Some(c) => literal.push(c),
            }
        }
        literal
    }

    /// Capture from the cursor to end of line, exclusive of the terminator.
    fn read_line(&mut self) -> String {
        let mut literal = String::new();
        while let Some(c) = self.ch {
            if c == '\n' {
                break;
            }
            literal.push(c);
            self.read_char();
        }
        literal
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        for _ in 0..5 {
            let tok = lexer.next_token();
            assert_eq!(tok.kind, TokenKind::Eof);
            assert_eq!(tok.literal, "");
        }
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_whitespace_only_input() {
        let mut lexer = Lexer::new("  \t\r\n  ");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_unterminated_string_yields_eof_next() {
        let mut lexer = Lexer::new("\"abc");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.literal, "abc");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_trailing_backslash_in_unterminated_string() {
        let mut lexer = Lexer::new("\"abc\\");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.literal, "abc\\");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_unterminated_command_yields_eof_next() {
        let mut lexer = Lexer::new("$(ls -l");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Command);
        assert_eq!(tok.literal, "ls -l");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_dollar_without_paren_is_illegal() {
        let mut lexer = Lexer::new("$x");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Illegal);
        assert_eq!(tok.literal, "$");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    }

    #[test]
    fn test_bare_ampersand_is_illegal() {
        let mut lexer = Lexer::new("a & b");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Illegal);
        assert_eq!(tok.literal, "&");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    }

    #[test]
    fn test_nested_command_parens() {
        let mut lexer = Lexer::new("$(echo (a (b)) c)");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Command);
        assert_eq!(tok.literal, "echo (a (b)) c");
    }

    #[test]
    fn test_quote_unaware_command_capture() {
        // The depth counter is purely textual: a lone `)` inside a quoted
        // shell string still terminates the capture.
        let mut lexer = Lexer::new("$(echo \")\" tail)");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Command);
        assert_eq!(tok.literal, "echo \"");
    }
}
