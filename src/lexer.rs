//! Lexer.
//!
//! Splits raw text into parentheses and atom tokens. Parens are standalone
//! tokens even when glued to their neighbours; whitespace and `;` line
//! comments separate atoms. There is no string, quote, or escape syntax.

// ============================================================================
// Token Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    LParen,
    RParen,
    /// Raw atom text; numeric vs symbolic classification happens in the
    /// reader (`parser::atom`).
    Atom(String),
    Eof,
}

// ============================================================================
// Lexer
// ============================================================================

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> char {
        if self.position < self.input.len() {
            self.input[self.position]
        } else {
            '\0'
        }
    }

    fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        loop {
            while !self.is_eof() && self.current_char().is_whitespace() {
                self.advance();
            }
            // Comments run from semicolon to end of line
            if self.current_char() == ';' {
                while !self.is_eof() && self.current_char() != '\n' {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_atom(&mut self) -> Token {
        let mut text = String::new();
        while !self.is_eof() {
            let ch = self.current_char();
            if ch.is_whitespace() || matches!(ch, '(' | ')' | ';') {
                break;
            }
            text.push(ch);
            self.advance();
        }
        Token::Atom(text)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.is_eof() {
            return Token::Eof;
        }

        match self.current_char() {
            '(' => {
                self.advance();
                Token::LParen
            }
            ')' => {
                self.advance();
                Token::RParen
            }
            _ => self.read_atom(),
        }
    }
}

/// Tokenize the whole input. The `Eof` marker is not included.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token() {
            Token::Eof => break,
            token => tokens.push(token),
        }
    }
    tokens
}
