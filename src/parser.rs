//! Reader: token stream -> expression tree.
//!
//! Atoms classify as numbers only when the whole token matches numeric
//! grammar; everything else is a symbol. Lists nest recursively.

use crate::error::Error;
use crate::language::{Value, list};
use crate::lexer::{Token, tokenize};

// ============================================================================
// Atom Classifier
// ============================================================================

/// Classify one atom token: integer parse first, then float, else symbol.
/// The whole token must match; `3abc` is a symbol.
pub fn atom(token: &str) -> Value {
    if let Ok(i) = token.parse::<i64>() {
        return Value::Number(i as f64);
    }
    // f64::from_str accepts "inf" and "nan"; those stay symbols here, so a
    // numeric token must lead with a digit, sign, or dot and come out finite.
    if token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
    {
        if let Ok(f) = token.parse::<f64>() {
            if f.is_finite() {
                return Value::Number(f);
            }
        }
    }
    Value::symbol(token)
}

// ============================================================================
// Reader
// ============================================================================

fn parse_tokens(tokens: &[Token]) -> Result<(Value, usize), Error> {
    if tokens.is_empty() {
        return Err(Error::Syntax("Unexpected end of input".to_string()));
    }

    match &tokens[0] {
        Token::Atom(text) => Ok((atom(text), 1)),
        Token::LParen => {
            let mut items = Vec::new();
            let mut i = 1;

            while i < tokens.len() {
                if matches!(tokens[i], Token::RParen) {
                    return Ok((list(items), i + 1));
                }
                let (value, consumed) = parse_tokens(&tokens[i..])?;
                items.push(value);
                i += consumed;
            }

            Err(Error::Syntax("Unexpected end of input".to_string()))
        }
        Token::RParen => Err(Error::Syntax("Unexpected )".to_string())),
        Token::Eof => Err(Error::Syntax("Unexpected end of input".to_string())),
    }
}

/// Read one expression from `input`. Trailing tokens are tolerated; the
/// interactive front end hands over one expression per line.
pub fn parse(input: &str) -> Result<Value, Error> {
    let tokens = tokenize(input);
    let (value, _) = parse_tokens(&tokens)?;
    Ok(value)
}

/// Read every expression from `input`, requiring the token stream to be
/// exhausted. Used by the file runner.
pub fn parse_all(input: &str) -> Result<Vec<Value>, Error> {
    let tokens = tokenize(input);
    let mut values = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let (value, consumed) = parse_tokens(&tokens[i..])?;
        values.push(value);
        i += consumed;
    }
    Ok(values)
}
