//! Lexer for path data using logos

use logos::Logos;

use crate::error::{ParseError, Span};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r\f,]+")]
pub enum Token {
    #[regex(r"[MmLlHhVvZzCcSsQqTtAa]", |lex| lex.slice().chars().next())]
    Command(char),

    // A sign or a second '.' starts a new number: "10-5" and "0.5.5" are two each
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok().filter(|n| n.is_finite()))]
    Number(f64),
}

/// Lex path data into tokens with spans
pub fn lex(input: &str) -> Result<Vec<(Token, Span)>, ParseError> {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(t) => Ok((t, span)),
            Err(()) => {
                let text = &input[span.clone()];
                match text.chars().next() {
                    Some(letter) if letter.is_alphabetic() => {
                        Err(ParseError::UnknownCommand { letter, span })
                    }
                    _ => Err(ParseError::malformed_number(text)),
                }
            }
        })
        .collect()
}
