//! Transform list grammar using chumsky
//!
//! ```text
//! list     := function ( ","? function )*
//! function := name "(" number ( ","? number )* ")"
//! ```
//!
//! Function names and argument counts are checked after parsing, so that
//! unknown names get their own error instead of a generic syntax error.

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::{ParseError, Span};
use crate::transform::lexer::{lex, Token};

/// A parsed but not yet validated transform function
#[derive(Debug, Clone, PartialEq)]
pub struct RawFunction {
    pub name: String,
    pub span: Span,
    pub args: Vec<f64>,
}

/// Parse transform list text into raw functions
pub fn parse(input: &str) -> Result<Vec<RawFunction>, Vec<ParseError>> {
    let len = input.len();
    let tokens = lex(input).map_err(|e| vec![e])?;

    let token_iter = tokens.into_iter().map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    transform_list_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn transform_list_parser<'a, I>(
) -> impl Parser<'a, I, Vec<RawFunction>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let name = select! {
        Token::Ident(s) => s,
    }
    .map_with(|s, e| (s, span_range(&e.span())));

    let number = select! {
        Token::Number(n) => n,
    };

    let arguments = number
        .separated_by(just(Token::Comma).or_not())
        .collect::<Vec<_>>()
        .delimited_by(just(Token::ParenOpen), just(Token::ParenClose));

    let function = name
        .then(arguments)
        .map(|((name, span), args)| RawFunction { name, span, args });

    function
        .separated_by(just(Token::Comma).or_not())
        .collect::<Vec<_>>()
        .then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_function() {
        let functions = parse("rotate(45)").expect("Should parse");
        assert_eq!(
            functions,
            vec![RawFunction {
                name: "rotate".to_string(),
                span: 0..6,
                args: vec![45.0],
            }]
        );
    }

    #[test]
    fn test_mixed_separators() {
        let functions = parse("translate(10 20),scale(2, 3) skewX(5)").expect("Should parse");
        let names: Vec<_> = functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["translate", "scale", "skewX"]);
        assert_eq!(functions[0].args, vec![10.0, 20.0]);
        assert_eq!(functions[1].args, vec![2.0, 3.0]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse("").expect("Should parse"), vec![]);
        assert_eq!(parse("   ").expect("Should parse"), vec![]);
    }

    #[test]
    fn test_unclosed_parenthesis() {
        let errs = parse("scale(2").unwrap_err();
        assert!(matches!(errs[0], ParseError::Syntax { .. }));
    }

    #[test]
    fn test_missing_arguments_is_syntax_error() {
        assert!(parse("rotate").is_err());
        assert!(parse("translate(10) 5").is_err());
    }
}
