//! Error types for value, style and path parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Text where a number was required
    #[error("malformed number '{text}'")]
    MalformedNumber { text: String },

    /// Wrong number of parts for a point, array, transform or command
    #[error("expected {expected} argument(s) in '{text}', found {found}")]
    InvalidArgumentCount {
        text: String,
        expected: String,
        found: usize,
    },

    /// A path command whose numbers do not form whole argument groups
    #[error("incomplete arguments for path command '{command}': {found} number(s), groups of {arity}")]
    IncompleteArguments {
        command: char,
        arity: usize,
        found: usize,
        span: Span,
    },

    /// Letter in path data that is not a path command
    #[error("unknown path command '{letter}'")]
    UnknownCommand { letter: char, span: Span },

    /// Path data that is empty or does not start with a command letter
    #[error("path data is empty or missing a command: '{text}'")]
    EmptyOrMissingCommand { text: String },

    #[error("unknown transform function '{name}'")]
    UnknownTransformFunction { name: String, span: Span },

    #[error("'{text}' is not one of: {}", .allowed.join(", "))]
    UnknownEnumerationValue {
        text: String,
        allowed: Vec<&'static str>,
    },

    #[error("empty or missing input")]
    EmptyOrMissingInput,

    /// Style rule text without a `{...}` block
    #[error("style rule '{text}' has no declaration block")]
    MissingDeclarationBlock { text: String },

    /// Second `consume_text` on a value that already consumed its text
    #[error("value already set, cannot consume '{text}'")]
    AlreadyConsumed { text: String },

    #[error("syntax error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    /// Any of the above, annotated with the attribute or property it came from
    #[error("invalid value for '{property}': {source}")]
    Property {
        property: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub fn malformed_number(text: impl Into<String>) -> Self {
        Self::MalformedNumber { text: text.into() }
    }

    pub fn argument_count(text: impl Into<String>, expected: impl Into<String>, found: usize) -> Self {
        Self::InvalidArgumentCount {
            text: text.into(),
            expected: expected.into(),
            found,
        }
    }

    pub fn unknown_enumeration(text: impl Into<String>, allowed: &[&'static str]) -> Self {
        Self::UnknownEnumerationValue {
            text: text.into(),
            allowed: allowed.to_vec(),
        }
    }

    /// Attach the attribute or property name this error was raised for.
    ///
    /// Already annotated errors are left alone so the innermost name wins.
    pub fn for_property(self, property: impl Into<String>) -> Self {
        match self {
            Self::Property { .. } => self,
            other => Self::Property {
                property: property.into(),
                source: Box::new(other),
            },
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::IncompleteArguments { span, .. }
            | Self::UnknownCommand { span, .. }
            | Self::UnknownTransformFunction { span, .. }
            | Self::Syntax { span, .. } => Some(span),
            Self::Property { source, .. } => source.span(),
            _ => None,
        }
    }

    /// The error with any property annotation stripped
    pub fn root(&self) -> &ParseError {
        match self {
            Self::Property { source, .. } => source.root(),
            other => other,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().cloned().unwrap_or(0..source.len());
        let expected_str = match self.root() {
            Self::Syntax { expected, .. } if !expected.is_empty() => {
                format!("\nExpected: {}", expected.join(", "))
            }
            _ => String::new(),
        };
        let message = self.to_string();

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(format!("{}{}", message, expected_str))
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => message,
        }
    }
}

impl<'a> From<chumsky::error::Rich<'a, crate::transform::lexer::Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, crate::transform::lexer::Token>) -> Self {
        use chumsky::error::{RichPattern, RichReason};

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => match found {
                Some(tok) => format!("Unexpected {}", tok.describe()),
                None => "Unexpected end of input".to_string(),
            },
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected = err
            .expected()
            .filter_map(|e| match e {
                RichPattern::Token(tok) => Some(tok.describe()),
                RichPattern::Label(label) => Some(label.to_string()),
                RichPattern::EndOfInput => Some("end of input".to_string()),
                RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                RichPattern::Any => Some("any token".to_string()),
                RichPattern::SomethingElse => None,
            })
            .collect();

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_number_display() {
        let err = ParseError::malformed_number("12abc");
        assert_eq!(err.to_string(), "malformed number '12abc'");
    }

    #[test]
    fn test_property_context_wraps_once() {
        let err = ParseError::malformed_number("x")
            .for_property("stroke-width")
            .for_property("ignored");
        assert!(err.to_string().contains("'stroke-width'"));
        assert!(!err.to_string().contains("ignored"));
        assert_eq!(err.root(), &ParseError::malformed_number("x"));
    }

    #[test]
    fn test_span_through_property() {
        let err = ParseError::UnknownCommand {
            letter: 'B',
            span: 1..2,
        }
        .for_property("d");
        assert_eq!(err.span(), Some(&(1..2)));
    }

    #[test]
    fn test_enumeration_display_lists_allowed() {
        let err = ParseError::unknown_enumeration("dotted", &["butt", "round", "square"]);
        assert_eq!(err.to_string(), "'dotted' is not one of: butt, round, square");
    }

    #[test]
    fn test_format_includes_filename() {
        let err = ParseError::UnknownCommand {
            letter: 'B',
            span: 1..2,
        };
        let report = err.format("AB", "d");
        assert!(report.contains("unknown path command 'B'"));
    }
}
