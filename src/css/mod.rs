//! Style text: `style` attributes and `<style>` rule blocks
//!
//! Only the subset SVG documents need is supported: simple selectors
//! followed by one declaration block. Quoted strings are kept verbatim and
//! comments are dropped, so emitting a parsed rule reproduces comment-free
//! input written in compact form.

mod block;
mod tokenizer;

pub use block::{DeclarationBlock, StyleRule};
pub use tokenizer::{Scanner, Start};

use crate::error::ParseError;

/// Parse a bare declaration body such as `fill:red;stroke-width:2`
pub fn parse_declarations(raw: &str) -> DeclarationBlock {
    Scanner::new(raw, Start::DeclarationBody)
        .scan()
        .into_iter()
        .next()
        .map(|rule| rule.declarations)
        .unwrap_or_default()
}

/// Parse a single rule such as `.st0{fill:none;}`
pub fn parse_rule(raw: &str) -> Result<StyleRule, ParseError> {
    Scanner::new(raw, Start::Rules)
        .scan()
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::MissingDeclarationBlock {
            text: raw.trim().to_string(),
        })
}

/// Parse every rule of a style sheet, in order
pub fn parse_stylesheet(raw: &str) -> Vec<StyleRule> {
    Scanner::new(raw, Start::Rules).scan()
}
