//! Single-pass scanner for style text
//!
//! The scanner walks the text once, tracking three states:
//!
//! - inside a quoted string (`"` or `'`): copied verbatim, escapes included
//! - inside a `/* */` comment: dropped
//! - brace depth: 0 is selector text, 1 is a declaration block, deeper
//!   braces are copied into the current value
//!
//! `;` and `:` are only syntactic at depth 1 outside strings and comments.
//! A bare declaration body has no closing brace, so a stray `}` there only
//! ends the current declaration.

use std::iter::Peekable;
use std::str::Chars;

use crate::css::block::{DeclarationBlock, StyleRule};

/// Where scanning starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    /// Full rules: `selector { ... }`
    Rules,
    /// A bare block body, as in a `style` attribute
    DeclarationBody,
}

pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    start: Start,
    depth: usize,
    selector: String,
    segment: String,
    /// Byte offset in `segment` of the first syntactic ':'
    colon: Option<usize>,
    block: DeclarationBlock,
    rules: Vec<StyleRule>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, start: Start) -> Self {
        Self {
            chars: input.chars().peekable(),
            start,
            depth: match start {
                Start::Rules => 0,
                Start::DeclarationBody => 1,
            },
            selector: String::new(),
            segment: String::new(),
            colon: None,
            block: DeclarationBlock::new(),
            rules: Vec::new(),
        }
    }

    /// Scan to the end of input and return the rules found.
    ///
    /// An unterminated block at the end of input still yields its rule.
    pub fn scan(mut self) -> Vec<StyleRule> {
        while let Some(ch) = self.chars.next() {
            if ch == '/' && self.chars.peek() == Some(&'*') {
                self.chars.next();
                self.skip_comment();
                continue;
            }
            if ch == '"' || ch == '\'' {
                self.copy_string(ch);
                continue;
            }

            match (ch, self.depth) {
                ('{', 0) => self.depth = 1,
                ('{', _) => {
                    self.depth += 1;
                    self.segment.push(ch);
                }
                ('}', 0) => tracing::debug!("stray '}}' outside a declaration block"),
                ('}', 1) if self.start == Start::DeclarationBody => {
                    tracing::debug!("stray '}}' in a declaration body, read as ';'");
                    self.end_declaration();
                }
                ('}', 1) => {
                    self.end_rule();
                    self.depth = 0;
                }
                ('}', _) => {
                    self.depth -= 1;
                    self.segment.push(ch);
                }
                (';', 1) => self.end_declaration(),
                (':', 1) if self.colon.is_none() => {
                    self.colon = Some(self.segment.len());
                    self.segment.push(ch);
                }
                (_, 0) => self.selector.push(ch),
                _ => self.segment.push(ch),
            }
        }

        if self.depth > 0 {
            self.end_rule();
        }
        self.rules
    }

    fn skip_comment(&mut self) {
        while let Some(ch) = self.chars.next() {
            if ch == '*' && self.chars.peek() == Some(&'/') {
                self.chars.next();
                return;
            }
        }
        tracing::debug!("unterminated comment in style text");
    }

    fn copy_string(&mut self, quote: char) {
        let target = if self.depth == 0 {
            &mut self.selector
        } else {
            &mut self.segment
        };
        target.push(quote);
        while let Some(ch) = self.chars.next() {
            target.push(ch);
            if ch == '\\' {
                if let Some(escaped) = self.chars.next() {
                    target.push(escaped);
                }
            } else if ch == quote {
                return;
            }
        }
        tracing::debug!("unterminated string in style text");
    }

    fn end_declaration(&mut self) {
        let segment = std::mem::take(&mut self.segment);
        let colon = self.colon.take();
        if segment.trim().is_empty() {
            return;
        }

        let Some(colon) = colon else {
            tracing::debug!(segment = segment.trim(), "declaration without ':' skipped");
            return;
        };
        let property = segment[..colon].trim();
        let value = segment[colon + 1..].trim();
        if property.is_empty() {
            tracing::debug!(value, "declaration without property name skipped");
            return;
        }
        self.block.insert(property, value);
    }

    fn end_rule(&mut self) {
        self.end_declaration();
        let selector = std::mem::take(&mut self.selector);
        self.rules.push(StyleRule {
            selector: selector.trim().to_string(),
            declarations: std::mem::take(&mut self.block),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(input: &str) -> Vec<StyleRule> {
        Scanner::new(input, Start::Rules).scan()
    }

    fn body(input: &str) -> DeclarationBlock {
        Scanner::new(input, Start::DeclarationBody)
            .scan()
            .into_iter()
            .next()
            .map(|rule| rule.declarations)
            .unwrap_or_default()
    }

    #[test]
    fn test_selector_and_block() {
        let found = rules("  .a  { fill : red ; stroke:blue }");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].selector, ".a");
        assert_eq!(found[0].declarations.get("fill"), Some("red"));
        assert_eq!(found[0].declarations.get("stroke"), Some("blue"));
    }

    #[test]
    fn test_strings_are_opaque() {
        let block = body(r#"font-family:"a;b:c{d}";x:1"#);
        assert_eq!(block.get("font-family"), Some(r#""a;b:c{d}""#));
        assert_eq!(block.get("x"), Some("1"));
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let block = body(r#"content:"say \"hi;\"";y:2"#);
        assert_eq!(block.get("content"), Some(r#""say \"hi;\"""#));
        assert_eq!(block.get("y"), Some("2"));
    }

    #[test]
    fn test_single_quoted_string() {
        let block = body("font-family:'Open Sans; Bold'");
        assert_eq!(block.get("font-family"), Some("'Open Sans; Bold'"));
    }

    #[test]
    fn test_comments_dropped() {
        let found = rules("/* head */.a/*x*/{fill:/* inline; */red;/* tail */}");
        assert_eq!(found[0].selector, ".a");
        assert_eq!(found[0].declarations.to_string(), "fill:red;");
    }

    #[test]
    fn test_comment_markers_inside_string_kept() {
        let block = body(r#"content:"/* not a comment */""#);
        assert_eq!(block.get("content"), Some(r#""/* not a comment */""#));
    }

    #[test]
    fn test_colon_in_value() {
        let block = body("background:url(http://example.com/a.png)");
        assert_eq!(block.get("background"), Some("url(http://example.com/a.png)"));
    }

    #[test]
    fn test_nested_braces_kept_in_value() {
        let found = rules(".a{x:{b;c};y:1}");
        assert_eq!(found[0].declarations.get("x"), Some("{b;c}"));
        assert_eq!(found[0].declarations.get("y"), Some("1"));
    }

    #[test]
    fn test_skipped_segments() {
        let block = body(";;novalue;:orphan;fill:red;");
        assert_eq!(block.len(), 1);
        assert_eq!(block.get("fill"), Some("red"));
    }

    #[test]
    fn test_stray_brace_in_body() {
        let block = body("fill:red}stroke:blue");
        assert_eq!(block.len(), 2);
        assert_eq!(block.get("fill"), Some("red"));
        assert_eq!(block.get("stroke"), Some("blue"));
    }

    #[test]
    fn test_multiple_rules() {
        let found = rules(".a{fill:red}\n#b{stroke:blue;}");
        let selectors: Vec<_> = found.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec![".a", "#b"]);
    }

    #[test]
    fn test_unterminated_block() {
        let found = rules(".a{fill:red");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].declarations.get("fill"), Some("red"));
    }

    #[test]
    fn test_no_block() {
        assert!(rules(".a").is_empty());
    }
}
