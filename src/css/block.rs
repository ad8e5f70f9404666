//! Declaration blocks and style rules

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

/// Ordered `property:value` pairs of a `{...}` block.
///
/// Values are kept as written (trimmed), quoted strings included, so the
/// block can be emitted again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeclarationBlock {
    declarations: IndexMap<String, String>,
}

impl DeclarationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration. A repeated property keeps its first position and takes the new value.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.declarations.insert(property.into(), value.into())
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(|s| s.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.declarations.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Add all declarations of `other`, overriding on conflicts
    pub fn extend(&mut self, other: &DeclarationBlock) {
        for (property, value) in other.iter() {
            self.insert(property, value);
        }
    }
}

impl Hash for DeclarationBlock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for (property, value) in self.iter() {
            property.hash(state);
            value.hash(state);
        }
    }
}

impl fmt::Display for DeclarationBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (property, value) in self.iter() {
            write!(f, "{}:{};", property, value)?;
        }
        Ok(())
    }
}

/// A selector and its declaration block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: DeclarationBlock,
}

impl StyleRule {
    /// Class names and ids named by the selector list.
    ///
    /// `.a, #b` yields `a` and `b`; compound selectors such as `g .a` are
    /// not simple names and are skipped.
    pub fn identifiers(&self) -> Vec<&str> {
        self.selector
            .split(',')
            .map(str::trim)
            .filter_map(|part| part.strip_prefix('.').or_else(|| part.strip_prefix('#')))
            .filter(|name| {
                !name.is_empty()
                    && name
                        .chars()
                        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
            })
            .collect()
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{{}}}", self.selector, self.declarations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut block = DeclarationBlock::new();
        block.insert("fill", "red");
        block.insert("stroke", "blue");
        assert_eq!(block.insert("fill", "green"), Some("red".to_string()));
        assert_eq!(block.to_string(), "fill:green;stroke:blue;");
    }

    #[test]
    fn test_identifiers() {
        let rule = StyleRule {
            selector: ".st0, #logo, g .nested, rect".to_string(),
            declarations: DeclarationBlock::new(),
        };
        assert_eq!(rule.identifiers(), vec!["st0", "logo"]);
    }

    #[test]
    fn test_rule_display() {
        let mut declarations = DeclarationBlock::new();
        declarations.insert("fill", "none");
        let rule = StyleRule {
            selector: ".a".to_string(),
            declarations,
        };
        assert_eq!(rule.to_string(), ".a{fill:none;}");
    }
}
