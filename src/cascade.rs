//! Resolving the effective value of a property
//!
//! Precedence, highest first:
//!
//! 1. the element's own attribute, unless it is `inherit`
//! 2. the declaration in the element's referenced named style, unless `inherit`
//! 3. when either of the above said `inherit`: the parent scope's resolved value
//! 4. the default of the property's kind
//!
//! `none` is a value like any other here: it wins where it appears and is
//! never replaced by a parent lookup.

use std::collections::HashMap;

use crate::config::ParserConfig;
use crate::css::{self, DeclarationBlock, StyleRule};
use crate::error::ParseError;
use crate::property::Property;
use crate::value::{FromValue, TypedValue};

/// A class or id style from the document's style sheet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamedStyle {
    pub identifier: String,
    pub declarations: DeclarationBlock,
}

impl NamedStyle {
    pub fn new(identifier: impl Into<String>, declarations: DeclarationBlock) -> Self {
        Self {
            identifier: identifier.into(),
            declarations,
        }
    }
}

/// Lookup of named styles, owned by the document
pub trait StyleLookup {
    fn lookup(&self, identifier: &str) -> Option<&NamedStyle>;
}

impl StyleLookup for HashMap<String, NamedStyle> {
    fn lookup(&self, identifier: &str) -> Option<&NamedStyle> {
        self.get(identifier)
    }
}

/// Named styles keyed by class name or id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRegistry {
    styles: HashMap<String, NamedStyle>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every simple selector of a style sheet
    pub fn from_stylesheet(text: &str) -> Self {
        let mut registry = Self::new();
        for rule in css::parse_stylesheet(text) {
            registry.add_rule(&rule);
        }
        registry
    }

    /// Register a rule under each class or id it names.
    ///
    /// A later rule for the same name overrides matching declarations.
    pub fn add_rule(&mut self, rule: &StyleRule) {
        let identifiers = rule.identifiers();
        if identifiers.is_empty() {
            tracing::debug!(selector = %rule.selector, "selector names no class or id, skipped");
        }
        for identifier in identifiers {
            self.styles
                .entry(identifier.to_string())
                .or_insert_with(|| NamedStyle::new(identifier, DeclarationBlock::new()))
                .declarations
                .extend(&rule.declarations);
        }
    }

    pub fn insert(&mut self, style: NamedStyle) -> Option<NamedStyle> {
        self.styles.insert(style.identifier.clone(), style)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl StyleLookup for StyleRegistry {
    fn lookup(&self, identifier: &str) -> Option<&NamedStyle> {
        self.styles.get(identifier)
    }
}

/// The typed attributes of one element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeHolder {
    values: HashMap<String, TypedValue>,
}

impl AttributeHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value; a later value for the same name replaces the earlier one
    pub fn insert(&mut self, name: impl Into<String>, value: TypedValue) -> Option<TypedValue> {
        self.values.insert(name.into(), value)
    }

    /// Parse `raw` as `property` and store it
    pub fn parse_attribute(&mut self, property: &Property, raw: &str) -> Result<(), ParseError> {
        self.parse_attribute_with_config(property, raw, &ParserConfig::default())
    }

    pub fn parse_attribute_with_config(
        &mut self,
        property: &Property,
        raw: &str,
        config: &ParserConfig,
    ) -> Result<(), ParseError> {
        let value = property.parse_with_config(raw, config)?;
        self.insert(property.name, value);
        Ok(())
    }

    /// Parse the declarations of an inline `style` for the given properties.
    ///
    /// Parsed declarations replace attributes of the same name. Declarations
    /// for properties not listed are ignored.
    pub fn apply_declarations(
        &mut self,
        declarations: &DeclarationBlock,
        properties: &[Property],
        config: &ParserConfig,
    ) -> Result<(), ParseError> {
        for property in properties {
            if let Some(raw) = declarations.get(property.name) {
                self.parse_attribute_with_config(property, raw, config)?;
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.values.get(name)
    }

    /// Typed view of a stored value, `None` when absent or of another kind
    pub fn get_as<T: FromValue>(&self, property: &Property) -> Option<&T> {
        self.values
            .get(property.name)
            .filter(|value| value.kind() == property.kind)
            .and_then(|value| value.get::<T>())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypedValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// An element as seen by resolution: its attributes, its named style and its parent
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub attributes: &'a AttributeHolder,
    pub style: Option<&'a NamedStyle>,
    pub parent: Option<&'a Scope<'a>>,
}

impl<'a> Scope<'a> {
    pub fn new(attributes: &'a AttributeHolder) -> Self {
        Self {
            attributes,
            style: None,
            parent: None,
        }
    }

    pub fn with_style(mut self, style: Option<&'a NamedStyle>) -> Self {
        self.style = style;
        self
    }

    pub fn with_parent(mut self, parent: &'a Scope<'a>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn resolve(&self, property: &Property) -> Result<TypedValue, ParseError> {
        self.resolve_with_config(property, &ParserConfig::default())
    }

    pub fn resolve_with_config(
        &self,
        property: &Property,
        config: &ParserConfig,
    ) -> Result<TypedValue, ParseError> {
        resolve_with_config(property, self.attributes, self.style, self.parent, config)
    }
}

/// Resolve the effective value of `property` with the default configuration
pub fn resolve(
    property: &Property,
    local: &AttributeHolder,
    style_ref: Option<&NamedStyle>,
    ancestor: Option<&Scope<'_>>,
) -> Result<TypedValue, ParseError> {
    resolve_with_config(property, local, style_ref, ancestor, &ParserConfig::default())
}

pub fn resolve_with_config(
    property: &Property,
    local: &AttributeHolder,
    style_ref: Option<&NamedStyle>,
    ancestor: Option<&Scope<'_>>,
    config: &ParserConfig,
) -> Result<TypedValue, ParseError> {
    let mut inherit = false;

    if let Some(value) = local.get(property.name).filter(|v| v.is_set()) {
        if !value.is_inherited() {
            return Ok(value.clone());
        }
        inherit = true;
    }

    if let Some(raw) = style_ref.and_then(|style| style.declarations.get(property.name)) {
        let value = property.parse_with_config(raw, config)?;
        if !value.is_inherited() {
            return Ok(value);
        }
        inherit = true;
    }

    if inherit {
        match ancestor {
            Some(parent) => return parent.resolve_with_config(property, config),
            None => tracing::trace!(property = property.name, "inherit at root, using default"),
        }
    }

    Ok(TypedValue::new(property.kind))
}
