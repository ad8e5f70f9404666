//! Integration tests for resolving effective property values across an element tree

use pretty_assertions::assert_eq;

use svg_attrs::property::{FILL, FILL_RULE, STROKE, STROKE_DASHARRAY, STROKE_WIDTH};
use svg_attrs::{
    AttributeHolder, Color, FillRule, Length, Paint, Scope, StyleLookup, StyleRegistry, Unit,
};

const SHEET: &str = r#"
    .outline { stroke: #333; stroke-width: 2px }
    .ghost   { fill: none; stroke: inherit }
    #badge   { fill-rule: evenodd; stroke-dasharray: 4, 2 }
"#;

fn element(attributes: &[(&svg_attrs::Property, &str)]) -> AttributeHolder {
    let mut holder = AttributeHolder::new();
    for (property, raw) in attributes {
        holder.parse_attribute(property, raw).expect("Should parse");
    }
    holder
}

#[test]
fn test_registry_from_stylesheet() {
    let registry = StyleRegistry::from_stylesheet(SHEET);
    assert_eq!(registry.len(), 3);
    assert!(registry.lookup("outline").is_some());
    assert!(registry.lookup("badge").is_some());
    assert!(registry.lookup("missing").is_none());
}

#[test]
fn test_inherit_chain_down_to_default() {
    let root_attrs = element(&[(&STROKE_WIDTH, "inherit")]);
    let group_attrs = element(&[(&STROKE_WIDTH, "inherit")]);
    let leaf_attrs = element(&[(&STROKE_WIDTH, "inherit")]);

    let root = Scope::new(&root_attrs);
    let group = Scope::new(&group_attrs).with_parent(&root);
    let leaf = Scope::new(&leaf_attrs).with_parent(&group);

    let resolved = leaf.resolve(&STROKE_WIDTH).expect("Should resolve");
    assert_eq!(resolved.get::<Length>(), Some(&Length::default()));
    assert_eq!(resolved, root.resolve(&STROKE_WIDTH).expect("Should resolve"));
}

#[test]
fn test_inherit_equals_ancestor_resolution() {
    let registry = StyleRegistry::from_stylesheet(SHEET);

    let group_attrs = AttributeHolder::new();
    let group = Scope::new(&group_attrs).with_style(registry.lookup("outline"));

    let shape_attrs = AttributeHolder::new();
    let shape = Scope::new(&shape_attrs)
        .with_style(registry.lookup("ghost"))
        .with_parent(&group);

    let stroke = shape.resolve(&STROKE).expect("Should resolve");
    assert_eq!(stroke, group.resolve(&STROKE).expect("Should resolve"));
    assert_eq!(
        stroke.get::<Paint>(),
        Some(&Paint::Color(Color::new(0x33, 0x33, 0x33)))
    );

    let fill = shape.resolve(&FILL).expect("Should resolve");
    assert!(fill.is_none());
}

#[test]
fn test_local_overrides_named_style() {
    let registry = StyleRegistry::from_stylesheet(SHEET);
    let attrs = element(&[(&STROKE_WIDTH, "0.5mm")]);
    let scope = Scope::new(&attrs).with_style(registry.lookup("outline"));

    let width = scope.resolve(&STROKE_WIDTH).expect("Should resolve");
    assert_eq!(width.get::<Length>(), Some(&Length::new(0.5, Unit::Mm)));
    let stroke = scope.resolve(&STROKE).expect("Should resolve");
    assert_eq!(stroke.to_string(), "#333333");
}

#[test]
fn test_id_style_values() {
    let registry = StyleRegistry::from_stylesheet(SHEET);
    let attrs = AttributeHolder::new();
    let scope = Scope::new(&attrs).with_style(registry.lookup("badge"));

    let rule = scope.resolve(&FILL_RULE).expect("Should resolve");
    assert_eq!(rule.get::<FillRule>(), Some(&FillRule::EvenOdd));

    let dashes = scope.resolve(&STROKE_DASHARRAY).expect("Should resolve");
    assert_eq!(
        dashes.get::<Vec<Length>>(),
        Some(&vec![Length::user(4.0), Length::user(2.0)])
    );
}

#[test]
fn test_missing_everywhere_is_default() {
    let attrs = AttributeHolder::new();
    let scope = Scope::new(&attrs);
    let fill = scope.resolve(&FILL).expect("Should resolve");
    assert!(!fill.is_set());
    assert_eq!(fill.get::<Paint>(), Some(&Paint::Color(Color::BLACK)));
}
