//! Complex attribute container tests.
//!
//! Covers keyed lookup, overwrite-on-set, removal, clearing and the bulk
//! mutation API as a resource mutation layer would drive it.

use crate::assert_keyed_by_name;
use crate::common::{fixtures, sorted_names, string_value};
use scim_attributes::{Attribute, ComplexAttribute, SimpleAttribute, SubAttributes};

/// The walkthrough from building a `name` attribute to editing it.
#[test]
fn test_name_attribute_scenario() {
    let mut name = ComplexAttribute::new("name");
    name.set_sub_attribute(SimpleAttribute::new("givenName", "Alice"));
    name.set_sub_attribute(SimpleAttribute::new("familyName", "Smith"));

    assert_eq!(string_value(&name, "givenName"), Some("Alice"));
    assert!(!name.has_sub_attribute("middleName"));

    let copy = name.copy_attribute().expect("copy should succeed");
    assert_eq!(copy, name);

    name.remove_sub_attribute("familyName");
    assert_eq!(name.sub_attributes().len(), 1);
    assert_eq!(sorted_names(&name), vec!["givenName"]);
    assert_eq!(sorted_names(&copy), vec!["familyName", "givenName"]);
}

#[test]
fn test_set_then_lookup_returns_equal_attribute() {
    let mut name = ComplexAttribute::new("name");
    let formatted = SimpleAttribute::new("formatted", "Ms. Barbara J Jensen, III");
    let expected = formatted.copy_attribute().expect("string values copy");

    name.set_sub_attribute(formatted);

    assert!(name.has_sub_attribute("formatted"));
    assert_eq!(
        name.sub_attribute("formatted"),
        Some(&Attribute::Simple(expected))
    );
}

#[test]
fn test_overwrite_keeps_single_entry() {
    let mut name = fixtures::alice_name();
    name.set_sub_attribute(SimpleAttribute::new("familyName", "Jensen"));
    name.set_sub_attribute(SimpleAttribute::new("familyName", "Smith-Jensen"));

    assert_eq!(name.len(), 2);
    assert_eq!(string_value(&name, "familyName"), Some("Smith-Jensen"));
    assert_keyed_by_name!(name);
}

#[test]
fn test_overwrite_can_change_variant() {
    let mut user = ComplexAttribute::new("User");
    user.set_sub_attribute(SimpleAttribute::new("name", "Alice Smith"));
    user.set_sub_attribute(fixtures::alice_name());

    assert_eq!(user.len(), 1);
    assert!(user.sub_attribute("name").is_some_and(Attribute::is_complex));
}

#[test]
fn test_remove_absent_is_noop() {
    let mut name = fixtures::alice_name();
    assert!(name.remove_sub_attribute("honorificPrefix").is_none());
    assert_eq!(name.len(), 2);

    let mut empty = ComplexAttribute::new("name");
    assert!(empty.remove_sub_attribute("givenName").is_none());
    assert!(empty.is_empty());
}

#[test]
fn test_removed_attribute_is_owned_by_caller() {
    let mut name = fixtures::alice_name();
    let removed = name
        .remove_sub_attribute("givenName")
        .expect("givenName was present");

    let mut other = ComplexAttribute::new("name");
    other.set_sub_attribute(removed);
    assert_eq!(string_value(&other, "givenName"), Some("Alice"));
    assert!(!name.has_sub_attribute("givenName"));
}

#[test]
fn test_delete_sub_attributes_on_nested_tree() {
    let mut user = ComplexAttribute::new("User")
        .with_sub_attribute(fixtures::alice_name())
        .with_sub_attribute(fixtures::two_emails());

    user.delete_sub_attributes();
    assert!(user.sub_attributes().is_empty());

    user.delete_sub_attributes();
    assert!(user.is_empty());
}

#[test]
fn test_delete_through_child_handle() {
    let mut user = ComplexAttribute::new("User").with_sub_attribute(fixtures::alice_name());

    if let Some(name) = user.sub_attribute_mut("name") {
        name.delete_sub_attributes();
    }

    let name = user
        .sub_attribute("name")
        .and_then(Attribute::as_complex)
        .expect("name stays in place");
    assert!(name.is_empty());
}

#[test]
fn test_bulk_replace_trusts_names_not_keys() {
    let mut name = fixtures::alice_name();

    let mut supplied = SubAttributes::new();
    supplied.insert(
        "given".to_string(),
        SimpleAttribute::new("givenName", "Barbara").into(),
    );
    supplied.insert(
        "family".to_string(),
        SimpleAttribute::new("familyName", "Jensen").into(),
    );
    name.set_sub_attributes(supplied);

    assert_keyed_by_name!(name);
    assert_eq!(sorted_names(&name), vec!["familyName", "givenName"]);
    assert_eq!(string_value(&name, "givenName"), Some("Barbara"));
}

#[test]
fn test_bulk_replace_drops_missing_children() {
    let mut name = fixtures::alice_name();
    let mut supplied = SubAttributes::new();
    supplied.insert(
        "formatted".to_string(),
        SimpleAttribute::new("formatted", "Alice Smith").into(),
    );
    name.set_sub_attributes(supplied);

    assert_eq!(sorted_names(&name), vec!["formatted"]);
}

#[test]
fn test_anonymous_container_named_before_insert() {
    let mut manager = ComplexAttribute::anonymous();
    manager.set_sub_attribute(SimpleAttribute::new("displayName", "John Smith"));
    manager.set_name("manager");

    let mut enterprise =
        ComplexAttribute::new("urn:ietf:params:scim:schemas:extension:enterprise:2.0:User");
    enterprise.set_sub_attribute(manager);

    assert!(enterprise.has_sub_attribute("manager"));
    assert_keyed_by_name!(enterprise);
}

#[test]
fn test_rename_in_bulk_pass_keeps_keys_consistent() {
    let mut name = fixtures::alice_name();
    name.for_each_sub_attribute_mut(|attribute| {
        let renamed = format!("{}_old", attribute.name());
        attribute.set_name(renamed);
    });

    assert_keyed_by_name!(name);
    assert_eq!(sorted_names(&name), vec!["familyName_old", "givenName_old"]);
}
