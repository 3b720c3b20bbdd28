//! Deep copy tests.
//!
//! A copy must equal its source, share no state with it, recurse through
//! every variant, and fail as a whole when any descendant cannot be copied.

use crate::common::fixtures::{self, HandleValue};
use crate::common::{init_logging, string_value};
use scim_attributes::{
    Attribute, AttributeError, ComplexAttribute, MultiValuedAttribute, SimpleAttribute,
};

#[test]
fn test_copy_equals_source() {
    init_logging();
    let user = ComplexAttribute::new("User")
        .with_sub_attribute(fixtures::alice_name())
        .with_sub_attribute(fixtures::two_emails())
        .with_sub_attribute(SimpleAttribute::new("active", true));

    let copy = user.copy_attribute().expect("copy should succeed");
    assert_eq!(copy.name(), user.name());
    assert_eq!(copy, user);
}

#[test]
fn test_mutating_copy_leaves_source_untouched() {
    let source = fixtures::alice_name();
    let mut copy = source.copy_attribute().expect("copy should succeed");

    copy.remove_sub_attribute("givenName");
    copy.set_sub_attribute(SimpleAttribute::new("familyName", "Jones"));

    assert_eq!(string_value(&source, "givenName"), Some("Alice"));
    assert_eq!(string_value(&source, "familyName"), Some("Smith"));
}

#[test]
fn test_mutating_source_leaves_copy_untouched() {
    let mut source = fixtures::alice_name();
    let copy = source.copy_attribute().expect("copy should succeed");

    source.delete_sub_attributes();

    assert_eq!(copy.len(), 2);
    assert_eq!(string_value(&copy, "familyName"), Some("Smith"));
}

#[test]
fn test_copy_recurses_to_depth() {
    let source = fixtures::nested_chain(6);
    let mut copy = source.copy_attribute().expect("copy should succeed");
    assert_eq!(copy, source);

    // Cut the copy at the third level and make sure the source still reaches the bottom.
    let mut cursor = &mut copy;
    for _ in 0..3 {
        cursor = cursor
            .sub_attribute_mut("child")
            .and_then(Attribute::as_complex_mut)
            .expect("chain continues");
    }
    cursor.remove_sub_attribute("child");

    let mut depth = 0;
    let mut node = &source;
    while let Some(next) = node.sub_attribute("child").and_then(Attribute::as_complex) {
        depth += 1;
        node = next;
    }
    assert_eq!(depth, 6);
}

#[test]
fn test_copy_of_multi_valued_entries_is_independent() {
    let user = ComplexAttribute::new("User").with_sub_attribute(fixtures::two_emails());
    let mut copy = user.copy_attribute().expect("copy should succeed");

    if let Some(emails) = copy
        .sub_attribute_mut("emails")
        .and_then(Attribute::as_multi_valued_mut)
    {
        emails.delete_attribute_value(0);
    }

    let original = user
        .sub_attribute("emails")
        .and_then(Attribute::as_multi_valued)
        .expect("emails present");
    assert_eq!(original.attribute_values().len(), 2);
    assert!(original.primary().is_some());
}

#[test]
fn test_copy_of_anonymous_container() {
    let anonymous = ComplexAttribute::anonymous()
        .with_sub_attribute(SimpleAttribute::new("value", "bjensen@example.com"));
    let copy = anonymous.copy_attribute().expect("copy should succeed");
    assert!(copy.is_anonymous());
    assert_eq!(copy, anonymous);
}

#[test]
fn test_detachable_extension_values_copy() {
    let mut photo = ComplexAttribute::new("photo");
    photo.set_sub_attribute(SimpleAttribute::new("value", HandleValue::detachable(7)));

    let copy = photo.copy_attribute().expect("detachable handles copy");
    assert_eq!(copy, photo);
}

#[test]
fn test_descendant_failure_aborts_copy() {
    init_logging();
    let mut inner = ComplexAttribute::new("device");
    inner.set_sub_attribute(SimpleAttribute::new("serial", "SN-1"));
    inner.set_sub_attribute(SimpleAttribute::new("token", HandleValue::bound(42)));

    let user = ComplexAttribute::new("User")
        .with_sub_attribute(fixtures::alice_name())
        .with_sub_attribute(inner);

    match user.copy_attribute() {
        Err(AttributeError::CopyFailed { attribute, message }) => {
            assert_eq!(attribute, "handle-42");
            assert_eq!(message, "handle is bound to its owner");
        }
        other => panic!("Expected CopyFailed from the descendant, got {:?}", other),
    }
}

#[test]
fn test_failure_inside_multi_valued_aborts_copy() {
    let mut devices = MultiValuedAttribute::new("devices");
    devices.add_primitive_value(HandleValue::detachable(1));
    devices.add_primitive_value(HandleValue::bound(2));

    let user = ComplexAttribute::new("User").with_sub_attribute(devices);
    let result = user.copy_attribute();
    assert!(matches!(result, Err(AttributeError::CopyFailed { .. })));
}

#[test]
fn test_failed_copy_leaves_source_usable() {
    let mut user = ComplexAttribute::new("User")
        .with_sub_attribute(SimpleAttribute::new("token", HandleValue::bound(9)));
    assert!(user.copy_attribute().is_err());

    // Once the cause is removed, retrying succeeds.
    user.remove_sub_attribute("token");
    user.set_sub_attribute(SimpleAttribute::new("token", HandleValue::detachable(9)));
    let copy = user.copy_attribute().expect("retry succeeds");
    assert_eq!(copy, user);
}
