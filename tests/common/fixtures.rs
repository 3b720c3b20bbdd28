//! Fixture attribute trees and extension values.

use scim_attributes::{
    AttributeError, AttributeResult, AttributeType, AttributeValue, ComplexAttribute,
    ExtensionValue, MultiValuedAttribute, SimpleAttribute,
};
use serde_json::{Value, json};
use std::any::Any;

/// The `name` attribute with `givenName` Alice and `familyName` Smith.
pub fn alice_name() -> ComplexAttribute {
    let mut name = ComplexAttribute::new("name");
    name.set_sub_attribute(SimpleAttribute::new("givenName", "Alice"));
    name.set_sub_attribute(SimpleAttribute::new("familyName", "Smith"));
    name
}

/// An email entry for a multi-valued `emails` attribute.
pub fn email_entry(value: &str, kind: &str, primary: bool) -> ComplexAttribute {
    ComplexAttribute::anonymous()
        .with_sub_attribute(SimpleAttribute::new("value", value))
        .with_sub_attribute(SimpleAttribute::new("type", kind))
        .with_sub_attribute(SimpleAttribute::new("primary", primary))
}

/// A work and a home email, the work one primary.
pub fn two_emails() -> MultiValuedAttribute {
    let mut emails = MultiValuedAttribute::new("emails");
    emails.add_attribute_value(email_entry("bjensen@example.com", "work", true));
    emails.add_attribute_value(email_entry("babs@jensen.org", "home", false));
    emails
}

/// A chain of complex attributes `depth` levels deep, each holding a leaf
/// named `level` and the next container under `child`.
pub fn nested_chain(depth: usize) -> ComplexAttribute {
    let mut current = ComplexAttribute::new("child")
        .with_sub_attribute(SimpleAttribute::new("level", depth as i64));
    for level in (0..depth).rev() {
        current = ComplexAttribute::new(if level == 0 { "root" } else { "child" })
            .with_sub_attribute(SimpleAttribute::new("level", level as i64))
            .with_sub_attribute(current);
    }
    current
}

/// An extension value bound to an external handle. Copying fails unless the
/// handle is detachable.
#[derive(Debug)]
pub struct HandleValue {
    pub handle: u32,
    pub detachable: bool,
}

impl HandleValue {
    pub fn detachable(handle: u32) -> AttributeValue {
        AttributeValue::Extension(Box::new(Self {
            handle,
            detachable: true,
        }))
    }

    pub fn bound(handle: u32) -> AttributeValue {
        AttributeValue::Extension(Box::new(Self {
            handle,
            detachable: false,
        }))
    }
}

impl ExtensionValue for HandleValue {
    fn type_name(&self) -> &str {
        "handle"
    }

    fn attribute_type(&self) -> AttributeType {
        AttributeType::Reference
    }

    fn try_clone_boxed(&self) -> AttributeResult<Box<dyn ExtensionValue>> {
        if !self.detachable {
            return Err(AttributeError::copy_failed(
                format!("handle-{}", self.handle),
                "handle is bound to its owner",
            ));
        }
        Ok(Box::new(Self {
            handle: self.handle,
            detachable: true,
        }))
    }

    fn as_json_value(&self) -> Value {
        json!({ "handle": self.handle })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
