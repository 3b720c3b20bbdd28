//! Single-valued leaf attributes.

use super::characteristics::AttributeCharacteristics;
use super::value::AttributeValue;
use crate::error::AttributeResult;
use chrono::{DateTime, Utc};

/// A named attribute holding one leaf value.
///
/// ```rust
/// use scim_attributes::attribute::SimpleAttribute;
///
/// let given = SimpleAttribute::new("givenName", "Alice");
/// assert_eq!(given.name(), "givenName");
/// assert_eq!(given.string_value(), Some("Alice"));
/// ```
#[derive(Debug, PartialEq)]
pub struct SimpleAttribute {
    name: String,
    characteristics: AttributeCharacteristics,
    value: AttributeValue,
}

impl SimpleAttribute {
    /// Create a simple attribute. Characteristics default to the value's type.
    pub fn new(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            characteristics: AttributeCharacteristics::of_type(value.data_type()),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn characteristics(&self) -> &AttributeCharacteristics {
        &self.characteristics
    }

    pub fn characteristics_mut(&mut self) -> &mut AttributeCharacteristics {
        &mut self.characteristics
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    /// Replace the held value, returning the previous one.
    pub fn update_value(&mut self, value: impl Into<AttributeValue>) -> AttributeValue {
        std::mem::replace(&mut self.value, value.into())
    }

    pub fn string_value(&self) -> Option<&str> {
        self.value.as_str()
    }

    pub fn boolean_value(&self) -> Option<bool> {
        self.value.as_bool()
    }

    pub fn integer_value(&self) -> Option<i64> {
        self.value.as_i64()
    }

    pub fn decimal_value(&self) -> Option<f64> {
        self.value.as_f64()
    }

    pub fn date_time_value(&self) -> Option<&DateTime<Utc>> {
        self.value.as_date_time()
    }

    pub fn binary_value(&self) -> Option<&[u8]> {
        self.value.as_bytes()
    }

    pub fn reference_value(&self) -> Option<&str> {
        self.value.as_reference()
    }

    /// Deep copy. Fails only if the value is an extension that cannot be duplicated.
    pub fn copy_attribute(&self) -> AttributeResult<Self> {
        Ok(Self {
            name: self.name.clone(),
            characteristics: self.characteristics.clone(),
            value: self.value.try_clone()?,
        })
    }

    /// Simple attributes have no sub-attributes.
    pub fn delete_sub_attributes(&mut self) {}
}
