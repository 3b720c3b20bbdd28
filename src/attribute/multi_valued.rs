//! Multi-valued attributes.
//!
//! A multi-valued attribute holds either attribute entries (complex values
//! such as `emails`, where each entry is an anonymous complex attribute) or
//! primitive values (such as `schemas`). Both lists are owned and copied
//! deeply.

use super::Attribute;
use super::characteristics::AttributeCharacteristics;
use super::complex::ComplexAttribute;
use super::value::AttributeValue;
use crate::error::AttributeResult;
use crate::schema::types::AttributeType;
use log::{debug, trace};

/// Sub-attribute marking the primary entry of a multi-valued attribute.
pub const PRIMARY_SUB_ATTRIBUTE: &str = "primary";

/// A named list of values.
#[derive(Debug, PartialEq)]
pub struct MultiValuedAttribute {
    name: String,
    characteristics: AttributeCharacteristics,
    attribute_values: Vec<Attribute>,
    primitive_values: Vec<AttributeValue>,
}

impl MultiValuedAttribute {
    /// Create an empty multi-valued attribute.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            characteristics: AttributeCharacteristics::multi_valued_of(AttributeType::String),
            attribute_values: Vec::new(),
            primitive_values: Vec::new(),
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

    pub fn attribute_values(&self) -> &[Attribute] {
        &self.attribute_values
    }

    pub fn attribute_values_mut(&mut self) -> &mut [Attribute] {
        &mut self.attribute_values
    }

    /// Append an attribute entry.
    pub fn add_attribute_value(&mut self, value: impl Into<Attribute>) {
        self.attribute_values.push(value.into());
        trace!(
            "Added value to '{}', now {} entries",
            self.name,
            self.attribute_values.len()
        );
    }

    pub fn set_attribute_values(&mut self, values: Vec<Attribute>) {
        self.attribute_values = values;
    }

    /// Move every attribute entry out, leaving the list empty.
    pub fn take_attribute_values(&mut self) -> Vec<Attribute> {
        std::mem::take(&mut self.attribute_values)
    }

    /// Remove the attribute entry at `index`; out of range is a no-op.
    pub fn delete_attribute_value(&mut self, index: usize) -> Option<Attribute> {
        (index < self.attribute_values.len()).then(|| self.attribute_values.remove(index))
    }

    pub fn primitive_values(&self) -> &[AttributeValue] {
        &self.primitive_values
    }

    pub fn add_primitive_value(&mut self, value: impl Into<AttributeValue>) {
        self.primitive_values.push(value.into());
    }

    pub fn set_primitive_values(&mut self, values: Vec<AttributeValue>) {
        self.primitive_values = values;
    }

    /// Remove the primitive value at `index`; out of range is a no-op.
    pub fn delete_primitive_value(&mut self, index: usize) -> Option<AttributeValue> {
        (index < self.primitive_values.len()).then(|| self.primitive_values.remove(index))
    }

    /// Total number of entries across both lists.
    pub fn len(&self) -> usize {
        self.attribute_values.len() + self.primitive_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attribute_values.is_empty() && self.primitive_values.is_empty()
    }

    /// The first complex entry whose `primary` sub-attribute is `true`.
    pub fn primary(&self) -> Option<&ComplexAttribute> {
        self.attribute_values
            .iter()
            .filter_map(Attribute::as_complex)
            .find(|entry| {
                entry
                    .sub_attribute(PRIMARY_SUB_ATTRIBUTE)
                    .and_then(Attribute::as_simple)
                    .and_then(|primary| primary.boolean_value())
                    .unwrap_or(false)
            })
    }

    /// Remove every entry from both lists.
    pub fn delete_sub_attributes(&mut self) {
        self.attribute_values.clear();
        self.primitive_values.clear();
    }

    /// Deep copy of both lists, stopping at the first entry that fails to copy.
    pub fn copy_attribute(&self) -> AttributeResult<Self> {
        debug!(
            "Copying multi-valued attribute '{}' with {} entries",
            self.name,
            self.len()
        );
        let attribute_values = self
            .attribute_values
            .iter()
            .map(Attribute::copy_attribute)
            .collect::<AttributeResult<Vec<_>>>()?;
        let primitive_values = self
            .primitive_values
            .iter()
            .map(AttributeValue::try_clone)
            .collect::<AttributeResult<Vec<_>>>()?;

        Ok(Self {
            name: self.name.clone(),
            characteristics: self.characteristics.clone(),
            attribute_values,
            primitive_values,
        })
    }
}
