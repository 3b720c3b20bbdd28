//! Definition-driven attribute construction.
//!
//! Builders assemble attributes loosely, then pass them through
//! [`create_attribute`] to stamp the schema characteristics onto them. The
//! factory checks that the attribute has the shape its definition declares
//! (complex, multi-valued, value type) and recurses into sub-attributes and
//! entries that have definitions. It does not enforce required-ness,
//! uniqueness or canonical values.

use super::Attribute;
use super::characteristics::AttributeCharacteristics;
use super::complex::ComplexAttribute;
use super::multi_valued::MultiValuedAttribute;
use super::value::AttributeValue;
use crate::error::{AttributeError, AttributeResult};
use crate::schema::types::AttributeDefinition;
use log::debug;

/// Stamp a definition's characteristics onto an attribute.
///
/// Anonymous attributes take the definition's name. The attribute is
/// consumed; on error nothing is returned.
///
/// ```rust
/// use scim_attributes::attribute::{create_attribute, ComplexAttribute, SimpleAttribute};
/// use scim_attributes::schema::core_attribute_definition;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let definition = core_attribute_definition("name")?.expect("embedded");
/// let name = create_attribute(
///     &definition,
///     ComplexAttribute::anonymous().with_sub_attribute(SimpleAttribute::new("givenName", "Alice")),
/// )?;
/// assert_eq!(name.name(), "name");
/// # Ok(())
/// # }
/// ```
pub fn create_attribute(
    definition: &AttributeDefinition,
    attribute: impl Into<Attribute>,
) -> AttributeResult<Attribute> {
    let mut attribute = attribute.into();
    if attribute.name().is_empty() {
        if definition.name.is_empty() {
            return Err(AttributeError::UnnamedAttribute);
        }
        attribute.set_name(definition.name.clone());
    }

    debug!(
        "Creating {} attribute '{}' from definition '{}'",
        attribute.kind(),
        attribute.name(),
        definition.name
    );

    let name = attribute.name().to_string();
    match (&mut attribute, definition.multi_valued) {
        (Attribute::MultiValued(multi), true) => stamp_entries(definition, multi)?,
        (_, true) => return Err(AttributeError::ExpectedMultiValue { attribute: name }),
        (Attribute::MultiValued(_), false) => {
            return Err(AttributeError::ExpectedSingleValue { attribute: name });
        }
        (Attribute::Complex(complex), false) => {
            if !definition.is_complex() {
                return Err(AttributeError::type_mismatch(
                    name,
                    definition.data_type.as_str(),
                    "complex",
                ));
            }
            stamp_sub_attributes(definition, complex)?;
        }
        (Attribute::Simple(simple), false) => {
            if definition.is_complex() {
                return Err(AttributeError::NotComplex { attribute: name });
            }
            check_value_type(definition, &name, simple.value())?;
        }
    }

    let characteristics = attribute.characteristics_mut();
    let uri = characteristics.uri.take();
    *characteristics = AttributeCharacteristics {
        uri,
        ..AttributeCharacteristics::from_definition(definition)
    };
    Ok(attribute)
}

/// Stamp the matching sub-attribute definition of `parent` onto an attribute.
///
/// Fails with [`AttributeError::UnknownDefinition`] when `parent` declares no
/// sub-attribute with the attribute's name.
pub fn create_sub_attribute(
    parent: &AttributeDefinition,
    attribute: impl Into<Attribute>,
) -> AttributeResult<Attribute> {
    let attribute = attribute.into();
    let definition = parent.sub_definition(attribute.name()).ok_or_else(|| {
        AttributeError::unknown_definition(format!("{}.{}", parent.name, attribute.name()))
    })?;
    create_attribute(definition, attribute)
}

fn stamp_sub_attributes(
    definition: &AttributeDefinition,
    complex: &mut ComplexAttribute,
) -> AttributeResult<()> {
    let stamped = complex
        .take_sub_attributes()
        .into_values()
        .map(|child| match definition.sub_definition(child.name()) {
            Some(sub_definition) => create_attribute(sub_definition, child),
            None => {
                debug!(
                    "No definition for '{}.{}', keeping it unchanged",
                    definition.name,
                    child.name()
                );
                Ok(child)
            }
        })
        .collect::<AttributeResult<Vec<_>>>()?;
    complex.replace_all(stamped);
    Ok(())
}

fn stamp_entries(
    definition: &AttributeDefinition,
    multi: &mut MultiValuedAttribute,
) -> AttributeResult<()> {
    for value in multi.primitive_values() {
        check_value_type(definition, multi.name(), value)?;
    }

    let entry_definition = AttributeDefinition {
        multi_valued: false,
        ..definition.clone()
    };
    let entries = multi
        .take_attribute_values()
        .into_iter()
        .map(|entry| create_attribute(&entry_definition, entry))
        .collect::<AttributeResult<Vec<_>>>()?;
    multi.set_attribute_values(entries);
    Ok(())
}

fn check_value_type(
    definition: &AttributeDefinition,
    name: &str,
    value: &AttributeValue,
) -> AttributeResult<()> {
    let actual = value.data_type();
    if actual != definition.data_type {
        return Err(AttributeError::type_mismatch(
            name,
            definition.data_type.as_str(),
            actual.as_str(),
        ));
    }
    Ok(())
}
