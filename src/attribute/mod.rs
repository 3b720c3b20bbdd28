//! Attribute trees for SCIM resources.
//!
//! An [`Attribute`] is one of three variants sharing the same capabilities
//! (a name, schema characteristics, deep copy and sub-attribute deletion):
//!
//! - [`SimpleAttribute`] - a single leaf value such as `userName`
//! - [`ComplexAttribute`] - a container of named sub-attributes such as `name`
//! - [`MultiValuedAttribute`] - a list of entries or primitives such as `emails`
//!
//! Complex attributes nest, so a resource's attributes form a tree that each
//! resource owns exclusively. Copies are always deep.
//!
//! # Examples
//!
//! ```rust
//! use scim_attributes::attribute::{Attribute, ComplexAttribute, SimpleAttribute};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let name: Attribute = ComplexAttribute::new("name")
//!     .with_sub_attribute(SimpleAttribute::new("givenName", "Alice"))
//!     .into();
//!
//! let copy = name.copy_attribute()?;
//! assert_eq!(copy, name);
//! assert!(copy.is_complex());
//! # Ok(())
//! # }
//! ```

pub mod characteristics;
pub mod complex;
pub mod factory;
pub mod multi_valued;
pub mod simple;
pub mod value;

pub use characteristics::AttributeCharacteristics;
pub use complex::{ComplexAttribute, SubAttributes};
pub use factory::{create_attribute, create_sub_attribute};
pub use multi_valued::MultiValuedAttribute;
pub use simple::SimpleAttribute;
pub use value::{AttributeValue, ExtensionValue};

use crate::error::AttributeResult;
use crate::schema::types::AttributeType;

/// A node in an attribute tree.
#[derive(Debug, PartialEq)]
pub enum Attribute {
    Simple(SimpleAttribute),
    Complex(ComplexAttribute),
    MultiValued(MultiValuedAttribute),
}

impl Attribute {
    pub fn name(&self) -> &str {
        match self {
            Self::Simple(attr) => attr.name(),
            Self::Complex(attr) => attr.name(),
            Self::MultiValued(attr) => attr.name(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Self::Simple(attr) => attr.set_name(name),
            Self::Complex(attr) => attr.set_name(name),
            Self::MultiValued(attr) => attr.set_name(name),
        }
    }

    pub fn characteristics(&self) -> &AttributeCharacteristics {
        match self {
            Self::Simple(attr) => attr.characteristics(),
            Self::Complex(attr) => attr.characteristics(),
            Self::MultiValued(attr) => attr.characteristics(),
        }
    }

    pub fn characteristics_mut(&mut self) -> &mut AttributeCharacteristics {
        match self {
            Self::Simple(attr) => attr.characteristics_mut(),
            Self::Complex(attr) => attr.characteristics_mut(),
            Self::MultiValued(attr) => attr.characteristics_mut(),
        }
    }

    /// The declared data type of the attribute.
    pub fn attribute_type(&self) -> AttributeType {
        self.characteristics().data_type
    }

    /// Deep copy of the attribute and everything below it.
    ///
    /// Fails with the error of the first descendant that cannot be copied.
    pub fn copy_attribute(&self) -> AttributeResult<Self> {
        Ok(match self {
            Self::Simple(attr) => Self::Simple(attr.copy_attribute()?),
            Self::Complex(attr) => Self::Complex(attr.copy_attribute()?),
            Self::MultiValued(attr) => Self::MultiValued(attr.copy_attribute()?),
        })
    }

    /// Remove all sub-attributes or values. A no-op for simple attributes.
    pub fn delete_sub_attributes(&mut self) {
        match self {
            Self::Simple(attr) => attr.delete_sub_attributes(),
            Self::Complex(attr) => attr.delete_sub_attributes(),
            Self::MultiValued(attr) => attr.delete_sub_attributes(),
        }
    }

    pub fn is_simple(&self) -> bool {
        matches!(self, Self::Simple(_))
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(_))
    }

    pub fn is_multi_valued(&self) -> bool {
        matches!(self, Self::MultiValued(_))
    }

    pub fn as_simple(&self) -> Option<&SimpleAttribute> {
        match self {
            Self::Simple(attr) => Some(attr),
            _ => None,
        }
    }

    pub fn as_simple_mut(&mut self) -> Option<&mut SimpleAttribute> {
        match self {
            Self::Simple(attr) => Some(attr),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&ComplexAttribute> {
        match self {
            Self::Complex(attr) => Some(attr),
            _ => None,
        }
    }

    pub fn as_complex_mut(&mut self) -> Option<&mut ComplexAttribute> {
        match self {
            Self::Complex(attr) => Some(attr),
            _ => None,
        }
    }

    pub fn as_multi_valued(&self) -> Option<&MultiValuedAttribute> {
        match self {
            Self::MultiValued(attr) => Some(attr),
            _ => None,
        }
    }

    pub fn as_multi_valued_mut(&mut self) -> Option<&mut MultiValuedAttribute> {
        match self {
            Self::MultiValued(attr) => Some(attr),
            _ => None,
        }
    }

    /// Short label of the variant, used in error messages.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Simple(_) => "simple",
            Self::Complex(_) => "complex",
            Self::MultiValued(_) => "multi-valued",
        }
    }
}

impl From<SimpleAttribute> for Attribute {
    fn from(attr: SimpleAttribute) -> Self {
        Self::Simple(attr)
    }
}

impl From<ComplexAttribute> for Attribute {
    fn from(attr: ComplexAttribute) -> Self {
        Self::Complex(attr)
    }
}

impl From<MultiValuedAttribute> for Attribute {
    fn from(attr: MultiValuedAttribute) -> Self {
        Self::MultiValued(attr)
    }
}
