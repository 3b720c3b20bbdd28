//! SCIM 2.0 attribute trees for Rust.
//!
//! Models the attributes of identity resources (RFC 7643) as an owned tree:
//! leaf values, complex containers of named sub-attributes, and multi-valued
//! lists. Trees support lookup, in-place mutation, existence checks,
//! deletion and fallible deep copy.
//!
//! # Core Components
//!
//! - [`Attribute`] - A node in an attribute tree (simple, complex or multi-valued)
//! - [`ComplexAttribute`] - A named container of sub-attributes
//! - [`create_attribute`] - Stamps schema characteristics from an [`AttributeDefinition`]
//!
//! # Quick Start
//!
//! ```rust
//! use scim_attributes::{ComplexAttribute, SimpleAttribute};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut name = ComplexAttribute::new("name");
//! name.set_sub_attribute(SimpleAttribute::new("givenName", "Alice"));
//! name.set_sub_attribute(SimpleAttribute::new("familyName", "Smith"));
//!
//! // Snapshot before a tentative edit
//! let snapshot = name.copy_attribute()?;
//! name.remove_sub_attribute("familyName");
//!
//! assert!(!name.has_sub_attribute("familyName"));
//! assert!(snapshot.has_sub_attribute("familyName"));
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod error;
pub mod schema;

// Re-export commonly used types for convenience
pub use attribute::{
    Attribute, AttributeCharacteristics, AttributeValue, ComplexAttribute, ExtensionValue,
    MultiValuedAttribute, SimpleAttribute, SubAttributes, create_attribute, create_sub_attribute,
};
pub use error::{AttributeError, AttributeResult};
pub use schema::{AttributeDefinition, AttributeType, Mutability, Returned, Uniqueness};
