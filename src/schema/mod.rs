//! Attribute definitions for SCIM schemas.
//!
//! Definitions describe the characteristics stamped onto attribute trees by
//! the factory in [`crate::attribute::factory`]. They are plain data read
//! from RFC 7643 JSON; constraint enforcement is left to callers.
//!
//! # Examples
//!
//! ```rust
//! use scim_attributes::schema::{core_attribute_definition, AttributeType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let name = core_attribute_definition("name")?.expect("embedded");
//! assert_eq!(name.data_type, AttributeType::Complex);
//! assert!(name.sub_definition("givenName").is_some());
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod types;


pub use embedded::{core_attribute_definition, core_definitions};
pub use types::{AttributeDefinition, AttributeType, Mutability, Returned, Uniqueness};
