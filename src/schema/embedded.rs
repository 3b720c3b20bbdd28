//! Embedded core attribute definitions.
//!
//! A subset of the RFC 7643 User schema, kept as static JSON so builders and
//! tests have real definitions without loading schema files.

use super::types::AttributeDefinition;
use crate::error::AttributeResult;
use log::debug;

/// Core User attribute definitions as a JSON array.
pub fn core_user_attributes() -> &'static str {
    r#"[
  {
    "name": "userName",
    "type": "string",
    "multiValued": false,
    "description": "Unique identifier for the User, typically used by the user to directly authenticate.",
    "required": true,
    "caseExact": false,
    "mutability": "readWrite",
    "returned": "default",
    "uniqueness": "server"
  },
  {
    "name": "name",
    "type": "complex",
    "multiValued": false,
    "description": "The components of the user's real name.",
    "required": false,
    "mutability": "readWrite",
    "returned": "default",
    "uniqueness": "none",
    "subAttributes": [
      { "name": "formatted", "type": "string", "mutability": "readWrite" },
      { "name": "familyName", "type": "string", "mutability": "readWrite" },
      { "name": "givenName", "type": "string", "mutability": "readWrite" },
      { "name": "middleName", "type": "string", "mutability": "readWrite" },
      { "name": "honorificPrefix", "type": "string", "mutability": "readWrite" },
      { "name": "honorificSuffix", "type": "string", "mutability": "readWrite" }
    ]
  },
  {
    "name": "active",
    "type": "boolean",
    "multiValued": false,
    "description": "A Boolean value indicating the User's administrative status.",
    "mutability": "readWrite",
    "returned": "default"
  },
  {
    "name": "emails",
    "type": "complex",
    "multiValued": true,
    "description": "Email addresses for the user.",
    "mutability": "readWrite",
    "returned": "default",
    "subAttributes": [
      { "name": "value", "type": "string", "mutability": "readWrite" },
      { "name": "display", "type": "string", "mutability": "readWrite" },
      {
        "name": "type",
        "type": "string",
        "mutability": "readWrite",
        "canonicalValues": ["work", "home", "other"]
      },
      { "name": "primary", "type": "boolean", "mutability": "readWrite" }
    ]
  },
  {
    "name": "meta",
    "type": "complex",
    "multiValued": false,
    "description": "Resource metadata.",
    "mutability": "readOnly",
    "returned": "default",
    "subAttributes": [
      { "name": "resourceType", "type": "string", "caseExact": true, "mutability": "readOnly" },
      { "name": "created", "type": "dateTime", "mutability": "readOnly" },
      { "name": "lastModified", "type": "dateTime", "mutability": "readOnly" },
      { "name": "location", "type": "reference", "mutability": "readOnly", "referenceTypes": ["uri"] },
      { "name": "version", "type": "string", "caseExact": true, "mutability": "readOnly" }
    ]
  }
]"#
}

/// Parse the embedded core User attribute definitions.
pub fn core_definitions() -> AttributeResult<Vec<AttributeDefinition>> {
    let definitions: Vec<AttributeDefinition> = serde_json::from_str(core_user_attributes())?;
    debug!("Loaded {} core attribute definitions", definitions.len());
    Ok(definitions)
}

/// Look up one embedded core definition by exact name.
pub fn core_attribute_definition(name: &str) -> AttributeResult<Option<AttributeDefinition>> {
    Ok(core_definitions()?
        .into_iter()
        .find(|definition| definition.name == name))
}
