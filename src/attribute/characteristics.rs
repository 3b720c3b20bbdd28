//! Schema characteristics carried by every attribute variant.

use crate::schema::types::{AttributeDefinition, AttributeType, Mutability, Returned, Uniqueness};
use serde::{Deserialize, Serialize};

/// Metadata describing how an attribute behaves under its schema.
///
/// Characteristics are plain values: a deep copy of an attribute copies them
/// verbatim, and stamping a definition onto an attribute replaces them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeCharacteristics {
    /// Fully qualified attribute URI, when known
    pub uri: Option<String>,
    /// Declared data type
    pub data_type: AttributeType,
    pub multi_valued: bool,
    pub description: Option<String>,
    pub required: bool,
    pub case_exact: bool,
    pub mutability: Mutability,
    pub returned: Returned,
    pub uniqueness: Uniqueness,
    pub canonical_values: Vec<String>,
    pub reference_types: Vec<String>,
}

impl AttributeCharacteristics {
    /// Default characteristics for the given data type.
    pub fn of_type(data_type: AttributeType) -> Self {
        Self {
            data_type,
            ..Self::default()
        }
    }

    /// Default characteristics for a multi-valued attribute of the given type.
    pub fn multi_valued_of(data_type: AttributeType) -> Self {
        Self {
            data_type,
            multi_valued: true,
            ..Self::default()
        }
    }

    /// Characteristics declared by a definition.
    pub fn from_definition(definition: &AttributeDefinition) -> Self {
        Self {
            uri: None,
            data_type: definition.data_type,
            multi_valued: definition.multi_valued,
            description: definition.description.clone(),
            required: definition.required,
            case_exact: definition.case_exact,
            mutability: definition.mutability,
            returned: definition.returned,
            uniqueness: definition.uniqueness,
            canonical_values: definition.canonical_values.clone(),
            reference_types: definition.reference_types.clone(),
        }
    }

    /// Whether clients may change the attribute's value.
    pub fn is_writable(&self) -> bool {
        matches!(self.mutability, Mutability::ReadWrite | Mutability::WriteOnly)
    }
}
