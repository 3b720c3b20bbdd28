//! Leaf values held by simple and multi-valued attributes.
//!
//! Core SCIM data types are stored natively. Values defined by schema
//! extensions plug in through [`ExtensionValue`], whose duplication is
//! allowed to fail; that failure is what aborts a deep copy of any tree
//! containing the value.

use crate::error::AttributeResult;
use crate::schema::types::AttributeType;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::any::Any;
use std::fmt::Debug;

/// A value defined outside the core SCIM data types.
///
/// Implementors decide how (and whether) they can be duplicated. Returning
/// an error from [`try_clone_boxed`](ExtensionValue::try_clone_boxed) makes
/// every deep copy that reaches the value fail with that same error.
pub trait ExtensionValue: Debug + Send + Sync {
    /// Identifier of the extension type, used for equality
    fn type_name(&self) -> &str;

    /// The SCIM data type this value presents as
    fn attribute_type(&self) -> AttributeType;

    /// Duplicate the value as a boxed trait object
    fn try_clone_boxed(&self) -> AttributeResult<Box<dyn ExtensionValue>>;

    /// JSON view of the value, used for equality and inspection
    fn as_json_value(&self) -> Value;

    /// Get type information for downcasting
    fn as_any(&self) -> &dyn Any;
}

impl PartialEq for dyn ExtensionValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name() == other.type_name() && self.as_json_value() == other.as_json_value()
    }
}

/// A single leaf value.
///
/// Equality compares decimals bit for bit, so a NaN equals its own copy
/// while `0.0` and `-0.0` differ.
#[derive(Debug)]
pub enum AttributeValue {
    String(String),
    Boolean(bool),
    Decimal(f64),
    Integer(i64),
    DateTime(DateTime<Utc>),
    Binary(Vec<u8>),
    /// URI reference
    Reference(String),
    Extension(Box<dyn ExtensionValue>),
}

impl AttributeValue {
    /// The SCIM data type of this value.
    pub fn data_type(&self) -> AttributeType {
        match self {
            Self::String(_) => AttributeType::String,
            Self::Boolean(_) => AttributeType::Boolean,
            Self::Decimal(_) => AttributeType::Decimal,
            Self::Integer(_) => AttributeType::Integer,
            Self::DateTime(_) => AttributeType::DateTime,
            Self::Binary(_) => AttributeType::Binary,
            Self::Reference(_) => AttributeType::Reference,
            Self::Extension(ext) => ext.attribute_type(),
        }
    }

    /// Duplicate the value. Only extension values can fail.
    pub fn try_clone(&self) -> AttributeResult<Self> {
        Ok(match self {
            Self::String(s) => Self::String(s.clone()),
            Self::Boolean(b) => Self::Boolean(*b),
            Self::Decimal(d) => Self::Decimal(*d),
            Self::Integer(i) => Self::Integer(*i),
            Self::DateTime(dt) => Self::DateTime(*dt),
            Self::Binary(bytes) => Self::Binary(bytes.clone()),
            Self::Reference(uri) => Self::Reference(uri.clone()),
            Self::Extension(ext) => Self::Extension(ext.try_clone_boxed()?),
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Reference(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn as_extension(&self) -> Option<&dyn ExtensionValue> {
        match self {
            Self::Extension(ext) => Some(ext.as_ref()),
            _ => None,
        }
    }
}

impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a.to_bits() == b.to_bits(),
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Binary(a), Self::Binary(b)) => a == b,
            (Self::Reference(a), Self::Reference(b)) => a == b,
            (Self::Extension(a), Self::Extension(b)) => **a == **b,
            _ => false,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<Box<dyn ExtensionValue>> for AttributeValue {
    fn from(value: Box<dyn ExtensionValue>) -> Self {
        Self::Extension(value)
    }
}
