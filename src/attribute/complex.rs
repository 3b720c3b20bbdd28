//! Complex attributes: named containers of sub-attributes.
//!
//! A [`ComplexAttribute`] owns its children outright and keys each one by the
//! child's own name. The mapping is never handed out mutably, so two
//! guarantees hold at all times:
//!
//! - every key equals the name of the attribute stored under it
//! - a name maps to at most one child; setting an existing name replaces it
//!
//! Copies are always deep: [`ComplexAttribute::copy_attribute`] duplicates
//! the whole subtree, so no two live trees share child state.

use super::Attribute;
use super::characteristics::AttributeCharacteristics;
use crate::error::AttributeResult;
use crate::schema::types::AttributeType;
use log::{debug, trace, warn};
use std::collections::HashMap;

/// Mapping from sub-attribute name to the owned sub-attribute.
pub type SubAttributes = HashMap<String, Attribute>;

/// A named container of sub-attributes.
///
/// # Examples
///
/// ```rust
/// use scim_attributes::attribute::{ComplexAttribute, SimpleAttribute};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut name = ComplexAttribute::new("name");
/// name.set_sub_attribute(SimpleAttribute::new("givenName", "Alice"));
/// name.set_sub_attribute(SimpleAttribute::new("familyName", "Smith"));
///
/// let snapshot = name.copy_attribute()?;
/// name.remove_sub_attribute("familyName");
///
/// assert_eq!(name.len(), 1);
/// assert!(snapshot.has_sub_attribute("familyName"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq)]
pub struct ComplexAttribute {
    name: String,
    characteristics: AttributeCharacteristics,
    sub_attributes: SubAttributes,
}

impl ComplexAttribute {
    /// Create an empty complex attribute with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            characteristics: AttributeCharacteristics::of_type(AttributeType::Complex),
            sub_attributes: SubAttributes::new(),
        }
    }

    /// Create an empty complex attribute with no name.
    ///
    /// Builders that learn the name later assign it with [`set_name`](Self::set_name)
    /// before the attribute is stored under a parent.
    pub fn anonymous() -> Self {
        Self::new(String::new())
    }

    /// Add a sub-attribute, builder style.
    pub fn with_sub_attribute(mut self, attribute: impl Into<Attribute>) -> Self {
        self.set_sub_attribute(attribute);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether the attribute is still waiting for a name.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    pub fn characteristics(&self) -> &AttributeCharacteristics {
        &self.characteristics
    }

    pub fn characteristics_mut(&mut self) -> &mut AttributeCharacteristics {
        &mut self.characteristics
    }

    /// Read-only view of all sub-attributes.
    pub fn sub_attributes(&self) -> &SubAttributes {
        &self.sub_attributes
    }

    /// Get a sub-attribute by exact name.
    pub fn sub_attribute(&self, name: &str) -> Option<&Attribute> {
        self.sub_attributes.get(name)
    }

    /// Get a sub-attribute by exact name for in-place edits.
    ///
    /// Renaming the returned attribute would break its keying, so use
    /// [`for_each_sub_attribute_mut`](Self::for_each_sub_attribute_mut) when
    /// names may change.
    pub fn sub_attribute_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.sub_attributes.get_mut(name)
    }

    /// Check whether a sub-attribute with this exact name exists.
    pub fn has_sub_attribute(&self, name: &str) -> bool {
        self.sub_attributes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sub_attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sub_attributes.is_empty()
    }

    /// Names of all sub-attributes, in no particular order.
    pub fn sub_attribute_names(&self) -> impl Iterator<Item = &str> {
        self.sub_attributes.keys().map(String::as_str)
    }

    /// Insert a sub-attribute keyed by its own name, replacing any existing
    /// sub-attribute with that name.
    pub fn set_sub_attribute(&mut self, attribute: impl Into<Attribute>) {
        let attribute = attribute.into();
        let key = attribute.name().to_string();
        trace!("Setting sub-attribute '{}' on '{}'", key, self.name);
        if self.sub_attributes.insert(key, attribute).is_some() {
            trace!("Replaced existing sub-attribute on '{}'", self.name);
        }
    }

    /// Replace every sub-attribute with the contents of `sub_attributes`.
    ///
    /// Entries are stored under the value's own name, whatever key they were
    /// supplied under. When two entries carry the same name, an entry already
    /// keyed by that name wins; otherwise the one with the smallest supplied
    /// key wins. Dropped entries are logged.
    pub fn set_sub_attributes(&mut self, sub_attributes: SubAttributes) {
        self.sub_attributes = sub_attributes;
        self.rekey();
    }

    /// Replace every sub-attribute with the given attributes.
    pub fn replace_all<I>(&mut self, attributes: I)
    where
        I: IntoIterator,
        I::Item: Into<Attribute>,
    {
        self.sub_attributes.clear();
        for attribute in attributes {
            self.set_sub_attribute(attribute);
        }
    }

    /// Apply `f` to every sub-attribute.
    ///
    /// Sub-attributes renamed by `f` are re-keyed under their new name once
    /// the pass finishes. A rename onto a name that an unrenamed child still
    /// holds is dropped; the unrenamed child is kept.
    pub fn for_each_sub_attribute_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Attribute),
    {
        for attribute in self.sub_attributes.values_mut() {
            f(attribute);
        }
        self.rekey();
    }

    /// Keep only the sub-attributes for which `keep` returns true.
    pub fn retain_sub_attributes<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Attribute) -> bool,
    {
        self.sub_attributes.retain(|_, attribute| keep(attribute));
    }

    /// Remove the sub-attribute with this name, if present.
    ///
    /// Returns the removed attribute; dropping the result discards it.
    pub fn remove_sub_attribute(&mut self, name: &str) -> Option<Attribute> {
        let removed = self.sub_attributes.remove(name);
        if removed.is_some() {
            trace!("Removed sub-attribute '{}' from '{}'", name, self.name);
        }
        removed
    }

    /// Move every sub-attribute out, leaving the container empty.
    pub fn take_sub_attributes(&mut self) -> SubAttributes {
        std::mem::take(&mut self.sub_attributes)
    }

    /// Remove all sub-attributes.
    pub fn delete_sub_attributes(&mut self) {
        trace!(
            "Deleting {} sub-attributes from '{}'",
            self.sub_attributes.len(),
            self.name
        );
        self.sub_attributes.clear();
    }

    /// Deep copy of this attribute and its whole subtree.
    ///
    /// The first sub-attribute that fails to copy aborts the operation and
    /// its error is returned unchanged.
    pub fn copy_attribute(&self) -> AttributeResult<Self> {
        debug!(
            "Copying complex attribute '{}' with {} sub-attributes",
            self.name,
            self.sub_attributes.len()
        );
        let sub_attributes = self
            .sub_attributes
            .iter()
            .map(|(key, attribute)| Ok((key.clone(), attribute.copy_attribute()?)))
            .collect::<AttributeResult<SubAttributes>>()?;

        Ok(Self {
            name: self.name.clone(),
            characteristics: self.characteristics.clone(),
            sub_attributes,
        })
    }

    /// Restore the key == name invariant after bulk edits.
    fn rekey(&mut self) {
        if self
            .sub_attributes
            .iter()
            .all(|(key, attribute)| key == attribute.name())
        {
            return;
        }

        let entries = std::mem::take(&mut self.sub_attributes);
        let (mut misplaced, settled): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .partition(|(key, attribute)| key != attribute.name());
        self.sub_attributes = settled.into_iter().collect();

        // Map iteration order is random; settle collisions by supplied key.
        misplaced.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (key, attribute) in misplaced {
            if self.sub_attributes.contains_key(attribute.name()) {
                warn!(
                    "Dropping sub-attribute supplied as '{}' on '{}': '{}' is already present",
                    key,
                    self.name,
                    attribute.name()
                );
                continue;
            }
            warn!(
                "Sub-attribute supplied as '{}' on '{}' is named '{}'; storing under its name",
                key,
                self.name,
                attribute.name()
            );
            self.sub_attributes
                .insert(attribute.name().to_string(), attribute);
        }
    }
}

impl Default for ComplexAttribute {
    fn default() -> Self {
        Self::anonymous()
    }
}
