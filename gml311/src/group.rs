// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Choice groups and feature maps.
//!
//! An XML choice or substitution group is stored as tagged entries: each
//! entry carries the feature of the member it belongs to. A [`Choice`] holds
//! at most one entry, a [`FeatureMap`] an ordered list of them. Member
//! features resolve their value by filtering the entries on their
//! substitution family, the head member and every member substituting it.

use crate::error::Error;
use crate::meta::{FeatureId, PropertyKind};
use crate::model::NodeId;
use crate::property::{Previous, Property, Slot};
use crate::value::{FromValue, Value};

/// A value tagged with the feature it belongs to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    pub feature: FeatureId,
    pub value: Value,
}

impl Entry {
    pub fn new(feature: FeatureId, value: impl Into<Value>) -> Self {
        Self {
            feature,
            value: value.into(),
        }
    }
}

/// Member access on a group, used by the derived dispatch.
pub trait Group {
    fn entries(&self) -> &[Entry];

    /// The first member of `family`, or all of them if `many`.
    fn resolve(&self, family: &[FeatureId], many: bool) -> Value {
        let mut members = self
            .entries()
            .iter()
            .filter(|entry| family.contains(&entry.feature));
        if many {
            Value::Objects(
                members
                    .filter_map(|entry| entry.value.as_object())
                    .collect(),
            )
        } else {
            members
                .next()
                .map_or(Value::Null, |entry| entry.value.clone())
        }
    }

    fn contains_family(&self, family: &[FeatureId]) -> bool {
        self.entries()
            .iter()
            .any(|entry| family.contains(&entry.feature))
    }

    /// Replaces the members of `family` by `value` stored under `feature`.
    fn set_members(
        &mut self,
        feature: FeatureId,
        family: &[FeatureId],
        value: Value,
        many: bool,
    ) -> Result<Previous, Error>;

    fn remove_family(&mut self, family: &[FeatureId], many: bool) -> Previous;

    fn insert_member(
        &mut self,
        feature: FeatureId,
        family: &[FeatureId],
        index: Option<usize>,
        value: Value,
        many: bool,
    ) -> Result<usize, Error>;

    fn remove_member(
        &mut self,
        family: &[FeatureId],
        index: usize,
        many: bool,
    ) -> Result<Value, Error>;

    /// Removes `child` from the family and returns its position within it.
    fn remove_member_child(&mut self, family: &[FeatureId], child: NodeId) -> Option<usize>;
}

/// Values accepted for a member: one object, or a list if the member is
/// repeatable.
fn member_values(value: Value, many: bool) -> Result<Vec<Value>, Error> {
    match (value, many) {
        (Value::Null, _) => Ok(Vec::new()),
        (Value::Objects(nodes), true) => Ok(nodes.into_iter().map(Value::Object).collect()),
        (value @ Value::Object(_), _) => Ok(vec![value]),
        (other, _) => Err(Error::TypeMismatch {
            expected: if many { "object list" } else { "object" },
            found: other.type_name(),
        }),
    }
}

/// The single alternative of an `xsd:choice` or substitution group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Choice {
    entry: Option<Entry>,
}

impl Choice {
    pub fn get(&self) -> Option<&Entry> {
        self.entry.as_ref()
    }
}

impl Slot for Choice {
    type Value = Vec<Entry>;
}

impl Property for Choice {
    const KIND: PropertyKind = PropertyKind::Group {
        mixed: false,
        many: false,
    };

    fn get_value(&self) -> Value {
        Value::Entries(self.entry.iter().cloned().collect())
    }

    fn set_value(&mut self, value: Value) -> Result<Previous, Error> {
        let mut entries = match value {
            Value::Null => Vec::new(),
            other => Vec::<Entry>::from_value(other)?,
        };
        if entries.len() > 1 {
            return Err(Error::NotMany);
        }
        Ok(self.replace(entries.pop()))
    }

    fn unset_value(&mut self) -> Previous {
        self.replace(None)
    }

    fn is_set(&self) -> bool {
        self.entry.is_some()
    }

    fn remove_child(&mut self, child: NodeId) -> Option<usize> {
        self.remove_member_child_any(child)
    }

    fn collect_children(&self, _feature: FeatureId, out: &mut Vec<(FeatureId, NodeId)>) {
        if let Some(Entry {
            feature,
            value: Value::Object(child),
        }) = &self.entry
        {
            out.push((*feature, *child));
        }
    }

    fn remap_children(&mut self, map: &mut dyn FnMut(NodeId) -> NodeId) {
        if let Some(Entry {
            value: Value::Object(child),
            ..
        }) = &mut self.entry
        {
            *child = map(*child);
        }
    }
}

impl Choice {
    fn replace(&mut self, entry: Option<Entry>) -> Previous {
        let old = std::mem::replace(&mut self.entry, entry);
        Previous {
            was_set: old.is_some(),
            value: Value::Entries(old.into_iter().collect()),
        }
    }

    fn remove_member_child_any(&mut self, child: NodeId) -> Option<usize> {
        match &self.entry {
            Some(entry) if entry.value == Value::Object(child) => {
                self.entry = None;
                Some(0)
            }
            _ => None,
        }
    }
}

impl Group for Choice {
    fn entries(&self) -> &[Entry] {
        self.entry.as_slice()
    }

    fn set_members(
        &mut self,
        feature: FeatureId,
        family: &[FeatureId],
        value: Value,
        many: bool,
    ) -> Result<Previous, Error> {
        if many {
            return Err(Error::NotMany);
        }
        let previous = Previous {
            value: self.resolve(family, false),
            was_set: self.contains_family(family),
        };
        match member_values(value, false)?.pop() {
            Some(value) => self.entry = Some(Entry { feature, value }),
            // clearing a member leaves another alternative in place
            None if previous.was_set => self.entry = None,
            None => {}
        }
        Ok(previous)
    }

    fn remove_family(&mut self, family: &[FeatureId], _many: bool) -> Previous {
        let previous = Previous {
            value: self.resolve(family, false),
            was_set: self.contains_family(family),
        };
        if previous.was_set {
            self.entry = None;
        }
        previous
    }

    fn insert_member(
        &mut self,
        _feature: FeatureId,
        _family: &[FeatureId],
        _index: Option<usize>,
        _value: Value,
        _many: bool,
    ) -> Result<usize, Error> {
        Err(Error::NotMany)
    }

    fn remove_member(
        &mut self,
        _family: &[FeatureId],
        _index: usize,
        _many: bool,
    ) -> Result<Value, Error> {
        Err(Error::NotMany)
    }

    fn remove_member_child(&mut self, family: &[FeatureId], child: NodeId) -> Option<usize> {
        if self.contains_family(family) {
            self.remove_member_child_any(child)
        } else {
            None
        }
    }
}

/// Ordered entries of a repeatable group or of mixed content.
///
/// Character content of a mixed element is kept as string entries tagged
/// with the feature of the map itself.
///
/// # Examples
///
/// ```
/// use gml311::group::{Entry, FeatureMap};
/// use gml311::meta::FeatureId;
///
/// let mut map = FeatureMap::default();
/// map.push(Entry::new(FeatureId::new(0), "some text"));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureMap {
    entries: Vec<Entry>,
}

impl FeatureMap {
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a data entry. Objects are attached through the model.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Positions of the entries of `family`.
    fn family_positions(&self, family: &[FeatureId]) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| family.contains(&entry.feature))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Slot for FeatureMap {
    type Value = Vec<Entry>;

    const MANY: bool = true;
}

impl Property for FeatureMap {
    const KIND: PropertyKind = PropertyKind::Group {
        mixed: false,
        many: true,
    };

    fn get_value(&self) -> Value {
        Value::Entries(self.entries.clone())
    }

    fn set_value(&mut self, value: Value) -> Result<Previous, Error> {
        let entries = match value {
            Value::Null => Vec::new(),
            other => Vec::<Entry>::from_value(other)?,
        };
        let old = std::mem::replace(&mut self.entries, entries);
        Ok(Previous {
            was_set: !old.is_empty(),
            value: Value::Entries(old),
        })
    }

    fn unset_value(&mut self) -> Previous {
        let old = std::mem::take(&mut self.entries);
        Previous {
            was_set: !old.is_empty(),
            value: Value::Entries(old),
        }
    }

    fn is_set(&self) -> bool {
        !self.entries.is_empty()
    }

    fn insert_value(&mut self, index: Option<usize>, value: Value) -> Result<usize, Error> {
        let entries = Vec::<Entry>::from_value(value)?;
        let index = index.unwrap_or(self.entries.len());
        if index > self.entries.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.splice(index..index, entries);
        Ok(index)
    }

    fn remove_value(&mut self, index: usize) -> Result<Value, Error> {
        if index >= self.entries.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        Ok(Value::Entries(vec![self.entries.remove(index)]))
    }

    fn remove_child(&mut self, child: NodeId) -> Option<usize> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.value == Value::Object(child))?;
        self.entries.remove(index);
        Some(index)
    }

    fn collect_children(&self, _feature: FeatureId, out: &mut Vec<(FeatureId, NodeId)>) {
        out.extend(
            self.entries
                .iter()
                .filter_map(|entry| entry.value.as_object().map(|child| (entry.feature, child))),
        );
    }

    fn remap_children(&mut self, map: &mut dyn FnMut(NodeId) -> NodeId) {
        for entry in &mut self.entries {
            if let Value::Object(child) = &mut entry.value {
                *child = map(*child);
            }
        }
    }
}

impl Group for FeatureMap {
    fn entries(&self) -> &[Entry] {
        &self.entries
    }

    fn set_members(
        &mut self,
        feature: FeatureId,
        family: &[FeatureId],
        value: Value,
        many: bool,
    ) -> Result<Previous, Error> {
        let values = member_values(value, many)?;
        let previous = Previous {
            value: self.resolve(family, many),
            was_set: self.contains_family(family),
        };

        // new members take the place of the first replaced one
        let at = self
            .entries
            .iter()
            .position(|entry| family.contains(&entry.feature))
            .unwrap_or(self.entries.len());
        self.entries.retain(|entry| !family.contains(&entry.feature));
        let at = at.min(self.entries.len());
        self.entries.splice(
            at..at,
            values.into_iter().map(|value| Entry { feature, value }),
        );

        Ok(previous)
    }

    fn remove_family(&mut self, family: &[FeatureId], many: bool) -> Previous {
        let previous = Previous {
            value: self.resolve(family, many),
            was_set: self.contains_family(family),
        };
        self.entries.retain(|entry| !family.contains(&entry.feature));
        previous
    }

    fn insert_member(
        &mut self,
        feature: FeatureId,
        family: &[FeatureId],
        index: Option<usize>,
        value: Value,
        many: bool,
    ) -> Result<usize, Error> {
        if !many {
            return Err(Error::NotMany);
        }
        let child = NodeId::from_value(value)?;
        let positions = self.family_positions(family);
        // appending keeps document order across families
        let (index, at) = match index {
            None => (positions.len(), self.entries.len()),
            Some(index) if index < positions.len() => (index, positions[index]),
            Some(index) if index == positions.len() => (
                index,
                positions.last().map_or(self.entries.len(), |last| last + 1),
            ),
            Some(index) => {
                return Err(Error::IndexOutOfBounds {
                    index,
                    len: positions.len(),
                })
            }
        };
        self.entries.insert(
            at,
            Entry {
                feature,
                value: Value::Object(child),
            },
        );
        Ok(index)
    }

    fn remove_member(
        &mut self,
        family: &[FeatureId],
        index: usize,
        many: bool,
    ) -> Result<Value, Error> {
        if !many {
            return Err(Error::NotMany);
        }
        let positions = self.family_positions(family);
        let at = positions.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: positions.len(),
        })?;
        Ok(self.entries.remove(*at).value)
    }

    fn remove_member_child(&mut self, family: &[FeatureId], child: NodeId) -> Option<usize> {
        let positions = self.family_positions(family);
        let (index, at) = positions
            .into_iter()
            .enumerate()
            .find(|(_, at)| self.entries[*at].value == Value::Object(child))?;
        self.entries.remove(at);
        Some(index)
    }
}
