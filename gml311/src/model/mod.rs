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

//! The containment tree of schema objects.
//!
//! A [`Model`] owns every object in an arena. Objects refer to their children
//! by [`NodeId`] and every node records the parent and feature holding it,
//! so a child always has at most one container. All changes that involve
//! references go through the model: re-parenting a child first detaches it
//! from its previous container, and each operation returns the
//! [`Notification`]s describing what changed.

use std::collections::HashSet;
use std::fmt;

use log::trace;

use crate::error::Error;
use crate::group::Entry;
use crate::meta::{Class, FeatureId, FeatureMeta, PropertyKind};
use crate::object::{Key, Schema, SchemaObject};
use crate::value::{FromValue, Value};

mod builder;
mod copy;
mod notification;

pub use builder::ModelBuilder;
pub use notification::{Changes, Notification, NotificationKind};

/// Handle of an object in a [`Model`].
///
/// Handles of deleted objects are never reused: the slot of a deleted object
/// gets a new generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

/// The parent and feature holding an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Container {
    pub parent: NodeId,
    pub feature: FeatureId,
}

struct Node {
    object: Box<dyn SchemaObject>,
    container: Option<Container>,
}

impl Clone for Node {
    fn clone(&self) -> Self {
        Self {
            object: self.object.clone_boxed(),
            container: self.container,
        }
    }
}

#[derive(Clone)]
struct Cell {
    generation: u32,
    node: Option<Node>,
}

/// Arena of schema objects forming containment trees.
///
/// # Examples
///
/// ```
/// use gml311::model::{Model, NotificationKind};
/// use gml311::types::{GridEnvelopeType, GridLimitsType};
///
/// let mut model = Model::new();
/// let limits = model.create::<GridLimitsType>();
/// let envelope = model.create::<GridEnvelopeType>();
///
/// let changes = model
///     .assign(limits, GridLimitsType::GRID_ENVELOPE, Some(envelope))
///     .unwrap();
/// assert_eq!(changes[0].kind, NotificationKind::Set);
/// assert_eq!(model.container(envelope).unwrap().unwrap().parent, limits);
/// ```
#[derive(Clone)]
pub struct Model {
    cells: Vec<Cell>,
    free: Vec<u32>,
    live: usize,
    deliver: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("objects", &self.live)
            .field("deliver", &self.deliver)
            .finish()
    }
}

impl Model {
    pub fn new() -> Self {
        ModelBuilder::new().build()
    }

    pub fn builder() -> ModelBuilder {
        ModelBuilder::new()
    }

    /// Whether mutations report their changes.
    pub fn deliver(&self) -> bool {
        self.deliver
    }

    /// Turns change reporting on or off and returns the previous setting.
    pub fn set_deliver(&mut self, deliver: bool) -> bool {
        std::mem::replace(&mut self.deliver, deliver)
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    /// All live objects in slot order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            cell.node
                .as_ref()
                .map(|_| NodeId::new(index as u32, cell.generation))
        })
    }

    /// Objects without a container.
    pub fn roots(&self) -> Vec<NodeId> {
        self.ids()
            .filter(|id| matches!(self.node(*id), Ok(node) if node.container.is_none()))
            .collect()
    }

    /// Adds a default instance of `T`.
    pub fn create<T: Schema>(&mut self) -> NodeId {
        self.insert(T::default())
    }

    /// Adds an object as a new root.
    ///
    /// Any children the object refers to must be attached through the model
    /// afterwards; the ids it holds are not checked.
    pub fn insert<T: SchemaObject>(&mut self, object: T) -> NodeId {
        self.insert_boxed(Box::new(object))
    }

    pub fn insert_boxed(&mut self, object: Box<dyn SchemaObject>) -> NodeId {
        let node = Node {
            object,
            container: None,
        };
        self.live += 1;

        match self.free.pop() {
            Some(index) => {
                let cell = &mut self.cells[index as usize];
                cell.node = Some(node);
                NodeId::new(index, cell.generation)
            }
            None => {
                self.cells.push(Cell {
                    generation: 0,
                    node: Some(node),
                });
                NodeId::new((self.cells.len() - 1) as u32, 0)
            }
        }
    }

    /// Adds a default instance of a class, failing for abstract classes.
    pub fn instantiate(&mut self, class: &Class) -> Result<NodeId, Error> {
        let object = class.instantiate()?;
        Ok(self.insert_boxed(object))
    }

    fn node(&self, id: NodeId) -> Result<&Node, Error> {
        self.cells
            .get(id.index())
            .filter(|cell| cell.generation == id.generation)
            .and_then(|cell| cell.node.as_ref())
            .ok_or(Error::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, Error> {
        self.cells
            .get_mut(id.index())
            .filter(|cell| cell.generation == id.generation)
            .and_then(|cell| cell.node.as_mut())
            .ok_or(Error::UnknownNode(id))
    }

    pub fn object(&self, id: NodeId) -> Result<&dyn SchemaObject, Error> {
        self.node(id).map(|node| node.object.as_ref())
    }

    /// The object as its concrete type.
    pub fn object_as<T: Schema>(&self, id: NodeId) -> Result<&T, Error> {
        let object = self.object(id)?;
        object
            .downcast_ref::<T>()
            .ok_or_else(|| Error::ClassMismatch {
                expected: T::CLASS.name,
                found: object.class().name,
            })
    }

    pub fn class(&self, id: NodeId) -> Result<&'static Class, Error> {
        self.object(id).map(|object| object.class())
    }

    pub fn container(&self, id: NodeId) -> Result<Option<Container>, Error> {
        self.node(id).map(|node| node.container)
    }

    /// Direct children with the features holding them.
    pub fn children(&self, id: NodeId) -> Result<Vec<(FeatureId, NodeId)>, Error> {
        let mut children = Vec::new();
        self.object(id)?.contents(&mut children);
        Ok(children)
    }

    /// All objects below `id` in depth first order.
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>, Error> {
        let mut descendants = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let children = self.children(current)?;
            stack.extend(children.iter().rev().map(|(_, child)| *child));
            if current != id {
                descendants.push(current);
            }
        }
        Ok(descendants)
    }

    /// The top of the containment tree `id` belongs to.
    pub fn root(&self, id: NodeId) -> Result<NodeId, Error> {
        let mut current = id;
        while let Some(container) = self.container(current)? {
            current = container.parent;
        }
        Ok(current)
    }

    /// Whether `ancestor` is `id` or contains it.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> Result<bool, Error> {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return Ok(true);
            }
            current = self.container(node)?.map(|c| c.parent);
        }
        Ok(false)
    }

    fn feature_meta(&self, id: NodeId, feature: FeatureId) -> Result<&'static FeatureMeta, Error> {
        let class = self.class(id)?;
        class
            .feature(feature)
            .map(|feature| feature.meta)
            .ok_or(Error::UnknownFeature {
                class: class.name,
                feature,
            })
    }

    pub fn get(&self, id: NodeId, feature: impl Into<FeatureId>) -> Result<Value, Error> {
        self.object(id)?.get(feature.into())
    }

    pub fn is_set(&self, id: NodeId, feature: impl Into<FeatureId>) -> Result<bool, Error> {
        self.object(id)?.is_set(feature.into())
    }

    /// Reads a feature through a typed key.
    pub fn value<O: Schema, V: FromValue>(&self, id: NodeId, key: Key<O, V>) -> Result<V, Error> {
        self.check_class::<O>(id)?;
        V::from_value(self.get(id, key)?)
    }

    /// Sets a feature through a typed key.
    pub fn assign<O: Schema, V: Into<Value>>(
        &mut self,
        id: NodeId,
        key: Key<O, V>,
        value: V,
    ) -> Result<Changes, Error> {
        self.check_class::<O>(id)?;
        self.set(id, key, value)
    }

    fn check_class<O: Schema>(&self, id: NodeId) -> Result<(), Error> {
        let class = self.class(id)?;
        if class.is_subclass_of(O::CLASS) {
            Ok(())
        } else {
            Err(Error::ClassMismatch {
                expected: O::CLASS.name,
                found: class.name,
            })
        }
    }

    fn notify(&self, changes: &mut Changes, notification: Notification) {
        trace!("{notification}");
        if self.deliver {
            changes.push(notification);
        }
    }

    /// Sets a feature.
    ///
    /// References take an object or `Null`; setting the current child again
    /// only reports a touch. Lists and groups are replaced as a whole.
    pub fn set(
        &mut self,
        id: NodeId,
        feature: impl Into<FeatureId>,
        value: impl Into<Value>,
    ) -> Result<Changes, Error> {
        let feature = feature.into();
        let value = value.into();
        let meta = self.feature_meta(id, feature)?;

        match meta.kind {
            PropertyKind::Attribute { .. } => {
                let previous = self.node_mut(id)?.object.basic_set(feature, value)?;
                let new = self.get(id, feature)?;
                let mut changes = Changes::new();
                self.notify(
                    &mut changes,
                    Notification::set(id, feature, previous.value, new, previous.was_set),
                );
                Ok(changes)
            }
            PropertyKind::Containment | PropertyKind::Member { many: false, .. } => {
                let child = Option::<NodeId>::from_value(value)?;
                self.set_child(id, feature, meta, child)
            }
            PropertyKind::ContainmentList | PropertyKind::Member { many: true, .. } => {
                let children = match value {
                    Value::Null => Vec::new(),
                    other => Vec::<NodeId>::from_value(other)?,
                };
                for child in &children {
                    self.check_child(id, meta, *child)?;
                }
                let mut changes = self.clear(id, feature)?;
                for child in children {
                    changes.extend(self.insert_at(id, feature, None, child)?);
                }
                Ok(changes)
            }
            PropertyKind::Group { .. } => {
                let entries = match value {
                    Value::Null => Vec::new(),
                    other => Vec::<Entry>::from_value(other)?,
                };
                self.set_group(id, feature, entries)
            }
        }
    }

    fn set_child(
        &mut self,
        id: NodeId,
        feature: FeatureId,
        meta: &'static FeatureMeta,
        child: Option<NodeId>,
    ) -> Result<Changes, Error> {
        let mut changes = Changes::new();
        let current = self.get(id, feature)?.as_object();
        if current == child {
            let value = Value::from(child);
            self.notify(
                &mut changes,
                Notification::set(id, feature, value.clone(), value, child.is_some()),
            );
            return Ok(changes);
        }

        let slot = match child {
            Some(child) => {
                self.check_child(id, meta, child)?;
                changes.extend(self.detach(child)?);
                self.substitute(id, feature, child)?
            }
            None => feature,
        };

        let before = self.children(id)?;
        let previous = self.node_mut(id)?.object.basic_set(slot, child.into())?;
        self.relink(id, &before)?;

        self.notify(
            &mut changes,
            Notification::set(id, feature, previous.value, child.into(), previous.was_set),
        );
        Ok(changes)
    }

    fn set_group(
        &mut self,
        id: NodeId,
        feature: FeatureId,
        entries: Vec<Entry>,
    ) -> Result<Changes, Error> {
        let meta = self.feature_meta(id, feature)?;
        if !meta.kind.is_many() && entries.len() > 1 {
            return Err(Error::NotMany);
        }
        self.check_entries(id, feature, &entries)?;

        let mut changes = Changes::new();
        for child in entries.iter().filter_map(|entry| entry.value.as_object()) {
            if !self.in_group(id, feature, child)? {
                changes.extend(self.detach(child)?);
            }
        }

        let before = self.children(id)?;
        let previous = self
            .node_mut(id)?
            .object
            .basic_set(feature, Value::Entries(entries.clone()))?;
        self.relink(id, &before)?;

        self.notify(
            &mut changes,
            Notification::set(
                id,
                feature,
                previous.value,
                Value::Entries(entries),
                previous.was_set,
            ),
        );
        Ok(changes)
    }

    /// Resets a feature to its default.
    ///
    /// Unsettable attributes report an unset, other attributes a set to the
    /// default. References are cleared.
    pub fn unset(&mut self, id: NodeId, feature: impl Into<FeatureId>) -> Result<Changes, Error> {
        let feature = feature.into();
        let meta = self.feature_meta(id, feature)?;

        match meta.kind {
            PropertyKind::Attribute { unsettable } => {
                let previous = self.node_mut(id)?.object.basic_unset(feature)?;
                let new = self.get(id, feature)?;
                let notification = if unsettable {
                    Notification::unset(id, feature, previous.value, new, previous.was_set)
                } else {
                    Notification::set(id, feature, previous.value, new, previous.was_set)
                };
                let mut changes = Changes::new();
                self.notify(&mut changes, notification);
                Ok(changes)
            }
            PropertyKind::Containment | PropertyKind::Member { many: false, .. } => {
                self.set_child(id, feature, meta, None)
            }
            _ => self.clear(id, feature),
        }
    }

    /// Appends to a list, repeatable member or group.
    pub fn add(
        &mut self,
        id: NodeId,
        feature: impl Into<FeatureId>,
        value: impl Into<Value>,
    ) -> Result<Changes, Error> {
        self.insert_at(id, feature, None, value)
    }

    /// Inserts into a list at `index`, or appends if `index` is `None`.
    ///
    /// Adding a child that is already in the list does nothing. Groups take
    /// entries, mixed groups also plain strings.
    pub fn insert_at(
        &mut self,
        id: NodeId,
        feature: impl Into<FeatureId>,
        index: Option<usize>,
        value: impl Into<Value>,
    ) -> Result<Changes, Error> {
        let feature = feature.into();
        let value = value.into();
        let meta = self.feature_meta(id, feature)?;
        let mut changes = Changes::new();

        match meta.kind {
            PropertyKind::ContainmentList | PropertyKind::Member { many: true, .. } => {
                let child = NodeId::from_value(value)?;
                self.check_child(id, meta, child)?;
                let slot = self.substitute(id, feature, child)?;
                let container = Container {
                    parent: id,
                    feature: slot,
                };
                if self.container(child)? == Some(container) {
                    return Ok(changes);
                }

                let len = self.get(id, feature)?.objects().len();
                if let Some(index) = index.filter(|index| *index > len) {
                    return Err(Error::IndexOutOfBounds { index, len });
                }

                changes.extend(self.detach(child)?);
                let position =
                    self.node_mut(id)?
                        .object
                        .basic_insert(slot, index, Value::Object(child))?;
                self.node_mut(child)?.container = Some(container);

                self.notify(
                    &mut changes,
                    Notification::add(id, feature, Value::Object(child), position),
                );
                Ok(changes)
            }
            PropertyKind::Group { mixed, many } => {
                if !many {
                    return Err(Error::NotMany);
                }
                let entries = match value {
                    Value::String(text) if mixed => vec![Entry::new(feature, text)],
                    Value::Entries(entries) => entries,
                    other => {
                        return Err(Error::TypeMismatch {
                            expected: "feature map",
                            found: other.type_name(),
                        })
                    }
                };
                self.check_entries(id, feature, &entries)?;
                if let Some(index) = index {
                    let mut len = match self.get(id, feature)? {
                        Value::Entries(current) => current.len(),
                        _ => 0,
                    };
                    // entries already in the group leave it before the insert
                    for child in entries.iter().filter_map(|entry| entry.value.as_object()) {
                        if self.in_group(id, feature, child)? {
                            len = len.saturating_sub(1);
                        }
                    }
                    if index > len {
                        return Err(Error::IndexOutOfBounds { index, len });
                    }
                }

                for child in entries.iter().filter_map(|entry| entry.value.as_object()) {
                    changes.extend(self.detach(child)?);
                }

                let position = self.node_mut(id)?.object.basic_insert(
                    feature,
                    index,
                    Value::Entries(entries.clone()),
                )?;
                for entry in &entries {
                    if let Some(child) = entry.value.as_object() {
                        self.node_mut(child)?.container = Some(Container {
                            parent: id,
                            feature: entry.feature,
                        });
                    }
                }

                self.notify(
                    &mut changes,
                    Notification::add(id, feature, Value::Entries(entries), position),
                );
                Ok(changes)
            }
            _ => Err(Error::NotMany),
        }
    }

    /// Removes `child` from a feature. Does nothing if it isn't held there.
    pub fn remove(
        &mut self,
        id: NodeId,
        feature: impl Into<FeatureId>,
        child: NodeId,
    ) -> Result<Changes, Error> {
        let feature = feature.into();
        let meta = self.feature_meta(id, feature)?;

        match meta.kind {
            PropertyKind::Attribute { .. } => Err(Error::NotMany),
            PropertyKind::Containment | PropertyKind::Member { many: false, .. } => {
                if self.get(id, feature)?.as_object() == Some(child) {
                    self.set_child(id, feature, meta, None)
                } else {
                    Ok(Changes::new())
                }
            }
            _ => {
                let mut changes = Changes::new();
                if let Some(position) = self.node_mut(id)?.object.inverse_remove(feature, child)? {
                    self.node_mut(child)?.container = None;
                    self.notify(
                        &mut changes,
                        Notification::remove(id, feature, Value::Object(child), position),
                    );
                }
                Ok(changes)
            }
        }
    }

    /// Removes the list element at `index`.
    pub fn remove_at(
        &mut self,
        id: NodeId,
        feature: impl Into<FeatureId>,
        index: usize,
    ) -> Result<Changes, Error> {
        let feature = feature.into();
        let removed = self.node_mut(id)?.object.basic_remove(feature, index)?;
        for child in removed.objects() {
            self.node_mut(child)?.container = None;
        }

        let mut changes = Changes::new();
        self.notify(&mut changes, Notification::remove(id, feature, removed, index));
        Ok(changes)
    }

    /// Empties a list or group, detaching all children.
    pub fn clear(&mut self, id: NodeId, feature: impl Into<FeatureId>) -> Result<Changes, Error> {
        let feature = feature.into();
        let meta = self.feature_meta(id, feature)?;

        match meta.kind {
            PropertyKind::Attribute { .. } => self.unset(id, feature),
            PropertyKind::Containment | PropertyKind::Member { many: false, .. } => {
                self.set_child(id, feature, meta, None)
            }
            _ => {
                let mut changes = Changes::new();
                let before = self.children(id)?;
                let previous = self.node_mut(id)?.object.basic_unset(feature)?;
                self.relink(id, &before)?;
                if previous.was_set {
                    self.notify(
                        &mut changes,
                        Notification::remove_many(id, feature, previous.value),
                    );
                }
                Ok(changes)
            }
        }
    }

    /// Moves a list element from one position to another.
    pub fn move_to(
        &mut self,
        id: NodeId,
        feature: impl Into<FeatureId>,
        from: usize,
        to: usize,
    ) -> Result<Changes, Error> {
        let feature = feature.into();
        let meta = self.feature_meta(id, feature)?;
        let len = match self.get(id, feature)? {
            Value::Objects(items) => items.len(),
            Value::Entries(entries) => entries.len(),
            _ => return Err(Error::NotMany),
        };
        if let Some(index) = [from, to].into_iter().find(|index| *index >= len) {
            return Err(Error::IndexOutOfBounds { index, len });
        }

        let moved = self.node_mut(id)?.object.basic_remove(feature, from)?;
        // members go back into the slot of their substitute
        let slot = match (meta.kind, moved.as_object()) {
            (PropertyKind::Member { .. }, Some(child)) => self
                .container(child)?
                .map_or(feature, |container| container.feature),
            _ => feature,
        };
        self.node_mut(id)?
            .object
            .basic_insert(slot, Some(to), moved.clone())?;

        let mut changes = Changes::new();
        self.notify(&mut changes, Notification::moved(id, feature, moved, from, to));
        Ok(changes)
    }

    /// Removes an object from its container. It becomes a root.
    ///
    /// The notification names the feature the object was stored in. For a
    /// substitution group that is the member declared for the object's
    /// class, not the head it may have been set through.
    pub fn detach(&mut self, id: NodeId) -> Result<Changes, Error> {
        let mut changes = Changes::new();
        let Some(container) = self.container(id)? else {
            return Ok(changes);
        };

        let meta = self.feature_meta(container.parent, container.feature)?;
        let position = self
            .node_mut(container.parent)?
            .object
            .inverse_remove(container.feature, id)?;
        self.node_mut(id)?.container = None;

        let notification = match position {
            Some(position) if meta.kind.is_many() => {
                Notification::remove(container.parent, container.feature, Value::Object(id), position)
            }
            _ => Notification::set(
                container.parent,
                container.feature,
                Value::Object(id),
                Value::Null,
                true,
            ),
        };
        self.notify(&mut changes, notification);
        Ok(changes)
    }

    /// Detaches an object and drops it with everything it contains.
    pub fn delete(&mut self, id: NodeId) -> Result<Changes, Error> {
        let changes = self.detach(id)?;
        let mut doomed = self.descendants(id)?;
        doomed.push(id);

        for node in doomed {
            let cell = &mut self.cells[node.index()];
            cell.node = None;
            cell.generation = cell.generation.wrapping_add(1);
            self.free.push(node.index);
            self.live -= 1;
        }
        trace!("deleted {id}");
        Ok(changes)
    }

    /// Checks that `child` may be held by `meta` of `id`.
    fn check_child(&self, id: NodeId, meta: &FeatureMeta, child: NodeId) -> Result<(), Error> {
        let class = self.class(child)?;
        if let Some(target) = meta.target() {
            if !class.is_subclass_of(target) {
                return Err(Error::ClassMismatch {
                    expected: target.name,
                    found: class.name,
                });
            }
        }
        if self.is_ancestor(child, id)? {
            return Err(Error::CircularContainment(child));
        }
        Ok(())
    }

    /// Checks that an entry belongs to the group `feature` of `id`.
    fn check_entry(&self, id: NodeId, feature: FeatureId, entry: &Entry) -> Result<(), Error> {
        let meta = self.feature_meta(id, entry.feature)?;
        match (meta.kind, &entry.value) {
            (PropertyKind::Group { mixed: true, .. }, Value::String(_)) if entry.feature == feature => {
                Ok(())
            }
            (PropertyKind::Member { group, .. }, Value::Object(child)) if group == feature => {
                self.check_child(id, meta, *child)
            }
            (_, value) => Err(Error::TypeMismatch {
                expected: "group entry",
                found: value.type_name(),
            }),
        }
    }

    /// Checks every entry of a group assignment before anything is moved.
    fn check_entries(
        &self,
        id: NodeId,
        feature: FeatureId,
        entries: &[Entry],
    ) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for entry in entries {
            self.check_entry(id, feature, entry)?;
            if let Some(child) = entry.value.as_object() {
                if !seen.insert(child) {
                    return Err(Error::DuplicateChild(child));
                }
            }
        }
        Ok(())
    }

    /// Whether `child` is held by a member of the group `feature` of `id`.
    fn in_group(&self, id: NodeId, feature: FeatureId, child: NodeId) -> Result<bool, Error> {
        let Some(container) = self.container(child)? else {
            return Ok(false);
        };
        if container.parent != id {
            return Ok(false);
        }
        let meta = self.feature_meta(id, container.feature)?;
        Ok(matches!(meta.kind, PropertyKind::Member { group, .. } if group == feature))
    }

    /// The member slot an object set through `feature` is stored in.
    ///
    /// An object set through the head of a substitution group lands in the
    /// member declared for its exact class, so that it is written with that
    /// member's element name.
    fn substitute(&self, id: NodeId, feature: FeatureId, child: NodeId) -> Result<FeatureId, Error> {
        let class = self.class(id)?;
        let meta = self.feature_meta(id, feature)?;
        let PropertyKind::Member { head, .. } = meta.kind else {
            return Ok(feature);
        };
        if head != feature {
            return Ok(feature);
        }

        let child_class = self.class(child)?;
        if meta.target().is_some_and(|target| target.same(child_class)) {
            return Ok(feature);
        }
        Ok(class
            .features()
            .into_iter()
            .find(|f| {
                matches!(f.meta.kind, PropertyKind::Member { head: h, .. } if h == head)
                    && f.meta.target().is_some_and(|target| target.same(child_class))
            })
            .map_or(feature, |f| f.id))
    }

    /// Brings the container links of `id`'s children in line with its
    /// contents after a change.
    fn relink(&mut self, id: NodeId, before: &[(FeatureId, NodeId)]) -> Result<(), Error> {
        let after = self.children(id)?;
        let kept: HashSet<NodeId> = after.iter().map(|(_, child)| *child).collect();

        for (_, child) in before {
            if !kept.contains(child) {
                self.node_mut(*child)?.container = None;
            }
        }
        for (feature, child) in after {
            self.node_mut(child)?.container = Some(Container { parent: id, feature });
        }
        Ok(())
    }

    /// Short description listing the attributes of an object.
    ///
    /// Unsettable attributes that were never set show as `<unset>`.
    pub fn describe(&self, id: NodeId) -> Result<String, Error> {
        let object = self.object(id)?;
        let class = object.class();
        let mut attributes = Vec::new();

        for feature in class.features() {
            let PropertyKind::Attribute { unsettable } = feature.meta.kind else {
                continue;
            };
            let text = if unsettable && !object.is_set(feature.id)? {
                "<unset>".to_string()
            } else {
                object
                    .get(feature.id)?
                    .to_text()
                    .unwrap_or_else(|| "null".to_string())
            };
            attributes.push(format!("{}: {text}", feature.meta.name));
        }

        if attributes.is_empty() {
            Ok(format!("{}{id}", class.name))
        } else {
            Ok(format!("{}{id} ({})", class.name, attributes.join(", ")))
        }
    }
}
