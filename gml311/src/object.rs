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

//! The reflective capability interface of schema objects.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use crate::error::Error;
use crate::meta::{Class, FeatureId};
use crate::model::NodeId;
use crate::property::Previous;
use crate::value::Value;

/// Feature access by id, implemented by `#[derive(SchemaObject)]`.
///
/// The `basic_*` operations change the object alone. Keeping parent and
/// child links consistent and reporting changes is the job of the
/// [`Model`](crate::model::Model), which should be used for every change to
/// objects it owns.
pub trait SchemaObject: Any + fmt::Debug {
    fn class(&self) -> &'static Class;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn clone_boxed(&self) -> Box<dyn SchemaObject>;

    fn get(&self, feature: FeatureId) -> Result<Value, Error>;

    fn basic_set(&mut self, feature: FeatureId, value: Value) -> Result<Previous, Error>;

    fn basic_unset(&mut self, feature: FeatureId) -> Result<Previous, Error>;

    fn is_set(&self, feature: FeatureId) -> Result<bool, Error>;

    fn basic_insert(
        &mut self,
        feature: FeatureId,
        index: Option<usize>,
        value: Value,
    ) -> Result<usize, Error>;

    fn basic_remove(&mut self, feature: FeatureId, index: usize) -> Result<Value, Error>;

    /// Drops `child` from `feature` and returns the position it had.
    fn inverse_remove(&mut self, feature: FeatureId, child: NodeId)
        -> Result<Option<usize>, Error>;

    /// Owned children with the feature holding them, in feature order.
    fn contents(&self, out: &mut Vec<(FeatureId, NodeId)>);

    fn remap_children(&mut self, map: &mut dyn FnMut(NodeId) -> NodeId);
}

impl dyn SchemaObject {
    pub fn downcast_ref<T: SchemaObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: SchemaObject>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

/// Static side of a schema type.
pub trait Schema: SchemaObject + Clone + Default + Sized {
    const CLASS: &'static Class;

    fn class_ref() -> &'static Class {
        Self::CLASS
    }
}

/// Creates a boxed default instance, the factory of non-abstract classes.
pub fn create_boxed<T: Schema>() -> Box<dyn SchemaObject> {
    Box::new(T::default())
}

/// A feature id typed with the owning class `O` and value type `V`.
///
/// # Examples
///
/// ```
/// use gml311::model::Model;
/// use gml311::types::GridEnvelopeType;
///
/// let mut model = Model::new();
/// let envelope = model.create::<GridEnvelopeType>();
/// model.assign(envelope, GridEnvelopeType::LOW, vec![0, 0]).unwrap();
///
/// let low: Vec<i64> = model.value(envelope, GridEnvelopeType::LOW).unwrap();
/// assert_eq!(low, vec![0, 0]);
/// ```
pub struct Key<O, V> {
    id: FeatureId,
    marker: PhantomData<fn() -> (O, V)>,
}

impl<O, V> Key<O, V> {
    pub const fn new(id: FeatureId) -> Self {
        Self {
            id,
            marker: PhantomData,
        }
    }

    pub const fn id(self) -> FeatureId {
        self.id
    }
}

impl<O, V> Clone for Key<O, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, V> Copy for Key<O, V> {}

impl<O, V> fmt::Debug for Key<O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.id).finish()
    }
}

impl<O, V> From<Key<O, V>> for FeatureId {
    fn from(key: Key<O, V>) -> Self {
        key.id
    }
}
