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

//! Typed property slots.
//!
//! Schema structs are made of these wrappers, one per feature. The derive
//! macro dispatches the reflective operations of
//! [`SchemaObject`](crate::object::SchemaObject) to the [`Property`]
//! implementation of the addressed field. The slots only store values; the
//! containment bookkeeping between parent and child lives in the
//! [`Model`](crate::model::Model).

use std::fmt;
use std::marker::PhantomData;

use crate::error::Error;
use crate::meta::{ClassRef, FeatureId, PropertyKind};
use crate::model::NodeId;
use crate::object::Schema;
use crate::value::{FromValue, ScalarKind, Value, ValueType};

/// State of a feature before a change.
#[derive(Clone, Debug, PartialEq)]
pub struct Previous {
    pub value: Value,
    pub was_set: bool,
}

/// Static description of a slot type.
pub trait Slot {
    /// Type of the value returned by a typed [`Key`](crate::object::Key).
    type Value;

    const TARGET: Option<ClassRef> = None;
    const VALUE_TYPE: Option<ValueType> = None;
    const MANY: bool = false;
}

/// A slot that stores the value of a feature.
pub trait Property: Slot {
    const KIND: PropertyKind;

    fn get_value(&self) -> Value;

    fn set_value(&mut self, value: Value) -> Result<Previous, Error>;

    fn unset_value(&mut self) -> Previous;

    fn is_set(&self) -> bool;

    /// Inserts into a list at `index`, or appends. Returns the position.
    fn insert_value(&mut self, _index: Option<usize>, _value: Value) -> Result<usize, Error> {
        Err(Error::NotMany)
    }

    fn remove_value(&mut self, _index: usize) -> Result<Value, Error> {
        Err(Error::NotMany)
    }

    /// Removes `child` if held by this slot and returns its former position.
    fn remove_child(&mut self, _child: NodeId) -> Option<usize> {
        None
    }

    fn collect_children(&self, _feature: FeatureId, _out: &mut Vec<(FeatureId, NodeId)>) {}

    fn remap_children(&mut self, _map: &mut dyn FnMut(NodeId) -> NodeId) {}
}

/// A type with an XML text form that can be stored in an attribute.
pub trait Scalar: Clone + PartialEq + fmt::Debug + Into<Value> + FromValue + 'static {
    const VALUE_TYPE: ValueType;
}

impl Scalar for bool {
    const VALUE_TYPE: ValueType = ValueType::new(ScalarKind::Bool);
}

impl Scalar for i64 {
    const VALUE_TYPE: ValueType = ValueType::new(ScalarKind::Int);
}

impl Scalar for f64 {
    const VALUE_TYPE: ValueType = ValueType::new(ScalarKind::Double);
}

impl Scalar for String {
    const VALUE_TYPE: ValueType = ValueType::new(ScalarKind::String);
}

impl Scalar for Vec<i64> {
    const VALUE_TYPE: ValueType = ValueType::new(ScalarKind::Ints);
}

impl Scalar for Vec<f64> {
    const VALUE_TYPE: ValueType = ValueType::new(ScalarKind::Doubles);
}

impl Scalar for Vec<String> {
    const VALUE_TYPE: ValueType = ValueType::new(ScalarKind::Strings);
}

impl<T: Scalar> Scalar for Option<T> {
    const VALUE_TYPE: ValueType = T::VALUE_TYPE.nullable();
}

/// An attribute without presence tracking.
///
/// It counts as set whenever its value differs from the default. List
/// attributes default to the empty list, so an empty list reads as absent.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute<T> {
    value: T,
    default: T,
}

impl<T: Scalar> Attribute<T> {
    pub fn with_default(default: T) -> Self {
        Self {
            value: default.clone(),
            default,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and returns the old one.
    pub fn set(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }
}

impl<T: Scalar + Default> Default for Attribute<T> {
    fn default() -> Self {
        Self::with_default(T::default())
    }
}

impl<T: Scalar> Slot for Attribute<T> {
    type Value = T;

    const VALUE_TYPE: Option<ValueType> = Some(T::VALUE_TYPE);
}

impl<T: Scalar> Property for Attribute<T> {
    const KIND: PropertyKind = PropertyKind::Attribute { unsettable: false };

    fn get_value(&self) -> Value {
        self.value.clone().into()
    }

    fn set_value(&mut self, value: Value) -> Result<Previous, Error> {
        let value = T::from_value(value)?;
        let was_set = self.is_set();
        let old = self.set(value);
        Ok(Previous {
            value: old.into(),
            was_set,
        })
    }

    fn unset_value(&mut self) -> Previous {
        let was_set = self.is_set();
        let old = self.set(self.default.clone());
        Previous {
            value: old.into(),
            was_set,
        }
    }

    fn is_set(&self) -> bool {
        self.value != self.default
    }
}

/// An attribute that remembers whether it was assigned.
///
/// Setting `Null` stores the default and still marks the attribute as set.
#[derive(Clone, Debug, PartialEq)]
pub struct Unsettable<T> {
    value: T,
    default: T,
    set: bool,
}

impl<T: Scalar> Unsettable<T> {
    pub fn with_default(default: T) -> Self {
        Self {
            value: default.clone(),
            default,
            set: false,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) -> T {
        self.set = true;
        std::mem::replace(&mut self.value, value)
    }

    pub fn unset(&mut self) -> T {
        self.set = false;
        std::mem::replace(&mut self.value, self.default.clone())
    }

    pub fn is_set(&self) -> bool {
        self.set
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }
}

impl<T: Scalar + Default> Default for Unsettable<T> {
    fn default() -> Self {
        Self::with_default(T::default())
    }
}

impl<T: Scalar> Slot for Unsettable<T> {
    type Value = T;

    const VALUE_TYPE: Option<ValueType> = Some(T::VALUE_TYPE);
}

impl<T: Scalar> Property for Unsettable<T> {
    const KIND: PropertyKind = PropertyKind::Attribute { unsettable: true };

    fn get_value(&self) -> Value {
        self.value.clone().into()
    }

    fn set_value(&mut self, value: Value) -> Result<Previous, Error> {
        let value = match value {
            Value::Null => self.default.clone(),
            other => T::from_value(other)?,
        };
        let was_set = self.set;
        let old = self.set(value);
        Ok(Previous {
            value: old.into(),
            was_set,
        })
    }

    fn unset_value(&mut self) -> Previous {
        let was_set = self.set;
        let old = self.unset();
        Previous {
            value: old.into(),
            was_set,
        }
    }

    fn is_set(&self) -> bool {
        self.set
    }
}

/// A single owned child of type `T`.
pub struct Containment<T> {
    child: Option<NodeId>,
    marker: PhantomData<fn() -> T>,
}

impl<T> Containment<T> {
    pub fn get(&self) -> Option<NodeId> {
        self.child
    }
}

impl<T> Default for Containment<T> {
    fn default() -> Self {
        Self {
            child: None,
            marker: PhantomData,
        }
    }
}

impl<T> Clone for Containment<T> {
    fn clone(&self) -> Self {
        Self {
            child: self.child,
            marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Containment<T> {
    fn eq(&self, other: &Self) -> bool {
        self.child == other.child
    }
}

impl<T> fmt::Debug for Containment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Containment").field(&self.child).finish()
    }
}

impl<T: Schema> Slot for Containment<T> {
    type Value = Option<NodeId>;

    const TARGET: Option<ClassRef> = Some(T::class_ref);
}

impl<T: Schema> Property for Containment<T> {
    const KIND: PropertyKind = PropertyKind::Containment;

    fn get_value(&self) -> Value {
        self.child.into()
    }

    fn set_value(&mut self, value: Value) -> Result<Previous, Error> {
        let child = Option::<NodeId>::from_value(value)?;
        let old = std::mem::replace(&mut self.child, child);
        Ok(Previous {
            value: old.into(),
            was_set: old.is_some(),
        })
    }

    fn unset_value(&mut self) -> Previous {
        let old = self.child.take();
        Previous {
            value: old.into(),
            was_set: old.is_some(),
        }
    }

    fn is_set(&self) -> bool {
        self.child.is_some()
    }

    fn remove_child(&mut self, child: NodeId) -> Option<usize> {
        if self.child == Some(child) {
            self.child = None;
            Some(0)
        } else {
            None
        }
    }

    fn collect_children(&self, feature: FeatureId, out: &mut Vec<(FeatureId, NodeId)>) {
        if let Some(child) = self.child {
            out.push((feature, child));
        }
    }

    fn remap_children(&mut self, map: &mut dyn FnMut(NodeId) -> NodeId) {
        self.child = self.child.map(map);
    }
}

/// Ordered owned children of type `T`.
pub struct ContainmentList<T> {
    items: Vec<NodeId>,
    marker: PhantomData<fn() -> T>,
}

impl<T> ContainmentList<T> {
    pub fn as_slice(&self) -> &[NodeId] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.items.iter().copied()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.items.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, child: NodeId) -> bool {
        self.items.contains(&child)
    }
}

impl<T> Default for ContainmentList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            marker: PhantomData,
        }
    }
}

impl<T> Clone for ContainmentList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            marker: PhantomData,
        }
    }
}

impl<T> PartialEq for ContainmentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> fmt::Debug for ContainmentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T: Schema> Slot for ContainmentList<T> {
    type Value = Vec<NodeId>;

    const TARGET: Option<ClassRef> = Some(T::class_ref);
    const MANY: bool = true;
}

impl<T: Schema> Property for ContainmentList<T> {
    const KIND: PropertyKind = PropertyKind::ContainmentList;

    fn get_value(&self) -> Value {
        Value::Objects(self.items.clone())
    }

    fn set_value(&mut self, value: Value) -> Result<Previous, Error> {
        let items = match value {
            Value::Null => Vec::new(),
            other => Vec::<NodeId>::from_value(other)?,
        };
        let old = std::mem::replace(&mut self.items, items);
        Ok(Previous {
            was_set: !old.is_empty(),
            value: Value::Objects(old),
        })
    }

    fn unset_value(&mut self) -> Previous {
        let old = std::mem::take(&mut self.items);
        Previous {
            was_set: !old.is_empty(),
            value: Value::Objects(old),
        }
    }

    fn is_set(&self) -> bool {
        !self.items.is_empty()
    }

    fn insert_value(&mut self, index: Option<usize>, value: Value) -> Result<usize, Error> {
        let child = NodeId::from_value(value)?;
        let index = index.unwrap_or(self.items.len());
        if index > self.items.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, child);
        Ok(index)
    }

    fn remove_value(&mut self, index: usize) -> Result<Value, Error> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(Value::Object(self.items.remove(index)))
    }

    fn remove_child(&mut self, child: NodeId) -> Option<usize> {
        let index = self.items.iter().position(|item| *item == child)?;
        self.items.remove(index);
        Some(index)
    }

    fn collect_children(&self, feature: FeatureId, out: &mut Vec<(FeatureId, NodeId)>) {
        out.extend(self.items.iter().map(|child| (feature, *child)));
    }

    fn remap_children(&mut self, map: &mut dyn FnMut(NodeId) -> NodeId) {
        for item in &mut self.items {
            *item = map(*item);
        }
    }
}

/// A single member of a choice or feature map.
///
/// Members store nothing themselves; the value is resolved from the group
/// named in the `#[gml(group = ...)]` attribute of the field.
pub struct Member<T>(PhantomData<fn() -> T>);

/// The repeatable members of a feature map.
pub struct MemberList<T>(PhantomData<fn() -> T>);

macro_rules! member_slot {
    ($name:ident, $value:ty, $many:literal) => {
        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self(PhantomData)
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                Self(PhantomData)
            }
        }

        impl<T> PartialEq for $name<T> {
            fn eq(&self, _other: &Self) -> bool {
                true
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<T: Schema> Slot for $name<T> {
            type Value = $value;

            const TARGET: Option<ClassRef> = Some(T::class_ref);
            const MANY: bool = $many;
        }
    };
}

member_slot!(Member, Option<NodeId>, false);
member_slot!(MemberList, Vec<NodeId>, true);
