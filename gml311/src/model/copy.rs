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

use std::collections::HashMap;

use super::*;

impl Model {
    /// Copies the tree below `id`. The copy is a new root.
    ///
    /// # Examples
    ///
    /// ```
    /// use gml311::model::Model;
    /// use gml311::types::{GridEnvelopeType, GridLimitsType};
    ///
    /// let mut model = Model::new();
    /// let limits = model.create::<GridLimitsType>();
    /// let envelope = model.create::<GridEnvelopeType>();
    /// model.assign(envelope, GridEnvelopeType::HIGH, vec![10, 10]).unwrap();
    /// model.assign(limits, GridLimitsType::GRID_ENVELOPE, Some(envelope)).unwrap();
    ///
    /// let copy = model.copy(limits).unwrap();
    /// assert_ne!(copy, limits);
    /// assert!(model.equals(copy, limits).unwrap());
    /// ```
    pub fn copy(&mut self, id: NodeId) -> Result<NodeId, Error> {
        let mut object = self.object(id)?.clone_boxed();

        let mut copies = HashMap::new();
        for (_, child) in self.children(id)? {
            copies.insert(child, self.copy(child)?);
        }
        object.remap_children(&mut |child| copies.get(&child).copied().unwrap_or(child));

        let copy = self.insert_boxed(object);
        self.relink(copy, &[])?;
        Ok(copy)
    }

    /// Deep structural equality of two trees.
    ///
    /// Objects are equal if they have the same class, equal attributes with
    /// the same set state, and pairwise equal children in every feature.
    pub fn equals(&self, a: NodeId, b: NodeId) -> Result<bool, Error> {
        let class = self.class(a)?;
        if !class.same(self.class(b)?) {
            return Ok(false);
        }

        for feature in class.features() {
            let left = self.get(a, feature.id)?;
            let right = self.get(b, feature.id)?;

            let equal = match feature.meta.kind {
                // compared through their group
                PropertyKind::Member { .. } => true,
                PropertyKind::Attribute { .. } => {
                    left == right && self.is_set(a, feature.id)? == self.is_set(b, feature.id)?
                }
                PropertyKind::Group { .. } => match (left, right) {
                    (Value::Entries(left), Value::Entries(right)) => {
                        self.entries_equal(&left, &right)?
                    }
                    _ => false,
                },
                PropertyKind::Containment | PropertyKind::ContainmentList => {
                    self.objects_equal(&left.objects(), &right.objects())?
                }
            };
            if !equal {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn objects_equal(&self, left: &[NodeId], right: &[NodeId]) -> Result<bool, Error> {
        if left.len() != right.len() {
            return Ok(false);
        }
        for (a, b) in left.iter().zip(right) {
            if !self.equals(*a, *b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn entries_equal(&self, left: &[Entry], right: &[Entry]) -> Result<bool, Error> {
        if left.len() != right.len() {
            return Ok(false);
        }
        for (a, b) in left.iter().zip(right) {
            let equal = a.feature == b.feature
                && match (&a.value, &b.value) {
                    (Value::Object(a), Value::Object(b)) => self.equals(*a, *b)?,
                    (a, b) => a == b,
                };
            if !equal {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
