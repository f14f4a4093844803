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

use std::fmt;

use crate::meta::FeatureId;
use crate::value::Value;

use super::NodeId;

/// Changes made by one model operation, in the order they happened.
pub type Changes = Vec<Notification>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NotificationKind {
    Set,
    Unset,
    Add,
    Remove,
    RemoveMany,
    Move,
}

/// Description of a single change to a feature of an object.
///
/// `old` and `new` hold the values before and after the change. For list
/// operations they hold the affected element and `position` its index; a
/// move carries the former index in `old`. `was_set` tells whether the
/// feature was set before the change.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Notification {
    pub kind: NotificationKind,
    pub notifier: NodeId,
    pub feature: FeatureId,
    pub old: Value,
    pub new: Value,
    pub was_set: bool,
    pub position: Option<usize>,
}

impl Notification {
    pub fn set(notifier: NodeId, feature: FeatureId, old: Value, new: Value, was_set: bool) -> Self {
        Self {
            kind: NotificationKind::Set,
            notifier,
            feature,
            old,
            new,
            was_set,
            position: None,
        }
    }

    pub fn unset(
        notifier: NodeId,
        feature: FeatureId,
        old: Value,
        new: Value,
        was_set: bool,
    ) -> Self {
        Self {
            kind: NotificationKind::Unset,
            ..Self::set(notifier, feature, old, new, was_set)
        }
    }

    pub fn add(notifier: NodeId, feature: FeatureId, new: Value, position: usize) -> Self {
        Self {
            kind: NotificationKind::Add,
            notifier,
            feature,
            old: Value::Null,
            new,
            was_set: true,
            position: Some(position),
        }
    }

    pub fn remove(notifier: NodeId, feature: FeatureId, old: Value, position: usize) -> Self {
        Self {
            kind: NotificationKind::Remove,
            notifier,
            feature,
            old,
            new: Value::Null,
            was_set: true,
            position: Some(position),
        }
    }

    pub fn remove_many(notifier: NodeId, feature: FeatureId, old: Value) -> Self {
        Self {
            kind: NotificationKind::RemoveMany,
            notifier,
            feature,
            old,
            new: Value::Null,
            was_set: true,
            position: None,
        }
    }

    pub fn moved(notifier: NodeId, feature: FeatureId, value: Value, from: usize, to: usize) -> Self {
        Self {
            kind: NotificationKind::Move,
            notifier,
            feature,
            old: Value::Int(from as i64),
            new: value,
            was_set: true,
            position: Some(to),
        }
    }

    /// A set that didn't change the value.
    pub fn is_touch(&self) -> bool {
        match self.kind {
            NotificationKind::Set | NotificationKind::Unset => self.old == self.new,
            NotificationKind::Move => self.old == Value::Int(self.position.unwrap_or(0) as i64),
            _ => false,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {} feature {}: {:?} -> {:?}",
            self.kind, self.notifier, self.feature, self.old, self.new
        )?;
        if let Some(position) = self.position {
            write!(f, " at {position}")?;
        }
        Ok(())
    }
}
