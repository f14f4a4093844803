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

use super::*;

/// Configures and creates a [`Model`].
///
/// # Examples
///
/// ```
/// use gml311::model::Model;
///
/// let model = Model::builder().deliver(false).capacity(1024).build();
/// assert!(!model.deliver());
/// ```
#[derive(Clone, Debug)]
pub struct ModelBuilder {
    deliver: bool,
    capacity: usize,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self {
            deliver: true,
            capacity: 0,
        }
    }
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether mutations report their changes. On by default.
    pub fn deliver(mut self, deliver: bool) -> Self {
        self.deliver = deliver;
        self
    }

    /// Number of objects to reserve space for.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> Model {
        Model {
            cells: Vec::with_capacity(self.capacity),
            free: Vec::new(),
            live: 0,
            deliver: self.deliver,
        }
    }
}
