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

//! Object model bindings for OGC GML 3.1.1 and WMTS 1.0.
//!
//! Every schema type is a plain struct of property slots with a static
//! [`Class`](meta::Class) describing its features. Objects live in a
//! [`Model`], an arena that keeps the containment tree consistent: a child
//! has at most one container and every mutation returns the
//! [`Notification`]s describing what changed. Features can be addressed
//! through typed keys or reflectively by [`FeatureId`](meta::FeatureId),
//! which is how the [`xml`] reader and writer walk arbitrary objects.
//!
//! # Examples
//!
//! ```
//! use gml311::model::Model;
//! use gml311::types::{GridEnvelopeType, GridLimitsType, GridType};
//!
//! let mut model = Model::new();
//! let grid = model.create::<GridType>();
//! let limits = model.create::<GridLimitsType>();
//! let envelope = model.create::<GridEnvelopeType>();
//!
//! model.assign(envelope, GridEnvelopeType::LOW, vec![0, 0]).unwrap();
//! model.assign(envelope, GridEnvelopeType::HIGH, vec![10, 10]).unwrap();
//! model.assign(limits, GridLimitsType::GRID_ENVELOPE, Some(envelope)).unwrap();
//! model.assign(grid, GridType::LIMITS, Some(limits)).unwrap();
//! model.assign(grid, GridType::DIMENSION, 2).unwrap();
//!
//! let xml = gml311::xml::write_document(&model, grid).unwrap();
//! assert!(xml.contains("<gml:low>0 0</gml:low>"));
//!
//! let mut copy = Model::new();
//! let read = gml311::xml::read_document(&mut copy, xml.as_bytes()).unwrap();
//! assert_eq!(copy.class(read).unwrap().name, "GridType");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: derives `Serialize` for values, ids and notifications.

#[macro_use]
mod macros;

pub mod error;
pub mod group;
pub mod meta;
pub mod model;
pub mod object;
pub mod package;
pub mod property;
pub mod types;
pub mod value;
pub mod xml;

pub use error::Error;
pub use model::{Changes, Model, NodeId, Notification, NotificationKind};
