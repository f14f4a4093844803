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

//! Schema types.
//!
//! GML types are re-exported here. The XLink, OWS and WMTS types stay in
//! their own modules since some names, like `CodeType`, exist in more than
//! one namespace.

mod basic;
mod crs;
mod feature;
mod geometry;
mod grids;
mod temporal;
mod value_objects;

pub mod ows;
pub mod wmts;
pub mod xlink;

pub use basic::*;
pub use crs::*;
pub use feature::*;
pub use geometry::*;
pub use grids::*;
pub use temporal::*;
pub use value_objects::*;
