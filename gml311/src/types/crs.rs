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

//! Coordinate systems and their axes.

use gml311_derive::SchemaObject;

use crate::property::{Attribute, Containment, ContainmentList};
use crate::types::basic::{AbstractGmlType, AssociationAttributes, CodeType, StringOrRefType};

/// An identifier of a CRS object with its version.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct IdentifierType {
    pub name: Containment<CodeType>,
    pub version: Attribute<Option<String>>,
    pub remarks: Containment<StringOrRefType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "CoordinateSystemAxis")]
pub struct CoordinateSystemAxisType {
    #[gml(base)]
    pub gml: AbstractGmlType,
    #[gml(element = "axisID")]
    pub axis_id: ContainmentList<IdentifierType>,
    pub remarks: Containment<StringOrRefType>,
    pub axis_abbrev: Containment<CodeType>,
    pub axis_direction: Containment<CodeType>,
    #[gml(attribute, namespace = "gml")]
    pub uom: Attribute<String>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct CoordinateSystemAxisRefType {
    #[gml(base)]
    pub association: AssociationAttributes,
    #[gml(element = "CoordinateSystemAxis")]
    pub coordinate_system_axis: Containment<CoordinateSystemAxisType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "_CoordinateSystem", abstract)]
pub struct AbstractCoordinateSystemType {
    #[gml(base)]
    pub gml: AbstractGmlType,
    pub cs_name: Containment<CodeType>,
    #[gml(element = "csID")]
    pub cs_id: ContainmentList<IdentifierType>,
    pub remarks: Containment<StringOrRefType>,
    pub uses_axis: ContainmentList<CoordinateSystemAxisRefType>,
}

/// Two or three axes of geodetic latitude, longitude and height.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(name = "EllipsoidalCSType", element = "EllipsoidalCS")]
pub struct EllipsoidalCsType {
    #[gml(base)]
    pub coordinate_system: AbstractCoordinateSystemType,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(name = "CartesianCSType", element = "CartesianCS")]
pub struct CartesianCsType {
    #[gml(base)]
    pub coordinate_system: AbstractCoordinateSystemType,
}
