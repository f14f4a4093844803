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

//! Geometry types.

use gml311_derive::SchemaObject;

use crate::group::{Choice, FeatureMap};
use crate::property::{Attribute, Containment, ContainmentList, Member, MemberList, Unsettable};
use crate::types::basic::{AbstractGmlType, AssociationAttributes, CoordType, CoordinatesType};
use crate::types::grids::{GridType, RectifiedGridType};
use crate::types::temporal::TimePositionType;

/// Base of all geometries, carrying the spatial reference attributes.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "_Geometry", abstract)]
pub struct AbstractGeometryType {
    #[gml(base)]
    pub gml: AbstractGmlType,
    #[gml(attribute)]
    pub gid: Attribute<Option<String>>,
    #[gml(attribute)]
    pub srs_name: Attribute<Option<String>>,
    #[gml(attribute)]
    pub srs_dimension: Attribute<Option<i64>>,
    #[gml(attribute)]
    pub axis_labels: Attribute<Vec<String>>,
    #[gml(attribute)]
    pub uom_labels: Attribute<Vec<String>>,
}

/// A position as a list of doubles, one per axis.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct DirectPositionType {
    #[gml(text)]
    pub value: Attribute<Vec<f64>>,
    #[gml(attribute)]
    pub srs_name: Attribute<Option<String>>,
    #[gml(attribute)]
    pub srs_dimension: Attribute<Option<i64>>,
    #[gml(attribute)]
    pub axis_labels: Attribute<Vec<String>>,
    #[gml(attribute)]
    pub uom_labels: Attribute<Vec<String>>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct DirectPositionListType {
    #[gml(text)]
    pub value: Attribute<Vec<f64>>,
    #[gml(attribute)]
    pub srs_name: Attribute<Option<String>>,
    #[gml(attribute)]
    pub srs_dimension: Attribute<Option<i64>>,
    #[gml(attribute)]
    pub count: Attribute<Option<i64>>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct VectorType {
    #[gml(base)]
    pub position: DirectPositionType,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "Envelope")]
pub struct EnvelopeType {
    pub lower_corner: Containment<DirectPositionType>,
    pub upper_corner: Containment<DirectPositionType>,
    pub coord: ContainmentList<CoordType>,
    pub pos: ContainmentList<DirectPositionType>,
    pub coordinates: Containment<CoordinatesType>,
    #[gml(attribute)]
    pub srs_name: Attribute<Option<String>>,
    #[gml(attribute)]
    pub srs_dimension: Attribute<Option<i64>>,
    #[gml(attribute)]
    pub axis_labels: Attribute<Vec<String>>,
    #[gml(attribute)]
    pub uom_labels: Attribute<Vec<String>>,
}

/// An envelope with a time period given by two positions.
#[derive(Clone, Debug, SchemaObject)]
#[gml(element = "EnvelopeWithTimePeriod")]
pub struct EnvelopeWithTimePeriodType {
    #[gml(base)]
    pub envelope: EnvelopeType,
    pub time_position: ContainmentList<TimePositionType>,
    #[gml(attribute)]
    pub frame: Unsettable<String>,
}

impl Default for EnvelopeWithTimePeriodType {
    fn default() -> Self {
        Self {
            envelope: EnvelopeType::default(),
            time_position: ContainmentList::default(),
            frame: Unsettable::with_default("#ISO-8601".to_string()),
        }
    }
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct BoundingShapeType {
    pub envelope_group: Choice,
    #[gml(group = envelope_group, element = "Envelope")]
    pub envelope: Member<EnvelopeType>,
    #[gml(group = envelope_group, substitutes = envelope, element = "EnvelopeWithTimePeriod")]
    pub envelope_with_time_period: Member<EnvelopeWithTimePeriodType>,
    #[gml(element = "Null")]
    pub null: Attribute<Option<String>>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "Point")]
pub struct PointType {
    #[gml(base)]
    pub geometry: AbstractGeometryType,
    pub pos: Containment<DirectPositionType>,
    pub coordinates: Containment<CoordinatesType>,
    pub coord: Containment<CoordType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct PointPropertyType {
    #[gml(base)]
    pub association: AssociationAttributes,
    #[gml(element = "Point")]
    pub point: Containment<PointType>,
}

/// A curve given by its control points.
///
/// Positions, point properties and tuples may be interleaved, so they share
/// one feature map that keeps their document order.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "LineString")]
pub struct LineStringType {
    #[gml(base)]
    pub geometry: AbstractGeometryType,
    pub points: FeatureMap,
    #[gml(group = points)]
    pub pos: MemberList<DirectPositionType>,
    #[gml(group = points)]
    pub point_property: MemberList<PointPropertyType>,
    #[gml(group = points)]
    pub coord: MemberList<CoordType>,
    pub pos_list: Containment<DirectPositionListType>,
    pub coordinates: Containment<CoordinatesType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "_Ring", abstract)]
pub struct AbstractRingType {
    #[gml(base)]
    pub geometry: AbstractGeometryType,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "LinearRing")]
pub struct LinearRingType {
    #[gml(base)]
    pub ring: AbstractRingType,
    pub points: FeatureMap,
    #[gml(group = points)]
    pub pos: MemberList<DirectPositionType>,
    #[gml(group = points)]
    pub point_property: MemberList<PointPropertyType>,
    #[gml(group = points)]
    pub coord: MemberList<CoordType>,
    pub pos_list: Containment<DirectPositionListType>,
    pub coordinates: Containment<CoordinatesType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct AbstractRingPropertyType {
    pub ring_group: Choice,
    #[gml(group = ring_group, element = "_Ring")]
    pub ring: Member<AbstractRingType>,
    #[gml(group = ring_group, substitutes = ring, element = "LinearRing")]
    pub linear_ring: Member<LinearRingType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "Polygon")]
pub struct PolygonType {
    #[gml(base)]
    pub geometry: AbstractGeometryType,
    pub exterior: Containment<AbstractRingPropertyType>,
    pub interior: ContainmentList<AbstractRingPropertyType>,
}

/// A property holding any geometry of the `_Geometry` substitution group.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct GeometryPropertyType {
    #[gml(base)]
    pub association: AssociationAttributes,
    pub geometry_group: Choice,
    #[gml(group = geometry_group, element = "_Geometry")]
    pub geometry: Member<AbstractGeometryType>,
    #[gml(group = geometry_group, substitutes = geometry, element = "Point")]
    pub point: Member<PointType>,
    #[gml(group = geometry_group, substitutes = geometry, element = "LineString")]
    pub line_string: Member<LineStringType>,
    #[gml(group = geometry_group, substitutes = geometry, element = "LinearRing")]
    pub linear_ring: Member<LinearRingType>,
    #[gml(group = geometry_group, substitutes = geometry, element = "Polygon")]
    pub polygon: Member<PolygonType>,
    #[gml(group = geometry_group, substitutes = geometry, element = "Grid")]
    pub grid: Member<GridType>,
    #[gml(group = geometry_group, substitutes = geometry, element = "RectifiedGrid")]
    pub rectified_grid: Member<RectifiedGridType>,
}
