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

//! Features, feature collections and dynamic features.

use gml311_derive::SchemaObject;

use crate::group::{Choice, FeatureMap};
use crate::property::{Attribute, Containment, ContainmentList, Member, MemberList};
use crate::types::basic::{
    AbstractGmlType, AssociationAttributes, CodeType, MeasureType, StringOrRefType,
};
use crate::types::geometry::{
    AbstractGeometryType, BoundingShapeType, GeometryPropertyType, LineStringType, PointType,
    PolygonType,
};
use crate::types::temporal::{AbstractTimeSliceType, TimePrimitivePropertyType};

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "_Feature", abstract)]
pub struct AbstractFeatureType {
    #[gml(base)]
    pub gml: AbstractGmlType,
    pub bounded_by: Containment<BoundingShapeType>,
    pub location: Containment<LocationPropertyType>,
}

/// Where a feature is: a geometry, a keyword or a description.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct LocationPropertyType {
    #[gml(base)]
    pub association: AssociationAttributes,
    pub location_group: Choice,
    #[gml(group = location_group, element = "_Geometry")]
    pub geometry: Member<AbstractGeometryType>,
    #[gml(group = location_group, substitutes = geometry, element = "Point")]
    pub point: Member<PointType>,
    #[gml(group = location_group, substitutes = geometry, element = "LineString")]
    pub line_string: Member<LineStringType>,
    #[gml(group = location_group, substitutes = geometry, element = "Polygon")]
    pub polygon: Member<PolygonType>,
    #[gml(group = location_group, element = "LocationKeyWord")]
    pub location_key_word: Member<CodeType>,
    #[gml(group = location_group, element = "LocationString")]
    pub location_string: Member<StringOrRefType>,
    #[gml(element = "Null")]
    pub null: Attribute<Option<String>>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct FeaturePropertyType {
    #[gml(base)]
    pub association: AssociationAttributes,
    pub feature_group: Choice,
    #[gml(group = feature_group, element = "_Feature")]
    pub feature: Member<AbstractFeatureType>,
    #[gml(group = feature_group, substitutes = feature, element = "FeatureCollection")]
    pub feature_collection: Member<FeatureCollectionType>,
    #[gml(group = feature_group, substitutes = feature, element = "DynamicFeature")]
    pub dynamic_feature: Member<DynamicFeatureType>,
}

/// Features listed inline, in document order.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct FeatureArrayPropertyType {
    pub features: FeatureMap,
    #[gml(group = features, element = "_Feature")]
    pub feature: MemberList<AbstractFeatureType>,
    #[gml(group = features, substitutes = feature, element = "FeatureCollection")]
    pub feature_collection: MemberList<FeatureCollectionType>,
    #[gml(group = features, substitutes = feature, element = "DynamicFeature")]
    pub dynamic_feature: MemberList<DynamicFeatureType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "_FeatureCollection", abstract)]
pub struct AbstractFeatureCollectionType {
    #[gml(base)]
    pub feature: AbstractFeatureType,
    pub feature_member: ContainmentList<FeaturePropertyType>,
    pub feature_members: Containment<FeatureArrayPropertyType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "FeatureCollection")]
pub struct FeatureCollectionType {
    #[gml(base)]
    pub collection: AbstractFeatureCollectionType,
}

/// A feature whose state changes over time.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "DynamicFeature")]
pub struct DynamicFeatureType {
    #[gml(base)]
    pub feature: AbstractFeatureType,
    pub valid_time: Containment<TimePrimitivePropertyType>,
    pub history: Containment<HistoryPropertyType>,
    pub data_source: Containment<StringOrRefType>,
}

/// The time slices of a dynamic feature.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct HistoryPropertyType {
    pub time_slices: FeatureMap,
    #[gml(group = time_slices, element = "_TimeSlice")]
    pub time_slice: MemberList<AbstractTimeSliceType>,
    #[gml(group = time_slices, substitutes = time_slice, element = "MovingObjectStatus")]
    pub moving_object_status: MemberList<MovingObjectStatusType>,
}

/// Position and motion of a moving object at one point of its history.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "MovingObjectStatus")]
pub struct MovingObjectStatusType {
    #[gml(base)]
    pub time_slice: AbstractTimeSliceType,
    pub position: Containment<GeometryPropertyType>,
    pub speed: Containment<MeasureType>,
    pub elevation: Containment<MeasureType>,
    pub status: Containment<StringOrRefType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::PropertyKind;
    use crate::object::Schema;

    #[test]
    fn location_keywords_are_their_own_family() {
        let class = LocationPropertyType::CLASS;
        let keyword = class.element_feature("LocationKeyWord").unwrap();
        assert!(matches!(
            keyword.kind(),
            PropertyKind::Member { head, .. } if head == keyword.id
        ));

        let polygon = class.element_feature("Polygon").unwrap();
        assert!(matches!(
            polygon.kind(),
            PropertyKind::Member { head, .. } if head == LocationPropertyType::GEOMETRY.id()
        ));
    }

    #[test]
    fn collections_are_features() {
        assert!(FeatureCollectionType::CLASS.is_subclass_of(AbstractFeatureType::CLASS));
        assert!(AbstractFeatureCollectionType::CLASS.is_abstract);
        assert_eq!(FeatureCollectionType::CLASS.element, Some("FeatureCollection"));
    }

    #[test]
    fn history_members_are_repeatable() {
        let feature = HistoryPropertyType::CLASS
            .element_feature("MovingObjectStatus")
            .unwrap();
        assert!(feature.kind().is_many());
        assert!(feature.kind().is_containment());
    }
}
