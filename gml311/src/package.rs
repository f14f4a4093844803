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

//! The class registry and object factory.
//!
//! Documents name their root by element; the registry maps element and
//! class names back to classes so that objects can be created without
//! knowing their Rust type.

use log::debug;

use crate::error::Error;
use crate::meta::{Class, Namespace};
use crate::model::{Model, NodeId};
use crate::object::Schema;
use crate::types::{ows, wmts, xlink, *};

/// Every registered class, abstract ones included.
pub static CLASSES: &[&Class] = &[
    // xlink
    xlink::SimpleLink::CLASS,
    // gml basic
    AssociationAttributes::CLASS,
    CodeType::CLASS,
    CodeListType::CLASS,
    CodeOrNullListType::CLASS,
    MeasureType::CLASS,
    MeasureListType::CLASS,
    MeasureOrNullListType::CLASS,
    CoordinatesType::CLASS,
    CoordType::CLASS,
    StringOrRefType::CLASS,
    ReferenceType::CLASS,
    AbstractMetaDataType::CLASS,
    GenericMetaDataType::CLASS,
    MetaDataPropertyType::CLASS,
    AbstractGmlType::CLASS,
    // gml geometry
    AbstractGeometryType::CLASS,
    DirectPositionType::CLASS,
    DirectPositionListType::CLASS,
    VectorType::CLASS,
    EnvelopeType::CLASS,
    EnvelopeWithTimePeriodType::CLASS,
    BoundingShapeType::CLASS,
    PointType::CLASS,
    PointPropertyType::CLASS,
    LineStringType::CLASS,
    AbstractRingType::CLASS,
    LinearRingType::CLASS,
    AbstractRingPropertyType::CLASS,
    PolygonType::CLASS,
    GeometryPropertyType::CLASS,
    // gml grids
    GridEnvelopeType::CLASS,
    GridLimitsType::CLASS,
    GridType::CLASS,
    RectifiedGridType::CLASS,
    // gml temporal
    TimePositionType::CLASS,
    AbstractTimeObjectType::CLASS,
    AbstractTimePrimitiveType::CLASS,
    AbstractTimeGeometricPrimitiveType::CLASS,
    TimeInstantType::CLASS,
    TimeIntervalLengthType::CLASS,
    TimePeriodType::CLASS,
    TimePrimitivePropertyType::CLASS,
    AbstractTimeSliceType::CLASS,
    // gml features
    AbstractFeatureType::CLASS,
    LocationPropertyType::CLASS,
    FeaturePropertyType::CLASS,
    FeatureArrayPropertyType::CLASS,
    AbstractFeatureCollectionType::CLASS,
    FeatureCollectionType::CLASS,
    DynamicFeatureType::CLASS,
    HistoryPropertyType::CLASS,
    MovingObjectStatusType::CLASS,
    // gml value objects
    ValuePropertyType::CLASS,
    CompositeValueType::CLASS,
    ValueArrayType::CLASS,
    CategoryExtentType::CLASS,
    QuantityExtentType::CLASS,
    RangeParametersType::CLASS,
    // gml coordinate systems
    IdentifierType::CLASS,
    CoordinateSystemAxisType::CLASS,
    CoordinateSystemAxisRefType::CLASS,
    AbstractCoordinateSystemType::CLASS,
    EllipsoidalCsType::CLASS,
    CartesianCsType::CLASS,
    // ows
    ows::LanguageStringType::CLASS,
    ows::CodeType::CLASS,
    ows::KeywordsType::CLASS,
    ows::DescriptionType::CLASS,
    ows::BoundingBoxType::CLASS,
    ows::Wgs84BoundingBoxType::CLASS,
    ows::OnlineResourceType::CLASS,
    // wmts
    wmts::TileMatrixType::CLASS,
    wmts::TileMatrixSetType::CLASS,
    wmts::TileMatrixLimitsType::CLASS,
    wmts::TileMatrixSetLimitsType::CLASS,
    wmts::TileMatrixSetLinkType::CLASS,
    wmts::UrlTemplateType::CLASS,
    wmts::DimensionNameValueType::CLASS,
    wmts::DimensionType::CLASS,
    wmts::GetTileType::CLASS,
    wmts::LegendUrlType::CLASS,
    wmts::StyleType::CLASS,
    wmts::TextPayloadType::CLASS,
    wmts::BinaryPayloadType::CLASS,
    wmts::LayerType::CLASS,
    wmts::ContentsType::CLASS,
    wmts::CapabilitiesType::CLASS,
];

/// Looks up a class by namespace and type name.
///
/// # Examples
///
/// ```
/// use gml311::meta::Namespace;
/// use gml311::package;
///
/// let class = package::class_named(Namespace::Wmts, "TileMatrixType").unwrap();
/// assert_eq!(class.element, Some("TileMatrix"));
/// ```
pub fn class_named(namespace: Namespace, name: &str) -> Option<&'static Class> {
    CLASSES
        .iter()
        .copied()
        .find(|class| class.namespace == namespace && class.name == name)
}

/// The class declared with the global element `local`.
pub fn element_class(namespace: Namespace, local: &str) -> Option<&'static Class> {
    CLASSES
        .iter()
        .copied()
        .find(|class| class.namespace == namespace && class.element == Some(local))
}

/// Registered classes that can be instantiated as `class`, the class itself
/// included if it is concrete.
pub fn concrete_subclasses(class: &Class) -> Vec<&'static Class> {
    CLASSES
        .iter()
        .copied()
        .filter(|candidate| !candidate.is_abstract && candidate.is_subclass_of(class))
        .collect()
}

/// Creates a default instance of the named class in `model`.
pub fn create(model: &mut Model, namespace: Namespace, name: &str) -> Result<NodeId, Error> {
    let Some(class) = class_named(namespace, name) else {
        debug!("no class {name} in namespace {namespace:?}");
        return Err(Error::UnknownClass(name.to_string()));
    };
    model.instantiate(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn classes_are_unique() {
        let mut seen = HashSet::new();
        for class in CLASSES {
            assert!(
                seen.insert(class.qualified_name()),
                "{} registered twice",
                class.qualified_name()
            );
        }
    }

    #[test]
    fn elements_resolve_to_classes() {
        let grid = element_class(Namespace::Gml, "RectifiedGrid").unwrap();
        assert!(grid.same(RectifiedGridType::CLASS));
        assert!(element_class(Namespace::Wmts, "RectifiedGrid").is_none());
    }

    #[test]
    fn concrete_subclasses_of_an_abstract_head() {
        let geometries = concrete_subclasses(AbstractGeometryType::CLASS);
        assert!(geometries.iter().any(|class| class.same(PointType::CLASS)));
        assert!(geometries.iter().any(|class| class.same(RectifiedGridType::CLASS)));
        assert!(geometries.iter().all(|class| !class.is_abstract));
    }

    #[test]
    fn factory_refuses_abstract_and_unknown_classes() {
        let mut model = Model::new();
        let grid = create(&mut model, Namespace::Gml, "GridType").unwrap();
        assert_eq!(model.class(grid).unwrap().name, "GridType");

        assert_eq!(
            create(&mut model, Namespace::Gml, "AbstractFeatureType"),
            Err(Error::AbstractClass("AbstractFeatureType"))
        );
        assert_eq!(
            create(&mut model, Namespace::Gml, "GridCoverage"),
            Err(Error::UnknownClass("GridCoverage".to_string()))
        );
        assert_eq!(model.len(), 1);
    }
}
