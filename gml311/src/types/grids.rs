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

//! Grid geometries.

use gml311_derive::SchemaObject;

use crate::property::{Attribute, Containment, ContainmentList};
use crate::types::geometry::{AbstractGeometryType, PointPropertyType, VectorType};

/// Lowest and highest grid coordinates, both inclusive.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct GridEnvelopeType {
    pub low: Attribute<Vec<i64>>,
    pub high: Attribute<Vec<i64>>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct GridLimitsType {
    #[gml(element = "GridEnvelope")]
    pub grid_envelope: Containment<GridEnvelopeType>,
}

/// An unrectified grid.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "Grid")]
pub struct GridType {
    #[gml(base)]
    pub geometry: AbstractGeometryType,
    pub limits: Containment<GridLimitsType>,
    #[gml(repeated)]
    pub axis_name: Attribute<Vec<String>>,
    #[gml(attribute)]
    pub dimension: Attribute<i64>,
}

/// A grid with an affine transformation to its coordinate system.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "RectifiedGrid")]
pub struct RectifiedGridType {
    #[gml(base)]
    pub grid: GridType,
    pub origin: Containment<PointPropertyType>,
    pub offset_vector: ContainmentList<VectorType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::XmlRole;
    use crate::object::{Schema, SchemaObject};
    use crate::value::Value;

    #[test]
    fn envelope_tracks_its_corners() {
        let mut envelope = GridEnvelopeType::default();
        assert!(!envelope.is_set(GridEnvelopeType::LOW.id()).unwrap());

        envelope
            .basic_set(GridEnvelopeType::LOW.id(), Value::Ints(vec![0, 0]))
            .unwrap();
        envelope
            .basic_set(GridEnvelopeType::HIGH.id(), Value::Ints(vec![10, 10]))
            .unwrap();

        assert_eq!(envelope.low.get(), &vec![0, 0]);
        assert_eq!(
            envelope.get(GridEnvelopeType::HIGH.id()).unwrap(),
            Value::Ints(vec![10, 10])
        );
        assert!(envelope.is_set(GridEnvelopeType::HIGH.id()).unwrap());
    }

    #[test]
    fn axis_names_are_repeated_elements() {
        let feature = GridType::CLASS.element_feature("axisName").unwrap();
        assert_eq!(feature.meta.role, XmlRole::Repeated);
        assert_eq!(feature.id, GridType::AXIS_NAME.id());
    }

    #[test]
    fn rectified_grid_is_a_grid() {
        assert!(RectifiedGridType::CLASS.is_subclass_of(GridType::CLASS));
        assert!(RectifiedGridType::CLASS.is_subclass_of(AbstractGeometryType::CLASS));
        assert!(!GridType::CLASS.is_subclass_of(RectifiedGridType::CLASS));
    }
}
