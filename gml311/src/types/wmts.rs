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

//! WMTS 1.0 capabilities and GetTile request types.

use gml311_derive::SchemaObject;

use crate::group::Choice;
use crate::property::{Attribute, Containment, ContainmentList, Member, Unsettable};
use crate::types::ows::{
    BoundingBoxType, CodeType, DescriptionType, OnlineResourceType, Wgs84BoundingBoxType,
};

xml_enum! {
    /// The kind of resource a URL template gives access to.
    pub enum ResourceTypeType {
        Tile = "tile",
        FeatureInfo = "FeatureInfo",
    }
}

/// One scale level of a tile matrix set.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", element = "TileMatrix", pascal_case)]
pub struct TileMatrixType {
    #[gml(base)]
    pub description: DescriptionType,
    #[gml(namespace = "ows")]
    pub identifier: Containment<CodeType>,
    pub scale_denominator: Attribute<f64>,
    pub top_left_corner: Attribute<Vec<f64>>,
    pub tile_width: Attribute<i64>,
    pub tile_height: Attribute<i64>,
    pub matrix_width: Attribute<i64>,
    pub matrix_height: Attribute<i64>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", element = "TileMatrixSet", pascal_case)]
pub struct TileMatrixSetType {
    #[gml(base)]
    pub description: DescriptionType,
    #[gml(namespace = "ows")]
    pub identifier: Containment<CodeType>,
    pub bounding_box_group: Choice,
    #[gml(group = bounding_box_group, namespace = "ows", element = "BoundingBox")]
    pub bounding_box: Member<BoundingBoxType>,
    #[gml(
        group = bounding_box_group,
        substitutes = bounding_box,
        namespace = "ows",
        element = "WGS84BoundingBox"
    )]
    pub wgs84_bounding_box: Member<Wgs84BoundingBoxType>,
    #[gml(namespace = "ows", element = "SupportedCRS")]
    pub supported_crs: Attribute<String>,
    pub well_known_scale_set: Attribute<Option<String>>,
    pub tile_matrix: ContainmentList<TileMatrixType>,
}

/// The tile rows and columns of one tile matrix that a layer covers.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", pascal_case)]
pub struct TileMatrixLimitsType {
    pub tile_matrix: Attribute<String>,
    pub min_tile_row: Attribute<i64>,
    pub max_tile_row: Attribute<i64>,
    pub min_tile_col: Attribute<i64>,
    pub max_tile_col: Attribute<i64>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", pascal_case)]
pub struct TileMatrixSetLimitsType {
    pub tile_matrix_limits: ContainmentList<TileMatrixLimitsType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", pascal_case)]
pub struct TileMatrixSetLinkType {
    pub tile_matrix_set: Attribute<String>,
    pub tile_matrix_set_limits: Containment<TileMatrixSetLimitsType>,
}

/// A URL template for RESTful access, e.g.
/// `https://tiles.example/{TileMatrix}/{TileRow}/{TileCol}.png`.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", name = "URLTemplateType", pascal_case)]
pub struct UrlTemplateType {
    #[gml(attribute)]
    pub format: Attribute<String>,
    #[gml(attribute)]
    pub resource_type: Unsettable<ResourceTypeType>,
    #[gml(attribute)]
    pub template: Attribute<String>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", pascal_case)]
pub struct DimensionNameValueType {
    #[gml(text)]
    pub value: Attribute<String>,
    #[gml(attribute)]
    pub name: Attribute<String>,
}

/// An extra dimension of a layer, such as time or elevation.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", element = "Dimension", pascal_case)]
pub struct DimensionType {
    #[gml(base)]
    pub description: DescriptionType,
    #[gml(namespace = "ows")]
    pub identifier: Containment<CodeType>,
    #[gml(namespace = "ows", element = "UOM")]
    pub uom: Containment<CodeType>,
    pub unit_symbol: Attribute<Option<String>>,
    pub default: Attribute<String>,
    pub current: Unsettable<bool>,
    #[gml(repeated)]
    pub value: Attribute<Vec<String>>,
}

#[derive(Clone, Debug, SchemaObject)]
#[gml(namespace = "wmts", element = "GetTile", pascal_case)]
pub struct GetTileType {
    #[gml(attribute)]
    pub service: Unsettable<String>,
    #[gml(attribute)]
    pub version: Unsettable<String>,
    pub layer: Attribute<String>,
    pub style: Attribute<String>,
    pub format: Attribute<String>,
    pub dimension_name_value: ContainmentList<DimensionNameValueType>,
    pub tile_matrix_set: Attribute<String>,
    pub tile_matrix: Attribute<String>,
    pub tile_row: Attribute<i64>,
    pub tile_col: Attribute<i64>,
}

impl Default for GetTileType {
    fn default() -> Self {
        Self {
            service: Unsettable::with_default("WMTS".to_string()),
            version: Unsettable::with_default("1.0.0".to_string()),
            layer: Attribute::default(),
            style: Attribute::default(),
            format: Attribute::default(),
            dimension_name_value: ContainmentList::default(),
            tile_matrix_set: Attribute::default(),
            tile_matrix: Attribute::default(),
            tile_row: Attribute::default(),
            tile_col: Attribute::default(),
        }
    }
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", name = "LegendURLType", pascal_case)]
pub struct LegendUrlType {
    #[gml(base)]
    pub resource: OnlineResourceType,
    #[gml(attribute)]
    pub format: Attribute<Option<String>>,
    #[gml(attribute)]
    pub min_scale_denominator: Attribute<Option<f64>>,
    #[gml(attribute)]
    pub max_scale_denominator: Attribute<Option<f64>>,
    #[gml(attribute)]
    pub width: Attribute<Option<i64>>,
    #[gml(attribute)]
    pub height: Attribute<Option<i64>>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", pascal_case)]
pub struct StyleType {
    #[gml(base)]
    pub description: DescriptionType,
    #[gml(namespace = "ows")]
    pub identifier: Containment<CodeType>,
    #[gml(element = "LegendURL")]
    pub legend_url: ContainmentList<LegendUrlType>,
    #[gml(attribute)]
    pub is_default: Unsettable<bool>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", element = "TextPayload", pascal_case)]
pub struct TextPayloadType {
    pub format: Attribute<String>,
    pub text_content: Attribute<String>,
}

/// A tile or feature info response encoded in base64.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", element = "BinaryPayload", pascal_case)]
pub struct BinaryPayloadType {
    pub format: Attribute<String>,
    pub binary_content: Attribute<String>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", element = "Layer", pascal_case)]
pub struct LayerType {
    #[gml(base)]
    pub description: DescriptionType,
    #[gml(namespace = "ows", element = "WGS84BoundingBox")]
    pub wgs84_bounding_box: ContainmentList<Wgs84BoundingBoxType>,
    #[gml(namespace = "ows")]
    pub identifier: Containment<CodeType>,
    #[gml(namespace = "ows")]
    pub bounding_box: ContainmentList<BoundingBoxType>,
    pub style: ContainmentList<StyleType>,
    #[gml(repeated)]
    pub format: Attribute<Vec<String>>,
    #[gml(repeated)]
    pub info_format: Attribute<Vec<String>>,
    pub dimension: ContainmentList<DimensionType>,
    pub tile_matrix_set_link: ContainmentList<TileMatrixSetLinkType>,
    #[gml(element = "ResourceURL")]
    pub resource_url: ContainmentList<UrlTemplateType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", element = "Contents", pascal_case)]
pub struct ContentsType {
    pub layer: ContainmentList<LayerType>,
    pub tile_matrix_set: ContainmentList<TileMatrixSetType>,
}

/// The root of a WMTS capabilities document.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "wmts", element = "Capabilities", pascal_case)]
pub struct CapabilitiesType {
    pub contents: Containment<ContentsType>,
    #[gml(element = "ServiceMetadataURL")]
    pub service_metadata_url: ContainmentList<OnlineResourceType>,
    #[gml(attribute)]
    pub version: Attribute<String>,
    #[gml(attribute)]
    pub update_sequence: Attribute<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Schema, SchemaObject};
    use crate::value::Value;

    #[test]
    fn get_tile_defaults() {
        let request = GetTileType::default();
        assert_eq!(request.service.get(), "WMTS");
        assert_eq!(request.version.get(), "1.0.0");
        assert!(!request.is_set(GetTileType::SERVICE.id()).unwrap());
    }

    #[test]
    fn resource_type_literals_follow_the_schema() {
        assert_eq!(ResourceTypeType::FeatureInfo.literal(), "FeatureInfo");
        assert_eq!(ResourceTypeType::default(), ResourceTypeType::Tile);

        let mut template = UrlTemplateType::default();
        template
            .basic_set(UrlTemplateType::RESOURCE_TYPE.id(), Value::from("FeatureInfo"))
            .unwrap();
        assert_eq!(template.resource_type.get(), &ResourceTypeType::FeatureInfo);
        assert!(template
            .basic_set(UrlTemplateType::RESOURCE_TYPE.id(), Value::from("map"))
            .is_err());
    }

    #[test]
    fn ows_elements_inside_wmts_types() {
        let class = TileMatrixSetType::CLASS;
        let crs = class.element_feature("SupportedCRS").unwrap();
        assert_eq!(crs.meta.xml.qualified(), "ows:SupportedCRS");

        let matrix = class.element_feature("TileMatrix").unwrap();
        assert_eq!(matrix.meta.xml.qualified(), "wmts:TileMatrix");

        // inherited from the description
        let title = class.element_feature("Title").unwrap();
        assert_eq!(title.meta.xml.qualified(), "ows:Title");
    }

    #[test]
    fn layer_formats_are_repeated() {
        let mut layer = LayerType::default();
        let format = LayerType::FORMAT.id();
        layer
            .basic_set(
                format,
                Value::Strings(vec!["image/png".into(), "image/jpeg".into()]),
            )
            .unwrap();
        assert_eq!(layer.format.get().len(), 2);
    }
}
