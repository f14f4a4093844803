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

//! Basic GML types: codes, measures, coordinates and the GML object base.

use gml311_derive::SchemaObject;

use crate::group::{Choice, FeatureMap};
use crate::property::{Attribute, Containment, ContainmentList, Member, Unsettable};
use crate::types::xlink::SimpleLink;

/// `gml:AssociationAttributeGroup`, the attributes of every property type
/// that may point to a remote object.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(name = "AssociationAttributeGroup", abstract)]
pub struct AssociationAttributes {
    #[gml(base)]
    pub link: SimpleLink,
    #[gml(attribute, namespace = "gml")]
    pub remote_schema: Attribute<Option<String>>,
}

/// A term from a dictionary named by `codeSpace`.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct CodeType {
    #[gml(text)]
    pub value: Attribute<String>,
    #[gml(attribute)]
    pub code_space: Attribute<Option<String>>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct CodeListType {
    #[gml(text)]
    pub value: Attribute<Vec<String>>,
    #[gml(attribute)]
    pub code_space: Attribute<Option<String>>,
}

/// Terms that may be replaced by null reasons such as `inapplicable`.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct CodeOrNullListType {
    #[gml(text)]
    pub value: Attribute<Vec<String>>,
    #[gml(attribute)]
    pub code_space: Attribute<Option<String>>,
}

/// A number with a unit of measure.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct MeasureType {
    #[gml(text)]
    pub value: Attribute<f64>,
    #[gml(attribute)]
    pub uom: Attribute<String>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct MeasureListType {
    #[gml(text)]
    pub value: Attribute<Vec<f64>>,
    #[gml(attribute)]
    pub uom: Attribute<String>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct MeasureOrNullListType {
    #[gml(text)]
    pub value: Attribute<Vec<String>>,
    #[gml(attribute)]
    pub uom: Attribute<String>,
}

/// Coordinates as one string with configurable separators.
#[derive(Clone, Debug, SchemaObject)]
pub struct CoordinatesType {
    #[gml(text)]
    pub value: Attribute<String>,
    #[gml(attribute)]
    pub decimal: Unsettable<String>,
    #[gml(attribute)]
    pub cs: Unsettable<String>,
    #[gml(attribute)]
    pub ts: Unsettable<String>,
}

impl Default for CoordinatesType {
    fn default() -> Self {
        Self {
            value: Attribute::default(),
            decimal: Unsettable::with_default(".".to_string()),
            cs: Unsettable::with_default(",".to_string()),
            ts: Unsettable::with_default(" ".to_string()),
        }
    }
}

/// Deprecated coordinate tuple with one element per axis.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct CoordType {
    #[gml(element = "X")]
    pub x: Attribute<f64>,
    #[gml(element = "Y")]
    pub y: Attribute<Option<f64>>,
    #[gml(element = "Z")]
    pub z: Attribute<Option<f64>>,
}

/// A string value, or a link to a remote one.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct StringOrRefType {
    #[gml(base)]
    pub association: AssociationAttributes,
    #[gml(text)]
    pub value: Attribute<String>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct ReferenceType {
    #[gml(base)]
    pub association: AssociationAttributes,
}

/// Base of metadata packages. The content is mixed.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "_MetaData", abstract)]
pub struct AbstractMetaDataType {
    #[gml(mixed)]
    pub content: FeatureMap,
    #[gml(attribute, namespace = "gml")]
    pub id: Attribute<Option<String>>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "GenericMetaData")]
pub struct GenericMetaDataType {
    #[gml(base)]
    pub meta_data: AbstractMetaDataType,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct MetaDataPropertyType {
    #[gml(base)]
    pub association: AssociationAttributes,
    pub meta_data_group: Choice,
    #[gml(group = meta_data_group, element = "_MetaData")]
    pub meta_data: Member<AbstractMetaDataType>,
    #[gml(group = meta_data_group, substitutes = meta_data, element = "GenericMetaData")]
    pub generic_meta_data: Member<GenericMetaDataType>,
    #[gml(attribute)]
    pub about: Attribute<Option<String>>,
}

/// Base of all GML objects.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(name = "AbstractGMLType", element = "_GML", abstract)]
pub struct AbstractGmlType {
    pub meta_data_property: ContainmentList<MetaDataPropertyType>,
    pub description: Containment<StringOrRefType>,
    pub name: ContainmentList<CodeType>,
    #[gml(attribute, namespace = "gml")]
    pub id: Attribute<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{PropertyKind, XmlRole};
    use crate::object::Schema;

    #[test]
    fn inherited_features_come_first() {
        let class = StringOrRefType::CLASS;
        let names: Vec<_> = class.features().iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "type",
                "href",
                "role",
                "arcrole",
                "title",
                "show",
                "actuate",
                "remoteSchema",
                "value"
            ]
        );
        assert_eq!(StringOrRefType::VALUE.id().index(), 8);
    }

    #[test]
    fn substitute_shares_the_head_family() {
        let class = MetaDataPropertyType::CLASS;
        let generic = class.element_feature("GenericMetaData").unwrap();
        let PropertyKind::Member { group, head, many } = generic.kind() else {
            panic!("expected a member, found {:?}", generic.kind());
        };
        assert_eq!(group, MetaDataPropertyType::META_DATA_GROUP.id());
        assert_eq!(head, MetaDataPropertyType::META_DATA.id());
        assert!(!many);
    }

    #[test]
    fn coordinates_have_schema_separators() {
        let coordinates = CoordinatesType::default();
        assert_eq!(coordinates.decimal.get(), ".");
        assert_eq!(coordinates.ts.get(), " ");
        assert!(!coordinates.cs.is_set());
    }

    #[test]
    fn text_and_mixed_features() {
        assert_eq!(CodeType::CLASS.text_feature().unwrap().meta.role, XmlRole::Text);
        assert!(GenericMetaDataType::CLASS.mixed_feature().is_some());
        assert!(AbstractGmlType::CLASS.is_abstract);
    }
}
