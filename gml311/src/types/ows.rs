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

//! OWS 1.1 common types used by WMTS.

use gml311_derive::SchemaObject;

use crate::property::{Attribute, Containment, ContainmentList};
use crate::types::xlink::SimpleLink;

/// Human readable text in the language given by `xml:lang`.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "ows", pascal_case)]
pub struct LanguageStringType {
    #[gml(text)]
    pub value: Attribute<String>,
    #[gml(attribute, namespace = "xml")]
    pub lang: Attribute<Option<String>>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "ows", pascal_case)]
pub struct CodeType {
    #[gml(text)]
    pub value: Attribute<String>,
    #[gml(attribute)]
    pub code_space: Attribute<Option<String>>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "ows", pascal_case)]
pub struct KeywordsType {
    pub keyword: ContainmentList<LanguageStringType>,
    pub type_: Containment<CodeType>,
}

/// Title, abstract and keywords of a described resource.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "ows", pascal_case)]
pub struct DescriptionType {
    pub title: ContainmentList<LanguageStringType>,
    pub abstract_: ContainmentList<LanguageStringType>,
    pub keywords: ContainmentList<KeywordsType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "ows", element = "BoundingBox", pascal_case)]
pub struct BoundingBoxType {
    pub lower_corner: Attribute<Vec<f64>>,
    pub upper_corner: Attribute<Vec<f64>>,
    #[gml(attribute)]
    pub crs: Attribute<Option<String>>,
    #[gml(attribute)]
    pub dimensions: Attribute<Option<i64>>,
}

/// A bounding box in WGS 84 longitude and latitude.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(
    namespace = "ows",
    name = "WGS84BoundingBoxType",
    element = "WGS84BoundingBox",
    pascal_case
)]
pub struct Wgs84BoundingBoxType {
    #[gml(base)]
    pub bounding_box: BoundingBoxType,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "ows", pascal_case)]
pub struct OnlineResourceType {
    #[gml(base)]
    pub link: SimpleLink,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::Namespace;
    use crate::object::Schema;

    #[test]
    fn elements_are_pascal_case() {
        let description = DescriptionType::CLASS;
        assert!(description.element_feature("Abstract").is_some());
        assert_eq!(
            description.feature_named("abstract").unwrap().meta.xml.qualified(),
            "ows:Abstract"
        );
        assert_eq!(
            KeywordsType::CLASS.element_feature("Type").unwrap().id,
            KeywordsType::TYPE.id()
        );
    }

    #[test]
    fn language_is_an_xml_attribute() {
        let lang = LanguageStringType::CLASS.attribute_feature("lang").unwrap();
        assert_eq!(lang.meta.xml.namespace, Namespace::Xml);
        assert_eq!(lang.meta.xml.qualified(), "xml:lang");
    }

    #[test]
    fn code_types_are_distinct_per_namespace() {
        assert!(!CodeType::CLASS.same(crate::types::CodeType::CLASS));
        assert_eq!(CodeType::CLASS.qualified_name(), "ows:CodeType");
    }
}
