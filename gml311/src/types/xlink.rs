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

//! The XLink simple link attributes.

use gml311_derive::SchemaObject;

use crate::property::{Attribute, Unsettable};

xml_enum! {
    /// When a link is traversed.
    pub enum ActuateType {
        OnLoad = "onLoad",
        OnRequest = "onRequest",
        Other = "other",
        None = "none",
    }
}

xml_enum! {
    /// Where the linked resource is presented.
    pub enum ShowType {
        New = "new",
        Replace = "replace",
        Embed = "embed",
        Other = "other",
        None = "none",
    }
}

xml_enum! {
    pub enum TypeType {
        Simple = "simple",
        Extended = "extended",
        Title = "title",
        Resource = "resource",
        Locator = "locator",
        Arc = "arc",
    }
}

/// The `xlink:simpleLink` attribute group.
///
/// All attributes are optional. `type`, `show` and `actuate` have schema
/// defaults and remember whether they were assigned.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(namespace = "xlink", name = "simpleLink", abstract)]
pub struct SimpleLink {
    #[gml(attribute = "type", namespace = "xlink")]
    pub type_: Unsettable<TypeType>,
    #[gml(attribute, namespace = "xlink")]
    pub href: Attribute<Option<String>>,
    #[gml(attribute, namespace = "xlink")]
    pub role: Attribute<Option<String>>,
    #[gml(attribute, namespace = "xlink")]
    pub arcrole: Attribute<Option<String>>,
    #[gml(attribute, namespace = "xlink")]
    pub title: Attribute<Option<String>>,
    #[gml(attribute, namespace = "xlink")]
    pub show: Unsettable<ShowType>,
    #[gml(attribute, namespace = "xlink")]
    pub actuate: Unsettable<ActuateType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Schema, SchemaObject};
    use crate::value::Value;

    #[test]
    fn defaults_are_not_set() {
        let link = SimpleLink::default();
        assert_eq!(link.actuate.get(), &ActuateType::OnLoad);
        assert_eq!(link.show.get(), &ShowType::New);
        assert!(!SchemaObject::is_set(&link, SimpleLink::ACTUATE.id()).unwrap());
    }

    #[test]
    fn attributes_live_in_the_xlink_namespace() {
        let feature = SimpleLink::CLASS.attribute_feature("type").unwrap();
        assert_eq!(feature.meta.xml.qualified(), "xlink:type");
        assert_eq!(feature.name(), "type");
    }

    #[test]
    fn enum_values_convert_both_ways() {
        let mut link = SimpleLink::default();
        link.basic_set(SimpleLink::SHOW.id(), Value::from("embed"))
            .unwrap();
        assert_eq!(link.show.get(), &ShowType::Embed);
        assert_eq!(link.get(SimpleLink::SHOW.id()).unwrap(), Value::Enum("embed"));
        assert!("sideways".parse::<ShowType>().is_err());
    }
}
