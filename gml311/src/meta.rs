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

//! Class and feature metadata.
//!
//! Every schema type has one static [`Class`] listing its own features. The
//! features of a class are numbered base first: a class with a base of `n`
//! features numbers its own features from `n`. An id is therefore valid for
//! the class that declares it and for every subclass.

use std::fmt;

use crate::error::Error;
use crate::object::SchemaObject;
use crate::value::ValueType;

/// Position of a feature within a class, inherited features first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FeatureId(usize);

impl FeatureId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lazily resolved class reference.
///
/// References between classes go through a function so that recursive types
/// (a composite value containing value properties containing composite
/// values) don't form a cycle of constants.
pub type ClassRef = fn() -> &'static Class;

/// XML namespaces of the bound schemas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Gml,
    Xlink,
    Ows,
    Wmts,
    /// The `xml` namespace, bound by definition and never declared.
    Xml,
    /// Unqualified attributes.
    None,
}

impl Namespace {
    /// Namespaces declared on written documents.
    pub const ALL: [Namespace; 4] = [Self::Gml, Self::Xlink, Self::Ows, Self::Wmts];

    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Gml => Some("gml"),
            Self::Xlink => Some("xlink"),
            Self::Ows => Some("ows"),
            Self::Wmts => Some("wmts"),
            Self::Xml => Some("xml"),
            Self::None => None,
        }
    }

    pub const fn uri(self) -> Option<&'static str> {
        match self {
            Self::Gml => Some("http://www.opengis.net/gml"),
            Self::Xlink => Some("http://www.w3.org/1999/xlink"),
            Self::Ows => Some("http://www.opengis.net/ows/1.1"),
            Self::Wmts => Some("http://www.opengis.net/wmts/1.0"),
            Self::Xml => Some("http://www.w3.org/XML/1998/namespace"),
            Self::None => None,
        }
    }

    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.uri() == Some(uri))
    }

    /// Resolves the conventional prefix of a namespace.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .chain([Self::Xml])
            .find(|ns| ns.prefix() == Some(prefix))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XmlName {
    pub namespace: Namespace,
    pub local: &'static str,
}

impl XmlName {
    /// The prefixed name, e.g. `gml:pos`.
    pub fn qualified(&self) -> String {
        match self.namespace.prefix() {
            Some(prefix) => format!("{prefix}:{}", self.local),
            None => self.local.to_string(),
        }
    }
}

/// How a feature is represented in XML.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XmlRole {
    Attribute,
    Element,
    /// One element per list item.
    Repeated,
    /// Simple content of the element itself.
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    /// A data value. Unsettable attributes track presence with a flag.
    Attribute { unsettable: bool },
    /// A single owned child.
    Containment,
    /// An ordered list of owned children.
    ContainmentList,
    /// Ordered `(feature, value)` entries of a choice or mixed content.
    Group { mixed: bool, many: bool },
    /// A view on the entries of `group` belonging to the substitution
    /// family of `head`.
    Member {
        group: FeatureId,
        head: FeatureId,
        many: bool,
    },
}

impl PropertyKind {
    pub const fn is_many(&self) -> bool {
        match self {
            Self::ContainmentList => true,
            Self::Group { many, .. } | Self::Member { many, .. } => *many,
            _ => false,
        }
    }

    /// Whether values of the feature are owned child objects.
    pub const fn is_containment(&self) -> bool {
        matches!(
            self,
            Self::Containment | Self::ContainmentList | Self::Member { .. }
        )
    }
}

/// Metadata of one feature as declared on its class.
#[derive(Clone, Copy, Debug)]
pub struct FeatureMeta {
    pub name: &'static str,
    pub xml: XmlName,
    pub role: XmlRole,
    pub kind: PropertyKind,
    pub target: Option<ClassRef>,
    pub value_type: Option<ValueType>,
}

impl FeatureMeta {
    /// The class of the referenced objects.
    pub fn target(&self) -> Option<&'static Class> {
        self.target.map(|class| class())
    }
}

/// A feature of a class together with its id.
#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub id: FeatureId,
    pub meta: &'static FeatureMeta,
}

impl Feature {
    pub fn name(&self) -> &'static str {
        self.meta.name
    }

    pub fn kind(&self) -> PropertyKind {
        self.meta.kind
    }
}

/// Metadata of a schema type.
///
/// # Examples
///
/// ```
/// use gml311::meta::FeatureId;
/// use gml311::object::Schema;
/// use gml311::types::{AbstractGeometryType, GridType};
///
/// let class = GridType::CLASS;
/// assert!(class.is_subclass_of(AbstractGeometryType::CLASS));
///
/// // inherited features come first
/// let srs_name = class.feature_named("srsName").unwrap();
/// assert_eq!(srs_name.id, AbstractGeometryType::SRS_NAME.id());
/// assert_eq!(class.feature(FeatureId::new(0)).unwrap().name(), "metaDataProperty");
/// ```
pub struct Class {
    pub name: &'static str,
    pub namespace: Namespace,
    /// Global element declared with this type.
    pub element: Option<&'static str>,
    pub is_abstract: bool,
    pub base: Option<&'static Class>,
    /// Own features, numbered after the features of the base.
    pub features: &'static [FeatureMeta],
    pub create: Option<fn() -> Box<dyn SchemaObject>>,
}

impl Class {
    pub const fn feature_count(&self) -> usize {
        let inherited = match self.base {
            Some(base) => base.feature_count(),
            None => 0,
        };
        inherited + self.features.len()
    }

    pub fn feature(&self, id: FeatureId) -> Option<Feature> {
        let inherited = self.base.map_or(0, |base| base.feature_count());
        if id.index() < inherited {
            return self.base.and_then(|base| base.feature(id));
        }
        self.features
            .get(id.index() - inherited)
            .map(|meta| Feature { id, meta })
    }

    /// All features, inherited ones first.
    pub fn features(&self) -> Vec<Feature> {
        let mut features = match self.base {
            Some(base) => base.features(),
            None => Vec::with_capacity(self.features.len()),
        };
        let offset = features.len();
        features.extend(self.features.iter().enumerate().map(|(i, meta)| Feature {
            id: FeatureId::new(offset + i),
            meta,
        }));
        features
    }

    pub fn feature_named(&self, name: &str) -> Option<Feature> {
        self.features().into_iter().find(|f| f.meta.name == name)
    }

    /// The feature written as child element `local`.
    ///
    /// Groups have no element of their own, their members do.
    pub fn element_feature(&self, local: &str) -> Option<Feature> {
        self.features().into_iter().rev().find(|f| {
            matches!(f.meta.role, XmlRole::Element | XmlRole::Repeated)
                && !matches!(f.meta.kind, PropertyKind::Group { .. })
                && f.meta.xml.local == local
        })
    }

    pub fn attribute_feature(&self, local: &str) -> Option<Feature> {
        self.features()
            .into_iter()
            .find(|f| f.meta.role == XmlRole::Attribute && f.meta.xml.local == local)
    }

    /// The feature holding the simple content of the element.
    pub fn text_feature(&self) -> Option<Feature> {
        self.features()
            .into_iter()
            .find(|f| f.meta.role == XmlRole::Text)
    }

    /// The feature map collecting character content of mixed elements.
    pub fn mixed_feature(&self) -> Option<Feature> {
        self.features()
            .into_iter()
            .find(|f| matches!(f.meta.kind, PropertyKind::Group { mixed: true, .. }))
    }

    /// Classes are identified by namespace and name.
    pub fn same(&self, other: &Class) -> bool {
        self.name == other.name && self.namespace == other.namespace
    }

    pub fn is_subclass_of(&self, other: &Class) -> bool {
        let mut class = Some(self);
        while let Some(current) = class {
            if current.same(other) {
                return true;
            }
            class = current.base;
        }
        false
    }

    /// The prefixed class name, e.g. `gml:GridEnvelopeType`.
    pub fn qualified_name(&self) -> String {
        XmlName {
            namespace: self.namespace,
            local: self.name,
        }
        .qualified()
    }

    pub fn instantiate(&self) -> Result<Box<dyn SchemaObject>, Error> {
        self.create
            .map(|create| create())
            .ok_or(Error::AbstractClass(self.name))
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.qualified_name())
            .field("base", &self.base.map(Class::qualified_name))
            .field("features", &self.feature_count())
            .finish()
    }
}
