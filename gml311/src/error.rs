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

use std::fmt;

use crate::meta::FeatureId;
use crate::model::NodeId;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The class has no feature with this id.
    UnknownFeature {
        class: &'static str,
        feature: FeatureId,
    },
    /// The node was deleted or belongs to another model.
    UnknownNode(NodeId),
    /// No class with this name is registered.
    UnknownClass(String),
    /// An element that maps to no feature of its parent (strict reading only).
    UnknownElement(String),
    /// Abstract classes can't be instantiated.
    AbstractClass(&'static str),
    /// A value of the wrong type was assigned to a feature.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// An object was assigned to a reference of an unrelated class.
    ClassMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// A list operation on a single valued feature.
    NotMany,
    /// A list position past the end of the list.
    IndexOutOfBounds { index: usize, len: usize },
    /// The object would become its own ancestor.
    CircularContainment(NodeId),
    /// The same object appears twice in one group assignment.
    DuplicateChild(NodeId),
    /// A value could not be parsed from its text form.
    InvalidValue { field: &'static str, value: String },
    /// The document has no root element.
    MissingRoot,
    /// The class declares no global element to write it as a document.
    NoElement(&'static str),
    /// An XML error from the underlying reader or writer.
    Xml(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFeature { class, feature } => {
                write!(f, "{class} has no feature {}", feature.index())
            }
            Self::UnknownNode(node) => write!(f, "unknown node {node}"),
            Self::UnknownClass(name) => write!(f, "unknown class: {name}"),
            Self::UnknownElement(name) => write!(f, "unexpected element: {name}"),
            Self::AbstractClass(name) => write!(f, "can't instantiate abstract class {name}"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {expected} value, found {found}")
            }
            Self::ClassMismatch { expected, found } => {
                write!(f, "expected {expected} object, found {found}")
            }
            Self::NotMany => write!(f, "feature is not multi-valued"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::CircularContainment(node) => {
                write!(f, "node {node} can't contain one of its ancestors")
            }
            Self::DuplicateChild(node) => write!(f, "node {node} is listed more than once"),
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: {value}")
            }
            Self::MissingRoot => write!(f, "document has no root element"),
            Self::NoElement(class) => write!(f, "{class} has no global element"),
            Self::Xml(e) => write!(f, "XML error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Xml(e.to_string())
    }
}
