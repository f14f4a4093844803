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

//! Dynamically typed feature values.

use crate::error::Error;
use crate::group::Entry;
use crate::model::NodeId;

/// The value of a feature as seen by the reflective interface.
///
/// `Null` stands for absence: it clears references, empties lists and
/// converts to `None`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    /// Literal of a schema enumeration.
    Enum(&'static str),
    Ints(Vec<i64>),
    Doubles(Vec<f64>),
    Strings(Vec<String>),
    Object(NodeId),
    Objects(Vec<NodeId>),
    Entries(Vec<Entry>),
}

impl Value {
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Enum(_) => "enumeration",
            Self::Ints(_) => "integer list",
            Self::Doubles(_) => "double list",
            Self::Strings(_) => "string list",
            Self::Object(_) => "object",
            Self::Objects(_) => "object list",
            Self::Entries(_) => "feature map",
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_object(&self) -> Option<NodeId> {
        match self {
            Self::Object(node) => Some(*node),
            _ => None,
        }
    }

    /// All objects referenced by the value, in order.
    pub fn objects(&self) -> Vec<NodeId> {
        match self {
            Self::Object(node) => vec![*node],
            Self::Objects(nodes) => nodes.clone(),
            Self::Entries(entries) => entries
                .iter()
                .filter_map(|entry| entry.value.as_object())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The XML text form of a data value. Lists are separated by spaces.
    pub fn to_text(&self) -> Option<String> {
        fn join<T: ToString>(items: &[T]) -> String {
            items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        }

        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Double(d) => Some(d.to_string()),
            Self::String(s) => Some(s.clone()),
            Self::Enum(literal) => Some((*literal).to_string()),
            Self::Ints(items) => Some(join(items)),
            Self::Doubles(items) => Some(join(items)),
            Self::Strings(items) => Some(items.join(" ")),
            Self::Null | Self::Object(_) | Self::Objects(_) | Self::Entries(_) => None,
        }
    }
}

/// Conversion out of a [`Value`], the counterpart of `Into<Value>`.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, Error>;
}

fn mismatch<T>(expected: &'static str, found: &Value) -> Result<T, Error> {
    Err(Error::TypeMismatch {
        expected,
        found: found.type_name(),
    })
}

macro_rules! value_conversion {
    ($ty:ty, $variant:ident, $expected:literal) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }

        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, Error> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => mismatch($expected, &other),
                }
            }
        }
    };
}

value_conversion!(bool, Bool, "boolean");
value_conversion!(i64, Int, "integer");
value_conversion!(f64, Double, "double");
value_conversion!(String, String, "string");
value_conversion!(Vec<i64>, Ints, "integer list");
value_conversion!(Vec<f64>, Doubles, "double list");
value_conversion!(Vec<String>, Strings, "string list");
value_conversion!(NodeId, Object, "object");
value_conversion!(Vec<NodeId>, Objects, "object list");
value_conversion!(Vec<Entry>, Entries, "feature map");

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, Error> {
        Ok(value)
    }
}

/// Shape of a data value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    Bool,
    Int,
    Double,
    String,
    /// An enumeration with its literals, the first one being the default.
    Enum(&'static [&'static str]),
    Ints,
    Doubles,
    Strings,
}

/// Type of a data value, used to parse its XML text form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueType {
    pub kind: ScalarKind,
    /// Whether `Null` is a valid value.
    pub nullable: bool,
}

impl ValueType {
    pub const fn new(kind: ScalarKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    pub const fn nullable(self) -> Self {
        Self {
            kind: self.kind,
            nullable: true,
        }
    }

    /// Parses the text form of a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use gml311::value::{ScalarKind, Value, ValueType};
    ///
    /// let ints = ValueType::new(ScalarKind::Ints);
    /// assert_eq!(ints.parse("low", "0 10").unwrap(), Value::Ints(vec![0, 10]));
    /// ```
    pub fn parse(&self, field: &'static str, text: &str) -> Result<Value, Error> {
        let text = text.trim();
        if self.nullable && text.is_empty() && self.kind != ScalarKind::String {
            return Ok(Value::Null);
        }

        let invalid = || Error::InvalidValue {
            field,
            value: text.to_string(),
        };

        match self.kind {
            ScalarKind::Bool => parse_bool(text).map(Value::Bool).ok_or_else(invalid),
            ScalarKind::Int => text.parse().map(Value::Int).map_err(|_| invalid()),
            ScalarKind::Double => text.parse().map(Value::Double).map_err(|_| invalid()),
            ScalarKind::String => Ok(Value::String(text.to_string())),
            ScalarKind::Enum(literals) => literals
                .iter()
                .find(|literal| **literal == text)
                .map(|literal| Value::Enum(*literal))
                .ok_or_else(invalid),
            ScalarKind::Ints => text
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<_, _>>()
                .map(Value::Ints)
                .map_err(|_| invalid()),
            ScalarKind::Doubles => text
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<_, _>>()
                .map(Value::Doubles)
                .map_err(|_| invalid()),
            ScalarKind::Strings => Ok(Value::Strings(
                text.split_whitespace().map(str::to_string).collect(),
            )),
        }
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_converts_to_none() {
        assert_eq!(Option::<String>::from_value(Value::Null).unwrap(), None);
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3_i64)), Value::Int(3));
    }

    #[test]
    fn wrong_type_is_a_mismatch() {
        let err = i64::from_value(Value::String("3".into())).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                expected: "integer",
                found: "string"
            }
        );
    }

    #[test]
    fn lists_are_space_separated() {
        assert_eq!(
            Value::Doubles(vec![52.5, 10.0]).to_text().as_deref(),
            Some("52.5 10")
        );
        assert_eq!(Value::Object(NodeId::new(0, 0)).to_text(), None);
    }

    #[test]
    fn parses_text_forms() {
        let boolean = ValueType::new(ScalarKind::Bool);
        assert_eq!(boolean.parse("current", "1").unwrap(), Value::Bool(true));
        assert!(boolean.parse("current", "yes").is_err());

        let literals: &'static [&'static str] = &["onLoad", "onRequest"];
        let actuate = ValueType::new(ScalarKind::Enum(literals));
        assert_eq!(
            actuate.parse("actuate", "onRequest").unwrap(),
            Value::Enum("onRequest")
        );

        let dimension = ValueType::new(ScalarKind::Int).nullable();
        assert_eq!(dimension.parse("dimension", "").unwrap(), Value::Null);
        assert_eq!(dimension.parse("dimension", " 2 ").unwrap(), Value::Int(2));

        let doubles = ValueType::new(ScalarKind::Doubles);
        assert_eq!(
            doubles.parse("pos", "-90 180.5").unwrap(),
            Value::Doubles(vec![-90.0, 180.5])
        );
    }
}
