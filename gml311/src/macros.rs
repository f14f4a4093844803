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

/// Declares a schema enumeration.
///
/// The first literal is the default. The enum gets its literal table, text
/// conversions and the conversions to and from [`Value`].
///
/// [`Value`]: crate::value::Value
///
/// ```
/// use gml311::xml_enum;
///
/// xml_enum! {
///     /// Orientation of a curve.
///     pub enum Sign {
///         Positive = "+",
///         Negative = "-",
///     }
/// }
///
/// assert_eq!(Sign::default(), Sign::Positive);
/// assert_eq!("-".parse::<Sign>().unwrap(), Sign::Negative);
/// assert_eq!(Sign::Negative.to_string(), "-");
/// ```
#[macro_export]
macro_rules! xml_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const LITERALS: &'static [&'static str] = &[$($literal),+];

            pub const fn literal(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }

            pub fn from_literal(literal: &str) -> Option<Self> {
                match literal {
                    $($literal => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.literal())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_literal(s).ok_or_else(|| $crate::Error::InvalidValue {
                    field: stringify!($name),
                    value: s.to_string(),
                })
            }
        }

        impl From<$name> for $crate::value::Value {
            fn from(value: $name) -> Self {
                $crate::value::Value::Enum(value.literal())
            }
        }

        impl $crate::value::FromValue for $name {
            fn from_value(value: $crate::value::Value) -> Result<Self, $crate::Error> {
                let literal = match &value {
                    $crate::value::Value::Enum(literal) => Some(*literal),
                    $crate::value::Value::String(literal) => Some(literal.as_str()),
                    _ => None,
                };
                literal
                    .and_then(Self::from_literal)
                    .ok_or($crate::Error::TypeMismatch {
                        expected: stringify!($name),
                        found: value.type_name(),
                    })
            }
        }

        impl $crate::property::Scalar for $name {
            const VALUE_TYPE: $crate::value::ValueType =
                $crate::value::ValueType::new($crate::value::ScalarKind::Enum(Self::LITERALS));
        }
    };
}
