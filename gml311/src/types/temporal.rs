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

//! Temporal types and time slices.

use gml311_derive::SchemaObject;

use crate::group::Choice;
use crate::property::{Attribute, Containment, Member, Unsettable};
use crate::types::basic::{AbstractGmlType, AssociationAttributes, StringOrRefType};

const ISO_8601: &str = "#ISO-8601";

xml_enum! {
    /// Position of a time relative to a reference point.
    pub enum TimeIndeterminateValueType {
        After = "after",
        Before = "before",
        Now = "now",
        Unknown = "unknown",
    }
}

/// A time position in the reference frame named by `frame`.
#[derive(Clone, Debug, SchemaObject)]
pub struct TimePositionType {
    #[gml(text)]
    pub value: Attribute<String>,
    #[gml(attribute)]
    pub frame: Unsettable<String>,
    #[gml(attribute)]
    pub calendar_era_name: Attribute<Option<String>>,
    #[gml(attribute)]
    pub indeterminate_position: Unsettable<TimeIndeterminateValueType>,
}

impl Default for TimePositionType {
    fn default() -> Self {
        Self {
            value: Attribute::default(),
            frame: Unsettable::with_default(ISO_8601.to_string()),
            calendar_era_name: Attribute::default(),
            indeterminate_position: Unsettable::default(),
        }
    }
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "_TimeObject", abstract)]
pub struct AbstractTimeObjectType {
    #[gml(base)]
    pub gml: AbstractGmlType,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "_TimePrimitive", abstract)]
pub struct AbstractTimePrimitiveType {
    #[gml(base)]
    pub object: AbstractTimeObjectType,
}

#[derive(Clone, Debug, SchemaObject)]
#[gml(element = "_TimeGeometricPrimitive", abstract)]
pub struct AbstractTimeGeometricPrimitiveType {
    #[gml(base)]
    pub primitive: AbstractTimePrimitiveType,
    #[gml(attribute)]
    pub frame: Unsettable<String>,
}

impl Default for AbstractTimeGeometricPrimitiveType {
    fn default() -> Self {
        Self {
            primitive: AbstractTimePrimitiveType::default(),
            frame: Unsettable::with_default(ISO_8601.to_string()),
        }
    }
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "TimeInstant")]
pub struct TimeInstantType {
    #[gml(base)]
    pub primitive: AbstractTimeGeometricPrimitiveType,
    pub time_position: Containment<TimePositionType>,
}

/// A duration as a number of units, `value * factor^-radix` units.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct TimeIntervalLengthType {
    #[gml(text)]
    pub value: Attribute<f64>,
    #[gml(attribute)]
    pub unit: Attribute<String>,
    #[gml(attribute)]
    pub radix: Attribute<Option<i64>>,
    #[gml(attribute)]
    pub factor: Attribute<Option<i64>>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "TimePeriod")]
pub struct TimePeriodType {
    #[gml(base)]
    pub primitive: AbstractTimeGeometricPrimitiveType,
    pub begin_position: Containment<TimePositionType>,
    pub end_position: Containment<TimePositionType>,
    pub duration: Attribute<Option<String>>,
    pub time_interval: Containment<TimeIntervalLengthType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct TimePrimitivePropertyType {
    #[gml(base)]
    pub association: AssociationAttributes,
    pub time_group: Choice,
    #[gml(group = time_group, element = "_TimePrimitive")]
    pub time_primitive: Member<AbstractTimePrimitiveType>,
    #[gml(group = time_group, substitutes = time_primitive, element = "TimeInstant")]
    pub time_instant: Member<TimeInstantType>,
    #[gml(group = time_group, substitutes = time_primitive, element = "TimePeriod")]
    pub time_period: Member<TimePeriodType>,
}

/// State of a dynamic feature during its valid time.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "_TimeSlice", abstract)]
pub struct AbstractTimeSliceType {
    #[gml(base)]
    pub gml: AbstractGmlType,
    pub valid_time: Containment<TimePrimitivePropertyType>,
    pub data_source: Containment<StringOrRefType>,
}
