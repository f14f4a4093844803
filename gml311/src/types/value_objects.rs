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

//! Value objects: scalar values, lists, extents and composites.

use gml311_derive::SchemaObject;

use crate::group::Choice;
use crate::property::{Attribute, Containment, ContainmentList, Member, Unsettable};
use crate::types::basic::{
    AbstractGmlType, AssociationAttributes, CodeOrNullListType, CodeType, MeasureOrNullListType,
    MeasureType,
};

/// A property holding one value object.
///
/// Simple values are stored inline; composite values go through the
/// `compositeValue` group so that value arrays keep their element name.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct ValuePropertyType {
    #[gml(base)]
    pub association: AssociationAttributes,
    #[gml(element = "Boolean")]
    pub boolean: Unsettable<bool>,
    #[gml(element = "Category")]
    pub category: Containment<CodeType>,
    #[gml(element = "Quantity")]
    pub quantity: Containment<MeasureType>,
    #[gml(element = "Count")]
    pub count: Attribute<Option<i64>>,
    #[gml(element = "BooleanList")]
    pub boolean_list: Attribute<Vec<String>>,
    #[gml(element = "CategoryList")]
    pub category_list: Containment<CodeOrNullListType>,
    #[gml(element = "QuantityList")]
    pub quantity_list: Containment<MeasureOrNullListType>,
    #[gml(element = "CountList")]
    pub count_list: Attribute<Vec<String>>,
    #[gml(element = "CategoryExtent")]
    pub category_extent: Containment<CategoryExtentType>,
    #[gml(element = "QuantityExtent")]
    pub quantity_extent: Containment<QuantityExtentType>,
    #[gml(element = "CountExtent")]
    pub count_extent: Attribute<Vec<String>>,
    pub composite_value_group: Choice,
    #[gml(group = composite_value_group, element = "CompositeValue")]
    pub composite_value: Member<CompositeValueType>,
    #[gml(group = composite_value_group, substitutes = composite_value, element = "ValueArray")]
    pub value_array: Member<ValueArrayType>,
}

#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "CompositeValue")]
pub struct CompositeValueType {
    #[gml(base)]
    pub gml: AbstractGmlType,
    pub value_component: ContainmentList<ValuePropertyType>,
}

/// A composite value whose components share a code space or unit.
#[derive(Clone, Debug, Default, SchemaObject)]
#[gml(element = "ValueArray")]
pub struct ValueArrayType {
    #[gml(base)]
    pub composite: CompositeValueType,
    #[gml(attribute)]
    pub code_space: Attribute<Option<String>>,
    #[gml(attribute)]
    pub uom: Attribute<Option<String>>,
}

/// Pairs of terms bounding ranges.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct CategoryExtentType {
    #[gml(base)]
    pub list: CodeOrNullListType,
}

/// Pairs of measures bounding ranges.
#[derive(Clone, Debug, Default, SchemaObject)]
pub struct QuantityExtentType {
    #[gml(base)]
    pub list: MeasureOrNullListType,
}

#[derive(Clone, Debug, Default, SchemaObject)]
pub struct RangeParametersType {
    #[gml(base)]
    pub value: ValuePropertyType,
}
