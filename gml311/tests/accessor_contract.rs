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

//! Checks the reflective accessors of every registered class.

use gml311::meta::{Class, Feature, FeatureId, PropertyKind};
use gml311::model::{Model, NodeId, NotificationKind};
use gml311::package::{self, CLASSES};
use gml311::value::{ScalarKind, Value, ValueType};
use gml311::Error;

/// A value of `value_type` that differs from `default`.
fn sample(value_type: ValueType, default: &Value) -> Option<Value> {
    let value = match (value_type.kind, default) {
        (ScalarKind::Bool, Value::Bool(b)) => Value::Bool(!b),
        (ScalarKind::Bool, _) => Value::Bool(true),
        (ScalarKind::Int, Value::Int(i)) => Value::Int(i + 1),
        (ScalarKind::Int, _) => Value::Int(7),
        (ScalarKind::Double, Value::Double(d)) => Value::Double(d + 1.5),
        (ScalarKind::Double, _) => Value::Double(2.5),
        (ScalarKind::String, Value::String(s)) => Value::String(format!("{s}sample")),
        (ScalarKind::String, _) => Value::String("sample".to_string()),
        (ScalarKind::Enum(literals), _) => literals
            .iter()
            .map(|literal| Value::Enum(*literal))
            .find(|value| value != default)?,
        (ScalarKind::Ints, _) => Value::Ints(vec![1, 2, 3]),
        (ScalarKind::Doubles, _) => Value::Doubles(vec![0.5, 1.5]),
        (ScalarKind::Strings, _) => Value::Strings(vec!["a".to_string(), "b".to_string()]),
    };
    (&value != default).then_some(value)
}

/// A concrete class that may be held by `feature`.
fn child_class(feature: &Feature) -> Option<&'static Class> {
    let target = feature.meta.target()?;
    if target.is_abstract {
        package::concrete_subclasses(target).first().copied()
    } else {
        Some(target)
    }
}

fn concrete_classes() -> impl Iterator<Item = &'static Class> {
    CLASSES.iter().copied().filter(|class| !class.is_abstract)
}

fn check_attribute(model: &mut Model, id: NodeId, feature: &Feature) {
    let value_type = feature.meta.value_type.expect("attributes have a value type");
    let default = model.get(id, feature.id).unwrap();
    assert!(!model.is_set(id, feature.id).unwrap(), "{}", feature.name());

    let Some(value) = sample(value_type, &default) else {
        return;
    };
    let changes = model.set(id, feature.id, value.clone()).unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, NotificationKind::Set);
    assert_eq!(changes[0].old, default);
    assert_eq!(changes[0].new, value);
    assert!(!changes[0].was_set);

    assert_eq!(model.get(id, feature.id).unwrap(), value, "{}", feature.name());
    assert!(model.is_set(id, feature.id).unwrap(), "{}", feature.name());

    model.unset(id, feature.id).unwrap();
    assert_eq!(model.get(id, feature.id).unwrap(), default, "{}", feature.name());
    assert!(!model.is_set(id, feature.id).unwrap(), "{}", feature.name());
}

fn check_reference(model: &mut Model, id: NodeId, feature: &Feature) {
    let Some(class) = child_class(feature) else {
        return;
    };
    let first = model.instantiate(class).unwrap();
    let second = model.instantiate(class).unwrap();

    model.set(id, feature.id, first).unwrap();
    assert_eq!(model.get(id, feature.id).unwrap(), Value::Object(first));
    assert!(model.is_set(id, feature.id).unwrap());
    assert_eq!(model.container(first).unwrap().unwrap().parent, id);

    // idempotent
    model.set(id, feature.id, first).unwrap();
    assert_eq!(model.get(id, feature.id).unwrap(), Value::Object(first));

    model.set(id, feature.id, second).unwrap();
    assert_eq!(model.get(id, feature.id).unwrap(), Value::Object(second));
    assert_eq!(model.container(first).unwrap(), None);
    assert_eq!(model.container(second).unwrap().unwrap().parent, id);

    model.set(id, feature.id, Value::Null).unwrap();
    assert_eq!(model.get(id, feature.id).unwrap(), Value::Null);
    assert!(!model.is_set(id, feature.id).unwrap());
    assert_eq!(model.container(second).unwrap(), None);
}

fn check_list(model: &mut Model, id: NodeId, feature: &Feature) {
    let Some(class) = child_class(feature) else {
        return;
    };
    let children: Vec<NodeId> = (0..3)
        .map(|_| model.instantiate(class).unwrap())
        .collect();

    for child in &children {
        model.add(id, feature.id, *child).unwrap();
    }
    assert_eq!(model.get(id, feature.id).unwrap().objects(), children);
    for child in &children {
        assert_eq!(model.container(*child).unwrap().unwrap().parent, id);
    }

    model.remove(id, feature.id, children[1]).unwrap();
    assert_eq!(
        model.get(id, feature.id).unwrap().objects(),
        vec![children[0], children[2]]
    );
    assert_eq!(model.container(children[1]).unwrap(), None);

    model.unset(id, feature.id).unwrap();
    assert!(model.get(id, feature.id).unwrap().objects().is_empty());
    assert!(!model.is_set(id, feature.id).unwrap());
    assert_eq!(model.container(children[0]).unwrap(), None);
}

#[test]
fn attributes_start_at_their_default() {
    let mut model = Model::new();
    for class in concrete_classes() {
        let id = model.instantiate(class).unwrap();
        for feature in class.features() {
            if let PropertyKind::Attribute { .. } = feature.kind() {
                check_attribute(&mut model, id, &feature);
            }
        }
    }
}

#[test]
fn references_keep_a_single_container() {
    let mut model = Model::new();
    for class in concrete_classes() {
        let id = model.instantiate(class).unwrap();
        for feature in class.features() {
            match feature.kind() {
                PropertyKind::Containment | PropertyKind::Member { many: false, .. } => {
                    check_reference(&mut model, id, &feature)
                }
                PropertyKind::ContainmentList | PropertyKind::Member { many: true, .. } => {
                    check_list(&mut model, id, &feature)
                }
                _ => {}
            }
        }
    }
}

#[test]
fn feature_ids_past_the_end_are_unknown() {
    let mut model = Model::new();
    for class in concrete_classes() {
        let id = model.instantiate(class).unwrap();
        let feature = FeatureId::new(class.feature_count());
        assert!(matches!(
            model.get(id, feature),
            Err(Error::UnknownFeature { .. })
        ));
        assert!(matches!(
            model.set(id, feature, Value::Null),
            Err(Error::UnknownFeature { .. })
        ));
    }
}

#[test]
fn abstract_classes_cannot_be_instantiated() {
    let mut model = Model::new();
    for class in CLASSES.iter().filter(|class| class.is_abstract) {
        assert_eq!(model.instantiate(class), Err(Error::AbstractClass(class.name)));
    }
    assert!(model.is_empty());
}

#[test]
fn names_round_trip_through_the_registry() {
    for class in CLASSES {
        let found = package::class_named(class.namespace, class.name).unwrap();
        assert!(found.same(class));
        for feature in class.features() {
            assert_eq!(class.feature_named(feature.name()).unwrap().id, feature.id);
        }
    }
}
