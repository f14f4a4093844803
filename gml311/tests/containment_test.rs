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

use gml311::error::Error;
use gml311::group::Entry;
use gml311::model::{Model, NotificationKind};
use gml311::object::SchemaObject;
use gml311::types::wmts::{ContentsType, LayerType};
use gml311::types::{
    AbstractMetaDataType, CoordType, DirectPositionType, GenericMetaDataType, GridEnvelopeType,
    GridLimitsType, GridType, LineStringType, PointType, RectifiedGridType,
};
use gml311::value::Value;

#[test]
fn grid_envelope_limits() {
    let mut model = Model::new();
    let envelope = model.create::<GridEnvelopeType>();
    model.assign(envelope, GridEnvelopeType::LOW, vec![0, 0]).unwrap();
    model.assign(envelope, GridEnvelopeType::HIGH, vec![10, 10]).unwrap();

    let object = model.object_as::<GridEnvelopeType>(envelope).unwrap();
    assert_eq!(object.low.get(), &vec![0, 0]);
    assert_eq!(object.high.get(), &vec![10, 10]);
    assert!(model.is_set(envelope, GridEnvelopeType::LOW).unwrap());
    assert!(model.is_set(envelope, GridEnvelopeType::HIGH).unwrap());
    assert_eq!(
        model.get(envelope, GridEnvelopeType::LOW).unwrap(),
        Value::Ints(object.low.get().clone())
    );
}

#[test]
fn objects_work_without_a_model() {
    let mut envelope = GridEnvelopeType::default();
    assert_eq!(envelope.low.set(vec![1, 2]), Vec::<i64>::new());
    assert_eq!(
        envelope.get(GridEnvelopeType::LOW.id()).unwrap(),
        Value::Ints(vec![1, 2])
    );

    envelope.basic_unset(GridEnvelopeType::LOW.id()).unwrap();
    assert!(!envelope.is_set(GridEnvelopeType::LOW.id()).unwrap());
}

#[test]
fn feature_map_keeps_document_order() {
    let mut model = Model::new();
    let line = model.create::<LineStringType>();
    let first = model.create::<DirectPositionType>();
    let coord = model.create::<CoordType>();
    let second = model.create::<DirectPositionType>();

    model.add(line, LineStringType::POS, first).unwrap();
    model.add(line, LineStringType::COORD, coord).unwrap();
    let changes = model.add(line, LineStringType::POS, second).unwrap();
    assert_eq!(changes[0].position, Some(1));

    let features: Vec<_> = match model.get(line, LineStringType::POINTS).unwrap() {
        Value::Entries(entries) => entries.into_iter().map(|entry| entry.feature).collect(),
        other => panic!("unexpected {other:?}"),
    };
    assert_eq!(
        features,
        vec![
            LineStringType::POS.id(),
            LineStringType::COORD.id(),
            LineStringType::POS.id(),
        ]
    );
    assert_eq!(model.value(line, LineStringType::POS).unwrap(), vec![first, second]);

    model.remove(line, LineStringType::POS, first).unwrap();
    assert_eq!(model.value(line, LineStringType::POS).unwrap(), vec![second]);
    assert_eq!(model.value(line, LineStringType::COORD).unwrap(), vec![coord]);
    assert_eq!(model.container(first).unwrap(), None);
}

#[test]
fn failed_feature_map_add_moves_nothing() {
    let mut model = Model::new();
    let owner = model.create::<LineStringType>();
    let target = model.create::<LineStringType>();
    let pos = model.create::<DirectPositionType>();
    let point = model.create::<PointType>();
    model.add(owner, LineStringType::POS, pos).unwrap();

    let entries = vec![
        Entry::new(LineStringType::POS.id(), pos),
        Entry::new(LineStringType::POS.id(), point),
    ];
    assert_eq!(
        model.add(target, LineStringType::POINTS, entries),
        Err(Error::ClassMismatch {
            expected: "DirectPositionType",
            found: "PointType",
        })
    );
    assert_eq!(model.value(owner, LineStringType::POS).unwrap(), vec![pos]);
    assert_eq!(model.container(pos).unwrap().unwrap().parent, owner);

    let entries = vec![Entry::new(LineStringType::POS.id(), pos)];
    assert_eq!(
        model.insert_at(target, LineStringType::POINTS, Some(1), entries),
        Err(Error::IndexOutOfBounds { index: 1, len: 0 })
    );
    assert_eq!(model.container(pos).unwrap().unwrap().parent, owner);
    assert_eq!(model.len(), 4);
}

#[test]
fn feature_map_replacement_keeps_members_it_names_again() {
    let mut model = Model::new();
    let line = model.create::<LineStringType>();
    let kept = model.create::<DirectPositionType>();
    let dropped = model.create::<CoordType>();
    model.add(line, LineStringType::POS, kept).unwrap();
    model.add(line, LineStringType::COORD, dropped).unwrap();

    let changes = model
        .set(
            line,
            LineStringType::POINTS,
            vec![Entry::new(LineStringType::POS.id(), kept)],
        )
        .unwrap();

    // no removal is reported for a child that stays
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, NotificationKind::Set);
    assert_eq!(model.container(kept).unwrap().unwrap().parent, line);
    assert_eq!(model.container(dropped).unwrap(), None);
    assert_eq!(model.children(line).unwrap(), vec![(LineStringType::POS.id(), kept)]);
}

#[test]
fn mixed_content_holds_text_and_children() {
    let mut model = Model::new();
    let meta = model.create::<GenericMetaDataType>();

    model
        .add(meta, AbstractMetaDataType::CONTENT, "processed by hand")
        .unwrap();
    assert_eq!(
        model.value(meta, AbstractMetaDataType::CONTENT).unwrap(),
        vec![Entry::new(
            AbstractMetaDataType::CONTENT.id(),
            "processed by hand"
        )]
    );
}

#[test]
fn moving_between_parents() {
    let mut model = Model::new();
    let source = model.create::<ContentsType>();
    let target = model.create::<ContentsType>();
    let layers = [
        model.create::<LayerType>(),
        model.create::<LayerType>(),
    ];
    model.set(source, ContentsType::LAYER, layers.to_vec()).unwrap();

    let changes = model.add(target, ContentsType::LAYER, layers[1]).unwrap();
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].kind, NotificationKind::Remove);
    assert_eq!(changes[0].notifier, source);
    assert_eq!(changes[0].position, Some(1));
    assert_eq!(changes[1].kind, NotificationKind::Add);
    assert_eq!(changes[1].notifier, target);
    assert_eq!(changes[1].position, Some(0));

    assert_eq!(model.value(source, ContentsType::LAYER).unwrap(), vec![layers[0]]);
    assert_eq!(model.value(target, ContentsType::LAYER).unwrap(), vec![layers[1]]);
}

#[test]
fn bulk_replacement_detaches_dropped_children() {
    let mut model = Model::new();
    let contents = model.create::<ContentsType>();
    let kept = model.create::<LayerType>();
    let dropped = model.create::<LayerType>();
    let added = model.create::<LayerType>();
    model
        .set(contents, ContentsType::LAYER, vec![kept, dropped])
        .unwrap();

    model
        .set(contents, ContentsType::LAYER, vec![added, kept])
        .unwrap();
    assert_eq!(
        model.value(contents, ContentsType::LAYER).unwrap(),
        vec![added, kept]
    );
    assert_eq!(model.container(dropped).unwrap(), None);
    assert_eq!(model.container(kept).unwrap().unwrap().parent, contents);
}

#[test]
fn copies_are_independent() {
    let mut model = Model::new();
    let grid = model.create::<RectifiedGridType>();
    let limits = model.create::<GridLimitsType>();
    let envelope = model.create::<GridEnvelopeType>();
    model.assign(envelope, GridEnvelopeType::HIGH, vec![255, 255]).unwrap();
    model.assign(limits, GridLimitsType::GRID_ENVELOPE, Some(envelope)).unwrap();
    model.set(grid, GridType::LIMITS, limits).unwrap();

    let copy = model.copy(grid).unwrap();
    assert!(model.equals(grid, copy).unwrap());
    assert_eq!(model.len(), 6);

    let copied_envelope = model.descendants(copy).unwrap()[1];
    assert_eq!(model.root(copied_envelope).unwrap(), copy);
    model
        .assign(copied_envelope, GridEnvelopeType::HIGH, vec![511, 511])
        .unwrap();
    assert!(!model.equals(grid, copy).unwrap());
    assert_eq!(
        model.value(envelope, GridEnvelopeType::HIGH).unwrap(),
        vec![255, 255]
    );
}

#[test]
fn deleting_a_root_drops_its_tree() {
    let mut model = Model::new();
    let grid = model.create::<RectifiedGridType>();
    let limits = model.create::<GridLimitsType>();
    model.set(grid, GridType::LIMITS, limits).unwrap();

    assert!(model.delete(grid).unwrap().is_empty());
    assert!(!model.contains(limits));
    assert!(model.is_empty());
}
