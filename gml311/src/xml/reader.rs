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

use log::{debug, warn};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::PrefixDeclaration;

use crate::error::Error;
use crate::meta::{Class, Feature, FeatureId, Namespace, PropertyKind, XmlRole};
use crate::model::{Model, NodeId};
use crate::object::Schema;
use crate::package;
use crate::value::Value;

type XmlReader<'a> = quick_xml::Reader<&'a [u8]>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Fail on elements that map to no feature instead of skipping them.
    pub strict: bool,
}

/// Reads documents into a [`Model`].
///
/// Objects are built with change reporting turned off; the model's setting
/// is restored afterwards. If reading fails, the objects created so far are
/// deleted again.
///
/// # Examples
///
/// ```
/// use gml311::model::Model;
/// use gml311::types::PointType;
/// use gml311::xml::{Reader, ReaderConfig};
/// use gml311::Error;
///
/// let xml = br#"<gml:Point xmlns:gml="http://www.opengis.net/gml">
///     <gml:pos>52.5 13.4</gml:pos>
///     <gml:velocity>12</gml:velocity>
///   </gml:Point>"#;
///
/// let mut model = Model::new();
/// assert!(Reader::default().read_as::<PointType>(&mut model, xml).is_ok());
///
/// let strict = Reader::new(ReaderConfig { strict: true });
/// assert_eq!(
///     strict.read_as::<PointType>(&mut model, xml),
///     Err(Error::UnknownElement("gml:velocity".to_string()))
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Reader {
    config: ReaderConfig,
}

impl Reader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Reads a document, resolving the class from the root element.
    pub fn read_document(&self, model: &mut Model, data: &[u8]) -> Result<NodeId, Error> {
        self.read(model, data, None)
    }

    /// Reads a document into a `T`, whatever the root element is called.
    pub fn read_as<T: Schema>(&self, model: &mut Model, data: &[u8]) -> Result<NodeId, Error> {
        self.read(model, data, Some(T::CLASS))
    }

    fn read(
        &self,
        model: &mut Model,
        data: &[u8],
        class: Option<&'static Class>,
    ) -> Result<NodeId, Error> {
        let mut xml = quick_xml::Reader::from_reader(data);
        xml.config_mut().trim_text(true);

        let deliver = model.set_deliver(false);
        let result = self.read_root(model, &mut xml, class);
        model.set_deliver(deliver);
        result
    }

    fn read_root(
        &self,
        model: &mut Model,
        xml: &mut XmlReader<'_>,
        class: Option<&'static Class>,
    ) -> Result<NodeId, Error> {
        loop {
            let (start, empty) = match xml.read_event()? {
                Event::Start(e) => (e, false),
                Event::Empty(e) => (e, true),
                Event::Eof => return Err(Error::MissingRoot),
                _ => continue,
            };

            let class = match class {
                Some(class) => class,
                None => root_class(&start)?,
            };
            debug!("reading {} document", class.qualified_name());
            return self.read_object(model, xml, class, &start, empty);
        }
    }

    /// Creates an object of `class` from the element `start`.
    fn read_object(
        &self,
        model: &mut Model,
        xml: &mut XmlReader<'_>,
        class: &'static Class,
        start: &BytesStart<'_>,
        empty: bool,
    ) -> Result<NodeId, Error> {
        let id = model.instantiate(class)?;
        let result = self.read_attributes(model, id, start).and_then(|()| {
            if empty {
                Ok(())
            } else {
                self.read_content(model, xml, id)
            }
        });

        match result {
            Ok(()) => Ok(id),
            Err(error) => Err(discard(model, id, error)),
        }
    }

    fn read_attributes(
        &self,
        model: &mut Model,
        id: NodeId,
        start: &BytesStart<'_>,
    ) -> Result<(), Error> {
        let class = model.class(id)?;
        for attr in start.attributes() {
            let attr = attr?;
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }

            let local = std::str::from_utf8(attr.key.local_name().into_inner())?;
            let Some(feature) = class.attribute_feature(local) else {
                debug!("skipping attribute {local} of {}", class.name);
                continue;
            };
            let value = parse_value(&feature, &attr.unescape_value()?)?;
            model.set(id, feature.id, value)?;
        }
        Ok(())
    }

    fn read_content(
        &self,
        model: &mut Model,
        xml: &mut XmlReader<'_>,
        id: NodeId,
    ) -> Result<(), Error> {
        let class = model.class(id)?;
        loop {
            match xml.read_event()? {
                Event::Start(e) => self.read_child(model, xml, id, class, &e, false)?,
                Event::Empty(e) => self.read_child(model, xml, id, class, &e, true)?,
                Event::Text(e) => read_text(model, id, class, &e.unescape()?)?,
                Event::CData(e) => {
                    read_text(model, id, class, std::str::from_utf8(&e.into_inner())?)?
                }
                Event::End(_) => return Ok(()),
                Event::Eof => return Err(unexpected_eof()),
                _ => {}
            }
        }
    }

    fn read_child(
        &self,
        model: &mut Model,
        xml: &mut XmlReader<'_>,
        id: NodeId,
        class: &'static Class,
        start: &BytesStart<'_>,
        empty: bool,
    ) -> Result<(), Error> {
        let local = std::str::from_utf8(start.local_name().into_inner())?;
        let Some(feature) = class.element_feature(local) else {
            if self.config.strict {
                let name = String::from_utf8_lossy(start.name().into_inner()).into_owned();
                return Err(Error::UnknownElement(name));
            }
            debug!("skipping element {local} in {}", class.name);
            if !empty {
                xml.read_to_end(start.name())?;
            }
            return Ok(());
        };

        if let PropertyKind::Attribute { .. } = feature.meta.kind {
            let text = if empty {
                String::new()
            } else {
                read_simple_content(xml)?
            };
            let value = match feature.meta.role {
                XmlRole::Repeated => append_item(model.get(id, feature.id)?, &feature, &text)?,
                _ => parse_value(&feature, &text)?,
            };
            model.set(id, feature.id, value)?;
            return Ok(());
        }

        let Some(target) = feature.meta.target() else {
            return Err(Error::UnknownElement(local.to_string()));
        };
        let child = self.read_object(model, xml, target, start, empty)?;
        if feature.kind().is_many() {
            return match model.add(id, feature.id, child) {
                Ok(_) => Ok(()),
                Err(error) => Err(discard(model, child, error)),
            };
        }

        let before = model.children(id)?;
        match model.set(id, feature.id, child) {
            Ok(_) => drop_replaced(model, id, &before),
            Err(error) => Err(discard(model, child, error)),
        }
    }
}

/// Deletes children of `id` that a repeated single element pushed out.
fn drop_replaced(
    model: &mut Model,
    id: NodeId,
    before: &[(FeatureId, NodeId)],
) -> Result<(), Error> {
    for (_, child) in before {
        if model.container(*child)?.map(|container| container.parent) != Some(id) {
            debug!("dropping replaced {child} of {id}");
            model.delete(*child)?;
        }
    }
    Ok(())
}

/// Resolves the class of the root element from its namespace binding.
fn root_class(start: &BytesStart<'_>) -> Result<&'static Class, Error> {
    let local = std::str::from_utf8(start.local_name().into_inner())?;
    let found = match root_namespace(start)? {
        Some(namespace) => package::element_class(namespace, local),
        None => None,
    };

    found
        .or_else(|| {
            package::CLASSES
                .iter()
                .copied()
                .find(|class| class.element == Some(local))
        })
        .ok_or_else(|| Error::UnknownElement(local.to_string()))
}

fn root_namespace(start: &BytesStart<'_>) -> Result<Option<Namespace>, Error> {
    let name = start.name();
    let prefix = name.prefix().map(|prefix| prefix.into_inner());

    for attr in start.attributes() {
        let attr = attr?;
        let binds = match attr.key.as_namespace_binding() {
            Some(PrefixDeclaration::Default) => prefix.is_none(),
            Some(PrefixDeclaration::Named(declared)) => prefix == Some(declared),
            None => false,
        };
        if binds {
            if let Some(namespace) = Namespace::from_uri(&attr.unescape_value()?) {
                return Ok(Some(namespace));
            }
        }
    }

    Ok(prefix
        .and_then(|prefix| std::str::from_utf8(prefix).ok())
        .and_then(Namespace::from_prefix))
}

fn read_text(model: &mut Model, id: NodeId, class: &Class, text: &str) -> Result<(), Error> {
    if let Some(feature) = class.text_feature() {
        let value = parse_value(&feature, text)?;
        model.set(id, feature.id, value)?;
    } else if let Some(feature) = class.mixed_feature() {
        model.add(id, feature.id, text)?;
    } else {
        warn!("ignoring text content of {}", class.name);
    }
    Ok(())
}

/// Collects the text of a simple element up to its end tag.
fn read_simple_content(xml: &mut XmlReader<'_>) -> Result<String, Error> {
    let mut text = String::new();
    let mut depth = 0_usize;
    loop {
        match xml.read_event()? {
            Event::Text(e) if depth == 0 => text.push_str(&e.unescape()?),
            Event::CData(e) if depth == 0 => text.push_str(std::str::from_utf8(&e.into_inner())?),
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Ok(text),
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(unexpected_eof()),
            _ => {}
        }
    }
}

fn parse_value(feature: &Feature, text: &str) -> Result<Value, Error> {
    match feature.meta.value_type {
        Some(value_type) => value_type.parse(feature.meta.name, text),
        None => Err(Error::TypeMismatch {
            expected: "object",
            found: "string",
        }),
    }
}

/// Adds one item of a repeated element to the list read so far.
fn append_item(current: Value, feature: &Feature, text: &str) -> Result<Value, Error> {
    let text = text.trim();
    let invalid = || Error::InvalidValue {
        field: feature.meta.name,
        value: text.to_string(),
    };

    match current {
        Value::Strings(mut items) => {
            items.push(text.to_string());
            Ok(Value::Strings(items))
        }
        Value::Ints(mut items) => {
            items.push(text.parse().map_err(|_| invalid())?);
            Ok(Value::Ints(items))
        }
        Value::Doubles(mut items) => {
            items.push(text.parse().map_err(|_| invalid())?);
            Ok(Value::Doubles(items))
        }
        _ => parse_value(feature, text),
    }
}

fn unexpected_eof() -> Error {
    Error::Xml("unexpected end of document".to_string())
}

/// Drops a partially read object and passes the error on.
fn discard(model: &mut Model, id: NodeId, error: Error) -> Error {
    if let Err(e) = model.delete(id) {
        debug!("could not discard {id}: {e}");
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::wmts::{CapabilitiesType, ContentsType, LayerType};
    use crate::types::{
        AbstractMetaDataType, DirectPositionType, GridEnvelopeType, GridType, LineStringType,
        MetaDataPropertyType, PointType,
    };

    #[test]
    fn reads_simple_elements_and_lists() {
        let xml = br#"
          <gml:Grid xmlns:gml="http://www.opengis.net/gml" dimension="2" srsName="EPSG:4326">
            <gml:limits>
              <gml:GridEnvelope>
                <gml:low>0 0</gml:low>
                <gml:high>99 199</gml:high>
              </gml:GridEnvelope>
            </gml:limits>
            <gml:axisName>x</gml:axisName>
            <gml:axisName>y</gml:axisName>
          </gml:Grid>"#;

        let mut model = Model::new();
        let grid = Reader::default().read_document(&mut model, xml).unwrap();

        let object = model.object_as::<GridType>(grid).unwrap();
        assert_eq!(object.dimension.get(), &2);
        assert_eq!(object.axis_name.get(), &vec!["x".to_string(), "y".to_string()]);

        let limits = object.limits.get().unwrap();
        let (_, envelope) = model.children(limits).unwrap()[0];
        let high: Vec<i64> = model.value(envelope, GridEnvelopeType::HIGH).unwrap();
        assert_eq!(high, vec![99, 199]);
        assert_eq!(model.root(envelope).unwrap(), grid);
    }

    #[test]
    fn repeated_single_element_keeps_the_last() {
        let xml = br#"
          <gml:Point xmlns:gml="http://www.opengis.net/gml">
            <gml:pos>1 2</gml:pos>
            <gml:pos>3 4</gml:pos>
          </gml:Point>"#;

        let mut model = Model::new();
        let point = Reader::default().read_document(&mut model, xml).unwrap();

        assert_eq!(model.len(), 2);
        assert_eq!(model.roots(), vec![point]);
        let pos = model.value(point, PointType::POS).unwrap().unwrap();
        let value: Vec<f64> = model.value(pos, DirectPositionType::VALUE).unwrap();
        assert_eq!(value, vec![3.0, 4.0]);
    }

    #[test]
    fn default_namespace_resolves_the_root() {
        let xml = br#"
          <Capabilities xmlns="http://www.opengis.net/wmts/1.0" version="1.0.0">
            <Contents>
              <Layer><Format>image/png</Format></Layer>
            </Contents>
          </Capabilities>"#;

        let mut model = Model::new();
        let root = Reader::default().read_document(&mut model, xml).unwrap();
        assert_eq!(model.class(root).unwrap().name, "CapabilitiesType");

        let contents = model
            .value(root, CapabilitiesType::CONTENTS)
            .unwrap()
            .unwrap();
        let layers: Vec<NodeId> = model.value(contents, ContentsType::LAYER).unwrap();
        let formats: Vec<String> = model.value(layers[0], LayerType::FORMAT).unwrap();
        assert_eq!(formats, vec!["image/png".to_string()]);
    }

    #[test]
    fn interleaved_members_keep_document_order() {
        let xml = br#"
          <gml:LineString xmlns:gml="http://www.opengis.net/gml">
            <gml:pos>0 0</gml:pos>
            <gml:pointProperty xlink:href="p1" xmlns:xlink="http://www.w3.org/1999/xlink"/>
            <gml:pos>1 1</gml:pos>
          </gml:LineString>"#;

        let mut model = Model::new();
        let line = Reader::default().read_document(&mut model, xml).unwrap();
        let children = model.children(line).unwrap();
        let features: Vec<_> = children.iter().map(|(feature, _)| *feature).collect();
        assert_eq!(
            features,
            vec![
                LineStringType::POS.id(),
                LineStringType::POINT_PROPERTY.id(),
                LineStringType::POS.id(),
            ]
        );
    }

    #[test]
    fn mixed_content_keeps_text_entries() {
        let xml = br#"
          <gml:metaDataProperty xmlns:gml="http://www.opengis.net/gml">
            <gml:GenericMetaData>created by <b>hand</b></gml:GenericMetaData>
          </gml:metaDataProperty>"#;

        let mut model = Model::new();
        let property = Reader::default()
            .read_as::<MetaDataPropertyType>(&mut model, xml)
            .unwrap();
        let meta_data = model
            .value(property, MetaDataPropertyType::GENERIC_META_DATA)
            .unwrap()
            .unwrap();
        let content = model.get(meta_data, AbstractMetaDataType::CONTENT).unwrap();
        let Value::Entries(entries) = content else {
            panic!("expected entries, found {content:?}");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, Value::from("created by"));
    }

    #[test]
    fn failed_reads_leave_no_objects_behind() {
        let xml = br#"
          <gml:Grid xmlns:gml="http://www.opengis.net/gml">
            <gml:limits><gml:GridEnvelope><gml:low>zero</gml:low></gml:GridEnvelope></gml:limits>
          </gml:Grid>"#;

        let mut model = Model::new();
        let result = Reader::default().read_document(&mut model, xml);
        assert!(matches!(result, Err(Error::InvalidValue { field: "low", .. })));
        assert!(model.is_empty());
        assert!(model.deliver());
    }

    #[test]
    fn missing_root_and_unknown_root() {
        let mut model = Model::new();
        assert_eq!(
            Reader::default().read_document(&mut model, b"<!-- nothing -->"),
            Err(Error::MissingRoot)
        );
        assert_eq!(
            Reader::default().read_document(&mut model, b"<Coverage/>"),
            Err(Error::UnknownElement("Coverage".to_string()))
        );
    }
}
