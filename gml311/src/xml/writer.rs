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

use std::collections::HashSet;

use log::trace;
use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};

use crate::error::Error;
use crate::meta::{Feature, Namespace, PropertyKind, XmlName, XmlRole};
use crate::model::{Model, NodeId};
use crate::object::SchemaObject;
use crate::value::Value;

type XmlWriter = quick_xml::Writer<Vec<u8>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriterConfig {
    /// Spaces per nesting level, or `None` for a single line.
    pub indent: Option<usize>,
    /// Whether to start with an XML declaration.
    pub declaration: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }
}

/// Writes object trees as documents.
///
/// Attributes and elements follow the feature order of each class and are
/// written only when set. Group entries keep their order. The root element
/// declares every namespace used in the tree.
#[derive(Clone, Debug, Default)]
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Writes `root` as the global element declared by its class.
    pub fn write_document(&self, model: &Model, root: NodeId) -> Result<String, Error> {
        let class = model.class(root)?;
        let local = class.element.ok_or(Error::NoElement(class.name))?;
        self.write_element(
            model,
            root,
            XmlName {
                namespace: class.namespace,
                local,
            },
        )
    }

    /// Writes `root` as the element `name`, e.g. a property type under the
    /// name of the feature holding it.
    pub fn write_element(&self, model: &Model, root: NodeId, name: XmlName) -> Result<String, Error> {
        let mut writer = match self.config.indent {
            Some(indent) => quick_xml::Writer::new_with_indent(Vec::new(), b' ', indent),
            None => quick_xml::Writer::new(Vec::new()),
        };
        if self.config.declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }

        let mut namespaces = namespaces_in_use(model, root)?;
        namespaces.insert(name.namespace);
        let declared: Vec<Namespace> = Namespace::ALL
            .into_iter()
            .filter(|namespace| namespaces.contains(namespace))
            .collect();

        write_object(&mut writer, model, root, &name.qualified(), &declared)?;
        String::from_utf8(writer.into_inner()).map_err(|e| Error::Xml(e.to_string()))
    }
}

fn write_object(
    writer: &mut XmlWriter,
    model: &Model,
    id: NodeId,
    name: &str,
    declared: &[Namespace],
) -> Result<(), Error> {
    let object = model.object(id)?;
    let features = object.class().features();
    trace!("writing {name} from {id}");

    let mut start = BytesStart::new(name);
    for namespace in declared {
        if let (Some(prefix), Some(uri)) = (namespace.prefix(), namespace.uri()) {
            start.push_attribute((format!("xmlns:{prefix}").as_str(), uri));
        }
    }

    let mut has_content = false;
    for feature in &features {
        if !object.is_set(feature.id)? {
            continue;
        }
        match (feature.meta.role, feature.meta.kind) {
            (_, PropertyKind::Member { .. }) => {}
            (XmlRole::Attribute, _) => {
                if let Some(text) = object.get(feature.id)?.to_text() {
                    start.push_attribute((feature.meta.xml.qualified().as_str(), text.as_str()));
                }
            }
            _ => has_content = true,
        }
    }

    if !has_content {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start.borrow()))?;
    for feature in &features {
        write_feature(writer, model, object, feature)?;
    }
    writer.write_event(Event::End(start.to_end()))?;
    Ok(())
}

fn write_feature(
    writer: &mut XmlWriter,
    model: &Model,
    object: &dyn SchemaObject,
    feature: &Feature,
) -> Result<(), Error> {
    let meta = feature.meta;
    if meta.role == XmlRole::Attribute
        || matches!(meta.kind, PropertyKind::Member { .. })
        || !object.is_set(feature.id)?
    {
        return Ok(());
    }

    let value = object.get(feature.id)?;
    let name = meta.xml.qualified();
    match (meta.role, meta.kind) {
        (XmlRole::Text, _) => {
            if let Some(text) = value.to_text() {
                writer.write_event(Event::Text(BytesText::new(&text)))?;
            }
        }
        (XmlRole::Repeated, _) => {
            for item in list_items(&value) {
                write_simple(writer, &name, &item)?;
            }
        }
        (_, PropertyKind::Attribute { .. }) => {
            if let Some(text) = value.to_text() {
                write_simple(writer, &name, &text)?;
            }
        }
        (_, PropertyKind::Group { .. }) => {
            let Value::Entries(entries) = value else {
                return Ok(());
            };
            let class = object.class();
            for entry in entries {
                match entry.value {
                    Value::String(text) => {
                        writer.write_event(Event::Text(BytesText::new(&text)))?;
                    }
                    Value::Object(child) => {
                        let member = class.feature(entry.feature).ok_or(Error::UnknownFeature {
                            class: class.name,
                            feature: entry.feature,
                        })?;
                        write_object(writer, model, child, &member.meta.xml.qualified(), &[])?;
                    }
                    _ => {}
                }
            }
        }
        _ => {
            for child in value.objects() {
                write_object(writer, model, child, &name, &[])?;
            }
        }
    }
    Ok(())
}

fn write_simple(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), Error> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Items of a list written one element each.
fn list_items(value: &Value) -> Vec<String> {
    match value {
        Value::Strings(items) => items.clone(),
        Value::Ints(items) => items.iter().map(ToString::to_string).collect(),
        Value::Doubles(items) => items.iter().map(ToString::to_string).collect(),
        other => other.to_text().into_iter().collect(),
    }
}

/// Namespaces of the elements and attributes set anywhere below `root`.
fn namespaces_in_use(model: &Model, root: NodeId) -> Result<HashSet<Namespace>, Error> {
    let mut used = HashSet::new();
    for id in std::iter::once(root).chain(model.descendants(root)?) {
        let object = model.object(id)?;
        let class = object.class();
        for feature in class.features() {
            if feature.meta.role == XmlRole::Text
                || matches!(feature.meta.kind, PropertyKind::Member { .. })
                || !object.is_set(feature.id)?
            {
                continue;
            }
            if let PropertyKind::Group { .. } = feature.meta.kind {
                for (member, _) in model.children(id)? {
                    if let Some(member) = class.feature(member) {
                        used.insert(member.meta.xml.namespace);
                    }
                }
            } else {
                used.insert(feature.meta.xml.namespace);
            }
        }
    }
    Ok(used)
}
