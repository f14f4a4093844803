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

//! Reading and writing GML and WMTS documents.
//!
//! Both directions work on the reflective surface only: the reader maps
//! element and attribute names to features through the class metadata and
//! assigns values through the [`Model`], the writer walks the features of
//! each object in order. Namespaces are matched by local name when reading.

use crate::error::Error;
use crate::model::{Model, NodeId};
use crate::object::Schema;

mod reader;
mod writer;

pub use reader::{Reader, ReaderConfig};
pub use writer::{Writer, WriterConfig};

/// Reads a document with the default configuration and returns its root.
///
/// # Examples
///
/// ```
/// use gml311::model::Model;
/// use gml311::types::wmts::TileMatrixType;
///
/// let xml = br#"
///   <TileMatrix xmlns="http://www.opengis.net/wmts/1.0"
///               xmlns:ows="http://www.opengis.net/ows/1.1">
///     <ows:Identifier>0</ows:Identifier>
///     <ScaleDenominator>559082264.0287178</ScaleDenominator>
///     <TopLeftCorner>-20037508.3427892 20037508.3427892</TopLeftCorner>
///     <TileWidth>256</TileWidth>
///     <TileHeight>256</TileHeight>
///     <MatrixWidth>1</MatrixWidth>
///     <MatrixHeight>1</MatrixHeight>
///   </TileMatrix>"#;
///
/// let mut model = Model::new();
/// let matrix = gml311::xml::read_document(&mut model, xml).unwrap();
///
/// let width: i64 = model.value(matrix, TileMatrixType::TILE_WIDTH).unwrap();
/// assert_eq!(width, 256);
/// ```
pub fn read_document(model: &mut Model, data: &[u8]) -> Result<NodeId, Error> {
    Reader::default().read_document(model, data)
}

/// Reads a document whose root must be a `T`.
pub fn read_as<T: Schema>(model: &mut Model, data: &[u8]) -> Result<NodeId, Error> {
    Reader::default().read_as::<T>(model, data)
}

/// Writes the tree below `root` with the default configuration.
pub fn write_document(model: &Model, root: NodeId) -> Result<String, Error> {
    Writer::default().write_document(model, root)
}
