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

use gml311::model::Model;
use gml311::types::wmts::{
    CapabilitiesType, ContentsType, GetTileType, LayerType, ResourceTypeType, TileMatrixSetType,
    TileMatrixType, UrlTemplateType,
};
use gml311::types::{
    ows, AbstractFeatureCollectionType, AbstractFeatureType, BoundingShapeType,
    DirectPositionType, DynamicFeatureType, EnvelopeType, FeaturePropertyType,
    GeometryPropertyType, HistoryPropertyType, MeasureType, MovingObjectStatusType, PointType,
};
use gml311::xml::{self, Reader, ReaderConfig, Writer, WriterConfig};
use gml311::Error;

const CAPABILITIES: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<Capabilities xmlns="http://www.opengis.net/wmts/1.0"
    xmlns:ows="http://www.opengis.net/ows/1.1"
    xmlns:xlink="http://www.w3.org/1999/xlink"
    version="1.0.0">
  <ows:ServiceIdentification>
    <ows:Title>Example tiles</ows:Title>
    <ows:ServiceType>OGC WMTS</ows:ServiceType>
  </ows:ServiceIdentification>
  <Contents>
    <Layer>
      <ows:Title xml:lang="en">Terrain</ows:Title>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>-180 -85.051129</ows:LowerCorner>
        <ows:UpperCorner>180 85.051129</ows:UpperCorner>
      </ows:WGS84BoundingBox>
      <ows:Identifier>terrain</ows:Identifier>
      <Style isDefault="true">
        <ows:Identifier>default</ows:Identifier>
      </Style>
      <Format>image/png</Format>
      <Format>image/jpeg</Format>
      <TileMatrixSetLink>
        <TileMatrixSet>GoogleMapsCompatible</TileMatrixSet>
      </TileMatrixSetLink>
      <ResourceURL format="image/png" resourceType="tile"
          template="https://tiles.example/terrain/{TileMatrix}/{TileRow}/{TileCol}.png"/>
    </Layer>
    <TileMatrixSet>
      <ows:Identifier>GoogleMapsCompatible</ows:Identifier>
      <ows:SupportedCRS>urn:ogc:def:crs:EPSG::3857</ows:SupportedCRS>
      <WellKnownScaleSet>urn:ogc:def:wkss:OGC:1.0:GoogleMapsCompatible</WellKnownScaleSet>
      <TileMatrix>
        <ows:Identifier>0</ows:Identifier>
        <ScaleDenominator>559082264.0287178</ScaleDenominator>
        <TopLeftCorner>-20037508.3427892 20037508.3427892</TopLeftCorner>
        <TileWidth>256</TileWidth>
        <TileHeight>256</TileHeight>
        <MatrixWidth>1</MatrixWidth>
        <MatrixHeight>1</MatrixHeight>
      </TileMatrix>
      <TileMatrix>
        <ows:Identifier>1</ows:Identifier>
        <ScaleDenominator>279541132.0143589</ScaleDenominator>
        <TopLeftCorner>-20037508.3427892 20037508.3427892</TopLeftCorner>
        <TileWidth>256</TileWidth>
        <TileHeight>256</TileHeight>
        <MatrixWidth>2</MatrixWidth>
        <MatrixHeight>2</MatrixHeight>
      </TileMatrix>
    </TileMatrixSet>
  </Contents>
  <ServiceMetadataURL xlink:href="https://tiles.example/1.0.0/WMTSCapabilities.xml"/>
</Capabilities>
"#;

const VESSEL_TRACK: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<gml:FeatureCollection xmlns:gml="http://www.opengis.net/gml" gml:id="fc1">
  <gml:boundedBy>
    <gml:Envelope srsName="urn:ogc:def:crs:EPSG::4326">
      <gml:lowerCorner>53.5 8.1</gml:lowerCorner>
      <gml:upperCorner>54.2 9.0</gml:upperCorner>
    </gml:Envelope>
  </gml:boundedBy>
  <gml:featureMember>
    <gml:DynamicFeature gml:id="vessel">
      <gml:name codeSpace="urn:mrn:imo">9074729</gml:name>
      <gml:validTime>
        <gml:TimePeriod gml:id="voyage">
          <gml:beginPosition>2026-03-01T06:00:00Z</gml:beginPosition>
          <gml:endPosition indeterminatePosition="now"/>
        </gml:TimePeriod>
      </gml:validTime>
      <gml:history>
        <gml:MovingObjectStatus>
          <gml:validTime>
            <gml:TimeInstant>
              <gml:timePosition>2026-03-01T06:00:00Z</gml:timePosition>
            </gml:TimeInstant>
          </gml:validTime>
          <gml:position>
            <gml:Point>
              <gml:pos>53.54 8.58</gml:pos>
            </gml:Point>
          </gml:position>
          <gml:speed uom="kn">0</gml:speed>
        </gml:MovingObjectStatus>
        <gml:MovingObjectStatus>
          <gml:validTime>
            <gml:TimeInstant>
              <gml:timePosition>2026-03-01T07:00:00Z</gml:timePosition>
            </gml:TimeInstant>
          </gml:validTime>
          <gml:position>
            <gml:Point>
              <gml:pos>53.87 8.7</gml:pos>
            </gml:Point>
          </gml:position>
          <gml:speed uom="kn">12.5</gml:speed>
        </gml:MovingObjectStatus>
      </gml:history>
    </gml:DynamicFeature>
  </gml:featureMember>
</gml:FeatureCollection>
"#;

#[test]
fn read_wmts_capabilities() {
    let mut model = Model::new();
    let capabilities = xml::read_as::<CapabilitiesType>(&mut model, CAPABILITIES).unwrap();
    assert_eq!(
        model.value(capabilities, CapabilitiesType::VERSION).unwrap(),
        "1.0.0"
    );

    let contents = model
        .value(capabilities, CapabilitiesType::CONTENTS)
        .unwrap()
        .expect("contents should be read");
    let layers = model.value(contents, ContentsType::LAYER).unwrap();
    assert_eq!(layers.len(), 1);

    let layer = layers[0];
    assert_eq!(
        model.value(layer, LayerType::FORMAT).unwrap(),
        vec!["image/png".to_string(), "image/jpeg".to_string()]
    );
    let identifier = model.value(layer, LayerType::IDENTIFIER).unwrap().unwrap();
    assert_eq!(model.value(identifier, ows::CodeType::VALUE).unwrap(), "terrain");

    let templates = model.value(layer, LayerType::RESOURCE_URL).unwrap();
    assert_eq!(
        model.value(templates[0], UrlTemplateType::RESOURCE_TYPE).unwrap(),
        ResourceTypeType::Tile
    );
    assert!(model.is_set(templates[0], UrlTemplateType::RESOURCE_TYPE).unwrap());

    let sets = model.value(contents, ContentsType::TILE_MATRIX_SET).unwrap();
    let matrices = model.value(sets[0], TileMatrixSetType::TILE_MATRIX).unwrap();
    assert_eq!(matrices.len(), 2);
    assert_eq!(
        model.value(matrices[1], TileMatrixType::SCALE_DENOMINATOR).unwrap(),
        279541132.0143589
    );
    assert_eq!(
        model.value(matrices[1], TileMatrixType::TOP_LEFT_CORNER).unwrap(),
        vec![-20037508.3427892, 20037508.3427892]
    );
}

#[test]
fn wmts_capabilities_round_trip() {
    let mut model = Model::new();
    let original = xml::read_document(&mut model, CAPABILITIES).unwrap();

    let written = xml::write_document(&model, original).unwrap();
    assert!(written.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(written.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
    assert!(written.contains("<wmts:Format>image/jpeg</wmts:Format>"));

    let reread = xml::read_document(&mut model, written.as_bytes()).unwrap();
    assert!(model.equals(original, reread).unwrap());
}

#[test]
fn read_dynamic_features() {
    let mut model = Model::new();
    let collection = xml::read_document(&mut model, VESSEL_TRACK).unwrap();
    assert_eq!(model.class(collection).unwrap().name, "FeatureCollectionType");

    let shape = model
        .value(collection, AbstractFeatureType::BOUNDED_BY)
        .unwrap()
        .unwrap();
    let envelope = model.value(shape, BoundingShapeType::ENVELOPE).unwrap().unwrap();
    assert_eq!(
        model.value(envelope, EnvelopeType::SRS_NAME).unwrap().as_deref(),
        Some("urn:ogc:def:crs:EPSG::4326")
    );

    let members = model
        .value(collection, AbstractFeatureCollectionType::FEATURE_MEMBER)
        .unwrap();
    let vessel = model
        .value(members[0], FeaturePropertyType::FEATURE)
        .unwrap()
        .unwrap();
    assert_eq!(model.class(vessel).unwrap().name, "DynamicFeatureType");

    let history = model
        .value(vessel, DynamicFeatureType::HISTORY)
        .unwrap()
        .unwrap();
    let slices = model.value(history, HistoryPropertyType::TIME_SLICE).unwrap();
    assert_eq!(slices.len(), 2);

    let speed = model
        .value(slices[1], MovingObjectStatusType::SPEED)
        .unwrap()
        .unwrap();
    assert_eq!(model.value(speed, MeasureType::VALUE).unwrap(), 12.5);
    assert_eq!(model.value(speed, MeasureType::UOM).unwrap(), "kn");

    let position = model
        .value(slices[1], MovingObjectStatusType::POSITION)
        .unwrap()
        .unwrap();
    let point = model
        .value(position, GeometryPropertyType::GEOMETRY)
        .unwrap()
        .unwrap();
    let pos = model.value(point, PointType::POS).unwrap().unwrap();
    assert_eq!(
        model.value(pos, DirectPositionType::VALUE).unwrap(),
        vec![53.87, 8.7]
    );
}

#[test]
fn dynamic_features_round_trip() {
    let mut model = Model::new();
    let original = xml::read_document(&mut model, VESSEL_TRACK).unwrap();

    let written = Writer::new(WriterConfig {
        indent: None,
        declaration: false,
    })
    .write_document(&model, original)
    .unwrap();
    assert!(written.starts_with("<gml:FeatureCollection"));
    assert!(written.contains(r#"<gml:endPosition indeterminatePosition="now"/>"#));
    assert!(!written.contains("xmlns:xlink"));

    let reread = xml::read_document(&mut model, written.as_bytes()).unwrap();
    assert!(model.equals(original, reread).unwrap());
}

#[test]
fn defaults_written_explicitly_stay_set() {
    let mut model = Model::new();
    let request = model.create::<GetTileType>();
    model
        .assign(request, GetTileType::SERVICE, "WMTS".to_string())
        .unwrap();
    model
        .assign(request, GetTileType::LAYER, "terrain".to_string())
        .unwrap();

    let written = xml::write_document(&model, request).unwrap();
    assert!(written.contains(r#"service="WMTS""#));
    assert!(!written.contains(r#"version="1.0.0""#));

    let reread = xml::read_document(&mut model, written.as_bytes()).unwrap();
    assert!(model.is_set(reread, GetTileType::SERVICE).unwrap());
    assert!(!model.is_set(reread, GetTileType::VERSION).unwrap());
    assert!(model.equals(request, reread).unwrap());
}

#[test]
fn strict_reading_rejects_unknown_elements() {
    let mut model = Model::new();
    let strict = Reader::new(ReaderConfig { strict: true });

    assert_eq!(
        strict.read_document(&mut model, CAPABILITIES),
        Err(Error::UnknownElement("ows:ServiceIdentification".to_string()))
    );
    assert!(model.is_empty());
}

#[test]
fn reading_restores_change_reporting() {
    let mut model = Model::new();
    xml::read_document(&mut model, VESSEL_TRACK).unwrap();
    assert!(model.deliver());
}
