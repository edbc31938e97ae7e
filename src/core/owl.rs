use chrono::Utc;
use flate2::read::GzDecoder;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::model::{BiopaxModel, EntityRef};
use crate::utils::error::Result;

/// Builds a model from the string content of a BioPAX OWL document.
pub fn model_from_owl_str(owl: &str) -> Result<BiopaxModel> {
    let (level, entities) = scan_entities(owl)?;
    tracing::debug!(
        "Scanned OWL document: {} entities, level {:?}",
        entities.len(),
        level
    );
    Ok(BiopaxModel {
        owl: owl.to_string(),
        level,
        entities,
        retrieved_at: Utc::now(),
    })
}

/// Builds a model from a BioPAX OWL file on disk.
pub fn model_from_owl_file(path: impl AsRef<Path>) -> Result<BiopaxModel> {
    let owl = std::fs::read_to_string(path.as_ref())?;
    model_from_owl_str(&owl)
}

/// Builds a model from a gzipped BioPAX OWL file.
pub fn model_from_owl_gz(path: impl AsRef<Path>) -> Result<BiopaxModel> {
    let file = File::open(path.as_ref())?;
    let mut decoder = GzDecoder::new(file);
    let mut owl = String::new();
    decoder.read_to_string(&mut owl)?;
    model_from_owl_str(&owl)
}

/// Flat scan over the document: BioPAX level from the bp namespace on the
/// root, one EntityRef per direct child of rdf:RDF that carries an rdf:about
/// or rdf:ID. No ontology walking happens here.
fn scan_entities(owl: &str) -> Result<(Option<String>, Vec<EntityRef>)> {
    let mut reader = Reader::from_str(owl);
    reader.config_mut().trim_text(true);

    let mut level = None;
    let mut entities = Vec::new();
    let mut current: Option<EntityRef> = None;
    let mut in_display_name = false;
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                if depth == 0 {
                    level = scan_level(e)?;
                } else if depth == 1 {
                    current = entity_from_element(e)?;
                } else if depth == 2 && current.is_some() {
                    in_display_name = e.name().as_ref() == b"bp:displayName";
                }
                depth += 1;
            }
            Event::Empty(ref e) => {
                if depth == 1 {
                    if let Some(entity) = entity_from_element(e)? {
                        entities.push(entity);
                    }
                }
            }
            Event::Text(ref t) => {
                if in_display_name {
                    if let Some(ref mut entity) = current {
                        if entity.display_name.is_none() {
                            entity.display_name = Some(t.unescape()?.to_string());
                        }
                    }
                }
            }
            Event::End(_) => {
                depth -= 1;
                if depth == 2 {
                    in_display_name = false;
                } else if depth == 1 {
                    if let Some(entity) = current.take() {
                        entities.push(entity);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok((level, entities))
}

fn scan_level(e: &quick_xml::events::BytesStart) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"xmlns:bp" {
            let ns = attr.unescape_value()?;
            let level = if ns.contains("level3") {
                Some("L3".to_string())
            } else if ns.contains("level2") {
                Some("L2".to_string())
            } else if ns.contains("level1") {
                Some("L1".to_string())
            } else {
                None
            };
            return Ok(level);
        }
    }
    Ok(None)
}

/// A BioPAX entity element is bp-prefixed and identified by rdf:about or
/// rdf:ID. Anything else at the top level (e.g. owl:Ontology) is skipped.
fn entity_from_element(e: &quick_xml::events::BytesStart) -> Result<Option<EntityRef>> {
    let name = e.name();
    let class_name = match name.as_ref().strip_prefix(b"bp:") {
        Some(local) => String::from_utf8_lossy(local).to_string(),
        None => return Ok(None),
    };

    let mut uri = None;
    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"rdf:about" | b"rdf:ID" => {
                uri = Some(attr.unescape_value()?.to_string());
            }
            _ => {}
        }
    }

    Ok(uri.map(|uri| EntityRef {
        uri,
        class_name,
        display_name: None,
    }))
}
