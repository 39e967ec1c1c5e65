//! Decoding of the Atom-style feed envelope into [`GenericEntry`] values.
//!
//! Only structure is checked here. Field contents are copied as published and
//! judged later by the extractors.

use maple_core::GenericEntry;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::DecodeError;

/// The decoded feed: its own metadata plus entries in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEnvelope {
    pub title: String,
    pub updated_raw: String,
    pub entries: Vec<GenericEntry>,
}

/// Decode raw feed bytes into entries, preserving document order.
///
/// # Errors
///
/// Returns [`DecodeError`] if the bytes are not UTF-8, not well-formed XML,
/// or not rooted at `<feed>`.
pub fn decode(raw: &[u8]) -> Result<Vec<GenericEntry>, DecodeError> {
    decode_envelope(raw).map(|envelope| envelope.entries)
}

/// Text-bearing child elements the decoder captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    FeedTitle,
    FeedUpdated,
    Title,
    Updated,
    Summary,
}

/// Decode raw feed bytes into a [`FeedEnvelope`].
///
/// # Errors
///
/// Returns [`DecodeError`] if the bytes are not UTF-8, not well-formed XML,
/// or not rooted at `<feed>`.
pub fn decode_envelope(raw: &[u8]) -> Result<FeedEnvelope, DecodeError> {
    let xml = std::str::from_utf8(raw)?;
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);

    // Whitespace is kept so inline HTML in summaries survives. Titles and
    // timestamps are trimmed when their element closes; summaries are not.
    let mut reader = Reader::from_str(xml);

    let mut envelope = FeedEnvelope::default();
    let mut open: Vec<String> = Vec::new();
    let mut seen_root = false;
    let mut entry: Option<GenericEntry> = None;
    let mut capture: Option<(Field, usize)> = None;
    let mut text = String::new();

    loop {
        let event = reader.read_event().map_err(|source| DecodeError::Xml {
            position: reader.error_position(),
            source,
        })?;

        match event {
            Event::Start(e) => {
                let name = local_name(&e);
                if open.is_empty() {
                    check_root(&name, &mut seen_root)?;
                }

                if let Some((field, _)) = capture {
                    if field == Field::Summary {
                        text.push('<');
                        text.push_str(&raw_tag(&e));
                        text.push('>');
                    }
                } else {
                    match (open.len(), entry.is_some(), name.as_str()) {
                        (1, false, "entry") => entry = Some(empty_entry()),
                        (1, false, "title") => capture = Some((Field::FeedTitle, 2)),
                        (1, false, "updated") => capture = Some((Field::FeedUpdated, 2)),
                        (2, true, "title") => capture = Some((Field::Title, 3)),
                        (2, true, "updated") => capture = Some((Field::Updated, 3)),
                        (2, true, "summary") => capture = Some((Field::Summary, 3)),
                        (2, true, "link" | "category") => {
                            if let Some(current) = entry.as_mut() {
                                read_entry_attributes(&e, &name, current)?;
                            }
                        }
                        _ => {}
                    }
                    if capture.is_some() {
                        text.clear();
                    }
                }

                open.push(name);
            }
            Event::Empty(e) => {
                let name = local_name(&e);
                if open.is_empty() {
                    check_root(&name, &mut seen_root)?;
                }

                if let Some((Field::Summary, _)) = capture {
                    text.push('<');
                    text.push_str(&raw_tag(&e));
                    text.push_str("/>");
                } else if open.len() == 2 && capture.is_none() {
                    if let Some(current) = entry.as_mut() {
                        read_entry_attributes(&e, &name, current)?;
                    }
                }
            }
            Event::End(e) => {
                let depth = open.len();
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();

                match capture {
                    Some((field, at)) if at == depth => {
                        let value = if field == Field::Summary {
                            std::mem::take(&mut text)
                        } else {
                            text.trim().to_string()
                        };
                        match field {
                            Field::FeedTitle => envelope.title = value,
                            Field::FeedUpdated => envelope.updated_raw = value,
                            Field::Title | Field::Updated | Field::Summary => {
                                if let Some(current) = entry.as_mut() {
                                    match field {
                                        Field::Title => current.title = value,
                                        Field::Updated => current.updated_raw = value,
                                        _ => current.summary_text = value,
                                    }
                                }
                            }
                        }
                        capture = None;
                        text.clear();
                    }
                    Some((Field::Summary, _)) => {
                        text.push_str("</");
                        text.push_str(&String::from_utf8_lossy(e.name().as_ref()));
                        text.push('>');
                    }
                    _ => {}
                }

                if depth == 2 && name == "entry" {
                    if let Some(done) = entry.take() {
                        envelope.entries.push(done);
                    }
                }

                open.pop();
            }
            Event::Text(e) => {
                if capture.is_some() {
                    let unescaped = e.unescape().map_err(|source| DecodeError::Xml {
                        position: reader.error_position(),
                        source,
                    })?;
                    text.push_str(&unescaped);
                }
            }
            Event::CData(e) => {
                if capture.is_some() {
                    text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(element) = open.pop() {
        return Err(DecodeError::UnclosedElement { element });
    }
    if !seen_root {
        return Err(DecodeError::Empty);
    }

    tracing::debug!(
        entries = envelope.entries.len(),
        feed_title = %envelope.title,
        "decoded feed envelope"
    );
    Ok(envelope)
}

fn empty_entry() -> GenericEntry {
    GenericEntry {
        title: String::new(),
        updated_raw: String::new(),
        link_href: String::new(),
        summary_text: String::new(),
        category_term: String::new(),
    }
}

fn check_root(name: &str, seen_root: &mut bool) -> Result<(), DecodeError> {
    if *seen_root || name != "feed" {
        return Err(DecodeError::UnexpectedRoot {
            found: name.to_string(),
        });
    }
    *seen_root = true;
    Ok(())
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

/// Qualified name plus attributes as written in the source.
fn raw_tag(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(&**e).trim_end().to_string()
}

/// Copy `link/@href` or `category/@term` onto the entry being built.
fn read_entry_attributes(
    e: &BytesStart<'_>,
    name: &str,
    entry: &mut GenericEntry,
) -> Result<(), DecodeError> {
    match name {
        "link" => {
            if let Some(href) = attribute(e, name, "href")? {
                entry.link_href = href;
            }
        }
        "category" => {
            if let Some(term) = attribute(e, name, "term")? {
                entry.category_term = term;
            }
        }
        _ => {}
    }
    Ok(())
}

fn attribute(e: &BytesStart<'_>, element: &str, key: &str) -> Result<Option<String>, DecodeError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| DecodeError::Attribute {
            element: element.to_string(),
            reason: err.to_string(),
        })?;
        if attr.key.local_name().as_ref() == key.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|err| DecodeError::Attribute {
                    element: element.to_string(),
                    reason: err.to_string(),
                })?;
            return Ok(Some(value.trim().to_string()));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
