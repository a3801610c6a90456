//! URLs collected from reference-manager XML exports.
//!
//! EndNote and Zotero both write the EndNote XML layout:
//!
//! ```xml
//! <xml><records><record>
//!   <electronic-resource-num>10.1000/xyz</electronic-resource-num>
//!   <urls><related-urls><url>https://...</url></related-urls></urls>
//! </record></records></xml>
//! ```

use std::{fs, path::Path};

use anyhow::Context;
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, warn};

use crate::{batch::Groups, classifier::Classifier, identifier::doi, scheme::Scheme};

/// Containers under `<urls>` whose `<url>` children are article links.
const URL_LISTS: [&str; 3] = ["text-urls", "related-urls", "pdf-urls"];

/// The raw values pulled out of an export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportRecords {
    /// Every record URL starting with `http`, in document order.
    pub urls: Vec<String>,
    /// Every `electronic-resource-num`, trimmed, in document order.
    pub resource_numbers: Vec<String>,
}

impl ExportRecords {
    /// Group the URLs by scheme and add every resource number that is a DOI to the `doi` group.
    pub fn group(&self, keep_unparsed: bool) -> Groups {
        let mut groups = Classifier::builtin().group(&self.urls, keep_unparsed);
        for number in &self.resource_numbers {
            match doi::normalise_bare(number) {
                Some(doi) => {
                    groups.entry(Some(Scheme::Doi)).or_default().insert(doi);
                }
                None => warn!(value = %number, "skipping electronic-resource-num that is not a DOI"),
            }
        }
        groups
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Url,
    ResourceNumber,
}

/// Scan an EndNote/Zotero XML export for record URLs and resource numbers.
pub fn read_export(xml: &str) -> anyhow::Result<ExportRecords> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut records = ExportRecords::default();
    let mut stack: Vec<String> = Vec::new();
    // The field being captured and the depth of its element.
    let mut capturing: Option<(Field, usize)> = None;
    let mut text = String::new();

    let mut buf = Vec::new();
    loop {
        let event = reader
            .read_event_into(&mut buf)
            .with_context(|| format!("malformed export XML near byte {}", reader.buffer_position()))?;
        match event {
            Event::Eof => break,
            Event::Start(e) => {
                stack.push(local_name(e.name().as_ref()));
                if capturing.is_none()
                    && let Some(field) = field_at(&stack)
                {
                    capturing = Some((field, stack.len()));
                    text.clear();
                }
            }
            Event::End(_) => {
                if let Some((field, depth)) = capturing
                    && depth == stack.len()
                {
                    finish(&mut records, field, &text);
                    capturing = None;
                }
                stack.pop();
            }
            Event::Text(t) if capturing.is_some() => {
                text.push_str(&String::from_utf8_lossy(t.as_ref()));
            }
            Event::CData(t) if capturing.is_some() => {
                text.push_str(&String::from_utf8_lossy(t.as_ref()));
            }
            Event::GeneralRef(r) if capturing.is_some() => {
                let name = String::from_utf8_lossy(r.as_ref());
                match resolve_entity(&name) {
                    Some(c) => text.push(c),
                    None => {
                        text.push('&');
                        text.push_str(&name);
                        text.push(';');
                    }
                }
            }
            _ => {}
        }
        buf.clear();
    }

    debug!(
        urls = records.urls.len(),
        resource_numbers = records.resource_numbers.len(),
        "read reference-manager export"
    );
    Ok(records)
}

/// Read an export file and group what it references.
pub fn process_export(path: impl AsRef<Path>, keep_unparsed: bool) -> anyhow::Result<Groups> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path)
        .with_context(|| format!("failed to read export {}", path.display()))?;
    let records =
        read_export(&xml).with_context(|| format!("failed to parse export {}", path.display()))?;
    Ok(records.group(keep_unparsed))
}

fn field_at(stack: &[String]) -> Option<Field> {
    let (name, parents) = stack.split_last()?;
    if !parents.iter().any(|p| p == "record") {
        return None;
    }
    match name.as_str() {
        "url" => match parents {
            [.., urls, list] if urls == "urls" && URL_LISTS.contains(&list.as_str()) => {
                Some(Field::Url)
            }
            _ => None,
        },
        "electronic-resource-num" => Some(Field::ResourceNumber),
        _ => None,
    }
}

fn finish(records: &mut ExportRecords, field: Field, text: &str) {
    let value = text.trim();
    match field {
        Field::Url if value.starts_with("http") => records.urls.push(value.to_string()),
        Field::Url => debug!(value, "ignoring non-http record url"),
        Field::ResourceNumber if !value.is_empty() => {
            records.resource_numbers.push(value.to_string())
        }
        Field::ResourceNumber => {}
    }
}

fn local_name(name: &[u8]) -> String {
    // Compare local name ignoring namespace prefixes.
    let local = match name.iter().rposition(|&b| b == b':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    };
    String::from_utf8_lossy(local).to_ascii_lowercase()
}

fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = if let Some(hex) = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}
