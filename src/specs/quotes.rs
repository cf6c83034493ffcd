// src/specs/quotes.rs

use scraper::{ElementRef, Selector};

use super::{FieldSpec, ItemSpec};
use crate::config::consts::{AUTHOR_FIELD, AUTHOR_QUERY, CONTAINER_QUERY, TEXT_FIELD, TEXT_QUERY};
use crate::core::html::{self, NodeQuery};
use crate::error::ExtractError;
use crate::progress::Progress;
use crate::record::Record;

/// `div.quote` → { text: `span.text`, author: `small.author` }
pub fn spec() -> ItemSpec {
    let q = |(tag, class): (&str, &str)| NodeQuery::new(tag, class);
    ItemSpec {
        container: q(CONTAINER_QUERY),
        fields: vec![
            FieldSpec::new(TEXT_FIELD, q(TEXT_QUERY)),
            FieldSpec::new(AUTHOR_FIELD, q(AUTHOR_QUERY)),
        ],
    }
}

/// Project every container on the page into a record, in document order.
///
/// Never fails: empty input gives an empty vec without parsing, a spec that
/// cannot be compiled is reported and gives an empty vec, and a container
/// with a missing or blank field is skipped with one warning.
pub fn extract(html_doc: Option<&str>, spec: &ItemSpec, progress: &mut dyn Progress) -> Vec<Record> {
    let Some(text) = html_doc.filter(|t| !t.trim().is_empty()) else {
        logd!("no page text; nothing to extract");
        return Vec::new();
    };

    match try_extract(text, spec, progress) {
        Ok(records) => records,
        Err(e) => {
            progress.error(&format!("Could not parse page: {e}"));
            Vec::new()
        }
    }
}

fn try_extract(
    text: &str,
    spec: &ItemSpec,
    progress: &mut dyn Progress,
) -> Result<Vec<Record>, ExtractError> {
    if spec.fields.is_empty() {
        return Err(ExtractError::NoFields);
    }

    // Compile everything before touching the document
    let container = spec.container.selector()?;
    let fields = spec
        .fields
        .iter()
        .map(|f| f.query.selector().map(|sel| (f.name.as_str(), sel)))
        .collect::<Result<Vec<_>, _>>()?;

    let doc = html::parse(text);
    let containers = html::select_all(&doc, &container);
    progress.log(&format!(
        "Found {} `{}` containers on the page",
        containers.len(),
        spec.container.css()
    ));

    let mut out = Vec::with_capacity(containers.len());
    for (i, node) in containers.into_iter().enumerate() {
        match project(node, &fields) {
            Ok(rec) => out.push(rec),
            Err(missing) => progress.warn(&format!(
                "Skipping container #{}: missing {}",
                i + 1,
                missing.join(", ")
            )),
        }
    }
    Ok(out)
}

/// One container → one record, or the names of the fields that were
/// missing or blank.
fn project<'s>(node: ElementRef<'_>, fields: &[(&'s str, Selector)]) -> Result<Record, Vec<&'s str>> {
    let mut rec = Record::new();
    let mut missing = Vec::new();

    for (name, sel) in fields {
        match html::find_first(node, sel).map(html::inner_text) {
            Some(value) if !value.is_empty() => rec.push(*name, value),
            _ => missing.push(*name),
        }
    }

    if missing.is_empty() { Ok(rec) } else { Err(missing) }
}
