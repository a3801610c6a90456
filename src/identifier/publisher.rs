//! DOIs rebuilt from publisher-local article numbers.
//!
//! Several hosts put only the registrant-local part of a DOI in their URLs; the registrant
//! prefix is fixed per host and has to be added back.

use crate::identifier::{doi, strip_version};

const BIORXIV_PREFIX: &str = "10.1101/";
const PREPRINTS_PREFIX: &str = "10.20944/preprints";
const NATURE_PREFIX: &str = "10.1038/";

/// A bioRxiv/medRxiv article number from an `early/YYYY/MM/DD/<id>` link, e.g. `174094v1`.
pub fn biorxiv_article(raw: &str) -> Option<String> {
    let id = strip_version(raw.trim(), "");
    doi::normalise(&format!("{BIORXIV_PREFIX}{id}"))
}

/// A full bioRxiv/medRxiv DOI from a `content/` link, possibly carrying a `vN` revision.
pub fn biorxiv_doi(raw: &str) -> Option<String> {
    doi::normalise(strip_version(raw.trim(), ""))
}

/// A Preprints.org manuscript number, e.g. `202003.0333/v1`.
pub fn preprints_manuscript(raw: &str) -> Option<String> {
    let id = strip_version(raw.trim().trim_end_matches('/'), "/");
    doi::normalise(&format!("{PREPRINTS_PREFIX}{id}"))
}

/// A Nature article slug, e.g. `s41586-020-2012-7`.
pub fn nature_article(raw: &str) -> Option<String> {
    let id = raw.trim();
    if id.is_empty() || id.contains('/') {
        return None;
    }
    doi::normalise(&format!("{NATURE_PREFIX}{id}"))
}
