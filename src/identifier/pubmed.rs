use crate::identifier::{Identifier, strip_prefix_ignore_case};

/// A PubMed record number (PMID).
pub struct Pubmed<'a> {
    pmid: &'a str,
}

impl<'a> Identifier<'a> for Pubmed<'a> {
    fn parse(identifier: &'a str) -> Option<Self> {
        let mut s = identifier.trim();
        if let Some(rest) = strip_prefix_ignore_case(s, "pmid:") {
            s = rest.trim_start();
        }

        // Listing pages join several ids with commas; the first one names the record.
        let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let pmid = &s[..end];
        if pmid.is_empty() {
            return None;
        }
        Some(Pubmed { pmid })
    }

    fn canonical(&self) -> String {
        self.pmid.to_string()
    }
}

pub fn normalise(raw: &str) -> Option<String> {
    Pubmed::parse(raw).map(|pmid| pmid.canonical())
}
