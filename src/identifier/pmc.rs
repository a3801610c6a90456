use crate::identifier::{Identifier, strip_prefix_ignore_case};

/// A PubMed Central accession. The canonical form always carries the `PMC` prefix.
pub struct Pmc<'a> {
    digits: &'a str,
}

impl<'a> Identifier<'a> for Pmc<'a> {
    fn parse(identifier: &'a str) -> Option<Self> {
        let mut s = identifier.trim();
        if let Some(rest) = strip_prefix_ignore_case(s, "pmcid:") {
            s = rest.trim_start();
        }
        let digits = strip_prefix_ignore_case(s, "pmc").unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Pmc { digits })
    }

    fn canonical(&self) -> String {
        format!("PMC{}", self.digits)
    }
}

pub fn normalise(raw: &str) -> Option<String> {
    Pmc::parse(raw).map(|pmc| pmc.canonical())
}
