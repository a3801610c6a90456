use once_cell::sync::Lazy;
use regex::Regex;

use crate::identifier::{Identifier, strip_prefix_ignore_case};

/// An arXiv identifier, split into its canonical ID and optional version.
pub struct Arxiv<'a> {
    /// Canonical arXiv ID without version (e.g., "1810.04805" or "astro-ph/0603274").
    canonical_id: &'a str,
    /// Optional explicit version number when present in the input (e.g., Some("2")).
    version: Option<&'a str>,
}

impl<'a> Identifier<'a> for Arxiv<'a> {
    fn parse(identifier: &'a str) -> Option<Self> {
        let mut s = identifier.trim();

        if let Some(rest) = strip_prefix_ignore_case(s, "arxiv:") {
            s = rest.trim_start();
        }
        s = s.trim_matches('/');
        s = s.strip_suffix(".pdf").unwrap_or(s);

        static NEWSTYLE_RE: Lazy<Regex> = Lazy::new(|| {
            // new-style: YYMM.NNNN(vN)? or YYMM.NNNNN(vN)?
            Regex::new(r"^(?P<core>\d{4}\.[0-9]{4,5})(?:v(?P<v>\d+))?$").unwrap()
        });
        static LEGACY_RE: Lazy<Regex> = Lazy::new(|| {
            // legacy: archive(.subject)?/NNNNNNN with optional vN (e.g., math.GT/0309136)
            Regex::new(r"^(?P<core>[A-Za-z-]+(?:\.[A-Za-z-]+)?/[0-9]{7})(?:v(?P<v>\d+))?$").unwrap()
        });

        let caps = NEWSTYLE_RE
            .captures(s)
            .or_else(|| LEGACY_RE.captures(s))?;
        Some(Arxiv {
            canonical_id: caps.name("core")?.as_str(),
            version: caps.name("v").map(|m| m.as_str()),
        })
    }

    fn canonical(&self) -> String {
        match self.version {
            Some(v) => format!("{}v{}", self.canonical_id, v),
            None => self.canonical_id.to_string(),
        }
    }
}

pub fn normalise(raw: &str) -> Option<String> {
    Arxiv::parse(raw).map(|arxiv| arxiv.canonical())
}
