use std::{fmt, str::FromStr};

/// The identifier schemes a URL can be classified into.
///
/// Variants are declared in the alphabetical order of their tags, so the derived ordering sorts
/// by tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scheme {
    Arxiv,
    Biorxiv,
    Doi,
    Medrxiv,
    Pmc,
    Pubmed,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::Arxiv,
        Scheme::Biorxiv,
        Scheme::Doi,
        Scheme::Medrxiv,
        Scheme::Pmc,
        Scheme::Pubmed,
    ];

    /// The stable lowercase tag of this scheme.
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Arxiv => "arxiv",
            Scheme::Biorxiv => "biorxiv",
            Scheme::Doi => "doi",
            Scheme::Medrxiv => "medrxiv",
            Scheme::Pmc => "pmc",
            Scheme::Pubmed => "pubmed",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown identifier scheme: {s}"))
    }
}
