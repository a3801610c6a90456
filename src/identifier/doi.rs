use once_cell::sync::Lazy;
use regex::Regex;

use crate::identifier::{Identifier, strip_prefix_ignore_case, strip_version};

/// Registrants whose DOIs carry a `.vN` revision marker that is not part of the work's identity
/// (Research Square, ChemRxiv, Preprints.org, JOSS).
const VERSIONED_REGISTRANTS: [&str; 4] = ["10.21203", "10.26434", "10.20944", "10.21105"];

const RESOLVERS: [&str; 6] = [
    "https://doi.org/",
    "http://doi.org/",
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "doi.org/",
    "dx.doi.org/",
];

pub struct Doi<'a> {
    prefix: &'a str,
    suffix: &'a str,
}

impl<'a> Identifier<'a> for Doi<'a> {
    fn parse(identifier: &'a str) -> Option<Self> {
        let mut s = identifier.trim();

        // Normalise common textual prefixes.
        if let Some(rest) = strip_prefix_ignore_case(s, "urn:doi:")
            .or_else(|| strip_prefix_ignore_case(s, "doi:"))
        {
            s = rest.trim_start();
        }

        if let Some(rest) = RESOLVERS
            .iter()
            .find_map(|resolver| strip_prefix_ignore_case(s, resolver))
        {
            s = rest;
        }

        s = s.trim_end_matches('/');

        static DOI_RE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(10\.\d{4,9}(?:\.\d+)*)/([^\s\p{C}]+)$").unwrap()
        });

        let caps = DOI_RE.captures(s)?;
        let prefix = caps.get(1)?.as_str();
        let mut suffix = caps.get(2)?.as_str();

        if VERSIONED_REGISTRANTS.contains(&prefix) {
            suffix = strip_version(suffix, ".");
        }

        Some(Doi { prefix, suffix })
    }

    fn canonical(&self) -> String {
        format!("{}/{}", self.prefix, self.suffix).to_lowercase()
    }
}

/// Normalise a DOI found in a URL path or query.
///
/// The caller has already separated the URL's own query and fragment, so `?` and `#` here are
/// part of the DOI.
pub fn normalise(raw: &str) -> Option<String> {
    Doi::parse(raw).map(|doi| doi.canonical())
}

/// Normalise a DOI given on its own, as pasted from a file name or reference list.
pub fn normalise_bare(raw: &str) -> Option<String> {
    let mut s = raw.trim();

    // Drop query string or fragment early if present.
    if let Some(idx) = s.find(['?', '#']) {
        s = &s[..idx];
    }

    s = trim_prose_punctuation(s);
    s = strip_suffix_ignore_case(s, ".pdf").unwrap_or(s);
    normalise(s)
}

/// Trim trailing punctuation commonly found in prose. A closing bracket is only trimmed when the
/// text has no opener left for it.
fn trim_prose_punctuation(mut s: &str) -> &str {
    loop {
        let Some(last) = s.chars().next_back() else {
            return s;
        };
        let trim = match last {
            '.' | ',' | ';' | ':' | '"' | '\'' => true,
            ')' => !has_opener(s, '(', ')'),
            ']' => !has_opener(s, '[', ']'),
            '}' => !has_opener(s, '{', '}'),
            _ => false,
        };
        if !trim {
            return s;
        }
        s = &s[..s.len() - last.len_utf8()];
    }
}

fn has_opener(s: &str, open: char, close: char) -> bool {
    s.matches(open).count() >= s.matches(close).count()
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let cut = s.len().checked_sub(suffix.len())?;
    let tail = s.get(cut..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &s[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;
    // Avoid importing the full prelude to keep clippy happy; use fully qualified macros instead.
    use proptest::strategy::Strategy;

    // Allowed characters in generated DOI suffixes.
    fn doi_suffix_char() -> impl Strategy<Value = char> {
        let uppers = proptest::sample::select(('A'..='Z').collect::<Vec<_>>());
        let lowers = proptest::sample::select(('a'..='z').collect::<Vec<_>>());
        let digits = proptest::sample::select(('0'..='9').collect::<Vec<_>>());
        let punct = proptest::sample::select(vec!['-', '.', '_', ';', '(', ')', '/', ':']);
        proptest::prop_oneof![uppers, lowers, digits, punct]
    }

    // Generate a DOI suffix that ends with an alphanumeric so no trailing trim applies.
    fn doi_suffix(min: usize, max: usize) -> impl Strategy<Value = String> {
        let last = proptest::prop_oneof![
            proptest::sample::select(('A'..='Z').collect::<Vec<_>>()),
            proptest::sample::select(('a'..='z').collect::<Vec<_>>()),
            proptest::sample::select(('0'..='9').collect::<Vec<_>>()),
        ];
        (min..=max).prop_flat_map(move |len| {
            if len == 1 {
                last.clone().prop_map(|c| c.to_string()).boxed()
            } else {
                (
                    proptest::collection::vec(doi_suffix_char(), len - 1),
                    last.clone(),
                )
                    .prop_map(|(mut v, last)| {
                        v.push(last);
                        v.into_iter().collect::<String>()
                    })
                    .boxed()
            }
        })
    }

    // Generate a DOI like "10.12345/ABC-123", avoiding the versioned registrants.
    fn doi_core() -> impl Strategy<Value = (String, String)> {
        (
            proptest::collection::vec(
                proptest::sample::select(('0'..='9').collect::<Vec<_>>()),
                4..=9,
            )
            .prop_map(|v| v.into_iter().collect::<String>()),
            doi_suffix(1, 64),
        )
            .prop_filter("versioned registrant", |(digits, _)| {
                !VERSIONED_REGISTRANTS.contains(&format!("10.{digits}").as_str())
            })
            .prop_map(|(digits, suffix)| (format!("10.{digits}"), suffix))
    }

    #[test]
    fn normalise_lowercases_generated_doi() {
        proptest::proptest!(|(t in doi_core())| {
            let (prefix, suffix) = t;
            let full = format!("{prefix}/{suffix}");
            proptest::prop_assert_eq!(normalise(&full), Some(full.to_lowercase()));
        })
    }

    #[test]
    fn normalise_strips_textual_prefixes_and_resolvers() {
        let decorations = vec![
            "doi:",
            "DOI: ",
            "urn:doi:",
            "https://doi.org/",
            "http://dx.doi.org/",
            "HTTPS://DX.DOI.ORG/",
        ];
        proptest::proptest!(|(t in doi_core(), pre in proptest::sample::select(decorations.clone()))| {
            let (prefix, suffix) = t;
            let full = format!("{prefix}/{suffix}");
            let decorated = format!("{pre}{full}");
            proptest::prop_assert_eq!(normalise(&decorated), Some(full.to_lowercase()));
        })
    }

    #[test]
    fn normalise_bare_ignores_query_and_fragment() {
        proptest::proptest!(|(t in doi_core(), q in "[A-Za-z0-9=&_-]{0,16}", f in "[A-Za-z0-9_-]{0,16}")| {
            let (prefix, suffix) = t;
            let full = format!("{prefix}/{suffix}");
            proptest::prop_assume!(!suffix.to_ascii_lowercase().ends_with(".pdf"));
            let s = format!("{full}?{q}#{f}");
            proptest::prop_assert_eq!(normalise_bare(&s), Some(full.to_lowercase()));
        })
    }

    #[test]
    fn normalise_rejects_non_doi() {
        proptest::proptest!(|(s in "[A-Za-z0-9 _-]{1,64}")| {
            proptest::prop_assume!(!s.contains("10."));
            proptest::prop_assert!(normalise(&s).is_none());
        })
    }

    #[test]
    fn versioned_registrants_drop_revision_marker() {
        assert_eq!(
            normalise("10.21203/rs.3.rs-12345.v2").as_deref(),
            Some("10.21203/rs.3.rs-12345")
        );
        assert_eq!(
            normalise("10.21105/joss.01708").as_deref(),
            Some("10.21105/joss.01708")
        );
        // Other registrants keep whatever they were given.
        assert_eq!(normalise("10.1000/abc.v2").as_deref(), Some("10.1000/abc.v2"));
    }

    #[test]
    fn bare_doi_drops_pdf_extension() {
        assert_eq!(
            normalise_bare("10.21105/joss.01708.pdf").as_deref(),
            Some("10.21105/joss.01708")
        );
        assert_eq!(
            normalise_bare("10.21105/joss.01708.v1.PDF").as_deref(),
            Some("10.21105/joss.01708")
        );
    }

    #[test]
    fn trailing_slash_and_punctuation_are_dropped() {
        assert_eq!(normalise("10.1000/XYZ123/").as_deref(), Some("10.1000/xyz123"));
        assert_eq!(normalise_bare("doi:10.1000/xyz123.").as_deref(), Some("10.1000/xyz123"));
        assert_eq!(normalise_bare("10.1000/xyz123);").as_deref(), Some("10.1000/xyz123"));
    }

    #[test]
    fn balanced_closing_brackets_are_part_of_the_doi() {
        assert_eq!(normalise_bare("10.1000/abc(1)").as_deref(), Some("10.1000/abc(1)"));
        assert_eq!(normalise_bare("10.1000/abc[2].").as_deref(), Some("10.1000/abc[2]"));
        assert_eq!(normalise("10.1000/abc(1)").as_deref(), Some("10.1000/abc(1)"));
    }

    #[test]
    fn doi_from_a_url_keeps_every_character() {
        assert_eq!(normalise("10.1000/ABC?def").as_deref(), Some("10.1000/abc?def"));
        assert_eq!(normalise("10.1000/abc#1").as_deref(), Some("10.1000/abc#1"));
        assert_eq!(normalise("10.1000/abc.").as_deref(), Some("10.1000/abc."));
    }

    #[test]
    fn malformed_prefixes_are_rejected() {
        assert!(normalise("10.12/abc").is_none());
        assert!(normalise("10.1234/").is_none());
        assert!(normalise("10.1234/has space").is_none());
        assert!(normalise("").is_none());
    }
}
