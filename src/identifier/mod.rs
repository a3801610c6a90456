pub mod arxiv;
pub mod doi;
pub mod pmc;
pub mod publisher;
pub mod pubmed;

/// A scheme-specific identifier borrowed from its textual form.
pub trait Identifier<'a>: Sized + 'a {
    /// Parse `identifier`, tolerating the decorations commonly found around it.
    fn parse(identifier: &'a str) -> Option<Self>;
    /// The canonical, bare form of the identifier.
    fn canonical(&self) -> String;
}

/// Case-insensitive (ASCII) `strip_prefix`.
pub(crate) fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

/// Drop a trailing `vN` version marker, optionally preceded by `separator`.
pub(crate) fn strip_version<'a>(s: &'a str, separator: &str) -> &'a str {
    let digits = s.len() - s.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return s;
    }
    let head = &s[..s.len() - digits];
    head.strip_suffix('v')
        .or_else(|| head.strip_suffix('V'))
        .and_then(|rest| rest.strip_suffix(separator))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(s)
}
