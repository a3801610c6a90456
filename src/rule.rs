use crate::scheme::Scheme;

/// Turns the `id` capture of a rule's pattern into a bare, normalised identifier.
///
/// Returning `None` declines the match and lets the next rule try.
pub type Extractor = fn(&str) -> Option<String>;

/// What a rule's pattern is matched against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    /// The trimmed input, for identifiers pasted without a URL around them.
    Bare,
    /// The locator of an `http`/`https` URL: `host/path[?query]`, with the host lowercased and
    /// stripped of `www.`, and presentation suffixes such as `.full.pdf` removed from the path.
    Web,
}

/// One row of a classification table.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub name: &'static str,
    pub scheme: Scheme,
    pub surface: Surface,
    /// Must define a named capture group `id`.
    pub pattern: &'static str,
    pub extract: Extractor,
    /// A canonical input this rule exists for, and the identifier it must produce.
    pub example: &'static str,
    pub expected: &'static str,
}
