use std::collections::HashSet;

use anyhow::{Context, bail};
use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;
use tracing::{debug, trace};
use url::Url;

use crate::{
    rule::{Rule, Surface},
    rules::RULES,
    scheme::Scheme,
};

/// Path endings that select a rendering of an article rather than a different article.
///
/// `.full.pdf` must be tried before `.pdf` so that `.full` does not survive the first pass.
const PRESENTATION_SUFFIXES: [&str; 5] = [".full.pdf", ".pdf", ".full", ".article-metrics", "/pdf"];

/// The outcome of classifying one input.
///
/// Identified results order before unparsed ones, then by scheme tag, then by value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parsed {
    Identified { scheme: Scheme, id: String },
    /// The input, verbatim.
    Unparsed(String),
}

impl Parsed {
    pub fn scheme(&self) -> Option<Scheme> {
        match self {
            Parsed::Identified { scheme, .. } => Some(*scheme),
            Parsed::Unparsed(_) => None,
        }
    }

    /// The identifier, or the original input when nothing matched.
    pub fn value(&self) -> &str {
        match self {
            Parsed::Identified { id, .. } => id,
            Parsed::Unparsed(input) => input,
        }
    }

    pub fn is_identified(&self) -> bool {
        matches!(self, Parsed::Identified { .. })
    }

    pub fn into_pair(self) -> (Option<Scheme>, String) {
        match self {
            Parsed::Identified { scheme, id } => (Some(scheme), id),
            Parsed::Unparsed(input) => (None, input),
        }
    }
}

/// Which table row classified an input.
#[derive(Clone, Debug)]
pub struct Match<'c> {
    pub rule: &'c Rule,
    /// Position of `rule` in the table.
    pub index: usize,
    pub id: String,
}

#[derive(Clone, Debug)]
struct CompiledRule {
    rule: Rule,
    regex: Regex,
}

/// An ordered, compiled rule table. The first rule that matches wins.
#[derive(Clone, Debug)]
pub struct Classifier {
    rules: Vec<CompiledRule>,
}

static BUILTIN: Lazy<Classifier> =
    Lazy::new(|| Classifier::new(RULES).expect("built-in rule table is well-formed"));

impl Classifier {
    /// Compile `rules`, keeping their order.
    ///
    /// Fails when a pattern does not compile, lacks an `id` capture group, or when two rules share
    /// a name.
    pub fn new(rules: &[Rule]) -> anyhow::Result<Self> {
        let mut names = HashSet::new();
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            if !names.insert(rule.name) {
                bail!("duplicate rule name `{}`", rule.name);
            }
            let regex = Regex::new(rule.pattern)
                .with_context(|| format!("invalid pattern for rule `{}`", rule.name))?;
            if !regex.capture_names().flatten().any(|name| name == "id") {
                bail!("pattern for rule `{}` has no `id` capture group", rule.name);
            }
            compiled.push(CompiledRule { rule: *rule, regex });
        }
        Ok(Classifier { rules: compiled })
    }

    /// The classifier over the built-in [`RULES`].
    pub fn builtin() -> &'static Classifier {
        &BUILTIN
    }

    pub fn rules(&self) -> impl ExactSizeIterator<Item = &Rule> {
        self.rules.iter().map(|c| &c.rule)
    }

    /// Find the first rule that identifies `input`.
    pub fn classify(&self, input: &str) -> Option<Match<'_>> {
        let bare = input.trim();
        let web = locator(bare);

        for (index, compiled) in self.rules.iter().enumerate() {
            let subject = match compiled.rule.surface {
                Surface::Bare => bare,
                Surface::Web => match web.as_deref() {
                    Some(locator) => locator,
                    None => continue,
                },
            };
            let Some(raw) = compiled
                .regex
                .captures(subject)
                .and_then(|caps| caps.name("id"))
            else {
                continue;
            };
            let raw = percent_decode_str(raw.as_str()).decode_utf8_lossy();
            match (compiled.rule.extract)(&raw) {
                Some(id) => {
                    debug!(
                        rule = compiled.rule.name,
                        scheme = %compiled.rule.scheme,
                        %id,
                        "classified citation url"
                    );
                    return Some(Match {
                        rule: &compiled.rule,
                        index,
                        id,
                    });
                }
                None => trace!(
                    rule = compiled.rule.name,
                    candidate = %raw,
                    "pattern matched but extractor declined"
                ),
            }
        }
        None
    }

    /// Classify `input`, handing it back unchanged when no rule identifies it.
    pub fn parse(&self, input: &str) -> Parsed {
        match self.classify(input) {
            Some(m) => Parsed::Identified {
                scheme: m.rule.scheme,
                id: m.id,
            },
            None => {
                debug!(input, "citation url left unparsed");
                Parsed::Unparsed(input.to_owned())
            }
        }
    }
}

/// Classify `input` with the built-in rules.
pub fn parse(input: &str) -> Parsed {
    Classifier::builtin().parse(input)
}

/// Reduce an `http`/`https` URL to `host/path[?query]` for matching.
fn locator(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    // Path and query as written: the parsed path has dot segments resolved, which would rewrite
    // identifiers containing `.` or `..` segments.
    let (_, after_scheme) = input.split_once("://")?;
    let rest = after_scheme
        .find(['/', '?', '#'])
        .map_or("", |idx| &after_scheme[idx..]);
    let rest = rest.split_once('#').map_or(rest, |(head, _)| head);
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    let path = strip_presentation_suffixes(path.trim_matches('/'));

    let mut locator = format!("{host}/{path}");
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        locator.push('?');
        locator.push_str(query);
    }
    Some(locator)
}

fn strip_presentation_suffixes(mut path: &str) -> &str {
    while let Some(rest) = PRESENTATION_SUFFIXES
        .iter()
        .find_map(|suffix| path.strip_suffix(suffix))
    {
        path = rest.trim_end_matches('/');
    }
    path
}
