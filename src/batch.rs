use std::collections::{BTreeMap, BTreeSet};

use crate::{
    classifier::{Classifier, Parsed},
    scheme::Scheme,
};

/// Identifiers grouped by scheme; `None` collects inputs no rule identified.
pub type Groups = BTreeMap<Option<Scheme>, BTreeSet<String>>;

impl Classifier {
    /// Parse every input in order, or in lexicographic order of the inputs with `pre_sort`.
    pub fn parse_many<I, S>(&self, urls: I, pre_sort: bool) -> Vec<Parsed>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut urls: Vec<S> = urls.into_iter().collect();
        if pre_sort {
            urls.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
        }
        urls.iter().map(|url| self.parse(url.as_ref())).collect()
    }

    /// Group identifiers by scheme, dropping unparsed inputs unless `keep_unparsed` is set.
    pub fn group<I, S>(&self, urls: I, keep_unparsed: bool) -> Groups
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups = Groups::new();
        for url in urls {
            let (scheme, value) = self.parse(url.as_ref()).into_pair();
            if scheme.is_none() && !keep_unparsed {
                continue;
            }
            groups.entry(scheme).or_default().insert(value);
        }
        groups
    }
}

/// [`Classifier::parse_many`] with the built-in rules.
pub fn parse_many<I, S>(urls: I, pre_sort: bool) -> Vec<Parsed>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Classifier::builtin().parse_many(urls, pre_sort)
}

/// [`Classifier::group`] with the built-in rules.
pub fn group<I, S>(urls: I, keep_unparsed: bool) -> Groups
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Classifier::builtin().group(urls, keep_unparsed)
}
