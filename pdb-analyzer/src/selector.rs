//! Canonical text form of a label selector.
//!
//! Workloads and PodDisruptionBudgets are matched by comparing these strings,
//! so both sides must go through [`Selector::from_match_labels`]. Only
//! `matchLabels` take part; `matchExpressions` are ignored.

use std::fmt;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;

/// Rendered for a selector with no labels.
pub const EMPTY_SELECTOR: &str = "<none>";

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(String);

impl Selector {
    /// Serialize a match-labels map as `k1=v1,k2=v2` with keys ascending.
    ///
    /// The result does not depend on the iteration order of `labels`.
    pub fn from_match_labels<I, K, V>(labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut pairs: Vec<(K, V)> = labels.into_iter().collect();
        if pairs.is_empty() {
            return Self::empty();
        }
        pairs.sort_by(|(ka, va), (kb, vb)| {
            ka.as_ref()
                .cmp(kb.as_ref())
                .then_with(|| va.as_ref().cmp(vb.as_ref()))
        });
        let rendered = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k.as_ref(), v.as_ref()))
            .collect::<Vec<_>>()
            .join(",");
        Self(rendered)
    }

    pub fn from_label_selector(selector: &LabelSelector) -> Self {
        match &selector.match_labels {
            Some(labels) => Self::from_match_labels(labels),
            None => Self::empty(),
        }
    }

    pub fn empty() -> Self {
        Self(EMPTY_SELECTOR.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
