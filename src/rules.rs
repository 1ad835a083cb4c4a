//!
//! Rule algebra for the authorization engine.
//! Defines allow-rules binding an action to a subject type, and the matcher that
//! decides whether any rule in a set covers a requested `(action, subject type)`.

use crate::types::{Action, SubjectType};

/// A single grant. There are no deny rules: absence of a matching rule is an implicit deny.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rule {
    pub action: Action,
    #[serde(rename = "subject")]
    pub subject_type: SubjectType,
}

impl Rule {
    pub const fn new(action: Action, subject_type: SubjectType) -> Self {
        Rule { action, subject_type }
    }

    /// Checks whether this rule grants `action` on `subject_type`.
    #[inline]
    pub fn matches(&self, action: Action, subject_type: SubjectType) -> bool {
        covers_action(self.action, action) && covers_subject(self.subject_type, subject_type)
    }
}

/// Checks if a granted action covers a requested one.
///
/// # Arguments
/// * `granted` - The action carried by a rule.
/// * `requested` - The action being attempted.
///
/// # Returns
/// `true` if `granted` is the `Manage` wildcard or equals `requested`.
#[inline]
pub fn covers_action(granted: Action, requested: Action) -> bool {
    granted.is_wildcard() || granted == requested
}

/// Checks if a granted subject type covers a requested one.
/// The `All` wildcard covers every subject type, including `All` itself.
#[inline]
pub fn covers_subject(granted: SubjectType, requested: SubjectType) -> bool {
    granted.is_wildcard() || granted == requested
}

/// An ordered collection of rules. Order has no effect on decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RuleSet(Vec<Rule>);

impl RuleSet {
    pub fn new() -> Self {
        RuleSet(Vec::new())
    }

    pub fn push(&mut self, rule: Rule) {
        self.0.push(rule);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Rule] {
        &self.0
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        RuleSet(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Decides whether `rules` permit `action` on `subject_type`.
///
/// The decision is existential: `true` iff at least one rule matches. There is
/// no precedence between rules. Linear in the number of rules.
#[inline]
pub fn matches(rules: &RuleSet, action: Action, subject_type: SubjectType) -> bool {
    rules.iter().any(|rule| rule.matches(action, subject_type))
}
