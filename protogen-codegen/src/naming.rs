//! Identifier rewrite pipeline.
//!
//! Raw schema identifiers pass through two independent rule chains: one for
//! package paths and one for member identifiers. Each chain is evaluated top
//! to bottom and the first matching rule wins; when no rule matches, the
//! input is returned unchanged.

use protogen_core::{capitalize, to_pascal_case};
use protogen_schema::NamespaceRemap;

/// A single `(predicate, transform)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteRule {
    /// Replace one exact path with another.
    Exact { from: String, to: String },
    /// Join underscore-separated segments into one capitalized identifier.
    JoinUnderscored,
    /// Uppercase a leading lowercase letter.
    CapitalizeFirst,
}

impl RewriteRule {
    pub fn exact(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Exact {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        match self {
            RewriteRule::Exact { from, .. } => input == from,
            RewriteRule::JoinUnderscored => input.contains('_'),
            RewriteRule::CapitalizeFirst => input.starts_with(|c: char| c.is_lowercase()),
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            RewriteRule::Exact { to, .. } => to.clone(),
            RewriteRule::JoinUnderscored => to_pascal_case(input),
            RewriteRule::CapitalizeFirst => capitalize(input),
        }
    }
}

/// An ordered list of rewrite rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleChain {
    rules: Vec<RewriteRule>,
}

impl RuleChain {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Append a rule at the lowest priority.
    pub fn rule(mut self, rule: RewriteRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Apply the first matching rule, or return the input unchanged.
    pub fn rewrite(&self, input: &str) -> String {
        self.rules
            .iter()
            .find(|rule| rule.matches(input))
            .map(|rule| rule.apply(input))
            .unwrap_or_else(|| input.to_string())
    }
}

/// The namespace and member rule chains used during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRules {
    namespace: RuleChain,
    member: RuleChain,
}

impl NamingRules {
    /// Build the chains from configured namespace remaps.
    pub fn new(remaps: &[NamespaceRemap]) -> Self {
        let namespace = RuleChain::new(
            remaps
                .iter()
                .map(|remap| RewriteRule::exact(&remap.from, &remap.to))
                .collect(),
        );
        let member = RuleChain::default()
            .rule(RewriteRule::JoinUnderscored)
            .rule(RewriteRule::CapitalizeFirst);
        Self { namespace, member }
    }

    /// Rewrite a package path into a target namespace.
    pub fn namespace(&self, path: &str) -> String {
        self.namespace.rewrite(path)
    }

    /// Rewrite a type, field or enum value identifier.
    pub fn member(&self, ident: &str) -> String {
        self.member.rewrite(ident)
    }
}
