use regex::Regex;
use std::fmt;
use tracing::debug;

use crate::config::RuleSpec;
use crate::error::{PatchError, PatchResult};

/// A compiled pattern with its replacement text.
///
/// Matching is textual: occurrences inside comments or string literals are
/// rewritten like any other.
#[derive(Debug, Clone)]
pub struct PatchRule {
    regex: Regex,
    replacement: String,
}

impl PatchRule {
    /// Compile a rule. `replacement` may reference capture groups as `$1` or
    /// `${name}`; every reference must name a group of `pattern`, and `$$`
    /// stands for a literal dollar sign.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> PatchResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| PatchError::invalid_pattern(pattern, e.to_string()))?;
        let replacement = replacement.into();

        for group in group_references(&replacement) {
            if !has_group(&regex, group) {
                return Err(PatchError::invalid_pattern(
                    pattern,
                    format!(
                        "replacement `{}` refers to unknown group `{}` (write `$$` for a literal `$`)",
                        replacement, group
                    ),
                ));
            }
        }

        Ok(Self { regex, replacement })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Replace every non-overlapping match, leftmost-first, returning the
    /// new text and how many matches were replaced.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let matches = self.regex.find_iter(text).count();
        if matches == 0 {
            return (text.to_string(), 0);
        }

        let replaced = self
            .regex
            .replace_all(text, self.replacement.as_str())
            .into_owned();
        (replaced, matches)
    }
}

impl fmt::Display for PatchRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "s/{}/{}/g", self.regex.as_str(), self.replacement)
    }
}

/// Group names referenced by a replacement, read the way `Regex::replace_all`
/// reads them: `$$` is an escape, `${...}` is braced, and a bare `$` takes the
/// longest run of `[_0-9A-Za-z]`. A `$` that starts no reference is literal.
fn group_references(replacement: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = replacement;

    while let Some(pos) = rest.find('$') {
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix('$') {
            rest = tail;
            continue;
        }

        if let Some(braced) = after.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                groups.push(&braced[..end]);
                rest = &braced[end + 1..];
                continue;
            }
        }

        let len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        if len > 0 {
            groups.push(&after[..len]);
        }
        rest = &after[len..];
    }

    groups
}

fn has_group(regex: &Regex, group: &str) -> bool {
    match group.parse::<usize>() {
        Ok(index) => index < regex.captures_len(),
        Err(_) => regex.capture_names().flatten().any(|name| name == group),
    }
}

/// Match count for one rule of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub pattern: String,
    pub matches: usize,
}

/// Result of running a rule set over some text
#[derive(Debug, Clone)]
pub struct Substitution {
    /// Text after every rule has been applied
    pub content: String,
    /// One entry per rule, in application order
    pub outcomes: Vec<RuleOutcome>,
}

impl Substitution {
    pub fn total_matches(&self) -> usize {
        self.outcomes.iter().map(|o| o.matches).sum()
    }
}

/// Ordered list of rules; each rule sees the output of the one before it
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<PatchRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<PatchRule>) -> Self {
        Self { rules }
    }

    /// Compile rule specs, failing on the first invalid pattern
    pub fn compile(specs: &[RuleSpec]) -> PatchResult<Self> {
        let rules = specs
            .iter()
            .map(|spec| PatchRule::new(&spec.pattern, spec.replacement.as_str()))
            .collect::<PatchResult<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[PatchRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn apply(&self, text: &str) -> Substitution {
        let mut content = text.to_string();
        let mut outcomes = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (next, matches) = rule.apply(&content);
            debug!("{} matched {} time(s)", rule, matches);
            content = next;
            outcomes.push(RuleOutcome {
                pattern: rule.pattern().to_string(),
                matches,
            });
        }

        Substitution { content, outcomes }
    }
}
