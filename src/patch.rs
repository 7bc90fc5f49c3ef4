//! Read the target, rewrite it with the configured rules, write it back.

use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::PatchConfig;
use crate::diff::{changed_lines, unified_diff, RuleOutcome, RuleSet};
use crate::error::PatchResult;
use crate::utils::{overwrite_existing, read_file_to_string};

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct PatchReport {
    pub target_path: PathBuf,
    pub outcomes: Vec<RuleOutcome>,
    /// Whether the written text differs from what was read
    pub changed: bool,
    message: String,
}

impl PatchReport {
    pub fn total_matches(&self) -> usize {
        self.outcomes.iter().map(|o| o.matches).sum()
    }

    /// Fixed confirmation line, printed whether or not anything matched
    pub fn completion_message(&self) -> &str {
        &self.message
    }
}

/// Patch the configured target file in place.
///
/// Rules are compiled before the file is touched. The file is always
/// rewritten once substitution finishes, even when nothing matched; a
/// missing or unreadable target fails before any write.
pub fn run(config: &PatchConfig) -> PatchResult<PatchReport> {
    let rules = RuleSet::compile(&config.rules)?;
    let path = &config.target_path;

    for rule in rules.rules() {
        debug!("Rule {}", rule);
    }

    let original = read_file_to_string(path)?;
    let substitution = rules.apply(&original);
    let changed = substitution.content != original;

    if changed {
        debug!(
            "{} line(s) changed\n{}",
            changed_lines(&original, &substitution.content),
            unified_diff(path, &original, &substitution.content)
        );
    }

    overwrite_existing(path, &substitution.content)?;

    info!(
        "Patched {} ({} replacement(s) across {} rule(s))",
        path.display(),
        substitution.total_matches(),
        rules.len()
    );

    Ok(PatchReport {
        target_path: path.clone(),
        outcomes: substitution.outcomes,
        changed,
        message: config.completion_message(),
    })
}

/// Run the built-in AdminPanel fix against the working directory
pub fn run_default() -> PatchResult<PatchReport> {
    run(&PatchConfig::default())
}
