pub mod report;
pub mod substitute;

pub use report::{changed_lines, unified_diff};
pub use substitute::{PatchRule, RuleOutcome, RuleSet, Substitution};
