//! Output formatting for transform results - plaintext and JSON.

use serde::Serialize;

/// What one transform pass did to a compile unit.
///
/// Counters are reporting data only; dead-reference decisions are always
/// made from freshly enumerated reference sets, never from these counts.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TransformReport {
    /// Generation calls replaced with string literals.
    pub calls_rewritten: usize,
    /// Subset of rewritten calls that went through a whole-module alias.
    pub member_calls_rewritten: usize,
    /// Intermediate options declarators removed.
    pub declarators_removed: usize,
    /// Import specifiers and destructured pattern properties dropped.
    pub specifiers_removed: usize,
    /// Whole import/require statements removed.
    pub statements_removed: usize,
}

impl TransformReport {
    /// Whether the pass changed the tree at all.
    pub fn changed(&self) -> bool {
        self.calls_rewritten > 0
            || self.declarators_removed > 0
            || self.specifiers_removed > 0
            || self.statements_removed > 0
    }

    /// Fold another unit's report into this one.
    pub fn merge(&mut self, other: &TransformReport) {
        self.calls_rewritten += other.calls_rewritten;
        self.member_calls_rewritten += other.member_calls_rewritten;
        self.declarators_removed += other.declarators_removed;
        self.specifiers_removed += other.specifiers_removed;
        self.statements_removed += other.statements_removed;
    }
}

/// Prints a transform report in plain text format.
pub fn print_plain(report: &TransformReport) {
    if !report.changed() {
        println!("No selector calls transformed.");
        return;
    }
    println!("TRANSFORMED:");
    println!("- calls rewritten: {}", report.calls_rewritten);
    println!(
        "- member-access calls: {}",
        report.member_calls_rewritten
    );
    println!("- declarators removed: {}", report.declarators_removed);
    println!("- specifiers removed: {}", report.specifiers_removed);
    println!("- statements removed: {}", report.statements_removed);
}

/// Prints a transform report in JSON format.
///
/// Falls back to debug formatting if serialization fails (should never
/// happen with plain counters, but all cases are handled).
pub fn print_json(report: &TransformReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{:?}", report);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_unchanged() {
        assert!(!TransformReport::default().changed());
    }

    #[test]
    fn test_merge_accumulates() {
        let mut total = TransformReport::default();
        let unit = TransformReport {
            calls_rewritten: 2,
            member_calls_rewritten: 1,
            declarators_removed: 1,
            specifiers_removed: 1,
            statements_removed: 1,
        };
        total.merge(&unit);
        total.merge(&unit);
        assert_eq!(total.calls_rewritten, 4);
        assert_eq!(total.member_calls_rewritten, 2);
        assert!(total.changed());
    }

    #[test]
    fn test_serializes_to_json() {
        let report = TransformReport {
            calls_rewritten: 1,
            ..Default::default()
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"calls_rewritten\":1"));
    }
}
