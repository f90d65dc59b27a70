//! Dead code enforcement
//!
//! Unused production code is removed rather than silenced.

use super::sources::{report, scan};

fn allows_dead_code(line: &str) -> bool {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact.contains("#[allow(") && compact.contains("dead_code")
}

#[test]
fn test_allows_dead_code() {
    assert!(allows_dead_code("#[allow(dead_code)]"));
    assert!(allows_dead_code("#[allow(unused, dead_code)]"));
    assert!(!allows_dead_code("#[allow(clippy::too_many_arguments)]"));
    assert!(!allows_dead_code("let dead_code = 1;"));
}

#[test]
fn test_no_dead_code_allowances_in_production() {
    let (files_checked, violations) = scan(allows_dead_code);
    report("dead code allowance", files_checked, &violations);
    assert!(violations.is_empty());
}
