//! Panic-free production code
//!
//! Fallible operations propagate errors with `?`. Test modules may unwrap.

use super::sources::{report, scan};

const PANICKING_CALLS: [&str; 4] = [".unwrap()", ".expect(", "panic!(", "unimplemented!("];

fn panics(line: &str) -> bool {
    PANICKING_CALLS.iter().any(|call| line.contains(call))
}

#[test]
fn test_panics() {
    assert!(panics("let x = value.unwrap();"));
    assert!(panics("let x = value.expect(\"present\");"));
    assert!(!panics("let x = value.unwrap_or_default();"));
    assert!(!panics("let x = value.unwrap_or_else(|| 0);"));
}

#[test]
fn test_no_panicking_calls_in_production() {
    let (files_checked, violations) = scan(panics);
    report("panicking call", files_checked, &violations);
    assert!(violations.is_empty());
}
