//! Walks the production sources of the workspace.

use std::fs;
use std::path::{Path, PathBuf};

/// Crates whose `src/` trees are production code.
pub const PRODUCTION_CRATES: [&str; 3] = ["oogleg-core", "oogleg-web", "oogleg-cli"];

/// One production source file, with its `#[cfg(test)]` tail removed.
pub struct SourceFile {
    pub path: PathBuf,
    pub production_lines: Vec<(usize, String)>,
}

/// A line that breaks a style rule.
#[derive(Debug)]
pub struct Violation {
    pub file_path: String,
    pub line_number: usize,
    pub context: String,
}

/// Loads every `.rs` file under the production crates' `src/` directories.
pub fn production_sources() -> Vec<SourceFile> {
    let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    let mut files = Vec::new();
    for krate in PRODUCTION_CRATES {
        collect_rust_files(&workspace.join(krate).join("src"), &mut files);
    }

    files
        .into_iter()
        .map(|path| {
            let content = fs::read_to_string(&path).unwrap();
            SourceFile {
                production_lines: production_lines(&content),
                path,
            }
        })
        .collect()
}

fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rust_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

/// Numbered code lines before the first `#[cfg(test)]`, skipping comments.
pub fn production_lines(content: &str) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .map(|(index, line)| (index + 1, line.to_string()))
        .collect()
}

/// Collects every production line matching `rule`.
pub fn scan(rule: impl Fn(&str) -> bool) -> (usize, Vec<Violation>) {
    let sources = production_sources();
    let violations = sources
        .iter()
        .flat_map(|file| {
            file.production_lines
                .iter()
                .filter(|(_, line)| rule(line))
                .map(|(line_number, line)| Violation {
                    file_path: file.path.display().to_string(),
                    line_number: *line_number,
                    context: line.trim().to_string(),
                })
        })
        .collect();
    (sources.len(), violations)
}

/// Prints violations and the rule they broke.
pub fn report(rule: &str, files_checked: usize, violations: &[Violation]) {
    for violation in violations {
        println!("{}:{}", violation.file_path, violation.line_number);
        println!("  {}", violation.context);
    }
    println!(
        "{rule}: {} violation(s) in {files_checked} file(s) checked",
        violations.len()
    );
}

#[test]
fn test_production_lines_stop_at_test_module() {
    let content = "fn a() {}\n// note\n#[cfg(test)]\nmod tests { fn b() { x.unwrap(); } }\n";
    let lines = production_lines(content);
    assert_eq!(lines, vec![(1, "fn a() {}".to_string())]);
}

#[test]
fn test_workspace_sources_are_found() {
    let sources = production_sources();
    assert!(
        sources
            .iter()
            .any(|file| file.path.ends_with("oogleg-core/src/page.rs"))
    );
}
