//! Integration Test: Blocking I/O Prohibition
//!
//! **Policy**: Production code in the core and the TUI must not use
//! blocking I/O. The one file read of the session (the config load) goes
//! through `tokio::fs` so the event loop never stalls on disk.
//!
//! Acceptable exceptions:
//! - Test code
//! - Non-async functions that run before the runtime owns the thread

use std::fs;
use std::path::Path;

use architectural_enforcement::{production_portion, workspace_root};

#[test]
fn test_no_blocking_io_in_production_code() {
    let root = workspace_root();
    let mut violations = Vec::new();

    for dir in ["core/src", "tui/src"] {
        let path = root.join(dir);
        assert!(path.exists(), "{dir} not found at {}", path.display());

        for entry in walkdir::WalkDir::new(&path)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.path().extension().and_then(|s| s.to_str()) == Some("rs") {
                check_file(entry.path(), &mut violations);
            }
        }
    }

    assert!(
        violations.is_empty(),
        "\nBlocking I/O found in production code:\n  {}\n\
         Use tokio::fs / tokio::net instead of std::fs / std::net.\n",
        violations.join("\n  ")
    );
}

fn check_file(path: &Path, violations: &mut Vec<String>) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    let production = production_portion(&content);
    let lines: Vec<&str> = production.lines().collect();

    for (idx, line) in lines.iter().enumerate() {
        let code_part = line.split("//").next().unwrap_or(line);

        // Blocking I/O is acceptable outside the async runtime
        if is_in_non_async_function(&lines, idx) {
            continue;
        }

        let blocking = code_part.contains("std::fs::")
            || code_part.contains("use std::fs")
            || code_part.contains("std::net::")
            || code_part.contains("use std::net");

        if blocking {
            violations.push(format!(
                "{}:{} - {}",
                path.display(),
                idx + 1,
                line.trim()
            ));
        }
    }
}

/// Check if the line sits inside a non-async function
fn is_in_non_async_function(lines: &[&str], current_idx: usize) -> bool {
    for i in (0..current_idx).rev() {
        let line = lines[i].trim();

        if line.contains("async fn ") {
            return false;
        }
        if line.starts_with("fn ") || line.starts_with("pub fn ") {
            return true;
        }
        // Stop at module/impl boundaries
        if line.starts_with("mod ") || (line.starts_with("impl ") && line.contains('{')) {
            return false;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_async_function_detection() {
        let code = vec![
            "fn main() {",
            "    let contents = std::fs::read_to_string(\"config.yaml\");",
            "}",
        ];
        assert!(is_in_non_async_function(&code, 1));
    }

    #[test]
    fn test_async_function_detection() {
        let code = vec![
            "pub async fn load() {",
            "    let contents = std::fs::read_to_string(\"config.yaml\");",
            "}",
        ];
        assert!(!is_in_non_async_function(&code, 1));
    }
}
