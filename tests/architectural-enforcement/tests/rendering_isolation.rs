//! Integration Test: Rendering Isolation
//!
//! **Policy**: `core/src` must not mention ratatui or crossterm. The core
//! crate is the headless interaction model; it produces tagged spans and
//! never decides what a color looks like or how a key event is encoded.
//! Everything rendering-related belongs in `tui/src`.

use std::fs;
use std::path::Path;

use architectural_enforcement::{production_portion, workspace_root};

const FORBIDDEN: [&str; 2] = ["ratatui", "crossterm"];

#[test]
fn test_core_has_no_rendering_dependencies() {
    let core_src = workspace_root().join("core/src");
    assert!(core_src.exists(), "core/src not found at {}", core_src.display());

    let mut violations = Vec::new();

    for entry in walkdir::WalkDir::new(&core_src)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) == Some("rs") {
            check_file(entry.path(), &mut violations);
        }
    }

    // The core manifest must not carry them either
    check_file(&workspace_root().join("core/Cargo.toml"), &mut violations);

    assert!(
        violations.is_empty(),
        "\nRendering dependencies leaked into the headless core:\n  {}\n\
         Styling and key encoding belong in tui/src.\n",
        violations.join("\n  ")
    );
}

fn check_file(path: &Path, violations: &mut Vec<String>) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for (idx, line) in production_portion(&content).lines().enumerate() {
        // Doc comments may name the crates when stating the policy itself
        let trimmed = line.trim_start();
        if trimmed.starts_with("//") || trimmed.starts_with("#") {
            continue;
        }
        let code_part = line.split("//").next().unwrap_or(line);
        for name in FORBIDDEN {
            if code_part.contains(name) {
                violations.push(format!("{}:{} - {}", path.display(), idx + 1, line.trim()));
            }
        }
    }
}
