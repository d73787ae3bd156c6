//! Shallow scan: marker files, main-file candidates, line counts,
//! top-level directories.

use std::path::Path;

use walkdir::WalkDir;

use conductor_core::application::report::{AnalysisReport, MainFile};

use super::is_skipped_dir;

/// Marker file → tech-stack identifier.
const TECH_INDICATORS: [(&str, &str); 9] = [
    ("package.json", "Node.js/npm"),
    ("yarn.lock", "Yarn"),
    ("Cargo.toml", "Rust"),
    ("requirements.txt", "Python"),
    ("Gemfile", "Ruby"),
    ("pom.xml", "Java/Maven"),
    ("build.gradle", "Java/Gradle"),
    ("go.mod", "Go"),
    ("composer.json", "PHP"),
];

/// Base names probed (with every source extension) for the main file.
const MAIN_CANDIDATES: [&str; 8] = [
    "src/main", "src/index", "index", "main", "src/app", "app", "server", "src/server",
];

/// Extensions counted as source code.
const SOURCE_EXTENSIONS: [&str; 10] =
    ["js", "ts", "jsx", "tsx", "py", "rs", "go", "java", "php", "rb"];

const MAIN_FILE_CAP: usize = 3;
const TOP_DIR_CAP: usize = 10;

pub fn scan(root: &Path) -> AnalysisReport {
    AnalysisReport {
        tech_stack: detect_tech_stack(root),
        main_files: find_main_files(root),
        total_lines: count_lines(root),
        top_dirs: top_level_dirs(root),
        deep: None,
    }
}

fn detect_tech_stack(root: &Path) -> Vec<String> {
    TECH_INDICATORS
        .iter()
        .filter(|(marker, _)| root.join(marker).exists())
        .map(|(_, tech)| tech.to_string())
        .collect()
}

fn find_main_files(root: &Path) -> Vec<MainFile> {
    let mut found = Vec::new();
    for base in MAIN_CANDIDATES {
        for ext in SOURCE_EXTENSIONS {
            if found.len() >= MAIN_FILE_CAP {
                return found;
            }
            let rel = format!("{base}.{ext}");
            let path = root.join(&rel);
            if path.is_file() {
                found.push(MainFile {
                    path: rel,
                    lines: count_lines_in_file(&path),
                });
            }
        }
    }
    found
}

fn count_lines(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            // Keep the walk out of dependency and output directories.
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !is_skipped_dir(&entry.file_name().to_string_lossy())
        })
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
        })
        .map(|entry| count_lines_in_file(entry.path()))
        .sum()
}

fn count_lines_in_file(path: &Path) -> usize {
    std::fs::read_to_string(path)
        .map(|content| content.lines().count())
        .unwrap_or(0)
}

fn top_level_dirs(root: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };

    let mut dirs: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !is_skipped_dir(name))
        .collect();
    dirs.sort();
    dirs.truncate(TOP_DIR_CAP);
    dirs
}

// ── tests ─────────────────────────────────────────────────────────────────────
