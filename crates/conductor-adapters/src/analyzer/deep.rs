//! Deep scan: dependency manifests, frameworks, routes, components,
//! build scripts, schema artifacts.

use std::path::Path;

use walkdir::WalkDir;

use conductor_core::application::report::{DeepReport, RouteHit};

use super::is_skipped_dir;

/// Dependency name → framework identifier (version appended from the
/// manifest). Covers the common Node stacks plus the Rust web crates.
const FRAMEWORK_INDICATORS: [(&str, &str); 16] = [
    ("react", "React"),
    ("vue", "Vue"),
    ("@angular/core", "Angular"),
    ("svelte", "Svelte"),
    ("express", "Express"),
    ("fastify", "Fastify"),
    ("koa", "Koa"),
    ("next", "Next.js"),
    ("nuxt", "Nuxt"),
    ("tailwindcss", "Tailwind CSS"),
    ("prisma", "Prisma"),
    ("typescript", "TypeScript"),
    ("axum", "Axum"),
    ("actix-web", "Actix Web"),
    ("rocket", "Rocket"),
    ("tokio", "Tokio"),
];

/// Route-registration prefixes matched naively against JS/TS sources.
const ROUTE_PATTERNS: [(&str, &str); 8] = [
    ("app.get(", "GET"),
    ("app.post(", "POST"),
    ("app.put(", "PUT"),
    ("app.delete(", "DELETE"),
    ("router.get(", "GET"),
    ("router.post(", "POST"),
    ("router.put(", "PUT"),
    ("router.delete(", "DELETE"),
];

const ROUTE_FILE_CAP: usize = 20;
const COMPONENT_CAP: usize = 10;
const SCHEMA_CAP: usize = 5;

pub fn scan(root: &Path) -> DeepReport {
    let mut report = DeepReport::default();

    read_package_json(root, &mut report);
    read_cargo_toml(root, &mut report);
    report.frameworks = detect_frameworks(&report);
    report.endpoints = find_endpoints(root);
    report.components = map_components(root);
    report.schema_files = find_schema_files(root);

    report
}

/// Pull dependencies, devDependencies and scripts out of `package.json`.
fn read_package_json(root: &Path, report: &mut DeepReport) {
    let Ok(raw) = std::fs::read_to_string(root.join("package.json")) else {
        return;
    };
    let Ok(pkg) = serde_json::from_str::<serde_json::Value>(&raw) else {
        return;
    };

    report.dependencies.extend(json_string_map(&pkg, "dependencies"));
    report
        .dev_dependencies
        .extend(json_string_map(&pkg, "devDependencies"));
    report.build_scripts.extend(json_string_map(&pkg, "scripts"));
}

fn json_string_map(value: &serde_json::Value, key: &str) -> Vec<(String, String)> {
    let Some(map) = value.get(key).and_then(|v| v.as_object()) else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(name, v)| v.as_str().map(|s| (name.clone(), s.to_string())))
        .collect()
}

/// Pull `[dependencies]` and `[dev-dependencies]` out of `Cargo.toml`.
fn read_cargo_toml(root: &Path, report: &mut DeepReport) {
    let Ok(raw) = std::fs::read_to_string(root.join("Cargo.toml")) else {
        return;
    };
    let Ok(manifest) = raw.parse::<toml::Value>() else {
        return;
    };

    report
        .dependencies
        .extend(toml_dependency_table(&manifest, "dependencies"));
    report
        .dev_dependencies
        .extend(toml_dependency_table(&manifest, "dev-dependencies"));
}

fn toml_dependency_table(manifest: &toml::Value, key: &str) -> Vec<(String, String)> {
    let Some(table) = manifest.get(key).and_then(|v| v.as_table()) else {
        return Vec::new();
    };
    table
        .iter()
        .map(|(name, spec)| {
            // Either `name = "1.0"` or `name = { version = "1.0", .. }`.
            let version = spec
                .as_str()
                .or_else(|| spec.get("version").and_then(|v| v.as_str()))
                .unwrap_or("*");
            (name.clone(), version.to_string())
        })
        .collect()
}

fn detect_frameworks(report: &DeepReport) -> Vec<String> {
    let all_deps = report.dependencies.iter().chain(&report.dev_dependencies);

    let mut frameworks = Vec::new();
    for (name, version) in all_deps {
        if let Some((_, label)) = FRAMEWORK_INDICATORS.iter().find(|(dep, _)| dep == name) {
            frameworks.push(format!("{label} {version}"));
        }
    }
    frameworks
}

/// Naive route detection: scan up to [`ROUTE_FILE_CAP`] JS/TS files for
/// `app.<verb>('...')` style registrations.
fn find_endpoints(root: &Path) -> Vec<RouteHit> {
    let mut endpoints = Vec::new();
    let mut scanned = 0usize;

    for entry in walk_source(root) {
        if scanned >= ROUTE_FILE_CAP {
            break;
        }
        let ext = entry.path().extension().and_then(|e| e.to_str());
        if !matches!(ext, Some("js") | Some("ts")) {
            continue;
        }
        scanned += 1;

        let Ok(content) = std::fs::read_to_string(entry.path()) else {
            continue;
        };
        let rel = relative_name(root, entry.path());
        for (pattern, method) in ROUTE_PATTERNS {
            for route in extract_quoted_args(&content, pattern) {
                endpoints.push(RouteHit {
                    method: method.to_string(),
                    path: route,
                    file: rel.clone(),
                });
            }
        }
    }

    endpoints
}

/// Every quoted first argument following `pattern` in `content`.
fn extract_quoted_args(content: &str, pattern: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut rest = content;

    while let Some(idx) = rest.find(pattern) {
        rest = &rest[idx + pattern.len()..];
        let mut chars = rest.chars();
        let Some(quote) = chars.next() else { break };
        if quote == '\'' || quote == '"' || quote == '`' {
            if let Some(end) = rest[1..].find(quote) {
                args.push(rest[1..1 + end].to_string());
            }
        }
    }

    args
}

/// Group component files by UI-framework extension.
fn map_components(root: &Path) -> Vec<(String, Vec<String>)> {
    let mut react = Vec::new();
    let mut vue = Vec::new();
    let mut pages = Vec::new();

    for entry in walk_source(root) {
        let rel = relative_name(root, entry.path());
        let ext = entry.path().extension().and_then(|e| e.to_str());

        match ext {
            Some("jsx") | Some("tsx") if react.len() < COMPONENT_CAP => react.push(rel.clone()),
            Some("vue") if vue.len() < COMPONENT_CAP => vue.push(rel.clone()),
            _ => {}
        }
        if rel.contains("pages/") && pages.len() < COMPONENT_CAP {
            pages.push(rel);
        }
    }

    [("react", react), ("vue", vue), ("pages", pages)]
        .into_iter()
        .filter(|(_, files)| !files.is_empty())
        .map(|(group, files)| (group.to_string(), files))
        .collect()
}

/// Schema artifacts: an ORM schema file, SQL files, model files.
fn find_schema_files(root: &Path) -> Vec<String> {
    let mut found = Vec::new();

    if root.join("prisma/schema.prisma").is_file() {
        found.push("prisma/schema.prisma".to_string());
    }

    let mut sql = 0usize;
    let mut models = 0usize;
    for entry in walk_source(root) {
        let rel = relative_name(root, entry.path());
        let ext = entry.path().extension().and_then(|e| e.to_str());

        if ext == Some("sql") && sql < SCHEMA_CAP {
            sql += 1;
            found.push(rel);
        } else if rel.contains("models/") && models < SCHEMA_CAP {
            models += 1;
            found.push(rel);
        }
    }

    found
}

/// Walk regular files under `root`, pruning dependency/output directories.
fn walk_source(root: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !is_skipped_dir(&entry.file_name().to_string_lossy())
        })
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
}

fn relative_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

// ── tests ─────────────────────────────────────────────────────────────────────
