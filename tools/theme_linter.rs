/// Theme Linter — validates theme files for pool size and duplicates.
///
/// Usage: theme_linter <theme_file_or_dir>

use clap::Parser;
use quest_engine::core::themes::{ThemeSet, ThemeTemplate};
use rustc_hash::FxHashSet;
use std::path::Path;
use std::process;

/// Pools smaller than this repeat quickly.
const MIN_POOL_SIZE: usize = 3;

#[derive(Debug, Parser)]
#[command(name = "theme_linter", about = "Validate quest theme RON files")]
struct Args {
    /// RON theme file or directory of theme files
    path: String,
}

fn main() {
    let args = Args::parse();

    let mut themes = ThemeSet::default();
    let mut errors = Vec::new();
    let theme_path = Path::new(&args.path);

    if theme_path.is_file() {
        load_file(theme_path, &mut themes, &mut errors);
    } else if theme_path.is_dir() {
        load_themes_recursive(theme_path, &mut themes, &mut errors);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", args.path);
        process::exit(1);
    }

    println!("Loaded {} themes", themes.len());

    let mut warnings = Vec::new();
    for name in themes.names() {
        if let Some(theme) = themes.get(name) {
            lint_theme(theme, &mut warnings);
        }
    }

    println!("\n=== Theme Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn load_file(path: &Path, themes: &mut ThemeSet, errors: &mut Vec<String>) {
    match ThemeSet::load_from_ron(path) {
        Ok(set) => {
            println!("  Loaded: {}", path.display());
            themes.merge(set);
        }
        Err(e) => errors.push(format!("{}: {}", path.display(), e)),
    }
}

fn load_themes_recursive(dir: &Path, themes: &mut ThemeSet, errors: &mut Vec<String>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        let mut paths: Vec<_> = entries.flatten().map(|e| e.path()).collect();
        paths.sort();
        for path in paths {
            if path.is_dir() {
                load_themes_recursive(&path, themes, errors);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                load_file(&path, themes, errors);
            }
        }
    }
}

fn lint_theme(theme: &ThemeTemplate, warnings: &mut Vec<String>) {
    for (pool, entries) in theme.pools() {
        if entries.len() < MIN_POOL_SIZE {
            warnings.push(format!(
                "Theme '{}' has only {} {} (minimum {} recommended)",
                theme.name,
                entries.len(),
                pool,
                MIN_POOL_SIZE
            ));
        }

        let mut seen = FxHashSet::default();
        for entry in entries {
            if !seen.insert(entry.as_str()) {
                warnings.push(format!(
                    "Theme '{}' lists '{}' more than once in {}",
                    theme.name, entry, pool
                ));
            }
            if entry.trim().is_empty() {
                warnings.push(format!("Theme '{}' has a blank entry in {}", theme.name, pool));
            }
        }
    }
}
