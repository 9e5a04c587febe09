/// Preview — interactive shell for trying tasks, themes and profiles.
///
/// Usage: preview [--themes <path>] [--seed <n>]
///
/// Commands:
///   quest <task...>             — analyze a task and generate a quest
///   theme <name>                — set preferred theme ('none' to clear)
///   priority <level>            — set priority (low, medium, high, urgent)
///   flags <stories,competitive,social|none> — set profile flags
///   suggest                     — suggest a next quest
///   seed <n>                    — set RNG seed
///   themes                      — list loaded themes
///   help                        — list commands
///   quit                        — exit

use clap::Parser;
use quest_engine::core::themes::ThemeSet;
use quest_engine::{MotivationProfile, Priority, Quest, QuestEngine, TaskAnalysis};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "preview", about = "Interactive quest generation shell")]
struct Args {
    /// RON theme file or directory of theme files
    #[arg(long)]
    themes: Option<String>,
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let extra_themes = match args.themes.as_deref() {
        Some(path) => load_themes_from_path(path),
        None => ThemeSet::default(),
    };

    let mut current_seed = args.seed;
    let mut engine = match build_engine(&extra_themes, current_seed) {
        Some(engine) => engine,
        None => std::process::exit(1),
    };

    println!("Loaded {} themes", engine.themes().len());
    println!("Seed: {}", current_seed);
    println!("Type 'help' for commands.\n");

    // Session state
    let mut profile = MotivationProfile::default();
    let mut priority = "medium".to_string();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
            None => (line.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "quest" => {
                if rest.is_empty() {
                    println!("Usage: quest <task description>");
                    continue;
                }
                let analysis = engine.analyze_task(rest);
                let quest = engine.generate_quest(rest, &analysis, &profile, &priority);
                print_quest(&analysis, &quest);
            }
            "theme" => {
                if rest.is_empty() {
                    println!(
                        "Current theme: {}",
                        profile.preferred_theme.as_deref().unwrap_or("none (gaming)")
                    );
                    continue;
                }
                if rest == "none" {
                    profile.preferred_theme = None;
                    println!("Preferred theme cleared.");
                    continue;
                }
                if engine.themes().get(rest).is_none() {
                    println!("Theme '{}' is not loaded; quests will fall back to gaming.", rest);
                }
                profile.preferred_theme = Some(rest.to_string());
                println!("Preferred theme set to '{}'", rest);
            }
            "priority" => {
                if rest.is_empty() {
                    println!("Current priority: {}", priority);
                    continue;
                }
                if Priority::parse(rest).is_none() {
                    println!("Unknown priority '{}'; it will count as medium.", rest);
                }
                priority = rest.to_string();
                println!("Priority set to '{}'", priority);
            }
            "flags" => {
                if rest.is_empty() {
                    println!(
                        "stories={} competitive={} social={}",
                        profile.loves_stories, profile.competitive, profile.social_motivated
                    );
                    continue;
                }
                profile.loves_stories = false;
                profile.competitive = false;
                profile.social_motivated = false;
                for flag in rest.split(',').map(str::trim).filter(|f| !f.is_empty()) {
                    match flag {
                        "stories" => profile.loves_stories = true,
                        "competitive" => profile.competitive = true,
                        "social" => profile.social_motivated = true,
                        "none" => {}
                        other => println!("Unknown flag: {}", other),
                    }
                }
                println!(
                    "stories={} competitive={} social={}",
                    profile.loves_stories, profile.competitive, profile.social_motivated
                );
            }
            "suggest" => {
                println!("Next up: {}", engine.suggest_next_quest());
            }
            "seed" => {
                if rest.is_empty() {
                    println!("Current seed: {}", current_seed);
                    continue;
                }
                match rest.parse::<u64>() {
                    Ok(s) => {
                        if let Some(rebuilt) = build_engine(&extra_themes, s) {
                            current_seed = s;
                            engine = rebuilt;
                            println!("Seed set to {}", current_seed);
                        }
                    }
                    Err(_) => {
                        println!("Invalid seed: {}", rest);
                    }
                }
            }
            "themes" => {
                for name in engine.themes().names() {
                    println!("  {}", name);
                }
            }
            other => {
                println!("Unknown command: {}. Type 'help' for commands.", other);
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn build_engine(extra_themes: &ThemeSet, seed: u64) -> Option<QuestEngine> {
    match QuestEngine::builder()
        .seed(seed)
        .with_themes(extra_themes.clone())
        .build()
    {
        Ok(engine) => Some(engine),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            None
        }
    }
}

fn load_themes_from_path(path: &str) -> ThemeSet {
    let mut themes = ThemeSet::default();
    let p = Path::new(path);
    if p.is_file() {
        match ThemeSet::load_from_ron(p) {
            Ok(set) => themes.merge(set),
            Err(e) => eprintln!("Warning: failed to load themes from {}: {}", path, e),
        }
    } else if p.is_dir() {
        if let Ok(entries) = std::fs::read_dir(p) {
            let mut paths: Vec<_> = entries.flatten().map(|e| e.path()).collect();
            paths.sort();
            for file in paths {
                if file.extension().and_then(|s| s.to_str()) == Some("ron") {
                    match ThemeSet::load_from_ron(&file) {
                        Ok(set) => themes.merge(set),
                        Err(e) => {
                            eprintln!("Warning: failed to load {}: {}", file.display(), e)
                        }
                    }
                }
            }
        }
    } else {
        eprintln!("Warning: theme path '{}' does not exist", path);
    }
    themes
}

fn print_quest(analysis: &TaskAnalysis, quest: &Quest) {
    println!("\n--- Analysis ---");
    println!(
        "category={} complexity={} difficulty={}",
        analysis.category.name(),
        analysis.complexity.name(),
        analysis.estimated_difficulty
    );
    println!("\n--- Quest {} ---", quest.id);
    println!("{}", quest.title);
    println!("{}", quest.description);
    println!("{}", quest.story);
    println!(
        "Difficulty: {}   Time: {} min   Motivation: {:.1}",
        quest.difficulty, quest.estimated_time, quest.motivation_score
    );
    println!("Rewards: {}", quest.rewards.join(", "));
    println!("--- End ---\n");
}

fn print_help() {
    println!("Commands:");
    println!("  quest <task...>               — analyze a task and generate a quest");
    println!("  theme <name|none>             — set preferred theme");
    println!("  priority <level>              — low, medium, high, urgent");
    println!("  flags <stories,competitive,social|none> — set profile flags");
    println!("  suggest                       — suggest a next quest");
    println!("  seed <n>                      — set RNG seed");
    println!("  themes                        — list loaded themes");
    println!("  help                          — show this help");
    println!("  quit                          — exit");
}
