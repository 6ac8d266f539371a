// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{info, warn, Level};

use scaleflow::catalog::{KeySignature, MAX_BPM, MIN_BPM, PITCH_STEPS, SLUR_PATTERNS, TEMPO_BANDS};
use scaleflow::config::{load_draft, AppConfig, FlowLibraryFile};
use scaleflow::flow::{validate_flow_draft, Flow, FlowDraftPatch, FlowStore, WizardStep};
use scaleflow::practice::{
    build_exercises, NotationRenderer, PracticeMode, PracticeRenderOptions, TextRenderer,
};
use scaleflow::{Clef, ScaleMode};

/// Name given to flows committed by `--practice`
const PRACTICE_FLOW_NAME: &str = "Practice";

fn print_usage() {
    println!("scaleflow - Scale Practice Flow Builder");
    println!();
    println!("Usage: scaleflow [--config <PATH>] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --list-options               List keys, clefs, modes, patterns, ranges and tempos");
    println!("  --list-flows                 List flows from the configured library");
    println!("  --steps                      List the wizard steps in order");
    println!("  --validate <DRAFT>           Validate a YAML draft file");
    println!("  --create <DRAFT> <NAME>      Commit a YAML draft as a named flow");
    println!("  --practice <DRAFT> [MODE]    Print practice scores (MODE: full, rhythm)");
    println!("  --help                       Show this help message");
}

fn init_logging(level: &str) {
    let level = Level::from_str(level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_store(config: &AppConfig) -> Result<FlowStore> {
    let Some(path) = &config.seed_library else {
        return Ok(FlowStore::new());
    };

    let library = FlowLibraryFile::load(path)?;
    for (id, errors) in library.invalid_flows() {
        let codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        warn!(%id, ?codes, "library flow does not validate");
    }
    info!(count = library.flows.len(), path = ?path, "flow library loaded");

    Ok(FlowStore::with_seed(library.flows))
}

fn list_options() {
    let keys: Vec<&str> = KeySignature::ALL.iter().map(|k| k.label()).collect();
    println!("Keys:     {}", keys.join(", "));
    let clefs: Vec<&str> = Clef::ALL.iter().map(|c| c.label()).collect();
    println!("Clefs:    {}", clefs.join(", "));
    let modes: Vec<&str> = ScaleMode::ALL.iter().map(|m| m.label()).collect();
    println!("Modes:    {}", modes.join(", "));

    println!("Patterns:");
    for pattern in SLUR_PATTERNS.iter() {
        let spans: Vec<String> = pattern
            .spans
            .iter()
            .map(|[start, end]| format!("{}-{}", start, end))
            .collect();
        println!("  {:<18} slurs {}", pattern.id.as_str(), spans.join(" "));
    }

    let steps: Vec<String> = PITCH_STEPS.iter().map(|s| s.label()).collect();
    println!("Range:    {}", steps.join(" "));

    println!("Tempo:    {}-{} bpm", MIN_BPM, MAX_BPM);
    for band in TEMPO_BANDS.iter() {
        println!("  {:<8} {}-{}", band.name, band.min, band.max);
    }
}

fn list_flows(store: &FlowStore) {
    let flows = store.flows();
    if flows.is_empty() {
        println!("No flows");
        return;
    }
    for flow in flows {
        println!(
            "{}  {:<24} {:>3}%  {}",
            flow.id, flow.name, flow.progress_percent, flow.config.tempo
        );
    }
}

fn print_steps() {
    for step in WizardStep::ALL {
        println!("{:>2}  {:<32} {}", step.index(), step.route(), step.title());
    }
}

fn validate_draft_file(path: &Path) -> Result<bool> {
    let draft = load_draft(path)?;
    let errors = validate_flow_draft(&draft);

    if errors.is_empty() {
        println!("valid");
        return Ok(true);
    }
    for error in &errors {
        println!("{:<22} {}", error.code(), error);
    }
    Ok(false)
}

/// Commit a draft file through the store, printing the message on rejection
fn commit_draft_file(store: &mut FlowStore, path: &Path, name: &str) -> Result<Option<Flow>> {
    let draft = load_draft(path)?;
    store.update_draft(FlowDraftPatch::from(draft));

    match store.create_flow(name) {
        Ok(flow) => Ok(Some(flow)),
        Err(err) => {
            eprintln!("{}", err);
            Ok(None)
        }
    }
}

fn practice(
    store: &mut FlowStore,
    config: &AppConfig,
    path: &Path,
    mode: PracticeMode,
) -> Result<bool> {
    let Some(flow) = commit_draft_file(store, path, PRACTICE_FLOW_NAME)? else {
        return Ok(false);
    };

    let mut renderer = TextRenderer::new();
    for exercise in build_exercises(&flow) {
        renderer
            .render_practice(&PracticeRenderOptions {
                exercise: &exercise,
                mode,
                width: config.practice.width,
                height: config.practice.height,
            })
            .with_context(|| format!("Failed to render {}", exercise))?;
        println!("{}", renderer.output());
    }
    Ok(true)
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().collect();

    let config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            if i + 1 >= args.len() {
                eprintln!("Error: --config requires a file path");
                std::process::exit(1);
            }
            let path = args.remove(i + 1);
            args.remove(i);
            AppConfig::load(&path)?
        }
        None => AppConfig::default(),
    };

    init_logging(&config.log_level);

    if args.len() < 2 {
        println!("scaleflow - Scale Practice Flow Builder");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let mut store = build_store(&config)?;

    match args[1].as_str() {
        "--list-options" => {
            list_options();
        }
        "--list-flows" => {
            list_flows(&store);
        }
        "--steps" => {
            print_steps();
        }
        "--validate" => {
            if args.len() < 3 {
                eprintln!("Error: --validate requires a draft file");
                std::process::exit(1);
            }
            if !validate_draft_file(Path::new(&args[2]))? {
                std::process::exit(1);
            }
        }
        "--create" => {
            if args.len() < 4 {
                eprintln!("Error: --create requires a draft file and a name");
                std::process::exit(1);
            }
            match commit_draft_file(&mut store, Path::new(&args[2]), &args[3])? {
                Some(flow) => print!("{}", serde_yaml::to_string(&flow)?),
                None => std::process::exit(1),
            }
        }
        "--practice" => {
            if args.len() < 3 {
                eprintln!("Error: --practice requires a draft file");
                std::process::exit(1);
            }
            let mode = match args.get(3) {
                Some(text) => match PracticeMode::parse(text) {
                    Some(mode) => mode,
                    None => {
                        eprintln!("Error: unknown practice mode: {}", text);
                        eprintln!("Use full or rhythm");
                        std::process::exit(1);
                    }
                },
                None => PracticeMode::default(),
            };
            if !practice(&mut store, &config, Path::new(&args[2]), mode)? {
                std::process::exit(1);
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            eprintln!("Run with --help for usage information");
            std::process::exit(1);
        }
    }

    Ok(())
}
