mod cli;

use mediatriage::catalog::{CatalogSource, JsonManifest, MediaFile};
use mediatriage::inspector::{Inspector, Report};
use mediatriage::{config, executor, handoff, planner};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediatriage=trace".to_string()
        } else {
            "mediatriage=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Scan {
            manifest,
            root,
            json,
        } => scan(cli.config.as_deref(), manifest, root, json),
        Commands::Inspect {
            file,
            manifest,
            json,
        } => inspect(cli.config.as_deref(), manifest, &file, json),
        Commands::Plan {
            file,
            set,
            manifest,
            json,
        } => plan(cli.config.as_deref(), manifest, &file, &set, json),
        Commands::Handoff { file } => print_handoff(cli.config.as_deref(), &file),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("mediatriage {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// JSON shape for `scan --json` and `inspect --json`.
#[derive(serde::Serialize)]
struct TriageEntry<'a> {
    name: &'a str,
    path: &'a Path,
    size_gib: f64,
    format: &'a str,
    triage: &'a Report,
}

impl<'a> TriageEntry<'a> {
    fn new(file: &'a MediaFile, triage: &'a Report) -> Self {
        Self {
            name: &file.name,
            path: &file.path,
            size_gib: file.size_gib(),
            format: &file.format,
            triage,
        }
    }
}

fn load_catalog(
    config: &config::Config,
    manifest: Option<PathBuf>,
    root: Option<PathBuf>,
) -> Result<Vec<MediaFile>> {
    let manifest = manifest
        .or_else(|| config.catalog.manifest.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("No catalog manifest given and none configured under [catalog]")
        })?;

    let mut source = JsonManifest::new(&manifest);
    if let Some(root) = root.or_else(|| config.catalog.root.clone()) {
        source = source.with_root(root);
    }

    tracing::info!("Loading catalog manifest {:?}", manifest);
    Ok(source.load()?)
}

fn find_entry<'a>(files: &'a [MediaFile], wanted: &Path) -> Result<&'a MediaFile> {
    files
        .iter()
        .find(|f| f.path == wanted || f.name == wanted.to_string_lossy())
        .ok_or_else(|| anyhow::anyhow!("No catalog entry for {:?}", wanted))
}

fn scan(
    config_path: Option<&Path>,
    manifest: Option<PathBuf>,
    root: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let files = load_catalog(&config, manifest, root)?;
    let inspector = Inspector::with_limits(config.limits.clone());

    let reports: Vec<Report> = files.iter().map(|f| inspector.classify(f)).collect();

    if json {
        let entries: Vec<TriageEntry> = files
            .iter()
            .zip(&reports)
            .map(|(f, r)| TriageEntry::new(f, r))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Found {} files", files.len());
    for (file, report) in files.iter().zip(&reports) {
        let marker = if report.is_clean() { "✓" } else { "⚠" };
        println!(
            "{} {} [{:.1} GB, {}]",
            marker,
            file.name,
            file.size_gib(),
            file.format
        );
        for action in report.actions() {
            for reason in report.reasons_for(action) {
                println!("    {}: {}", action, reason.detail);
            }
        }
    }

    let flagged = reports.iter().filter(|r| !r.is_clean()).count();
    println!("\n{} of {} files need attention", flagged, files.len());

    Ok(())
}

fn inspect(
    config_path: Option<&Path>,
    manifest: Option<PathBuf>,
    file: &Path,
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let files = load_catalog(&config, manifest, None)?;
    let entry = find_entry(&files, file)?;

    let inspector = Inspector::with_limits(config.limits.clone());
    let report = inspector.classify(entry);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&TriageEntry::new(entry, &report))?
        );
        return Ok(());
    }

    println!("File: {}", entry.path.display());
    println!("Container: {}", entry.format);
    println!("Size: {:.1} GB ({} bytes)", entry.size_gib(), entry.size);

    println!("\nAudio Tracks: {}", entry.audio_tracks.len());
    for (i, track) in entry.audio_tracks.iter().enumerate() {
        print!("  [{}] {} ({})", i, track.codec, track.language);
        if let Some(channels) = track.channels {
            print!(" {}ch", channels);
        }
        println!();
    }

    println!("\nSubtitle Tracks: {}", entry.subtitle_tracks.len());
    for (i, track) in entry.subtitle_tracks.iter().enumerate() {
        println!("  [{}] {} ({})", i, track.codec, track.language);
    }

    if report.is_clean() {
        println!("\nNo remediation needed");
    } else {
        println!("\nRemediation needed:");
        for action in report.actions() {
            for reason in report.reasons_for(action) {
                println!("  {}: {}", action, reason.detail);
            }
        }
    }

    Ok(())
}

fn plan(
    config_path: Option<&Path>,
    manifest: Option<PathBuf>,
    file: &Path,
    set: &[String],
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let files = load_catalog(&config, manifest, None)?;
    let entry = find_entry(&files, file)?;

    let mut requested: HashMap<String, String> = HashMap::new();
    for pair in set {
        let (track, language) = pair.split_once('=').ok_or_else(|| {
            anyhow::anyhow!("Expected TRACK=LANG (e.g. audio_0=eng), got '{}'", pair)
        })?;
        if let Some(previous) = requested.insert(track.to_string(), language.to_string()) {
            if previous != language {
                anyhow::bail!("Conflicting assignments for '{}'", track);
            }
        }
    }

    let plan = planner::build_plan(entry, &requested)?;
    let command = executor::remux_arguments(&plan);

    if json {
        let out = serde_json::json!({ "plan": &plan, "command": &command });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if plan.is_empty() {
        println!("Nothing to do: no assignments and no unknown-language tracks");
        return Ok(());
    }

    println!(
        "Plan for {} ({} assignment(s)):",
        plan.path().display(),
        plan.len()
    );
    for assignment in plan.assignments() {
        println!("  {} -> {}", assignment.track, assignment.language);
    }

    println!("\nRemux command:");
    println!("  ffmpeg {}", command.join(" "));

    Ok(())
}

fn print_handoff(config_path: Option<&Path>, file: &Path) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    println!("{}", handoff::reencode_url(&config.tool.endpoint, file));
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Re-encode tool endpoint: {}", config.tool.endpoint);
            println!("  Size threshold: {} GiB", config.limits.max_size_gib);
            println!(
                "  Supported containers: {}",
                config.limits.supported_containers.join(", ")
            );
            match &config.catalog.manifest {
                Some(manifest) => println!("  Catalog manifest: {:?}", manifest),
                None => println!("  Catalog manifest: (none, pass one per command)"),
            }
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Re-encode tool endpoint: {}", config.tool.endpoint);
            println!("  Size threshold: {} GiB", config.limits.max_size_gib);
        }
    }

    Ok(())
}
