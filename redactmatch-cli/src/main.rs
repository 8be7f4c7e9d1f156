use clap::Parser;
use redactmatch::candidate::rank_candidates;
use redactmatch::raster::io::has_image_extension;
use redactmatch::{
    apply_regions, load_rgb_image, masked_output_path, save_rgb_image, MatchCandidate,
    MatchConfig, MatchReport, Region, TemplateMatcher, TemplateRepository,
    DEFAULT_DARKNESS_THRESHOLD, DEFAULT_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Redactmatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    templates_dir: String,
    input_path: String,
    output_dir: Option<String>,
    report_path: Option<String>,
    threshold: f32,
    darkness_threshold: u8,
    parallel: bool,
    report_candidates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: String::new(),
            input_path: String::new(),
            output_dir: None,
            report_path: None,
            threshold: DEFAULT_THRESHOLD,
            darkness_threshold: DEFAULT_DARKNESS_THRESHOLD,
            parallel: false,
            report_candidates: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    category: String,
    template_id: String,
    score: f32,
}

impl From<&MatchCandidate> for MatchRecord {
    fn from(value: &MatchCandidate) -> Self {
        Self {
            category: value.category.clone(),
            template_id: value.template_id.clone(),
            score: value.score,
        }
    }
}

#[derive(Debug, Serialize)]
struct FileRecord {
    path: String,
    best: Option<MatchRecord>,
    regions: Vec<Region>,
    masked_path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    candidates: Vec<MatchCandidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FileRecord {
    fn failed(path: &Path, error: String) -> Self {
        Self {
            path: path.display().to_string(),
            best: None,
            regions: Vec::new(),
            masked_path: None,
            candidates: Vec::new(),
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    templates: usize,
    skipped_templates: Vec<String>,
    files: Vec<FileRecord>,
}

fn collect_inputs(input: &Path) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }
    WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && has_image_extension(path))
        .collect()
}

fn process_file(
    path: &Path,
    matcher: &TemplateMatcher,
    repository: &TemplateRepository,
    config: &Config,
) -> Result<FileRecord, Box<dyn std::error::Error>> {
    let mut image = load_rgb_image(path)?;
    let MatchReport {
        mut candidates,
        plan,
    } = matcher.report(&image, repository);

    let mut record = FileRecord {
        path: path.display().to_string(),
        best: plan.as_ref().map(|plan| MatchRecord::from(&plan.candidate)),
        regions: Vec::new(),
        masked_path: None,
        candidates: Vec::new(),
        error: None,
    };

    match plan {
        Some(plan) => {
            tracing::info!(
                file = %path.display(),
                template = %plan.candidate.template_id,
                score = plan.candidate.score,
                "matched"
            );
            if let Some(dir) = &config.output_dir {
                let out = masked_output_path(path, Path::new(dir));
                fs::create_dir_all(dir)?;
                apply_regions(&mut image, &plan.regions);
                save_rgb_image(&image, &out)?;
                record.masked_path = Some(out.display().to_string());
            }
            record.regions = plan.regions;
        }
        None => tracing::info!(file = %path.display(), "no matching template"),
    }

    if config.report_candidates {
        rank_candidates(&mut candidates);
        record.candidates = candidates;
    }
    Ok(record)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("redactmatch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.templates_dir.is_empty() || config.input_path.is_empty() {
        return Err("templates_dir and input_path must be set in the config".into());
    }
    if !(0.0..=1.0).contains(&config.threshold) {
        return Err("threshold must be within [0, 1]".into());
    }

    let repository = TemplateRepository::load(&config.templates_dir)?;
    let matcher = TemplateMatcher::new().with_config(MatchConfig {
        threshold: config.threshold,
        darkness_threshold: config.darkness_threshold,
        parallel: config.parallel,
    });

    let mut files = Vec::new();
    for path in collect_inputs(Path::new(&config.input_path)) {
        let record = match process_file(&path, &matcher, &repository, &config) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "failed to process");
                FileRecord::failed(&path, err.to_string())
            }
        };
        files.push(record);
    }

    let output = Output {
        templates: repository.len(),
        skipped_templates: repository
            .load_errors()
            .iter()
            .map(|err| err.to_string())
            .collect(),
        files,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.report_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
