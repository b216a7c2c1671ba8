// Catsense CLI binary

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use walkdir::WalkDir;

use catsense::analysis::{AnalysisResult, Analyzer};
use catsense::config::AnalysisConfig;
use catsense::extract;
use catsense::features::FeatureRecord;
use catsense::report;

#[derive(Parser)]
#[command(name = "catsense")]
#[command(about = "Catsense - interpret cat vocalizations from audio and video", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file overriding analysis thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one audio recording
    Analyze {
        /// Audio file (wav, mp3, m4a, ...)
        path: PathBuf,
        /// Write the result as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Analyze a video: audio interpretation plus visual activity
    AnalyzeVideo {
        /// Video file (mp4, mov, ...)
        path: PathBuf,
        /// Write the result as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
        /// Cross-validate against the built-in heuristic classifier
        #[arg(long)]
        classifier: bool,
    },

    /// Analyze every media file under a directory
    Batch {
        /// Directory to scan
        path: PathBuf,
        /// Skip segments that do not look like cat vocalizations
        #[arg(long)]
        meows_only: bool,
        /// Write the combined report to this path instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Extract acoustic features only, as JSON
    Features {
        /// Media file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };
    let analyzer = Analyzer::new(config);

    match cli.command {
        Commands::Analyze { path, json } => cmd_analyze(&analyzer, &path, json.as_deref()),
        Commands::AnalyzeVideo {
            path,
            json,
            classifier,
        } => cmd_analyze_video(&analyzer, &path, json.as_deref(), classifier),
        Commands::Batch {
            path,
            meows_only,
            output,
        } => cmd_batch(&analyzer, &path, meows_only, output.as_deref()),
        Commands::Features { path } => cmd_features(&path),
    }
}

fn cmd_analyze(analyzer: &Analyzer, path: &Path, json: Option<&Path>) -> Result<()> {
    let result = analyze_audio_file(analyzer, path)?;
    finish(&result, json)
}

fn cmd_analyze_video(
    analyzer: &Analyzer,
    path: &Path,
    json: Option<&Path>,
    classifier: bool,
) -> Result<()> {
    let raw = extract::extract_features(path)?;
    let features = FeatureRecord::from_raw(&raw)?;
    let stride = analyzer.config().motion.sample_stride;
    let motion = extract::extract_motion(path, stride)?;
    let opinion = classifier.then(|| analyzer.classifier_opinion(&features, Some(&motion)));
    let result = analyzer.analyze_video(&features, &motion, opinion, &path.display().to_string());
    finish(&result, json)
}

fn cmd_batch(
    analyzer: &Analyzer,
    root: &Path,
    meows_only: bool,
    output: Option<&Path>,
) -> Result<()> {
    let mut results: Vec<AnalysisResult> = Vec::new();
    let mut failures: Vec<(String, String)> = Vec::new();
    let mut skipped = 0usize;

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !extract::is_media_file(path) {
            continue;
        }

        let source = path.display().to_string();
        let outcome = if extract::is_video_file(path) {
            analyze_video_file(analyzer, path)
        } else {
            analyze_audio_file(analyzer, path)
        };

        // One bad file never aborts the batch
        match outcome {
            Ok(result) => {
                if meows_only && !result.features.is_plausible_meow() {
                    log::info!("Skipping {}: does not look like a cat vocalization", source);
                    skipped += 1;
                    continue;
                }
                results.push(result);
            }
            Err(e) => {
                log::warn!("Failed to analyze {}: {}", source, e);
                failures.push((source, e.to_string()));
            }
        }
    }

    let text = report::render_batch_report(&results, &failures);
    match output {
        Some(path) => {
            std::fs::write(path, &text)?;
            println!(
                "Report written to {} ({} analyzed, {} failed, {} skipped)",
                path.display(),
                results.len(),
                failures.len(),
                skipped
            );
        }
        None => println!("{}", text),
    }

    Ok(())
}

fn cmd_features(path: &Path) -> Result<()> {
    let raw = extract::extract_features(path)?;
    println!("{}", serde_json::to_string_pretty(&raw)?);
    Ok(())
}

fn analyze_audio_file(analyzer: &Analyzer, path: &Path) -> catsense::Result<AnalysisResult> {
    let raw = extract::extract_features(path)?;
    let features = FeatureRecord::from_raw(&raw)?;
    Ok(analyzer.analyze(&features, &path.display().to_string()))
}

fn analyze_video_file(analyzer: &Analyzer, path: &Path) -> catsense::Result<AnalysisResult> {
    let raw = extract::extract_features(path)?;
    let features = FeatureRecord::from_raw(&raw)?;
    let stride = analyzer.config().motion.sample_stride;
    let motion = extract::extract_motion(path, stride)?;
    Ok(analyzer.analyze_video(&features, &motion, None, &path.display().to_string()))
}

fn finish(result: &AnalysisResult, json: Option<&Path>) -> Result<()> {
    println!("{}", report::render_result(result));
    if let Some(path) = json {
        report::save_result(result, path)?;
        println!();
        println!("Result written to {}", path.display());
    }
    Ok(())
}
