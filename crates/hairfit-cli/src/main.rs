use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hairfit_core::advice::styling_advice;
use hairfit_core::fallback::simplified_from_image;
use hairfit_core::{
    analyze, recommend, AnalysisError, Catalog, FacialAnalysis, LandmarkProvider, Recommendation,
    SidecarProvider,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "hairfit", about = "Face-shape analysis and hairstyle recommendations")]
struct Cli {
    /// Hairstyle catalog TOML (overrides HAIRFIT_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a portrait and rank hairstyles for it
    Analyze {
        /// Portrait image
        image: PathBuf,
        /// Detections JSON from the landmark detector (default: sidecar next to the image)
        #[arg(short, long)]
        landmarks: Option<PathBuf>,
        /// Fail instead of falling back to the simplified estimate
        #[arg(long)]
        no_fallback: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the active hairstyle catalog
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Report<'a> {
    image: String,
    analysis: &'a FacialAnalysis,
    recommendation: &'a Recommendation,
    advice: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let catalog = load_catalog(cli.catalog.as_deref().or(config.catalog_path.as_deref()))?;

    match cli.command {
        Commands::Analyze {
            image,
            landmarks,
            no_fallback,
            json,
        } => run_analyze(&config, &catalog, &image, landmarks, !no_fallback && config.allow_fallback, json),
        Commands::Catalog { json } => run_catalog(&catalog, json),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("loading catalog {}", path.display()))?
        }
        None => Catalog::builtin().context("loading built-in catalog")?.clone(),
    };
    if catalog.is_empty() {
        tracing::warn!("hairstyle catalog is empty; no recommendations will be produced");
    }
    Ok(catalog)
}

fn run_analyze(
    config: &Config,
    catalog: &Catalog,
    image_path: &Path,
    landmarks: Option<PathBuf>,
    allow_fallback: bool,
    json: bool,
) -> Result<()> {
    let image = image::open(image_path)
        .with_context(|| format!("opening image {}", image_path.display()))?;

    let mut provider = match landmarks {
        Some(path) => SidecarProvider::new(path),
        None => SidecarProvider::for_image(image_path, &config.landmarks_suffix),
    };

    let attempt = provider
        .load()
        .map_err(AnalysisError::from)
        .and_then(|()| analyze(&mut provider, &image));

    let analysis = match attempt {
        Ok(analysis) => analysis,
        Err(e) if allow_fallback => {
            tracing::warn!(error = %e, "landmark analysis failed; falling back to simplified estimate");
            let mut rng = match config.fallback_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            simplified_from_image(&image, &mut rng)?
        }
        Err(e) => return Err(e).context("facial analysis failed"),
    };

    let recommendation = recommend(&analysis, catalog.entries());
    let advice = styling_advice(&analysis);

    if json {
        let report = Report {
            image: image_path.display().to_string(),
            analysis: &analysis,
            recommendation: &recommendation,
            advice,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_analysis(&analysis);
    println!();
    println!("Top recommendations:");
    for (rank, style) in recommendation.top_recommendations.iter().enumerate() {
        println!(
            "  {}. {:<18} {:>3}%  [{}]",
            rank + 1,
            style.name,
            style.match_score,
            style.category
        );
        for reason in &style.reasons_for_match {
            println!("       - {reason}");
        }
    }
    if recommendation.top_recommendations.is_empty() {
        println!("  (catalog is empty)");
    }
    println!();
    println!("Suggested color: {}", recommendation.suggested_color);
    println!();
    println!("{}", recommendation.explanation);
    println!();
    print!("{advice}");

    Ok(())
}

fn print_analysis(analysis: &FacialAnalysis) {
    if analysis.is_simplified() {
        println!("Facial analysis [SIMPLIFIED ESTIMATE - no landmarks, low confidence]");
    } else {
        println!("Facial analysis");
    }
    let p = &analysis.facial_proportions;
    println!("  Face shape:        {}", analysis.face_shape);
    println!("  Jawline strength:  {:.0}/100", analysis.jawline_strength);
    println!("  Forehead width:    {:.0}/100", analysis.forehead_width);
    println!("  Hairline position: {}", analysis.hairline_position);
    println!("  Confidence:        {}%", analysis.confidence);
    println!(
        "  Proportions:       length {:.1}, width {:.1}, jaw {:.1}, forehead {:.1}",
        p.face_length, p.face_width, p.jawline_width, p.forehead_area
    );
    if let Some(landmarks) = &analysis.raw_landmarks {
        println!("  Eye corner span:   {:.1}px", landmarks.inter_ocular_distance());
    }
}

fn run_catalog(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }

    for entry in catalog {
        let shapes: Vec<&str> = entry.compatible_shapes.iter().map(|s| s.as_str()).collect();
        println!(
            "{:>3}  {:<18} {:<7} jaw>={:<3.0} shapes: {}",
            entry.id,
            entry.name,
            entry.category,
            entry.jawline_required_threshold,
            shapes.join(", ")
        );
        if !entry.notes.is_empty() {
            println!("     {}", entry.notes);
        }
    }
    Ok(())
}
