//! scenery CLI - generate scene batches and run the transform pipeline.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use scenery_ir::{ObjectBatch, TransformedDocument};
use scenery_pipeline::{random_objects, GeneratorSettings, Pipeline, PipelineConfig};

/// File name of the generated batch inside a `run` directory.
const INPUT_FILE: &str = "random_3d_objects.json";
/// File name of the transformed document inside a `run` directory.
const OUTPUT_FILE: &str = "transformed_points.json";

#[derive(Parser)]
#[command(name = "scenery")]
#[command(about = "Generate random 3D scenes and apply randomized transforms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of random objects
    Generate {
        /// Output .json file
        output: PathBuf,
        /// Number of objects to generate
        #[arg(short, long, default_value_t = 2)]
        count: usize,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Apply a random scale, rotation and translation to a batch
    Transform {
        /// Input batch .json file
        input: PathBuf,
        /// Output document .json file
        output: PathBuf,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
        /// Pipeline configuration (.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Generate a batch into DIR and transform it in one go
    Run {
        /// Directory receiving both documents
        dir: PathBuf,
        /// Number of objects to generate
        #[arg(short, long, default_value_t = 2)]
        count: usize,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
        /// Pipeline configuration (.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Display information about a scene document
    Info {
        /// Path to an input batch or transformed document
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            count,
            seed,
        } => {
            let mut rng = make_rng(seed);
            generate(&output, count, &mut rng)?;
        }
        Commands::Transform {
            input,
            output,
            seed,
            config,
        } => {
            let pipeline = load_pipeline(config.as_deref())?;
            let mut rng = make_rng(seed);
            transform(&pipeline, &input, &output, &mut rng)?;
        }
        Commands::Run {
            dir,
            count,
            seed,
            config,
        } => {
            let pipeline = load_pipeline(config.as_deref())?;
            let mut rng = make_rng(seed);
            fs::create_dir_all(&dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            let input = dir.join(INPUT_FILE);
            let output = dir.join(OUTPUT_FILE);
            generate(&input, count, &mut rng)?;
            transform(&pipeline, &input, &output, &mut rng)?;
        }
        Commands::Info { file } => {
            show_info(&file)?;
        }
    }

    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::debug!("seeding rng with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn load_pipeline(config: Option<&Path>) -> Result<Pipeline> {
    let config = match config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            PipelineConfig::from_toml_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => PipelineConfig::default(),
    };
    Ok(Pipeline::new(config)?)
}

fn generate(output: &Path, count: usize, rng: &mut StdRng) -> Result<()> {
    let settings = GeneratorSettings {
        count,
        ..Default::default()
    };
    let batch = random_objects(rng, &settings)?;
    fs::write(output, batch.to_json()?)
        .with_context(|| format!("writing {}", output.display()))?;
    println!(
        "Generated {} object(s) to {}",
        batch.objects.len(),
        output.display()
    );
    Ok(())
}

fn transform(pipeline: &Pipeline, input: &Path, output: &Path, rng: &mut StdRng) -> Result<()> {
    let json =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let batch = ObjectBatch::from_json(&json)
        .with_context(|| format!("parsing {}", input.display()))?;

    let doc = pipeline
        .run(&batch.objects, rng)
        .with_context(|| format!("transforming {}", input.display()))?;

    fs::write(output, doc.to_json()?)
        .with_context(|| format!("writing {}", output.display()))?;
    println!(
        "Transformed {} object(s) from {} to {}",
        doc.objects.len(),
        input.display(),
        output.display()
    );
    Ok(())
}

fn show_info(file: &Path) -> Result<()> {
    let json = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;

    // Input batches are bare arrays, output documents are objects.
    let (objects, summary) = if json.trim_start().starts_with('[') {
        let batch = ObjectBatch::from_json(&json)
            .with_context(|| format!("parsing {}", file.display()))?;
        (batch.objects, None)
    } else {
        let doc = TransformedDocument::from_json(&json)
            .with_context(|| format!("parsing {}", file.display()))?;
        (doc.objects, Some(doc.transformations))
    };

    println!("scene document: {}", file.display());
    println!("  Objects: {}", objects.len());

    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    for obj in &objects {
        *by_kind.entry(obj.kind.as_str()).or_default() += 1;
    }
    for (kind, n) in by_kind {
        println!("    {}: {}", kind, n);
    }

    if let Some(s) = summary {
        println!("\nTransformations:");
        println!("  Scale factors: {:?}", s.scale_factors);
        println!(
            "  Rotation angles: x={} y={} z={}",
            s.rotation_angles.x, s.rotation_angles.y, s.rotation_angles.z
        );
        println!("  Translation: {:?}", s.translation_vector);
    }

    Ok(())
}
