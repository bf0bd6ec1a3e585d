use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use storyclust::{
    load_documents, ClusterReport, KMeans, KMeansConfig, ScoreSweep, TfIdfMatrix, TfIdfVectorizer,
};

#[derive(Parser)]
#[command(name = "storyclust", version, about = "Cluster user stories with TF-IDF and cosine k-means")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the TF-IDF table for a set of cleaned user stories
    Vectorize {
        /// Cleaned documents (.json array or .jsonl)
        #[arg(short, long)]
        input: PathBuf,
        /// Destination CSV
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Fit k-means once and write a cluster report
    Cluster {
        #[arg(short, long)]
        input: PathBuf,
        /// JSON file with clustering options
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short)]
        k: Option<usize>,
        #[arg(long)]
        tolerance: Option<f64>,
        #[arg(long)]
        max_iterations: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Destination JSON report (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Score a range of k values and write `k,SSE Score,MSC Score`
    Sweep {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 2)]
        k_min: usize,
        #[arg(long, default_value_t = 20)]
        k_max: usize,
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start_time = Instant::now();

    match cli.command {
        Command::Vectorize { input, output } => {
            let matrix = vectorize(&input)?;
            let file = File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            matrix.write_csv(BufWriter::new(file))?;
            println!(
                "✓ Wrote {} x {} TF-IDF table to {}",
                matrix.len(),
                matrix.dim(),
                output.display()
            );
        }
        Command::Cluster {
            input,
            config,
            k,
            tolerance,
            max_iterations,
            seed,
            output,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(k) = k {
                config.k = k;
            }
            if let Some(tolerance) = tolerance {
                config.tolerance = tolerance;
            }
            if let Some(max_iterations) = max_iterations {
                config.max_iterations = max_iterations;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }

            let matrix = vectorize(&input)?;
            let mut model = KMeans::new(config)?;
            model.fit(&matrix.rows)?;

            let report = ClusterReport::from_model(&model, &matrix)?;
            let json = serde_json::to_string_pretty(&report)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write report to {}", path.display()))?;
                    println!("✓ Wrote cluster report to {}", path.display());
                    println!("  State:      {:?}", report.state);
                    println!("  Iterations: {}", report.iterations);
                    println!("  SSE:        {:.6}", report.sse);
                    println!("  MSC:        {:.6}", report.msc);
                    for cluster in &report.clusters {
                        println!("    Cluster {}: {} stories", cluster.id, cluster.size);
                    }
                }
                None => println!("{}", json),
            }
        }
        Command::Sweep {
            input,
            config,
            k_min,
            k_max,
            output,
        } => {
            let base = load_config(config.as_deref())?;
            let matrix = vectorize(&input)?;
            let sweep = ScoreSweep::run(&matrix, &base, k_min..=k_max)?;

            let file = File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            sweep.write_csv(BufWriter::new(file))?;
            println!(
                "✓ Scored {} values of k, wrote {}",
                sweep.rows.len(),
                output.display()
            );
        }
    }

    tracing::info!("Total execution: {:.3}s", start_time.elapsed().as_secs_f64());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<KMeansConfig> {
    match path {
        Some(path) => KMeansConfig::from_file(path),
        None => Ok(KMeansConfig::default()),
    }
}

fn vectorize(input: &Path) -> Result<TfIdfMatrix> {
    let documents = load_documents(input)?;
    let (_, matrix) = TfIdfVectorizer::fit(&documents)
        .with_context(|| format!("Failed to vectorize {}", input.display()))?;
    tracing::info!(
        documents = matrix.len(),
        terms = matrix.dim(),
        "Vectorized corpus"
    );
    Ok(matrix)
}
