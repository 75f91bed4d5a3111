use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use clusterviz::{assemble, load_dataset, HtmlRenderer, Renderer, DEFAULT_RESOLUTION};

/// Animated 3D visualization of an iterative clustering run
#[derive(Parser, Debug)]
#[command(name = "clusterviz", version, about)]
struct Cli {
    /// Source directory to load data from
    #[arg(short, long)]
    dir: PathBuf,

    /// Number of iteration steps for which centroids and covariances were computed
    #[arg(short, long)]
    steps: usize,

    /// Maximum number of samples to draw (keeps the heaviest)
    #[arg(short, long)]
    maxsamples: Option<usize>,

    /// Output HTML path
    #[arg(short, long, default_value = "clusterviz.html")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let start_time = Instant::now();
    println!("=== clusterviz: EM Clustering Visualization ===\n");

    // Step 1: Load the dataset
    let step1_start = Instant::now();
    println!("Step 1: Loading data from {}...", cli.dir.display());
    let mut dataset = load_dataset(&cli.dir, cli.steps)
        .with_context(|| format!("Failed to load dataset from {}", cli.dir.display()))?;

    if let Some(max) = cli.maxsamples {
        let before = dataset.samples.len();
        dataset.retain_heaviest(max);
        if dataset.samples.len() < before {
            println!(
                "  Capped point cloud: {} of {} samples kept",
                dataset.samples.len(),
                before
            );
        }
    }

    println!(
        "✓ Loaded {} samples, {} clusters, {} steps [{:.2}s]\n",
        dataset.samples.len(),
        dataset.cluster_count(),
        dataset.num_steps(),
        step1_start.elapsed().as_secs_f64()
    );

    // Step 2: Build geometry and frames
    let step2_start = Instant::now();
    println!("Step 2: Assembling scene...");
    let figure = assemble(&dataset, DEFAULT_RESOLUTION).context("Failed to assemble scene")?;
    println!(
        "✓ {} traces, {} frames [{:.2}s]\n",
        figure.data.len(),
        figure.frames.len(),
        step2_start.elapsed().as_secs_f64()
    );

    // Step 3: Render
    let step3_start = Instant::now();
    println!("Step 3: Rendering to {}...", cli.out.display());
    HtmlRenderer::new(&cli.out).render(&figure)?;
    println!(
        "✓ Rendering requested [{:.2}s]\n",
        step3_start.elapsed().as_secs_f64()
    );

    println!("=== Summary ===");
    println!("Samples:      {}", dataset.samples.len());
    println!("Clusters:     {}", dataset.cluster_count());
    println!("Frames:       {}", figure.frames.len());
    println!(
        "Reference:    {}",
        if dataset.reference.is_some() {
            "overlay included"
        } else {
            "none"
        }
    );
    println!("Output:       {}", cli.out.display());
    println!(
        "Total:        {:.3}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
