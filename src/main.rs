use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use kmeans_bmp::{
    DEFAULT_MAX_ITERATIONS, KMeansConfig, RunReport, bmp, checksum, file_digest, kmeans,
};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "kmeans-bmp",
    version,
    about = "Reduce a 24-bit BMP to K colors with k-means clustering"
)]
struct Cli {
    /// Input BMP path
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output BMP path
    #[arg(value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Number of colors (1-255)
    #[arg(value_parser = clap::value_parser!(u8).range(1..))]
    k: u8,

    /// Stop after this many passes even if colors are still moving
    #[arg(long = "max-iterations", default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Write a JSON run report to this path
    #[arg(long = "report", value_hint = ValueHint::FilePath)]
    report: Option<PathBuf>,

    /// Print the SHA-256 digest of the written output
    #[arg(long = "digest")]
    digest: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start_time = Instant::now();

    info!("Input image: {}", cli.input.display());
    info!("Output image: {}", cli.output.display());
    info!("Clusters (k): {}", cli.k);

    let image = bmp::load(&cli.input)
        .with_context(|| format!("Failed to read image: {}", cli.input.display()))?;
    info!(
        "Read {}x{} image ({} pixels)",
        image.width(),
        image.height(),
        image.pixel_count()
    );

    let config = KMeansConfig::new(usize::from(cli.k)).max_iterations(cli.max_iterations);
    let result = kmeans(&image.pixels, &config).context("Clustering failed")?;

    bmp::save(&cli.output, &image, &result.centroids)
        .with_context(|| format!("Failed to write image: {}", cli.output.display()))?;

    let sum = checksum(&result.centroids);
    let status = if result.converged { "converged" } else { "cap reached" };
    println!("Iterations: {} ({})", result.iterations, status);
    println!("Checksum:   0x{:08x} ({})", sum, sum);

    if cli.digest {
        println!("SHA-256:    {}", file_digest(&cli.output)?);
    }

    if let Some(report_path) = &cli.report {
        RunReport::new(&cli.input, &cli.output, image.width(), image.height(), &result)
            .write_to_file(report_path)?;
        info!("Report written to {}", report_path.display());
    }

    info!("Done in {:.3}s", start_time.elapsed().as_secs_f64());
    Ok(())
}
