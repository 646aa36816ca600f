//! Command-line front end for line fitting and clustering.
//!
//! # Usage
//!
//! ```bash
//! ganita fit data/line.txt --svg line.svg
//! ganita cluster data/clusters.txt -k 3 --seed 42 --svg clusters.svg
//! ganita --config my.yaml cluster data/clusters.txt -k 2
//! ```

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use ganita::{GanitaConfig, KmeansConfig};
use ganita::io::{self, SvgPlotConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fit lines and clusters to 2D point files", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// YAML configuration file (defaults to configs/config.yaml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the orthogonal line of best fit
    Fit {
        /// Point file (whitespace-separated x y pairs)
        file: PathBuf,

        /// Write a plot of the points and line to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Print the k-means cluster index of every point
    Cluster {
        /// Point file (whitespace-separated x y pairs)
        file: PathBuf,

        /// Number of clusters
        #[arg(short)]
        k: usize,

        /// RNG seed for a reproducible run (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of restarts (overrides the config file)
        #[arg(long)]
        restarts: Option<usize>,

        /// Write a plot of the clusters to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => GanitaConfig::load(path)?,
        None => GanitaConfig::load_default()?,
    };
    let plot = config.plot.to_svg_plot_config();

    match args.command {
        Commands::Fit { file, svg } => fit(&file, svg.as_deref(), &config, &plot),
        Commands::Cluster {
            file,
            k,
            seed,
            restarts,
            svg,
        } => {
            let mut kmeans = config.kmeans.clone();
            if let Some(seed) = seed {
                kmeans.seed = Some(seed);
            }
            if let Some(restarts) = restarts {
                kmeans.restarts = restarts;
            }
            kmeans.validate()?;
            cluster(&file, k, kmeans, svg.as_deref(), &plot)
        }
    }
}

fn fit(
    file: &Path,
    svg: Option<&Path>,
    config: &GanitaConfig,
    plot: &SvgPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let model = io::load_model(file, config.kmeans.clone())?;
    log::info!("Loaded {} points from {}", model.len(), file.display());

    let line = model.fit_line()?;
    println!("{}", line);

    if let Some(path) = svg {
        io::save(path, &io::render_line_fit(model.points(), &line, plot))?;
    }
    Ok(())
}

fn cluster(
    file: &Path,
    k: usize,
    kmeans: KmeansConfig,
    svg: Option<&Path>,
    plot: &SvgPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let model = io::load_model(file, kmeans)?;
    log::info!("Loaded {} points from {}", model.len(), file.display());

    let result = model.cluster(k)?;
    log::info!(
        "k={}: mean error {:.4} (restart {} of {})",
        k,
        result.mean_error,
        result.best_restart + 1,
        result.restart_errors.len()
    );

    for label in &result.assignments {
        println!("{}", label);
    }

    if let Some(path) = svg {
        let doc = io::render_clusters(model.points(), &result.assignments, &result.centroids, plot);
        io::save(path, &doc)?;
    }
    Ok(())
}
