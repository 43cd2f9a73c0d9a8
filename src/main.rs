use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context as _, Result};
use clap::Parser;
use convex_mwt::loader::{self, BinaryFileLoader, Loader};
use convex_mwt::{render, Builder, CostTable, Observer, Triangulation};
use tracing_subscriber::EnvFilter;

/// Minimum-weight triangulation of a convex polygon
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Binary problem file: i32 vertex count, then f32 (x, y) pairs in counter-clockwise order
    input: PathBuf,

    /// Where to write the cost and the triangle indices
    output: Option<PathBuf>,

    /// Also render the triangulation as an SVG file
    #[arg(short = 'o', long = "output-image", value_name = "IMAGE_PATH")]
    output_image: Option<PathBuf>,

    /// Worker threads, defaults to one per core
    #[arg(long)]
    threads: Option<usize>,

    /// Reject input that is not a convex counter-clockwise polygon
    #[arg(long, default_value = "false")]
    check_convex: bool,
}

/// Logs solver progress, the library itself stays silent
struct LogObserver {
    started: Instant,
}

impl Observer for LogObserver {
    fn distances_done(&mut self, table: &CostTable) {
        tracing::info!(
            vertices = table.vertices(),
            cells = table.layout().len(),
            elapsed = ?self.started.elapsed(),
            "distances filled"
        );
    }

    fn level_filled(&mut self, diff: usize, _table: &CostTable) {
        tracing::debug!(diff, elapsed = ?self.started.elapsed(), "level filled");
    }

    fn solved(&mut self, table: &CostTable) {
        tracing::info!(cost = table.cost(), elapsed = ?self.started.elapsed(), "table solved");
    }

    fn extracted(&mut self, triangulation: &Triangulation) {
        tracing::info!(triangles = triangulation.len(), "triangles extracted");
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too
            let code = if err.use_stderr() { 1 } else { 0 };
            err.print().ok();
            return ExitCode::from(code);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    tracing::info!(input = ?args.input, output = ?args.output, image = ?args.output_image, "run");
    let start = Instant::now();

    let points = BinaryFileLoader::default()
        .load(&args.input)
        .with_context(|| format!("cannot read the problem from {}", args.input.display()))?;

    let mut builder = Builder::new(points.clone()).check_convex(args.check_convex);
    if let Some(threads) = args.threads {
        builder = builder.threads(threads);
    }
    let triangulation = builder
        .build()?
        .triangulate_with_observer(&mut LogObserver { started: start })?;
    let duration = start.elapsed();

    if let Some(output) = &args.output {
        loader::save_result(output, &triangulation)
            .with_context(|| format!("cannot write the result to {}", output.display()))?;
    }

    if let Some(image) = &args.output_image {
        render::save_svg(&points, triangulation.triangles(), image)
            .with_context(|| format!("cannot write the image to {}", image.display()))?;
    }

    println!("Cost of triangulation: {}", triangulation.cost());
    println!("computational time: {} s", duration.as_secs_f64());
    Ok(())
}
