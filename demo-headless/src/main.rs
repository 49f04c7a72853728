use clap::Parser;
use ray_vec_core::sampling::{par_random_in_unit_sphere, par_random_unit_vector};
use ray_vec_core::{dot, reflect, refract, unit_vector, SamplerConfig, Vec3};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Vector sampling demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "demo-headless")]
#[command(about = "Ray tracing vector sampling demo", long_about = None)]
struct Args {
    /// Number of samples to draw
    #[arg(short = 'n', long, default_value_t = 100_000)]
    samples: usize,

    /// Seed for reproducible output (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Refractive index ratio for the refraction example
    #[arg(short, long, default_value_t = 1.0 / 1.5)]
    eta: f32,

    /// Maximum rejection-sampling draws per vector (0 = unbounded)
    #[arg(long, default_value_t = ray_vec_core::sampling::DEFAULT_MAX_REJECTION_ATTEMPTS)]
    max_attempts: u32,

    /// Write every unit-sphere sample to stdout as "x y z"
    #[arg(short, long)]
    dump: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = SamplerConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config = if args.max_attempts == 0 {
        config.unbounded()
    } else {
        config.with_max_rejection_attempts(args.max_attempts)
    };

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &SamplerConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(samples = args.samples, seed = ?config.seed, "Drawing unit-sphere samples");

    let points = par_random_in_unit_sphere(args.samples, config)?;
    let directions = par_random_unit_vector(args.samples, config)?;

    if !points.is_empty() {
        let n = points.len() as f32;
        let mean: Vec3 = points.iter().copied().sum::<Vec3>() / n;
        let mean_len = points.iter().map(Vec3::length).sum::<f32>() / n;
        // Uniform in the ball: E[|p|] = 3/4
        info!(
            mean = %format!("{mean:.4}"),
            mean_len,
            expected_len = 0.75,
            "Unit-sphere statistics"
        );

        let upper = directions.iter().filter(|d| d.z() > 0.0).count();
        info!(
            upper_fraction = upper as f32 / directions.len() as f32,
            "Unit-vector hemisphere split"
        );
    }

    let incident = unit_vector(Vec3::new(1.0, -1.0, 0.0));
    let normal = Vec3::new(0.0, 1.0, 0.0);
    let reflected = reflect(incident, normal);
    let refracted = refract(incident, normal, args.eta);
    let sin_out = refracted.x() / refracted.length();
    info!(
        incident = %incident,
        reflected = %reflected,
        refracted = %refracted,
        cos_out = -dot(unit_vector(refracted), normal),
        snell_ratio = sin_out / incident.x(),
        eta = args.eta,
        "Scattering example"
    );

    if args.dump {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        for p in &points {
            writeln!(out, "{p}")?;
        }
        out.flush()?;
    }

    Ok(())
}
