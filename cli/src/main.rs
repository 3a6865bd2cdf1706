use clap::{Parser, ValueEnum};
use closest_pair::pool_harness::PoolHarness;
use closest_pair::process_harness::ProcessHarness;
use closest_pair::thread_harness::ThreadHarness;
use closest_pair_core::config::Config;
use closest_pair_core::error::SearchError;
use closest_pair_core::generator;
use closest_pair_core::harness::ExecutionHarness;
use closest_pair_core::reduce::reduce;
use closest_pair_core::task::SearchTask;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Two isolated worker processes.
    Process,
    /// Two OS threads sharing the point set.
    Thread,
    /// A fixed pool of N worker tasks.
    Pool,
}

#[derive(Parser)]
#[command(author, version, about = "Parallel closest-pair search", long_about = None)]
struct Cli {
    /// Concurrency strategy for the search.
    #[arg(long, value_enum, default_value_t = Strategy::Pool)]
    strategy: Strategy,

    /// Number of points to generate (overrides the config file).
    #[arg(long)]
    points: Option<usize>,

    /// Generator seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Pool worker count (overrides the config file; 0 = host parallelism).
    #[arg(long)]
    workers: Option<usize>,

    /// Path to the JSON configuration file.
    #[arg(long, default_value = "config.json")]
    config: String,

    /// Run as a worker child process (internal).
    #[arg(long, hide = true)]
    worker: bool,

    /// Serialized task for worker mode (internal).
    #[arg(long, hide = true)]
    task: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = if cli.worker {
        run_worker(cli)
    } else {
        run_coordinator(cli).await
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Worker mode: deserialize the task from argv, run it, reply on stdout.
fn run_worker(cli: Cli) -> Result<(), SearchError> {
    let task_json = cli
        .task
        .ok_or_else(|| SearchError::Config("--worker requires --task".into()))?;
    let task: SearchTask = serde_json::from_str(&task_json)?;
    let reply = task.run();
    println!("{}", serde_json::to_string(&reply)?);
    Ok(())
}

async fn run_coordinator(cli: Cli) -> Result<(), SearchError> {
    let start_time = Instant::now();

    let mut config = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load {}: {}", cli.config, e);
            eprintln!("Using default configuration...");
            Config::default()
        }
    };
    if let Some(points) = cli.points {
        config.num_points = points;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(workers) = cli.workers {
        config.pool_workers = workers;
    }

    // A pair needs two distinct entities; reject before dispatching anything.
    if config.num_points < 2 {
        return Err(SearchError::NotEnoughPoints(config.num_points));
    }

    println!("=== CLOSEST PAIR SEARCH ===");
    config.print_summary();

    println!("\nGenerating data...");
    let points = Arc::new(generator::generate(config.num_points, config.seed));
    println!("Generated {} points", points.len());

    let harness: Box<dyn ExecutionHarness> = match cli.strategy {
        Strategy::Process => Box::new(ProcessHarness),
        Strategy::Thread => Box::new(ThreadHarness),
        Strategy::Pool => Box::new(PoolHarness::new(config.effective_pool_workers())),
    };

    println!("\nSearching with the {} strategy...", harness.name());
    let partials = harness.run(Arc::clone(&points)).await?;
    let pair = reduce(&partials)?;

    let (a, b) = pair.endpoints(&points);
    println!("\n=== RESULT ===");
    println!("Closest pair: {} and {} (distance {:.4})", a, b, pair.distance);

    let elapsed = start_time.elapsed();
    println!("\nTotal time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}
