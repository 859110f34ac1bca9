use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use disk_scheduling::api;
use disk_scheduling::config::Config;
use disk_scheduling::dispatching::Outcome;
use disk_scheduling::metrics::over_threshold;
use disk_scheduling::models::workload::{random_head, random_requests};
use disk_scheduling::models::{SstfTieBreak, SweepDirection};
use disk_scheduling::report::{ComparisonReport, ResultReport, DEFAULT_CHART_WIDTH};
use disk_scheduling::validation::{validate_request, RawSimulationRequest};

#[derive(Parser)]
#[command(name = "disksched", version, about = "Disk-head scheduling simulator")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true, default_value = "disksched.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP JSON service.
    Serve(ServeArgs),
    /// Run a simulation and print the result.
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Override the configured listen host.
    #[arg(long)]
    host: Option<String>,
    /// Override the configured listen port.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args)]
struct SimulateArgs {
    /// Pending cylinder requests in arrival order (comma separated).
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    requests: Vec<i64>,
    /// Starting head position (random when omitted with --random).
    #[arg(long, allow_negative_numbers = true)]
    head: Option<i64>,
    /// Number of cylinders on the disk.
    #[arg(long, allow_negative_numbers = true)]
    disk_size: i64,
    /// FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK or ALL.
    #[arg(long, default_value = "ALL")]
    algorithm: String,
    /// Initial sweep direction of the SCAN family (up or down).
    #[arg(long)]
    direction: Option<SweepDirection>,
    /// SSTF tie-break (arrival or lower).
    #[arg(long)]
    tie_break: Option<SstfTieBreak>,
    /// Generate this many random requests instead of --requests.
    #[arg(long)]
    random: Option<usize>,
    /// Seed for --random.
    #[arg(long)]
    seed: Option<u64>,
    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
    /// Also draw a head-movement chart for every algorithm in ALL mode.
    #[arg(long)]
    chart: bool,
    /// Chart width in characters.
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    width: usize,
    /// Fail when any algorithm's total seek exceeds this many cylinders.
    #[arg(long)]
    max_total: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load_or_default(&cli.config);

    init_tracing(&config);

    match cli.command {
        Command::Serve(args) => {
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            tracing::info!(config = %cli.config, "disk scheduling service starting");
            api::serve(config).await?;
        }
        Command::Simulate(args) => simulate(config, args)?,
    }
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn simulate(mut config: Config, args: SimulateArgs) -> anyhow::Result<()> {
    if let Some(direction) = args.direction {
        config.engine.direction = direction;
    }
    if let Some(tie_break) = args.tie_break {
        config.engine.tie_break = tie_break;
    }

    let mut requests = args.requests;
    let mut head = args.head;
    if let Some(count) = args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let disk_size = u32::try_from(args.disk_size).unwrap_or(0);
        requests = random_requests(count, disk_size, &mut rng)
            .into_iter()
            .map(i64::from)
            .collect();
        if head.is_none() {
            head = random_head(disk_size, &mut rng).map(i64::from);
        }
        tracing::debug!(count, seed = ?args.seed, "generated random requests");
    }

    let raw = RawSimulationRequest {
        requests: Some(json!(requests)),
        head: head.map(|h| json!(h)),
        disk_size: Some(json!(args.disk_size)),
        algorithm: Some(json!(args.algorithm)),
    };
    let validated = match validate_request(&raw, config.limits.max_requests) {
        Ok(v) => v,
        Err(errors) => {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            anyhow::bail!("invalid input:\n  {}", messages.join("\n  "));
        }
    };

    let engine = config.engine.build();
    let input = &validated.input;
    let outcome = engine.dispatch(validated.selector, input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return check_threshold(&outcome, input.head(), args.max_total);
    }

    println!(
        "head {} | disk size {} | {} requests | direction {} | SSTF ties by {}\n",
        input.head(),
        input.disk_size(),
        input.requests().len(),
        engine.direction(),
        engine.tie_break()
    );

    let charts: Vec<_> = match &outcome {
        Outcome::Single(result) => vec![result],
        Outcome::All(comparison) => {
            println!(
                "{}",
                ComparisonReport {
                    comparison,
                    head: input.head(),
                }
            );
            if args.chart {
                comparison.iter().collect()
            } else {
                Vec::new()
            }
        }
    };

    for result in charts {
        let mut report = ResultReport::new(result, input.head(), input.disk_size());
        report.width = args.width;
        println!("{report}");
    }
    check_threshold(&outcome, input.head(), args.max_total)
}

fn check_threshold(outcome: &Outcome, head: u32, max_total: Option<u64>) -> anyhow::Result<()> {
    let Some(max_total) = max_total else {
        return Ok(());
    };
    let over = over_threshold(head, outcome.results(), max_total);
    if !over.is_empty() {
        let names: Vec<&str> = over.iter().map(|a| a.name()).collect();
        anyhow::bail!("total seek above {max_total}: {}", names.join(", "));
    }
    Ok(())
}
