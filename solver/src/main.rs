use anyhow::{anyhow, Context};
use baseband::builder::{CatalogBuilder, DEFAULT_CATALOG_SIZE, FIRST_BOARD_NAME};
use baseband::generate::{random_board_definition, random_cost, random_requirement};
use baseband::solver::{DEFAULT_MAX_COMBINATION_SIZE, DEFAULT_MAX_SOLUTIONS};
use baseband::{parse_board_definition, Board, BoardSpec, Capacity, Cost, Enumerator, SearchLimits, COST_RANGE};
use clap::Parser;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, EnvFilter};

mod render;

/// Find combinations of baseband board modes that cover a capacity requirement, ranked by cost
#[derive(Parser)]
#[command(name = "solver", version)]
struct Cli {
    /// Capacity the selected boards must cover together
    #[arg(short, long, default_value = "6L + 3N + 2D")]
    requirement: String,

    /// Modes of the first board, separated by "or"
    #[arg(short, long, default_value = "3L + 3N or 6L + 2D")]
    board: String,

    /// Cost of the first board, $5 to $20
    #[arg(short, long, default_value = "10.00")]
    cost: String,

    /// Additional board; may be repeated
    #[arg(long = "custom", value_name = "NAME=MODES@COST")]
    customs: Vec<String>,

    /// Top the catalog up to this many boards with random filler
    #[arg(long, default_value_t = DEFAULT_CATALOG_SIZE)]
    catalog_size: usize,

    /// Stop after this many solutions
    #[arg(long, default_value_t = DEFAULT_MAX_SOLUTIONS)]
    max_solutions: usize,

    /// Largest number of board modes in one combination
    #[arg(long, default_value_t = DEFAULT_MAX_COMBINATION_SIZE)]
    max_size: usize,

    /// Never select two modes of the same board in one combination
    #[arg(long)]
    exclusive_modes: bool,

    /// Number of cheapest solutions to list
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Seed for filler boards and --randomize
    #[arg(long)]
    seed: Option<u64>,

    /// Replace the requirement and the first board with random ones
    #[arg(long)]
    randomize: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let mut cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if cli.randomize {
        cli.requirement = random_requirement(&mut rng).to_string();
        cli.board = random_board_definition(&mut rng).iter().join(" or ");
        cli.cost = random_cost(&mut rng).to_string();
        println!("Requirement: {}", cli.requirement);
        println!("First board: {} at {}", cli.board, cli.cost);
        println!();
    }

    let requirement: Capacity = cli.requirement.parse()
        .context("invalid character entered in the requirements")?;
    let modes = parse_board_definition(&cli.board)
        .context("invalid first board")?;
    let cost: Cost = cli.cost.parse()
        .context("invalid cost for the first board")?;
    cost.validate(&COST_RANGE)?;

    let mut builder = CatalogBuilder::with_target_size(cli.catalog_size);
    builder.add_board(FIRST_BOARD_NAME, Board::new(modes, cost));
    for custom in &cli.customs {
        let spec: BoardSpec = custom.parse().with_context(|| format!("invalid custom board '{}'", custom))?;
        builder.add_board(spec.name, spec.board);
    }
    let catalog = builder
        .fill_random(&mut rng)
        .build()
        .map_err(|reasons| anyhow!("invalid catalog: {}", reasons.iter().join("; ")))?;

    let limits = SearchLimits {
        max_solutions: cli.max_solutions,
        max_combination_size: cli.max_size,
        exclusive_modes: cli.exclusive_modes,
    };
    let solutions = Enumerator::from(&catalog).with_limits(limits).enumerate(&requirement);
    tracing::info!(found = solutions.len(), stop_reason = ?solutions.stop_reason(), "search complete");

    let costs = catalog.costs();
    let mut out = String::new();
    render::dashboard(&mut out, &catalog)?;
    out.push('\n');
    render::solutions(&mut out, &solutions, &costs)?;
    if !solutions.is_empty() {
        out.push('\n');
        render::ranking(&mut out, &solutions.rank_by_cost(&costs), cli.top)?;
    }
    print!("{}", out);

    Ok(())
}
