//! Mastermind - CLI
//!
//! Play Mastermind in a TUI or on a plain console, or let the minimax solver
//! crack, analyze and benchmark codes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{SolveConfig, analyze_guess, run_benchmark, run_simple, solve_code},
    core::{CODE_SPACE, Sequence, score},
    game::SecretSource,
    output::{print_analysis_result, print_benchmark_result, print_score, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with a minimax solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the master code generator (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Solver strategy: minimax (default), consistent, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple text game on the console
    Simple,

    /// Score a guess against a master code
    Score {
        /// The master code, e.g. AABB
        secret: String,

        /// The guess, e.g. ABAB
        guess: String,
    },

    /// Let the solver crack a specific master code
    Solve {
        /// The master code to solve
        code: String,

        /// Show candidate counts for every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess partitions the code space
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of codes to test (all 1296 when omitted)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so the board on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(seed) = cli.seed {
        info!(seed, "using fixed seed");
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.seed),
        Commands::Simple => run_simple_command(cli.seed),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Solve { code, verbose } => {
            let solver = Solver::new(StrategyType::from_name(&cli.strategy));
            solve_command(&code, verbose, &solver)
        }
        Commands::Analyze { guess } => run_analyze_command(&guess),
        Commands::Benchmark { count } => {
            let solver = Solver::new(StrategyType::from_name(&cli.strategy));
            benchmark_command(count, &cli.strategy, &solver);
            Ok(())
        }
    }
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let secret_code = Sequence::parse(secret.trim())?;
    let guess_code = Sequence::parse(guess.trim())?;

    print_score(secret, guess, score(&secret_code, &guess_code));
    Ok(())
}

fn solve_command<S: Strategy>(code: &str, verbose: bool, solver: &Solver<S>) -> Result<()> {
    let config = SolveConfig::new(code.to_string());
    let result = solve_code(config, solver)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(guess: &str) -> Result<()> {
    let result = analyze_guess(guess, &Sequence::all())?;
    print_analysis_result(&result);
    Ok(())
}

fn benchmark_command<S: Strategy>(count: Option<usize>, strategy_name: &str, solver: &Solver<S>) {
    let count = count.unwrap_or(CODE_SPACE).min(CODE_SPACE);
    println!("Running {strategy_name} benchmark on {count} master codes...");

    let secrets: Vec<Sequence> = Sequence::all().into_iter().take(count).collect();

    let result = run_benchmark(solver, &secrets, true);
    print_benchmark_result(&result);
}

fn run_simple_command(seed: Option<u64>) -> Result<()> {
    let mut source = SecretSource::from_seed(seed);
    run_simple(&mut source)?;
    Ok(())
}

fn run_play_command(seed: Option<u64>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(SecretSource::from_seed(seed));
    run_tui(app)
}
