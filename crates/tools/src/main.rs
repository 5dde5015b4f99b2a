use anyhow::{Context, Result};
use clap::Parser;
use maze_core::maze::{GeneratedMaze, MazeGenerator, shortest_path};
use maze_core::{GameConfig, Pos};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Generate mazes from a seed and print their layout and solution.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Overrides the configured maze width
    #[arg(long)]
    width: Option<usize>,
    /// Overrides the configured maze height
    #[arg(long)]
    height: Option<usize>,
    /// TOML game config to read dimensions from
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of consecutive mazes to draw from the seed
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
    /// Print one JSON object per maze instead of the text layout
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug, PartialEq)]
struct MazeReport {
    seed: u64,
    index: usize,
    width: usize,
    height: usize,
    fingerprint: String,
    /// `[row, column]` lattice coordinates.
    start: [i32; 2],
    key: Option<[i32; 2]>,
    exit: Option<[i32; 2]>,
    key_route_steps: Option<usize>,
    exit_route_steps: Option<usize>,
    /// False when the locked exit sits on the only route to the key.
    winnable: bool,
    rows: Vec<String>,
}

fn lattice(pos: Pos) -> [i32; 2] {
    [pos.y, pos.x]
}

fn build_report(seed: u64, index: usize, maze: &GeneratedMaze) -> MazeReport {
    let grid = &maze.grid;
    let key = grid.key_cell();
    let exit = grid.exit_cell();
    let to_key = key.and_then(|key| shortest_path(grid, maze.start, key));
    let to_exit = key.zip(exit).and_then(|(key, exit)| shortest_path(grid, key, exit));
    let winnable = match (&to_key, exit) {
        (Some(route), Some(exit)) => !route.contains(&exit) && to_exit.is_some(),
        _ => false,
    };

    MazeReport {
        seed,
        index,
        width: grid.width(),
        height: grid.height(),
        fingerprint: format!("0x{:016x}", maze.fingerprint()),
        start: lattice(maze.start),
        key: key.map(lattice),
        exit: exit.map(lattice),
        key_route_steps: to_key.map(|route| route.len() - 1),
        exit_route_steps: to_exit.map(|route| route.len() - 1),
        winnable,
        rows: grid.rows(),
    }
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(width) = args.width {
        config.maze_width = width;
    }
    if let Some(height) = args.height {
        config.maze_height = height;
    }
    Ok(config)
}

fn print_text(report: &MazeReport) {
    println!("Maze {} of seed {} ({}x{})", report.index, report.seed, report.width, report.height);
    for row in &report.rows {
        println!("  {row}");
    }
    println!("Fingerprint: {}", report.fingerprint);
    println!("Start: {:?}  Key: {:?}  Exit: {:?}", report.start, report.key, report.exit);
    match (report.key_route_steps, report.exit_route_steps) {
        (Some(to_key), Some(to_exit)) => {
            println!("Route: {to_key} steps to the key, {to_exit} more to the exit");
        }
        _ => println!("Route: incomplete"),
    }
    if !report.winnable {
        println!("Warning: the locked exit blocks the only route to the key");
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let dimensions = config.validate().context("Invalid config")?;
    let generator = MazeGenerator::new(dimensions);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for index in 0..args.count {
        let maze = generator.generate(&mut rng);
        let report = build_report(args.seed, index, &maze);
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_text(&report);
        }
    }

    Ok(())
}
