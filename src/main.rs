#![warn(clippy::all)]

use anyhow::{Context, Result};
use clap::Parser;
use std::{thread::sleep, time::Duration};
use torus_life::{Config, Seed, Simulation};
use tracing_subscriber::EnvFilter;

/// Conway's Game of Life on a toroidal board, printed to the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board size as WIDTH,HEIGHT.
    #[arg(short = 'b', long = "boardsize", value_name = "WIDTH,HEIGHT", value_parser = parse_pair,
          default_value_t = Pair(Config::DEFAULT_WIDTH, Config::DEFAULT_HEIGHT))]
    boardsize: Pair,
    /// Alive cell as 1-based X,Y; repeat for more cells.
    #[arg(short = 'p', long = "point", value_name = "X,Y", value_parser = parse_pair,
          conflicts_with_all = ["shape", "density", "seed"])]
    points: Vec<Pair>,
    /// Named shape stamped on an empty board (block, blinker, toad, beacon, glider).
    #[arg(short = 's', long, value_name = "NAME", conflicts_with_all = ["density", "seed"])]
    shape: Option<String>,
    /// Top-left corner of the shape as 1-based X,Y.
    #[arg(long = "at", value_name = "X,Y", value_parser = parse_pair, requires = "shape",
          default_value_t = Pair(1, 1))]
    at: Pair,
    /// Fraction of cells alive in a random board.
    #[arg(short = 'd', long, default_value_t = Config::DEFAULT_DENSITY)]
    density: f64,
    /// Seed for the random board.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of generations to run; runs until interrupted if omitted.
    #[arg(short = 'g', long)]
    generations: Option<u64>,
    /// Pause between frames.
    #[arg(long, value_name = "MILLISECONDS", default_value_t = Config::FRAME_DELAY_MS)]
    delay_ms: u64,
    /// Boards with at least this many cells are updated in parallel.
    #[arg(long, value_name = "CELLS")]
    parallel_min_cells: Option<usize>,
}

#[derive(Clone, Copy, Debug)]
struct Pair(usize, usize);

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

fn parse_pair(s: &str) -> Result<Pair, String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two numbers separated by a comma, got {:?}", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|e| format!("{:?}: {}", v, e))
    };
    Ok(Pair(parse(a)?, parse(b)?))
}

impl Args {
    fn seed_mode(&self) -> Seed {
        if !self.points.is_empty() {
            Seed::Coordinates(self.points.iter().map(|p| (p.0, p.1)).collect())
        } else if let Some(name) = &self.shape {
            Seed::Shape {
                name: name.clone(),
                x: self.at.0,
                y: self.at.1,
            }
        } else {
            Seed::Random {
                density: self.density,
                seed: self.seed,
            }
        }
    }
}

fn print_frame(sim: &Simulation) {
    // clear the screen and move the cursor home
    print!("\x1b[2J\x1b[H");
    print!("{}", sim.board());
    println!(
        "generation {}  population {}",
        sim.generation(),
        sim.population()
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Some(cells) = args.parallel_min_cells {
        Config::set_parallel_min_cells(cells);
    }

    let Pair(width, height) = args.boardsize;
    let seed = args.seed_mode();
    let mut sim = Simulation::from_seed(width, height, &seed)
        .with_context(|| format!("failed to seed a {}x{} board with {:?}", width, height, seed))?;
    tracing::info!(width, height, population = sim.population(), "simulation started");

    let delay = Duration::from_millis(args.delay_ms);
    print_frame(&sim);
    while args.generations.map_or(true, |n| sim.generation() < n) {
        sleep(delay);
        sim.step();
        print_frame(&sim);
    }
    Ok(())
}
