use std::io::{self, Write};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use gridgames::battleship::{print_board, AiPlayer, BoardConfig, CliPlayer, Game, Player};
use gridgames::match3::{GameState, GridConfig, MatchEngine, Tile};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play console battleship against the computer.
    Battleship {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 10)]
        size: usize,
    },
    /// Play console match-3.
    Match3 {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 50)]
        moves: u32,
        #[arg(long, default_value_t = 8)]
        size: usize,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    gridgames::init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Battleship { seed, size } => run_battleship(seed, size),
        Commands::Match3 { seed, moves, size } => run_match3(seed, moves, size),
    }
}

fn run_battleship(seed: Option<u64>, size: usize) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let config = BoardConfig {
        size,
        ..BoardConfig::default()
    };
    let players: [Box<dyn Player>; 2] = [
        Box::new(CliPlayer::new("You")),
        Box::new(AiPlayer::new("Computer", size, &mut rng)),
    ];
    let mut game = Game::new(config, players);
    game.setup(&mut rng)?;
    let outcome = game.run(&mut rng)?;

    println!("\n=== GAME OVER ===");
    println!(
        "{} wins in {} shots",
        game.player_name(outcome.winner),
        outcome.shots[outcome.winner]
    );
    println!("\nYour board:");
    print_board(game.board(0), true);
    Ok(())
}

const COLOR_CHARS: [char; 8] = ['R', 'G', 'B', 'Y', 'P', 'C', 'M', 'W'];

fn print_grid(engine: &MatchEngine) {
    let grid = engine.grid();
    print!("   ");
    for col in 0..grid.size() {
        print!(" {}", col % 10);
    }
    println!();
    for row in 0..grid.size() {
        print!("{:2} ", row);
        for col in 0..grid.size() {
            let ch = match grid.color(row, col) {
                Some(Tile(color)) => COLOR_CHARS[color as usize % COLOR_CHARS.len()],
                None => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

fn run_match3(seed: Option<u64>, moves: u32, size: usize) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let config = GridConfig {
        size,
        max_moves: Some(moves),
        ..GridConfig::default()
    };
    let mut engine = MatchEngine::new(config);
    engine.start(&mut rng);

    println!("Swap two adjacent tiles with: row col row col (0-based). Empty line quits.");
    loop {
        print_grid(&engine);
        let moves_left = match engine.moves_left() {
            Some(m) => m.to_string(),
            None => "unlimited".to_string(),
        };
        println!("Score: {}   Moves left: {}", engine.score(), moves_left);
        if engine.state() == GameState::GameOver {
            println!("No moves left - game over! Final score: {}", engine.score());
            break;
        }
        print!("> ");
        io::stdout().flush().ok();
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        let nums: Vec<usize> = line
            .split_whitespace()
            .filter_map(|p| p.parse().ok())
            .collect();
        if nums.len() != 4 {
            println!("Expected four numbers: row col row col");
            continue;
        }
        let removed = engine.handle_tile_swap((nums[0], nums[1]), (nums[2], nums[3]), &mut rng);
        if removed == 0 {
            println!("No match there");
        } else {
            println!("Removed {} tiles", removed);
        }
    }
    Ok(())
}
