use gridgames::battleship::{AiPlayer, BoardConfig, Game, Player};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let config = BoardConfig::default();
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let players: [Box<dyn Player>; 2] = [
        Box::new(AiPlayer::new("player1", config.size, &mut rng1)),
        Box::new(AiPlayer::new("player2", config.size, &mut rng2)),
    ];

    let mut game = Game::new(config, players);
    let mut rng = SmallRng::seed_from_u64(seed1.wrapping_add(seed2.rotate_left(32)));
    game.setup(&mut rng)?;
    let outcome = game.run(&mut rng)?;

    let winner = if outcome.winner == 0 {
        "player1"
    } else {
        "player2"
    };
    let result = json!({
        "player1": {"shots": outcome.shots[0]},
        "player2": {"shots": outcome.shots[1]},
        "winner": winner,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
