//! Console-driven human player.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::battleship::board::Board;
use crate::battleship::common::{BoardError, Coord, ShotResult};
use crate::battleship::player::Player;
use crate::battleship::ship::{Orientation, Ship};

pub struct CliPlayer {
    name: String,
}

impl CliPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        CliPlayer { name: name.into() }
    }
}

fn coord_to_string((row, col): Coord) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

/// Parse a `B4`-style coordinate, rejecting anything outside the board.
fn parse_coord(input: &str, size: usize) -> Option<Coord> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().trim().parse().ok()?;
    if row == 0 {
        return None;
    }
    let coord = (row - 1, col);
    if coord.0 >= size || coord.1 >= size {
        return None;
    }
    Some(coord)
}

/// Print a board snapshot with row/column headers. `for_owner` follows
/// the same visibility rule as [`Board::visible_state`].
pub fn print_board(board: &Board, for_owner: bool) {
    let state = board.visible_state(for_owner);
    print!("   ");
    for c in 0..board.size() {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
    for (r, row) in state.iter().enumerate() {
        print!("{:2} ", r + 1);
        for mark in row {
            print!(" {}", mark.symbol());
        }
        println!();
    }
}

fn read_line() -> String {
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_string()
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        println!("Place your ships (e.g. B4 H). Press enter for random placement.");
        let lengths = board.config().ship_lengths.clone();
        for length in lengths {
            loop {
                print_board(board, true);
                print!("Place ship of length {}: ", length);
                io::stdout().flush().ok();
                let line = read_line();
                if line.is_empty() {
                    let ship = board.random_placement(rng, length)?;
                    board.place_ship(ship)?;
                    break;
                }
                let mut parts = line.split_whitespace();
                let coord = parts.next().and_then(|p| parse_coord(p, board.size()));
                let orientation = match parts.next().and_then(|p| p.chars().next()) {
                    Some('v') | Some('V') => Orientation::Vertical,
                    _ => Orientation::Horizontal,
                };
                match coord {
                    Some(origin) => {
                        match board.place_ship(Ship::new(length, origin, orientation)) {
                            Ok(()) => break,
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    None => println!("Invalid input"),
                }
            }
        }
        Ok(())
    }

    fn select_target(&mut self, _rng: &mut SmallRng, opponent: &Board) -> Coord {
        println!("\nOpponent board:");
        print_board(opponent, false);
        loop {
            print!("Enter target (e.g. B4): ");
            io::stdout().flush().ok();
            if let Some(coord) = parse_coord(&read_line(), opponent.size()) {
                return coord;
            }
            println!("Invalid coordinate");
        }
    }

    fn handle_shot_result(&mut self, coord: Coord, result: ShotResult) {
        println!("You fired at {} -> {:?}", coord_to_string(coord), result);
    }

    fn handle_opponent_shot(&mut self, coord: Coord, result: ShotResult) {
        println!(
            "Opponent fired at {} -> {:?}",
            coord_to_string(coord),
            result
        );
    }
}
