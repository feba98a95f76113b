use std::io::{self, Write};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, join_url, CellState, ClientNode, Controller, Coordinate, Effect, Fleet,
    GameState, Orientation, PlacementError, RandomController, WsChannel, BOARD_SIZE,
};

/// Terminal client for the battleship web server.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// WebSocket base URL of the game server.
    #[arg(long, default_value = "ws://localhost:8000")]
    server: String,
    /// Room id to join. Create a room through the web lobby first.
    #[arg(long)]
    room: String,
    /// Player name to join as.
    #[arg(long)]
    name: String,
    /// Place and shoot automatically instead of prompting.
    #[arg(long)]
    auto: bool,
    /// Fix the RNG seed for reproducible fleet placement.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let url = join_url(&cli.server, &cli.room, &cli.name);
    println!("Joining {} as {}...", cli.room, cli.name);
    let channel = WsChannel::connect(&url).await?;

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let controller: Box<dyn Controller> = if cli.auto {
        Box::new(RandomController::new())
    } else {
        Box::new(TerminalController::new(cli.name.clone()))
    };

    let mut node = ClientNode::new(controller, Box::new(channel));
    node.run(&mut rng).await?;

    if let Some(result) = node.session().result() {
        if result.winner == cli.name {
            println!("\nVictory! You have sunk the entire enemy fleet.");
        } else {
            println!("\nDefeat. {} has sunk your fleet.", result.winner);
        }
    } else {
        println!("\nConnection lost. Rejoin the room from the lobby.");
    }
    Ok(())
}

/// Controller that prompts for targets on stdin and narrates effects.
struct TerminalController {
    name: String,
}

impl TerminalController {
    fn new(name: String) -> Self {
        Self { name }
    }
}

fn coord_to_string(coordinate: Coordinate) -> String {
    let column = (b'A' + coordinate.column) as char;
    format!("{}{}", column, coordinate.row + 1)
}

fn parse_coord(input: &str) -> Option<Coordinate> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let column_ch = chars.next()?.to_ascii_uppercase();
    let column = (column_ch as u8).wrapping_sub(b'A');
    let row: u8 = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    let coordinate = Coordinate::new(row - 1, column);
    coordinate.on_board().then_some(coordinate)
}

fn print_boards(state: &GameState) {
    println!("\nEnemy waters:");
    print_grid(|coordinate| {
        match state
            .opponent_board
            .as_ref()
            .map(|board| board.cell(coordinate))
            .unwrap_or(CellState::Empty)
        {
            CellState::HitShip => 'X',
            CellState::Miss => 'o',
            _ => '.',
        }
    });
    println!("\nYour waters:");
    print_grid(|coordinate| match state.your_board.cell(coordinate) {
        CellState::HitShip => 'X',
        CellState::Miss => 'o',
        CellState::Ship => 'S',
        CellState::Empty => '.',
    });
}

fn print_grid(cell: impl Fn(Coordinate) -> char) {
    print!("   ");
    for column in 0..BOARD_SIZE {
        print!(" {}", (b'A' + column) as char);
    }
    println!();
    for row in 0..BOARD_SIZE {
        print!("{:2} ", row + 1);
        for column in 0..BOARD_SIZE {
            print!(" {}", cell(Coordinate::new(row, column)));
        }
        println!();
    }
}

impl Controller for TerminalController {
    fn plan_fleet(&mut self, rng: &mut SmallRng) -> Result<Fleet, PlacementError> {
        let fleet = Fleet::generate(rng)?;
        println!("\nCaptain {}, your fleet has taken position:", self.name);
        for placement in fleet.placements() {
            let heading = match placement.orientation {
                Orientation::Horizontal => "east",
                Orientation::Vertical => "north",
            };
            println!(
                "  {:<10} at {} heading {}",
                placement.ship_type.name(),
                coord_to_string(placement.start_coordinate),
                heading
            );
        }
        Ok(fleet)
    }

    fn select_target(&mut self, _rng: &mut SmallRng, state: &GameState) -> Coordinate {
        print_boards(state);
        loop {
            print!("Target (e.g. B4): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                continue;
            }
            match parse_coord(&line) {
                Some(coordinate) => return coordinate,
                None => println!("Enter a column letter and a row number, like D7."),
            }
        }
    }

    fn handle_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::AttackResolved { coordinate, state } => match state {
                CellState::HitShip => println!("Direct hit at {}!", coord_to_string(*coordinate)),
                CellState::Miss => println!("Splash at {}.", coord_to_string(*coordinate)),
                _ => {}
            },
            Effect::OwnBoardStruck { coordinate, state } => match state {
                CellState::HitShip => {
                    println!("We are hit at {}!", coord_to_string(*coordinate))
                }
                CellState::Miss => println!(
                    "Enemy shell splashes harmlessly at {}.",
                    coord_to_string(*coordinate)
                ),
                _ => {}
            },
            Effect::PhaseChanged(phase) => println!("[{:?}]", phase),
            Effect::ErrorMessage(text) => println!("Server: {}", text),
            _ => {}
        }
    }
}
