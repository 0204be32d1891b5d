mod board;
mod game;
mod snake;
mod term;

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() {
    if let Err(err) = run() {
        eprintln!("snek: {}", err);
        std::process::exit(1);
    }
}

fn run() -> crossterm::Result<()> {
    let mut game = game::SnakeGame::new()?;

    // The screen must be put back before any error gets reported
    let result = game.play();
    game.shutdown();
    result
}
