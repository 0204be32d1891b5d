use std::{process::exit, thread::sleep, time::Duration};

use crate::board::{Board, Cell};
use crate::snake::{Snake, Direction::{*, self}, tail_shape};
use crate::term::TermManager;

use crossterm::Result;
use crossterm::event::{Event, KeyEvent, KeyModifiers, KeyCode};
use rand::{Rng, rngs::ThreadRng, thread_rng};

// Vertical steps wait longer than horizontal ones, since terminal characters
// have a higher height than width: 10/6 of the base, to the nearest ms
const TICK_HORIZONTAL_MS: u64 = 200;
const TICK_VERTICAL_MS: u64 = (TICK_HORIZONTAL_MS * 10 + 3) / 6;

const GAME_OVER_PAUSE: Duration = Duration::from_secs(3);

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Continue,
    Win,
    Lose,
}

/// How long one move may sit waiting for input before the snake continues
/// on its own.
pub fn tick_timeout(direction: Direction) -> Duration {
    if direction.is_vertical() {
        Duration::from_millis(TICK_VERTICAL_MS)
    } else {
        Duration::from_millis(TICK_HORIZONTAL_MS)
    }
}

/// Advances the game by one move in `direction`, leaving the board drawable
/// whatever the outcome.
pub fn step(board: &mut Board, snake: &mut Snake, direction: Direction, rng: &mut impl Rng) -> Outcome {
    snake.steer(direction);

    // The old head becomes a tail segment, shaped by the turn taken over it
    let old_head = snake.head();
    board.set(old_head, Cell::Tail(tail_shape(snake.last_direction(), snake.direction())));
    snake.push_tail(old_head);

    let target = snake.direction().step(old_head);

    let mut outcome = Outcome::Continue;
    if board.cell(target) == Cell::Food {
        // The oldest segment stays put: the snake grows by one. If that
        // leaves every playable cell covered, this food was the last one.
        if snake.len() == board.playable_cells() {
            outcome = Outcome::Win;
        }
    } else {
        let freed = snake.pop_tail();
        board.set(freed, Cell::Empty);
    }

    // Looked up only now: the freed cell may be the very one moved onto
    snake.set_head(target);
    match board.cell(target) {
        Cell::Empty | Cell::Food => board.set(target, Cell::Head),
        _ => {
            board.set(target, Cell::Dead);
            outcome = Outcome::Lose;
        }
    }

    if outcome == Outcome::Continue && !board.has_food() {
        let food = board.random_empty(rng);
        board.set(food, Cell::Food);
    }

    outcome
}

pub struct SnakeGame {
    term: TermManager,
    board: Board,
    snake: Snake,
    rng: ThreadRng,
}

impl SnakeGame {
    pub fn new() -> Result<Self> {
        let term = TermManager::new()?;
        let (width, height) = term.get_terminal_size();
        let mut rng = thread_rng();

        let mut board = Board::new(width, height);
        let snake = Snake::new(board.center(), Right);
        board.set(snake.head(), Cell::Head);

        let food = board.random_empty(&mut rng);
        board.set(food, Cell::Food);

        Ok(SnakeGame { term, board, snake, rng })
    }

    pub fn play(&mut self) -> Result<()> {
        self.term.setup()?;
        self.term.clear()?;
        self.term.draw_borders(self.board.size())?;
        self.render()?;

        loop {
            let direction = self.wait_direction(tick_timeout(self.snake.direction()))?;
            let outcome = step(&mut self.board, &mut self.snake, direction, &mut self.rng);
            self.render()?;

            if outcome != Outcome::Continue {
                break;
            }
        }

        // Same farewell for winning and losing: ring the bell and leave the
        // final board up for a moment
        self.term.beep()?;
        sleep(GAME_OVER_PAUSE);
        Ok(())
    }

    pub fn shutdown(&mut self) {
        let _ = self.term.restore();
    }

    ///////////////////////////////////////////////////////////////////////////

    // Waits up to `timeout` for input. The first event ends the wait: a
    // directional key steers, anything else keeps the current direction
    fn wait_direction(&mut self, timeout: Duration) -> Result<Direction> {
        let current = self.snake.direction();

        let event = match self.term.wait_event(timeout)? {
            Some(ev) => ev,
            None => return Ok(current),
        };

        match event {
            Event::Key(key) if is_ctrl_c(&key) => self.clean_exit(),
            Event::Key(KeyEvent { code, modifiers: _ }) => Ok(match code {
                KeyCode::Char('w') | KeyCode::Up => Up,
                KeyCode::Char('a') | KeyCode::Left => Left,
                KeyCode::Char('s') | KeyCode::Down => Down,
                KeyCode::Char('d') | KeyCode::Right => Right,
                _ => current,
            }),
            Event::Resize(_, _) => {
                // The fixed-size playing field is gone, nothing to do but leave
                let _ = self.term.restore();
                eprintln!("snek: terminal was resized, exiting");
                exit(1);
            }
            _ => Ok(current),
        }
    }

    fn render(&mut self) -> Result<()> {
        for pos in self.board.take_dirty() {
            let ch = self.board.cell(pos).glyph();
            self.term.print_at(pos, ch)?;
        }

        // The (hidden) cursor rides on the head
        self.term.park_cursor(self.snake.head())?;
        self.term.flush()
    }

    fn clean_exit(&mut self) -> ! {
        let _ = self.term.restore();
        exit(0);
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
