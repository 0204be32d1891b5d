use std::collections::VecDeque;

use crate::Coords;
use Direction::*;
use TailShape::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn step(self, from: Coords) -> Coords {
        match self {
            Up => (from.0, from.1 - 1),
            Down => (from.0, from.1 + 1),
            Left => (from.0 - 1, from.1),
            Right => (from.0 + 1, from.1),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Up | Down)
    }
}

/// Shape of a tail segment, picked from the directions of travel entering
/// and leaving its cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TailShape {
    Vertical,
    Horizontal,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl TailShape {
    pub fn glyph(self) -> char {
        match self {
            Vertical => '│',
            Horizontal => '─',
            TopLeft => '┌',
            TopRight => '┐',
            BottomLeft => '└',
            BottomRight => '┘',
        }
    }
}

// Total over all 16 (last, next) pairs; a straight reversal keeps the
// straight glyph and is left for the collision check to resolve
pub fn tail_shape(last: Direction, next: Direction) -> TailShape {
    match (last, next) {
        (Up, Up) | (Up, Down) | (Down, Up) | (Down, Down) => Vertical,
        (Left, Left) | (Left, Right) | (Right, Left) | (Right, Right) => Horizontal,
        (Up, Right) | (Left, Down) => TopLeft,
        (Up, Left) | (Right, Down) => TopRight,
        (Down, Right) | (Left, Up) => BottomLeft,
        (Down, Left) | (Right, Up) => BottomRight,
    }
}

pub struct Snake {
    tail: VecDeque<Coords>,
    head: Coords,
    direction: Direction,
    last_direction: Direction,
}

impl Snake {
    pub fn new(head: Coords, direction: Direction) -> Self {
        Snake { tail: VecDeque::new(), head, direction, last_direction: direction }
    }

    pub fn head(&self) -> Coords {
        self.head
    }

    pub fn set_head(&mut self, pos: Coords) {
        self.head = pos;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Records a new travel direction, keeping the previous one around for
    /// the corner-glyph lookup.
    pub fn steer(&mut self, direction: Direction) {
        self.last_direction = self.direction;
        self.direction = direction;
    }

    /// Head plus tail segments.
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    pub fn push_tail(&mut self, pos: Coords) {
        self.tail.push_back(pos);
    }

    /// Removes and returns the oldest tail coordinate. Every step pushes
    /// before it pops, so the queue is never empty here.
    pub fn pop_tail(&mut self) -> Coords {
        self.tail.pop_front().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_shape_covers_all_sixteen_turns() {
        let cases = [
            (Up, Up, Vertical),
            (Up, Down, Vertical),
            (Up, Left, TopRight),
            (Up, Right, TopLeft),
            (Down, Up, Vertical),
            (Down, Down, Vertical),
            (Down, Left, BottomRight),
            (Down, Right, BottomLeft),
            (Left, Up, BottomLeft),
            (Left, Down, TopLeft),
            (Left, Left, Horizontal),
            (Left, Right, Horizontal),
            (Right, Up, BottomRight),
            (Right, Down, TopRight),
            (Right, Left, Horizontal),
            (Right, Right, Horizontal),
        ];

        for &(last, next, expected) in cases.iter() {
            assert_eq!(tail_shape(last, next), expected, "({:?}, {:?})", last, next);
        }
    }

    #[test]
    fn corner_glyphs_open_toward_both_travel_directions() {
        assert_eq!(tail_shape(Up, Left).glyph(), '┐');
        assert_eq!(tail_shape(Up, Right).glyph(), '┌');
        assert_eq!(tail_shape(Down, Left).glyph(), '┘');
        assert_eq!(tail_shape(Down, Right).glyph(), '└');
        assert_eq!(tail_shape(Left, Up).glyph(), '└');
        assert_eq!(tail_shape(Right, Down).glyph(), '┐');
    }

    #[test]
    fn reversals_keep_a_straight_glyph() {
        assert_eq!(tail_shape(Up, Down), Vertical);
        assert_eq!(tail_shape(Down, Up), Vertical);
        assert_eq!(tail_shape(Left, Right), Horizontal);
        assert_eq!(tail_shape(Right, Left), Horizontal);
    }

    #[test]
    fn step_moves_one_cell_along_the_direction() {
        assert_eq!(Up.step((4, 4)), (4, 3));
        assert_eq!(Down.step((4, 4)), (4, 5));
        assert_eq!(Left.step((4, 4)), (3, 4));
        assert_eq!(Right.step((4, 4)), (5, 4));
    }

    #[test]
    fn steer_remembers_the_previous_direction() {
        let mut snake = Snake::new((5, 5), Right);

        snake.steer(Up);

        assert_eq!(snake.direction(), Up);
        assert_eq!(snake.last_direction(), Right);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn tail_pops_oldest_first() {
        let mut snake = Snake::new((5, 5), Right);

        snake.push_tail((3, 5));
        snake.push_tail((4, 5));

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.pop_tail(), (3, 5));
        assert_eq!(snake.pop_tail(), (4, 5));
        assert_eq!(snake.len(), 1);
    }
}
