use crate::{Coords, TermInt};
use crate::snake::TailShape;

use rand::Rng;

const EMPTY_CHAR: char = ' ';
const HEAD_CHAR: char = 's';
const FOOD_CHAR: char = 'o';
const DEAD_SNAKE_CHAR: char = 'x';

/// What a grid cell logically holds. The glyph for a cell is derived from
/// this state only when the cell gets drawn.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Head,
    Tail(TailShape),
    Food,
    Dead,
    Wall,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_CHAR,
            Cell::Head => HEAD_CHAR,
            Cell::Tail(shape) => shape.glyph(),
            Cell::Food => FOOD_CHAR,
            Cell::Dead => DEAD_SNAKE_CHAR,
            Cell::Wall => '#', // never redrawn once the borders are up
        }
    }
}

pub struct Board {
    width: TermInt,
    height: TermInt,
    cells: Vec<Cell>,
    dirty: Vec<Coords>,
}

impl Board {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        assert!(width >= 5 && height >= 5, "terminal must be at least 5x5 cells");

        let (w, h) = (width as usize, height as usize);
        let mut cells = vec![Cell::Empty; w * h];

        for x in 0..w {
            cells[x] = Cell::Wall;
            cells[w * (h - 1) + x] = Cell::Wall;
        }

        for y in 0..h {
            cells[w * y] = Cell::Wall;
            cells[w * y + w - 1] = Cell::Wall;
        }

        Board { width, height, cells, dirty: vec![] }
    }

    pub fn size(&self) -> Coords {
        (self.width, self.height)
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    /// Cells inside the border walls.
    pub fn playable_cells(&self) -> usize {
        (self.width as usize - 2) * (self.height as usize - 2)
    }

    pub fn cell(&self, pos: Coords) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Coords, cell: Cell) {
        let i = self.index(pos);
        self.cells[i] = cell;
        self.dirty.push(pos);
    }

    /// Every coordinate written since the last call, oldest first.
    pub fn take_dirty(&mut self) -> Vec<Coords> {
        std::mem::take(&mut self.dirty)
    }

    pub fn has_food(&self) -> bool {
        self.cells.contains(&Cell::Food)
    }

    /// Picks an empty cell uniformly, resampling over the whole grid until
    /// one turns up. Callers must leave at least one cell empty.
    pub fn random_empty(&self, rng: &mut impl Rng) -> Coords {
        loop {
            let pos = (rng.gen_range(0..self.width), rng.gen_range(0..self.height));
            if self.cell(pos) == Cell::Empty {
                return pos;
            }
        }
    }

    fn index(&self, pos: Coords) -> usize {
        self.width as usize * pos.1 as usize + pos.0 as usize
    }
}
