use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::BoardError;

/// Direction the blank travels when a tile slides into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Neighbor enumeration order: tile above, below, left, right of the blank.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl Move {
    pub fn name(&self) -> &'static str {
        match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// An immutable n-by-n slider puzzle configuration.
///
/// Tiles are stored row-major in a flat sequence, so flat index `i` is the
/// cell at row `i / n`, column `i % n`. The value 0 is the blank. The goal
/// holds `(i + 1) % (n * n)` at every index `i`.
///
/// Every transformation returns a fresh `Board`; nothing mutates one after
/// construction.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
    manhattan: usize,
}

impl Board {
    /// Builds a board from rows of tile values.
    ///
    /// Fails unless the grid is square, at least 2x2, and holds every value
    /// in `0..n*n` exactly once.
    pub fn new<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }

        let mut tiles = Vec::with_capacity(Self::cell_count(size)?);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    dimension: size,
                });
            }
            tiles.extend_from_slice(values);
        }

        Self::from_tiles(size, tiles)
    }

    /// Builds a board from `size * size` tiles in row-major order.
    pub fn from_tiles(size: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        let cells = Self::cell_count(size)?;
        if tiles.len() != cells {
            return Err(BoardError::InvalidTiles { dimension: size });
        }

        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let tile = tile as usize;
            if tile >= cells || seen[tile] {
                return Err(BoardError::InvalidTiles { dimension: size });
            }
            seen[tile] = true;
        }

        Ok(Self::from_permutation(size, tiles))
    }

    /// The solved board of the given dimension.
    pub fn goal(size: usize) -> Result<Self, BoardError> {
        let cells = Self::cell_count(size)?;
        let tiles = (0..cells).map(|i| ((i + 1) % cells) as u32).collect();
        Self::from_tiles(size, tiles)
    }

    /// A uniformly shuffled board that is guaranteed to be solvable.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, BoardError> {
        let mut tiles = Self::goal(size)?.tiles;
        tiles.shuffle(rng);

        let board = Self::from_permutation(size, tiles);
        // A single swap of two non-blank tiles flips solvability.
        if board.is_solvable_by_parity() {
            Ok(board)
        } else {
            Ok(board.twin())
        }
    }

    /// `size * size`, provided every tile value of such a board fits a `u32`.
    fn cell_count(size: usize) -> Result<usize, BoardError> {
        if size < 2 {
            return Err(BoardError::TooSmall { dimension: size });
        }
        size
            .checked_mul(size)
            .filter(|&cells| cells - 1 <= u32::MAX as usize)
            .ok_or(BoardError::TooLarge { dimension: size })
    }

    // Caller guarantees `tiles` is a permutation of 0..size*size.
    fn from_permutation(size: usize, tiles: Vec<u32>) -> Self {
        let mut blank = 0;
        let mut manhattan = 0;

        for (i, &tile) in tiles.iter().enumerate() {
            if tile == 0 {
                blank = i;
                continue;
            }
            let target = tile as usize - 1;
            manhattan += (i / size).abs_diff(target / size);
            manhattan += (i % size).abs_diff(target % size);
        }

        Self {
            size,
            tiles,
            blank,
            manhattan,
        }
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    /// Row-major tile values.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Value at `(row, col)`; panics when either is out of range.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) is off the board");
        self.tiles[row * self.size + col]
    }

    /// `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    pub fn to_grid(&self) -> Vec<Vec<u32>> {
        self.tiles.chunks(self.size).map(<[u32]>::to_vec).collect()
    }

    /// Number of non-blank tiles outside their goal cell.
    pub fn hamming(&self) -> usize {
        let cells = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(i, &tile)| tile != 0 && tile as usize != (i + 1) % cells)
            .count()
    }

    /// Sum of row and column displacement of every non-blank tile from its
    /// goal cell. Computed once at construction.
    pub fn manhattan(&self) -> usize {
        self.manhattan
    }

    pub fn is_goal(&self) -> bool {
        let cells = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, &tile)| tile as usize == (i + 1) % cells)
    }

    /// This board with the first two non-blank tiles in scan order swapped.
    ///
    /// Exactly one of a board and its twin can reach the goal.
    pub fn twin(&self) -> Self {
        let mut non_blank = (0..self.tiles.len()).filter(|&i| self.tiles[i] != 0);
        // n >= 2 leaves at least three non-blank tiles.
        let first = non_blank.next().unwrap_or(0);
        let second = non_blank.next().unwrap_or(1);
        self.swapped(first, second)
    }

    /// A new board with the tiles at flat indices `i` and `j` exchanged.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(i, j);
        Self::from_permutation(self.size, tiles)
    }

    /// The board after the blank travels one cell in `movement`, if that
    /// cell exists.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let (dr, dc) = movement.as_offset();
        let (row, col) = self.blank();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let bounds = 0..self.size as isize;

        if bounds.contains(&new_row) && bounds.contains(&new_col) {
            let target = new_row as usize * self.size + new_col as usize;
            Some(self.swapped(self.blank, target))
        } else {
            None
        }
    }

    /// Boards reachable by sliding one tile into the blank, in the order
    /// above, below, left, right.
    pub fn neighbors(&self) -> Vec<Self> {
        Move::ALL.iter().filter_map(|&dir| self.apply(dir)).collect()
    }

    /// Like [`Board::neighbors`], tagged with the blank's direction of travel.
    pub fn neighbors_with_moves(&self) -> Vec<(Move, Self)> {
        Move::ALL
            .iter()
            .filter_map(|&dir| self.apply(dir).map(|board| (dir, board)))
            .collect()
    }

    /// Inversion-count solvability test.
    ///
    /// Odd widths need an even inversion count; even widths need the
    /// inversion count plus the blank's row to be odd.
    pub fn is_solvable_by_parity(&self) -> bool {
        let placed: Vec<u32> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        let odd_inversions = placed
            .iter()
            .enumerate()
            .map(|(i, &tile)| placed[i + 1..].iter().filter(|&&later| later < tile).count())
            .sum::<usize>()
            % 2
            == 1;

        if self.size % 2 == 1 {
            !odd_inversions
        } else {
            // Even widths: the blank's row counts towards the parity.
            odd_inversions == (self.blank / self.size % 2 == 0)
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for row in self.tiles.chunks(self.size) {
            for (col, val) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:2}", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Reads `n` followed by `n * n` whitespace-separated tiles, row-major.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));

        let parse = |line: usize, tok: &str| {
            tok.parse::<u32>().map_err(|e| BoardError::Parse {
                line,
                reason: format!("'{tok}' is not a tile value: {e}"),
            })
        };

        let (line, tok) = tokens.next().ok_or_else(|| BoardError::Parse {
            line: 1,
            reason: "missing board dimension".to_string(),
        })?;
        let size = parse(line, tok)? as usize;
        if size < 2 {
            return Err(BoardError::TooSmall { dimension: size });
        }
        let cells = Self::cell_count(size).map_err(|e| BoardError::Parse {
            line,
            reason: e.to_string(),
        })?;

        // Grows with the input rather than the header.
        let mut tiles = Vec::new();
        let mut last_line = line;
        for (line, tok) in tokens.by_ref().take(cells) {
            tiles.push(parse(line, tok)?);
            last_line = line;
        }
        if tiles.len() < cells {
            return Err(BoardError::Parse {
                line: last_line,
                reason: format!("expected {cells} tiles, found {}", tiles.len()),
            });
        }
        if let Some((line, tok)) = tokens.next() {
            return Err(BoardError::Parse {
                line,
                reason: format!("unexpected trailing input '{tok}'"),
            });
        }

        Self::from_tiles(size, tiles)
    }
}
