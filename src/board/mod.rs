//! Board representation for five-in-a-row

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// The four line axes through a cell. Each axis together with its
/// opposite direction defines one line.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Signed cell value: Black = +1, White = -1, Empty = 0
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Stone::Black => 1,
            Stone::White => -1,
            Stone::Empty => 0,
        }
    }

    #[inline]
    pub fn from_value(value: i8) -> Option<Stone> {
        match value {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            0 => Some(Stone::Empty),
            _ => None,
        }
    }

    /// Wire color code used by the host: 1 = Black, 2 = White
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Black => 1,
            Stone::White => 2,
            Stone::Empty => 0,
        }
    }

    #[inline]
    pub fn from_code(code: u8) -> Option<Stone> {
        match code {
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Board center, the only candidate on an empty board
    #[inline]
    pub fn center() -> Self {
        Self::new(BOARD_SIZE as u8 / 2, BOARD_SIZE as u8 / 2)
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Checked constructor for untrusted coordinates
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        Self::is_valid(row, col).then(|| Self::new(row as u8, col as u8))
    }

    /// Position `steps` cells away along `(dr, dc)`, if still on the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Option<Self> {
        Self::try_new(self.row as i32 + dr * steps, self.col as i32 + dc * steps)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
