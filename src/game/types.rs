#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Empty => write!(f, " "),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrientation {
    Horizontal,
    Vertical,
    Diagonal,
}

/// Presentation label for a completed line, consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePosition {
    Top,
    Middle,
    Bottom,
    Left,
    Center,
    Right,
    MainDiagonal,
    AntiDiagonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinPattern {
    pub cells: [usize; 3],
    pub orientation: LineOrientation,
    pub position: LinePosition,
}

impl WinPattern {
    const fn new(cells: [usize; 3], orientation: LineOrientation, position: LinePosition) -> Self {
        Self {
            cells,
            orientation,
            position,
        }
    }
}

/// The 8 completed lines, scanned in this exact order: rows top to bottom,
/// columns left to right, then the two diagonals. The scan order is observable
/// through `evaluate` on malformed boards and must stay stable.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    WinPattern::new([0, 1, 2], LineOrientation::Horizontal, LinePosition::Top),
    WinPattern::new([3, 4, 5], LineOrientation::Horizontal, LinePosition::Middle),
    WinPattern::new([6, 7, 8], LineOrientation::Horizontal, LinePosition::Bottom),
    WinPattern::new([0, 3, 6], LineOrientation::Vertical, LinePosition::Left),
    WinPattern::new([1, 4, 7], LineOrientation::Vertical, LinePosition::Center),
    WinPattern::new([2, 5, 8], LineOrientation::Vertical, LinePosition::Right),
    WinPattern::new([0, 4, 8], LineOrientation::Diagonal, LinePosition::MainDiagonal),
    WinPattern::new([2, 4, 6], LineOrientation::Diagonal, LinePosition::AntiDiagonal),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Won { mark: Mark, pattern: WinPattern },
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Unrecognized names fall back to the weakest opponent.
    pub fn from_name(name: &str) -> Self {
        match name {
            "normal" => Difficulty::Normal,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Local,
    Ai,
}

impl GameMode {
    /// Unrecognized names fall back to two-player local mode.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ai" => GameMode::Ai,
            _ => GameMode::Local,
        }
    }
}
