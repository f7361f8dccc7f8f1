use std::fmt;

use battlesnake_game_types::wire_representation::{self, Game};
use color_eyre::eyre::{ensure, eyre};
use serde::{Deserialize, Serialize};

/// A cell on the board. `x` grows to the right, `y` grows upwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell reached by taking `mv` from here.
    pub fn step(self, mv: Move) -> Self {
        let (dx, dy) = mv.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<&wire_representation::Position> for Position {
    fn from(pos: &wire_representation::Position) -> Self {
        Self::new(pos.x, pos.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every move, in the order candidates are considered.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (0, 1),
            Move::Down => (0, -1),
            Move::Left => (-1, 0),
            Move::Right => (1, 0),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    pub id: String,
    /// Head first, tail last. Segments may be stacked on the same cell.
    pub body: Vec<Position>,
}

impl Snake {
    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }

    pub fn neck(&self) -> Option<Position> {
        self.body.get(1).copied()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}

impl From<&wire_representation::BattleSnake> for Snake {
    fn from(snake: &wire_representation::BattleSnake) -> Self {
        Self {
            id: snake.id.clone(),
            body: snake.body.iter().map(Position::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub food: Vec<Position>,
    /// All snakes on the board, including our own.
    pub snakes: Vec<Snake>,
}

impl Board {
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }
}

/// Everything the host tells us about the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    turn: u32,
    board: Board,
    you: Snake,
}

impl Snapshot {
    /// Builds a snapshot, rejecting boards without area and snakes without a head.
    pub fn new(turn: u32, board: Board, you: Snake) -> color_eyre::Result<Self> {
        ensure!(
            board.width >= 1 && board.height >= 1,
            "board must be at least 1x1, got {}x{}",
            board.width,
            board.height
        );
        ensure!(!you.body.is_empty(), "snake {} has an empty body", you.id);
        Ok(Self { turn, board, you })
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn you(&self) -> &Snake {
        &self.you
    }

    pub fn head(&self) -> Position {
        self.you.body[0]
    }

    /// Every snake on the board other than our own.
    pub fn opponents(&self) -> impl Iterator<Item = &Snake> {
        self.board
            .snakes
            .iter()
            .filter(move |snake| snake.id != self.you.id)
    }
}

impl TryFrom<&Game> for Snapshot {
    type Error = color_eyre::Report;

    fn try_from(game: &Game) -> color_eyre::Result<Self> {
        let turn = u32::try_from(game.turn).map_err(|e| eyre!("invalid turn: {e}"))?;
        let width =
            i32::try_from(game.board.width).map_err(|e| eyre!("invalid board width: {e}"))?;
        let height =
            i32::try_from(game.board.height).map_err(|e| eyre!("invalid board height: {e}"))?;
        let board = Board {
            width,
            height,
            food: game.board.food.iter().map(Position::from).collect(),
            snakes: game.board.snakes.iter().map(Snake::from).collect(),
        };
        Snapshot::new(turn, board, Snake::from(&game.you))
    }
}
