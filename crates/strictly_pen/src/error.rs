//! Error types for board construction and move validation.

use super::point::Point;
use derive_more::{Display, Error};
use tracing::instrument;

/// Reason a connection between two nodes is refused.
///
/// Illegal moves are an expected outcome, so the connect operations report
/// them as `None`; this type is for callers that want to know why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The destination node does not exist.
    #[display("Destination node is missing")]
    Missing,

    /// A coordinate is negative.
    #[display("Coordinate {} is negative", _0)]
    NegativeCoordinate(Point),

    /// A coordinate lies outside the board.
    #[display("Point {} is outside the board", _0)]
    OutOfBounds(Point),

    /// The destination is a wall.
    #[display("Node {} is a wall", _0)]
    Wall(Point),

    /// The source node has no connection yet.
    #[display("Node {} is not connected", _0)]
    SourceNotConnected(Point),

    /// The destination node is already connected.
    #[display("Node {} is already connected", _0)]
    DestinationConnected(Point),

    /// The two nodes are not neighbours.
    #[display("Nodes {} and {} are not adjacent", _0, _1)]
    NotAdjacent(Point, Point),

    /// The diagonal would cross an existing diagonal.
    #[display("Diagonal {} -> {} crosses an existing connection", _0, _1)]
    Crossing(Point, Point),
}

impl std::error::Error for MoveError {}

/// What went wrong while building a board.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum BoardErrorKind {
    /// Width or height is zero.
    #[display("Board must be at least 1x1, got {}x{}", _0, _1)]
    ZeroSize(usize, usize),

    /// The grid has more nodes than [`MAX_NODES`](crate::MAX_NODES).
    #[display("Board {}x{} exceeds the node limit", _0, _1)]
    TooLarge(usize, usize),

    /// The player list is empty.
    #[display("At least one player is required")]
    NoPlayers,

    /// Wall density is not a probability.
    #[display("Wall density must be within [0, 1], got {}", _0)]
    InvalidWallDensity(f64),

    /// The requested anchor is off the board.
    #[display("Anchor {} is outside the board", _0)]
    AnchorOutOfBounds(Point),

    /// An explicit wall is off the board.
    #[display("Wall {} is outside the board", _0)]
    WallOutOfBounds(Point),

    /// The requested anchor is also listed as a wall.
    #[display("Anchor {} is listed as a wall", _0)]
    AnchorOnWall(Point),

    /// Explicit walls leave no cell for a random anchor.
    #[display("Every cell is a wall, no room for the anchor")]
    NoOpenCell,
}

/// Board configuration error with location tracking.
#[derive(Debug, Clone, PartialEq, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// Error kind.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<BoardErrorKind> for BoardError {
    #[track_caller]
    fn from(kind: BoardErrorKind) -> Self {
        Self::new(kind)
    }
}
