//! Strictly Pen - connectivity and move-legality engine for the pen game
//!
//! Players take turns drawing connections between neighbouring grid nodes,
//! starting from an anchor and extending the path from its head or its
//! tail. A destination must be free, on the board, not a wall, and a
//! diagonal may not cross an existing diagonal. The player to move when no
//! cursor can go anywhere loses.
//!
//! # Architecture
//!
//! - **Board**: owns the grid, the connections, both cursors and the turn order
//! - **Node / Connectivity**: the pairwise connection rule and its result
//! - **Rules**: crossing rule and terminal condition
//! - **Invariants**: properties checked after every move in debug builds
//! - **Policies**: automated move selection for play-outs
//!
//! # Example
//!
//! ```
//! use strictly_pen::{BoardSettings, GameStatus, Point, RandomPolicy};
//!
//! let mut board = BoardSettings::new(5, 5)
//!     .with_anchor(Point::new(0, 0))
//!     .with_wall_density(0.0)
//!     .with_seed(1)
//!     .build()
//!     .unwrap();
//!
//! let first = board.available_moves()[0];
//! board.connect_move(&first).unwrap();
//!
//! let status = board.play_out(&mut RandomPolicy::seeded(1));
//! assert!(matches!(status, GameStatus::Lost(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod connection;
mod connectivity;
mod direction;
mod error;
pub mod invariants;
mod node;
mod player;
mod point;
mod policy;
pub mod rules;
mod settings;
mod shared;

pub use board::{Board, NodeSymbol};
pub use connection::Connection;
pub use connectivity::{Connectivity, Cursor};
pub use direction::Direction;
pub use error::{BoardError, BoardErrorKind, MoveError};
pub use invariants::{BoardInvariants, Invariant, InvariantSet, InvariantViolation};
pub use node::Node;
pub use player::{PlayerId, PlayerRotation, PlayerSpec, Rgb};
pub use point::Point;
pub use policy::{FirstMovePolicy, MovePolicy, RandomPolicy};
pub use rules::GameStatus;
pub use settings::{BoardSettings, DEFAULT_WALL_DENSITY, MAX_NODES};
pub use shared::SharedBoard;
