//! The board: grid ownership, cursors, turn order and the move engine.

use super::connection::Connection;
use super::connectivity::{Connectivity, Cursor};
use super::direction::Direction;
use super::error::{BoardError, MoveError};
use super::invariants::{BoardInvariants, InvariantSet};
use super::node::Node;
use super::player::{PlayerId, PlayerRotation, PlayerSpec};
use super::point::Point;
use super::policy::MovePolicy;
use super::rules::{self, GameStatus};
use super::settings::BoardSettings;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, error, info, instrument, warn};

/// Neighbour scan order: top row, then the row itself, then the bottom row.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Glyphs for cells without connections.
pub struct NodeSymbol;

impl NodeSymbol {
    /// Unconnected node.
    pub const EMPTY: char = '○';
    /// Connected node (the anchor before any move).
    pub const FILLED: char = '●';
    /// Wall.
    pub const WALL: char = '■';
}

/// A game board.
///
/// Owns every node (row-major) and every connection. Connections refer to
/// nodes by coordinates only.
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) connections: Vec<Connection>,
    pub(crate) anchor: Point,
    pub(crate) head: Point,
    pub(crate) tail: Point,
    pub(crate) rotation: PlayerRotation,
    pub(crate) settings: BoardSettings,
    pub(crate) rng: StdRng,
}

// ─────────────────────────────────────────────────────────────
//  Construction and reset
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Creates a board with a random anchor, the default players and the
    /// default wall density.
    ///
    /// # Errors
    ///
    /// Returns a `BoardError` for a zero-sized board.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        BoardSettings::new(width, height).build()
    }

    /// Lays out nodes for already validated settings.
    #[instrument(skip(settings, rotation, rng), fields(width = settings.width, height = settings.height))]
    pub(crate) fn generate(settings: BoardSettings, rotation: PlayerRotation, mut rng: StdRng) -> Self {
        let width = settings.width;
        let height = settings.height;
        let explicit_walls: HashSet<Point> = settings.walls.iter().copied().collect();

        let anchor = match settings.anchor {
            Some(anchor) => anchor,
            None => all_points(width, height)
                .filter(|p| !explicit_walls.contains(p))
                .choose(&mut rng)
                .expect("validated settings leave an open cell"),
        };

        let mut nodes = Vec::with_capacity(width * height);
        for position in all_points(width, height) {
            let node = if position == anchor {
                Node::anchor(position)
            } else if explicit_walls.contains(&position) || rng.random_bool(settings.wall_density) {
                Node::wall(position)
            } else {
                Node::new(position)
            };
            nodes.push(node);
        }

        let walls = nodes.iter().filter(|n| n.is_wall()).count();
        info!(%anchor, walls, players = rotation.len(), "Board created");

        Self {
            width,
            height,
            nodes,
            connections: Vec::new(),
            anchor,
            head: anchor,
            tail: anchor,
            rotation,
            settings,
            rng,
        }
    }

    /// Replaces all state with a fresh board of the same shape and players.
    ///
    /// Walls are re-rolled and the rotation restarts at the first player.
    /// The anchor is re-drawn unless the settings fix it.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let rng = std::mem::replace(&mut self.rng, StdRng::seed_from_u64(0));
        let mut rotation = self.rotation.clone();
        rotation.restart();
        *self = Board::generate(self.settings.clone(), rotation, rng);
    }

    /// Consumes the board and returns a freshly reset one.
    pub fn flush(mut self) -> Self {
        self.reset();
        self
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Settings the board was built from.
    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    /// Where the game started.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Head cursor position.
    pub fn head(&self) -> Point {
        self.head
    }

    /// Tail cursor position.
    pub fn tail(&self) -> Point {
        self.tail
    }

    /// Position of the given cursor.
    pub fn cursor(&self, cursor: Cursor) -> Point {
        match cursor {
            Cursor::Head => self.head,
            Cursor::Tail => self.tail,
        }
    }

    /// Every node, row by row.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Rows of nodes, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Node]> {
        self.nodes.chunks(self.width)
    }

    /// Every connection in the order it was drawn.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.rotation.current()
    }

    /// Details of the player whose turn it is.
    pub fn current_player_spec(&self) -> &PlayerSpec {
        self.rotation.current_spec()
    }

    /// Looks up a player.
    pub fn player(&self, id: PlayerId) -> Option<&PlayerSpec> {
        self.rotation.get(id)
    }

    /// All players in turn order.
    pub fn players(&self) -> &[PlayerSpec] {
        self.rotation.players()
    }

    /// True if `point` lies on the board.
    pub fn in_bounds(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    /// The node at `point`, or `None` off the board.
    pub fn node_at(&self, point: Point) -> Option<&Node> {
        self.index(point).map(|i| &self.nodes[i])
    }

    /// True if a connection joins `a` and `b` in either order.
    pub fn has_connection(&self, a: Point, b: Point) -> bool {
        self.connections.iter().any(|c| c.joins(a, b))
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move generation
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Legal moves out of `origin`.
    ///
    /// Neighbours are scanned top-left to bottom-right. Off-board neighbours
    /// are skipped, diagonals that would cross an existing diagonal are
    /// excluded, and the rest are filtered by [`Node::can_connect`]. An
    /// origin off the board has no moves.
    pub fn possible_connections(&self, origin: Point) -> Vec<Connectivity> {
        let Some(node) = self.node_at(origin) else {
            return Vec::new();
        };

        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(dx, dy)| origin.offset(dx, dy))
            .filter(|&p| self.in_bounds(p))
            .filter(|&p| !rules::crosses(self, origin, p))
            .map(|p| node.can_connect(self.node_at(p)))
            .filter(|c| c.is_possible())
            .collect()
    }

    /// Legal moves out of the given cursor, tagged with it.
    pub fn moves_from(&self, cursor: Cursor) -> Vec<Connectivity> {
        self.possible_connections(self.cursor(cursor))
            .into_iter()
            .map(|c| c.from_cursor(cursor))
            .collect()
    }

    /// Legal moves out of the head.
    pub fn head_moves(&self) -> Vec<Connectivity> {
        self.moves_from(Cursor::Head)
    }

    /// Legal moves out of the tail.
    pub fn tail_moves(&self) -> Vec<Connectivity> {
        self.moves_from(Cursor::Tail)
    }

    /// Head moves followed by tail moves.
    ///
    /// Not de-duplicated: a node next to both cursors appears twice, once per
    /// cursor.
    pub fn available_moves(&self) -> Vec<Connectivity> {
        let mut moves = self.head_moves();
        moves.extend(self.tail_moves());
        moves
    }

    /// The `number`-th entry (1-based) of [`Board::available_moves`].
    pub fn pick(&self, number: usize) -> Option<Connectivity> {
        self.available_moves().get(number.checked_sub(1)?).copied()
    }

    /// Explains whether the cursor may connect to `end` right now.
    pub fn check_move(&self, cursor: Cursor, end: Point) -> Result<Direction, MoveError> {
        let origin = self.cursor(cursor);
        if end.is_negative() {
            return Err(MoveError::NegativeCoordinate(end));
        }
        let target = self.node_at(end).ok_or(MoveError::OutOfBounds(end))?;
        let source = self.node_at(origin).ok_or(MoveError::OutOfBounds(origin))?;
        let direction = source.check_connect(Some(target))?;
        if rules::crosses(self, origin, end) {
            return Err(MoveError::Crossing(origin, end));
        }
        Ok(direction)
    }

    /// True when the cursor has nowhere to go.
    pub fn is_blocked(&self, cursor: Cursor) -> bool {
        self.moves_from(cursor).is_empty()
    }

    /// Whether the game goes on, and who lost if not.
    pub fn status(&self) -> GameStatus {
        rules::status(self)
    }
}

// ─────────────────────────────────────────────────────────────
//  Mutation
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Draws a connection from the head to `mv.end()` for the current player.
    ///
    /// On success the head moves to the new node and the turn passes. A stale
    /// or illegal move changes nothing and returns `None`.
    pub fn connect_head(&mut self, mv: &Connectivity) -> Option<Connection> {
        self.connect(Cursor::Head, mv)
    }

    /// Tail counterpart of [`Board::connect_head`].
    pub fn connect_tail(&mut self, mv: &Connectivity) -> Option<Connection> {
        self.connect(Cursor::Tail, mv)
    }

    /// Plays a move from the cursor that offered it.
    ///
    /// An untagged move is played from whichever cursor sits on its start,
    /// the head first. A move starting at neither cursor is refused.
    pub fn connect_move(&mut self, mv: &Connectivity) -> Option<Connection> {
        let cursor = match mv.cursor() {
            Some(cursor) => cursor,
            None if mv.start() == self.head => Cursor::Head,
            None if mv.start() == self.tail => Cursor::Tail,
            None => {
                debug!(start = %mv.start(), "Move starts at neither cursor");
                return None;
            }
        };
        self.connect(cursor, mv)
    }

    /// Draws a connection from `cursor` to `mv.end()` for the current player.
    #[instrument(skip(self, mv), fields(to = %mv.end(), player = %self.rotation.current()))]
    pub fn connect(&mut self, cursor: Cursor, mv: &Connectivity) -> Option<Connection> {
        let origin = self.cursor(cursor);
        let end = mv.end();

        if let Err(reason) = self.check_move(cursor, end) {
            debug!(%origin, %reason, "Move refused");
            return None;
        }

        let owner = self.rotation.current();
        let from = self.index(origin)?;
        let to = self.index(end)?;
        let (source, target) = pair_mut(&mut self.nodes, from, to)?;
        let connection = source.connect(target, owner)?;

        match cursor {
            Cursor::Head => {
                source.set_head(false);
                target.set_head(true);
                self.head = end;
            }
            Cursor::Tail => {
                source.set_tail(false);
                target.set_tail(true);
                self.tail = end;
            }
        }
        self.connections.push(connection);
        let next = self.rotation.advance();
        debug!(%next, connections = self.connections.len(), "Move applied");

        self.verify_invariants();
        Some(connection)
    }

    /// Plays until no legal move is left or the policy gives up.
    #[instrument(skip(self, policy), fields(policy = policy.name()))]
    pub fn play_out<P: MovePolicy + ?Sized>(&mut self, policy: &mut P) -> GameStatus {
        loop {
            let moves = self.available_moves();
            if moves.is_empty() {
                break;
            }
            let Some(mv) = policy.choose(self, &moves) else {
                debug!("Policy declined to move");
                break;
            };
            if self.connect_move(&mv).is_none() {
                warn!(%mv, "Policy picked an illegal move");
                break;
            }
        }

        let status = self.status();
        info!(%status, connections = self.connections.len(), "Play-out finished");
        status
    }

    fn verify_invariants(&self) {
        if cfg!(debug_assertions) {
            let result = BoardInvariants::check_all(self);
            if let Err(violations) = &result {
                error!(?violations, "Board invariants violated");
            }
            debug_assert!(result.is_ok(), "board invariants violated: {result:?}");
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Text rendering
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Grid dump: a header of column indices, then each row prefixed by its
    /// index. Cells show the arrow of their latest connection, or their fill.
    pub fn display_as_text(&self) -> String {
        let pad = (self.width.max(self.height) - 1).to_string().len();
        let mut result = String::new();

        result.push_str(&" ".repeat(pad + 1));
        for x in 0..self.width {
            result.push_str(&format!("{x:>pad$} "));
        }
        result.push('\n');

        for (y, row) in self.rows().enumerate() {
            result.push_str(&format!("{y:>pad$} "));
            for node in row {
                result.push_str(&format!("{:>pad$} ", cell_symbol(node)));
            }
            result.push('\n');
        }
        result
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_as_text())
    }
}

fn cell_symbol(node: &Node) -> char {
    match node.last_connection() {
        Some(connection) => connection.direction().symbol(),
        None if node.is_wall() => NodeSymbol::WALL,
        None if node.is_connected() => NodeSymbol::FILLED,
        None => NodeSymbol::EMPTY,
    }
}

fn all_points(width: usize, height: usize) -> impl Iterator<Item = Point> {
    (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x as i32, y as i32)))
}

/// Two distinct mutable nodes out of one slice.
fn pair_mut(nodes: &mut [Node], a: usize, b: usize) -> Option<(&mut Node, &mut Node)> {
    if a == b || a >= nodes.len() || b >= nodes.len() {
        return None;
    }
    if a < b {
        let (left, right) = nodes.split_at_mut(b);
        Some((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = nodes.split_at_mut(a);
        Some((&mut right[0], &mut left[b]))
    }
}
