//! A single grid cell and the pairwise connection rule.

use super::connection::Connection;
use super::connectivity::Connectivity;
use super::direction::Direction;
use super::error::MoveError;
use super::player::PlayerId;
use super::point::Point;
use tracing::{debug, info};

/// One cell of the board.
///
/// Roles are orthogonal flags: a node can be the head, the tail, both (the
/// anchor at game start) or neither. Walls never take any other role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) position: Point,
    pub(crate) connected: bool,
    pub(crate) is_head: bool,
    pub(crate) is_tail: bool,
    pub(crate) is_wall: bool,
    pub(crate) connections: Vec<Connection>,
}

impl Node {
    /// A plain, unconnected node.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            connected: false,
            is_head: false,
            is_tail: false,
            is_wall: false,
            connections: Vec::new(),
        }
    }

    /// The starting node: connected, and both head and tail.
    pub fn anchor(position: Point) -> Self {
        Self {
            connected: true,
            is_head: true,
            is_tail: true,
            ..Self::new(position)
        }
    }

    /// A permanently blocked node.
    pub fn wall(position: Point) -> Self {
        Self {
            is_wall: true,
            ..Self::new(position)
        }
    }

    /// Grid position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Column.
    pub fn x(&self) -> i32 {
        self.position.x
    }

    /// Row.
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// True once the node is part of the drawn path.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// True if the head cursor sits here.
    pub fn is_head(&self) -> bool {
        self.is_head
    }

    /// True if the tail cursor sits here.
    pub fn is_tail(&self) -> bool {
        self.is_tail
    }

    /// True for walls.
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    /// Connections touching this node, oldest first.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The most recently drawn connection touching this node.
    pub fn last_connection(&self) -> Option<&Connection> {
        self.connections.last()
    }

    pub(crate) fn set_head(&mut self, is_head: bool) {
        self.is_head = is_head;
    }

    pub(crate) fn set_tail(&mut self, is_tail: bool) {
        self.is_tail = is_tail;
    }

    /// Explains whether `self` may connect to `other`.
    ///
    /// The destination must exist, have non-negative coordinates, not be a
    /// wall, not be connected yet, and sit on one of the 8 neighbouring
    /// cells. The source must already be connected.
    pub fn check_connect(&self, other: Option<&Node>) -> Result<Direction, MoveError> {
        let other = other.ok_or(MoveError::Missing)?;

        if self.position.is_negative() {
            return Err(MoveError::NegativeCoordinate(self.position));
        }
        if other.position.is_negative() {
            return Err(MoveError::NegativeCoordinate(other.position));
        }
        if other.is_wall {
            return Err(MoveError::Wall(other.position));
        }
        if !self.connected {
            return Err(MoveError::SourceNotConnected(self.position));
        }
        if other.connected {
            return Err(MoveError::DestinationConnected(other.position));
        }

        match Direction::classify(self.position, other.position) {
            Direction::Impossible => Err(MoveError::NotAdjacent(self.position, other.position)),
            direction => Ok(direction),
        }
    }

    /// Whether `self` may connect to `other`, as a value.
    ///
    /// Never fails; refusal is reported through [`Connectivity::is_possible`].
    /// A missing destination is reported with end [`Point::MISSING`].
    pub fn can_connect(&self, other: Option<&Node>) -> Connectivity {
        let end = other.map_or(Point::MISSING, Node::position);
        match self.check_connect(other) {
            Ok(direction) => Connectivity::possible(self.position, end, direction),
            Err(_) => Connectivity::impossible(self.position, end),
        }
    }

    /// Draws a connection from `self` to `other` for `owner`.
    ///
    /// Returns `None` without touching either node when the move is refused.
    pub fn connect(&mut self, other: &mut Node, owner: PlayerId) -> Option<Connection> {
        match self.check_connect(Some(other)) {
            Ok(direction) => {
                self.connected = true;
                other.connected = true;
                let connection = Connection::new(self.position, other.position, direction, owner);
                self.connections.push(connection);
                other.connections.push(connection);
                info!(from = %self.position, to = %other.position, %owner, "Connected");
                Some(connection)
            }
            Err(reason) => {
                debug!(from = %self.position, to = %other.position, %owner, %reason, "Can't connect");
                None
            }
        }
    }
}
