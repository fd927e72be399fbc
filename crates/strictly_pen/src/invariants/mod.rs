//! First-class invariants for the board.
//!
//! Invariants are logical properties that must hold after every move.
//! They are checked in debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for pairs of invariants and for the four-tuple
/// [`BoardInvariants`].
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3, I4);

pub mod connection_geometry;
pub mod cursors_connected;
pub mod unique_edges;
pub mod walls_isolated;

pub use connection_geometry::ConnectionGeometryInvariant;
pub use cursors_connected::CursorsConnectedInvariant;
pub use unique_edges::UniqueEdgesInvariant;
pub use walls_isolated::WallsIsolatedInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (
    CursorsConnectedInvariant,
    ConnectionGeometryInvariant,
    UniqueEdgesInvariant,
    WallsIsolatedInvariant,
);
