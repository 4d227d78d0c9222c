use std::fmt;

use egress_core::{Point, Range};

/// Errors from floor construction, graph construction and search
/// preconditions.
///
/// An exhausted search is not an error: [`escape_route`](crate::escape_route)
/// reports it as `Ok(None)`, so callers can tell "no exit reachable" apart
/// from a malformed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An obstacle rectangle covers cells outside the floor.
    ObstacleOutOfBounds { obstacle: Range, floor: Range },
    /// An exit coordinate lies outside the floor.
    ExitOutOfBounds(Point),
    /// An exit coordinate falls on a blocked cell.
    ExitBlocked(Point),
    /// A search start coordinate lies outside the floor.
    StartOutOfBounds(Point),
    /// A search start coordinate falls on a blocked cell.
    StartBlocked(Point),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObstacleOutOfBounds { obstacle, floor } => {
                write!(f, "obstacle {obstacle} extends outside the floor {floor}")
            }
            Self::ExitOutOfBounds(p) => write!(f, "exit {p} lies outside the floor"),
            Self::ExitBlocked(p) => write!(f, "exit {p} falls on a blocked cell"),
            Self::StartOutOfBounds(p) => write!(f, "start {p} lies outside the floor"),
            Self::StartBlocked(p) => write!(f, "start {p} falls on a blocked cell"),
        }
    }
}

impl std::error::Error for Error {}
