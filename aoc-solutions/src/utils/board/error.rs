use aoc_solver::ParseError;
use thiserror::Error;

use super::NodeId;

/// Why a board could not be built or composed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board input is empty")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cannot stack an empty list of layers")]
    NoLayers,
    #[error("layer is {found_width}x{found_height}, expected {width}x{height}")]
    LayerShape {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },
    #[error("layer {0} does not exist")]
    NoSuchLayer(usize),
}

impl From<BoardError> for ParseError {
    fn from(err: BoardError) -> Self {
        ParseError::InvalidFormat(err.to_string())
    }
}

/// Path reconstruction was asked for a node the walk never reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("node {0:?} is not reachable from the walk source")]
    Unreachable(NodeId),
}
