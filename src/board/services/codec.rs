//! JSON encoding of board snapshots.

use crate::board::domain::{Board, BoardDomainError, PersistedBoard, TaskId};
use thiserror::Error;

/// Errors raised while converting between boards and stored JSON.
#[derive(Debug, Error)]
pub enum SnapshotCodecError {
    /// The board could not be serialized.
    #[error("failed to encode board snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored value is not a board record.
    #[error("failed to decode board snapshot: {0}")]
    Decode(#[source] serde_json::Error),

    /// The stored record breaks a board invariant.
    #[error("stored board is invalid: {0}")]
    Invalid(#[from] BoardDomainError),
}

/// A board decoded from storage, with any repaired memberships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBoard {
    /// The rebuilt board.
    pub board: Board,
    /// Tasks whose stored column reference was corrected.
    pub misplaced: Vec<TaskId>,
    /// Tasks dropped because their stored content was blank.
    pub discarded: Vec<TaskId>,
}

/// Serializes a board to its stored JSON form.
///
/// # Errors
///
/// Returns [`SnapshotCodecError::Encode`] if serialization fails.
pub fn encode_board(board: &Board) -> Result<String, SnapshotCodecError> {
    serde_json::to_string(&board.to_persisted()).map_err(SnapshotCodecError::Encode)
}

/// Parses stored JSON back into a board.
///
/// # Errors
///
/// Returns [`SnapshotCodecError::Decode`] for malformed JSON and
/// [`SnapshotCodecError::Invalid`] when identifiers repeat.
pub fn decode_board(raw: &str) -> Result<DecodedBoard, SnapshotCodecError> {
    let persisted: PersistedBoard = serde_json::from_str(raw).map_err(SnapshotCodecError::Decode)?;
    let misplaced = persisted.misplaced_tasks();
    let discarded = persisted.blank_tasks();
    let board = Board::from_persisted(persisted)?;
    Ok(DecodedBoard {
        board,
        misplaced,
        discarded,
    })
}
