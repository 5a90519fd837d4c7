//! Application services for the task board.

mod codec;
mod config;
mod store;

pub use codec::{DecodedBoard, SnapshotCodecError, decode_board, encode_board};
pub use config::{BoardStoreConfig, DEFAULT_STORAGE_KEY, UNREADABLE_SUFFIX};
pub use store::{BoardStore, BoardStoreError};
