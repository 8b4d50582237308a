//! Storage layer: the key-value persistence surface and the goal
//! repository that encodes collections onto it.

pub mod kv;
pub mod traits;

pub use kv::{FileKvStore, GoalRepository, MemoryKvStore};
pub use traits::KvStore;
