//! Key-value backed storage implementations.

pub mod file;
pub mod goal_repository;
pub mod memory;

pub use file::FileKvStore;
pub use goal_repository::GoalRepository;
pub use memory::MemoryKvStore;
