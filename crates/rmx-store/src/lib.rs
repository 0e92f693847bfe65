//! RMX Store - Persistence seam for the assignment model
//!
//! The model in `rmx-core` is pure and in-memory; this crate owns the
//! boundary where data enters and leaves:
//! - [`TaskRepository`]: the load/save trait
//! - [`MemoryRepository`]: in-memory reference implementation
//! - [`FixtureRepository`]: JSON fixture file with load-time validation

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod fixture;
pub mod repository;

// Re-exports for convenience
pub use error::StoreError;
pub use fixture::{FixtureRepository, MatrixFixture};
pub use repository::{load_matrix, MemoryRepository, TaskRepository};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
