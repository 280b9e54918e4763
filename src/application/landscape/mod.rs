//! Landscape import use cases

pub mod use_cases;

pub use use_cases::{FetchLandscapeUseCase, SyncError, SyncLandscapeUseCase, SyncOutcome};
