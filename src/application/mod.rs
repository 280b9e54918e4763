//! Use cases and application services

pub mod landscape;
