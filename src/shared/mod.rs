//! Shared utilities and constants used across SDK modules.

pub mod lamports;

pub use lamports::{lamports_to_ui, LAMPORTS_PER_SOL};
