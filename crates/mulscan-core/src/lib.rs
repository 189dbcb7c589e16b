#![deny(unsafe_code)]

//! mulscan core engine.
//!
//! Scans text for `mul(a,b)` instructions and sums their products, either
//! unconditionally or gated by `do()` / `don't()` toggles that stay in effect
//! across line boundaries. Matched literals can be streamed to a
//! [`MatchSink`] without touching the arithmetic.

/// Compile-time build metadata (version, git hash, profile).
pub mod build_info;
/// Scan error type.
pub mod error;
/// `do()` / `don't()` segmentation and the gate fold state.
pub mod gate;
/// `mul(a,b)` extraction.
pub mod pattern;
/// Two-part result and its stdout rendering.
pub mod report;
/// Match log destinations.
pub mod sink;
/// Configuration-driven runs.
pub mod solver;
/// Line-by-line summation over readers and files.
pub mod summation;

pub use error::ScanError;
pub use gate::{GateState, Instruction, Piece};
pub use pattern::{Mul, matches, sum_products};
pub use report::Report;
pub use sink::{AppendFileSink, MatchSink, NoopSink};
pub use solver::Solver;
pub use summation::{part_one, part_two, sum_gated, sum_gated_str, sum_ungated, sum_ungated_str};
