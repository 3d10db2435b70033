//! Benchmark result documents for the IREE dashboard uploader.
//!
//! The benchmark pipeline writes one JSON document per device batch. Each
//! document names the commit it was built from and lists benchmark cases
//! together with the harness output, including pre-computed aggregates.
//!
//! # Quick Start
//!
//! ```no_run
//! use iree_dashboard_benchmarks::{io, AggregateKind};
//!
//! let results = io::read_and_merge(&["pixel4.json", "s20.json"])?;
//! for (index, case) in results.benchmarks.iter().enumerate() {
//!     let mean = results.aggregate_time(index, AggregateKind::Mean)?;
//!     println!("{}: {} ms", case.benchmark_info, mean);
//! }
//! # Ok::<(), iree_dashboard_benchmarks::BenchmarkError>(())
//! ```
//!
//! # Modules
//!
//! - [`info`] - Benchmark identity and series identifiers
//! - [`result`] - The `BenchmarkResults` document, merge and aggregates
//! - [`io`] - Reading and writing result files
//! - [`error`] - Error types

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod info;
pub mod io;
pub mod result;

pub use error::BenchmarkError;
pub use info::{BenchmarkInfo, BenchmarkRunner, DeviceInfo, ModelSource};
pub use result::{AggregateKind, BenchmarkCase, BenchmarkResults, BenchmarkRunResult};
