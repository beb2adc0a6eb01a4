//! rastat-test - Regression test framework for rastat
//!
//! Supports three modes, selected with the `REGTEST_MODE` environment
//! variable:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use rastat_test::RegParams;
//!
//! let mut rp = RegParams::new("catstats");
//! rp.compare_values(3.0, stats.total() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! Fixture builders ([`discrete_raster`], [`continuous_raster`]) and
//! instrumented sources ([`CountingSource`], [`FailingSource`]) are also
//! provided.

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{CountingSource, FailingSource, continuous_raster, discrete_raster};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // rastat-test is at crates/rastat-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
