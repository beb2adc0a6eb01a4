//! Rastat Core - Raster data model for value-distribution statistics
//!
//! This crate provides the data structures the statistics collectors
//! consume:
//!
//! - [`Cell`] / [`DCell`] - Discrete and continuous cells (`None` is null)
//! - [`RasterSource`] - Row-at-a-time read interface
//! - [`Raster`] / [`RasterReader`] - In-memory layer and its read handle
//! - [`Window`] / [`WindowedSource`] - Active sub-region of a source
//! - [`Catalog`] - Named layers opened by `name@mapset`

pub mod catalog;
pub mod error;
pub mod raster;

pub use catalog::{Catalog, fully_qualified_name, split_qualified_name};
pub use error::{Error, Result};
pub use raster::source::check_row_request;
pub use raster::{
    Cell, DCell, Raster, RasterKind, RasterReader, RasterSource, Window, WindowedSource,
    cell_to_dcell, dcell_to_cell, normalize_dcell,
};
