//! Category statistics regression test
//!
//! Exact tallies of discrete values, null handling, windows, named layers
//! and read failures.

use rastat_core::{Catalog, Raster, Window, WindowedSource};
use rastat_stats::{CategoryStats, StatsError, StatsResult, collect_cell_stats};
use rastat_test::{CountingSource, FailingSource, RegParams, discrete_raster};

/// Categories cycling 0..7 with every 5th cell null
fn make_striped(rows: usize, cols: usize) -> Raster {
    let cells = (0..rows * cols)
        .map(|i| if i % 5 == 4 { None } else { Some((i % 7) as i32) })
        .collect();
    Raster::from_cells(rows, cols, cells).unwrap()
}

fn open_and_collect(catalog: &Catalog, name: &str) -> StatsResult<CategoryStats> {
    let mut reader = catalog.open_old(name, "")?;
    collect_cell_stats(&mut reader)
}

#[test]
fn catstats_reg_small_grid() {
    let mut rp = RegParams::new("catstats_small");

    // [1, 1], [2, null]
    let raster = discrete_raster(&[&[Some(1), Some(1)], &[Some(2), None]]).unwrap();
    let stats = collect_cell_stats(&mut raster.reader()).unwrap();

    rp.compare_values(2.0, stats.len() as f64, 0.0);
    rp.compare_values(2.0, stats.get(1).unwrap_or(0) as f64, 0.0);
    rp.compare_values(1.0, stats.get(2).unwrap_or(0) as f64, 0.0);
    rp.compare_values(1.0, stats.null_count() as f64, 0.0);
    rp.compare_values(3.0, stats.total() as f64, 0.0);

    assert!(rp.cleanup(), "catstats small grid tests failed");
}

#[test]
fn catstats_reg_total_matches_non_null() {
    let mut rp = RegParams::new("catstats_total");

    let raster = make_striped(37, 23);
    let non_null = (37 * 23 - raster.null_count()) as f64;
    let stats = collect_cell_stats(&mut raster.reader()).unwrap();

    rp.compare_values(non_null, stats.total() as f64, 0.0);
    rp.compare_values(raster.null_count() as f64, stats.null_count() as f64, 0.0);
    rp.compare_values(0.0, stats.min_category().unwrap_or(-1) as f64, 0.0);
    rp.compare_values(6.0, stats.max_category().unwrap_or(-1) as f64, 0.0);

    // Every key was observed at least once
    let all_positive = stats.iter().all(|(_, count)| count > 0);
    rp.compare_values(1.0, if all_positive { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "catstats total tests failed");
}

#[test]
fn catstats_reg_idempotent() {
    let raster = make_striped(12, 9);
    let first = collect_cell_stats(&mut raster.reader()).unwrap();
    let second = collect_cell_stats(&mut raster.reader()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn catstats_reg_reads_each_row_once() {
    let raster = make_striped(8, 4);
    let mut source = CountingSource::new(raster.reader());
    collect_cell_stats(&mut source).unwrap();
    assert_eq!(source.reads(), 8);
}

#[test]
fn catstats_reg_window() {
    let mut rp = RegParams::new("catstats_window");

    let raster = discrete_raster(&[
        &[Some(9), Some(9), Some(9), Some(9)],
        &[Some(9), Some(1), Some(2), Some(9)],
        &[Some(9), Some(2), None, Some(9)],
    ])
    .unwrap();
    let window = Window::new(1, 1, 2, 2).unwrap();
    let mut source = WindowedSource::new(raster.reader(), window).unwrap();
    let stats = collect_cell_stats(&mut source).unwrap();

    rp.compare_values(0.0, stats.get(9).unwrap_or(0) as f64, 0.0);
    rp.compare_values(1.0, stats.get(1).unwrap_or(0) as f64, 0.0);
    rp.compare_values(2.0, stats.get(2).unwrap_or(0) as f64, 0.0);
    rp.compare_values(1.0, stats.null_count() as f64, 0.0);

    assert!(rp.cleanup(), "catstats window tests failed");
}

#[test]
fn catstats_reg_read_failure() {
    let raster = make_striped(6, 6);
    let mut source = FailingSource::new(raster.reader(), 4);
    let err = collect_cell_stats(&mut source).unwrap_err();
    assert!(matches!(
        err,
        StatsError::Source(rastat_core::Error::Io(_))
    ));
}

#[test]
fn catstats_reg_named_layers() {
    let mut catalog = Catalog::new();
    catalog.insert("landuse", "PERMANENT", make_striped(5, 5));

    let stats = open_and_collect(&catalog, "landuse").unwrap();
    assert_eq!(stats.total(), 20);

    let err = open_and_collect(&catalog, "soils").unwrap_err();
    assert!(matches!(
        err,
        StatsError::Source(rastat_core::Error::LayerNotFound(_))
    ));
}

#[test]
fn catstats_reg_table() {
    let mut rp = RegParams::new("catstats_table");

    let raster = discrete_raster(&[
        &[Some(1), Some(1), Some(3)],
        &[Some(2), None, Some(3)],
        &[Some(3), Some(3), Some(-4)],
    ])
    .unwrap();
    let stats = collect_cell_stats(&mut raster.reader()).unwrap();

    let table: String = stats
        .iter()
        .map(|(cat, count)| format!("{cat} {count}\n"))
        .collect();
    rp.write_data_and_check(table.as_bytes(), "txt").unwrap();

    assert!(rp.cleanup(), "catstats table tests failed");
}
