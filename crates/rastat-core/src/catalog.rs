//! Catalog - Named raster layers
//!
//! Layers are registered under a fully qualified `name@mapset` key and
//! opened for reading by name. Opening a layer that does not exist is a
//! source-read failure ([`Error::LayerNotFound`]).
//!
//! # Examples
//!
//! ```
//! use rastat_core::{Catalog, Raster, RasterSource};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert("elevation", "PERMANENT", Raster::new_continuous(4, 5).unwrap());
//!
//! let reader = catalog.open_old("elevation", "").unwrap();
//! assert_eq!(reader.rows(), 4);
//! assert!(catalog.open_old("slope", "PERMANENT").is_err());
//! ```

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::raster::{Raster, RasterReader};

/// Join a layer name and mapset into `name@mapset`
///
/// A name that is already qualified, or an empty mapset, is returned as is.
pub fn fully_qualified_name(name: &str, mapset: &str) -> String {
    if name.contains('@') || mapset.is_empty() {
        name.to_string()
    } else {
        format!("{name}@{mapset}")
    }
}

/// Split `name@mapset` into its parts; the mapset is `""` when absent
pub fn split_qualified_name(qualified: &str) -> (&str, &str) {
    match qualified.split_once('@') {
        Some((name, mapset)) => (name, mapset),
        None => (qualified, ""),
    }
}

/// Registry of named in-memory raster layers
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    layers: BTreeMap<String, Raster>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if no layer is registered
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Register `raster` as `name@mapset`, returning any layer it replaces
    pub fn insert(&mut self, name: &str, mapset: &str, raster: Raster) -> Option<Raster> {
        let (name, mapset) = resolve_parts(name, mapset);
        self.layers.insert(format!("{name}@{mapset}"), raster)
    }

    /// Remove a layer
    pub fn remove(&mut self, name: &str, mapset: &str) -> Option<Raster> {
        let key = self.resolve(name, mapset)?;
        self.layers.remove(&key)
    }

    /// Find the mapset holding `name`
    ///
    /// With several candidates the alphabetically first mapset wins.
    pub fn find_mapset(&self, name: &str) -> Option<&str> {
        let prefix = format!("{name}@");
        self.layers
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .map(|(key, _)| &key[prefix.len()..])
            .next()
    }

    /// Look up a layer
    ///
    /// An empty `mapset` searches every mapset (see [`find_mapset`](Self::find_mapset)).
    pub fn get(&self, name: &str, mapset: &str) -> Option<&Raster> {
        let key = self.resolve(name, mapset)?;
        self.layers.get(&key)
    }

    /// Open an existing layer for reading
    ///
    /// # Errors
    ///
    /// Returns `Error::LayerNotFound` with the qualified name if no such
    /// layer is registered.
    pub fn open_old(&self, name: &str, mapset: &str) -> Result<RasterReader<'_>> {
        self.get(name, mapset)
            .map(RasterReader::new)
            .ok_or_else(|| Error::LayerNotFound(fully_qualified_name(name, mapset)))
    }

    /// Iterate over `(qualified name, raster)` in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Raster)> {
        self.layers.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn resolve(&self, name: &str, mapset: &str) -> Option<String> {
        let (name, mapset) = resolve_parts(name, mapset);
        if mapset.is_empty() {
            let found = self.find_mapset(name)?;
            Some(format!("{name}@{found}"))
        } else {
            Some(format!("{name}@{mapset}"))
        }
    }
}

fn resolve_parts<'a>(name: &'a str, mapset: &'a str) -> (&'a str, &'a str) {
    let (bare, qualified_mapset) = split_qualified_name(name);
    if qualified_mapset.is_empty() {
        (bare, mapset)
    } else {
        (bare, qualified_mapset)
    }
}
