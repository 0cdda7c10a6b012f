//! Density-bucket size table for Android launcher icons
//!
//! Android resource directories name their launcher icon folders after
//! screen-density buckets (`mipmap-mdpi`, `mipmap-hdpi`, ...), each bucket
//! mapping to a fixed square pixel size. This module models that table and
//! ships the standard five-bucket set as its default.

use serde::Deserialize;

/// One density bucket: the directory label and the square icon size it
/// receives.
#[derive(Debug, Clone, Deserialize)]
pub struct DensityEntry {
    /// Density label used in the `mipmap-<density>` directory name
    /// (e.g. "mdpi", "xxxhdpi").
    pub density: String,

    /// Icon edge length in pixels. Icons are always square.
    pub size: u32,
}

/// Ordered list of density buckets to generate.
///
/// Backed by a `Vec` so generation walks the buckets in their declared
/// order; the table is never mutated after construction.
#[derive(Debug, Clone)]
pub struct DensityTable {
    entries: Vec<DensityEntry>,
}

impl DensityTable {
    /// Builds a table from caller-provided entries, preserving their order.
    #[allow(dead_code)]
    pub fn new(entries: Vec<DensityEntry>) -> Self {
        Self { entries }
    }

    /// The buckets in generation order.
    pub fn entries(&self) -> &[DensityEntry] {
        &self.entries
    }
}

impl Default for DensityTable {
    /// The five standard Android density buckets, from `mdpi` up to
    /// `xxxhdpi`.
    fn default() -> Self {
        let density_json = r#"
        [
          { "density": "mdpi",    "size": 48 },
          { "density": "hdpi",    "size": 72 },
          { "density": "xhdpi",   "size": 96 },
          { "density": "xxhdpi",  "size": 144 },
          { "density": "xxxhdpi", "size": 192 }
        ]
        "#;

        let entries: Vec<DensityEntry> = serde_json::from_str(density_json).unwrap();
        Self { entries }
    }
}
