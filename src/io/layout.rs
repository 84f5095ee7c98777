//! JSON map layout files
//!
//! A layout is an object whose `data` field holds rows of tile code strings,
//! optionally with `name`, `version` and `tileSize` metadata for renderers.
//! Classified layouts additionally list the rotation of every turn tile.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analysis::classifier::{Classification, RotationMap};
use crate::io::configuration::{DEFAULT_TILE_SIZE, MAX_TILE_SIZE, MIN_TILE_SIZE};
use crate::io::error::{MapError, Result};
use crate::spatial::{Cell, Grid, Rotation};

/// Rotation of one turn tile in a classified layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationEntry {
    /// Column of the tile
    pub x: usize,
    /// Row of the tile
    pub y: usize,
    /// Clockwise rotation to render the tile with
    pub rotation: Rotation,
}

/// Serialized map layout
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLayout {
    /// Rows of tile codes, top to bottom
    pub data: Vec<Vec<String>>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form version tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Tile edge in pixels for renderers
    #[serde(rename = "tileSize", default, skip_serializing_if = "Option::is_none")]
    pub tile_size: Option<u32>,
    /// Turn tile rotations, sorted row-major
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rotations: Vec<RotationEntry>,
}

impl MapLayout {
    /// Layout holding the codes of `grid`
    pub fn from_grid(grid: &Grid) -> Self {
        let data = grid
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.code().to_string()).collect())
            .collect();

        Self {
            data,
            ..Self::default()
        }
    }

    /// Layout holding a classified grid and its rotations
    pub fn from_classification(classification: &Classification) -> Self {
        Self {
            rotations: sorted_rotations(&classification.rotations),
            ..Self::from_grid(&classification.grid)
        }
    }

    /// Attach a display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse the `data` rows into a grid
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A string is not a known tile code
    /// - The layout has no rows or the rows differ in length
    pub fn to_grid(&self) -> Result<Grid> {
        let rows = self
            .data
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, code)| {
                        code.parse::<Cell>().map_err(|unknown| MapError::UnknownCode {
                            x,
                            y,
                            code: unknown.0,
                        })
                    })
                    .collect::<Result<Vec<Cell>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Grid::from_rows(rows)
    }

    /// Rotations as a lookup map
    pub fn rotation_map(&self) -> RotationMap {
        self.rotations
            .iter()
            .map(|entry| ([entry.x, entry.y], entry.rotation))
            .collect()
    }

    /// Tile size for rendering, falling back to the default when absent or out of range
    pub fn tile_size(&self) -> u32 {
        match self.tile_size {
            Some(size) if (MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&size) => size,
            Some(size) => {
                log::warn!(
                    "Tile size {size} is outside {MIN_TILE_SIZE}..={MAX_TILE_SIZE}, using {DEFAULT_TILE_SIZE}"
                );
                DEFAULT_TILE_SIZE
            }
            None => DEFAULT_TILE_SIZE,
        }
    }

    /// Read a layout from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a layout object
    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| MapError::FileSystem {
            path: path.to_path_buf(),
            operation: "read layout",
            source,
        })?;

        let layout: Self = serde_json::from_str(&json).map_err(|source| MapError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "Read layout '{}' ({} rows) from {}",
            layout.name.as_deref().unwrap_or("unnamed"),
            layout.data.len(),
            path.display()
        );
        Ok(layout)
    }

    /// Write the layout as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| MapError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        std::fs::write(path, json).map_err(|source| MapError::FileSystem {
            path: path.to_path_buf(),
            operation: "write layout",
            source,
        })
    }
}

fn sorted_rotations(rotations: &RotationMap) -> Vec<RotationEntry> {
    let mut entries: Vec<RotationEntry> = rotations
        .iter()
        .map(|(&[x, y], &rotation)| RotationEntry { x, y, rotation })
        .collect();
    entries.sort_by_key(|entry| (entry.y, entry.x));
    entries
}
