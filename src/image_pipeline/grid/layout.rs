//! Icon layouts: the ordered identifier table for a sprite sheet.
//!
//! A layout can be built in code, loaded from a TOML manifest, or taken from
//! the built-in incident-type table.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::image_pipeline::common::error::{ExtractionError, Result};
use crate::image_pipeline::grid::types::{CellDescriptor, GridSpec};

/// Output identifier and human readable label for one cell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconEntry {
    pub code: String,
    #[serde(default)]
    pub label: String,
}

impl IconEntry {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Grid geometry plus identifiers in row-major cell order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconLayout {
    pub columns: u32,
    pub rows: u32,
    #[serde(default)]
    pub icons: Vec<IconEntry>,
}

/// Incident-type sheet: 6 columns x 4 rows, read left to right, top to bottom.
const INCIDENT_TYPES: [(&str, &str); 24] = [
    ("1", "Emergencias por Fuego"),
    ("2", "Emergencias por Agua"),
    ("3", "Emergencias por Aire"),
    ("4", "Emergencias por Tierra"),
    ("5", "Emergencias Fisicoquímicas"),
    ("6", "Rescates y Recuperaciones"),
    ("7", "Emergencias por Vehículos"),
    ("8", "Emergencia Pre-hospitalaria"),
    ("9", "Otros Incidentes"),
    ("6.1.1.2.1", "Serpiente"),
    ("6.1.1.1", "Abejas/Avispas"),
    ("5.1.1", "Corto Circuito"),
    ("1.3.2", "Área de Desechos"),
    ("1.2.1", "Charral"),
    ("5.2.2.3.1", "Escape Gas LPG"),
    ("7.1.1", "Colisión Vehicular"),
    ("6.2.3", "Perezoso"),
    ("1.1.8.8", "Casa de Habitación"),
    ("3.3", "Caída de Árbol"),
    ("6.2.2", "Felino"),
    ("6.2.1", "Canino"),
    ("1.4.1.8.1", "Incendio Vehículo"),
    ("6.1.1.3", "Ataque de Perro"),
    ("9.2.1", "Revisión"),
];

impl IconLayout {
    pub fn new(grid: GridSpec, icons: Vec<IconEntry>) -> Self {
        Self {
            columns: grid.columns,
            rows: grid.rows,
            icons,
        }
    }

    /// The built-in 6x4 incident-type table.
    pub fn incident_types() -> Self {
        let icons = INCIDENT_TYPES
            .iter()
            .map(|&(code, label)| IconEntry::new(code, label))
            .collect();
        Self::new(GridSpec::new(6, 4), icons)
    }

    /// Parses a TOML manifest and validates it.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let layout: IconLayout =
            toml::from_str(source).map_err(|e| ExtractionError::InvalidLayout(e.to_string()))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reads and parses a TOML manifest from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading icon layout");

        let source = std::fs::read_to_string(path).map_err(|e| {
            ExtractionError::InvalidLayout(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&source).map_err(|e| match e {
            ExtractionError::InvalidLayout(msg) => {
                ExtractionError::InvalidLayout(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Same identifiers on a different grid.
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.columns = grid.columns;
        self.rows = grid.rows;
        self
    }

    pub fn grid(&self) -> GridSpec {
        GridSpec::new(self.columns, self.rows)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Checks the grid and that every code is usable as a unique file stem.
    pub fn validate(&self) -> Result<()> {
        let grid = self.grid();
        grid.validate()?;

        if self.icons.len() > grid.capacity() {
            return Err(ExtractionError::InvalidLayout(format!(
                "{} icons do not fit a {}x{} grid",
                self.icons.len(),
                grid.columns,
                grid.rows
            )));
        }

        let mut seen = HashSet::new();
        for entry in &self.icons {
            let code = entry.code.as_str();
            if code.is_empty() || code == "." || code == ".." {
                return Err(ExtractionError::InvalidLayout(format!(
                    "invalid icon code {:?}",
                    code
                )));
            }
            if code.contains(['/', '\\']) {
                return Err(ExtractionError::InvalidLayout(format!(
                    "icon code {:?} contains a path separator",
                    code
                )));
            }
            if !seen.insert(code) {
                return Err(ExtractionError::InvalidLayout(format!(
                    "duplicate icon code {:?}",
                    code
                )));
            }
        }

        Ok(())
    }

    /// Places every identifier on the grid in row-major order.
    pub fn descriptors(&self) -> impl Iterator<Item = CellDescriptor> + '_ {
        let grid = self.grid();
        self.icons.iter().enumerate().map(move |(index, entry)| {
            let (column, row) = grid.position(index);
            CellDescriptor {
                index,
                column,
                row,
                code: entry.code.clone(),
                label: entry.label.clone(),
            }
        })
    }
}

impl Default for IconLayout {
    fn default() -> Self {
        Self::incident_types()
    }
}
