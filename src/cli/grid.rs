use crate::alphabet::ALPHABET;
use crate::error::Result;
use crate::grid::Grid;
use std::path::{Path, PathBuf};

/// Where a command gets its substitution grid from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GridSource {
    /// Fresh grid from the thread-local generator
    #[default]
    Random,
    /// `StdRng` seeded with a number
    Seed(u64),
    /// `StdRng` seeded with the SHA3-256 digest of a passphrase
    Passphrase(String),
    /// JSON grid file written by `adfgvx grid --output`
    File(PathBuf),
}

impl GridSource {
    pub fn load(&self) -> Result<Grid> {
        match self {
            GridSource::Random => Ok(Grid::random()),
            GridSource::Seed(seed) => Ok(Grid::from_seed(*seed)),
            GridSource::Passphrase(phrase) => Ok(Grid::from_passphrase(phrase)),
            GridSource::File(path) => read_grid_file(path),
        }
    }
}

/// Options for the grid command
#[derive(Debug, Clone, Default)]
pub struct GridOptions {
    pub source: GridSource,
    pub output: Option<PathBuf>,
}

/// Build a grid, optionally save it, and return its printed form
pub fn show_grid(options: &GridOptions) -> Result<String> {
    let grid = options.source.load()?;

    if let Some(path) = &options.output {
        write_grid_file(path, &grid)?;
    }

    Ok(render_grid(&grid))
}

pub fn read_grid_file(path: &Path) -> Result<Grid> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn write_grid_file(path: &Path, grid: &Grid) -> Result<()> {
    let json = serde_json::to_string_pretty(grid)?;
    std::fs::write(path, json + "\n")?;
    Ok(())
}

/// Table with the alphabet across the top and down the left side
pub fn render_grid(grid: &Grid) -> String {
    let mut output = String::new();

    output.push_str("      GRID\n\n");

    output.push_str("    ");
    for symbol in ALPHABET {
        output.push_str(&format!(" {}", symbol));
    }
    output.push('\n');

    output.push_str("  +--");
    output.push_str(&"--".repeat(ALPHABET.len()));
    output.push('\n');

    for (header, row) in ALPHABET.iter().zip(grid.rows()) {
        output.push_str(&format!("{} | ", header));
        for cell in row {
            output.push_str(&format!(" {}", cell));
        }
        output.push('\n');
    }

    output
}
