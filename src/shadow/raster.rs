//! Dense per-sample evaluation of a classifier over a rectangular window.
//!
//! Every sample is classified independently, rows are processed in parallel.

use super::classifier::{Classification, ShadowClassifier};
use crate::Point;
use anyhow::{Result, ensure};
use rayon::prelude::*;
use tracing::debug;

/// Regular grid of sample points over the world window `[min, max]`.
///
/// Samples sit at cell centres. Row 0 is the northern edge (largest y),
/// matching the top-down orientation of a screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    pub min: Point,
    pub max: Point,
    pub columns: usize,
    pub rows: usize,
}

impl SampleGrid {
    pub fn new(min: Point, max: Point, columns: usize, rows: usize) -> Result<Self> {
        ensure!(columns > 0 && rows > 0, "Sample grid needs at least one column and one row");
        ensure!(
            max.x > min.x && max.y > min.y,
            "Sample window must have a positive size"
        );
        Ok(Self {
            min,
            max,
            columns,
            rows,
        })
    }

    /// Grid over the square ground extent `[-ground_size/2, ground_size/2]^2`.
    pub fn covering_ground(ground_size: f64, columns: usize, rows: usize) -> Result<Self> {
        let half = 0.5 * ground_size;
        Self::new(Point::new(-half, -half), Point::new(half, half), columns, rows)
    }

    pub fn cell_width(&self) -> f64 {
        (self.max.x - self.min.x) / self.columns as f64
    }

    pub fn cell_height(&self) -> f64 {
        (self.max.y - self.min.y) / self.rows as f64
    }

    pub fn cell_area(&self) -> f64 {
        self.cell_width() * self.cell_height()
    }

    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// World position of the sample in column `col`, row `row`.
    pub fn sample_point(&self, col: usize, row: usize) -> Point {
        Point::new(
            self.min.x + (col as f64 + 0.5) * self.cell_width(),
            self.max.y - (row as f64 + 0.5) * self.cell_height(),
        )
    }
}

/// Classification of every sample of a `SampleGrid`, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationGrid {
    pub grid: SampleGrid,
    pub cells: Vec<Classification>,
}

impl ClassificationGrid {
    pub fn get(&self, col: usize, row: usize) -> Option<Classification> {
        if col >= self.grid.columns || row >= self.grid.rows {
            return None;
        }
        Some(self.cells[row * self.grid.columns + col])
    }

    pub fn count(&self, class: Classification) -> usize {
        self.cells.iter().filter(|c| **c == class).count()
    }

    /// Approximate ground area of a class [m2].
    pub fn area(&self, class: Classification) -> f64 {
        self.count(class) as f64 * self.grid.cell_area()
    }

    /// One text line per row, using `Classification::symbol()`.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.grid.columns + 1) * self.grid.rows);
        for row in self.cells.chunks(self.grid.columns) {
            for c in row {
                out.push(c.symbol());
            }
            out.push('\n');
        }
        out
    }
}

/// Classifies every sample of `grid` with `classifier`.
pub fn classify_grid<C>(classifier: &C, grid: &SampleGrid) -> ClassificationGrid
where
    C: ShadowClassifier + ?Sized,
{
    let mut cells = vec![Classification::Ground; grid.len()];

    cells
        .par_chunks_mut(grid.columns)
        .enumerate()
        .for_each(|(row, line)| {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = classifier.classify(grid.sample_point(col, row));
            }
        });

    let result = ClassificationGrid { grid: *grid, cells };
    debug!(
        classifier = classifier.name(),
        samples = grid.len(),
        shadow = result.count(Classification::Shadow),
        footprint = result.count(Classification::Footprint),
        "classified sample grid"
    );
    result
}
