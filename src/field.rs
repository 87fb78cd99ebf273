//! Static 2D vector fields sampled on a dense grid.
//!
//! The grid is built once from a point current (a wire seen end-on) and is
//! read-only afterwards. Each cell stores the field at its integer
//! coordinate; sampling truncates positions to the containing cell.
//!
//! ```ignore
//! let grid = FieldGrid::from_line_current(&FieldConfig::new(512));
//! let b = grid.sample(Vec2::new(300.5, 120.2));
//! ```

use glam::Vec2;
use rayon::prelude::*;

use crate::error::ConfigError;

/// Parameters for a line-current field grid.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Grid cells per axis (the grid is square).
    pub resolution: u32,
    /// Position of the current source in grid coordinates.
    pub source: Vec2,
    /// Current strength; scales the field magnitude and sets its handedness.
    pub current: f32,
    /// Cells at or within this distance of the source stay zero.
    pub min_distance: f32,
}

impl FieldConfig {
    /// Create a field configuration with the source at the grid centre.
    ///
    /// Default values:
    /// - `current`: 1000.0
    /// - `min_distance`: 1.0
    pub fn new(resolution: u32) -> Self {
        let half = resolution as f32 / 2.0;
        Self {
            resolution,
            source: Vec2::new(half, half),
            current: 1000.0,
            min_distance: 1.0,
        }
    }

    /// Set the source position in grid coordinates.
    pub fn with_source(mut self, source: Vec2) -> Self {
        self.source = source;
        self
    }

    /// Set the current strength. Negative values reverse the circulation.
    pub fn with_current(mut self, current: f32) -> Self {
        self.current = current;
        self
    }

    /// Set the exclusion radius around the source.
    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Total number of cells.
    pub fn total_cells(&self) -> usize {
        self.resolution as usize * self.resolution as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.min_distance < 0.0 {
            return Err(ConfigError::Negative {
                name: "min_distance",
                value: self.min_distance as f64,
            });
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new(512)
    }
}

/// Field value of a point current at displacement `r` from the source.
///
/// Follows the right-hand rule: `current * (-r.y, r.x) / |r|²`. Returns zero
/// inside `min_distance`.
#[inline]
pub fn line_current_field(r: Vec2, current: f32, min_distance: f32) -> Vec2 {
    let r_mag = r.length();
    if r_mag > min_distance {
        Vec2::new(-r.y, r.x) * current / (r_mag * r_mag)
    } else {
        Vec2::ZERO
    }
}

/// Dense, immutable grid of 2D field vectors.
#[derive(Clone, Debug)]
pub struct FieldGrid {
    width: usize,
    height: usize,
    // Row-major: index = y * width + x
    cells: Vec<Vec2>,
}

impl FieldGrid {
    /// Evaluate the field of a point current at every cell.
    pub fn from_line_current(config: &FieldConfig) -> Self {
        let width = config.resolution as usize;
        let height = width;
        let mut cells = vec![Vec2::ZERO; width * height];

        cells
            .par_chunks_mut(width.max(1))
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    let r = Vec2::new(x as f32, y as f32) - config.source;
                    *cell = line_current_field(r, config.current, config.min_distance);
                }
            });

        log::debug!(
            "computed {}x{} field grid, source at ({}, {}), current {}",
            width,
            height,
            config.source.x,
            config.source.y,
            config.current
        );

        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Field value at cell `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Vec2> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Whether a continuous position lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, position: Vec2) -> bool {
        position.x >= 0.0
            && position.y >= 0.0
            && position.x < self.width as f32
            && position.y < self.height as f32
    }

    /// Field at the cell containing `position` (integer truncation).
    #[inline]
    pub fn sample(&self, position: Vec2) -> Option<Vec2> {
        if !self.contains(position) {
            return None;
        }
        self.get(position.x as usize, position.y as usize)
    }

    /// Iterate over `((x, y), value)` for every cell.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Vec2)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i % width, i / width), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_config_new() {
        let config = FieldConfig::new(512);
        assert_eq!(config.resolution, 512);
        assert_eq!(config.source, Vec2::new(256.0, 256.0));
        assert_eq!(config.current, 1000.0);
        assert_eq!(config.min_distance, 1.0);
        assert_eq!(config.total_cells(), 512 * 512);
    }

    #[test]
    fn test_field_config_validate() {
        assert!(FieldConfig::new(64).validate().is_ok());
        assert_eq!(FieldConfig::new(0).validate(), Err(ConfigError::EmptyGrid));
        assert!(FieldConfig::new(64).with_min_distance(-1.0).validate().is_err());
    }

    #[test]
    fn test_field_perpendicular_to_displacement() {
        let config = FieldConfig::new(64);
        let grid = FieldGrid::from_line_current(&config);

        for ((x, y), b) in grid.iter() {
            let r = Vec2::new(x as f32, y as f32) - config.source;
            if r.length() > config.min_distance {
                let cos = r.dot(b) / (r.length() * b.length());
                assert!(cos.abs() < 1e-5, "cell ({}, {}) cos = {}", x, y, cos);
            }
        }
    }

    #[test]
    fn test_field_magnitude_falls_off_inversely() {
        let config = FieldConfig::new(64);
        let grid = FieldGrid::from_line_current(&config);

        // 10 cells right of the source
        let b = grid.get(42, 32).unwrap();
        assert!((b.length() - 100.0).abs() < 1e-3);
        // Counter-clockwise for positive current: +y at +x
        assert!(b.y > 0.0);
        assert!(b.x.abs() < 1e-6);
    }

    #[test]
    fn test_cells_near_source_are_zero() {
        let grid = FieldGrid::from_line_current(&FieldConfig::new(64));
        assert_eq!(grid.get(32, 32), Some(Vec2::ZERO));
        // Distance exactly 1 is not > 1
        assert_eq!(grid.get(33, 32), Some(Vec2::ZERO));
        assert_ne!(grid.get(33, 33), Some(Vec2::ZERO));
    }

    #[test]
    fn test_negative_current_reverses_field() {
        let pos = FieldGrid::from_line_current(&FieldConfig::new(32));
        let neg = FieldGrid::from_line_current(&FieldConfig::new(32).with_current(-1000.0));
        assert_eq!(pos.get(5, 9).unwrap(), -neg.get(5, 9).unwrap());
    }

    #[test]
    fn test_sample_truncates_and_bounds() {
        let grid = FieldGrid::from_line_current(&FieldConfig::new(16));
        assert_eq!(grid.sample(Vec2::new(3.9, 12.2)), grid.get(3, 12));
        assert_eq!(grid.sample(Vec2::new(-0.1, 3.0)), None);
        assert_eq!(grid.sample(Vec2::new(16.0, 3.0)), None);
        assert_eq!(grid.sample(Vec2::new(3.0, 16.0)), None);
        assert!(grid.sample(Vec2::new(15.99, 0.0)).is_some());
    }
}
