//! Terrain collaborator boundary.
//!
//! The engine does not own terrain state; it talks to it through this trait
//! to evaluate surface/void contact and to carve explosion craters.
//! `Heightfield` is a simple synthetic implementation used by tests and the
//! headless runner.

use voidfall_core::constants::ARENA_WIDTH;

/// Destructible heightmap with a rising void boundary underneath.
pub trait Terrain {
    /// Surface height at horizontal coordinate `x`.
    fn height_at(&self, x: f64) -> f64;

    /// Whether the point is inside solid ground.
    fn is_below_surface(&self, x: f64, y: f64) -> bool {
        y <= self.height_at(x)
    }

    /// Carve a circular crater centered at (x, y).
    fn destroy_circle(&mut self, x: f64, y: f64, radius: f64);

    /// Current void boundary height. Monotonically non-decreasing as
    /// rounds progress.
    fn void_height(&self) -> f64;

    /// Raise the void boundary by `amount` meters.
    fn raise_void(&mut self, amount: f64);
}

/// Synthetic rolling-hills heightfield sampled at 1 m intervals.
#[derive(Debug, Clone)]
pub struct Heightfield {
    heights: Vec<f64>,
    void_height: f64,
}

impl Heightfield {
    /// Generate rolling hills from overlapping cosine waves. `seed` phases
    /// the waves so different matches get different silhouettes.
    pub fn generate(seed: u64) -> Self {
        let columns = ARENA_WIDTH as usize + 1;
        let phase = (seed % 628) as f64 / 100.0;
        let heights = (0..columns)
            .map(|i| {
                let x = i as f64;
                120.0
                    + 45.0 * (x / 210.0 + phase).cos()
                    + 20.0 * (x / 67.0 + phase * 2.3).sin()
                    + 8.0 * (x / 23.0 + phase * 0.7).sin()
            })
            .collect();
        Self {
            heights,
            void_height: 0.0,
        }
    }

    /// Flat terrain at a fixed height, handy for tests.
    pub fn flat(height: f64) -> Self {
        Self {
            heights: vec![height; ARENA_WIDTH as usize + 1],
            void_height: 0.0,
        }
    }

    fn column(&self, x: f64) -> usize {
        x.clamp(0.0, (self.heights.len() - 1) as f64) as usize
    }
}

impl Terrain for Heightfield {
    fn height_at(&self, x: f64) -> f64 {
        self.heights[self.column(x)]
    }

    fn destroy_circle(&mut self, x: f64, y: f64, radius: f64) {
        if radius <= 0.0 {
            return;
        }
        let lo = self.column(x - radius);
        let hi = self.column(x + radius);
        for i in lo..=hi {
            let dx = i as f64 - x;
            let half_chord_sq = radius * radius - dx * dx;
            if half_chord_sq <= 0.0 {
                continue;
            }
            // Lower the column to the bottom of the blast circle where the
            // circle bites below the current surface.
            let crater_floor = y - half_chord_sq.sqrt();
            if self.heights[i] > crater_floor {
                self.heights[i] = crater_floor.max(self.void_height);
            }
        }
    }

    fn void_height(&self) -> f64 {
        self.void_height
    }

    fn raise_void(&mut self, amount: f64) {
        self.void_height += amount.max(0.0);
    }
}
