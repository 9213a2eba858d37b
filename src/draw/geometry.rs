//! Geometry helpers: tier lookup and polygon vertex generation.

use std::f64::consts::PI;

/// Returns the index of the last element satisfying `pred`, scanning from the end.
pub fn find_last_index<T, F>(items: &[T], mut pred: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    items.iter().rposition(|item| pred(item))
}

/// Radius-bucketed tessellation table.
///
/// `radius_thresholds` is strictly ascending and the same length as
/// `segment_counts`; entry `i` means "radius >= threshold[i] uses counts[i]
/// segments" for the highest such `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tessellation {
    pub radius_thresholds: Vec<f64>,
    pub segment_counts: Vec<u32>,
}

/// Smallest polygon that still encloses an area.
pub const MIN_SEGMENTS: u32 = 3;

impl Default for Tessellation {
    fn default() -> Self {
        Self {
            radius_thresholds: vec![0.0, 20.0, 28.0],
            segment_counts: vec![8, 12, 16],
        }
    }
}

impl Tessellation {
    /// Checks the table invariants, describing the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.radius_thresholds.is_empty() {
            return Err("tessellation table is empty".into());
        }
        if self.radius_thresholds.len() != self.segment_counts.len() {
            return Err(format!(
                "{} radius thresholds but {} segment counts",
                self.radius_thresholds.len(),
                self.segment_counts.len()
            ));
        }
        if let Some(pair) = self
            .radius_thresholds
            .windows(2)
            .find(|pair| !(pair[0] < pair[1]))
        {
            return Err(format!(
                "radius thresholds must be strictly ascending ({} then {})",
                pair[0], pair[1]
            ));
        }
        if let Some(count) = self.segment_counts.iter().find(|c| **c < MIN_SEGMENTS) {
            return Err(format!(
                "segment count {count} is below the minimum of {MIN_SEGMENTS}"
            ));
        }
        Ok(())
    }

    /// Segment count for a circle of the given radius.
    ///
    /// Radii below the first threshold (negative radii with the default table)
    /// use the coarsest tier.
    pub fn segments_for_radius(&self, radius: f64) -> u32 {
        let tier = find_last_index(&self.radius_thresholds, |threshold| radius >= *threshold)
            .unwrap_or(0);
        self.segment_counts
            .get(tier)
            .copied()
            .unwrap_or(MIN_SEGMENTS)
            .max(MIN_SEGMENTS)
    }
}

/// Vertices of a regular polygon approximating a circle, starting at angle 0.
///
/// The closing edge back to the first vertex is left to the caller's
/// `close_path`.
pub fn circle_vertices(cx: f64, cy: f64, radius: f64, segments: u32) -> Vec<(f64, f64)> {
    let step = 2.0 * PI / segments as f64;
    (0..segments)
        .map(|i| {
            let angle = step * i as f64;
            (radius * angle.cos() + cx, radius * angle.sin() + cy)
        })
        .collect()
}
