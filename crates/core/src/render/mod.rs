//! Composite image renderer.
//!
//! Produces the "artistic QR" raster: a gradient background, randomized
//! decorative blobs, a payload-derived grid, three finder-style corner
//! markers, and the style name as a label. The grid is a decorative
//! stand-in for a QR bit-matrix; it carries no error correction and the
//! output is not scannable.
//!
//! Everything except the blob layer is deterministic in
//! (payload, row, col). The blobs use wall-clock randomness on purpose,
//! matching the original demo.

pub mod canvas;
pub mod glyphs;

use crate::config::models::RendererConfig;
use crate::providers::base::ArtConcept;
use canvas::{Canvas, Rgba};
use qw_protocol::workflow_models::ArtStyle;
use rand::Rng;
use thiserror::Error;

/// Gradient stops of the background fill (style-independent).
const GRADIENT_FROM: Rgba = Rgba::opaque(0x66, 0x7e, 0xea);
const GRADIENT_TO: Rgba = Rgba::opaque(0x76, 0x4b, 0xa2);

/// Decorative blob layer: low-opacity white circles.
const BLOB_COLOR: Rgba = Rgba::new(255, 255, 255, 26);

/// Grid cells are near-opaque white.
const CELL_COLOR: Rgba = Rgba::new(255, 255, 255, 230);

const WHITE: Rgba = Rgba::opaque(255, 255, 255);
const BLACK: Rgba = Rgba::opaque(0, 0, 0);

/// Number of cells along each grid edge.
const GRID_SIZE: u32 = 20;

/// Errors from image compositing.
///
/// Not reachable with the mock pipeline and a validated configuration,
/// but defined so a real rendering backend can substitute in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("canvas has zero dimensions")]
    ZeroCanvas,
}

/// Seed for the grid predicate: the payload's first character code,
/// zero for an empty payload.
pub fn payload_seed(payload: &str) -> u64 {
    payload.chars().next().map_or(0, |c| c as u64)
}

/// Whether grid cell (col, row) is filled for the given seed.
///
/// Deterministic; this is the trivial hash of the original demo, not
/// real QR symbol math.
pub fn grid_cell_on(seed: u64, col: u32, row: u32) -> bool {
    (seed * u64::from(col) * u64::from(row)) % 3 == 0
}

/// Composite the artwork for `payload` in the given style.
///
/// Always succeeds for any payload (including empty) and any style; the
/// only failure case is a zero-sized canvas, which the config loader
/// already rejects. `concept` is accepted for future real art backends
/// and currently does not influence the raster.
pub fn compose(
    payload: &str,
    style: ArtStyle,
    _concept: &ArtConcept,
    config: &RendererConfig,
) -> Result<Canvas, RenderError> {
    if config.size == 0 {
        return Err(RenderError::ZeroCanvas);
    }

    let size = config.size;
    let mut canvas = Canvas::new(size, size);

    // 1. Background gradient.
    canvas.fill_linear_gradient(GRADIENT_FROM, GRADIENT_TO);

    // 2. Random decorative blobs. Intentionally unseeded.
    let mut rng = rand::thread_rng();
    for _ in 0..config.blob_count {
        let x = rng.gen_range(0.0..f64::from(size));
        let y = rng.gen_range(0.0..f64::from(size));
        let radius = rng.gen_range(10.0..40.0);
        canvas.fill_circle(x, y, radius, BLOB_COLOR);
    }

    // 3. Payload-derived grid in a centered square sub-region covering
    //    three quarters of the canvas (50..350 at the default size).
    let origin = i64::from(size / 8);
    let span = size * 3 / 4;
    let cell = f64::from(span) / f64::from(GRID_SIZE);
    let cell_px = (cell as u32).saturating_sub(1).max(1);

    let seed = payload_seed(payload);
    for col in 0..GRID_SIZE {
        for row in 0..GRID_SIZE {
            if grid_cell_on(seed, col, row) {
                canvas.fill_rect(
                    origin + (f64::from(col) * cell) as i64,
                    origin + (f64::from(row) * cell) as i64,
                    cell_px,
                    cell_px,
                    CELL_COLOR,
                );
            }
        }
    }

    // 4. Finder-style markers: white 7-cell squares with black 5-cell
    //    insets at three corners of the grid region.
    let marker_outer = (cell * 7.0) as u32;
    let marker_inner = (cell * 5.0) as u32;
    let far = (cell * 13.0) as i64;
    let inset = cell as i64;
    for (mx, my) in [(origin, origin), (origin + far, origin), (origin, origin + far)] {
        canvas.fill_rect(mx, my, marker_outer, marker_outer, WHITE);
        canvas.fill_rect(mx + inset, my + inset, marker_inner, marker_inner, BLACK);
    }

    // 5. Style label, upper-cased and centered near the bottom.
    let label = style.as_str().to_uppercase();
    let scale = 2;
    let top_y = i64::from(size) - 20 - i64::from(glyphs::text_height(scale));
    glyphs::draw_text(&mut canvas, &label, i64::from(size) / 2, top_y, scale, WHITE);

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> RendererConfig {
        RendererConfig::default()
    }

    #[test]
    fn test_compose_empty_payload_does_not_fail() {
        let canvas = compose("", ArtStyle::Nature, &ArtConcept::default(), &default_config())
            .expect("empty payload must render");
        assert_eq!(canvas.width(), 400);
        assert_eq!(canvas.height(), 400);
    }

    #[test]
    fn test_empty_payload_fills_every_cell() {
        // Seed 0 makes the hash product 0 for every cell, and 0 % 3 == 0.
        let seed = payload_seed("");
        assert_eq!(seed, 0);
        for col in 0..GRID_SIZE {
            for row in 0..GRID_SIZE {
                assert!(grid_cell_on(seed, col, row));
            }
        }
    }

    #[test]
    fn test_grid_predicate_is_deterministic() {
        let seed = payload_seed("A");
        for col in 0..GRID_SIZE {
            for row in 0..GRID_SIZE {
                assert_eq!(grid_cell_on(seed, col, row), grid_cell_on(seed, col, row));
            }
        }
        // 'A' is 65; 65 * 1 * 1 = 65, 65 % 3 == 2.
        assert!(!grid_cell_on(seed, 1, 1));
        // Row or column zero is always on.
        assert!(grid_cell_on(seed, 0, 7));
    }

    #[test]
    fn test_finder_markers_identical_across_renders() {
        let config = default_config();
        let concept = ArtConcept::default();
        let first = compose("A", ArtStyle::Geometric, &concept, &config).unwrap();
        let second = compose("A", ArtStyle::Geometric, &concept, &config).unwrap();

        // Markers are drawn opaque, so they are unaffected by the random
        // blob layer underneath. Sample the three outer (white) rings and
        // inner (black) squares.
        for (mx, my) in [(50u32, 50u32), (245, 50), (50, 245)] {
            // Outer ring pixel.
            assert_eq!(first.pixel(mx + 2, my + 2), Rgba::opaque(255, 255, 255));
            assert_eq!(first.pixel(mx + 2, my + 2), second.pixel(mx + 2, my + 2));
            // Inner square pixel.
            assert_eq!(first.pixel(mx + 30, my + 30), Rgba::opaque(0, 0, 0));
            assert_eq!(first.pixel(mx + 30, my + 30), second.pixel(mx + 30, my + 30));
        }
    }

    #[test]
    fn test_configured_size_is_honored() {
        let config = RendererConfig {
            size: 160,
            blob_count: 4,
        };
        let canvas = compose("x", ArtStyle::Watercolor, &ArtConcept::default(), &config).unwrap();
        assert_eq!(canvas.width(), 160);
        assert_eq!(canvas.height(), 160);
    }

    #[test]
    fn test_zero_canvas_is_rejected() {
        let config = RendererConfig {
            size: 0,
            blob_count: 20,
        };
        let result = compose("x", ArtStyle::Abstract, &ArtConcept::default(), &config);
        assert_eq!(result.unwrap_err(), RenderError::ZeroCanvas);
    }

    #[test]
    fn test_every_style_renders() {
        for style in ArtStyle::all() {
            assert!(compose("demo", style, &ArtConcept::default(), &default_config()).is_ok());
        }
    }
}
