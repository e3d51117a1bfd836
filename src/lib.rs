// Library exports for pricegraph

pub mod cell;
pub mod csv_reader;
pub mod domain;
pub mod error;
pub mod reshape;
pub mod select;
pub mod aggregate;
pub mod chart;

// Interaction and rendering surfaces
pub mod palette;
pub mod prompt;
pub mod render;

/// Pixel dimensions of the rendered chart.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}
