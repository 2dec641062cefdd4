//! Bar chart layout and drawing.
//!
//! Every value becomes one vertical bar. Bars share the width equally, are
//! scaled against the largest value, and stand on a line `PADDING` pixels
//! above the bottom edge.

use super::renderer::Renderer;
use crate::colors;

pub const PADDING: f32 = 10.0;
/// Horizontal gap on each side of a bar, in pixels.
pub const BAR_INSET: f32 = 2.0;
/// Height of the rounded top corners.
pub const CORNER_HEIGHT: f32 = 4.0;
/// Number of bands the reference grid divides the height into.
pub const GRID_BANDS: u32 = 10;

/// Screen rectangle of one bar, before insets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub fn layout(values: &[u32], width: u32, height: u32) -> Vec<Bar> {
    let Some(&max) = values.iter().max() else {
        return Vec::new();
    };
    let max = max.max(1) as f32;
    let bar_width = width as f32 / values.len() as f32;
    let usable = (height as f32 - PADDING * 2.0).max(0.0);

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let bar_height = value as f32 / max * usable;
            Bar {
                index,
                x: index as f32 * bar_width,
                y: height as f32 - bar_height - PADDING,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    Default,
    Comparing,
    Sorted,
}

impl BarStyle {
    /// Sorted wins over comparing, which wins over the default.
    pub fn for_index(index: usize, comparing: &[usize], sorted: &[usize]) -> Self {
        if sorted.contains(&index) {
            BarStyle::Sorted
        } else if comparing.contains(&index) {
            BarStyle::Comparing
        } else {
            BarStyle::Default
        }
    }

    pub fn color(self) -> u32 {
        match self {
            BarStyle::Default => colors::BAR_DEFAULT,
            BarStyle::Comparing => colors::BAR_COMPARING,
            BarStyle::Sorted => colors::BAR_SORTED,
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub values: &'a [u32],
    pub comparing: &'a [usize],
    pub sorted: &'a [usize],
}

impl<'a> From<&'a crate::driver::Driver> for FrameView<'a> {
    fn from(driver: &'a crate::driver::Driver) -> Self {
        Self {
            values: driver.array(),
            comparing: driver.comparing(),
            sorted: driver.sorted(),
        }
    }
}

/// Paint background, bars and grid.
pub fn draw_frame(renderer: &mut Renderer, view: FrameView<'_>) {
    renderer.fill_vertical_gradient(colors::BACKGROUND_TOP, colors::BACKGROUND_BOTTOM);

    for bar in layout(view.values, renderer.width(), renderer.height()) {
        let style = BarStyle::for_index(bar.index, view.comparing, view.sorted);
        draw_bar(renderer, &bar, style.color());
    }

    let band = renderer.height() as f32 / GRID_BANDS as f32;
    for i in 0..=GRID_BANDS {
        let y = (band * i as f32) as i32;
        renderer.blend_hline(y, colors::GRID, colors::GRID_ALPHA);
    }
}

/// Fill a bar with its two top corners rounded off.
fn draw_bar(renderer: &mut Renderer, bar: &Bar, color: u32) {
    // Thin bars lose their gap rather than vanish.
    let inset = BAR_INSET.min(bar.width * 0.25);
    let left = (bar.x + inset).round() as i32;
    let right = (bar.x + bar.width - inset).round() as i32;
    if right <= left || bar.height <= 0.0 {
        return;
    }
    let top = bar.y.round() as i32;
    let bottom = (bar.y + bar.height).round() as i32;
    let corner_width = inset.max(1.0);

    for y in top..bottom {
        let from_top = (y - top) as f32 + 0.5;
        let cut = if from_top < CORNER_HEIGHT {
            // Quarter ellipse CORNER_HEIGHT tall and corner_width wide.
            let t = 1.0 - from_top / CORNER_HEIGHT;
            (corner_width * (1.0 - (1.0 - t * t).sqrt())).round() as i32
        } else {
            0
        };
        renderer.draw_hline(left + cut, right - cut, y, color);
    }
}
