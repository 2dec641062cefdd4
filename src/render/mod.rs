//! Software rendering of the bar chart.
//!
//! [`Renderer`] owns an ARGB8888 pixel buffer; [`bars`] lays the array out as
//! bars and paints a full frame into it.

pub mod bars;
mod renderer;

pub use bars::{draw_frame, layout, Bar, BarStyle, FrameView};
pub use renderer::Renderer;
