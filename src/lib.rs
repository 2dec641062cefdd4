//! Step-by-step visualizer for classic comparison sorts.
//!
//! Each sort (bubble, insertion, selection, quick, merge) is an iterator that
//! yields one [`Step`] per comparison or placement: a snapshot of the array
//! plus the indices being compared and the indices known to be final. A
//! [`Driver`] pulls those steps at a configurable pace and keeps the display
//! state, which the software renderer draws as a bar chart. SDL2 is used only
//! for the window and input.
//!
//! # Quick Start
//!
//! ```
//! use sortviz::prelude::*;
//!
//! let steps: Vec<Step> = Algorithm::Bubble
//!     .steps(vec![5, 3, 1], Direction::Ascending)
//!     .collect();
//! assert_eq!(steps[0].array, vec![3, 5, 1]);
//! assert_eq!(steps.last().unwrap().array, vec![1, 3, 5]);
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod controls;
pub mod driver;
pub mod error;
pub mod generator;
pub mod hud;
pub mod render;
pub mod screenshot;
pub mod sort;
pub mod stats;
pub mod step;
#[cfg(feature = "window")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::{ConfigChange, ConfigError, VisualizerConfig};
pub use driver::{Driver, RunState, TickOutcome};
pub use error::{Error, Result};
pub use generator::generate;
pub use sort::{sort_steps, Algorithm, SortSteps};
pub use stats::RunStats;
pub use step::{Direction, Step};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use sortviz::prelude::*;
/// ```
pub mod prelude {
    // Engines
    pub use crate::sort::{sort_steps, Algorithm, SortSteps};
    pub use crate::step::{Direction, Step};

    // Driver
    pub use crate::config::{ConfigChange, VisualizerConfig};
    pub use crate::driver::{Driver, RunState, TickOutcome};
    pub use crate::generator::generate;
    pub use crate::stats::RunStats;

    // Rendering
    pub use crate::render::{draw_frame, FrameView, Renderer};

    // Window & Input
    pub use crate::controls::Control;
    #[cfg(feature = "window")]
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{layout, Bar};
    pub use crate::sort::{BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort};
}
