//! `bt-render` — renderers for the bracetopia simulation.
//!
//! Two [`bt_sim::CycleObserver`] implementations sharing one statistics
//! block:
//!
//! | Renderer                | Output                                          |
//! |-------------------------|-------------------------------------------------|
//! | [`BatchRenderer`]       | plain text, one snapshot per cycle, any `Write` |
//! | [`InteractiveRenderer`] | crossterm alternate-screen live view            |

pub mod batch;
pub mod error;
pub mod interactive;
pub mod stats;


pub use batch::BatchRenderer;
pub use error::{RenderError, RenderResult};
pub use interactive::InteractiveRenderer;
