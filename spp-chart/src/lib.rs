//! Chart rendering for seabed profiles.
//!
//! A [`Figure`] stacks two panels over a shared kilometer-post axis: the
//! depth profile on top and the gradient with its moving average below.

pub mod axis;
pub mod error;
pub mod figure;
pub mod font;
pub mod format;
pub mod ticks;

pub use error::{ChartError, Result};
pub use figure::{render, ChartConfig, Figure};
pub use format::ImageFormat;
