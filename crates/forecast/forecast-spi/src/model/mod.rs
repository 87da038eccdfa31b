//! Model module containing data structures

mod alpha_bounds;
mod smoothing_fit;

pub use alpha_bounds::AlphaBounds;
pub use smoothing_fit::SmoothingFit;
