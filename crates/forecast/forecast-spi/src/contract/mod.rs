//! Contract module containing trait definitions for forecast operations

mod forecaster;

pub use forecaster::Forecaster;
