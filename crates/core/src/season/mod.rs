//! Season model, classification, and rental duration math.

mod classifier;
mod duration;
mod season_model;

pub use classifier::classify;
pub use duration::rental_days;
pub use season_model::{Season, SeasonWindow};
