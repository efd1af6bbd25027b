pub mod odds;
pub mod stoch;
pub mod walk;

pub use odds::{expected_duration, ruin_probability, win_probability};
pub use stoch::*;
pub use walk::*;
