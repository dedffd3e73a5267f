pub mod error;
pub mod forecast;
pub mod location;

pub use forecast::ForecastRecord;
pub use location::{LocationRecord, is_ordered_by_distance};
