pub mod filter;
pub mod moving_average;
pub mod stats;
pub mod subset;

pub use filter::SeriesFilter;
pub use moving_average::{MovingAverage, moving_average};
pub use stats::{SeriesStats, average, max, min};
pub use subset::SubsetAverager;
