//! Time series derived from a snapshot.
//!
//! Everything here is recomputed from scratch on each run. Nothing is written back into the
//! snapshot.

mod calendar;
mod closers;
mod deltas;
mod open_counts;
mod population;
mod series;
mod view;

pub use calendar::{MonthBound, day_range, month_range};
pub use closers::{ISSUE_AUTHOR_SERIES, closer_attribution};
pub use deltas::deltas;
pub use open_counts::{is_open_on, open_counts};
pub use population::Population;
pub use series::{Point, Series, render};
pub use view::{TOTAL_GROUP, View, ViewOptions, generate};
