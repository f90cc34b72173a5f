pub mod formatting;

pub use formatting::{format_tag, seconds_to_min_sec};
