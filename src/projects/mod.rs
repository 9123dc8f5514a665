//! Project filtering, formatting, and aggregation

mod aggregator;
mod filter;
mod formatter;
mod types;

pub use aggregator::ProjectAggregator;
pub use filter::{ProjectFilter, DEFAULT_FILTER_KEYS};
pub use formatter::{curated_tags, derive_title, format_card, image_for};
pub use types::{ProjectCard, ProjectListing};
