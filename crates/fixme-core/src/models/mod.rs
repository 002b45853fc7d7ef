mod classification_report;
mod masked_text;
mod placeholder_map;
mod rewrite_options;

pub use classification_report::ClassificationReport;
pub use masked_text::MaskedText;
pub use placeholder_map::{Placeholder, PlaceholderMap};
pub use rewrite_options::RewriteOptions;
