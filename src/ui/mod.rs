pub mod formatting;

pub use formatting::{format_facet_options, format_list, format_result};
