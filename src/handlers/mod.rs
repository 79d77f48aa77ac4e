pub mod facet_handlers;
pub mod saved_handlers;
pub mod search_handlers;

pub use facet_handlers::{handle_facets, handle_suggest};
pub use saved_handlers::{handle_delete_saved, handle_list_saved};
pub use search_handlers::handle_search;
