mod collation;
mod search;
mod sections;
mod session;

pub use collation::*;
pub use search::{contains_lowercase, filter};
pub use sections::{SectionTable, index};
pub use session::{BrowseSession, Selection};
