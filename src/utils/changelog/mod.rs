// changelog document model

pub mod config;
pub mod parser;
pub mod render;
pub mod types;

pub use config::{ChangelogConfig, ShallowComparison};
pub use parser::{load_first_entry, parse_first_entry};
pub use render::render;
pub use types::{CommitEntry, ENTRY_PREFIX, SECTION_LINE, TITLE_LINE};
