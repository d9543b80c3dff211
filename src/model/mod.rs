// File: ./src/model/mod.rs
pub mod adapter;
pub mod classifier;
pub mod extract;
pub mod item;
pub mod parser;

pub use adapter::{creation_records, flatten};
pub use classifier::Line;
pub use item::{CreationRecord, ParsedTask, Priority, RecordStatus, Section};
pub use parser::{DEFAULT_SECTION_TITLE, parse_sections, parse_sections_with};
