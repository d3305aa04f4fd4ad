pub mod history;
mod reader;

pub use history::types::{HistoryEntry, HistoryError};
pub use history::History;
pub use reader::{EditorSource, LineSource, ReaderSource};
