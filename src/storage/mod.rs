pub mod history;

pub use history::{HISTORY_KEY, HistoryStore};
