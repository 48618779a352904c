//! 圖片隨機移動元件
//!
//! 從多個來源資料夾依檔名或隨機順序取出指定數量的圖片，移動到同一個目標資料夾

mod main;
mod move_executor;
mod run_log;
mod session;

pub use main::ImageShuffler;
pub use move_executor::{EntryReport, MoveExecutor, MoveFailure, RunReport};
pub use run_log::LogEvent;
pub use session::{AddOutcome, DestinationOutcome, Session, SourceEntry};
