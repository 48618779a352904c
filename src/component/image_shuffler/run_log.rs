use rust_i18n::t;
use std::fmt;
use std::path::PathBuf;

/// 執行紀錄中的一筆事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    /// 未選擇移動目標資料夾，整個執行中止
    DestinationMissing,
    /// 移動數量為 0，跳過此來源
    Skipped { source: PathBuf },
    /// 執行時可用圖片少於要求數量
    AmountReduced {
        source: PathBuf,
        requested: usize,
        available: usize,
    },
    Moved { file: PathBuf, target: PathBuf },
    MoveFailed { file: PathBuf, reason: String },
    EntryDone {
        source: PathBuf,
        moved: usize,
        amount: usize,
    },
    Finished,
}

impl LogEvent {
    /// 是否為單一檔案的處理結果（用於進度顯示）
    #[must_use]
    pub const fn is_file_result(&self) -> bool {
        matches!(self, Self::Moved { .. } | Self::MoveFailed { .. })
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::DestinationMissing => t!("log.destination_missing"),
            Self::Skipped { source } => {
                t!("log.skipped", source = source.display().to_string())
            }
            Self::AmountReduced {
                source,
                requested,
                available,
            } => t!(
                "log.amount_reduced",
                source = source.display().to_string(),
                requested = requested,
                available = available
            ),
            Self::Moved { file, target } => t!(
                "log.moved",
                file = file.display().to_string(),
                target = target.display().to_string()
            ),
            Self::MoveFailed { file, reason } => t!(
                "log.move_failed",
                file = file.display().to_string(),
                reason = reason
            ),
            Self::EntryDone {
                source,
                moved,
                amount,
            } => t!(
                "log.entry_done",
                source = source.display().to_string(),
                moved = moved,
                amount = amount
            ),
            Self::Finished => t!("log.finished"),
        };
        write!(f, "{message}")
    }
}
