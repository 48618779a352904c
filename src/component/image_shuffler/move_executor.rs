use super::run_log::LogEvent;
use super::session::SourceEntry;
use crate::config::OrderMode;
use crate::tools::{list_images, move_file, resolve_destination_path};
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

/// 單一檔案的移動失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveFailure {
    pub file: PathBuf,
    pub reason: String,
}

/// 單一來源的處理結果
#[derive(Debug, Clone, Default)]
pub struct EntryReport {
    pub source: PathBuf,
    /// 登錄時設定的數量
    pub requested: usize,
    /// 依執行時實際圖片數限制後的數量
    pub amount: usize,
    /// 成功移動的 (原路徑, 目標路徑)
    pub moved: Vec<(PathBuf, PathBuf)>,
    pub failures: Vec<MoveFailure>,
    pub skipped: bool,
}

impl EntryReport {
    #[must_use]
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub entries: Vec<EntryReport>,
}

impl RunReport {
    #[must_use]
    pub fn total_moved(&self) -> usize {
        self.entries.iter().map(EntryReport::moved_count).sum()
    }

    #[must_use]
    pub fn total_failed(&self) -> usize {
        self.entries.iter().map(|e| e.failures.len()).sum()
    }
}

/// 將來源資料夾中的圖片移動到目標資料夾
pub struct MoveExecutor<'a> {
    destination: &'a Path,
    order: OrderMode,
}

impl<'a> MoveExecutor<'a> {
    #[must_use]
    pub const fn new(destination: &'a Path, order: OrderMode) -> Self {
        Self { destination, order }
    }

    /// 依排序方式取前 `amount` 個檔案
    pub fn select<R: Rng + ?Sized>(
        &self,
        mut images: Vec<PathBuf>,
        amount: usize,
        rng: &mut R,
    ) -> Vec<PathBuf> {
        if self.order == OrderMode::Random {
            images.shuffle(rng);
        }
        images.truncate(amount);
        images
    }

    /// 處理單一來源：重新掃描、選取、逐一移動
    ///
    /// 單一檔案失敗只記錄下來，不會中斷其餘檔案
    pub fn execute_entry<R, F>(&self, entry: &SourceEntry, rng: &mut R, emit: &mut F) -> EntryReport
    where
        R: Rng + ?Sized,
        F: FnMut(LogEvent),
    {
        let source = entry.path().to_path_buf();
        let requested = entry.amount();
        let mut report = EntryReport {
            source: source.clone(),
            requested,
            ..EntryReport::default()
        };

        if requested == 0 {
            info!("{}: 移動數量為 0，跳過", source.display());
            report.skipped = true;
            emit(LogEvent::Skipped { source });
            return report;
        }

        let images = list_images(&source);
        let amount = requested.min(images.len());
        if amount < requested {
            warn!(
                "{}: 可用圖片由 {} 減少為 {}",
                source.display(),
                requested,
                images.len()
            );
            emit(LogEvent::AmountReduced {
                source: source.clone(),
                requested,
                available: images.len(),
            });
        }
        report.amount = amount;

        for file in self.select(images, amount, rng) {
            let target = resolve_destination_path(&file, self.destination);
            match move_file(&file, &target) {
                Ok(()) => {
                    debug!("移動檔案: {} -> {}", file.display(), target.display());
                    report.moved.push((file.clone(), target.clone()));
                    emit(LogEvent::Moved { file, target });
                }
                Err(e) => {
                    let reason = format!("{e:#}");
                    warn!("移動檔案失敗 {}: {reason}", file.display());
                    report.failures.push(MoveFailure {
                        file: file.clone(),
                        reason: reason.clone(),
                    });
                    emit(LogEvent::MoveFailed { file, reason });
                }
            }
        }

        info!(
            "{}: 已移動 {}/{} 張",
            source.display(),
            report.moved_count(),
            amount
        );
        emit(LogEvent::EntryDone {
            source,
            moved: report.moved_count(),
            amount,
        });

        report
    }
}
