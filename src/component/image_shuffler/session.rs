use super::move_executor::{EntryReport, MoveExecutor, RunReport};
use super::run_log::LogEvent;
use crate::config::OrderMode;
use crate::tools::{is_same_directory, list_images, parse_amount, validate_directory_exists};
use anyhow::Result;
use log::{info, warn};
use rand::Rng;
use std::path::{Path, PathBuf};

/// 已登錄的來源資料夾
#[derive(Debug, Clone)]
pub struct SourceEntry {
    path: PathBuf,
    images: Vec<PathBuf>,
    amount: usize,
}

impl SourceEntry {
    /// 掃描資料夾建立來源，預設移動全部圖片
    #[must_use]
    pub fn scan(path: &Path) -> Self {
        let images = list_images(path);
        let amount = images.len();
        Self {
            path: path.to_path_buf(),
            images,
            amount,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 登錄時掃描到的圖片（依檔名排序）
    #[must_use]
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    #[must_use]
    pub fn available(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub const fn amount(&self) -> usize {
        self.amount
    }

    /// 以使用者輸入設定數量，回傳限制後的結果
    pub fn set_amount(&mut self, input: &str) -> usize {
        self.amount = parse_amount(input, self.available());
        self.amount
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// 已經登錄過
    Duplicate,
    /// 與移動目標相同
    IsDestination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationOutcome {
    Set,
    /// 與某個來源資料夾相同
    IsSource,
}

/// 一次整理作業的狀態：來源清單、目標、排序方式與執行紀錄
#[derive(Debug, Default)]
pub struct Session {
    sources: Vec<SourceEntry>,
    destination: Option<PathBuf>,
    order: OrderMode,
    log: Vec<LogEvent>,
}

impl Session {
    #[must_use]
    pub fn new(order: OrderMode) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sources(&self) -> &[SourceEntry] {
        &self.sources
    }

    #[must_use]
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    #[must_use]
    pub const fn order(&self) -> OrderMode {
        self.order
    }

    pub fn set_order(&mut self, order: OrderMode) {
        self.order = order;
    }

    #[must_use]
    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// 所有來源的移動數量合計
    #[must_use]
    pub fn total_amount(&self) -> usize {
        self.sources.iter().map(SourceEntry::amount).sum()
    }

    pub fn add_source(&mut self, path: &Path) -> Result<AddOutcome> {
        validate_directory_exists(path)?;

        if self
            .sources
            .iter()
            .any(|entry| is_same_directory(entry.path(), path))
        {
            return Ok(AddOutcome::Duplicate);
        }
        if self
            .destination
            .as_deref()
            .is_some_and(|dest| is_same_directory(dest, path))
        {
            return Ok(AddOutcome::IsDestination);
        }

        let entry = SourceEntry::scan(path);
        info!(
            "新增來源資料夾: {} ({} 張圖片)",
            path.display(),
            entry.available()
        );
        self.sources.push(entry);
        Ok(AddOutcome::Added)
    }

    pub fn remove_source(&mut self, index: usize) -> Option<SourceEntry> {
        (index < self.sources.len()).then(|| self.sources.remove(index))
    }

    /// 設定指定來源的移動數量；索引不存在時回傳 `None`
    pub fn set_amount(&mut self, index: usize, input: &str) -> Option<usize> {
        self.sources
            .get_mut(index)
            .map(|entry| entry.set_amount(input))
    }

    pub fn set_destination(&mut self, path: &Path) -> Result<DestinationOutcome> {
        validate_directory_exists(path)?;

        if self
            .sources
            .iter()
            .any(|entry| is_same_directory(entry.path(), path))
        {
            return Ok(DestinationOutcome::IsSource);
        }

        info!("設定移動目標資料夾: {}", path.display());
        self.destination = Some(path.to_path_buf());
        Ok(DestinationOutcome::Set)
    }

    /// 依登錄順序處理所有來源，完成後清空來源清單
    ///
    /// 每個事件都會寫入執行紀錄並交給 `on_event`
    pub fn execute<R, F>(&mut self, rng: &mut R, mut on_event: F) -> RunReport
    where
        R: Rng + ?Sized,
        F: FnMut(&LogEvent),
    {
        let log = &mut self.log;
        let mut emit = |event: LogEvent| {
            on_event(&event);
            log.push(event);
        };

        let Some(destination) = self.destination.as_deref() else {
            warn!("未選擇移動目標資料夾，中止執行");
            emit(LogEvent::DestinationMissing);
            return RunReport::default();
        };

        let executor = MoveExecutor::new(destination, self.order);
        let mut entries: Vec<EntryReport> = Vec::with_capacity(self.sources.len());
        for entry in std::mem::take(&mut self.sources) {
            entries.push(executor.execute_entry(&entry, rng, &mut emit));
        }

        emit(LogEvent::Finished);

        let report = RunReport { entries };
        info!(
            "執行完成 - 移動: {}, 失敗: {}",
            report.total_moved(),
            report.total_failed()
        );
        report
    }
}
