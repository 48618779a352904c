use super::run_log::LogEvent;
use super::session::{AddOutcome, DestinationOutcome, Session};
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use anyhow::Result;
use console::{StyledObject, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};

/// 設定數量時預覽的圖片數
const IMAGE_PREVIEW_LIMIT: usize = 5;

/// 圖片隨機移動元件（互動介面）
pub struct ImageShuffler<'a> {
    config: &'a mut Config,
    session: Session,
}

impl<'a> ImageShuffler<'a> {
    pub fn new(config: &'a mut Config) -> Self {
        let session = Session::new(config.settings.order_mode);
        Self { config, session }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            println!();
            println!("{}", style(t!("shuffler.title")).cyan().bold());
            println!("{}", style(t!("common.esc_hint")).dim());
            self.print_session();

            let options = vec![
                t!("shuffler.opt_add_source"),
                t!("shuffler.opt_remove_source"),
                t!("shuffler.opt_set_amount"),
                t!("shuffler.opt_destination"),
                t!("shuffler.opt_toggle_order", order = self.session.order().toggled()),
                t!("shuffler.opt_execute"),
                t!("shuffler.opt_view_log"),
                t!("shuffler.back"),
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(t!("shuffler.prompt"))
                .items(&options)
                .default(0)
                .interact_opt()?;

            let outcome = match selection {
                Some(0) => self.add_source(),
                Some(1) => self.remove_source(),
                Some(2) => self.set_amount(),
                Some(3) => self.select_destination(),
                Some(4) => {
                    self.session.set_order(self.session.order().toggled());
                    Ok(())
                }
                Some(5) => self.execute(),
                Some(6) => {
                    self.print_log();
                    Ok(())
                }
                Some(7) | None => break,
                _ => unreachable!(),
            };

            // 單一操作失敗不離開畫面
            if let Err(e) = outcome {
                warn!("操作失敗: {e:#}");
                eprintln!("{} {e:#}", style(t!("common.error_prefix")).red().bold());
            }
        }

        Ok(())
    }

    fn print_session(&self) {
        let sources = self.session.sources();

        println!();
        if sources.is_empty() {
            println!("  {}", style(t!("shuffler.no_sources")).yellow());
        } else {
            println!(
                "  {:>3}  {:>8}  {:>8}  {}",
                "#",
                t!("shuffler.col_available"),
                t!("shuffler.col_amount"),
                t!("shuffler.col_path")
            );
            for (i, entry) in sources.iter().enumerate() {
                println!(
                    "  {:>3}  {:>8}  {:>8}  {}",
                    i + 1,
                    entry.available(),
                    style(entry.amount()).green(),
                    entry.path().display()
                );
            }
        }

        println!();
        match self.session.destination() {
            Some(dest) => println!(
                "  {} {}",
                style(t!("shuffler.destination")).dim(),
                style(dest.display()).cyan()
            ),
            None => println!(
                "  {} {}",
                style(t!("shuffler.destination")).dim(),
                style(t!("shuffler.destination_unset")).red()
            ),
        }
        println!(
            "  {} {}",
            style(t!("shuffler.order")).dim(),
            self.session.order()
        );
        println!(
            "  {} {}",
            style(t!("shuffler.total")).dim(),
            style(self.session.total_amount()).green().bold()
        );
        println!();
    }

    fn add_source(&mut self) -> Result<()> {
        let Some(path) = self.prompt_directory(&t!("shuffler.prompt_source"))? else {
            return Ok(());
        };

        match self.session.add_source(&path)? {
            AddOutcome::Added => self.remember_path(&path),
            AddOutcome::Duplicate => {
                println!("{}", style(t!("shuffler.source_duplicate")).yellow());
            }
            AddOutcome::IsDestination => {
                println!("{}", style(t!("shuffler.source_is_destination")).yellow());
            }
        }
        Ok(())
    }

    fn remove_source(&mut self) -> Result<()> {
        let Some(index) = self.prompt_source_index()? else {
            return Ok(());
        };

        if let Some(entry) = self.session.remove_source(index) {
            info!("移除來源資料夾: {}", entry.path().display());
        }
        Ok(())
    }

    fn set_amount(&mut self) -> Result<()> {
        let Some(index) = self.prompt_source_index()? else {
            return Ok(());
        };
        let entry = &self.session.sources()[index];
        Self::print_image_preview(entry.images());

        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(t!(
                "shuffler.prompt_amount",
                available = entry.available()
            ))
            .default(entry.amount().to_string())
            .interact_text()?;

        if let Some(amount) = self.session.set_amount(index, &input) {
            println!(
                "{} {}",
                style(t!("shuffler.amount_set")).green(),
                amount
            );
        }
        Ok(())
    }

    /// 顯示登錄時掃描到的前幾張圖片
    fn print_image_preview(images: &[PathBuf]) {
        for image in images.iter().take(IMAGE_PREVIEW_LIMIT) {
            let name = image.file_name().unwrap_or_default().to_string_lossy();
            println!("  {} {}", style("•").dim(), name);
        }
        if images.len() > IMAGE_PREVIEW_LIMIT {
            println!(
                "  {} {}",
                style("⋯").dim(),
                t!("shuffler.preview_more", count = images.len() - IMAGE_PREVIEW_LIMIT)
            );
        }
    }

    fn select_destination(&mut self) -> Result<()> {
        let Some(path) = self.prompt_directory(&t!("shuffler.prompt_destination"))? else {
            return Ok(());
        };

        match self.session.set_destination(&path)? {
            DestinationOutcome::Set => self.remember_path(&path),
            DestinationOutcome::IsSource => {
                println!("{}", style(t!("shuffler.destination_is_source")).yellow());
            }
        }
        Ok(())
    }

    fn execute(&mut self) -> Result<()> {
        if let Some(dest) = self.session.destination() {
            let confirm = Confirm::new()
                .with_prompt(t!(
                    "shuffler.confirm_execute",
                    count = self.session.total_amount(),
                    destination = dest.display().to_string()
                ))
                .default(true)
                .interact()?;
            if !confirm {
                println!("{}", style(t!("common.cancelled")).yellow());
                return Ok(());
            }
        }

        let progress_bar = ProgressBar::new(self.session.total_amount() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        progress_bar.set_message(t!("shuffler.moving").to_string());

        let mut rng = rand::thread_rng();
        let report = self.session.execute(&mut rng, |event| {
            if event.is_file_result() {
                progress_bar.inc(1);
            }
            if !matches!(event, LogEvent::Moved { .. }) {
                progress_bar.println(styled_event(event).to_string());
            }
        });
        progress_bar.finish_and_clear();

        if report.total_failed() > 0 {
            println!(
                "{}",
                style(t!("shuffler.failed_summary", count = report.total_failed())).red()
            );
        }
        Ok(())
    }

    fn print_log(&self) {
        println!();
        println!("{}", style(t!("shuffler.log_title")).cyan().bold());
        if self.session.log().is_empty() {
            println!("  {}", style(t!("shuffler.log_empty")).dim());
        }
        for event in self.session.log() {
            println!("  {}", styled_event(event));
        }
    }

    fn prompt_source_index(&self) -> Result<Option<usize>> {
        let sources = self.session.sources();
        if sources.is_empty() {
            println!("{}", style(t!("shuffler.no_sources")).yellow());
            return Ok(None);
        }

        let items: Vec<String> = sources
            .iter()
            .map(|entry| format!("{} ({})", entry.path().display(), entry.amount()))
            .collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("shuffler.prompt_pick_source"))
            .items(&items)
            .default(0)
            .interact_opt()?;
        Ok(selection)
    }

    /// 從最近使用的路徑選擇，或輸入新路徑；按 ESC 回傳 `None`
    fn prompt_directory(&self, prompt: &str) -> Result<Option<PathBuf>> {
        let recent_paths = &self.config.settings.recent_paths;

        if recent_paths.is_empty() {
            return Ok(Some(Self::input_path(prompt)?));
        }

        let mut options: Vec<String> = recent_paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let indicator = if Path::new(p).is_dir() { "✓" } else { "✗" };
                format!("{} [{}] {}", i + 1, indicator, p)
            })
            .collect();
        options.push(t!("common.new_path").to_string());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&options)
            .default(0)
            .interact_opt()?;

        match selection {
            None => Ok(None),
            Some(idx) if idx < recent_paths.len() => Ok(Some(PathBuf::from(&recent_paths[idx]))),
            Some(_) => Ok(Some(Self::input_path(prompt)?)),
        }
    }

    fn input_path(prompt: &str) -> Result<PathBuf> {
        let path: String = Input::new().with_prompt(prompt).interact_text()?;
        Ok(PathBuf::from(path.trim()))
    }

    /// 更新路徑歷史並儲存
    fn remember_path(&mut self, path: &Path) {
        add_recent_path(&mut self.config.settings, &path.display().to_string());
        if let Err(e) = save_settings(&self.config.settings) {
            warn!("無法儲存路徑歷史: {e}");
        }
    }
}

fn styled_event(event: &LogEvent) -> StyledObject<String> {
    let text = event.to_string();
    match event {
        LogEvent::DestinationMissing | LogEvent::MoveFailed { .. } => style(text).red(),
        LogEvent::Skipped { .. } | LogEvent::AmountReduced { .. } => style(text).yellow(),
        LogEvent::EntryDone { .. } => style(text).green(),
        LogEvent::Finished => style(text).cyan().bold(),
        LogEvent::Moved { .. } => style(text).dim(),
    }
}
