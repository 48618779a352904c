use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

/// 計算目標路徑；同名檔案已存在時在副檔名前加上 `_1`、`_2`…
#[must_use]
pub fn resolve_destination_path(source: &Path, destination_directory: &Path) -> PathBuf {
    let file_name = source.file_name().unwrap_or(source.as_os_str());
    let mut dest_path = destination_directory.join(file_name);

    if dest_path.exists() {
        let stem = source
            .file_stem()
            .map_or_else(|| "file".into(), |s| s.to_string_lossy());
        let ext = source.extension().map(|s| s.to_string_lossy());

        let mut counter: u64 = 1;
        loop {
            let new_name = match &ext {
                Some(ext) => format!("{stem}_{counter}.{ext}"),
                None => format!("{stem}_{counter}"),
            };
            dest_path = destination_directory.join(new_name);
            if !dest_path.exists() {
                break;
            }
            counter += 1;
        }
    }

    dest_path
}

/// 移動檔案；`rename` 失敗時（例如跨檔案系統）改為複製後刪除
pub fn move_file(source: &Path, target: &Path) -> Result<()> {
    if let Err(rename_err) = fs::rename(source, target) {
        debug!(
            "rename 失敗，改用複製: {} -> {} ({rename_err})",
            source.display(),
            target.display()
        );
        copy_and_delete(source, target)
            .with_context(|| format!("rename 失敗: {rename_err}"))?;
    }
    Ok(())
}

fn copy_and_delete(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target).with_context(|| {
        format!("複製檔案失敗: {} -> {}", source.display(), target.display())
    })?;

    if let Err(e) = copy_timestamps(source, target) {
        warn!("無法保留檔案時間 {}: {e:#}", target.display());
    }

    if let Err(e) = fs::remove_file(source) {
        // 保持「移動」語意：刪除失敗時撤回副本
        if let Err(cleanup_err) = fs::remove_file(target) {
            warn!(
                "無法撤回副本，檔案同時存在於兩處: {} ({cleanup_err})",
                target.display()
            );
        }
        return Err(e).with_context(|| format!("刪除原檔案失敗: {}", source.display()));
    }

    Ok(())
}

/// 將來源的修改與存取時間套用到副本（`fs::copy` 不會保留）
fn copy_timestamps(source: &Path, target: &Path) -> Result<()> {
    let metadata = fs::metadata(source)
        .with_context(|| format!("無法讀取檔案資訊: {}", source.display()))?;
    let times = FileTimes::new()
        .set_modified(metadata.modified()?)
        .set_accessed(metadata.accessed()?);

    File::options()
        .write(true)
        .open(target)
        .and_then(|file| file.set_times(times))
        .with_context(|| format!("無法設定檔案時間: {}", target.display()))
}
