use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

/// 正規化路徑；無法正規化時（例如路徑已不存在）保留原樣
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// 判斷兩個路徑是否指向同一個資料夾
#[must_use]
pub fn is_same_directory(a: &Path, b: &Path) -> bool {
    normalize_path(a) == normalize_path(b)
}
