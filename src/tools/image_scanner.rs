use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 支援的圖片副檔名（小寫，不含點）
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

#[must_use]
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// 是否為隱藏檔（名稱以 `.` 開頭，例如 macOS 的 `._IMG_0001.jpg`）
#[must_use]
pub fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// 列出資料夾第一層的圖片檔案，依路徑升序排列
///
/// 不遞迴子資料夾，略過隱藏檔；資料夾無法讀取時回傳空清單而非錯誤
#[must_use]
pub fn list_images(directory: &Path) -> Vec<PathBuf> {
    let mut images: Vec<PathBuf> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("無法讀取目錄項目: {e}");
                None
            }
        })
        .map(walkdir::DirEntry::into_path)
        .filter(|path| !is_hidden_file(path) && path.is_file() && is_image_file(path))
        .collect();

    images.sort();
    debug!("{} 中找到 {} 張圖片", directory.display(), images.len());
    images
}

/// 將要求的移動數量限制在 `[0, available]`
#[must_use]
pub fn clamp_amount(requested: i64, available: usize) -> usize {
    if requested <= 0 {
        return 0;
    }
    usize::try_from(requested).map_or(available, |requested| requested.min(available))
}

/// 解析使用者輸入的數量，非數字視為 0
#[must_use]
pub fn parse_amount(input: &str, available: usize) -> usize {
    let requested = input.trim().parse::<i64>().unwrap_or(0);
    clamp_amount(requested, available)
}
