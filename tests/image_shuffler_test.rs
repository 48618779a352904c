//! 整合測試 - 以暫存資料夾驗證圖片移動流程

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use image_shuffler::component::image_shuffler::{AddOutcome, LogEvent, Session};
use image_shuffler::config::OrderMode;
use image_shuffler::tools::list_images;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

fn create_files(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), name.as_bytes()).unwrap();
    }
}

fn names_in(dir: &Path) -> HashSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect()
}

/// 測試 1: 混合副檔名的資料夾只列出圖片
#[test]
fn test_list_images_mixed_extensions() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    create_files(
        dir,
        &["b.PNG", "a.jpeg", "d.Webp", "c.JPG", "e.bmp", "f.txt", "g"],
    );

    let images = list_images(dir);
    let expected: Vec<PathBuf> = ["a.jpeg", "b.PNG", "c.JPG", "d.Webp"]
        .iter()
        .map(|n| dir.join(n))
        .collect();

    assert_eq!(images, expected);
    println!("✓ 圖片列舉測試通過");
}

/// 測試 2: 依檔名順序移動前 2 張
#[test]
fn test_name_order_moves_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let dest = temp_dir.path().join("dest");
    create_files(&source, &["c.webp", "b.jpg", "a.png"]);
    fs::create_dir(&dest).unwrap();

    let mut session = Session::new(OrderMode::Name);
    assert_eq!(session.add_source(&source).unwrap(), AddOutcome::Added);
    session.set_amount(0, "2");
    session.set_destination(&dest).unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let report = session.execute(&mut rng, |_| {});

    assert_eq!(report.total_moved(), 2);
    assert_eq!(
        names_in(&dest),
        HashSet::from(["a.png".to_string(), "b.jpg".to_string()])
    );
    assert_eq!(names_in(&source), HashSet::from(["c.webp".to_string()]));
    println!("✓ 檔名順序移動測試通過");
}

/// 測試 3: 數量為 0 的來源被跳過，不改動檔案
#[test]
fn test_zero_amount_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let skipped = temp_dir.path().join("skipped");
    let moved = temp_dir.path().join("moved");
    let dest = temp_dir.path().join("dest");
    create_files(&skipped, &["a.png", "b.png"]);
    create_files(&moved, &["c.png"]);
    fs::create_dir(&dest).unwrap();

    let mut session = Session::new(OrderMode::Name);
    session.add_source(&skipped).unwrap();
    session.add_source(&moved).unwrap();
    session.set_amount(0, "0");
    session.set_destination(&dest).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let report = session.execute(&mut rng, |_| {});

    assert!(report.entries[0].skipped);
    assert!(session.log().contains(&LogEvent::Skipped {
        source: skipped.clone()
    }));
    assert_eq!(names_in(&skipped).len(), 2);
    assert_eq!(names_in(&dest), HashSet::from(["c.png".to_string()]));
    println!("✓ 跳過測試通過");
}

/// 測試 4: 未選擇目標時不移動任何檔案
#[test]
fn test_missing_destination_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");
    create_files(&first, &["a.png"]);
    create_files(&second, &["b.png"]);

    let mut session = Session::new(OrderMode::Random);
    session.add_source(&first).unwrap();
    session.add_source(&second).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let report = session.execute(&mut rng, |_| {});

    assert_eq!(report.total_moved(), 0);
    assert_eq!(session.log(), &[LogEvent::DestinationMissing]);
    assert_eq!(names_in(&first).len(), 1);
    assert_eq!(names_in(&second).len(), 1);
    println!("✓ 未選擇目標測試通過");
}

/// 測試 5: 隨機模式移動全部圖片時，集合與原本相同
#[test]
fn test_random_mode_moves_every_file() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let dest = temp_dir.path().join("dest");
    let names: Vec<String> = (0..12).map(|i| format!("img_{i}.jpg")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    create_files(&source, &refs);
    fs::create_dir(&dest).unwrap();

    let mut session = Session::new(OrderMode::Random);
    session.add_source(&source).unwrap();
    session.set_destination(&dest).unwrap();

    let mut rng = StdRng::seed_from_u64(2024);
    let report = session.execute(&mut rng, |_| {});

    assert_eq!(report.total_moved(), names.len());
    let expected: HashSet<String> = names.iter().cloned().collect();
    assert_eq!(names_in(&dest), expected);
    assert!(names_in(&source).is_empty());
    println!("✓ 隨機模式測試通過");
}

/// 測試 6: 不同來源的同名檔案依序加上編號
#[test]
fn test_collision_across_sources() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");
    let dest = temp_dir.path().join("dest");
    create_files(&first, &["photo.jpg"]);
    create_files(&second, &["photo.jpg"]);
    create_files(&dest, &["photo.jpg"]);

    let mut session = Session::new(OrderMode::Name);
    session.add_source(&first).unwrap();
    session.add_source(&second).unwrap();
    session.set_destination(&dest).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let report = session.execute(&mut rng, |_| {});

    assert_eq!(report.total_moved(), 2);
    assert_eq!(report.entries[0].moved[0].1, dest.join("photo_1.jpg"));
    assert_eq!(report.entries[1].moved[0].1, dest.join("photo_2.jpg"));
    assert_eq!(
        names_in(&dest),
        HashSet::from([
            "photo.jpg".to_string(),
            "photo_1.jpg".to_string(),
            "photo_2.jpg".to_string(),
        ])
    );
    println!("✓ 同名檔案測試通過");
}

/// 測試 7: 事件依序回報並寫入紀錄
#[test]
fn test_events_are_reported_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let dest = temp_dir.path().join("dest");
    create_files(&source, &["a.png", "b.png"]);
    fs::create_dir(&dest).unwrap();

    let mut session = Session::new(OrderMode::Name);
    session.add_source(&source).unwrap();
    session.set_destination(&dest).unwrap();

    let mut seen = Vec::new();
    let mut rng = StdRng::seed_from_u64(0);
    session.execute(&mut rng, |event| seen.push(event.clone()));

    assert_eq!(
        seen,
        vec![
            LogEvent::Moved {
                file: source.join("a.png"),
                target: dest.join("a.png"),
            },
            LogEvent::Moved {
                file: source.join("b.png"),
                target: dest.join("b.png"),
            },
            LogEvent::EntryDone {
                source: source.clone(),
                moved: 2,
                amount: 2,
            },
            LogEvent::Finished,
        ]
    );
    assert_eq!(session.log(), seen.as_slice());
    assert_eq!(seen.iter().filter(|e| e.is_file_result()).count(), 2);
    println!("✓ 事件順序測試通過");
}
