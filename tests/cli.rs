//! End-to-end checks against the built binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use image::{GenericImageView, Rgb, RgbImage};

const BIN: &str = env!("CARGO_BIN_EXE_omr-variations");

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("binary runs")
}

fn write_sheet(path: &Path) {
    let mut sheet = RgbImage::from_pixel(400, 300, Rgb([255, 255, 255]));
    for y in 100..130 {
        for x in 60..90 {
            sheet.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    sheet.save(path).unwrap();
}

fn names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_generates_gallery() {
    let dir = tempfile::tempdir().unwrap();
    write_sheet(&dir.path().join("assets/test_sheet_filled.png"));

    let root = dir.path().to_str().unwrap();
    let output = run(&["--root", root, "--seed", "11"]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("✓ Created: ").count(), 7, "{stdout}");
    assert!(stdout.contains("✓ Created: 07_rotated_dim.png"));
    assert!(stdout.contains("Successfully created 7 test image variations"));

    let gallery = dir.path().join("assets/gallery");
    assert_eq!(
        names(&gallery),
        [
            "01_original.png",
            "02_rotated_10deg.png",
            "03_rotated_minus15deg.png",
            "04_dim_lighting.png",
            "05_bright_lighting.png",
            "06_noisy.png",
            "07_rotated_dim.png",
        ]
    );

    let (w, h) = image::open(gallery.join("02_rotated_10deg.png"))
        .unwrap()
        .dimensions();
    assert!(w >= 400 && h >= 300, "{w}x{h}");
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(&["--root", dir.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let gallery = dir.path().join("assets/gallery");
    assert!(gallery.is_dir());
    assert!(names(&gallery).is_empty());
}

#[test]
fn test_explicit_paths() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scans/sheet.png");
    write_sheet(&input);
    let out = dir.path().join("fixtures");

    let output = run(&[
        "--input",
        input.to_str().unwrap(),
        "--output-dir",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(names(&out).len(), 7);
}
