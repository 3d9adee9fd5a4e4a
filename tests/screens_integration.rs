//! Integration tests for the screenshot generator

use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use storeshots::{generate_all, CanvasSize, RenderConfig};

/// Per-test scratch directory under the system temp dir.
fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("storeshots_{}_{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

/// Config that resolves no font files, forcing the built-in glyph set so the
/// output is identical on every machine.
fn builtin_font_config(out_dir: PathBuf, canvas: CanvasSize) -> RenderConfig {
    RenderConfig {
        out_dir,
        canvas,
        bold_fonts: Vec::new(),
        regular_fonts: Vec::new(),
    }
}

#[test]
fn generates_six_ipad_sized_pngs() {
    let out = scratch_dir("e2e");
    let config = RenderConfig {
        out_dir: out.clone(),
        ..Default::default()
    };

    let written = generate_all(&config).expect("generation failed");

    let expected = [
        "01_dashboard.png",
        "02_tools.png",
        "03_chat.png",
        "04_tool_detail.png",
        "05_results.png",
        "06_profile.png",
    ];
    assert_eq!(written.len(), expected.len());
    for (path, name) in written.iter().zip(expected.iter()) {
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), *name);
        assert!(path.starts_with(&out), "written outside out_dir: {path:?}");

        let img = image::open(path).expect("decode failed");
        assert_eq!(img.width(), 2048, "{name} width");
        assert_eq!(img.height(), 2732, "{name} height");
        assert_eq!(img.color(), image::ColorType::Rgb8, "{name} color type");
    }

    // Exactly six files, nothing else
    let count = fs::read_dir(&out).unwrap().count();
    assert_eq!(count, 6);

    fs::remove_dir_all(&out).ok();
}

#[test]
fn repeated_runs_are_byte_identical() {
    let out_a = scratch_dir("idem_a");
    let out_b = scratch_dir("idem_b");
    // Reduced canvas keeps this cheap; determinism does not depend on size
    let canvas = CanvasSize {
        width: 512,
        height: 683,
    };

    let first = generate_all(&builtin_font_config(out_a.clone(), canvas)).expect("first run");
    let second = generate_all(&builtin_font_config(out_b.clone(), canvas)).expect("second run");

    for (a, b) in first.iter().zip(second.iter()) {
        let bytes_a = fs::read(a).unwrap();
        let bytes_b = fs::read(b).unwrap();
        let digest_a = hex::encode(Sha256::digest(&bytes_a));
        let digest_b = hex::encode(Sha256::digest(&bytes_b));
        assert_eq!(
            digest_a,
            digest_b,
            "{} differs between runs",
            a.file_name().unwrap().to_string_lossy()
        );
    }

    fs::remove_dir_all(&out_a).ok();
    fs::remove_dir_all(&out_b).ok();
}

#[test]
fn missing_output_directory_is_created() {
    let out = scratch_dir("mkdir").join("nested").join("ipad");
    let canvas = CanvasSize {
        width: 256,
        height: 342,
    };

    let written = generate_all(&builtin_font_config(out.clone(), canvas)).expect("generation");
    assert_eq!(written.len(), 6);
    assert!(out.is_dir());

    fs::remove_dir_all(out.parent().unwrap().parent().unwrap()).ok();
}
