mod common;

use app_icon_kit::constants::android::DENSITY_MAP;
use app_icon_kit::exporter;
use common::{read, temp_project};
use image::{GenericImageView, Rgba, RgbaImage};
use std::fs;

#[test]
fn test_exports_one_icon_per_bucket() {
    let (_tmp, project) = temp_project();
    project.compose().unwrap();

    let exported = project.export().unwrap();
    assert_eq!(exported.len(), 5);

    for ((bucket, size), icon) in DENSITY_MAP.iter().zip(&exported) {
        assert_eq!(icon.bucket, *bucket);
        assert_eq!(icon.size, *size);
        assert_eq!(icon.path, project.android_icons_dir().join(bucket).join("ic_launcher.png"));

        let img = image::open(&icon.path).unwrap();
        assert_eq!(img.dimensions(), (*size, *size), "wrong size for {}", bucket);
    }

    let folders = fs::read_dir(project.android_icons_dir()).unwrap().count();
    assert_eq!(folders, 5);
}

#[test]
fn test_rerun_produces_identical_files() {
    let (_tmp, project) = temp_project();
    project.compose().unwrap();

    let first: Vec<Vec<u8>> = project.export().unwrap().iter().map(|i| read(&i.path)).collect();
    let second: Vec<Vec<u8>> = project.export().unwrap().iter().map(|i| read(&i.path)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_missing_base_icon_fails_without_output() {
    let (_tmp, project) = temp_project();

    let err = project.export().unwrap_err();
    assert!(format!("{:#}", err).contains("Base icon not found"));
    assert!(!project.android_icons_dir().exists());
}

#[test]
fn test_non_square_base_icon_is_rejected() {
    let (tmp, _project) = temp_project();
    let base = tmp.path().join("wide.png");
    RgbaImage::from_pixel(64, 32, Rgba([1, 2, 3, 255])).save(&base).unwrap();

    let err = exporter::export(&base, &tmp.path().join("out")).unwrap_err();
    assert!(format!("{:#}", err).contains("must be square"));
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn test_undecodable_base_icon_is_an_error() {
    let (tmp, _project) = temp_project();
    let base = tmp.path().join("broken.png");
    fs::write(&base, b"definitely not a png").unwrap();

    assert!(exporter::export(&base, &tmp.path().join("out")).is_err());
}

#[test]
fn test_transparent_base_stays_transparent() {
    let (tmp, _project) = temp_project();
    let base = tmp.path().join("clear.png");
    RgbaImage::from_pixel(96, 96, Rgba([0, 0, 0, 0])).save(&base).unwrap();

    let exported = exporter::export(&base, &tmp.path().join("out")).unwrap();
    let img = image::open(&exported[0].path).unwrap().to_rgba8();
    assert!(img.pixels().all(|p| p.0[3] == 0));
}
