mod common;

use std::path::Path;

use image::{Rgba, RgbaImage};

use slim_core::error::SlimError;
use slim_core::image_source::{load_image, SourceImage};

#[test]
fn test_load_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.png");
    RgbaImage::from_pixel(7, 3, Rgba([1, 2, 3, 255]))
        .save(&path)
        .unwrap();

    let image = load_image(&path).unwrap();
    assert_eq!(image.width(), 7);
    assert_eq!(image.height(), 3);
    assert_eq!(*image.pixels().get_pixel(6, 2), Rgba([1, 2, 3, 255]));
    assert_eq!(image.path(), Some(path.as_path()));
    assert_eq!(image.title(), "sample.png - SLIM");
}

#[test]
fn test_load_missing_file_is_decode_error() {
    let err = load_image(Path::new("/nonexistent/definitely/missing.png")).unwrap_err();
    assert!(matches!(err, SlimError::Decode { .. }));
    assert!(err.to_string().contains("missing.png"));
}

#[test]
fn test_load_garbage_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("junk.png");
    std::fs::write(&path, b"not an image at all").unwrap();
    assert!(matches!(
        load_image(&path).unwrap_err(),
        SlimError::Decode { .. }
    ));
}

#[test]
fn test_zero_sized_image_rejected() {
    let err = SourceImage::from_rgba(RgbaImage::new(0, 5)).unwrap_err();
    assert!(matches!(
        err,
        SlimError::InvalidDimensions {
            width: 0,
            height: 5
        }
    ));
}

#[test]
fn test_untitled_without_path() {
    let image = common::solid_image(2, 2, [0, 0, 0, 255]);
    assert_eq!(image.title(), "untitled - SLIM");
}
