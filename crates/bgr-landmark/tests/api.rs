use bgr_landmark::core::{BgrColor, ImageError};
use bgr_landmark::detect::{
    bgr_from_rgb, detect_landmarks, detect_landmarks_from_bgr_u8, gray_view, DetectError,
};
use bgr_landmark::print::{render_landmark, LandmarkPrintSpec};
use bgr_landmark::{DetectorParams, GridPattern, MarkerColor};

/// Build an `image::RgbImage` holding one landmark block on white.
fn rgb_fixture(pattern: &GridPattern) -> image::RgbImage {
    let spec = LandmarkPrintSpec {
        grid_inches: 0.5,
        border_inches: 0.0,
        border_color: BgrColor::White.bgr(),
        dpi: 96,
    };
    let block = render_landmark(pattern, &spec);

    let mut canvas = bgr_landmark::core::BgrImage::filled(160, 160, BgrColor::White.bgr());
    canvas.blit(50, 50, &block);

    image::RgbImage::from_fn(160, 160, |x, y| {
        let [b, g, r] = canvas.at(x as usize, y as usize);
        image::Rgb([r, g, b])
    })
}

#[test]
fn end_to_end_detection_from_rgb_image() {
    let img = rgb_fixture(&GridPattern::YELLOW_MAGENTA);
    let detection = detect_landmarks(&img, DetectorParams::default()).expect("detect");

    assert_eq!(detection.landmarks.len(), 1);
    let lm = detection.landmarks[0];
    assert!((lm.position.x - 74.0).abs() <= 1.0);
    assert!((lm.position.y - 74.0).abs() <= 1.0);
    assert_eq!(lm.color0, Some(MarkerColor::Yellow));
    assert_eq!(lm.color1, Some(MarkerColor::Magenta));
}

#[test]
fn bgr_from_rgb_swaps_channels() {
    let img = image::RgbImage::from_pixel(2, 1, image::Rgb([10, 20, 30]));
    let bgr = bgr_from_rgb(&img);
    assert_eq!(bgr.at(0, 0), [30, 20, 10]);
    assert_eq!(bgr.at(1, 0), [30, 20, 10]);
}

#[test]
fn gray_view_borrows_without_copying() {
    let img = image::GrayImage::from_pixel(4, 3, image::Luma([77]));
    let view = gray_view(&img);
    assert_eq!(view.width, 4);
    assert_eq!(view.height, 3);
    assert_eq!(view.at(3, 2), 77);
}

#[test]
fn raw_buffer_helper_validates_length() {
    let pixels = vec![0u8; 4 * 4 * 3 - 1];
    let err = detect_landmarks_from_bgr_u8(4, 4, &pixels, DetectorParams::default()).unwrap_err();
    assert!(matches!(
        err,
        DetectError::Image(ImageError::BadBufferLength { .. })
    ));
}

#[test]
fn raw_buffer_helper_detects_like_the_typed_path() {
    let img = rgb_fixture(&GridPattern::CYAN_YELLOW);
    let bgr = bgr_from_rgb(&img);
    let typed = detect_landmarks(&img, DetectorParams::default()).expect("typed detect");
    let raw = detect_landmarks_from_bgr_u8(
        bgr.width,
        bgr.height,
        &bgr.data,
        DetectorParams::default(),
    )
    .expect("raw detect");
    assert_eq!(typed, raw);
}
