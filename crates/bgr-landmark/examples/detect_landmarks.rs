use std::{env, fs, path::PathBuf};

use bgr_landmark::detect::{detect_landmarks, DetectError};
use bgr_landmark::{DetectorParams, LandmarkInfo};
use image::ImageReader;
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "tracing"))]
use std::str::FromStr;

#[cfg(not(feature = "tracing"))]
use log::{info, warn, LevelFilter};

#[cfg(feature = "tracing")]
use tracing::{info, warn};

#[cfg(feature = "tracing")]
use bgr_landmark::core::init_tracing;
#[cfg(not(feature = "tracing"))]
use bgr_landmark::core::init_with_level;

#[derive(Debug, Deserialize)]
struct ExampleConfig {
    image_path: String,
    #[serde(default)]
    output_path: Option<String>,
    #[serde(default)]
    params: Option<DetectorParams>,
}

#[derive(Debug, Serialize)]
struct ExampleReport {
    image_path: String,
    config_path: String,
    num_landmarks: usize,
    landmarks: Vec<LandmarkInfo>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    let log_level = LevelFilter::from_str("info").unwrap_or(LevelFilter::Info);
    #[cfg(not(feature = "tracing"))]
    init_with_level(log_level)?;

    #[cfg(feature = "tracing")]
    init_tracing(false);

    run()
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = parse_config_path();
    let cfg: ExampleConfig = serde_json::from_str(&fs::read_to_string(&config_path)?)?;

    let img = ImageReader::open(&cfg.image_path)?.decode()?.to_rgb8();
    info!("loaded {} ({}x{})", cfg.image_path, img.width(), img.height());

    let params = cfg.params.unwrap_or_default();
    let detection = detect_landmarks(&img, params).map_err(|e: DetectError| e.to_string())?;
    if detection.landmarks.is_empty() {
        warn!("no landmarks detected");
    }
    for lm in &detection.landmarks {
        info!(
            "landmark at ({:.1}, {:.1}) diff={:+.3} colors={:?}/{:?}",
            lm.position.x, lm.position.y, lm.diff, lm.color0, lm.color1
        );
    }

    let report = ExampleReport {
        image_path: cfg.image_path.clone(),
        config_path: config_path.to_string_lossy().into_owned(),
        num_landmarks: detection.landmarks.len(),
        landmarks: detection.landmarks,
    };

    let json = serde_json::to_string_pretty(&report)?;
    match &cfg.output_path {
        Some(path) => {
            fs::write(path, json)?;
            info!("wrote report to {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn parse_config_path() -> PathBuf {
    env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("detect_landmarks.json"))
}
