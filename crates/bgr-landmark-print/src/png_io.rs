//! PNG encoding for rendered targets.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use bgr_landmark_core::BgrImage;

/// Errors from writing a rendered target to disk.
#[derive(thiserror::Error, Debug)]
pub enum PrintError {
    #[error("failed to create {path}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Encode(#[from] png::EncodingError),
}

/// Encode `img` as an 8-bit RGB PNG at `path`.
pub fn write_bgr_png(path: &Path, img: &BgrImage) -> Result<(), PrintError> {
    let file = File::create(path).map_err(|source| PrintError::Create {
        path: path.display().to_string(),
        source,
    })?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, img.width as u32, img.height as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    let mut rgb = Vec::with_capacity(img.data.len());
    for px in img.data.chunks_exact(3) {
        rgb.extend_from_slice(&[px[2], px[1], px[0]]);
    }
    writer.write_image_data(&rgb)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;
    use crate::targets::{render_landmark, LandmarkPrintSpec};
    use bgr_landmark_core::GridPattern;

    #[test]
    fn writes_a_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landmark.png");

        let spec = LandmarkPrintSpec {
            grid_inches: 0.5,
            border_inches: 0.25,
            dpi: 32,
            ..LandmarkPrintSpec::default()
        };
        let img = render_landmark(&GridPattern::YELLOW_MAGENTA, &spec);
        write_bgr_png(&path, &img).unwrap();

        let decoder = png::Decoder::new(BufReader::new(File::open(&path).unwrap()));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0u8; reader.output_buffer_size().unwrap()];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!(info.width as usize, img.width);
        assert_eq!(info.height as usize, img.height);
        // top-left border pixel, now in RGB order
        assert_eq!(&buf[..3], &[128, 128, 128]);
    }

    #[test]
    fn unwritable_path_reports_create_error() {
        let img = bgr_landmark_core::BgrImage::filled(4, 4, [0; 3]);
        let err = write_bgr_png(Path::new("/nonexistent-dir/out.png"), &img).unwrap_err();
        assert!(matches!(err, PrintError::Create { .. }));
    }
}
