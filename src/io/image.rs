//! Image decoding into pixel buffers and debug edge-map export
//!
//! Decoding is the pipeline's external boundary: everything downstream of
//! [`load_pixel_buffer`] operates on the validated buffer alone and never
//! touches file formats again.

use crate::analysis::edges::EdgeMap;
use crate::io::error::{AnalysisError, Result};
use crate::raster::PixelBuffer;
use image::{ImageBuffer, Luma};
use std::path::Path;

/// Decode an image file into an RGBA pixel buffer
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or decoded
/// - The decoded image has a zero dimension
pub fn load_pixel_buffer<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| AnalysisError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    PixelBuffer::new(width, height, rgba.into_raw())
}

/// Export an edge map as a white-on-black grayscale PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_edge_map_png(edge_map: &EdgeMap, output_path: &str) -> Result<()> {
    let mut img = ImageBuffer::new(edge_map.width(), edge_map.height());

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = if edge_map.is_edge(x, y) {
            Luma([255_u8])
        } else {
            Luma([0_u8])
        };
    }

    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| AnalysisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AnalysisError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
