use std::io::Cursor;
use std::path::Path;

use image::DynamicImage;
use tone_quant::{Grid, Image};

use crate::error::PipelineError;

/// Decode an image file into a single- or three-channel grid.
pub fn decode_image(path: &Path) -> Result<Image, PipelineError> {
    let dynamic = image::open(path).map_err(|e| PipelineError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    from_dynamic(dynamic).map_err(|e| PipelineError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Decode an in-memory encoded image. `label` names the source in errors.
pub fn decode_bytes(bytes: &[u8], label: &Path) -> Result<Image, PipelineError> {
    let dynamic = image::load_from_memory(bytes).map_err(|e| PipelineError::Decode {
        path: label.to_path_buf(),
        message: e.to_string(),
    })?;
    from_dynamic(dynamic).map_err(|e| PipelineError::Decode {
        path: label.to_path_buf(),
        message: e.to_string(),
    })
}

/// Grey and grey+alpha sources stay single-channel; everything else
/// goes through RGB8 and drops alpha.
pub fn from_dynamic(dynamic: DynamicImage) -> Result<Image, tone_quant::QuantError> {
    match dynamic {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => {
            let luma = dynamic.to_luma8();
            let (cols, rows) = luma.dimensions();
            Ok(Grid::new(rows as usize, cols as usize, luma.into_raw())?.into())
        }
        other => {
            let rgb = other.to_rgb8();
            let (cols, rows) = rgb.dimensions();
            let pixels = rgb
                .into_raw()
                .chunks_exact(3)
                .map(|c| [c[0], c[1], c[2]])
                .collect();
            Ok(Grid::new(rows as usize, cols as usize, pixels)?.into())
        }
    }
}

/// Encode an image as an 8-bit PNG (Grayscale or Rgb).
pub fn encode_png(image: &Image) -> Result<Vec<u8>, PipelineError> {
    let dims = image.dims();
    let width = u32::try_from(dims.cols)
        .map_err(|_| PipelineError::Encode(format!("width {} too large", dims.cols)))?;
    let height = u32::try_from(dims.rows)
        .map_err(|_| PipelineError::Encode(format!("height {} too large", dims.rows)))?;

    let (color_type, data): (png::ColorType, Vec<u8>) = match image {
        Image::SingleChannel(grid) => (png::ColorType::Grayscale, grid.as_slice().to_vec()),
        Image::ThreeChannel(grid) => (
            png::ColorType::Rgb,
            grid.as_slice().iter().flatten().copied().collect(),
        ),
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| PipelineError::Encode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| PipelineError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode and write `image` to `path`.
pub fn write_png(image: &Image, path: &Path) -> Result<(), PipelineError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
