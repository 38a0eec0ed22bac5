//! PNG preview of a generated layout
//!
//! Each block becomes a filled rectangle of `cell_size` pixels per grid cell
//! with a one pixel outline in a darker shade of its color. Cells no block
//! covers stay transparent.

use crate::algorithm::executor::Layout;
use crate::algorithm::palette::parse_hex_color;
use crate::io::configuration::{MAX_CELL_SIZE, MAX_PREVIEW_PIXELS, OUTLINE_SHADE};
use crate::io::error::{LayoutError, Result, invalid_parameter};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Pixel dimensions of the preview for a `width` x `height` canvas
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is zero or above [`MAX_CELL_SIZE`]
/// - The image would exceed [`MAX_PREVIEW_PIXELS`]
pub fn preview_dimensions(width: usize, height: usize, cell_size: u32) -> Result<(u32, u32)> {
    if cell_size == 0 || cell_size > MAX_CELL_SIZE {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("must be between 1 and {MAX_CELL_SIZE}"),
        ));
    }

    let too_large = || {
        invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("a {width}x{height} preview would exceed {MAX_PREVIEW_PIXELS} pixels"),
        )
    };
    let (pixel_width, pixel_height) = to_pixels(width, cell_size)
        .zip(to_pixels(height, cell_size))
        .ok_or_else(too_large)?;
    let pixels = u64::from(pixel_width) * u64::from(pixel_height);
    if pixels > MAX_PREVIEW_PIXELS {
        return Err(too_large());
    }
    Ok((pixel_width, pixel_height))
}

/// Render the layout into an in-memory RGBA image
///
/// # Errors
///
/// Returns an error if:
/// - The preview size is rejected (see [`preview_dimensions`])
/// - A block color is not a valid hex color
pub fn render_layout(layout: &Layout, cell_size: u32) -> Result<RgbaImage> {
    let (width, height) = preview_dimensions(layout.width, layout.height, cell_size)?;
    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for block in &layout.blocks {
        let fill = parse_hex_color(&block.color)?;
        let outline = shade(fill, OUTLINE_SHADE);

        let edge = |cells: usize, limit: u32| {
            to_pixels(cells, cell_size).map_or(limit, |pixels| pixels.min(limit))
        };
        let left = edge(block.x, width);
        let top = edge(block.y, height);
        let right = edge(block.right(), width);
        let bottom = edge(block.bottom(), height);

        for py in top..bottom {
            for px in left..right {
                let on_edge = px == left || py == top || px + 1 == right || py + 1 == bottom;
                let rgba = if on_edge { outline } else { fill };
                img.put_pixel(px, py, Rgba(rgba));
            }
        }
    }

    Ok(img)
}

/// Render the layout and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_layout`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(layout: &Layout, cell_size: u32, output_path: &Path) -> Result<()> {
    let img = render_layout(layout, cell_size)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| LayoutError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn to_pixels(cells: usize, cell_size: u32) -> Option<u32> {
    u32::try_from(cells).ok()?.checked_mul(cell_size)
}

fn shade(rgba: [u8; 4], factor: f32) -> [u8; 4] {
    let scale = |channel: u8| (f32::from(channel) * factor).round() as u8;
    [scale(rgba[0]), scale(rgba[1]), scale(rgba[2]), rgba[3]]
}
