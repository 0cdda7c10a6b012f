use crate::density::DensityTable;
use crate::style::IconStyle;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ColorType, ImageBuffer, ImageEncoder, Rgba, RgbaImage,
};
use std::{fs::create_dir_all, io::Write, path::Path};

/// Render one launcher icon: an accent disc with an outline stroke filling
/// the canvas, and a solid glyph dot at the center. Pixels outside the disc
/// stay fully transparent.
pub fn render_icon(size: u32, style: &IconStyle) -> RgbaImage {
    let mut icon: RgbaImage = ImageBuffer::from_fn(size, size, |_, _| Rgba([0, 0, 0, 0]));

    let center = (size as f32 - 1.0) / 2.0;
    let radius = (size as f32 - 1.0) / 2.0;
    let glyph_radius = size as f32 * style.glyph_ratio / 2.0;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance > radius {
                continue;
            }

            let mut pixel = if distance <= glyph_radius {
                style.glyph
            } else if distance > radius - style.outline_width as f32 {
                style.outline
            } else {
                style.background
            };

            // Anti-aliasing at the outer edge
            if distance > radius - 1.0 {
                let alpha_factor = radius - distance;
                pixel[3] = (pixel[3] as f32 * alpha_factor) as u8;
            }

            icon.put_pixel(x, y, pixel);
        }
    }

    icon
}

/// Generate `ic_launcher.png` and `ic_launcher_round.png` for every density
/// bucket in the table, in table order, under `<res_dir>/mipmap-<density>`.
///
/// Prints one progress line per bucket and a completion line after the
/// last one. Any failure aborts the remaining buckets.
pub fn generate_launcher_icons(
    res_dir: &Path,
    table: &DensityTable,
    style: &IconStyle,
) -> Result<()> {
    create_dir_all(res_dir).context("Can't create output directory")?;

    for entry in table.entries() {
        let density = entry.density.as_str();
        let size = entry.size;

        if size == 0 {
            anyhow::bail!("Icon size for {density} must be greater than zero");
        }

        let mipmap_dir = res_dir.join(format!("mipmap-{density}"));
        create_dir_all(&mipmap_dir)
            .with_context(|| format!("Can't create {}", mipmap_dir.display()))?;

        let icon = render_icon(size, style);
        let mut buf = Vec::new();
        write_png(icon.as_raw(), &mut buf, size)?;

        // Both launcher variants carry the same encoded bytes.
        for filename in ["ic_launcher.png", "ic_launcher_round.png"] {
            let output_path = mipmap_dir.join(filename);
            std::fs::write(&output_path, &buf)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
        }

        println!("Created icons for {density}: {size}x{size}");
    }

    println!("All icons created successfully!");

    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
