use std::fs;
use std::path::Path;

fn main() {
    let res_dir = std::env::args().nth(1).unwrap_or_else(|| "./res".to_string());

    let densities = [
        ("mdpi", 48u32),
        ("hdpi", 72),
        ("xhdpi", 96),
        ("xxhdpi", 144),
        ("xxxhdpi", 192),
    ];

    println!("Checking launcher icons in: {res_dir}");

    let mut failed_buckets = 0;

    for (density, expected) in densities {
        let mipmap_dir = Path::new(&res_dir).join(format!("mipmap-{density}"));

        println!("\nmipmap-{density} (expected {expected}x{expected}):");

        if !verify_bucket(&mipmap_dir, expected) {
            failed_buckets += 1;
        }
    }

    if failed_buckets == 0 {
        println!("\n✓ All launcher icons look good!");
    } else {
        println!("\n⚠ {failed_buckets} density bucket(s) failed verification");
    }
}

/// Inspect one mipmap directory and print what was found. Returns false
/// when anything is off.
fn verify_bucket(mipmap_dir: &Path, expected: u32) -> bool {
    let launcher_path = mipmap_dir.join("ic_launcher.png");
    let round_path = mipmap_dir.join("ic_launcher_round.png");

    let img = match image::open(&launcher_path) {
        Ok(img) => img,
        Err(err) => {
            println!("  ⚠ Can't read {}: {err}", launcher_path.display());
            return false;
        }
    };

    let width = img.width();
    let height = img.height();
    println!("  Image dimensions: {width}x{height}");

    let mut ok = true;

    if width != expected || height != expected {
        println!("  ⚠ Dimensions should be {expected}x{expected}");
        ok = false;
    }

    let rgba_img = img.to_rgba8();

    // The glyph dot covers the canvas center with a fully opaque pixel.
    let center = rgba_img.get_pixel(width / 2, height / 2);
    println!(
        "  Center pixel: RGBA [{}, {}, {}, {}]",
        center[0], center[1], center[2], center[3]
    );
    if center[3] != 255 {
        println!("  ⚠ Center pixel should be fully opaque");
        ok = false;
    }

    // Corners lie outside the disc and must stay transparent.
    let corner = rgba_img.get_pixel(0, 0);
    println!(
        "  Corner pixel: RGBA [{}, {}, {}, {}]",
        corner[0], corner[1], corner[2], corner[3]
    );
    if corner[3] != 0 {
        println!("  ⚠ Corner pixel should be fully transparent");
        ok = false;
    }

    // The round variant is the same image under a different name.
    match (fs::read(&launcher_path), fs::read(&round_path)) {
        (Ok(launcher_bytes), Ok(round_bytes)) => {
            if launcher_bytes == round_bytes {
                println!("  ✓ ic_launcher_round.png matches ic_launcher.png");
            } else {
                println!("  ⚠ ic_launcher_round.png differs from ic_launcher.png");
                ok = false;
            }
        }
        _ => {
            println!("  ⚠ Can't read {}", round_path.display());
            ok = false;
        }
    }

    if ok {
        println!("  ✓ Bucket verified");
    }

    ok
}
