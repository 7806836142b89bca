/// Basic example: Convert a generated test image to ASCII art
///
/// This creates a test image with some basic shapes, converts it with the
/// default ramp and with a custom one, and prints both.
use image::{Rgba, RgbaImage};
use img2ascii::{ConversionOptions, DecodedImage, convert};

#[tokio::main]
async fn main() -> img2ascii::Result<()> {
    println!("img2ascii - Basic Example");
    println!("=========================\n");

    let width = 160;
    let height = 120;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([100, 100, 100, 255]));

    // Draw a white circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 40.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            } else if (dist - radius).abs() < 4.0 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }

    println!("Created test image: {}x{}\n", width, height);
    let image = DecodedImage::from_rgba(img);

    // Characters are roughly twice as tall as wide, so halve the rows
    let options = ConversionOptions::default().with_width(64).with_height(24);
    print!("{}", convert(image.clone(), &options).await?);

    println!();
    let blocks = options.with_ramp("█▓▒░ ");
    print!("{}", convert(image, &blocks).await?);

    Ok(())
}
