use dog_cli::{draw_keypoints, normalize_gray, pyramid_contact_sheet, Config, DogRunner};
use image::ImageReader;
use std::time::Instant;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "model_chickenbroth.jpg".to_string());

    // Load grayscale image
    let img = ImageReader::open(&path)
        .expect("Image not found")
        .decode()
        .expect("Decode failed")
        .to_luma8();

    let (w, h) = img.dimensions();
    let runner =
        DogRunner::new(Config::default(), w as usize, h as usize).expect("Invalid configuration");
    let intensity = normalize_gray(&img);

    // Time the full pipeline
    let t0 = Instant::now();
    let (kps, pyramid) = runner.detect(&intensity).expect("Detection failed");
    let elapsed = t0.elapsed();

    println!("Time taken: {:.2?}", elapsed);
    println!("Detected {} keypoints across {} DoG levels", kps.len(), pyramid.depth() - 1);

    // Draw green circles at each keypoint, zoomed 4x like the display tooling
    let overlay = draw_keypoints(&img, &kps, 4);
    overlay
        .save("keypoints.png")
        .expect("Failed to save keypoint overlay");
    println!("Saved keypoint overlay as keypoints.png");

    // Tile the pyramid levels for inspection
    pyramid_contact_sheet(&pyramid)
        .save("pyramid.png")
        .expect("Failed to save pyramid contact sheet");
    println!("Saved pyramid contact sheet as pyramid.png");
}
