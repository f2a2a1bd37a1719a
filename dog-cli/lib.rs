use dog_core::{init_thread_pool, DogConfig, ImageF32, Keypoint};
use dog_detect::{DetectError, DogDetector, ScaleStack};
use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_circle_mut;

pub use dog_core::{self, DogConfig as Config, ImageF32 as Intensity, Keypoint as DogKeypoint};

#[derive(Debug)]
pub enum CliError {
    Detect(DetectError),
    ThreadPool(rayon::ThreadPoolBuildError),
    Image(image::ImageError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Detect(e) => write!(f, "Detection error: {}", e),
            CliError::ThreadPool(e) => write!(f, "Thread pool error: {}", e),
            CliError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<DetectError> for CliError {
    fn from(err: DetectError) -> Self {
        CliError::Detect(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for CliError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        CliError::ThreadPool(err)
    }
}

impl From<image::ImageError> for CliError {
    fn from(err: image::ImageError) -> Self {
        CliError::Image(err)
    }
}

pub type CliResult<T> = Result<T, CliError>;

/// High-level detector runner: thread pool setup plus the DoG pipeline
pub struct DogRunner {
    detector: DogDetector,
}

impl DogRunner {
    /// Create a runner for the given configuration and image dimensions
    pub fn new(cfg: DogConfig, width: usize, height: usize) -> CliResult<Self> {
        // The global pool can only be sized once per process; later
        // runners reuse whatever pool already exists.
        let _ = init_thread_pool(cfg.n_threads);

        let detector = DogDetector::new(cfg, width, height)?;
        Ok(Self { detector })
    }

    /// Run detection on a normalized [0,1] intensity buffer
    pub fn detect(&self, img: &ImageF32) -> CliResult<(Vec<Keypoint>, ScaleStack)> {
        Ok(self.detector.detect(img)?)
    }

    /// Get detector configuration
    pub fn config(&self) -> &DogConfig {
        self.detector.config()
    }

    /// Get image dimensions
    pub fn dimensions(&self) -> (usize, usize) {
        self.detector.dimensions()
    }
}

/// Convert an 8-bit grayscale image to the [0,1] intensity buffer the
/// detector consumes.
pub fn normalize_gray(img: &GrayImage) -> ImageF32 {
    img.as_raw().iter().map(|&p| f32::from(p) / 255.0).collect()
}

/// Render keypoints as hollow circles over a zoomed copy of the image.
pub fn draw_keypoints(img: &GrayImage, keypoints: &[Keypoint], zoom: u32) -> RgbaImage {
    let zoom = zoom.max(1);
    let scaled = image::imageops::resize(
        img,
        img.width() * zoom,
        img.height() * zoom,
        image::imageops::FilterType::Nearest,
    );
    let mut canvas: RgbaImage = image::DynamicImage::ImageLuma8(scaled).into_rgba8();
    for kp in keypoints {
        draw_hollow_circle_mut(
            &mut canvas,
            ((kp.col as u32 * zoom) as i32, (kp.row as u32 * zoom) as i32),
            3,
            Rgba([0, 255, 0, 255]),
        );
    }
    canvas
}

/// Tile pyramid slices side by side into one image, each slice
/// min-max normalized for inspection.
pub fn pyramid_contact_sheet(pyramid: &ScaleStack) -> GrayImage {
    let width = pyramid.width() as u32;
    let height = pyramid.height() as u32;
    let mut sheet = GrayImage::new(width * pyramid.depth() as u32, height);
    for (i, slice) in pyramid.slices().iter().enumerate() {
        let min = slice.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = slice.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let scale = if max > min { 255.0 / (max - min) } else { 0.0 };
        let x_off = i as u32 * width;
        for row in 0..height {
            for col in 0..width {
                let v = slice[(row * width + col) as usize];
                let px = ((v - min) * scale).round().clamp(0.0, 255.0) as u8;
                sheet.put_pixel(x_off + col, row, Luma([px]));
            }
        }
    }
    sheet
}
