//! Separable image filters over contiguous f32 buffers.
//!
//! Border policy for every filter in this crate: replicate
//! (clamp-to-edge). Absolute pixel values near borders feed the
//! extrema decisions downstream, so the same policy is used for the
//! Gaussian blurs and for all derivative passes.

/// Smoothing half of the 5-tap Sobel operator
pub const SOBEL_SMOOTH_5: [f32; 5] = [1.0, 4.0, 6.0, 4.0, 1.0];

/// Differentiating half of the 5-tap Sobel operator
pub const SOBEL_DERIV_5: [f32; 5] = [-1.0, -2.0, 0.0, 2.0, 1.0];

/// Convolve each row with `kernel`, replicating edge pixels.
pub fn horizontal_filter(src: &[f32], width: usize, height: usize, kernel: &[f32]) -> Vec<f32> {
    debug_assert!(kernel.len() % 2 == 1);
    debug_assert_eq!(src.len(), width * height);
    let half = (kernel.len() / 2) as i64;
    let mut out = vec![0.0f32; src.len()];
    for y in 0..height {
        let row = &src[y * width..(y + 1) * width];
        let out_row = &mut out[y * width..(y + 1) * width];
        for (x, out_px) in out_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (i, &k) in kernel.iter().enumerate() {
                let sx = (x as i64 + i as i64 - half).clamp(0, width as i64 - 1) as usize;
                acc += k * row[sx];
            }
            *out_px = acc;
        }
    }
    out
}

/// Convolve each column with `kernel`, replicating edge pixels.
pub fn vertical_filter(src: &[f32], width: usize, height: usize, kernel: &[f32]) -> Vec<f32> {
    debug_assert!(kernel.len() % 2 == 1);
    debug_assert_eq!(src.len(), width * height);
    let half = (kernel.len() / 2) as i64;
    let mut out = vec![0.0f32; src.len()];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0f32;
            for (i, &k) in kernel.iter().enumerate() {
                let sy = (y as i64 + i as i64 - half).clamp(0, height as i64 - 1) as usize;
                acc += k * src[sy * width + x];
            }
            out[y * width + x] = acc;
        }
    }
    out
}

/// Apply `h_kernel` along rows then `v_kernel` along columns.
pub fn separable_filter(
    src: &[f32],
    width: usize,
    height: usize,
    h_kernel: &[f32],
    v_kernel: &[f32],
) -> Vec<f32> {
    let h = horizontal_filter(src, width, height, h_kernel);
    vertical_filter(&h, width, height, v_kernel)
}

fn gaussian(x: f32, sigma: f32) -> f32 {
    ((2.0 * std::f32::consts::PI).sqrt() * sigma).recip()
        * (-x.powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Generate a 1-D Gaussian kernel of odd `kernel_size`, normalized to
/// unit sum.
pub fn gaussian_kernel(sigma: f32, kernel_size: usize) -> Vec<f32> {
    assert!(kernel_size % 2 == 1, "kernel_size must be odd");
    let mut kernel = vec![0f32; kernel_size];
    let half_width = (kernel_size / 2) as i32;
    let mut sum = 0f32;
    for i in -half_width..=half_width {
        let val = gaussian(i as f32, sigma);
        kernel[(i + half_width) as usize] = val;
        sum += val;
    }
    for val in kernel.iter_mut() {
        *val /= sum;
    }
    kernel
}

/// Isotropic Gaussian blur. Kernel truncated at radius `ceil(2*sigma)`.
pub fn gaussian_blur(src: &[f32], width: usize, height: usize, sigma: f32) -> Vec<f32> {
    assert!(sigma > 0.0, "sigma must be > 0.0");
    let kernel_radius = (2.0 * sigma).ceil() as usize;
    let kernel_size = kernel_radius * 2 + 1;
    let kernel = gaussian_kernel(sigma, kernel_size);
    separable_filter(src, width, height, &kernel, &kernel)
}

/// First-order derivative along columns (x direction), 5-tap Sobel.
pub fn sobel_cols(src: &[f32], width: usize, height: usize) -> Vec<f32> {
    separable_filter(src, width, height, &SOBEL_DERIV_5, &SOBEL_SMOOTH_5)
}

/// First-order derivative along rows (y direction), 5-tap Sobel.
pub fn sobel_rows(src: &[f32], width: usize, height: usize) -> Vec<f32> {
    separable_filter(src, width, height, &SOBEL_SMOOTH_5, &SOBEL_DERIV_5)
}
