use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dog_core::{DogConfig, ImageF32};
use dog_detect::{CurvatureEvaluator, DogDetector, DogStackBuilder, ExtremaSelector, PyramidBuilder};

/// Synthetic benchmark image: smooth gradient plus a grid of blobs
fn create_benchmark_image(width: usize, height: usize) -> ImageF32 {
    let mut img = vec![0.0f32; width * height];
    for y in 0..height {
        for x in 0..width {
            let gradient = 0.2 * (x as f32 / width as f32);
            img[y * width + x] = 0.3 + gradient;
        }
    }
    // blob centers every 16 pixels
    for by in (8..height).step_by(16) {
        for bx in (8..width).step_by(16) {
            for dy in -2i32..=2 {
                for dx in -2i32..=2 {
                    let x = (bx as i32 + dx).clamp(0, width as i32 - 1) as usize;
                    let y = (by as i32 + dy).clamp(0, height as i32 - 1) as usize;
                    let falloff = 1.0 - 0.15 * ((dx * dx + dy * dy) as f32).sqrt();
                    img[y * width + x] = img[y * width + x].max(0.9 * falloff);
                }
            }
        }
    }
    img
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    for &size in &[64usize, 128, 256] {
        let img = create_benchmark_image(size, size);
        let detector = DogDetector::new(DogConfig::default(), size, size).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &img, |b, img| {
            b.iter(|| detector.detect(black_box(img)).unwrap())
        });
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let size = 128;
    let img = create_benchmark_image(size, size);
    let cfg = DogConfig::default();
    let pyramid = PyramidBuilder::build(&img, size, size, cfg.sigma0, cfg.k, &cfg.levels);
    let dog = DogStackBuilder::build(&pyramid).unwrap();
    let curvature = CurvatureEvaluator::evaluate(&dog);

    c.bench_function("pyramid_128", |b| {
        b.iter(|| {
            PyramidBuilder::build(black_box(&img), size, size, cfg.sigma0, cfg.k, &cfg.levels)
        })
    });
    c.bench_function("dog_stack_128", |b| {
        b.iter(|| DogStackBuilder::build(black_box(&pyramid)).unwrap())
    });
    c.bench_function("curvature_128", |b| {
        b.iter(|| CurvatureEvaluator::evaluate(black_box(&dog)))
    });
    c.bench_function("extrema_128", |b| {
        b.iter(|| {
            ExtremaSelector::select(
                black_box(&dog),
                black_box(&curvature),
                cfg.th_contrast,
                cfg.th_r,
            )
        })
    });
}

criterion_group!(benches, bench_full_pipeline, bench_stages);
criterion_main!(benches);
