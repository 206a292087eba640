use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nft_core::LumaImage;
use nft_sampler::{ImagePreprocessing, SamplerBuilder, SamplerKind};

/// Create benchmark luminance map with gradients and bright blocks
fn create_benchmark_image(width: usize, height: usize) -> LumaImage {
    let mut img = LumaImage::filled(width, height, 0.0);
    for y in 0..height {
        for x in 0..width {
            let gradient = (x as f32 / width as f32) * 120.0;
            let noise = ((x + y) % 7) as f32;
            let block = if (x / 32 + y / 32) % 2 == 0 { 100.0 } else { 0.0 };
            img.data[y * width + x] = gradient + noise + block;
        }
    }
    img
}

fn create_benchmark_rgb(width: usize, height: usize) -> Vec<u8> {
    (0..width * height * 3).map(|i| (i % 251) as u8).collect()
}

/// Benchmark every sampler kind on the marker's maximum resolution
fn bench_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("samplers");
    let sizes = [(256, 256), (1024, 512), (1024, 1024)];
    let kinds = [
        SamplerKind::Threshold,
        SamplerKind::Gradient,
        SamplerKind::Directional,
    ];

    for &(width, height) in &sizes {
        let img = create_benchmark_image(width, height);
        for kind in kinds {
            let sampler = SamplerBuilder::new()
                .kind(kind)
                .grid_divisions(kind.default_divisions())
                .threshold(kind.default_threshold())
                .build()
                .unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{}x{}", width, height), kind),
                &img,
                |b, img| b.iter(|| black_box(sampler.sample(black_box(img)).unwrap())),
            );
        }
    }

    group.finish();
}

/// Benchmark the luminance conversion feeding every sampler
fn bench_luminance(c: &mut Criterion) {
    let (width, height) = (1024, 1024);
    let rgb = create_benchmark_rgb(width, height);

    c.bench_function("luminance_1024x1024", |b| {
        b.iter(|| black_box(ImagePreprocessing::luminance(black_box(&rgb), width, height).unwrap()))
    });
}

criterion_group!(benches, bench_samplers, bench_luminance);
criterion_main!(benches);
