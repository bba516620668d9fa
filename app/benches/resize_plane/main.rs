use criterion::{criterion_group, criterion_main, Criterion};
use plane_scale::{ImageStore, ImageStoreMut, Scaler, ThreadingPolicy};

pub fn criterion_benchmark(c: &mut Criterion) {
    let (width, height) = (2048usize, 1536usize);
    let source: Vec<u8> = (0..width * height)
        .map(|i| ((i * 31) % 251) as u8)
        .collect();
    let source_f32: Vec<f32> = source.iter().map(|&x| x as f32 * (1. / 255.)).collect();

    c.bench_function("Plane scale Plane8: Bilinear 0.25", |b| {
        let store = ImageStore::from_slice(&source, width, height).unwrap();
        b.iter(|| {
            let scaler = Scaler::new();
            let mut target = ImageStoreMut::<f64>::try_alloc(width / 4, height / 4).unwrap();
            scaler.resize_plane(&store, &mut target).unwrap();
        })
    });

    c.bench_function("Plane scale Plane8(Threaded): Bilinear 2.0", |b| {
        let store = ImageStore::from_slice(&source, width, height).unwrap();
        b.iter(|| {
            let mut scaler = Scaler::new();
            scaler.set_threading_policy(ThreadingPolicy::Adaptive);
            _ = scaler.resize_plane_by_factor(&store, 2.).unwrap();
        })
    });

    c.bench_function("Plane scale Plane32f: Bilinear 0.5", |b| {
        let store = ImageStore::from_slice(&source_f32, width, height).unwrap();
        b.iter(|| {
            let scaler = Scaler::new();
            let mut target = ImageStoreMut::<f32>::try_alloc(width / 2, height / 2).unwrap();
            scaler.resize_plane(&store, &mut target).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
