use std::time::Instant;

use plane_scale::{ImageStore, ImageStoreMut, Scaler, ThreadingPolicy};

fn main() {
    let (width, height) = (1920usize, 1080usize);
    let source: Vec<u8> = (0..width * height)
        .map(|i| ((i % width) ^ (i / width)) as u8)
        .collect();
    let store = ImageStore::from_slice(&source, width, height).unwrap();

    let mut scaler = Scaler::new();
    scaler.set_threading_policy(ThreadingPolicy::Adaptive);

    let start_time = Instant::now();
    let halved = scaler.resize_plane_by_factor(&store, 0.5).unwrap();
    println!(
        "Factor 0.5 -> {}x{} in {:?}",
        halved.width,
        halved.height,
        start_time.elapsed()
    );

    let start_time = Instant::now();
    let mut target = ImageStoreMut::<f32>::try_alloc(width * 3 / 2, height / 3).unwrap();
    scaler.resize_plane(&store, &mut target).unwrap();
    println!(
        "Resize into {}x{} in {:?}",
        target.width,
        target.height,
        start_time.elapsed()
    );

    let sum: f64 = halved.as_bytes().iter().sum();
    println!("Mean of halved plane {}", sum / (halved.width * halved.height) as f64);
}
