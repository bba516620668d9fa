#![no_main]

use libfuzzer_sys::fuzz_target;
use plane_scale::{CoordinateMapping, ImageStore, ImageStoreMut, Scaler};

fuzz_target!(|data: (u16, u16, u16, u16, bool)| {
    let mapping = if data.4 {
        CoordinateMapping::PixelCenter
    } else {
        CoordinateMapping::AlignCorners
    };
    resize_plane(
        data.0 as usize,
        data.1 as usize,
        data.2 as usize,
        data.3 as usize,
        mapping,
    )
});

fn resize_plane(
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
    mapping: CoordinateMapping,
) {
    if src_width == 0
        || src_width > 2000
        || src_height == 0
        || src_height > 2000
        || dst_width == 0
        || dst_width > 512
        || dst_height == 0
        || dst_height > 512
    {
        return;
    }

    let src_data = vec![15u8; src_width * src_height];

    let store = ImageStore::<u8>::from_slice(&src_data, src_width, src_height).unwrap();
    let mut target = ImageStoreMut::<f64>::try_alloc(dst_width, dst_height).unwrap();
    let mut scaler = Scaler::new();
    scaler.set_coordinate_mapping(mapping);
    scaler.resize_plane(&store, &mut target).unwrap();
    assert!(target.as_bytes().iter().all(|&x| (x - 15.).abs() < 1e-9));
}
