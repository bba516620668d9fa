#![no_main]

use libfuzzer_sys::fuzz_target;
use plane_scale::{scale, ImageStore, ScaleError};

fuzz_target!(|data: (u8, u8, f64)| {
    let (width, height, factor) = (data.0 as usize, data.1 as usize, data.2);
    if width == 0 || height == 0 || !(factor.abs() < 16.) {
        return;
    }

    let src_data = (0..width * height).map(|i| i as u16).collect::<Vec<_>>();
    let store = ImageStore::<u16>::from_slice(&src_data, width, height).unwrap();
    match scale(&store, factor) {
        Ok(resized) => {
            assert_eq!(resized.get_size(), store.scaled_size(factor).unwrap());
            assert_eq!(resized.get(0, 0), Some(0.));
        }
        Err(err) => assert!(matches!(
            err,
            ScaleError::InvalidScaleFactor(_) | ScaleError::ZeroImageDimensions
        )),
    }
});
