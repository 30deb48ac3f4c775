//! Demonstrates enabling verbose logging for dimfft.
use dimfft::{irfft, rfft, Tensor};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    // 12 is not a power of two, so the log shows a Bluestein plan
    let signal: Vec<f32> = (0..24).map(|i| i as f32).collect();
    let x = Tensor::from_real(&[2, 12], signal).unwrap();
    let spectrum = rfft(&x, None, -1, Some("ortho")).unwrap();
    irfft(&spectrum, Some(12), -1, Some("ortho")).unwrap();
}
