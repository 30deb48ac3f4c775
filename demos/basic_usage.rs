//! Basic usage example for dimfft
//!
//! Runs each transform variant once on a small 2-D tensor and prints the
//! resulting shapes.

use dimfft::{fft, fftfreq, fftshift, hfft, ifft, ihfft, irfft, rfft, Complex64, Tensor};

fn main() {
    println!("=== dimfft Basic Usage Example ===\n");

    // 1. Complex FFT along the last axis
    println!("1. fft / ifft");
    let data: Vec<Complex64> = (0..8)
        .map(|i| Complex64::new(i as f64, -(i as f64) / 2.0))
        .collect();
    let x = Tensor::from_complex(&[2, 4], data).unwrap();
    let spectrum = fft(&x, None, -1, None).unwrap();
    println!(
        "   FFT: {:?}",
        spectrum
            .as_complex()
            .unwrap()
            .iter()
            .map(|c| format!("{:.2}{:+.2}i", c.re, c.im))
            .collect::<Vec<_>>()
    );
    let back = ifft(&spectrum, None, -1, None).unwrap();
    println!("   shape after ifft: {:?}\n", back.shape());

    // 2. Along the first axis, zero-padded to 4 points
    println!("2. fft along dim 0 with n = 4");
    let padded = fft(&x, Some(4), 0, Some("ortho")).unwrap();
    println!("   shape: {:?}\n", padded.shape());

    // 3. Real transforms
    println!("3. rfft / irfft");
    let real: Vec<f64> = (0..10).map(|i| (i as f64 * 0.6).cos()).collect();
    let r = Tensor::real_vector(real);
    let half = rfft(&r, None, -1, None).unwrap();
    println!("   rfft bins: {}", half.shape()[0]);
    let freqs = fftshift(&fftfreq::<f64>(10, 0.1).unwrap(), 0).unwrap();
    println!("   shifted fftfreq: {:?}", freqs.as_real().unwrap());
    let restored = irfft(&half, Some(10), -1, None).unwrap();
    println!("   irfft length: {}\n", restored.shape()[0]);

    // 4. Hermitian transforms
    println!("4. ihfft / hfft");
    let h = ihfft(&r, None, -1, None).unwrap();
    let real_again = hfft(&h, Some(10), -1, None).unwrap();
    println!("   hfft output is real: {}", !real_again.is_complex());
}
