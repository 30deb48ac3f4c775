// Test intent: ensures parallel and sequential lane paths produce identical results.
#![cfg(feature = "parallel")]

use dimfft::{fft, hfft, rfft, set_parallel_threshold, set_parallel_threads, Complex32, Tensor};

const ROWS: usize = 64;
const COLS: usize = 48;

fn batch() -> Tensor<f32> {
    let data: Vec<Complex32> = (0..ROWS * COLS)
        .map(|i| Complex32::new(i as f32 * 0.01, -(i as f32) * 0.02))
        .collect();
    Tensor::from_complex(&[ROWS, COLS], data).unwrap()
}

#[test]
/// Run the same transforms in forced-parallel and forced-sequential modes and compare outputs.
fn parallel_matches_sequential() {
    let x = batch();
    let real = Tensor::from_real(&[ROWS, COLS], x.as_complex().unwrap().iter().map(|c| c.re).collect())
        .unwrap();

    set_parallel_threshold(1);
    let par_c2c = fft(&x, None, 0, None).unwrap();
    let par_r2c = rfft(&real, None, -1, None).unwrap();
    let par_c2r = hfft(&x, None, -1, None).unwrap();

    set_parallel_threshold(usize::MAX);
    let seq_c2c = fft(&x, None, 0, None).unwrap();
    let seq_r2c = rfft(&real, None, -1, None).unwrap();
    let seq_c2r = hfft(&x, None, -1, None).unwrap();

    set_parallel_threshold(0);

    // each lane runs the same kernel either way, so the results are bit-identical
    assert_eq!(par_c2c, seq_c2c);
    assert_eq!(par_r2c, seq_r2c);
    assert_eq!(par_c2r, seq_c2r);
}

#[test]
fn thread_override_keeps_results() {
    let x = batch();
    set_parallel_threads(2);
    set_parallel_threshold(1);
    let two = fft(&x, Some(50), -1, Some("ortho")).unwrap();
    set_parallel_threads(0);
    let default = fft(&x, Some(50), -1, Some("ortho")).unwrap();
    set_parallel_threshold(0);
    assert_eq!(two, default);
}
