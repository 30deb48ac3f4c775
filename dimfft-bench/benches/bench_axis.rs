use criterion::{criterion_group, criterion_main, Criterion};
use dimfft::{fft, Complex32, Tensor};

// Same data, contiguous lanes (dim 1) versus strided lanes (dim 0).
fn bench_axes(c: &mut Criterion) {
    let rows = 256;
    let cols = 256;
    let data: Vec<Complex32> = (0..rows * cols)
        .map(|i| Complex32::new((i % 17) as f32, (i % 5) as f32))
        .collect();
    let x = Tensor::from_complex(&[rows, cols], data).unwrap();
    c.bench_function("fft_last_dim_256x256", |b| {
        b.iter(|| fft(&x, None, -1, None).unwrap())
    });
    c.bench_function("fft_first_dim_256x256", |b| {
        b.iter(|| fft(&x, None, 0, None).unwrap())
    });
}

criterion_group!(benches, bench_axes);
criterion_main!(benches);
