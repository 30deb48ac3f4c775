use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dimfft::{fft, Complex32, Tensor};
use rustfft::num_complex::Complex as RustComplex;
use rustfft::FftPlanner as RustFftPlanner;

fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_parity");
    // powers of two take the Stockham path, the rest go through Bluestein
    for &size in &[1024usize, 4096, 1000, 4099] {
        let data: Vec<Complex32> = (0..size)
            .map(|i| Complex32::new(i as f32, -(i as f32)))
            .collect();
        let x = Tensor::complex_vector(data.clone());
        group.bench_function(BenchmarkId::new("dimfft", size), |b| {
            b.iter(|| fft(&x, None, -1, None).unwrap())
        });

        let mut planner = RustFftPlanner::<f32>::new();
        let plan = planner.plan_fft_forward(size);
        let mut buf: Vec<RustComplex<f32>> =
            data.iter().map(|c| RustComplex::new(c.re, c.im)).collect();
        group.bench_function(BenchmarkId::new("rustfft", size), |b| {
            b.iter(|| plan.process(&mut buf))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fft);
criterion_main!(benches);
