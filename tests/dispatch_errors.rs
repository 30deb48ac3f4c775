// Test intent: argument validation fails before any transform runs, with the right error kind.
use dimfft::{
    fft, hfft, ifft, ihfft, irfft, rfft, Complex64, Dispatcher, ErrorKind, FftError,
    ScalarEngine, Tensor, Variant,
};

type Op = fn(&Tensor<f64>, Option<i64>, i64, Option<&str>) -> Result<Tensor<f64>, FftError>;

const ALL_OPS: [(&str, Op); 6] = [
    ("fft", fft),
    ("ifft", ifft),
    ("rfft", rfft),
    ("irfft", irfft),
    ("hfft", hfft),
    ("ihfft", ihfft),
];

#[test]
fn dim_out_of_range_is_a_shape_error() {
    let x = Tensor::<f64>::zeros_real(&[4, 4]).unwrap();
    for (name, op) in ALL_OPS {
        let err = op(&x, None, 5, None).unwrap_err();
        assert_eq!(err, FftError::DimOutOfRange { dim: 5, rank: 2 }, "{name}");
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert!(err.to_string().contains("[-2, 1]"));
        assert!(op(&x, None, -3, None).is_err(), "{name}");
    }
}

#[test]
fn non_positive_n_is_rejected() {
    let x = Tensor::<f64>::zeros_real(&[8]).unwrap();
    for (name, op) in ALL_OPS {
        for n in [0, -5] {
            let err = op(&x, Some(n), -1, None).unwrap_err();
            assert_eq!(err, FftError::NonPositiveLength { n }, "{name}");
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }
}

#[test]
fn n_beyond_addressable_memory_is_an_overflow() {
    let real = Tensor::real_vector(vec![1.0f64]);
    let complex = Tensor::complex_vector(vec![Complex64::new(1.0, 0.0); 2]);
    for (name, op) in ALL_OPS {
        let x = if matches!(name, "rfft" | "ihfft") { &real } else { &complex };
        for n in [i64::MAX, i64::MAX / 8] {
            let err = op(x, Some(n), -1, None).unwrap_err();
            assert_eq!(err, FftError::Overflow, "{name} n={n}");
            assert_eq!(err.kind(), ErrorKind::Shape);
        }
    }
}

#[test]
fn unknown_norm_is_rejected() {
    let x = Tensor::<f64>::zeros_real(&[8]).unwrap();
    for (name, op) in ALL_OPS {
        for bad in ["Ortho", "none", "", "backward "] {
            let err = op(&x, None, -1, Some(bad)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{name} {bad:?}");
            assert!(matches!(err, FftError::UnknownNorm { .. }));
        }
    }
}

#[test]
fn complex_input_to_real_domain_variants() {
    let x = Tensor::from_complex(&[4], vec![Complex64::new(1.0, 1.0); 4]).unwrap();
    for op in [rfft as Op, ihfft] {
        let err = op(&x, None, -1, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("complex"));
    }
    // complex-domain variants accept the same tensor
    for op in [fft as Op, ifft, irfft, hfft] {
        assert!(op(&x, None, -1, None).is_ok());
    }
}

#[test]
fn onesided_input_of_one_element_needs_n() {
    let x = Tensor::from_complex(&[2, 1], vec![Complex64::new(1.0, 0.0); 2]).unwrap();
    for op in [irfft as Op, hfft] {
        let err = op(&x, None, -1, None).unwrap_err();
        assert!(matches!(err, FftError::InvalidLength { n: 0, .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let out = op(&x, Some(1), -1, None).unwrap();
        assert_eq!(out.shape(), &[2, 1]);
    }
}

#[test]
fn empty_axis_without_n_is_rejected() {
    let x = Tensor::<f64>::zeros_complex(&[3, 0]).unwrap();
    let err = fft(&x, None, -1, None).unwrap_err();
    assert!(matches!(err, FftError::InvalidLength { n: 0, .. }));
    // an explicit n zero-pads the empty axis
    let out = fft(&x, Some(4), -1, None).unwrap();
    assert_eq!(out.shape(), &[3, 4]);
    assert!(out.as_complex().unwrap().iter().all(|c| c.abs() == 0.0));
}

#[test]
fn resolution_reports_engine_arguments() {
    let d = Dispatcher::new(ScalarEngine);
    let x = Tensor::<f32>::zeros_complex(&[5, 7]).unwrap();
    let args = d.resolve(Variant::Hfft, &x, Some(10), 0, Some("forward")).unwrap();
    assert_eq!(args.n, 10);
    assert_eq!(args.dim, 0);
    assert_eq!(args.input_len, 6);
    assert_eq!(args.output_len, 10);
    assert_eq!(args.norm, dimfft::Norm::Forward);
}

#[test]
fn input_is_left_untouched() {
    let data: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let x = Tensor::from_real(&[2, 3], data.clone()).unwrap();
    let _ = rfft(&x, Some(8), 0, Some("ortho")).unwrap();
    let _ = fft(&x, Some(2), -1, None).unwrap();
    assert_eq!(x.as_real().unwrap(), &data[..]);
    assert_eq!(x.shape(), &[2, 3]);
}
