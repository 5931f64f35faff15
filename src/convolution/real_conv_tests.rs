use super::*;

fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "expected {b}, got {a}");
}

#[test]
fn new_rejects_odd_size() {
    let err = ConvolutionReal::<f64>::new(15).unwrap_err();
    assert_eq!(err, ConvolutionError::NotEven);
}

#[test]
fn identity_kernel_is_identity_convolution() {
    let mut conv = ConvolutionReal::<f64>::new(16).unwrap();
    let input: [f64; 16] = [
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
    ];
    let mut output = [0.0; 16];

    conv.convolve(&input, &mut output).unwrap();

    for i in 0..16 {
        assert_close(output[i], input[i], 1e-9);
    }

    let mut tail = [0.0; 8];
    conv.drain(&mut tail).unwrap();
    for &v in &tail {
        assert_close(v, 0.0, 1e-9);
    }
}

#[test]
fn flush_clears_pending_tail() {
    let mut conv = ConvolutionReal::<f64>::new(8).unwrap();
    let mut kernel = conv.new_kernel();
    kernel.set_all_real(0.0);
    kernel.re_mut()[1] = 1.0;
    conv.set_filter_kernel(kernel).unwrap();

    let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let mut output = [0.0; 8];
    conv.convolve(&input, &mut output).unwrap();

    conv.flush();
    let mut tail = [0.0; 4];
    conv.drain(&mut tail).unwrap();
    for &v in &tail {
        assert_close(v, 0.0, 1e-12);
    }
}

#[test]
fn convolve_rejects_short_buffers() {
    let mut conv = ConvolutionReal::<f64>::new(16).unwrap();
    let input = [0.0; 8];
    let mut output = [0.0; 16];
    let err = conv.convolve(&input, &mut output).unwrap_err();
    assert_eq!(err, ConvolutionError::BufferTooSmall);
}

#[test]
fn set_filter_kernel_does_not_force_imag_zero() {
    let mut conv = ConvolutionReal::<f64>::new(8).unwrap();
    let mut kernel = conv.new_kernel();
    kernel.set_bin_imag(1, 2.0);
    // the real variant installs the kernel exactly as supplied
    conv.set_filter_kernel(kernel).unwrap();
}
