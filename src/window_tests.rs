use super::*;
use crate::buffer::ComplexBuffer;

fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "expected {b}, got {a}");
}

#[test]
fn blackman_endpoints_are_near_zero() {
    let w = Window::<f64>::new(65);
    let c = w.coefficients();
    assert_close(c[0], 0.0, 1e-6);
    assert_close(c[c.len() - 1], 0.0, 1e-6);
}

#[test]
fn blackman_centre_is_near_unity() {
    let w = Window::<f64>::new(65);
    let c = w.coefficients();
    assert_close(c[32], 1.0, 1e-6);
}

#[test]
fn blackman_coefficients_are_symmetric() {
    let w = Window::<f64>::new(17);
    let c = w.coefficients();
    for i in 0..c.len() {
        assert_close(c[i], c[c.len() - 1 - i], 1e-9);
    }
}

#[test]
fn apply_scales_samples_elementwise() {
    let w = Window::<f64>::new(4);
    let mut real = vec![1.0, 1.0, 1.0, 1.0];
    w.apply(&mut real);
    for (a, b) in real.iter().zip(w.coefficients().iter()) {
        assert_close(*a, *b, 1e-12);
    }
}

#[test]
fn apply_buffer_only_touches_first_size_samples() {
    let w = Window::<f64>::new(4);
    let mut buf = ComplexBuffer::<f64>::new(8);
    buf.set_all_real(2.0);
    buf.set_all_imag(2.0);
    w.apply_buffer(&mut buf);
    for i in 0..4 {
        assert!(buf.re()[i] < 2.0);
    }
    for i in 4..8 {
        assert_close(buf.re()[i], 2.0, 1e-12);
        assert_close(buf.im()[i], 2.0, 1e-12);
    }
}

struct Rectangular;

impl<T: crate::scalar::Scalar> WindowShape<T> for Rectangular {
    fn coefficients(&self, size: usize) -> Vec<T> {
        vec![T::one(); size]
    }
}

#[test]
fn from_shape_accepts_custom_window() {
    let w = Window::<f64>::from_shape(5, Rectangular);
    for &c in w.coefficients() {
        assert_close(c, 1.0, 1e-12);
    }
}

#[test]
fn single_sample_window_is_one() {
    let w = Window::<f64>::new(1);
    assert_eq!(w.coefficients(), &[1.0]);
}
