//! Dispatcher integration tests: broadcasting, shape errors, backend paths.

use std::sync::{Arc, Mutex};

use strided_blas::types::{CMat, CMatMut, Mat, MatMut};
use strided_blas::{
    BlasError, Builtin, Complex, DispatchEvent, Dispatcher, EngineConfig, Observer,
};

fn serial() -> Dispatcher<f64, Builtin> {
    Dispatcher::new(Builtin::new(EngineConfig::serial()))
}

/// Parallel path forced on every call, tiny chunks.
fn eager() -> Dispatcher<f64, Builtin> {
    Dispatcher::new(Builtin::new(
        EngineConfig::default()
            .with_parallel_threshold(1)
            .with_chunk_size(3),
    ))
}

#[test]
fn test_axpy_broadcasts_single_slice() {
    for blas in [serial(), eager()] {
        let x_data = [1.0, 2.0, 3.0, 4.0];
        let mut y_data = vec![0.0; 16];
        for (i, v) in y_data.iter_mut().enumerate() {
            *v = (i / 4) as f64 * 100.0;
        }

        let x = Mat::new((2, 2, 1), &x_data).unwrap();
        let mut y = MatMut::new((2, 2, 4), &mut y_data).unwrap();
        blas.axpy(2.0, &x, &mut y).unwrap();

        for slice in 0..4 {
            for j in 0..4 {
                assert_eq!(y_data[slice * 4 + j], slice as f64 * 100.0 + 2.0 * x_data[j]);
            }
        }
    }
}

#[test]
fn test_reverse_broadcast_fails_without_mutation() {
    let blas = serial();
    let x_data = [1.0; 16];
    let mut y_data = [7.0; 4];
    let x = Mat::new((2, 2, 4), &x_data).unwrap();
    let mut y = MatMut::new((2, 2, 1), &mut y_data).unwrap();

    let err = blas.axpy(1.0, &x, &mut y).unwrap_err();
    assert!(matches!(err, BlasError::DimensionMismatch(_)));
    assert_eq!(y_data, [7.0; 4]);
}

#[test]
fn test_mismatched_slices_fail() {
    let blas = serial();
    let a = [1.0; 12];
    let b = [1.0; 12];
    let x = Mat::new((3, 2, 2), &a).unwrap();
    let y = Mat::new((2, 3, 2), &b).unwrap();
    assert!(matches!(blas.dot(&x, &y), Err(BlasError::DimensionMismatch(_))));

    let c = [1.0; 18];
    let y = Mat::new((3, 2, 3), &c).unwrap();
    assert!(matches!(blas.dot(&x, &y), Err(BlasError::DimensionMismatch(_))));
}

#[test]
fn test_zero_size_tensors_rejected() {
    let blas = serial();
    let empty: [f64; 0] = [];
    let mut empty_out: [f64; 0] = [];
    let x = Mat::new((3, 0, 2), &empty).unwrap();

    assert!(matches!(blas.asum(&x), Err(BlasError::InvalidDimension(_))));
    assert!(matches!(blas.nrm2(&x), Err(BlasError::InvalidDimension(_))));
    assert!(matches!(blas.amax(&x), Err(BlasError::InvalidDimension(_))));
    assert!(matches!(blas.asum_inc(&x, 2), Err(BlasError::InvalidDimension(_))));

    let mut y = MatMut::new((3, 0, 2), &mut empty_out).unwrap();
    assert!(matches!(blas.scal(2.0, &mut y), Err(BlasError::InvalidDimension(_))));
    assert!(matches!(blas.copy(&x, &mut y), Err(BlasError::InvalidDimension(_))));
    assert!(matches!(blas.scal_col(2.0, &mut y, 0), Err(BlasError::InvalidDimension(_))));
}

#[test]
fn test_view_length_must_match_shape() {
    let data = [0.0; 5];
    assert!(matches!(
        Mat::new((2, 3, 1), &data),
        Err(BlasError::InvalidDimension(_))
    ));
}

#[test]
fn test_copy_broadcast_and_unroll_sizes() {
    for blas in [serial(), eager()] {
        for n in [1usize, 7, 8, 9, 16, 17] {
            let x_data: Vec<f64> = (0..n).map(|i| i as f64 * 1.25 - 3.0).collect();
            let mut y_data = vec![0.0; n * 3];
            let x = Mat::new((n, 1, 1), &x_data).unwrap();
            let mut y = MatMut::new((n, 1, 3), &mut y_data).unwrap();
            blas.copy(&x, &mut y).unwrap();
            for slice in y_data.chunks(n) {
                assert_eq!(slice, &x_data[..]);
            }
        }
    }
}

#[test]
fn test_parallel_matches_serial_on_large_tensors() {
    let n = 40_000;
    let x_data: Vec<f64> = (0..n).map(|i| (i % 13) as f64 - 6.0).collect();
    let y_data: Vec<f64> = (0..n).map(|i| (i % 7) as f64).collect();
    let x = Mat::new((100, 400, 1), &x_data).unwrap();
    let y = Mat::new((100, 400, 1), &y_data).unwrap();

    // Integer-valued data: every partial sum is exact.
    assert_eq!(serial().dot(&x, &y).unwrap(), eager().dot(&x, &y).unwrap());
    assert_eq!(serial().asum(&x).unwrap(), eager().asum(&x).unwrap());
    assert_eq!(serial().amax(&x).unwrap(), eager().amax(&x).unwrap());
}

#[test]
fn test_rot_broadcast_runs_slice_by_slice() {
    let blas = serial();
    let mut x_data = [1.0];
    let mut y_data = [1.0, 2.0];
    let mut x = MatMut::new((1, 1, 1), &mut x_data).unwrap();
    let mut y = MatMut::new((1, 1, 2), &mut y_data).unwrap();
    // c = 1, s = 1: x, y <- x + y, y + x
    blas.rot(&mut x, &mut y, 1.0, 1.0).unwrap();
    // slice 0: (1, 1) -> (2, 2); slice 1: (2, 2) -> (4, 4)
    assert_eq!(x_data, [4.0]);
    assert_eq!(y_data, [2.0, 4.0]);
}

#[test]
fn test_complex_dispatch() {
    let blas = serial();
    let x_data = [Complex::new(1.0, 2.0), Complex::new(3.0, -1.0)];
    let y_data = [Complex::new(2.0, 1.0), Complex::new(0.0, 1.0)];
    let x = CMat::new((2, 1, 1), &x_data).unwrap();
    let y = CMat::new((2, 1, 1), &y_data).unwrap();

    assert_eq!(blas.udot(&x, &y).unwrap(), Complex::new(1.0, 8.0));
    assert_eq!(blas.dotc(&x, &y).unwrap(), Complex::new(3.0, 0.0));
    assert_eq!(blas.casum(&x).unwrap(), 7.0);
    assert_eq!(blas.camax(&x).unwrap(), 1);
    assert_eq!(blas.camin(&x).unwrap(), 0);

    let r_data = [2.0, 10.0];
    let r = Mat::new((2, 1, 1), &r_data).unwrap();
    assert_eq!(blas.cdot(&x, &r).unwrap(), Complex::new(32.0, -6.0));

    let mut z_data = x_data;
    let mut z = CMatMut::new((2, 1, 1), &mut z_data).unwrap();
    blas.cadd_real(1.0, &mut z).unwrap();
    blas.cscal(Complex::new(0.0, 1.0), &mut z).unwrap();
    // (2+2i)*i = -2+2i, (4-i)*i = 1+4i
    assert_eq!(z_data, [Complex::new(-2.0, 2.0), Complex::new(1.0, 4.0)]);
}

#[test]
fn test_rotg_rejects_inconsistent_input() {
    let blas = serial();
    let (mut a, mut b) = (3.0, 0.0);
    blas.rotg(&mut a, &mut b, 1.0, 0.0).unwrap();

    let (mut a, mut b) = (1.0, 2.0);
    assert!(matches!(
        blas.rotg(&mut a, &mut b, 1.0, 1.0),
        Err(BlasError::InvalidRotationInput(_))
    ));
    assert_eq!((a, b), (1.0, 2.0));

    let (mut a, mut b) = (Complex::new(1.0, 1.0), Complex::new(0.0, 2.0));
    assert!(matches!(
        blas.crotg(&mut a, &mut b, 1.0, Complex::new(0.0, 0.0)),
        Err(BlasError::InvalidRotationInput(_))
    ));
    assert_eq!((a, b), (Complex::new(1.0, 1.0), Complex::new(0.0, 2.0)));
}

#[test]
fn test_complex_extrema_ties_pick_first() {
    for blas in [serial(), eager()] {
        let data = [
            Complex::new(1.0, 2.0),
            Complex::new(-2.0, 1.0),
            Complex::new(3.0, 0.0),
        ];
        let x = CMat::new((3, 1, 1), &data).unwrap();
        assert_eq!(blas.camax(&x).unwrap(), 0);
        assert_eq!(blas.camin(&x).unwrap(), 0);
    }
}

#[test]
fn test_strided_pairs_on_parallel_engine() {
    let n = 50;
    let x_data: Vec<f64> = (0..2 * n - 1).map(|i| (i % 9) as f64 - 4.0).collect();
    let y_data: Vec<f64> = (0..n).map(|i| (i % 4) as f64).collect();
    let x = Mat::new((2 * n - 1, 1, 1), &x_data).unwrap();
    let y = Mat::new((n, 1, 1), &y_data).unwrap();

    let expected: f64 = (0..n).map(|i| x_data[2 * i] * y_data[i]).sum();
    assert_eq!(serial().dot_inc(&x, 2, &y, 1).unwrap(), expected);
    assert_eq!(eager().dot_inc(&x, 2, &y, 1).unwrap(), expected);

    let mut a = x_data.clone();
    let mut b = y_data.clone();
    {
        let mut ta = MatMut::new((2 * n - 1, 1, 1), &mut a).unwrap();
        let mut tb = MatMut::new((n, 1, 1), &mut b).unwrap();
        eager().swap_inc(&mut ta, 2, &mut tb, 1).unwrap();
    }
    for i in 0..n {
        assert_eq!(a[2 * i], y_data[i]);
        assert_eq!(b[i], x_data[2 * i]);
    }
    for i in 0..n - 1 {
        assert_eq!(a[2 * i + 1], x_data[2 * i + 1]);
    }
}

#[test]
fn test_single_precision_dispatcher() {
    let blas: Dispatcher<f32, Builtin> = Dispatcher::default();
    let data = [3.0f32, 4.0];
    let x = Mat::new((2, 1, 1), &data).unwrap();
    assert_eq!(blas.nrm2(&x).unwrap(), 5.0f32);
}

#[derive(Default)]
struct Counter {
    events: Mutex<Vec<DispatchEvent>>,
    errors: Mutex<usize>,
}

impl Observer for Counter {
    fn on_dispatch(&self, event: &DispatchEvent) {
        self.events.lock().unwrap().push(*event);
    }

    fn on_error(&self, _op: &'static str, _error: &BlasError) {
        *self.errors.lock().unwrap() += 1;
    }
}

#[test]
fn test_observer_receives_lane_events() {
    let counter = Arc::new(Counter::default());
    let blas = serial().with_observer(counter.clone());

    let mut data = [1.0; 12];
    let mut x = MatMut::new((2, 3, 2), &mut data).unwrap();
    blas.scal_row(2.0, &mut x, 1).unwrap();
    assert!(blas.scal_row(2.0, &mut x, 2).is_err());

    let events = counter.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].op, "scal_row");
    assert_eq!(events[0].elements, 6);
    assert_eq!(events[0].kernel_calls, 2);
    assert_eq!(*counter.errors.lock().unwrap(), 1);
}
