//! Property-based tests for the kernel engine and dispatcher.

use proptest::prelude::*;

use strided_blas::core::kernels;
use strided_blas::types::{CMatMut, Mat};
use strided_blas::{Builtin, Complex, Dispatcher, EngineConfig};

fn configs() -> [EngineConfig; 2] {
    [
        EngineConfig::serial(),
        EngineConfig::default()
            .with_parallel_threshold(1)
            .with_chunk_size(4),
    ]
}

fn complex_vec(len: usize) -> impl Strategy<Value = Vec<Complex<f64>>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), len)
        .prop_map(|v| v.into_iter().map(Complex::from).collect())
}

proptest! {
    #[test]
    fn axpy_then_negated_axpy_restores(
        (x, y) in (1usize..64).prop_flat_map(|n| (
            prop::collection::vec(-100.0f64..100.0, n),
            prop::collection::vec(-100.0f64..100.0, n),
        )),
        alpha in -10.0f64..10.0,
    ) {
        for cfg in configs() {
            let n = x.len();
            let mut out = y.clone();
            kernels::axpy(&cfg, n, alpha, &x, 1, &mut out, 1).unwrap();
            kernels::axpy(&cfg, n, -alpha, &x, 1, &mut out, 1).unwrap();
            for (a, b) in out.iter().zip(&y) {
                prop_assert!((a - b).abs() <= 1e-9 * (1.0 + b.abs()));
            }
        }
    }

    #[test]
    fn copy_is_exact_for_any_stride(
        x in prop::collection::vec(any::<i32>(), 1..40),
        incy in 1usize..5,
    ) {
        let x: Vec<f64> = x.into_iter().map(f64::from).collect();
        let n = x.len();
        for cfg in configs() {
            let mut y = vec![0.0f64; (n - 1) * incy + 1];
            kernels::copy(&cfg, n, &x, 1, &mut y, incy).unwrap();
            let copied: Vec<f64> = y.iter().step_by(incy).copied().collect();
            prop_assert_eq!(&copied, &x);
        }
    }

    #[test]
    fn swap_twice_restores(
        (x, y) in (1usize..48).prop_flat_map(|n| (complex_vec(n), complex_vec(n))),
    ) {
        let blas = Dispatcher::<f64, Builtin>::default();
        let n = x.len();
        let (mut a, mut b) = (x.clone(), y.clone());
        {
            let mut ta = CMatMut::new((n, 1, 1), &mut a).unwrap();
            let mut tb = CMatMut::new((n, 1, 1), &mut b).unwrap();
            blas.cswap(&mut ta, &mut tb).unwrap();
            blas.cswap(&mut ta, &mut tb).unwrap();
        }
        prop_assert_eq!(a, x);
        prop_assert_eq!(b, y);
    }

    #[test]
    fn real_dot_is_symmetric(
        (x, y) in (1usize..64).prop_flat_map(|n| (
            prop::collection::vec(-100.0f64..100.0, n),
            prop::collection::vec(-100.0f64..100.0, n),
        )),
    ) {
        let blas = Dispatcher::<f64, Builtin>::default();
        let n = x.len();
        let tx = Mat::new((n, 1, 1), &x).unwrap();
        let ty = Mat::new((n, 1, 1), &y).unwrap();
        prop_assert_eq!(blas.dot(&tx, &ty).unwrap(), blas.dot(&ty, &tx).unwrap());
    }

    #[test]
    fn dotc_swapped_is_conjugate(
        (x, y) in (1usize..48).prop_flat_map(|n| (complex_vec(n), complex_vec(n))),
    ) {
        for cfg in configs() {
            let n = x.len();
            let xy = kernels::dotc(&cfg, n, &x, 1, &y, 1).unwrap();
            let yx = kernels::dotc(&cfg, n, &y, 1, &x, 1).unwrap();
            let tol = 1e-9 * (1.0 + xy.re.abs() + xy.im.abs());
            prop_assert!((xy.re - yx.re).abs() <= tol);
            prop_assert!((xy.im + yx.im).abs() <= tol);
        }
    }

    #[test]
    fn amax_picks_first_largest(x in prop::collection::vec(-50i32..50, 1..64)) {
        let x: Vec<f64> = x.into_iter().map(f64::from).collect();
        let idx = kernels::iamax(x.len(), &x, 1).unwrap();
        let best = x[idx].abs();
        prop_assert!(x.iter().all(|v| v.abs() <= best));
        prop_assert!(x[..idx].iter().all(|v| v.abs() < best));
    }

    #[test]
    fn amin_picks_first_smallest(x in prop::collection::vec(-50i32..50, 1..64)) {
        let x: Vec<f64> = x.into_iter().map(f64::from).collect();
        let idx = kernels::iamin(x.len(), &x, 1).unwrap();
        let best = x[idx].abs();
        prop_assert!(x.iter().all(|v| v.abs() >= best));
        prop_assert!(x[..idx].iter().all(|v| v.abs() > best));
    }

    #[test]
    fn broadcast_dot_equals_tiled_dot(
        (x, y) in (1usize..16, 1usize..5).prop_flat_map(|(len, slices)| (
            prop::collection::vec(-20i32..20, len),
            prop::collection::vec(-20i32..20, len * slices),
        )),
    ) {
        let x: Vec<f64> = x.into_iter().map(f64::from).collect();
        let y: Vec<f64> = y.into_iter().map(f64::from).collect();
        let len = x.len();
        let slices = y.len() / len;
        let tiled: Vec<f64> = x.iter().copied().cycle().take(y.len()).collect();

        let blas = Dispatcher::<f64, Builtin>::default();
        let tx = Mat::new((len, 1, 1), &x).unwrap();
        let tt = Mat::new((len, 1, slices), &tiled).unwrap();
        let ty = Mat::new((len, 1, slices), &y).unwrap();
        prop_assert_eq!(blas.dot(&tx, &ty).unwrap(), blas.dot(&tt, &ty).unwrap());
    }
}
