use super::*;

#[test]
fn new_accepts_perfect_squares() {
    let k = Kernel::new(vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    assert_eq!(k.side(), 3);
    assert_eq!(k.half_side(), 1);
    assert_eq!(k.weight(1, 1), Some(1.0));
    assert_eq!(k.weight(3, 0), None);

    let single = Kernel::new(vec![0.5]).unwrap();
    assert_eq!(single.side(), 1);
    assert_eq!(single.half_side(), 0);
}

#[test]
fn new_rejects_non_square_and_empty() {
    for len in [2usize, 3, 5, 8, 10, 24] {
        let err = Kernel::new(vec![1.0; len]).unwrap_err();
        assert!(matches!(err, RasterFxError::InvalidKernel(_)), "len {len}");
    }
    assert!(matches!(
        Kernel::new(Vec::new()).unwrap_err(),
        RasterFxError::InvalidKernel(_)
    ));
}

#[test]
fn new_rejects_non_finite_weights() {
    let err = Kernel::new(vec![1.0, f64::NAN, 0.0, 0.0]).unwrap_err();
    assert!(err.to_string().contains("weight 1 is not finite"));
}

#[test]
fn even_side_uses_floor_half() {
    let k = Kernel::new(vec![0.25; 4]).unwrap();
    assert_eq!(k.side(), 2);
    assert_eq!(k.half_side(), 1);
}

#[test]
fn uniform_weights_sum_to_one() {
    let k = Kernel::uniform(5).unwrap();
    assert_eq!(k.side(), 5);
    assert_eq!(k.weights().len(), 25);
    assert!(k.weights().iter().all(|&w| w == 1.0 / 25.0));
    let sum: f64 = k.weights().iter().sum();
    assert!((sum - 1.0).abs() < 1e-12);

    assert!(Kernel::uniform(0).is_err());
    assert_eq!(Kernel::uniform(1).unwrap().weights(), &[1.0]);
}
