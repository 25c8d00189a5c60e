use js_numconv::to_integer;

#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

#[test]
fn truncates_toward_zero() {
    assert_eq!(to_integer(3.7), 3.0);
    assert_eq!(to_integer(-3.7), -3.0);
    assert_eq!(to_integer(0.1), 0.0);
    assert_eq!(to_integer(42.0), 42.0);
    assert_eq!(to_integer(-1e308), -1e308);
}

#[test]
fn zeros_keep_their_sign() {
    let pos = to_integer(0.0);
    assert_eq!(pos, 0.0);
    assert!(pos.is_sign_positive());

    let neg = to_integer(-0.0);
    assert_eq!(neg, 0.0);
    assert!(neg.is_sign_negative());

    // Truncating a small negative fraction lands on negative zero.
    let ceiled = to_integer(-0.5);
    assert_eq!(ceiled, 0.0);
    assert!(ceiled.is_sign_negative());
}

#[test]
fn nan_becomes_positive_zero() {
    let r = to_integer(f64::NAN);
    assert_eq!(r, 0.0);
    assert!(r.is_sign_positive());
}

#[test]
fn infinities_pass_through() {
    assert_eq!(to_integer(f64::INFINITY), f64::INFINITY);
    assert_eq!(to_integer(f64::NEG_INFINITY), f64::NEG_INFINITY);
}

#[test]
fn idempotent_over_mixed_inputs() {
    let samples = [
        0.0,
        -0.0,
        0.4,
        -0.4,
        1.5,
        -1.5,
        1e15,
        -1e15,
        9_007_199_254_740_993.5, // beyond 2^53, already integral
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ];
    for d in samples {
        let once = to_integer(d);
        let twice = to_integer(once);
        assert_eq!(once.to_bits(), twice.to_bits(), "input {d}");
    }
}

#[test]
fn integral_doubles_are_fixed_points() {
    for i in -100i64..=100 {
        let d = i as f64;
        assert_eq!(to_integer(d).to_bits(), d.to_bits());
    }
}
