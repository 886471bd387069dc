// tests/pricer_test.rs
use bs_greeks::analytics::{bs_analytic, vectorized};
use bs_greeks::OptionBatch;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn reference_batch() -> OptionBatch {
    OptionBatch::new(
        vec![300.0, 300.0],
        vec![250.0, 350.0],
        vec![1.0, 1.0],
        vec![0.03, 0.03],
        vec![0.15, 0.15],
    )
}

fn assert_all_close(actual: &[f64], expected: &[f64], atol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() <= atol, "got {:?}, expected {:?}", actual, expected);
    }
}

/// Random parameters inside the model domain
fn random_params(rng: &mut StdRng) -> (f64, f64, f64, f64, f64) {
    (
        rng.gen_range(10.0..500.0),
        rng.gen_range(10.0..500.0),
        rng.gen_range(0.01..5.0),
        rng.gen_range(-0.02..0.10),
        rng.gen_range(0.05..1.0),
    )
}

#[test]
fn test_reference_d1() {
    let d1 = vectorized::d1(&reference_batch()).unwrap();
    println!("\nd1: {}", d1);
    assert_all_close(d1.as_slice().unwrap(), &[1.490, -0.753], 1e-3);
}

#[test]
fn test_reference_call_price() {
    let calls = vectorized::call_price(&reference_batch()).unwrap();
    println!("\nCall prices: {}", calls);
    assert_all_close(calls.as_slice().unwrap(), &[58.820, 5.471], 1e-3);
}

#[test]
fn test_reference_call_delta() {
    let deltas = vectorized::call_delta(&reference_batch()).unwrap();
    println!("\nCall deltas: {}", deltas);
    assert_all_close(deltas.as_slice().unwrap(), &[0.932, 0.226], 1e-3);
}

#[test]
fn test_put_call_parity_exact() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1_000 {
        let (s, k, t, r, sigma) = random_params(&mut rng);
        let call = bs_analytic::call_price(s, k, t, r, sigma);
        let put = bs_analytic::put_price(s, k, t, r, sigma);
        assert_eq!(
            put,
            k * (-r * t).exp() - s + call,
            "S={} K={} T={} r={} σ={}",
            s,
            k,
            t,
            r,
            sigma
        );
    }
}

#[test]
fn test_put_delta_is_call_delta_minus_one() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let (s, k, t, r, sigma) = random_params(&mut rng);
        let call_delta = bs_analytic::call_delta(s, k, t, r, sigma);
        let put_delta = bs_analytic::put_delta(s, k, t, r, sigma);
        assert!(
            (put_delta - (call_delta - 1.0)).abs() < 1e-12,
            "put delta {} vs call delta {}",
            put_delta,
            call_delta
        );
    }
}

#[test]
fn test_gamma_and_vega_symmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let (s, k, t, r, sigma) = random_params(&mut rng);
        assert_eq!(
            bs_analytic::call_gamma(s, k, t, r, sigma),
            bs_analytic::put_gamma(s, k, t, r, sigma)
        );
        assert_eq!(
            bs_analytic::call_vega(s, k, t, r, sigma),
            bs_analytic::put_vega(s, k, t, r, sigma)
        );
    }
}

#[test]
fn test_delta_bounds() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1_000 {
        let (s, k, t, r, sigma) = random_params(&mut rng);
        let call_delta = bs_analytic::call_delta(s, k, t, r, sigma);
        let put_delta = bs_analytic::put_delta(s, k, t, r, sigma);
        assert!((0.0..=1.0).contains(&call_delta), "call delta {}", call_delta);
        assert!((-1.0..=0.0).contains(&put_delta), "put delta {}", put_delta);
    }
}

#[test]
fn test_call_price_non_decreasing_in_spot() {
    let (k, t, r, sigma) = (100.0, 0.5, 0.02, 0.3);
    let mut previous = f64::NEG_INFINITY;
    for i in 1..=400 {
        let s = i as f64 * 0.75;
        let price = bs_analytic::call_price(s, k, t, r, sigma);
        assert!(
            price >= previous - 1e-12,
            "call price decreased at S={}: {} < {}",
            s,
            price,
            previous
        );
        previous = price;
    }
}

#[test]
fn test_theta_put_minus_call_is_scaled_carry() {
    // Θ_put - Θ_call = 0.01 * r K e^(-rT)
    let (s, k, t, r, sigma) = (120.0, 100.0, 2.0, 0.04, 0.25);
    let diff =
        bs_analytic::put_theta(s, k, t, r, sigma) - bs_analytic::call_theta(s, k, t, r, sigma);
    let expected = 0.01 * r * k * (-r * t).exp();
    assert!((diff - expected).abs() < 1e-12, "diff {} vs {}", diff, expected);
}

#[test]
fn test_vega_against_finite_difference() {
    let (s, k, t, r, sigma) = (100.0, 95.0, 0.75, 0.01, 0.22);
    let h = 1e-5;
    let fd = (bs_analytic::call_price(s, k, t, r, sigma + h)
        - bs_analytic::call_price(s, k, t, r, sigma - h))
        / (2.0 * h);
    let vega = bs_analytic::call_vega(s, k, t, r, sigma);
    println!("\nAnalytic vega (x0.01): {}, finite difference: {}", vega, fd);
    assert!((vega - 0.01 * fd).abs() < 1e-6);
}

#[test]
fn test_zero_expiry_is_not_finite() {
    let (s, k, r, sigma) = (100.0, 90.0, 0.05, 0.2);
    let d1 = bs_analytic::d1(s, k, 0.0, r, sigma);
    let gamma = bs_analytic::call_gamma(s, k, 0.0, r, sigma);
    let theta = bs_analytic::call_theta(s, k, 0.0, r, sigma);
    println!("\nT=0: d1={} gamma={} theta={}", d1, gamma, theta);
    assert!(!d1.is_finite());
    assert!(!gamma.is_finite());
    assert!(!theta.is_finite());

    // at the money the whole row is undefined
    assert!(bs_analytic::call_price(100.0, 100.0, 0.0, r, sigma).is_nan());
}

#[test]
fn test_zero_volatility_is_not_finite() {
    let d1 = bs_analytic::d1(100.0, 90.0, 1.0, 0.05, 0.0);
    let gamma = bs_analytic::call_gamma(100.0, 90.0, 1.0, 0.05, 0.0);
    assert!(!d1.is_finite());
    assert!(!gamma.is_finite());
}

#[test]
fn test_non_positive_spot_is_nan() {
    assert!(bs_analytic::d1(-100.0, 90.0, 1.0, 0.05, 0.2).is_nan());
    assert!(bs_analytic::call_price(-100.0, 90.0, 1.0, 0.05, 0.2).is_nan());
    assert!(!bs_analytic::call_gamma(0.0, 90.0, 1.0, 0.05, 0.2).is_finite());
}
