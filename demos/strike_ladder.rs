// demos/strike_ladder.rs
use bs_greeks::analytics::{bs_analytic, vectorized};
use bs_greeks::math_utils::Timer;
use bs_greeks::{price_and_greeks, Columns, EvalConfig, OptionBatch, TableBuilder};
use ndarray::Array1;

fn main() {
    println!("Black-Scholes strike ladder");
    println!("===========================\n");

    let (s, t, r, sigma) = (300.0, 1.0, 0.03, 0.15);
    println!(
        "Single option: S={} K=300 T={} r={} sigma={}",
        s, t, r, sigma
    );
    println!("  call = {:.6}", bs_analytic::call_price(s, 300.0, t, r, sigma));
    println!("  put  = {:.6}", bs_analytic::put_price(s, 300.0, t, r, sigma));
    println!("  d1   = {:.6}\n", bs_analytic::d1(s, 300.0, t, r, sigma));

    let strikes = Array1::linspace(240.0, 360.0, 7);
    let table = price_and_greeks(s, strikes, t, r, sigma).expect("scalars broadcast");
    println!("Default columns:\n{}", table);

    // A wide ladder with rho columns, large enough to run in parallel
    let wide = OptionBatch::new(s, Array1::linspace(150.0, 450.0, 100_001), t, r, sigma);
    let mut timer = Timer::new();
    timer.start();
    let full = TableBuilder::new()
        .columns(Columns::ALL)
        .config(EvalConfig::parallel())
        .build(&wide)
        .expect("scalars broadcast");
    println!(
        "Priced {} strikes with all columns in {:.2} ms",
        full.len(),
        timer.elapsed_ms()
    );

    let rho = vectorized::call_rho(&wide).expect("scalars broadcast");
    println!(
        "Call rho range: {:.6} .. {:.6}",
        rho.iter().cloned().fold(f64::INFINITY, f64::min),
        rho.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    );
}
