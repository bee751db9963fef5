use markov_momentum::prelude::*;

#[test]
fn test_integration_smoke() {
    let prices = PriceSeries::new(vec![100.0, 100.0, 100.0, 100.0, 100.0]).unwrap();

    // Constant prices: every return is 0, every day Flat
    let movements = classify(&prices.returns(), 0.01).unwrap();
    assert!(movements.iter().all(|&m| m == Movement::Flat));

    let (probs, counts) = estimate(&movements);
    assert_eq!(counts.total_rise, 0);
    assert_eq!(probs.rise_given_rise, 0.0);
    assert_eq!(probs.fall_given_rise, 0.0);
    assert_eq!(probs.rise_given_fall, 0.0);
    assert!(probs.as_array().iter().all(|&p| (0.0..=1.0).contains(&p)));
}
