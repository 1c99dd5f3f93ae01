//! Cross-representation and end-to-end curve checks.

use std::sync::Arc;

use approx::assert_relative_eq;
use rust_decimal::prelude::ToPrimitive;
use termstruct_curves::prelude::*;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// The same flat 3% economics quoted four ways must produce the same
/// discount factors.
#[test]
fn all_representations_agree_on_flat_curve() {
    let r = 0.03;
    let zero = RateCurve::zero_rates(ConstantCurve::shared(r), Compounding::Continuous);
    let df = RateCurve::discount_factors(FunctionCurve::shared(move |t| (-r * t).exp()));
    let short = RateCurve::short_rates(ConstantCurve::shared(r));
    // The quarterly simple rate equivalent to 3% continuous.
    let r_cash = ((r * 0.25f64).exp() - 1.0) / 0.25;
    let cash = RateCurve::cash_rates(ConstantCurve::shared(r_cash), Frequency::Quarterly);

    // Quarter multiples so the cash representation has no stub accrual.
    for i in 1..=20 {
        let t = f64::from(i) * 0.25;
        let expected = (-r * t).exp();
        assert_relative_eq!(zero.discount_factor(t).unwrap(), expected, epsilon = 1e-8);
        assert_relative_eq!(df.discount_factor(t).unwrap(), expected, epsilon = 1e-8);
        assert_relative_eq!(short.discount_factor(t).unwrap(), expected, epsilon = 1e-8);
        assert_relative_eq!(cash.discount_factor(t).unwrap(), expected, epsilon = 1e-8);
    }
}

#[test]
fn zero_rates_round_trip_through_every_compounding() {
    let curve = RateCurve::zero_rates(
        FunctionCurve::shared(|t| 0.02 + 0.004 * t),
        Compounding::Continuous,
    );
    for compounding in [
        Compounding::Continuous,
        Compounding::Simple,
        Compounding::Annual,
        Compounding::SemiAnnual,
        Compounding::Quarterly,
        Compounding::Monthly,
    ] {
        for t in [0.5, 1.0, 3.25, 10.0] {
            let rate = curve.zero_rate_with(t, compounding).unwrap();
            let df = ValueConverter::zero_to_df(rate, t, compounding);
            assert_relative_eq!(df, curve.discount_factor(t).unwrap(), epsilon = 1e-10);
        }
    }
}

#[test]
fn curve_algebra_identities() {
    let a = DiscreteCurve::new(vec![0.0, 1.0, 2.0], vec![0.02, 0.03, 0.05]).unwrap();
    let b = ConstantCurve::new(0.015);
    let a: CurveRef = Arc::new(a);
    let b: CurveRef = Arc::new(b);

    let sum = ComposedCurve::add(Arc::clone(&a), Arc::clone(&b));
    let zeroed = ComposedCurve::mul(Arc::clone(&a), ConstantCurve::shared(0.0));

    for t in [0.0, 0.3, 1.0, 1.7, 2.0] {
        assert_relative_eq!(
            sum.value_at(t).unwrap(),
            a.value_at(t).unwrap() + b.value_at(t).unwrap(),
            epsilon = 1e-14
        );
        assert_eq!(zeroed.value_at(t).unwrap(), 0.0);
    }
}

/// Scenario: linear zeros on [0, 2] at 3% and 5%.
#[test]
fn linear_zero_grid_end_to_end() {
    let grid = DiscreteCurve::new(vec![0.0, 2.0], vec![0.03, 0.05]).unwrap();
    let curve = RateCurve::zero_rates(Arc::new(grid), Compounding::Continuous);

    assert_relative_eq!(curve.zero_rate(1.0).unwrap(), 0.04, epsilon = 1e-14);
    assert_relative_eq!(
        curve.discount_factor(1.0).unwrap(),
        (-0.04f64).exp(),
        epsilon = 1e-14
    );
    // 0.960789...
    assert_relative_eq!(
        curve.discount_factor(1.0).unwrap(),
        0.960_789_439_152_323_2,
        epsilon = 1e-12
    );
}

/// Scenario: the same grid keyed by calendar dates.
#[test]
fn date_keyed_zero_grid_end_to_end() {
    let origin = date(2013, 1, 1);
    let day_count = DayCountConvention::default();
    let pillar_dates = [date(2013, 1, 1), date(2015, 1, 1)];
    let tenors: Vec<f64> = pillar_dates
        .iter()
        .map(|d| day_count.year_fraction(origin, *d).to_f64().unwrap())
        .collect();

    let grid = DiscreteCurve::new(tenors, vec![0.03, 0.05]).unwrap();
    let yc = YieldCurve::from_zero_rates(Arc::new(grid)).with_origin(origin, day_count);

    let zero = yc.zero_between_dates(origin, date(2014, 1, 1)).unwrap();
    assert_relative_eq!(zero, 0.04, epsilon = 1e-12);

    let df = yc.df_between_dates(origin, date(2014, 1, 1)).unwrap();
    assert_relative_eq!(df, 0.960_815_744_493_644_6, epsilon = 1e-12);
}

/// Scenario: covered interest parity forward, spot 1.10, domestic 2%,
/// foreign 5%.
#[test]
fn fx_forward_end_to_end() {
    let domestic = RateCurve::zero_rates(ConstantCurve::shared(0.02), Compounding::Continuous);
    let foreign = RateCurve::zero_rates(ConstantCurve::shared(0.05), Compounding::Continuous);
    let fx = FxForwardCurve::new(1.10, domestic, foreign).unwrap();

    let forward = fx.forward(1.0).unwrap();
    assert_relative_eq!(
        forward,
        1.10 * (-0.02f64).exp() / (-0.05f64).exp(),
        epsilon = 1e-12
    );
    // The foreign rate is higher, so the forward sits above spot.
    assert!(forward > 1.10);
    assert_relative_eq!(forward, 1.1335, epsilon = 1e-4);
}

#[test]
fn credit_and_rate_wrappers_share_curve_sources() {
    // One hazard grid drives both a credit curve and, through algebra, a
    // risky spread on top of a risk-free curve.
    let hazard: CurveRef = Arc::new(
        DiscreteCurve::new(vec![0.0, 5.0], vec![0.01, 0.03]).unwrap(),
    );
    let credit = CreditCurve::hazard_rates(Arc::clone(&hazard));
    let risk_free: CurveRef = Arc::new(ConstantCurve::new(0.02));
    let risky = RateCurve::zero_rates(
        ComposedCurve::add(risk_free, Arc::clone(&hazard)),
        Compounding::Continuous,
    );

    let q = credit.survival_probability(2.0).unwrap();
    assert!(q < 1.0 && q > 0.9);
    assert!(risky.zero_rate(2.0).unwrap() > 0.02);
}

#[test]
fn yield_curve_swap_consistency() {
    let grid = DiscreteCurve::builder()
        .pillars(vec![0.0, 1.0, 2.0, 5.0, 10.0], vec![0.02, 0.025, 0.03, 0.035, 0.04])
        .method(InterpolationMethod::Linear)
        .build()
        .unwrap();
    let yc = YieldCurve::from_zero_rates(Arc::new(grid));

    // Par swap rate lies between the short and long zero rates and
    // reprices the fixed leg to par.
    let par = yc.swap(0.0, 10.0).unwrap();
    assert!(par > 0.02 && par < 0.045);
    let annuity = yc.annuity(0.0, 10.0).unwrap();
    let df = yc.df(0.0, 10.0).unwrap();
    assert_relative_eq!(par * annuity + df, 1.0, epsilon = 1e-12);
}

/// Discount factors and survival probabilities never increase with tenor
/// for valid native grids.
#[test]
fn discount_and_survival_curves_decrease_in_tenor() {
    let df_grid = DiscreteCurve::builder()
        .pillars(
            vec![0.0, 1.0, 3.0, 7.0, 10.0],
            vec![1.0, 0.97, 0.90, 0.78, 0.70],
        )
        .method(InterpolationMethod::LogLinear)
        .build()
        .unwrap();
    let rates = RateCurve::discount_factors(Arc::new(df_grid));

    let q_grid =
        DiscreteCurve::new(vec![0.0, 2.0, 5.0, 10.0], vec![1.0, 0.96, 0.90, 0.80]).unwrap();
    let credit = CreditCurve::survival_probabilities(Arc::new(q_grid));

    let tenors: Vec<f64> = (0..=40).map(|i| f64::from(i) * 0.25).collect();
    for pair in tenors.windows(2) {
        assert!(
            rates.discount_factor(pair[0]).unwrap() >= rates.discount_factor(pair[1]).unwrap()
        );
        assert!(
            credit.survival_probability(pair[0]).unwrap()
                >= credit.survival_probability(pair[1]).unwrap()
        );
    }
}

#[test]
fn nelson_siegel_svensson_as_zero_rate_source() {
    use termstruct_math::interpolation::{Interpolator, NelsonSiegelSvensson};

    let nss = NelsonSiegelSvensson::new(0.045, -0.02, 0.01, -0.005, 2.0, 8.0).unwrap();
    let short_end = nss.interpolate(0.01).unwrap();
    let curve = RateCurve::zero_rates(
        FunctionCurve::shared(move |t| nss.interpolate(t).unwrap_or(f64::NAN)),
        Compounding::Continuous,
    );

    // Negative slope parameter puts the short end below the long-run level.
    assert!(short_end < 0.045);
    let df = curve.discount_factor(5.0).unwrap();
    assert!(df > 0.0 && df < 1.0);
    // The long end drifts back toward the level parameter.
    let long_zero = curve.zero_rate(30.0).unwrap();
    assert!(long_zero > 0.035 && long_zero < 0.045);
    assert!(curve.forward_rate(5.0, 10.0).unwrap() > curve.zero_rate(5.0).unwrap());
}

#[test]
fn hull_white_state_zero_reproduces_initial_curve() {
    let grid: CurveRef =
        Arc::new(DiscreteCurve::new(vec![0.0, 2.0], vec![0.03, 0.05]).unwrap());
    let model = HullWhite::new(Arc::clone(&grid), 0.1, 0.01).unwrap();
    let reference = RateCurve::zero_rates(grid, Compounding::Continuous);

    for t in [0.5, 1.0, 1.5, 2.0] {
        assert_relative_eq!(
            model.discount_factor(t).unwrap(),
            reference.discount_factor(t).unwrap(),
            epsilon = 1e-14
        );
    }
}
