//! Discounted cash-flow primitives.
//!
//! Cash-flow series are indexed by period, with index 0 undiscounted. Rates
//! are fractions (0.1 == 10%) on input; [`calculate_irr`] reports a
//! percentage to match the rest of [`crate::core::RoiMetrics`].

/// Net present value of `cashflows` at `rate`.
pub fn calculate_npv(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(period, cf)| cf / (1.0 + rate).powi(period as i32))
        .sum()
}

/// NPV and its derivative with respect to the rate.
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    cashflows
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(npv, derivative), (period, cf)| {
            let t = period as i32;
            let npv = npv + cf / (1.0 + rate).powi(t);
            let derivative = if period > 0 {
                derivative - f64::from(t) * cf / (1.0 + rate).powi(t + 1)
            } else {
                derivative
            };
            (npv, derivative)
        })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrOptions {
    pub initial_guess: f64,
    pub max_iterations: u32,
    /// Absolute NPV below which a rate is accepted
    pub tolerance: f64,
}

impl Default for IrrOptions {
    fn default() -> Self {
        Self {
            initial_guess: 0.1,
            max_iterations: 100,
            tolerance: 1e-4,
        }
    }
}

/// Lowest rate considered by the bisection fallback (-99%)
const BRACKET_LOW: f64 = -0.99;
/// Highest rate considered by the bisection fallback (1000%)
const BRACKET_HIGH: f64 = 10.0;
const BISECTION_MAX_ITERATIONS: u32 = 200;

/// Internal rate of return, as a percentage, with default options.
///
/// Returns `NaN` when no rate in [-99%, 1000%] zeroes the NPV.
pub fn calculate_irr(cashflows: &[f64]) -> f64 {
    calculate_irr_with(cashflows, &IrrOptions::default())
}

/// Newton-Raphson from `initial_guess`, falling back to bisection when Newton
/// stalls on a flat derivative, diverges, or runs out of iterations.
pub fn calculate_irr_with(cashflows: &[f64], options: &IrrOptions) -> f64 {
    newton_raphson(cashflows, options)
        .or_else(|| bisection(cashflows, options.tolerance))
        .map(|rate| rate * 100.0)
        .unwrap_or(f64::NAN)
}

fn newton_raphson(cashflows: &[f64], options: &IrrOptions) -> Option<f64> {
    let mut rate = options.initial_guess;

    for _ in 0..options.max_iterations {
        let (npv, derivative) = npv_and_derivative(cashflows, rate);
        if !npv.is_finite() || !derivative.is_finite() {
            return None;
        }
        if npv.abs() < options.tolerance {
            return Some(rate);
        }
        if derivative.abs() < options.tolerance {
            return None;
        }

        let next = rate - npv / derivative;
        if !next.is_finite() || next <= -1.0 {
            return None;
        }
        rate = next;
    }

    None
}

fn bisection(cashflows: &[f64], tolerance: f64) -> Option<f64> {
    let (mut low, mut high) = (BRACKET_LOW, BRACKET_HIGH);
    let mut npv_low = calculate_npv(cashflows, low);
    let npv_high = calculate_npv(cashflows, high);

    if !npv_low.is_finite() || !npv_high.is_finite() || npv_low.signum() == npv_high.signum() {
        return None;
    }

    for _ in 0..BISECTION_MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = calculate_npv(cashflows, mid);
        if npv_mid.abs() < tolerance || (high - low) < f64::EPSILON {
            return Some(mid);
        }
        if npv_mid.signum() == npv_low.signum() {
            low = mid;
            npv_low = npv_mid;
        } else {
            high = mid;
        }
    }

    Some((low + high) / 2.0)
}

/// Cash-flow series of an up-front investment followed by level annual savings.
pub fn level_cashflows(investment: f64, annual_savings: f64, years: u32) -> Vec<f64> {
    std::iter::once(-investment)
        .chain(std::iter::repeat_n(annual_savings, years as usize))
        .collect()
}
