/// Closed-form gambler's ruin odds (absorption probability and duration).
///
/// Everything is written in x = ln(q/p) = ln_1p((q - p) / p) so that powers of
/// r become `exp`/`expm1` calls and near-fair games keep their digits.
use crate::error::{Result, RuinError};
use crate::game::GameParams;

/// Slack allowed past [0,1] before a probability counts as broken.
const PROB_SLACK: f64 = 1e-12;
/// |w x| at or below which the duration is summed as a series.
const SERIES_SPAN: f64 = 1.0;

/// q - p, exact in floating point for p in (0,1).
#[inline]
fn drift(p: f64) -> f64 {
    1.0 - 2.0 * p
}

/// ln r, accurate when r is close to 1.
#[inline]
fn log_odds_ratio(p: f64) -> f64 {
    (drift(p) / p).ln_1p()
}

/// P(hit w before 0 from k) for log-ratio x: (1 - r^k) / (1 - r^w).
/// For x > 0 both sides are scaled by r^-w so no exponent is positive.
fn absorb(k: f64, w: f64, x: f64) -> f64 {
    if x == 0.0 {
        k / w
    } else if x < 0.0 {
        (k * x).exp_m1() / (w * x).exp_m1()
    } else {
        ((k - w) * x).exp() * (-k * x).exp_m1() / (-w * x).exp_m1()
    }
}

/// Σ_k x^k S_{k+1} / (k+2)! with S_n = (w^n - s^n) / (w - s).
/// Terms are built as T_k = x^k S_{k+1} = (w x) T_{k-1} + (s x)^k.
fn duration_series(s: f64, w: f64, x: f64) -> f64 {
    let (wx, sx) = (w * x, s * x);
    let mut t = 1.0;
    let mut sx_pow = 1.0;
    let mut fact = 2.0;
    let mut sum = 0.5;
    for k in 1..64 {
        sx_pow *= sx;
        t = wx * t + sx_pow;
        fact *= (k + 2) as f64;
        let term = t / fact;
        sum += term;
        if term.abs() <= f64::EPSILON * sum.abs() {
            break;
        }
    }
    sum
}

/// P(reach target before 0).
///
/// Fair game: s / w. Biased game: (1 - r^s) / (1 - r^w) with r = q/p.
pub fn win_probability(params: &GameParams) -> Result<f64> {
    params.validate()?;
    let s = params.initial_stake as f64;
    let w = params.target_amount as f64;
    if params.is_fair() {
        return Ok(s / w);
    }
    let x = log_odds_ratio(params.win_probability);
    checked_probability("win probability", absorb(s, w, x), params)
}

/// P(reach 0 before target): the mirrored game from w - s with ratio 1/r.
pub fn ruin_probability(params: &GameParams) -> Result<f64> {
    params.validate()?;
    let s = params.initial_stake as f64;
    let w = params.target_amount as f64;
    if params.is_fair() {
        return Ok((w - s) / w);
    }
    let x = log_odds_ratio(params.win_probability);
    checked_probability("ruin probability", absorb(w - s, w, -x), params)
}

/// Expected number of rounds until absorption.
///
/// Fair game: s (w - s). Biased game: (s - w * P(win)) / (q - p), taken as
/// (s * P(ruin) - (w - s) * P(win)) / (q - p). When |w ln r| is small that
/// difference is expanded as s w (w - s) x^2 B / expm1(w x), B from
/// `duration_series`.
pub fn expected_duration(params: &GameParams) -> Result<f64> {
    params.validate()?;
    let s = params.initial_stake as f64;
    let w = params.target_amount as f64;
    let m = w - s;
    let rounds = if params.is_fair() {
        s * m
    } else {
        let p = params.win_probability;
        let d = drift(p);
        let x = log_odds_ratio(p);
        if (w * x).abs() <= SERIES_SPAN {
            s * w * m * x * x * duration_series(s, w, x) / ((w * x).exp_m1() * d)
        } else {
            (s * absorb(m, w, -x) - m * absorb(s, w, x)) / d
        }
    };
    if rounds.is_finite() && rounds >= 0.0 {
        Ok(rounds)
    } else {
        Err(overflow("expected duration", params))
    }
}

fn checked_probability(quantity: &'static str, x: f64, params: &GameParams) -> Result<f64> {
    if x.is_finite() && (-PROB_SLACK..=1.0 + PROB_SLACK).contains(&x) {
        Ok(x.clamp(0.0, 1.0))
    } else {
        Err(overflow(quantity, params))
    }
}

fn overflow(quantity: &'static str, params: &GameParams) -> RuinError {
    RuinError::NumericOverflow {
        quantity,
        stake: params.initial_stake,
        target: params.target_amount,
        p: params.win_probability,
    }
}
