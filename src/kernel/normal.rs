use crate::cache::CachePolicy;
use crate::format::{Carrier, Format};
use crate::log::{floor_log10_pow2, floor_log2_pow10};
use crate::policy::{BinaryToDecimalRounding, TrailingZeroPolicy};

/// §4.6: the nearest-rounding kernel for the common case, where `x` isn't a
/// power of two (so both half-intervals around it are the same length).
///
/// Returns `(significand, exponent, trailing_zeros_removed)`.
pub(crate) fn compute_nearest_normal<F: Format>(
    two_fc: F::CarrierUInt,
    exponent: i32,
    include_left_endpoint: bool,
    include_right_endpoint: bool,
    binary_to_decimal: BinaryToDecimalRounding,
    trailing_zero: TrailingZeroPolicy,
    cache_policy: CachePolicy,
) -> (F::CarrierUInt, i32, bool) {
    // Step 1: Schubfach multiplier calculation.
    let minus_k = floor_log10_pow2(exponent) - F::KAPPA;
    let beta = exponent + floor_log2_pow10(-minus_k);
    let cache = cache_policy.get::<F>(-minus_k);

    let z_result = F::compute_mul((two_fc | F::CarrierUInt::ONE) << beta as u32, cache);
    let delta = F::compute_delta(cache, beta);

    // Step 2: try the bigger divisor.
    let big_divisor = F::big_divisor();
    let mut s = F::divide_by_pow10_kappa_plus_1(z_result.integer_part);
    let mut r = z_result.integer_part - s * big_divisor;

    if r < delta {
        if r == F::CarrierUInt::ZERO && z_result.is_integer && !include_right_endpoint {
            s = s - F::CarrierUInt::ONE;
            r = big_divisor;
        } else {
            return finish::<F>(s, minus_k + F::KAPPA + 1, trailing_zero);
        }
    } else if r > delta {
        return finish::<F>(s, minus_k + F::KAPPA + 1, trailing_zero);
    } else {
        let x_result = F::compute_mul_parity(two_fc - F::CarrierUInt::ONE, cache, beta);
        if !(x_result.parity || (x_result.is_integer && include_left_endpoint)) {
            return finish::<F>(s, minus_k + F::KAPPA + 1, trailing_zero);
        }
    }

    // Step 3: the smaller divisor. No trailing-zero removal applies here: the extra
    // digit just appended can never be zero (it's the result of a divisibility check).
    let small_divisor = F::small_divisor();
    s = s * F::CarrierUInt::TEN;

    let half_delta = delta >> 1;
    let half_small_divisor = small_divisor >> 1;
    let dist = r - half_delta + half_small_divisor;
    let approx_y_parity = ((dist ^ half_small_divisor) & F::CarrierUInt::ONE) != F::CarrierUInt::ZERO;

    let (dist, divisible) = F::check_divisibility_and_divide_by_pow10_kappa(dist);
    s = s + dist;

    if divisible {
        let y_result = F::compute_mul_parity(two_fc, cache, beta);
        if y_result.parity != approx_y_parity {
            s = s - F::CarrierUInt::ONE;
        } else if y_result.is_integer && binary_to_decimal.prefer_round_down(s) {
            s = s - F::CarrierUInt::ONE;
        }
    }

    (s, minus_k + F::KAPPA, false)
}

#[inline]
fn finish<F: Format>(
    s: F::CarrierUInt,
    exponent: i32,
    trailing_zero: TrailingZeroPolicy,
) -> (F::CarrierUInt, i32, bool) {
    match trailing_zero {
        TrailingZeroPolicy::Ignore => (s, exponent, false),
        TrailingZeroPolicy::Remove | TrailingZeroPolicy::Report => {
            let (s, removed) = F::remove_trailing_zeros(s);
            (s, exponent + removed, removed > 0)
        }
    }
}
