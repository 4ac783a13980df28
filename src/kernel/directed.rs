use crate::cache::CachePolicy;
use crate::format::{Carrier, Format};
use crate::log::{floor_log10_pow2, floor_log2_pow10};
use crate::policy::TrailingZeroPolicy;

/// §4.8: left-closed, right-open directed rounding (floor for positive `x`).
pub(crate) fn compute_left_closed_directed<F: Format>(
    two_fc: F::CarrierUInt,
    exponent: i32,
    trailing_zero: TrailingZeroPolicy,
    cache_policy: CachePolicy,
) -> (F::CarrierUInt, i32, bool) {
    let minus_k = floor_log10_pow2(exponent) - F::KAPPA;
    let beta = exponent + floor_log2_pow10(-minus_k);
    let cache = cache_policy.get::<F>(-minus_k);

    let delta = F::compute_delta(cache, beta);
    let mut x_result = F::compute_mul(two_fc << beta as u32, cache);

    // Two hand-verified binary32 counterexamples at `binary_exponent <= -80` force the
    // integer flag false; see the directed-rounding kernel in the upstream source.
    if F::CACHE_BITS == 64 && exponent <= -80 {
        x_result.is_integer = false;
    }

    if !x_result.is_integer {
        x_result.integer_part = x_result.integer_part + F::CarrierUInt::ONE;
    }

    let big_divisor = F::big_divisor();
    let mut s = F::divide_by_pow10_kappa_plus_1(x_result.integer_part);
    let mut r = x_result.integer_part - s * big_divisor;

    if r != F::CarrierUInt::ZERO {
        s = s + F::CarrierUInt::ONE;
        r = big_divisor - r;
    }

    let continue_to_small_divisor = if r > delta {
        true
    } else if r == delta {
        let z_result = F::compute_mul_parity(two_fc + F::CarrierUInt::TWO, cache, beta);
        z_result.parity || z_result.is_integer
    } else {
        false
    };

    if !continue_to_small_divisor {
        return finish::<F>(s, minus_k + F::KAPPA + 1, trailing_zero);
    }

    s = s * F::CarrierUInt::TEN;
    s = s - F::small_division_by_pow10_kappa(r);
    (s, minus_k + F::KAPPA, false)
}

/// §4.8: right-closed, left-open directed rounding (floor for positive `x`).
///
/// `shorter_interval` handles the power-of-two boundary case the same way the
/// nearest-rounding kernels split into a normal and shorter-interval variant, but
/// folded into one function since the only difference is a shift of `beta`/`minus_k`.
pub(crate) fn compute_right_closed_directed<F: Format>(
    two_fc: F::CarrierUInt,
    exponent: i32,
    shorter_interval: bool,
    trailing_zero: TrailingZeroPolicy,
    cache_policy: CachePolicy,
) -> (F::CarrierUInt, i32, bool) {
    let minus_k = floor_log10_pow2(exponent - shorter_interval as i32) - F::KAPPA;
    let beta = exponent + floor_log2_pow10(-minus_k);
    let cache = cache_policy.get::<F>(-minus_k);

    let delta = if shorter_interval {
        F::compute_delta(cache, beta - 1)
    } else {
        F::compute_delta(cache, beta)
    };
    let zi = F::compute_mul(two_fc << beta as u32, cache).integer_part;

    let big_divisor = F::big_divisor();
    let s_floor = F::divide_by_pow10_kappa_plus_1(zi);
    let r = zi - s_floor * big_divisor;

    let continue_to_small_divisor = if r > delta {
        true
    } else if r == delta {
        let subtrahend = if shorter_interval {
            F::CarrierUInt::ONE
        } else {
            F::CarrierUInt::TWO
        };
        !F::compute_mul_parity(two_fc - subtrahend, cache, beta).parity
    } else {
        false
    };

    if !continue_to_small_divisor {
        return finish::<F>(s_floor, minus_k + F::KAPPA + 1, trailing_zero);
    }

    let mut s = s_floor * F::CarrierUInt::TEN;
    s = s + F::small_division_by_pow10_kappa(r);
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
