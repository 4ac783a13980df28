use crate::cache::CachePolicy;
use crate::format::{Carrier, Format};
use crate::log::{floor_log10_pow2_minus_log10_4_over_3, floor_log2_pow10};
use crate::policy::{BinaryToDecimalRounding, TrailingZeroPolicy};

/// §4.7: the nearest-rounding kernel for the shorter-interval case, taken when
/// `x` sits exactly on a power-of-two boundary above the smallest normal number.
pub(crate) fn compute_nearest_shorter<F: Format>(
    exponent: i32,
    include_left_endpoint: bool,
    include_right_endpoint: bool,
    binary_to_decimal: BinaryToDecimalRounding,
    trailing_zero: TrailingZeroPolicy,
    cache_policy: CachePolicy,
) -> (F::CarrierUInt, i32, bool) {
    let minus_k = floor_log10_pow2_minus_log10_4_over_3(exponent);
    let beta = exponent + floor_log2_pow10(-minus_k);
    let cache = cache_policy.get::<F>(-minus_k);

    let mut xi = F::compute_left_endpoint_for_shorter_interval(cache, beta);
    let mut zi = F::compute_right_endpoint_for_shorter_interval(cache, beta);

    let left_endpoint_is_integer = (F::CASE_SHORTER_INTERVAL_LEFT_ENDPOINT_LOWER_THRESHOLD
        ..=F::CASE_SHORTER_INTERVAL_LEFT_ENDPOINT_UPPER_THRESHOLD)
        .contains(&exponent);
    let right_endpoint_is_integer = (F::CASE_SHORTER_INTERVAL_RIGHT_ENDPOINT_LOWER_THRESHOLD
        ..=F::CASE_SHORTER_INTERVAL_RIGHT_ENDPOINT_UPPER_THRESHOLD)
        .contains(&exponent);

    if !include_right_endpoint && right_endpoint_is_integer {
        zi = zi - F::CarrierUInt::ONE;
    }
    if !include_left_endpoint || !left_endpoint_is_integer {
        xi = xi + F::CarrierUInt::ONE;
    }

    // Try the bigger divisor.
    let s_big = zi / F::CarrierUInt::TEN;
    if s_big * F::CarrierUInt::TEN >= xi {
        return finish::<F>(s_big, minus_k + 1, trailing_zero);
    }

    // Otherwise compute the round-up of y and settle any tie.
    let mut s = F::compute_round_up_for_shorter_interval(cache, beta);
    if binary_to_decimal.prefer_round_down(s)
        && (F::SHORTER_INTERVAL_TIE_LOWER_THRESHOLD..=F::SHORTER_INTERVAL_TIE_UPPER_THRESHOLD)
            .contains(&exponent)
    {
        s = s - F::CarrierUInt::ONE;
    } else if s < xi {
        s = s + F::CarrierUInt::ONE;
    }

    (s, minus_k, false)
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
