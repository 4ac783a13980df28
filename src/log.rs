/*!
Closed-form evaluations of `floor(e * log_b(a) - s)` for the bases this crate needs.

Each function is a fixed-point multiply-shift that has been proven (by the upstream
project this crate is ported from) to equal the exact mathematical floor over the
documented input range. Outside that range the formula may still compute *something*,
but it is no longer guaranteed correct, so callers must stay within range; the kernel's
own exponent bounds are always strictly inside these ranges.
*/

/// `floor(e * log10(2))`, exact for `e` in `[-2620, 2620]`.
#[inline]
#[must_use]
pub(crate) const fn floor_log10_pow2(e: i32) -> i32 {
    debug_assert!(e >= -2620 && e <= 2620);
    (e * 315653) >> 20
}

/// `floor(e * log2(10))`, exact for `e` in `[-1233, 1233]`.
///
/// The formula itself holds on `[-4003, 4003]`; the narrower range here is to guarantee
/// the multiply doesn't overflow `i32`.
#[inline]
#[must_use]
pub(crate) const fn floor_log2_pow10(e: i32) -> i32 {
    debug_assert!(e >= -1233 && e <= 1233);
    (e * 1741647) >> 19
}

/// `floor(e * log10(2) - log10(4/3))`, exact for `e` in `[-2985, 2936]`.
#[inline]
#[must_use]
pub(crate) const fn floor_log10_pow2_minus_log10_4_over_3(e: i32) -> i32 {
    debug_assert!(e >= -2985 && e <= 2936);
    (e * 631305 - 261663) >> 21
}

/// `floor(e * log5(2))`, exact for `e` in `[-1831, 1831]`.
#[inline]
#[must_use]
pub(crate) const fn floor_log5_pow2(e: i32) -> i32 {
    debug_assert!(e >= -1831 && e <= 1831);
    (e * 225799) >> 19
}

/// `floor(e * log5(2) - log5(3))`, exact for `e` in `[-3543, 2427]`.
#[inline]
#[must_use]
pub(crate) const fn floor_log5_pow2_minus_log5_3(e: i32) -> i32 {
    debug_assert!(e >= -3543 && e <= 2427);
    (e * 451597 - 715764) >> 20
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sanity spot-checks against the real logarithms; the big-integer exactness proof
    // over the full declared ranges lives in `tests/log_approx.rs`.

    #[test]
    fn floor_log10_pow2_spot_checks() {
        assert_eq!(floor_log10_pow2(0), 0);
        assert_eq!(floor_log10_pow2(1), 0);
        assert_eq!(floor_log10_pow2(-1), -1);
        assert_eq!(floor_log10_pow2(4), 1); // 2^4 = 16, log10(16) = 1.20...
        assert_eq!(floor_log10_pow2(-4), -2);
    }

    #[test]
    fn floor_log2_pow10_spot_checks() {
        assert_eq!(floor_log2_pow10(0), 0);
        assert_eq!(floor_log2_pow10(1), 3); // log2(10) = 3.32...
        assert_eq!(floor_log2_pow10(-1), -4);
    }

    #[test]
    fn floor_log10_pow2_minus_log10_4_over_3_spot_checks() {
        // e = 0 => -log10(4/3) = -0.1249..., floor = -1
        assert_eq!(floor_log10_pow2_minus_log10_4_over_3(0), -1);
    }

    #[test]
    fn floor_log5_pow2_spot_checks() {
        assert_eq!(floor_log5_pow2(0), 0);
        assert_eq!(floor_log5_pow2(1), 0); // log5(2) = 0.43...
        assert_eq!(floor_log5_pow2(3), 1); // 3*0.43 = 1.29
    }

    #[test]
    fn floor_log5_pow2_minus_log5_3_spot_checks() {
        // e = 0 => -log5(3) = -0.6826..., floor = -1
        assert_eq!(floor_log5_pow2_minus_log5_3(0), -1);
    }

    // Arbitrary-precision exactness proofs, one per approximator, over its full
    // documented range. Each rewrites `q == floor(e * log_b(target))` as the
    // integer inequality `b^q <= target < b^(q+1)` and checks it with exact
    // rational arithmetic, so no floating-point logarithm is ever computed.

    use num_bigint::BigInt;

    fn big_pow(base: u32, exp: u32) -> BigInt {
        let mut result = BigInt::from(1);
        let mut b = BigInt::from(base);
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * b.clone();
            }
            b = b.clone() * b.clone();
            e >>= 1;
        }
        result
    }

    fn pow_frac(base: u32, exp: i32) -> (BigInt, BigInt) {
        if exp >= 0 {
            (big_pow(base, exp as u32), BigInt::from(1))
        } else {
            (BigInt::from(1), big_pow(base, (-exp) as u32))
        }
    }

    fn assert_is_floor(e: i32, q: i32, base: u32, value_num: BigInt, value_den: BigInt) {
        let (lo_num, lo_den) = pow_frac(base, q);
        let (hi_num, hi_den) = pow_frac(base, q + 1);
        assert!(
            lo_num * value_den.clone() <= value_num.clone() * lo_den,
            "e={e}, q={q}: lower bound violated"
        );
        assert!(
            value_num * hi_den < hi_num * value_den,
            "e={e}, q={q}: upper bound violated"
        );
    }

    #[test]
    fn floor_log10_pow2_is_exact_over_full_range() {
        for e in -2620..=2620 {
            let (num, den) = pow_frac(2, e);
            assert_is_floor(e, floor_log10_pow2(e), 10, num, den);
        }
    }

    #[test]
    fn floor_log2_pow10_is_exact_over_full_range() {
        for e in -1233..=1233 {
            let (num, den) = pow_frac(10, e);
            assert_is_floor(e, floor_log2_pow10(e), 2, num, den);
        }
    }

    #[test]
    fn floor_log10_pow2_minus_log10_4_over_3_is_exact_over_full_range() {
        for e in -2985..=2936 {
            let (n2, d2) = pow_frac(2, e);
            assert_is_floor(
                e,
                floor_log10_pow2_minus_log10_4_over_3(e),
                10,
                n2 * 3,
                d2 * 4,
            );
        }
    }

    #[test]
    fn floor_log5_pow2_is_exact_over_full_range() {
        for e in -1831..=1831 {
            let (num, den) = pow_frac(2, e);
            assert_is_floor(e, floor_log5_pow2(e), 5, num, den);
        }
    }

    #[test]
    fn floor_log5_pow2_minus_log5_3_is_exact_over_full_range() {
        for e in -3543..=2427 {
            let (n2, d2) = pow_frac(2, e);
            assert_is_floor(e, floor_log5_pow2_minus_log5_3(e), 5, n2, d2 * 3);
        }
    }
}
