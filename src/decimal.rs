/*!
The top-level classifier (§4.9): reads a float's raw bits, sorts finite/zero/
non-finite/shorter-interval cases apart, and dispatches each finite, nonzero
case to the right kernel in [`crate::kernel`].
*/

use crate::cache::CachePolicy;
use crate::format::{Carrier, Format};
use crate::kernel;
use crate::policy::{DirectedKind, Policy};

/// `significand * 10^exponent`, optionally signed, per §3's decimal result shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decimal<T> {
    pub significand: T,
    pub exponent: i32,
    pub is_negative: bool,
    /// Only meaningful under [`crate::policy::TrailingZeroPolicy::Report`].
    pub trailing_zeros_removed: bool,
}

/// The outcome of classifying a float's bit pattern before any kernel runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatClass<T> {
    Nan,
    Infinity { is_negative: bool },
    Zero { is_negative: bool },
    Finite(Decimal<T>),
}

/// Classify `x`'s bit pattern and, for finite nonzero values, run the appropriate
/// kernel. This is the Rust realization of spec §4.9's dispatcher.
pub(crate) fn classify_and_convert<F: Format>(x: F::Float, policy: Policy) -> FloatClass<F::CarrierUInt> {
    let bits = F::to_bits(x);

    let sign_shift = F::EXPONENT_BITS + F::SIGNIFICAND_BITS;
    let is_negative = policy_tracks_sign(policy) && ((bits.to_u64() >> sign_shift) & 1) != 0;

    let exponent_mask = (1u64 << F::EXPONENT_BITS) - 1;
    let biased_exponent = (bits.to_u64() >> F::SIGNIFICAND_BITS) & exponent_mask;

    let significand_mask = (1u64 << F::SIGNIFICAND_BITS) - 1;
    let stored_significand = bits.to_u64() & significand_mask;

    if biased_exponent == exponent_mask {
        return if stored_significand == 0 {
            FloatClass::Infinity { is_negative }
        } else {
            FloatClass::Nan
        };
    }

    if biased_exponent == 0 && stored_significand == 0 {
        return FloatClass::Zero { is_negative };
    }

    let (two_fc, binary_exponent, is_shorter_interval_candidate) = if biased_exponent == 0 {
        // Subnormal.
        let two_fc = F::CarrierUInt::from_u64(stored_significand << 1);
        let binary_exponent = F::MIN_EXPONENT - F::SIGNIFICAND_BITS as i32;
        (two_fc, binary_exponent, false)
    } else {
        let hidden_bit = 1u64 << F::SIGNIFICAND_BITS;
        let two_fc = F::CarrierUInt::from_u64((stored_significand | hidden_bit) << 1);
        let binary_exponent =
            biased_exponent as i32 + F::EXPONENT_BIAS - F::SIGNIFICAND_BITS as i32;
        let is_shorter_interval_candidate = stored_significand == 0 && biased_exponent > 1;
        (two_fc, binary_exponent, is_shorter_interval_candidate)
    };

    let decimal = to_decimal_finite_nonzero::<F>(
        two_fc,
        binary_exponent,
        is_shorter_interval_candidate,
        is_negative,
        policy,
    );
    FloatClass::Finite(decimal)
}

#[inline]
fn policy_tracks_sign(policy: Policy) -> bool {
    !matches!(policy.sign, crate::policy::SignPolicy::Ignore)
}

/// §4.6–§4.8: dispatch a finite, nonzero value to its kernel.
///
/// `two_fc` must have the hidden bit materialised (already shifted left by one,
/// per the glossary's definition); `binary_exponent` is the unbiased exponent
/// adjusted for the significand width.
pub(crate) fn to_decimal_finite_nonzero<F: Format>(
    two_fc: F::CarrierUInt,
    binary_exponent: i32,
    is_shorter_interval_candidate: bool,
    is_negative: bool,
    policy: Policy,
) -> Decimal<F::CarrierUInt> {
    let cache: CachePolicy = policy.cache;

    let (significand, exponent, trailing_zeros_removed) = if policy.decimal_to_binary.is_nearest() {
        if is_shorter_interval_candidate {
            let (include_left, include_right) = policy.decimal_to_binary.shorter_interval(is_negative);
            kernel::compute_nearest_shorter::<F>(
                binary_exponent,
                include_left,
                include_right,
                policy.binary_to_decimal,
                policy.trailing_zero,
                cache,
            )
        } else {
            let has_even_significand_bits = (two_fc & F::CarrierUInt::TWO) == F::CarrierUInt::ZERO;
            let (include_left, include_right) =
                policy.decimal_to_binary.normal_interval(is_negative, has_even_significand_bits);
            kernel::compute_nearest_normal::<F>(
                two_fc,
                binary_exponent,
                include_left,
                include_right,
                policy.binary_to_decimal,
                policy.trailing_zero,
                cache,
            )
        }
    } else {
        match policy.decimal_to_binary.directed_kind(is_negative) {
            DirectedKind::LeftClosed => kernel::compute_left_closed_directed::<F>(
                two_fc,
                binary_exponent,
                policy.trailing_zero,
                cache,
            ),
            DirectedKind::RightClosed => kernel::compute_right_closed_directed::<F>(
                two_fc,
                binary_exponent,
                is_shorter_interval_candidate,
                policy.trailing_zero,
                cache,
            ),
        }
    };

    Decimal {
        significand,
        exponent,
        is_negative,
        trailing_zeros_removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::TrailingZeroPolicy;
    use crate::{to_decimal_f32, to_decimal_f64};

    /// Deterministic xorshift64; avoids a `rand` dependency for test-only
    /// bit-pattern sampling, matching this corpus's preference for explicit
    /// seeded data over a generated-property-testing crate.
    struct Xorshift64(u64);

    impl Xorshift64 {
        fn next(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }
    }

    /// Parse a `[-]d[.ddd][e[-]ddd]`-shaped decimal string (ryu's output shape)
    /// into a trailing-zero-stripped `(significand, exponent)` pair, so it can be
    /// compared directly against this crate's own (already stripped) output.
    fn parse_and_normalize(s: &str) -> (u64, i32) {
        let s = s.trim_start_matches('-');
        let (mantissa, exp_part) = match s.find(['e', 'E']) {
            Some(i) => (&s[..i], s[i + 1..].parse::<i32>().unwrap()),
            None => (s, 0),
        };
        let (int_part, frac_part) = match mantissa.find('.') {
            Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
            None => (mantissa, ""),
        };

        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);
        let mut exponent = exp_part - frac_part.len() as i32;

        let trimmed_front = digits.trim_start_matches('0').to_string();
        let digits = if trimmed_front.is_empty() { "0" } else { &trimmed_front };

        let mut significand: u64 = digits.parse().unwrap();
        while significand != 0 && significand % 10 == 0 {
            significand /= 10;
            exponent += 1;
        }
        (significand, exponent)
    }

    #[test]
    fn matches_ryu_f64_random_sample() {
        let mut rng = Xorshift64(0x2545_f491_4f6c_dd1d);
        let mut checked = 0;
        while checked < 20_000 {
            let bits = rng.next();
            let x = f64::from_bits(bits);
            if !x.is_finite() || x == 0.0 {
                continue;
            }
            checked += 1;

            let d = to_decimal_f64(x, Policy::default());
            let mut ryu_buf = ryu::Buffer::new();
            let (ryu_sig, ryu_exp) = parse_and_normalize(ryu_buf.format_finite(x.abs()));

            assert_eq!(
                (d.significand, d.exponent),
                (ryu_sig, ryu_exp),
                "mismatch for {x:e} (bits {bits:#x})"
            );
        }
    }

    #[test]
    fn matches_ryu_f32_random_sample() {
        let mut rng = Xorshift64(0x9e37_79b9_7f4a_7c15);
        let mut checked = 0;
        while checked < 20_000 {
            let bits = (rng.next() >> 32) as u32;
            let x = f32::from_bits(bits);
            if !x.is_finite() || x == 0.0 {
                continue;
            }
            checked += 1;

            let d = to_decimal_f32(x, Policy::default());
            let mut ryu_buf = ryu::Buffer::new();
            let (ryu_sig, ryu_exp) = parse_and_normalize(ryu_buf.format_finite(x.abs()));

            assert_eq!(
                (d.significand as u64, d.exponent),
                (ryu_sig, ryu_exp),
                "mismatch for {x:e} (bits {bits:#x})"
            );
        }
    }

    #[test]
    fn shortest_digit_count_cannot_be_reduced() {
        // Dropping the last digit (rounded to nearest) and re-parsing must never
        // reproduce the original bits, or the reported significand wasn't
        // actually shortest.
        for x in [1.0f64, 1.0 / 3.0, 123.456e7, f64::MIN_POSITIVE, 2f64.powi(53)] {
            let d = to_decimal_f64(x, Policy::default());
            if d.significand < 10 {
                continue;
            }
            let shortened = (d.significand + 5) / 10;
            let s = format!("{shortened}e{}", d.exponent + 1);
            let reparsed: f64 = s.parse().unwrap();
            assert_ne!(
                reparsed.to_bits(),
                x.to_bits(),
                "{x:e} round-trips with one fewer digit via {s}"
            );
        }
    }

    #[test]
    fn trailing_zero_policy_variants_agree_on_value() {
        let ignore = to_decimal_f64(
            100.0,
            Policy {
                trailing_zero: TrailingZeroPolicy::Ignore,
                ..Policy::default()
            },
        );
        let remove = to_decimal_f64(
            100.0,
            Policy {
                trailing_zero: TrailingZeroPolicy::Remove,
                ..Policy::default()
            },
        );
        let report = to_decimal_f64(
            100.0,
            Policy {
                trailing_zero: TrailingZeroPolicy::Report,
                ..Policy::default()
            },
        );

        assert_eq!(remove.significand, report.significand);
        assert_eq!(remove.exponent, report.exponent);
        assert!(!ignore.trailing_zeros_removed);

        let digits_removed = (remove.exponent - ignore.exponent).max(0) as u32;
        assert_eq!(report.trailing_zeros_removed, digits_removed > 0);

        // Ignore and Remove describe the same numeric value; `remove_trailing_zeros`
        // guarantees `remove.significand * 10^digits_removed == ignore.significand`.
        assert_eq!(remove.significand * 10u64.pow(digits_removed), ignore.significand);
    }
}
