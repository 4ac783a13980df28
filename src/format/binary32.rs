use crate::format::{Carrier, Format, MulParityResult, MulResult};

/// IEEE-754 binary32 (`f32`).
#[derive(Clone, Copy)]
pub(crate) struct Binary32;

const CACHE: [u64; 78] = [
    0x81ceb32c4b43fcf5,
    0xa2425ff75e14fc32,
    0xcad2f7f5359a3b3f,
    0xfd87b5f28300ca0e,
    0x9e74d1b791e07e49,
    0xc612062576589ddb,
    0xf79687aed3eec552,
    0x9abe14cd44753b53,
    0xc16d9a0095928a28,
    0xf1c90080baf72cb2,
    0x971da05074da7bef,
    0xbce5086492111aeb,
    0xec1e4a7db69561a6,
    0x9392ee8e921d5d08,
    0xb877aa3236a4b44a,
    0xe69594bec44de15c,
    0x901d7cf73ab0acda,
    0xb424dc35095cd810,
    0xe12e13424bb40e14,
    0x8cbccc096f5088cc,
    0xafebff0bcb24aaff,
    0xdbe6fecebdedd5bf,
    0x89705f4136b4a598,
    0xabcc77118461cefd,
    0xd6bf94d5e57a42bd,
    0x8637bd05af6c69b6,
    0xa7c5ac471b478424,
    0xd1b71758e219652c,
    0x83126e978d4fdf3c,
    0xa3d70a3d70a3d70b,
    0xcccccccccccccccd,
    0x8000000000000000,
    0xa000000000000000,
    0xc800000000000000,
    0xfa00000000000000,
    0x9c40000000000000,
    0xc350000000000000,
    0xf424000000000000,
    0x9896800000000000,
    0xbebc200000000000,
    0xee6b280000000000,
    0x9502f90000000000,
    0xba43b74000000000,
    0xe8d4a51000000000,
    0x9184e72a00000000,
    0xb5e620f480000000,
    0xe35fa931a0000000,
    0x8e1bc9bf04000000,
    0xb1a2bc2ec5000000,
    0xde0b6b3a76400000,
    0x8ac7230489e80000,
    0xad78ebc5ac620000,
    0xd8d726b7177a8000,
    0x878678326eac9000,
    0xa968163f0a57b400,
    0xd3c21bcecceda100,
    0x84595161401484a0,
    0xa56fa5b99019a5c8,
    0xcecb8f27f4200f3a,
    0x813f3978f8940985,
    0xa18f07d736b90be6,
    0xc9f2c9cd04674edf,
    0xfc6f7c4045812297,
    0x9dc5ada82b70b59e,
    0xc5371912364ce306,
    0xf684df56c3e01bc7,
    0x9a130b963a6c115d,
    0xc097ce7bc90715b4,
    0xf0bdc21abb48db21,
    0x96769950b50d88f5,
    0xbc143fa4e250eb32,
    0xeb194f8e1ae525fe,
    0x92efd1b8d0cf37bf,
    0xb7abc627050305ae,
    0xe596b7b0c643c71a,
    0x8f7e32ce7bea5c70,
    0xb35dbf821ae4f38c,
    0xe0352f62a19e306f,
];

impl Format for Binary32 {
    type Float = f32;
    type CarrierUInt = u32;
    type Cache = u64;

    #[inline]
    fn to_bits(x: f32) -> u32 {
        x.to_bits()
    }

    const SIGNIFICAND_BITS: u32 = 23;
    const EXPONENT_BITS: u32 = 8;
    const MIN_EXPONENT: i32 = -126;
    const MAX_EXPONENT: i32 = 127;
    const EXPONENT_BIAS: i32 = -127;
    const DECIMAL_SIGNIFICAND_DIGITS: u32 = 9;
    const DECIMAL_EXPONENT_DIGITS: u32 = 2;
    const CACHE_BITS: u32 = 64;

    const KAPPA: i32 = 1;
    const MIN_K: i32 = -31;
    const MAX_K: i32 = 46;

    // 2 + floor_log2(10^(count_factors_5((1<<25)-1)+1) / 3), computed once and baked in
    // as the original upstream source does (these only depend on `significand_bits`).
    const CASE_SHORTER_INTERVAL_LEFT_ENDPOINT_LOWER_THRESHOLD: i32 = 2;
    const CASE_SHORTER_INTERVAL_LEFT_ENDPOINT_UPPER_THRESHOLD: i32 = 3;
    const CASE_SHORTER_INTERVAL_RIGHT_ENDPOINT_LOWER_THRESHOLD: i32 = 0;
    const CASE_SHORTER_INTERVAL_RIGHT_ENDPOINT_UPPER_THRESHOLD: i32 = 3;
    const SHORTER_INTERVAL_TIE_LOWER_THRESHOLD: i32 = -35;
    const SHORTER_INTERVAL_TIE_UPPER_THRESHOLD: i32 = -35;

    #[inline]
    fn cache_full(k: i32) -> Self::Cache {
        debug_assert!(k >= Self::MIN_K && k <= Self::MAX_K);
        CACHE[(k - Self::MIN_K) as usize]
    }

    #[inline]
    fn cache_compact(k: i32) -> Self::Cache {
        // binary32 has no compact representation; full and compact coincide.
        Self::cache_full(k)
    }

    #[inline]
    fn compute_mul(u: u32, cache: u64) -> MulResult<u32> {
        let r = crate::wuint::umul96_upper64(u, cache);
        MulResult {
            integer_part: (r >> 32) as u32,
            is_integer: (r as u32) == 0,
        }
    }

    #[inline]
    fn compute_delta(cache: u64, beta: i32) -> u32 {
        (cache >> (63 - beta)) as u32
    }

    #[inline]
    fn compute_mul_parity(two_f: u32, cache: u64, beta: i32) -> MulParityResult {
        debug_assert!((1..=32).contains(&beta));
        let r = crate::wuint::umul96_lower64(two_f, cache);
        MulParityResult {
            parity: ((r >> (64 - beta)) & 1) != 0,
            is_integer: (0xffff_ffffu32 & (r >> (32 - beta)) as u32) == 0,
        }
    }

    #[inline]
    fn compute_left_endpoint_for_shorter_interval(cache: u64, beta: i32) -> u32 {
        ((cache - (cache >> (Self::SIGNIFICAND_BITS + 2)))
            >> (Self::CACHE_BITS - Self::SIGNIFICAND_BITS - 1 - beta as u32)) as u32
    }

    #[inline]
    fn compute_right_endpoint_for_shorter_interval(cache: u64, beta: i32) -> u32 {
        ((cache + (cache >> (Self::SIGNIFICAND_BITS + 1)))
            >> (Self::CACHE_BITS - Self::SIGNIFICAND_BITS - 1 - beta as u32)) as u32
    }

    #[inline]
    fn compute_round_up_for_shorter_interval(cache: u64, beta: i32) -> u32 {
        (((cache >> (Self::CACHE_BITS - Self::SIGNIFICAND_BITS - 2 - beta as u32)) as u32) + 1) / 2
    }

    #[inline]
    fn remove_trailing_zeros(significand: u32) -> (u32, i32) {
        // Branchless binary search over {4, 2, 1} zeros, per §4.5; rotate-right after a
        // multiply by the modular inverse of the relevant power of five.
        debug_assert!(significand != 0);

        let mut n = significand;
        let mut s = 0i32;

        let r = n.wrapping_mul(184_254_097).rotate_right(4);
        let b = r < 429_497;
        s += (b as i32) * 4;
        n = if b { r } else { n };

        let r = n.wrapping_mul(42_949_673).rotate_right(2);
        let b = r < 42_949_673;
        s += (b as i32) * 2;
        n = if b { r } else { n };

        let r = n.wrapping_mul(1_288_490_189).rotate_right(1);
        let b = r < 429_496_730;
        s += b as i32;
        n = if b { r } else { n };

        (n, s)
    }

    #[inline]
    fn divide_by_pow10_kappa_plus_1(n: u32) -> u32 {
        // KAPPA + 1 == 2: n / 100.
        ((n as u64 * 1_374_389_535) >> 37) as u32
    }

    #[inline]
    fn small_division_by_pow10_kappa(n: u32) -> u32 {
        // KAPPA == 1: n / 10.
        ((n as u64 * 429_496_730) >> 32) as u32
    }

    #[inline]
    fn check_divisibility_and_divide_by_pow10_kappa(n: u32) -> (u32, bool) {
        const MAGIC: u32 = 6554;
        let prod = n.wrapping_mul(MAGIC);
        let divisible = (prod & 0xffff) < MAGIC;
        (prod >> 16, divisible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_endpoints_match_upstream_literals() {
        assert_eq!(Binary32::cache_full(Binary32::MIN_K), 0x81ceb32c4b43fcf5);
        assert_eq!(Binary32::cache_full(Binary32::MAX_K), 0xe0352f62a19e306f);
    }

    #[test]
    fn remove_trailing_zeros_examples() {
        assert_eq!(Binary32::remove_trailing_zeros(100), (1, 2));
        assert_eq!(Binary32::remove_trailing_zeros(120), (12, 1));
        assert_eq!(Binary32::remove_trailing_zeros(123), (123, 0));
        assert_eq!(Binary32::remove_trailing_zeros(340_282_350), (34_028_235, 1));
    }

    #[test]
    fn check_divisibility_and_divide_by_pow10_kappa_examples() {
        assert_eq!(
            Binary32::check_divisibility_and_divide_by_pow10_kappa(50),
            (5, true)
        );
        assert_eq!(
            Binary32::check_divisibility_and_divide_by_pow10_kappa(51),
            (5, false)
        );
    }

    // Arbitrary-precision cache-entry proof: phi_k (the glossary's name for
    // `cache[k]`) must equal `ceil(10^k * 2^(CACHE_BITS - 1 - floor(k * log2 10)))`.
    // Checked as an exact rational inequality, not a floating-point approximation.
    #[test]
    fn cache_satisfies_ceiling_invariant() {
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

        for k in Binary32::MIN_K..=Binary32::MAX_K {
            let e_k = crate::log::floor_log2_pow10(k);
            let p = Binary32::CACHE_BITS as i32 - 1 - e_k;

            let numerator = big_pow(10, k.max(0) as u32) * big_pow(2, p.max(0) as u32);
            let denominator = big_pow(10, (-k).max(0) as u32) * big_pow(2, (-p).max(0) as u32);

            let cache = BigInt::from(Binary32::cache_full(k));
            assert!(
                cache.clone() * denominator.clone() >= numerator.clone(),
                "k={k}: cache entry smaller than the exact value"
            );
            assert!(
                (cache - 1) * denominator < numerator,
                "k={k}: cache entry more than one above the exact value"
            );
        }
    }
}
