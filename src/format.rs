/*!
Per-format constants and primitive operations that the conversion kernel is generic
over. `Binary32` and `Binary64` are the two concrete formats; the kernel in
[`crate::kernel`] never mentions `f32`/`f64` or `u32`/`u64` directly, it only talks to
a type implementing [`Format`].
*/

pub(crate) mod binary32;
pub(crate) mod binary64;

/**
The arithmetic a format's carrier integer needs to support.

This mirrors the shape of `crate::binary::exponent::BinaryExponentMath` in the
inherited decimal-bitstring code: a small closed trait implemented per concrete
integer width via a macro, so the kernel can be written once as generic code and
still monomorphize down to plain `u32`/`u64` operations with no dynamic dispatch.
*/
pub(crate) trait Carrier:
    Copy
    + Eq
    + Ord
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Rem<Output = Self>
    + core::ops::Shl<u32, Output = Self>
    + core::ops::Shr<u32, Output = Self>
    + core::ops::BitOr<Output = Self>
    + core::ops::BitAnd<Output = Self>
    + core::ops::BitXor<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const TEN: Self;

    fn from_u64(n: u64) -> Self;
    fn to_u64(self) -> u64;
    fn is_odd(self) -> bool;
}

macro_rules! impl_carrier {
    ($($i:ty),*) => {
        $(
            impl Carrier for $i {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;
                const TEN: Self = 10;

                #[inline]
                fn from_u64(n: u64) -> Self {
                    n as $i
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn is_odd(self) -> bool {
                    self & 1 == 1
                }
            }
        )*
    };
}

impl_carrier!(u32, u64);

/**
The result of a Schubfach "compute_mul": the integer part of the scaled product, and
whether the product was exactly an integer (no fractional remainder).
*/
pub(crate) struct MulResult<C> {
    pub(crate) integer_part: C,
    pub(crate) is_integer: bool,
}

/**
The result of a "compute_mul_parity": the parity of the fractional part's leading bit,
and whether the fractional part is exactly zero.
*/
pub(crate) struct MulParityResult {
    pub(crate) parity: bool,
    pub(crate) is_integer: bool,
}

/**
Per-format constants and primitive operations (§4.1–§4.5 of the specification).

Each implementor is a zero-sized marker type (`Binary32`, `Binary64`) so that the
kernel in [`crate::kernel`] monomorphizes to straight-line code per format with no
runtime branching on which format is in use.
*/
pub(crate) trait Format: Copy {
    /// The Rust float type this format describes (`f32`/`f64`).
    type Float: Copy;
    /// Unsigned integer with the same bit width as the float's storage (`u32`/`u64`).
    type CarrierUInt: Carrier;
    /// Power-of-ten cache entry type (`u64` for binary32, [`crate::wuint::WideUInt`] for binary64).
    type Cache: Copy;

    /// Reinterpret a float's storage as its carrier integer, bit for bit.
    fn to_bits(x: Self::Float) -> Self::CarrierUInt;

    const SIGNIFICAND_BITS: u32;
    const EXPONENT_BITS: u32;
    const MIN_EXPONENT: i32;
    const MAX_EXPONENT: i32;
    const EXPONENT_BIAS: i32;
    const DECIMAL_SIGNIFICAND_DIGITS: u32;
    const DECIMAL_EXPONENT_DIGITS: u32;
    const CACHE_BITS: u32;

    const KAPPA: i32;
    const MIN_K: i32;
    const MAX_K: i32;

    const CASE_SHORTER_INTERVAL_LEFT_ENDPOINT_LOWER_THRESHOLD: i32;
    const CASE_SHORTER_INTERVAL_LEFT_ENDPOINT_UPPER_THRESHOLD: i32;
    const CASE_SHORTER_INTERVAL_RIGHT_ENDPOINT_LOWER_THRESHOLD: i32;
    const CASE_SHORTER_INTERVAL_RIGHT_ENDPOINT_UPPER_THRESHOLD: i32;
    const SHORTER_INTERVAL_TIE_LOWER_THRESHOLD: i32;
    const SHORTER_INTERVAL_TIE_UPPER_THRESHOLD: i32;

    /// Look up `cache[k - MIN_K]` from the full, uncompressed table.
    fn cache_full(k: i32) -> Self::Cache;

    /// Look up (and if necessary reconstruct) the cache entry for `k`, per the active
    /// [`crate::cache::CachePolicy`]. Formats without a compact representation (binary32)
    /// just delegate to [`Format::cache_full`].
    fn cache_compact(k: i32) -> Self::Cache;

    fn compute_mul(u: Self::CarrierUInt, cache: Self::Cache) -> MulResult<Self::CarrierUInt>;
    fn compute_delta(cache: Self::Cache, beta: i32) -> Self::CarrierUInt;
    fn compute_mul_parity(two_f: Self::CarrierUInt, cache: Self::Cache, beta: i32) -> MulParityResult;

    fn compute_left_endpoint_for_shorter_interval(
        cache: Self::Cache,
        beta: i32,
    ) -> Self::CarrierUInt;
    fn compute_right_endpoint_for_shorter_interval(
        cache: Self::Cache,
        beta: i32,
    ) -> Self::CarrierUInt;
    fn compute_round_up_for_shorter_interval(cache: Self::Cache, beta: i32) -> Self::CarrierUInt;

    /// Strip trailing decimal zeros from `significand`, returning the odd-in-base-10
    /// residue and the count of zeros removed.
    fn remove_trailing_zeros(significand: Self::CarrierUInt) -> (Self::CarrierUInt, i32);

    /// `n / 10^(KAPPA + 1)`, using an upper bound on `n` to pick a cheap division strategy.
    fn divide_by_pow10_kappa_plus_1(n: Self::CarrierUInt) -> Self::CarrierUInt;

    /// `n / 10^KAPPA`, for `n <= 10^(KAPPA + 1)`.
    fn small_division_by_pow10_kappa(n: Self::CarrierUInt) -> Self::CarrierUInt;

    /// Is `n` divisible by `10^KAPPA`? Returns `(n / 10^KAPPA, divisible)`, computed via
    /// the modular-inverse-and-rotate-free magic-multiply technique of §4.6, not division.
    fn check_divisibility_and_divide_by_pow10_kappa(n: Self::CarrierUInt) -> (Self::CarrierUInt, bool);

    #[inline]
    fn big_divisor() -> Self::CarrierUInt {
        let mut d = Self::CarrierUInt::ONE;
        for _ in 0..(Self::KAPPA + 1) {
            d = d * Self::CarrierUInt::TEN;
        }
        d
    }

    #[inline]
    fn small_divisor() -> Self::CarrierUInt {
        let mut d = Self::CarrierUInt::ONE;
        for _ in 0..Self::KAPPA {
            d = d * Self::CarrierUInt::TEN;
        }
        d
    }
}
