/*!
The configuration bundle that selects rounding, sign, trailing-zero, and cache
behaviour. Each axis is a small enum rather than a compile-time tag type: the
kernel branches on these are still monomorphised away by inlining, but callers
get an ordinary value they can build at runtime.
*/

/// Whether the sign of the input is tracked in the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignPolicy {
    Ignore,
    ReturnSign,
}

impl Default for SignPolicy {
    fn default() -> Self {
        SignPolicy::ReturnSign
    }
}

/// Whether trailing decimal zeros are stripped from the returned significand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingZeroPolicy {
    /// Skip the removal step entirely; the caller doesn't need the shortest form.
    Ignore,
    /// Strip trailing zeros and fold the count into the exponent.
    Remove,
    /// Like `Remove`, but also report on [`crate::decimal::Decimal`] whether any were found.
    Report,
}

impl Default for TrailingZeroPolicy {
    fn default() -> Self {
        TrailingZeroPolicy::Remove
    }
}

/// Which directed-rounding kernel a non-nearest decimal-to-binary policy resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DirectedKind {
    LeftClosed,
    RightClosed,
}

/// The ten (non-static-boundary) decimal-to-binary rounding variants from §6.
///
/// The four `static_boundary` variants from the upstream source are intentionally
/// not exposed: they're a micro-optimisation (the tie-to-even/odd decision is
/// hoisted out of the kernel and into the policy dispatch) with no behavioural
/// difference from the non-static variants, so there is nothing extra to implement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecimalToBinaryRounding {
    NearestToEven,
    NearestToOdd,
    NearestTowardPlusInfinity,
    NearestTowardMinusInfinity,
    NearestTowardZero,
    NearestAwayFromZero,
    TowardPlusInfinity,
    TowardMinusInfinity,
    TowardZero,
    AwayFromZero,
}

impl Default for DecimalToBinaryRounding {
    fn default() -> Self {
        DecimalToBinaryRounding::NearestToEven
    }
}

impl DecimalToBinaryRounding {
    #[inline]
    pub(crate) fn is_nearest(self) -> bool {
        !matches!(
            self,
            DecimalToBinaryRounding::TowardPlusInfinity
                | DecimalToBinaryRounding::TowardMinusInfinity
                | DecimalToBinaryRounding::TowardZero
                | DecimalToBinaryRounding::AwayFromZero
        )
    }

    /// `(include_left_endpoint, include_right_endpoint)` for the normal-interval kernel.
    #[inline]
    pub(crate) fn normal_interval(
        self,
        is_negative: bool,
        has_even_significand_bits: bool,
    ) -> (bool, bool) {
        use DecimalToBinaryRounding::*;
        match self {
            NearestToEven => (has_even_significand_bits, has_even_significand_bits),
            NearestToOdd => (!has_even_significand_bits, !has_even_significand_bits),
            NearestTowardPlusInfinity => {
                let left_closed = !is_negative;
                (left_closed, !left_closed)
            }
            NearestTowardMinusInfinity => {
                let left_closed = is_negative;
                (left_closed, !left_closed)
            }
            NearestTowardZero => (false, true),
            NearestAwayFromZero => (true, false),
            TowardPlusInfinity | TowardMinusInfinity | TowardZero | AwayFromZero => {
                unreachable!("directed rounding modes dispatch to a different kernel")
            }
        }
    }

    /// `(include_left_endpoint, include_right_endpoint)` for the shorter-interval kernel.
    #[inline]
    pub(crate) fn shorter_interval(self, is_negative: bool) -> (bool, bool) {
        use DecimalToBinaryRounding::*;
        match self {
            NearestToEven => (true, true),
            NearestToOdd => (false, false),
            NearestTowardPlusInfinity => {
                let left_closed = !is_negative;
                (left_closed, !left_closed)
            }
            NearestTowardMinusInfinity => {
                let left_closed = is_negative;
                (left_closed, !left_closed)
            }
            NearestTowardZero => (false, true),
            NearestAwayFromZero => (true, false),
            TowardPlusInfinity | TowardMinusInfinity | TowardZero | AwayFromZero => {
                unreachable!("directed rounding modes dispatch to a different kernel")
            }
        }
    }

    #[inline]
    pub(crate) fn directed_kind(self, is_negative: bool) -> DirectedKind {
        use DecimalToBinaryRounding::*;
        match self {
            TowardPlusInfinity => {
                if is_negative {
                    DirectedKind::LeftClosed
                } else {
                    DirectedKind::RightClosed
                }
            }
            TowardMinusInfinity => {
                if is_negative {
                    DirectedKind::RightClosed
                } else {
                    DirectedKind::LeftClosed
                }
            }
            TowardZero => DirectedKind::LeftClosed,
            AwayFromZero => DirectedKind::RightClosed,
            _ => unreachable!("only directed rounding modes have a directed kind"),
        }
    }
}

/// The five binary-to-decimal tie-breaking policies from §6. Only meaningful when
/// the decimal-to-binary policy is one of the `nearest_*` variants; directed modes
/// never land on an exact tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryToDecimalRounding {
    DoNotCare,
    ToEven,
    ToOdd,
    AwayFromZero,
    TowardZero,
}

impl Default for BinaryToDecimalRounding {
    fn default() -> Self {
        BinaryToDecimalRounding::ToEven
    }
}

impl BinaryToDecimalRounding {
    #[inline]
    pub(crate) fn prefer_round_down<C>(self, significand: C) -> bool
    where
        C: crate::format::Carrier,
    {
        match self {
            BinaryToDecimalRounding::DoNotCare => false,
            BinaryToDecimalRounding::ToEven => significand.is_odd(),
            BinaryToDecimalRounding::ToOdd => !significand.is_odd(),
            BinaryToDecimalRounding::AwayFromZero => false,
            BinaryToDecimalRounding::TowardZero => true,
        }
    }
}

/// The full policy bundle accepted by [`crate::to_decimal`] and [`crate::to_chars`].
///
/// `Policy::default()` matches the source's default: nearest-to-even decimal-to-binary
/// rounding, ties broken to even, trailing zeros removed, sign tracked, full cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Policy {
    pub sign: SignPolicy,
    pub trailing_zero: TrailingZeroPolicy,
    pub decimal_to_binary: DecimalToBinaryRounding,
    pub binary_to_decimal: BinaryToDecimalRounding,
    pub cache: crate::cache::CachePolicy,
}
