/*!
Formats a [`Decimal`] as the scientific-notation text grammar from §6:

```text
NaN
[-]Infinity
[-]d[.ddd...]E[-]exp
```

`0` is always rendered as `0E0`. The formatter never allocates; it writes into
a caller-supplied `&mut [u8]` and returns the written prefix.
*/

use crate::decimal::{Decimal, FloatClass};
use crate::format::Format;
use crate::policy::Policy;

/// Buffer size guaranteed to fit any binary32 result: sign, 9 significand
/// digits, decimal point, `E`, exponent sign, 2 exponent digits.
pub const BINARY32_BUFFER_SIZE: usize = 1 + 9 + 1 + 1 + 1 + 2;

/// Buffer size guaranteed to fit any binary64 result: sign, 17 significand
/// digits, decimal point, `E`, exponent sign, 3 exponent digits.
pub const BINARY64_BUFFER_SIZE: usize = 1 + 17 + 1 + 1 + 1 + 3;

/// Classify and format `x` into `buf`, returning the written prefix.
///
/// `buf` must be at least [`BINARY32_BUFFER_SIZE`] / [`BINARY64_BUFFER_SIZE`] bytes
/// long, depending on `F`.
pub(crate) fn to_chars<'b, F: Format>(x: F::Float, buf: &'b mut [u8], policy: Policy) -> &'b [u8] {
    match crate::decimal::classify_and_convert::<F>(x, policy) {
        FloatClass::Nan => write_str(buf, "NaN"),
        FloatClass::Infinity { is_negative } => {
            if is_negative {
                write_str(buf, "-Infinity")
            } else {
                write_str(buf, "Infinity")
            }
        }
        FloatClass::Zero { is_negative } => {
            if is_negative {
                write_str(buf, "-0E0")
            } else {
                write_str(buf, "0E0")
            }
        }
        FloatClass::Finite(decimal) => write_finite(buf, decimal),
    }
}

fn write_str<'b>(buf: &'b mut [u8], s: &str) -> &'b [u8] {
    let bytes = s.as_bytes();
    buf[..bytes.len()].copy_from_slice(bytes);
    &buf[..bytes.len()]
}

fn write_finite<'b, T>(buf: &'b mut [u8], decimal: Decimal<T>) -> &'b [u8]
where
    T: itoa::Integer + Copy,
{
    let mut pos = 0;

    if decimal.is_negative {
        buf[pos] = b'-';
        pos += 1;
    }

    let mut digit_buf = itoa::Buffer::new();
    let digits = digit_buf.format(decimal.significand);
    let digit_count = digits.len() as i32;

    // significand * 10^exponent, written as d[.ddd...]E<exp>, where <exp> is the
    // power of ten applied to the single leading digit.
    let scientific_exponent = decimal.exponent + digit_count - 1;

    buf[pos] = digits.as_bytes()[0];
    pos += 1;

    if digit_count > 1 {
        buf[pos] = b'.';
        pos += 1;
        let rest = &digits.as_bytes()[1..];
        buf[pos..pos + rest.len()].copy_from_slice(rest);
        pos += rest.len();
    }

    buf[pos] = b'E';
    pos += 1;

    let mut exp_buf = itoa::Buffer::new();
    let exp_str = exp_buf.format(scientific_exponent);
    let exp_bytes = exp_str.as_bytes();
    buf[pos..pos + exp_bytes.len()].copy_from_slice(exp_bytes);
    pos += exp_bytes.len();

    &buf[..pos]
}
