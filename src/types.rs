//! Raw field view of a floating-point bit pattern.

use core::fmt;

use crate::layout::FloatLayout;

/// The three stored fields of an IEEE 754 bit pattern.
///
/// No interpretation is applied: the exponent stays biased and the
/// significand excludes the implicit leading bit. NaN, infinity and
/// subnormal patterns decompose like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawParts {
    /// Sign bit.
    pub negative: bool,
    /// Stored (biased) exponent field.
    pub biased_exponent: u32,
    /// Stored significand field.
    pub significand: u64,
}

impl RawParts {
    /// Split `value` into its fields.
    #[inline]
    pub fn of<T: FloatLayout>(value: T) -> Self {
        Self::from_bits::<T>(value.to_raw_bits())
    }

    /// Split a raw bit pattern of format `T` into its fields.
    #[inline]
    pub fn from_bits<T: FloatLayout>(bits: T::Bits) -> Self {
        RawParts {
            negative: T::sign_field(bits),
            biased_exponent: T::exponent_field(bits),
            significand: T::significand_field(bits),
        }
    }

    /// Reassemble the bit pattern of format `T`.
    ///
    /// Fails if either field is wider than its slot in `T`.
    pub fn to_bits<T: FloatLayout>(&self) -> Result<T::Bits, Error> {
        self.check_exponent::<T>()?;
        if self.significand & !T::widen(T::SIGNIF_BIT_MASK) != 0 {
            return Err(Error::SignificandOutOfRange);
        }

        let mut raw = (u64::from(self.biased_exponent) << T::EXP_SHIFT) | self.significand;
        if self.negative {
            raw |= T::widen(T::SIGN_BIT_MASK);
        }
        Ok(T::narrow(raw))
    }

    /// Reassemble a value of format `T`.
    #[inline]
    pub fn to_float<T: FloatLayout>(&self) -> Result<T, Error> {
        self.to_bits::<T>().map(T::from_raw_bits)
    }

    /// Exponent with the bias of `T` removed.
    ///
    /// Only meaningful for normal values; a zero field yields
    /// `MIN_EXPONENT - 1`. Fails if the field is wider than the exponent
    /// slot of `T`.
    #[inline]
    pub fn unbiased_exponent<T: FloatLayout>(&self) -> Result<i32, Error> {
        self.check_exponent::<T>()?;
        // fits in EXP_WIDTH bits, so the cast is lossless
        Ok(self.biased_exponent as i32 - T::EXP_BIAS)
    }

    fn check_exponent<T: FloatLayout>(&self) -> Result<(), Error> {
        let max_exponent = (1u32 << T::EXP_WIDTH) - 1;
        if self.biased_exponent > max_exponent {
            return Err(Error::ExponentOutOfRange);
        }
        Ok(())
    }
}

/// Error type for reassembling a bit pattern from [`RawParts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Biased exponent does not fit in the exponent field.
    ExponentOutOfRange,
    /// Significand has bits outside the significand field.
    SignificandOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ExponentOutOfRange => {
                write!(f, "exponent out of range: value exceeds the exponent field")
            }
            Error::SignificandOutOfRange => {
                write!(
                    f,
                    "significand out of range: bits set outside the significand field"
                )
            }
        }
    }
}

impl core::error::Error for Error {}
