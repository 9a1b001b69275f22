//! The `FloatLayout` trait: bit-layout constants as associated items.
//!
//! Values come from [`float32`](crate::float32) and
//! [`float64`](crate::float64); this trait only lets generic code reach
//! them through a type parameter.

use core::fmt::Debug;

use num_traits::{Float, PrimInt, Zero};

use crate::{float32, float64};

/// IEEE 754 binary format with a fixed bit layout.
///
/// Implemented for `f32` and `f64`.
pub trait FloatLayout: Float + Debug + 'static {
    /// Unsigned integer of the same width as `Self`.
    type Bits: PrimInt + Debug;

    /// Total width in bits.
    const BITS: u32;
    /// Significand bits, including the implicit leading bit.
    const SIGNIFICAND_WIDTH: u32;
    /// Bias added to the true exponent before storage.
    const EXP_BIAS: i32;
    /// Largest unbiased exponent of a finite value.
    const MAX_EXPONENT: i32;
    /// Smallest unbiased exponent of a normal value.
    const MIN_EXPONENT: i32;
    /// Normalized exponent of the smallest subnormal.
    const MIN_SUB_EXPONENT: i32;
    /// Width of the stored exponent field.
    const EXP_WIDTH: u32;
    /// Bit offset of the exponent field.
    const EXP_SHIFT: u32;

    /// Isolates the sign bit.
    const SIGN_BIT_MASK: Self::Bits;
    /// Isolates the biased exponent field.
    const EXP_BIT_MASK: Self::Bits;
    /// Isolates the stored significand field.
    const SIGNIF_BIT_MASK: Self::Bits;

    /// Raw bit pattern of `self`.
    fn to_raw_bits(self) -> Self::Bits;

    /// Value with the given raw bit pattern.
    fn from_raw_bits(bits: Self::Bits) -> Self;

    /// Zero-extends a bit pattern to 64 bits.
    fn widen(bits: Self::Bits) -> u64;

    /// Truncates a 64-bit word to the width of `Self::Bits`.
    fn narrow(raw: u64) -> Self::Bits;

    /// Whether the sign bit of `bits` is set.
    #[inline]
    fn sign_field(bits: Self::Bits) -> bool {
        bits & Self::SIGN_BIT_MASK != Self::Bits::zero()
    }

    /// Biased exponent field of `bits`, shifted down to bit 0.
    #[inline]
    fn exponent_field(bits: Self::Bits) -> u32 {
        // at most EXP_WIDTH bits survive the shift
        (Self::widen(bits & Self::EXP_BIT_MASK) >> Self::EXP_SHIFT) as u32
    }

    /// Stored significand field of `bits`, without the implicit bit.
    #[inline]
    fn significand_field(bits: Self::Bits) -> u64 {
        Self::widen(bits & Self::SIGNIF_BIT_MASK)
    }
}

impl FloatLayout for f32 {
    type Bits = u32;

    const BITS: u32 = float32::BITS;
    const SIGNIFICAND_WIDTH: u32 = float32::SIGNIFICAND_WIDTH;
    const EXP_BIAS: i32 = float32::EXP_BIAS;
    const MAX_EXPONENT: i32 = float32::MAX_EXPONENT;
    const MIN_EXPONENT: i32 = float32::MIN_EXPONENT;
    const MIN_SUB_EXPONENT: i32 = float32::MIN_SUB_EXPONENT;
    const EXP_WIDTH: u32 = float32::EXP_WIDTH;
    const EXP_SHIFT: u32 = float32::EXP_SHIFT;

    const SIGN_BIT_MASK: u32 = float32::SIGN_BIT_MASK;
    const EXP_BIT_MASK: u32 = float32::EXP_BIT_MASK;
    const SIGNIF_BIT_MASK: u32 = float32::SIGNIF_BIT_MASK;

    #[inline]
    fn to_raw_bits(self) -> u32 {
        self.to_bits()
    }
    #[inline]
    fn from_raw_bits(bits: u32) -> f32 {
        f32::from_bits(bits)
    }
    #[inline]
    fn widen(bits: u32) -> u64 {
        u64::from(bits)
    }
    #[inline]
    fn narrow(raw: u64) -> u32 {
        raw as u32
    }
}

impl FloatLayout for f64 {
    type Bits = u64;

    const BITS: u32 = float64::BITS;
    const SIGNIFICAND_WIDTH: u32 = float64::SIGNIFICAND_WIDTH;
    const EXP_BIAS: i32 = float64::EXP_BIAS;
    const MAX_EXPONENT: i32 = float64::MAX_EXPONENT;
    const MIN_EXPONENT: i32 = float64::MIN_EXPONENT;
    const MIN_SUB_EXPONENT: i32 = float64::MIN_SUB_EXPONENT;
    const EXP_WIDTH: u32 = float64::EXP_WIDTH;
    const EXP_SHIFT: u32 = float64::EXP_SHIFT;

    const SIGN_BIT_MASK: u64 = float64::SIGN_BIT_MASK;
    const EXP_BIT_MASK: u64 = float64::EXP_BIT_MASK;
    const SIGNIF_BIT_MASK: u64 = float64::SIGNIF_BIT_MASK;

    #[inline]
    fn to_raw_bits(self) -> u64 {
        self.to_bits()
    }
    #[inline]
    fn from_raw_bits(bits: u64) -> f64 {
        f64::from_bits(bits)
    }
    #[inline]
    fn widen(bits: u64) -> u64 {
        bits
    }
    #[inline]
    fn narrow(raw: u64) -> u64 {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition_holds<T: FloatLayout>() -> bool {
        let zero = T::Bits::zero();
        let all = T::SIGN_BIT_MASK | T::EXP_BIT_MASK | T::SIGNIF_BIT_MASK;
        all == !zero
            && T::SIGN_BIT_MASK & T::EXP_BIT_MASK == zero
            && T::SIGN_BIT_MASK & T::SIGNIF_BIT_MASK == zero
            && T::EXP_BIT_MASK & T::SIGNIF_BIT_MASK == zero
    }

    #[test]
    fn partition_generic() {
        assert!(partition_holds::<f32>());
        assert!(partition_holds::<f64>());
    }

    fn sign_of<T: FloatLayout>(x: T) -> bool {
        T::sign_field(x.to_raw_bits())
    }

    #[test]
    fn sign_field_generic() {
        assert!(!sign_of(0.0_f32));
        assert!(sign_of(-0.0_f32));
        assert!(!sign_of(f64::INFINITY));
        assert!(sign_of(f64::NEG_INFINITY));
    }

    #[test]
    fn trait_matches_modules() {
        assert_eq!(<f32 as FloatLayout>::SIGNIFICAND_WIDTH, 24);
        assert_eq!(<f32 as FloatLayout>::EXP_BIAS, 127);
        assert_eq!(<f32 as FloatLayout>::MIN_SUB_EXPONENT, -149);
        assert_eq!(<f64 as FloatLayout>::SIGNIFICAND_WIDTH, 53);
        assert_eq!(<f64 as FloatLayout>::EXP_BIAS, 1023);
        assert_eq!(<f64 as FloatLayout>::MIN_SUB_EXPONENT, -1074);
        assert_eq!(<f64 as FloatLayout>::EXP_BIT_MASK, float64::EXP_BIT_MASK);
    }

    #[test]
    fn fields_of_negative_one_and_a_half() {
        // -1.5 = -(1 + 2^-1) * 2^0
        let bits = (-1.5_f64).to_raw_bits();
        assert!(f64::sign_field(bits));
        assert_eq!(f64::exponent_field(bits), 1023);
        assert_eq!(f64::significand_field(bits), 1 << 51);

        let bits = (-1.5_f32).to_raw_bits();
        assert!(f32::sign_field(bits));
        assert_eq!(f32::exponent_field(bits), 127);
        assert_eq!(f32::significand_field(bits), 1 << 22);
    }

    #[test]
    fn fields_agree_with_integer_decode() {
        // integer_decode folds the implicit bit into the mantissa and
        // unbiases the exponent relative to an integer significand
        for &x in &[1.0_f64, 0.1, 6.02214076e23, 1e-300] {
            let bits = x.to_raw_bits();
            let (mantissa, exp, sign) = Float::integer_decode(x);
            assert_eq!(mantissa, f64::significand_field(bits) | (1 << f64::EXP_SHIFT));
            assert_eq!(
                i32::from(exp),
                f64::exponent_field(bits) as i32 - f64::EXP_BIAS - f64::EXP_SHIFT as i32
            );
            assert_eq!(sign, 1);
        }
    }

    #[test]
    fn narrow_truncates() {
        assert_eq!(f32::narrow(0x1_8000_0000), 0x8000_0000);
        assert_eq!(f32::widen(u32::MAX), 0xFFFF_FFFF);
    }
}
