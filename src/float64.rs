//! Bit layout of IEEE 754 binary64 (`f64`).
//!
//! One sign bit, an 11-bit biased exponent at bit 52, and a 52-bit stored
//! significand in the low bits.

/// Total width of the representation in bits.
pub const BITS: u32 = 64;

/// Number of significand bits, including the implicit leading bit.
pub const SIGNIFICAND_WIDTH: u32 = 53;

/// Largest unbiased exponent of a finite value.
pub const MAX_EXPONENT: i32 = 1023;

/// Smallest unbiased exponent of a normal value.
pub const MIN_EXPONENT: i32 = 1 - MAX_EXPONENT;

/// Bias added to the true exponent before it is stored.
pub const EXP_BIAS: i32 = MAX_EXPONENT;

/// Exponent the smallest subnormal would have if it were normalized.
pub const MIN_SUB_EXPONENT: i32 = MIN_EXPONENT - (SIGNIFICAND_WIDTH as i32 - 1);

/// Width of the stored exponent field.
pub const EXP_WIDTH: u32 = BITS - SIGNIFICAND_WIDTH;

/// Bit offset of the exponent field.
pub const EXP_SHIFT: u32 = SIGNIFICAND_WIDTH - 1;

/// Isolates the sign bit.
pub const SIGN_BIT_MASK: u64 = 0x8000_0000_0000_0000;

/// Isolates the biased exponent field.
pub const EXP_BIT_MASK: u64 = 0x7FF0_0000_0000_0000;

/// Isolates the stored significand field.
pub const SIGNIF_BIT_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

// Masks partition the word.
const _: () = assert!(SIGN_BIT_MASK | EXP_BIT_MASK | SIGNIF_BIT_MASK == u64::MAX);
const _: () = assert!(SIGN_BIT_MASK & EXP_BIT_MASK == 0);
const _: () = assert!(SIGN_BIT_MASK & SIGNIF_BIT_MASK == 0);
const _: () = assert!(EXP_BIT_MASK & SIGNIF_BIT_MASK == 0);

const _: () = assert!((EXP_BIT_MASK >> EXP_SHIFT).count_ones() == EXP_WIDTH);
const _: () = assert!(SIGNIF_BIT_MASK.count_ones() == SIGNIFICAND_WIDTH - 1);
const _: () = assert!(SIGN_BIT_MASK.count_ones() == 1 && SIGN_BIT_MASK.leading_zeros() == 0);

const _: () = assert!(BITS == (core::mem::size_of::<f64>() * 8) as u32);
const _: () = assert!(SIGNIFICAND_WIDTH == f64::MANTISSA_DIGITS);
const _: () = assert!(MAX_EXPONENT == f64::MAX_EXP - 1);
const _: () = assert!(MIN_EXPONENT == f64::MIN_EXP - 1);
