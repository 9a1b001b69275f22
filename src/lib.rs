//! Bit-layout constants for the IEEE 754 binary32 and binary64 formats.
//!
//! [`float32`] and [`float64`] each export the significand width, exponent
//! bias, minimum subnormal exponent and the sign, exponent and significand
//! masks. The masks are checked at compile time to partition the word.
//! [`FloatLayout`] exposes the same values to generic code, and
//! [`RawParts`] splits a bit pattern into its fields and back.
//!
//! ```
//! use ieee_layout::{float64, RawParts};
//!
//! let bits = 2.0_f64.to_bits();
//! assert_eq!((bits & float64::EXP_BIT_MASK) >> float64::EXP_SHIFT, 1024);
//! assert_eq!(bits & float64::SIGNIF_BIT_MASK, 0);
//!
//! let parts = RawParts::of(2.0_f64);
//! assert_eq!(parts.unbiased_exponent::<f64>(), Ok(1));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod float32;
pub mod float64;
pub mod layout;
pub mod types;

pub use layout::FloatLayout;
pub use types::{Error, RawParts};
