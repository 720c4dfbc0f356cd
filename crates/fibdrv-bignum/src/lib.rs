//! # fibdrv-bignum
//!
//! Arbitrary-precision signed integers for the fibdrv Fibonacci engine.
//! Values are sign-magnitude over little-endian 32-bit words. Every
//! operation that can grow a buffer reports allocation failure as
//! [`BnError::Alloc`] instead of aborting.

pub(crate) mod additive;
pub mod arith;
pub mod bignum;
pub mod compare;
pub mod error;
pub(crate) mod karatsuba;
pub mod multiply;
pub mod render;
pub mod shift;

pub use additive::{add, subtract};
pub use arith::{Word, WORD_BITS};
pub use bignum::{copy, swap, BigInt};
pub use compare::{compare_magnitude_length, compare_value};
pub use error::BnError;
pub use multiply::{
    multiply, multiply_with, Karatsuba, Multiplier, Schoolbook, DEFAULT_KARATSUBA_THRESHOLD,
};
pub use render::render;
pub use shift::{shift_left, shift_right};
