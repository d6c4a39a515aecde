use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-width arbitrary-precision integer. The payload is the two's-complement
/// bit pattern truncated to `bits`, stored unsigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApInt {
    bits: u32,
    value: BigUint,
}

impl ApInt {
    pub fn new(bits: u32, value: u64, signed: bool) -> Self {
        if signed {
            Self::from_bigint(bits, BigInt::from(value as i64))
        } else {
            Self::from_biguint(bits, BigUint::from(value))
        }
    }

    pub fn from_biguint(bits: u32, value: BigUint) -> Self {
        Self {
            bits,
            value: value & Self::mask(bits),
        }
    }

    /// Negative inputs are wrapped to their two's-complement pattern at `bits`.
    pub fn from_bigint(bits: u32, value: BigInt) -> Self {
        let pattern = if value.sign() == Sign::Minus {
            let modulus = BigInt::from(BigUint::one() << bits);
            let wrapped = ((value % &modulus) + &modulus) % &modulus;
            wrapped.to_biguint().unwrap_or_default()
        } else {
            value.to_biguint().unwrap_or_default()
        };
        Self::from_biguint(bits, pattern)
    }

    pub fn zero(bits: u32) -> Self {
        Self {
            bits,
            value: BigUint::zero(),
        }
    }

    pub fn all_ones(bits: u32) -> Self {
        Self {
            bits,
            value: Self::mask(bits),
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }

    /// Two's-complement signed reading of the pattern.
    pub fn to_bigint(&self) -> BigInt {
        if self.bits > 0 && self.value.bit(u64::from(self.bits) - 1) {
            BigInt::from(self.value.clone()) - BigInt::from(BigUint::one() << self.bits)
        } else {
            BigInt::from(self.value.clone())
        }
    }

    fn mask(bits: u32) -> BigUint {
        if bits == 0 {
            BigUint::zero()
        } else {
            (BigUint::one() << bits) - BigUint::one()
        }
    }
}

impl fmt::Display for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}i{}", self.value, self.bits)
    }
}

/// Arbitrary-precision float stand-in. Carries the IEEE 754 double bit pattern
/// so it can be hashed and interned alongside integer constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApFloat {
    bits: u64,
}

impl ApFloat {
    pub fn from_f64(value: f64) -> Self {
        Self {
            bits: value.to_bits(),
        }
    }

    pub fn nan() -> Self {
        Self::from_f64(f64::NAN)
    }

    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<f64>().ok().map(Self::from_f64)
    }

    pub fn value(&self) -> f64 {
        f64::from_bits(self.bits)
    }

    pub fn to_bits(&self) -> u64 {
        self.bits
    }
}

impl fmt::Display for ApFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
