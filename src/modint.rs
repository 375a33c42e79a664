use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

pub const MOD: u32 = 1_000_000_007;

/// An element of the field Z / 1_000_000_007.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModInt(u32);

impl ModInt {
    pub const fn new(v: u64) -> Self {
        Self((v % MOD as u64) as u32)
    }
    pub const fn zero() -> Self {
        Self(0)
    }
    pub const fn one() -> Self {
        Self(1)
    }
    pub const fn get(self) -> u32 {
        self.0
    }
    pub fn pow(self, mut e: u64) -> Self {
        let mut base = self;
        let mut ret = Self::one();
        while e > 0 {
            if e & 1 == 1 {
                ret *= base;
            }
            base *= base;
            e >>= 1;
        }
        ret
    }
}

impl From<usize> for ModInt {
    fn from(v: usize) -> Self {
        Self::new(v as u64)
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for ModInt {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let s = self.0 + rhs.0;
        Self(if s >= MOD { s - MOD } else { s })
    }
}

impl Sub for ModInt {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(if self.0 >= rhs.0 {
            self.0 - rhs.0
        } else {
            self.0 + MOD - rhs.0
        })
    }
}

impl Mul for ModInt {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self((self.0 as u64 * rhs.0 as u64 % MOD as u64) as u32)
    }
}

impl AddAssign for ModInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for ModInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for ModInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// `fact[i] = i!` for `i` in `0..=n`.
pub fn factorials(n: usize) -> Vec<ModInt> {
    let mut fact = vec![ModInt::one(); n + 1];
    for i in 1..=n {
        fact[i] = fact[i - 1] * ModInt::from(i);
    }
    fact
}
