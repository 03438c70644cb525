use num_bigint::BigInt;
use num_traits::{Pow, Zero};

pub fn digit_length(x: &BigInt) -> usize {
    if x.is_zero() {
        return 1;
    }
    x.magnitude().to_str_radix(10).len()
}

pub fn pow10(m: usize) -> BigInt {
    Pow::pow(BigInt::from(10u32), m)
}

// Truncating quotient, remainder takes the dividend's sign, so
// x == high * 10^m + low holds exactly for any sign of x.
pub fn split_at(x: &BigInt, m: usize) -> (BigInt, BigInt) {
    let divisor = pow10(m);
    (x / &divisor, x % &divisor)
}
