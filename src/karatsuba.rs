use crate::decimal::{digit_length, pow10, split_at};
use num_bigint::{BigInt, BigUint};

fn single_digit(x: &BigInt) -> bool {
    *x.magnitude() < BigUint::from(10u32)
}

// (a*10^m + b)(c*10^m + d) = z2*10^2m + (z1 - z2 - z0)*10^m + z0
// where z1 = (a+b)(c+d), recovering the cross term ad + bc from one
// product instead of two.
pub fn karatsuba_mul(x: &BigInt, y: &BigInt) -> BigInt {
    if single_digit(x) || single_digit(y) {
        return x * y;
    }
    let n = std::cmp::max(digit_length(x), digit_length(y));
    let m = n / 2;
    let (a, b) = split_at(x, m);
    let (c, d) = split_at(y, m);
    let z2 = karatsuba_mul(&a, &c);
    let z0 = karatsuba_mul(&b, &d);
    let z1 = karatsuba_mul(&(a + b), &(c + d));
    let middle = z1 - &z2 - &z0;
    z2 * pow10(2 * m) + middle * pow10(m) + z0
}
