use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

pub fn bigint_from_decimal_digits(digits: &[u8], negative: bool) -> BigInt {
    let magnitude = BigUint::from_radix_be(digits, 10).unwrap();
    let value = BigInt::from(magnitude);
    if negative {
        -value
    } else {
        value
    }
}

pub fn any_bigint(digits: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    (
        proptest::collection::vec(0u8..10, digits),
        any::<bool>(),
    )
        .prop_map(|(digits, negative)| bigint_from_decimal_digits(&digits, negative))
}

pub fn nonnegative_bigint(digits: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    proptest::collection::vec(0u8..10, digits)
        .prop_map(|digits| bigint_from_decimal_digits(&digits, false))
}

pub fn decimal_repeated(pattern: &str, times: usize) -> BigInt {
    pattern.repeat(times).parse().unwrap()
}
