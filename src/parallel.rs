use crate::decimal::{digit_length, pow10, split_at};
use crate::karatsuba::karatsuba_mul;
use crate::PARALLEL_THRESHOLD;
use num_bigint::BigInt;

// Same decomposition as karatsuba_mul; the three sub-products are
// independent, so they can run on worker threads. Small operands stay
// sequential.
pub fn karatsuba_mul_par(x: &BigInt, y: &BigInt) -> BigInt {
    let n = std::cmp::max(digit_length(x), digit_length(y));
    if n <= PARALLEL_THRESHOLD {
        return karatsuba_mul(x, y);
    }
    let m = n / 2;
    let (a, b) = split_at(x, m);
    let (c, d) = split_at(y, m);
    let ((z2, z0), z1) = rayon::join(
        || {
            rayon::join(
                || karatsuba_mul_par(&a, &c),
                || karatsuba_mul_par(&b, &d),
            )
        },
        || karatsuba_mul_par(&(&a + &b), &(&c + &d)),
    );
    let middle = z1 - &z2 - &z0;
    z2 * pow10(2 * m) + middle * pow10(m) + z0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;
    proptest! {
        #[test]
        fn test_parallel_matches_sequential(a in any_bigint(0..60), b in any_bigint(0..60)) {
            assert_eq!(karatsuba_mul_par(&a, &b), karatsuba_mul(&a, &b));
        }
    }
    #[test]
    fn test_parallel_large_operands() {
        let a = decimal_repeated("3141592653", 200);
        let b = decimal_repeated("2718281828", 200);
        let parallel = karatsuba_mul_par(&a, &b);
        assert_eq!(parallel, karatsuba_mul(&a, &b));
        assert_eq!(parallel, &a * &b);
    }
    #[test]
    fn test_parallel_large_negative() {
        let a = -decimal_repeated("3141592653", 200);
        let b = decimal_repeated("2718281828", 200);
        assert_eq!(karatsuba_mul_par(&a, &b), &a * &b);
    }
}
