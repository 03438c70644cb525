pub mod decimal;
pub mod karatsuba;
pub mod parallel;
#[cfg(test)]
pub mod test_utils;

pub use crate::karatsuba::karatsuba_mul;
pub use crate::parallel::karatsuba_mul_par;

use num_bigint::BigInt;

pub(crate) const PARALLEL_THRESHOLD: usize = 256;

pub fn mul(x: &BigInt, y: &BigInt) -> BigInt {
    let n = std::cmp::max(decimal::digit_length(x), decimal::digit_length(y));
    if n > PARALLEL_THRESHOLD {
        karatsuba_mul_par(x, y)
    } else {
        karatsuba_mul(x, y)
    }
}
