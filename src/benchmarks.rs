use criterion::{criterion_group, criterion_main, Criterion};
use decmul::karatsuba::karatsuba_mul;
use decmul::parallel::karatsuba_mul_par;
use num_bigint::{BigInt, BigUint};
use rand::{Rng, SeedableRng};

fn random_bigint(rng: &mut rand_chacha::ChaCha8Rng, digits: usize) -> BigInt {
    let digits: Vec<u8> = (0..digits).map(|_| rng.gen_range(0..10)).collect();
    let magnitude = BigUint::from_radix_be(&digits, 10).unwrap();
    let value = BigInt::from(magnitude);
    if rng.gen() {
        -value
    } else {
        value
    }
}

fn bench_karatsuba_mul_250(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 250);
    let b = random_bigint(&mut rng, 250);
    c.bench_function("karatsuba_mul_250", |bench| {
        bench.iter(|| karatsuba_mul(&a, &b))
    });
}

fn bench_karatsuba_mul_1k(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 1000);
    let b = random_bigint(&mut rng, 1000);
    c.bench_function("karatsuba_mul_1k", |bench| {
        bench.iter(|| karatsuba_mul(&a, &b))
    });
}

fn bench_karatsuba_mul_par_1k(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 1000);
    let b = random_bigint(&mut rng, 1000);
    c.bench_function("karatsuba_mul_par_1k", |bench| {
        bench.iter(|| karatsuba_mul_par(&a, &b))
    });
}

fn bench_backend_mul_1k(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 1000);
    let b = random_bigint(&mut rng, 1000);
    c.bench_function("backend_mul_1k", |bench| bench.iter(|| &a * &b));
}

criterion_group!(
    benches,
    bench_karatsuba_mul_250,
    bench_karatsuba_mul_1k,
    bench_karatsuba_mul_par_1k,
    bench_backend_mul_1k,
);
criterion_main!(benches);
