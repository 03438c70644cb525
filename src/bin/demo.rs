use decmul::karatsuba_mul;
use num_bigint::BigInt;

fn show(label: &str, x: &str, y: &str) {
    let x: BigInt = x.parse().unwrap();
    let y: BigInt = y.parse().unwrap();
    println!("{}:", label);
    println!("{} x {} = {}", x, y, karatsuba_mul(&x, &y));
    println!("{}", "-".repeat(50));
}

fn main() {
    println!("Karatsuba multiplication");
    println!("{}", "=".repeat(50));
    show("Best case", "7", "8");
    show("Average case", "1234", "5678");
    show(
        "Worst case",
        "12345678901234567890123456789012345678901234567890",
        "98765432109876543210987654321098765432109876543210",
    );
}
