use binary_ecc::{BinaryCurve, ElGamal, Gf16};
use rand::thread_rng;

fn main() {
    println!("=== Elliptic Curve Cryptography over GF(2^4) ===\n");

    let curve = BinaryCurve::new(Gf16::new(0b1000), Gf16::new(0b1001));

    demo_field();
    demo_addition_table(&curve);
    demo_cyclic_check(&curve);
    demo_elgamal(&curve);
}

/// Demonstrate GF(2^4) multiplication and print the inverse table
fn demo_field() {
    println!("--- GF(2^4) Arithmetic ---");
    println!("Reduction polynomial: x^4 + x + 1\n");

    let a = Gf16::new(0b0110);
    let b = Gf16::new(0b0111);
    println!("{} * {} = {}", a, b, a * b);
    println!("{} + {} = {}", a, b, a + b);

    println!("\n[Inverse Table]");
    for (i, entry) in binary_ecc::inverse_table().iter().enumerate() {
        match entry {
            Some(inv) => println!("{:2}: {}", i, inv),
            None => println!("{:2}: no inverse", i),
        }
    }
    println!();
}

/// Print the full addition table over the enumerated curve points
fn demo_addition_table(curve: &BinaryCurve) {
    let points = curve.points();
    println!("--- Curve y² + xy = x³ + {}·x² + {} ---", curve.a, curve.b);
    println!(
        "{} finite points, group order {} with infinity\n",
        points.len(),
        curve.group_order()
    );

    println!("[Addition Table]");
    for p in &points {
        for q in &points {
            println!("{} + {} = {}", p, q, curve.add(p, q));
        }
    }
    println!();
}

/// Walk the cyclic subgroups of two candidate generators
fn demo_cyclic_check(curve: &BinaryCurve) {
    println!("--- Cyclic Subgroup Check ---");

    let candidates = [
        curve.point(Gf16::new(0b1000), Gf16::new(0b0001)).unwrap(),
        curve.point(Gf16::new(0b0101), Gf16::new(0b0000)).unwrap(),
    ];

    for alpha in &candidates {
        println!("\nMultiples of {}:", alpha);
        println!("[ 0 multiplication] = point at infinity");

        let mut multiple = *alpha;
        let mut d = 1;
        loop {
            print!("[{:2} multiplication] = {}", d, multiple);
            if multiple.is_infinity() {
                println!(" ====> point at infinity");
                break;
            }
            println!();
            multiple = curve.add(&multiple, alpha);
            d += 1;
        }

        match curve.analyze_subgroup(alpha, curve.group_order()) {
            Ok(report) => println!(
                "order({}) = {}, generator: {}",
                alpha, report.order, report.is_generator
            ),
            Err(e) => println!("analysis failed: {}", e),
        }
    }
    println!();
}

/// Encrypt and decrypt a point with the ElGamal-style scheme
fn demo_elgamal(curve: &BinaryCurve) {
    println!("--- ElGamal Encryption ---");

    let generator = curve.point(Gf16::new(0b0101), Gf16::new(0b0000)).unwrap();
    let scheme = ElGamal::new(*curve, generator);

    let d = 7;
    let keys = scheme.keypair(d);
    let message = curve.point(Gf16::new(0b1011), Gf16::new(0b1001)).unwrap();

    println!("Generator   = {}", generator);
    println!("Private key = {}", d);
    println!("Public key  = {}", keys.public_key);
    println!("M           = {}", message);

    let k = 5;
    println!("\nEphemeral k = {}", k);
    let cipher = scheme.encrypt(&message, &keys.public_key, k);
    println!("C1 = {}", cipher.c1);
    println!("C2 = {}", cipher.c2);

    let decrypted = scheme.decrypt(&cipher, d);
    println!("Decrypted M = {}", decrypted);
    assert_eq!(decrypted, message);

    // Same exchange with a freshly drawn ephemeral scalar
    let k = scheme.random_ephemeral(&mut thread_rng());
    println!("\nRandom ephemeral k = {}", k);
    let cipher = scheme.encrypt(&message, &keys.public_key, k);
    println!("C1 = {}", cipher.c1);
    println!("C2 = {}", cipher.c2);
    println!("Decrypted M = {}", scheme.decrypt(&cipher, d));
}
