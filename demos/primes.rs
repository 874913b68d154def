use std::env;
use stream_rs::Stream;

/// Lazy sieve: each prime filters its multiples out of everything after it.
fn sieve(candidates: Stream<u64>) -> Stream<u64> {
    let head = candidates.head_option().copied();
    match head {
        None => Stream::empty(),
        Some(p) => Stream::cons(p, move || {
            sieve(candidates.tail().unwrap_or_default().filter(move |n| n % p != 0))
        }),
    }
}

/// Prints the first N primes and a few facts about them.
///
/// Usage: cargo run --example primes [count]
fn main() {
    let count = match env::args().nth(1) {
        None => 25,
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            eprintln!("Expected a count, got \"{}\".", arg);
            std::process::exit(1);
        }),
    };

    let primes = sieve(Stream::iterate(2u64, |n| n + 1));
    let first = primes.take(count);

    println!("First {} primes: {}", count, first.join(" "));
    println!("Sum: {}", first.fold(0u64, |acc, p| acc + p));

    let twins = first
        .zip(&first.tail().unwrap_or_default())
        .filter(|(a, b)| b - a == 2);
    println!("Twin pairs: {}", twins.map(|(a, b)| format!("({}, {})", a, b)).join(" "));

    match first.index_of_slice(&[11, 13, 17], 0) {
        Some(i) => println!("11, 13, 17 starts at index {}", i),
        None => println!("11, 13, 17 not among the first {}", count),
    }
}
