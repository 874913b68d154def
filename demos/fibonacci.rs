use std::env;
use stream_rs::Stream;

/// Prints the first N Fibonacci numbers from a self-referential stream.
///
/// Usage: cargo run --example fibonacci [count]
fn main() {
    let count = match env::args().nth(1) {
        None => 20,
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            eprintln!("Expected a count, got \"{}\".", arg);
            std::process::exit(1);
        }),
    };

    // Each element after the second is the sum of the stream with its own tail.
    let fibs = Stream::recursive(|fibs| {
        let fibs = fibs.clone();
        Stream::cons(0u128, move || {
            Stream::cons(1, move || {
                let fibs = fibs.get();
                let rest = fibs.tail().unwrap_or_default();
                fibs.zip_with(&rest, |a: &u128, b: &u128| a.wrapping_add(*b))
            })
        })
    });

    let prefix = fibs.take(count);
    println!("{}", prefix.mk_string("[", ", ", "]"));
    println!("Forced so far: {}", fibs);
}
