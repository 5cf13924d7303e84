//! Example: Parse ranges and walk through interval arithmetic.
//!
//! Run with: cargo run --example range_ops -- "[0...10]" "[4...12]"

use std::env;

use gf_math::Range1d;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.len() < 2 {
        println!("Usage: range_ops <range> <range>");
        println!("\nExamples:");
        println!("  cargo run --example range_ops -- \"[0...10]\" \"[4...12]\"");
        println!("  cargo run --example range_ops -- \"[-1...1]\" \"[2...3]\"");
        return Ok(());
    }

    let a: Range1d = args[0].parse()?;
    let b: Range1d = args[1].parse()?;
    log::info!("Parsed {} and {}", a, b);

    println!("a = {}  (size {}, midpoint {})", a, a.size(), a.midpoint());
    println!("b = {}  (size {}, midpoint {})", b, b.size(), b.midpoint());

    println!("\n--- Predicates ---");
    println!("a contains b:   {}", a.contains(b));
    println!("a outside b:    {}", a.is_outside(b));
    println!("a overlaps b:   {}", a.overlaps(b));

    println!("\n--- Set operations ---");
    println!("union:          {}", a.union(b));
    let intersection = a.intersection(b);
    println!(
        "intersection:   {}{}",
        intersection,
        if intersection.is_empty() { "  (empty)" } else { "" }
    );

    println!("\n--- Arithmetic ---");
    println!("a + b:          {}", a + b);
    println!("a - b:          {}", a - b);
    println!("(a + b) - b:    {}", (a + b) - b);
    println!("a * -2:         {}", a * -2.0);
    println!("a / 0:          {}", a / 0.0);

    match a.checked_div(0.0) {
        Ok(range) => println!("checked a / 0:  {}", range),
        Err(err) => println!("checked a / 0:  {}", err),
    }

    Ok(())
}
