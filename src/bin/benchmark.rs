//! Performance benchmark comparing the row evolution algorithms

use std::time::Instant;
use rule_raster::domain::{Algorithm, BitRow, Dimensions, Raster, RuleNumber, RuleTable, interesting_rules};

/// Average milliseconds per full raster for one algorithm
fn benchmark_raster(table: &RuleTable, width: usize, algorithm: Algorithm, iterations: u32) -> f64 {
    let dims = match Dimensions::from_width(width) {
        Ok(dims) => dims,
        Err(err) => panic!("benchmark size {}: {}", width, err),
    };

    let start = Instant::now();
    for _ in 0..iterations {
        let raster = Raster::render(table, dims, algorithm);
        std::hint::black_box(&raster);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Elementary Automaton Benchmark (rule 30) ===\n");

    let table = RuleTable::new(RuleNumber::new(30));
    let widths = [100, 1000, 2000, 5000, 10000];
    let iterations = 5;

    println!("{:>10} {:>12} {:>12} {:>14} {:>10}",
        "Width", "Naive", "BitSliced", "BitSliced+Par", "Speedup");
    println!("{:-<64}", "");

    for width in widths {
        let naive_ms = benchmark_raster(&table, width, Algorithm::Naive, iterations);
        let sliced_ms = benchmark_raster(&table, width, Algorithm::BitSliced, iterations);
        let par_ms = benchmark_raster(&table, width, Algorithm::BitSlicedParallel, iterations);

        let fastest = sliced_ms.min(par_ms);
        println!(
            "{:>10} {:>12.2} {:>12.2} {:>14.2} {:>9.1}x",
            format!("{}x{}", width, width / 2),
            naive_ms,
            sliced_ms,
            par_ms,
            naive_ms / fastest
        );
    }

    println!("\n=== Memory per row (width 10000) ===\n");

    let width = 10000;
    let cell_bytes = width; // 1 byte per Cell enum
    let bit_bytes = BitRow::new(width).memory_bytes();
    println!("Cell row: {:>8} bytes", cell_bytes);
    println!("Bit row:  {:>8} bytes", bit_bytes);
    println!("Reduction: {:>7.1}x", cell_bytes as f64 / bit_bytes as f64);

    println!("\n=== Interesting rules at 1000px ===\n");

    let start = Instant::now();
    for rule in interesting_rules() {
        let table = RuleTable::new(rule);
        let ms = benchmark_raster(&table, 1000, Algorithm::default(), 1);
        println!("Rule {:>3}: {:>8.2} ms", rule, ms);
    }
    println!("Total: {:?}", start.elapsed());
}
