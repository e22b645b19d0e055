#![forbid(unsafe_code)]

use std::{env, time::Instant};

use perc::PercolationStats;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = env::args().collect::<Vec<String>>();
    if args.len() != 3 {
        return Err("usage: perc <n> <trials>".into());
    }
    let n: usize = args[1].parse()?;
    let trials: usize = args[2].parse()?;

    let start = Instant::now();
    let stats = PercolationStats::run(n, trials)?;

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );
    println!("Finished in {} seconds", start.elapsed().as_secs_f64());

    Ok(())
}
