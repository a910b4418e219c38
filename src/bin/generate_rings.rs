use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ParallelProgressIterator, ProgressIterator};
use primes::{PrimeSet, Sieve};
use rayon::prelude::*;
use serde::Serialize;

/// Walk rings of every size with prime-sized steps and record how full each gets.
#[derive(Debug, Parser)]
#[command(name = "generate_rings", about)]
struct Args {
    /// Where to write the CSV.
    #[arg(default_value = "output.csv")]
    output: PathBuf,

    /// Smallest ring size (inclusive).
    #[arg(long, default_value_t = 3)]
    min_size: u64,

    /// Largest ring size (exclusive).
    #[arg(long, default_value_t = 1000)]
    max_size: u64,
}

/// A ring of `size` slots with a cursor starting at slot 0.
struct Ring {
    size: u64,
    seen: HashSet<u64>,
    cursor: u64,
}

impl Ring {
    fn with_size(size: u64) -> Self {
        Ring {
            size,
            seen: HashSet::new(),
            cursor: 0,
        }
    }

    /// Advance by `step`. Returns false if the landing slot was already seen.
    fn visit(&mut self, step: u64) -> bool {
        let slot = (self.cursor + step) % self.size;
        if !self.seen.insert(slot) {
            return false;
        }
        self.cursor = slot;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct RingFill {
    size: u64,
    seen: u64,
    unseen: u64,
    proportion: f64,
}

fn fill_ring(size: u64, steps: impl Iterator<Item = u64>) -> RingFill {
    let mut ring = Ring::with_size(size);
    let mut seen = 0;
    for step in steps {
        if !ring.visit(step) {
            break;
        }
        seen += 1;
    }
    RingFill {
        size,
        seen,
        unseen: size - seen,
        proportion: seen as f64 / size as f64,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting computation");
    let sizes: Vec<u64> = (args.min_size..args.max_size).collect();
    let results: Vec<RingFill> = sizes
        .par_iter()
        .progress_count(sizes.len() as u64)
        .map(|&size| fill_ring(size, Sieve::new().iter()))
        .collect();

    println!("Writing to {}", args.output.display());
    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for row in results.iter().progress() {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    log::info!("Wrote {} rings", results.len());

    println!("Finding maximum fill");
    if let Some(best) = fullest(&results) {
        println!("MAX: {}: {:?}", best.size, best);
    }

    Ok(())
}

/// Ring with the highest proportion; the last one wins a tie.
fn fullest(results: &[RingFill]) -> Option<&RingFill> {
    results
        .iter()
        .max_by(|a, b| a.proportion.total_cmp(&b.proportion))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_start_correctly() {
        let first: Vec<u64> = Sieve::new().iter().take(10).collect();
        assert_eq!(first, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn ring_of_three() {
        // Slots: 2, (2+3)%3=2 repeats.
        assert_eq!(
            fill_ring(3, Sieve::new().iter()),
            RingFill {
                size: 3,
                seen: 1,
                unseen: 2,
                proportion: 1.0 / 3.0,
            }
        );
    }

    #[test]
    fn ring_of_five() {
        // Slots: 2, 0, 0 repeats.
        let fill = fill_ring(5, Sieve::new().iter());
        assert_eq!(fill.seen, 2);
        assert_eq!(fill.unseen, 3);
        assert_eq!(fill.proportion, 0.4);
    }

    #[test]
    fn seen_never_exceeds_size() {
        for size in 3..200 {
            let fill = fill_ring(size, Sieve::new().iter());
            assert!(fill.seen <= size);
            assert_eq!(fill.seen + fill.unseen, size);
            assert!((0.0..=1.0).contains(&fill.proportion));
        }
    }

    #[test]
    fn fullest_prefers_last_of_equal_maxima() {
        let fill = |size, proportion| RingFill {
            size,
            seen: 0,
            unseen: size,
            proportion,
        };
        let results = vec![fill(3, 0.2), fill(4, 0.6), fill(5, 0.6), fill(6, 0.1)];
        assert_eq!(fullest(&results).map(|r| r.size), Some(5));
        assert!(fullest(&[]).is_none());
    }

    #[test]
    fn fullest_over_default_range_is_size_ten() {
        let sizes: Vec<u64> = (3..1000).collect();
        let results: Vec<RingFill> = sizes
            .par_iter()
            .map(|&size| fill_ring(size, Sieve::new().iter()))
            .collect();
        let best = fullest(&results).unwrap();
        assert_eq!(best.size, 10);
        assert_eq!(best.proportion, 0.6);
    }

    #[test]
    fn csv_has_expected_header() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(fill_ring(4, Sieve::new().iter())).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(text.starts_with("size,seen,unseen,proportion\n"));
    }
}
