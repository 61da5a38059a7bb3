use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use score_import::data::model::{Score, COLUMNS};

/// Write a synthetic score file in the import layout.
#[derive(Debug, Parser)]
struct Args {
    /// Output CSV path
    #[arg(short, long, default_value = "sample_scores.csv")]
    output: PathBuf,
    /// Candidates per exam year
    #[arg(short, long, default_value_t = 500)]
    per_year: u32,
    /// Exam years to generate
    #[arg(long, value_delimiter = ',', default_value = "2019,2020,2021")]
    years: Vec<i32>,
    /// Seed for the deterministic generator
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// A score on the 0–10 scale in quarter-point steps, or absent when the
/// candidate did not sit the subject.
fn subject_score(rng: &mut SimpleRng, mean: f64, sit_probability: f64) -> Option<f64> {
    if rng.next_f64() > sit_probability {
        return None;
    }
    let raw = rng.gauss(mean, 1.6).clamp(0.0, 10.0);
    Some((raw * 4.0).round() / 4.0)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    // (mean, probability the subject was taken), in SUBJECTS order
    let subject_profile = [
        (6.5, 0.98),
        (6.8, 0.98),
        (6.4, 0.45),
        (5.6, 0.45),
        (5.2, 0.90),
        (6.6, 0.45),
        (5.0, 0.55),
        (6.3, 0.55),
        (7.6, 0.50),
    ];

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record(COLUMNS)?;

    let mut written = 0u64;
    for (year_idx, &year) in args.years.iter().enumerate() {
        for n in 0..args.per_year {
            let region_code = 1 + (rng.next_u64() % 64) as i32;
            let id = i64::from(region_code) * 1_000_000 + (year_idx as i64) * 100_000 + i64::from(n);

            let mut score = Score::new(id, year, region_code);
            for (slot, &(mean, sit)) in score.subjects_mut().into_iter().zip(subject_profile.iter()) {
                *slot = subject_score(&mut rng, mean, sit);
            }
            writer.serialize(&score)?;
            written += 1;
        }
    }
    writer.flush()?;

    println!(
        "Wrote {written} candidates across {} year(s) to {}",
        args.years.len(),
        args.output.display()
    );
    Ok(())
}
