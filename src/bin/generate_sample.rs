use anyhow::{Context, Result};

/// Seeded movie-attribute sampler over a splitmix64 stream.
struct MovieSampler {
    state: u64,
    spare_normal: Option<f64>,
}

impl MovieSampler {
    fn seeded(seed: u64) -> Self {
        MovieSampler {
            state: seed,
            spare_normal: None,
        }
    }

    fn next_bits(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_bits() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next_bits() % bound
    }

    /// Standard normal by the polar method; every second draw is the cached
    /// partner of the previous one.
    fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.spare_normal.take() {
            return z;
        }
        loop {
            let u = 2.0 * self.unit() - 1.0;
            let v = 2.0 * self.unit() - 1.0;
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                let factor = (-2.0 * s.ln() / s).sqrt();
                self.spare_normal = Some(v * factor);
                return u * factor;
            }
        }
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.standard_normal()
    }

    /// Heavy right tail, as popularity and vote counts have.
    fn log_normal(&mut self, mu: f64, sigma: f64) -> f64 {
        self.normal(mu, sigma).exp()
    }

    /// Index drawn in proportion to `weights`.
    fn weighted_index(&mut self, weights: &[u32]) -> usize {
        let total: u32 = weights.iter().sum();
        let mut ticket = self.below(u64::from(total)) as u32;
        for (i, &w) in weights.iter().enumerate() {
            if ticket < w {
                return i;
            }
            ticket -= w;
        }
        weights.len() - 1
    }
}

/// Language code with its relative weight and rating offset.
const LANGUAGES: [(&str, u32, f64); 9] = [
    ("en", 60, 0.0),
    ("fr", 8, 0.3),
    ("ja", 7, 0.6),
    ("es", 6, 0.1),
    ("ko", 5, 0.4),
    ("de", 4, 0.2),
    ("it", 4, 0.3),
    ("hi", 3, -0.2),
    ("zh", 3, 0.1),
];

const ROWS: usize = 2000;

fn main() -> Result<()> {
    let mut rng = MovieSampler::seeded(42);
    let weights: Vec<u32> = LANGUAGES.iter().map(|&(_, weight, _)| weight).collect();

    let output_path = "data.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating data.csv")?;
    writer.write_record([
        "id",
        "title",
        "original_language",
        "popularity",
        "vote_count",
        "vote_average",
        "release_date",
    ])?;

    for id in 1..=ROWS {
        let (language, _, offset) = LANGUAGES[rng.weighted_index(&weights)];
        let popularity = rng.log_normal(2.0, 1.0);
        let vote_count = rng.log_normal(5.0, 1.6).round() as u64;
        // Sparse votes pull ratings towards the extremes.
        let spread = if vote_count < 20 { 2.0 } else { 0.8 };
        let vote_average = rng.normal(6.3 + offset, spread).clamp(0.0, 10.0);
        let year = 1950 + rng.below(75);
        let month = 1 + rng.below(12);
        let day = 1 + rng.below(28);

        let release_date = if id % 41 == 0 {
            String::new()
        } else {
            format!("{year}-{month:02}-{day:02}")
        };
        let popularity = if id % 53 == 0 {
            String::new()
        } else {
            format!("{popularity:.3}")
        };

        writer.write_record([
            id.to_string(),
            format!("Movie {id:04}"),
            language.to_string(),
            popularity,
            vote_count.to_string(),
            format!("{vote_average:.1}"),
            release_date,
        ])?;
    }
    writer.flush()?;

    println!("Wrote {ROWS} movies to {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = MovieSampler::seeded(7);
        let mut b = MovieSampler::seeded(7);
        for _ in 0..16 {
            assert_eq!(a.normal(0.0, 1.0).to_bits(), b.normal(0.0, 1.0).to_bits());
        }
    }

    #[test]
    fn weighted_index_respects_zero_weights() {
        let mut rng = MovieSampler::seeded(1);
        for _ in 0..200 {
            assert_eq!(rng.weighted_index(&[0, 3, 0]), 1);
        }
    }

    #[test]
    fn unit_stays_in_range() {
        let mut rng = MovieSampler::seeded(3);
        assert!((0..1000).map(|_| rng.unit()).all(|u| (0.0..1.0).contains(&u)));
    }
}
