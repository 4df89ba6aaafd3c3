//! Benchmark command
//!
//! Times the jump-table engine against a plain linear scan on random letter draws.

use crate::core::{ALPHABET_LEN, LetterCounts, letter_index};
use crate::dictionary::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Vowel tiles, weighted roughly like the game's vowel pile
const VOWEL_PILE: &[u8] = b"AAAAAAAAAAAAAAAEEEEEEEEEEEEEEEEEEEEEIIIIIIIIIIIIIOOOOOOOOOOOOOUUUUU";

/// Consonant tiles, weighted roughly like the game's consonant pile
const CONSONANT_PILE: &[u8] = b"BBCCCDDDDDDFFGGGHHJKLLLLLMMMMNNNNNNNNPPPPQRRRRRRRRRSSSSSSSSSTTTTTTTTTVWXYZ";

/// Settings for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub queries: usize,
    /// Letters per draw
    pub letters: usize,
    pub seed: u64,
    /// Compare every result against the linear scan
    pub verify: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            queries: 1000,
            letters: 9,
            seed: 2014,
            verify: false,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub queries: usize,
    pub dictionary_size: usize,
    pub total_matches: usize,
    pub jump_duration: Duration,
    pub scan_duration: Duration,
    /// Average entries examined per query by the jump engine
    pub average_visited: f64,
    /// Average requirement checks per query by the jump engine
    pub average_comparisons: f64,
    /// Queries whose jump results differed from the scan (`None` when not verified)
    pub mismatches: Option<usize>,
}

impl BenchmarkResult {
    /// How many times faster the jump engine ran than the scan
    #[must_use]
    pub fn speedup(&self) -> f64 {
        let jump = self.jump_duration.as_secs_f64();
        if jump > 0.0 {
            self.scan_duration.as_secs_f64() / jump
        } else {
            0.0
        }
    }

    /// Fraction of dictionary entries the jump engine never examined
    #[must_use]
    pub fn skip_ratio(&self) -> f64 {
        if self.dictionary_size == 0 {
            0.0
        } else {
            1.0 - self.average_visited / self.dictionary_size as f64
        }
    }
}

/// Draw a random letters selection, mixing vowels and consonants
#[must_use]
pub fn random_draw<R: Rng>(rng: &mut R, letters: usize) -> LetterCounts {
    let mut counts = [0u8; ALPHABET_LEN];
    if letters == 0 {
        return LetterCounts::from_array(counts);
    }

    let vowels = rng.random_range(letters / 3..=letters.div_ceil(2));
    for drawn in 0..letters {
        let pile = if drawn < vowels { VOWEL_PILE } else { CONSONANT_PILE };
        let tile = pile[rng.random_range(0..pile.len())];
        if let Some(index) = letter_index(tile) {
            counts[index] = counts[index].saturating_add(1);
        }
    }
    LetterCounts::from_array(counts)
}

/// Run the benchmark
///
/// Queries are generated up front from `config.seed`, so two runs with the same
/// configuration use the same draws.
pub fn run_benchmark(dictionary: &Dictionary, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let draws: Vec<LetterCounts> = (0..config.queries)
        .map(|_| random_draw(&mut rng, config.letters))
        .collect();

    let pb = ProgressBar::new(draws.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut total_matches = 0;
    let mut total_visited = 0;
    let mut total_comparisons = 0;

    pb.set_message("jump table");
    let jump_start = Instant::now();
    for draw in &draws {
        let mut matches = dictionary.query(draw);
        total_matches += matches.by_ref().count();
        let stats = matches.stats();
        total_visited += stats.visited;
        total_comparisons += stats.comparisons;
        pb.inc(1);
    }
    let jump_duration = jump_start.elapsed();

    pb.set_position(0);
    pb.set_message("linear scan");
    let scan_start = Instant::now();
    for draw in &draws {
        std::hint::black_box(dictionary.brute_force(draw).count());
        pb.inc(1);
    }
    let scan_duration = scan_start.elapsed();
    pb.finish_with_message("Complete!");

    // The dictionary is read-only, so verification can fan out across threads
    let mismatches = config.verify.then(|| {
        draws
            .par_iter()
            .filter(|draw| !dictionary.query(draw).eq(dictionary.brute_force(draw)))
            .count()
    });

    let queries = draws.len().max(1) as f64;
    BenchmarkResult {
        queries: draws.len(),
        dictionary_size: dictionary.len(),
        total_matches,
        jump_duration,
        scan_duration,
        average_visited: total_visited as f64 / queries,
        average_comparisons: total_comparisons as f64 / queries,
        mismatches,
    }
}
