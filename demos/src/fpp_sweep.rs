// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Sweeps Bloom filter parameter combinations over a word list.
//!
//! For each `(index_bits, hash_count)` pair that fits the 128-bit digest
//! budget, builds a filter over the word list, probes it with random
//! five-letter words, and prints one table row with the resulting density
//! and false positive count. A false negative aborts the run: it would
//! disprove the filter's central guarantee.
//!
//! Usage: `fpp_sweep [wordlist-path]` (defaults to `wordlist.txt`, one word
//! per line).

use std::collections::HashSet;
use std::env;
use std::fs;

use anyhow::Context;
use anyhow::bail;
use bloomsieve::bloom::BloomFilter;
use bloomsieve::common::random::RandomSource;
use bloomsieve::common::random::XorShift64;
use bloomsieve::hash::DIGEST_BITS;

const PROBE_WORDS: usize = 5000;
const PROBE_WORD_LEN: usize = 5;
const PROBE_SEED: u64 = 0xddc0ffee;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn random_word(rng: &mut impl RandomSource, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.next_below(ALPHABET.len() as u64) as usize] as char)
        .collect()
}

struct ProbeOutcome {
    valid_words: usize,
    false_positives: usize,
}

fn probe_filter(
    filter: &BloomFilter,
    words: &HashSet<&str>,
    rng: &mut XorShift64,
) -> anyhow::Result<ProbeOutcome> {
    let mut valid_words = 0;
    let mut false_positives = 0;

    for _ in 0..PROBE_WORDS {
        let candidate = random_word(rng, PROBE_WORD_LEN);
        if filter.check_word(&candidate)? {
            if words.contains(candidate.as_str()) {
                valid_words += 1;
            } else {
                false_positives += 1;
            }
        } else if words.contains(candidate.as_str()) {
            bail!("bloom filter missed an inserted word: {candidate}");
        }
    }

    Ok(ProbeOutcome {
        valid_words,
        false_positives,
    })
}

fn print_row<S: AsRef<str>>(cells: [S; 5]) {
    let line = cells
        .iter()
        .map(|cell| format!("{:<15}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{line}");
}

fn run_combo(
    index_bits: u32,
    hash_count: u16,
    words: &[String],
    word_set: &HashSet<&str>,
) -> anyhow::Result<()> {
    let filter = BloomFilter::new(index_bits, hash_count, words)?;

    // Seed varies per combination so every row probes a different word
    // stream, but reruns stay reproducible.
    let combo = (u64::from(index_bits) << 16) | u64::from(hash_count);
    let mut rng = XorShift64::seeded(PROBE_SEED ^ combo);
    let outcome = probe_filter(&filter, word_set, &mut rng)?;

    print_row([
        index_bits.to_string(),
        hash_count.to_string(),
        format!("{:.3}", filter.density()),
        outcome.false_positives.to_string(),
        format!("{} / {}", outcome.valid_words, PROBE_WORDS),
    ]);
    Ok(())
}

fn sweep(words: &[String]) -> anyhow::Result<()> {
    let word_set: HashSet<&str> = words.iter().map(String::as_str).collect();

    print_row(["IndexBits", "HashCount", "Density", "False +ves", "Valid Words"]);

    // Smoke row: a large sparse array probed with a single hash.
    run_combo(26, 1, words, &word_set)?;

    for index_bits in (16..31).step_by(2) {
        let index_bits = index_bits as u32;
        let chunk_bits = 8 * index_bits.div_ceil(8);

        let mut hash_count: u16 = 1;
        while u32::from(hash_count) * chunk_bits < DIGEST_BITS {
            run_combo(index_bits, hash_count, words, &word_set)?;
            hash_count += 2;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let path = env::args().nth(1).unwrap_or_else(|| "wordlist.txt".into());
    let contents =
        fs::read_to_string(&path).with_context(|| format!("failed to read word list {path}"))?;
    let words: Vec<String> = contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    sweep(&words)
}
