//! Fuzzy string similarity ratios.
//!
//! Scores are integers in `0..=100` and follow the fuzzywuzzy family of ratios:
//! similarity is the Indel (insert/delete) ratio `2 * LCS / (len_a + len_b)`,
//! computed over `char`s, and rounded half-to-even.
//!
//! - [`ratio`]: whole-string similarity.
//! - [`partial_ratio`]: best alignment of the shorter string inside the longer one,
//!   anchored on matching blocks.
//! - [`token_sort_ratio`] / [`token_set_ratio`]: word-order and word-set tolerant.
//! - [`weighted_ratio`]: best of the above with length-dependent scaling.

const UNBASE_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.90;
const LONG_PARTIAL_SCALE: f64 = 0.6;
const TRY_PARTIAL_LEN_RATIO: f64 = 1.5;
const LONG_LEN_RATIO: f64 = 8.0;
const PERFECT_WINDOW: f64 = 0.995;

/// Whole-string similarity.
pub fn ratio(s1: &str, s2: &str) -> u8 {
    if s1 == s2 {
        return 100;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0;
    }
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    to_score(indel_similarity(&a, &b))
}

/// Similarity of the best-aligned window of the longer string against the shorter one.
pub fn partial_ratio(s1: &str, s2: &str) -> u8 {
    if s1 == s2 {
        return 100;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0;
    }
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut best = 0.0_f64;
    for block in matching_blocks(&shorter, &longer) {
        let start = block.b.saturating_sub(block.a);
        let end = (start + shorter.len()).min(longer.len());
        let similarity = indel_similarity(&shorter, &longer[start..end]);
        if similarity > PERFECT_WINDOW {
            return 100;
        }
        best = best.max(similarity);
    }
    to_score(best)
}

/// Similarity after sorting both strings' words.
pub fn token_sort_ratio(s1: &str, s2: &str) -> u8 {
    token_sort(&full_process(s1), &full_process(s2), false)
}

/// Similarity over the intersection and differences of both strings' word sets.
pub fn token_set_ratio(s1: &str, s2: &str) -> u8 {
    token_set(&full_process(s1), &full_process(s2), false)
}

/// Best of several normalized comparisons, scaled by how different the lengths are.
pub fn weighted_ratio(s1: &str, s2: &str) -> u8 {
    let p1 = full_process(s1);
    let p2 = full_process(s2);
    if p1.is_empty() || p2.is_empty() {
        return 0;
    }

    let base = f64::from(ratio(&p1, &p2));
    let len1 = p1.chars().count() as f64;
    let len2 = p2.chars().count() as f64;
    let len_ratio = len1.max(len2) / len1.min(len2);

    if len_ratio < TRY_PARTIAL_LEN_RATIO {
        let sorted = f64::from(token_sort(&p1, &p2, false)) * UNBASE_SCALE;
        let set = f64::from(token_set(&p1, &p2, false)) * UNBASE_SCALE;
        return round_half_even(base.max(sorted).max(set));
    }

    let partial_scale = if len_ratio > LONG_LEN_RATIO {
        LONG_PARTIAL_SCALE
    } else {
        PARTIAL_SCALE
    };
    let partial = f64::from(partial_ratio(&p1, &p2)) * partial_scale;
    let partial_sorted = f64::from(token_sort(&p1, &p2, true)) * UNBASE_SCALE * partial_scale;
    let partial_set = f64::from(token_set(&p1, &p2, true)) * UNBASE_SCALE * partial_scale;

    round_half_even(base.max(partial).max(partial_sorted).max(partial_set))
}

/// Drops non-ASCII characters, replaces non-word characters with spaces, lowercases and trims.
pub fn full_process(s: &str) -> String {
    let replaced: String = s
        .chars()
        .filter(char::is_ascii)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    replaced.trim().to_string()
}

fn sorted_tokens(processed: &str) -> String {
    let mut tokens: Vec<&str> = processed.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort(p1: &str, p2: &str, partial: bool) -> u8 {
    if p1.is_empty() || p2.is_empty() {
        return 0;
    }
    let sorted1 = sorted_tokens(p1);
    let sorted2 = sorted_tokens(p2);
    if partial {
        partial_ratio(&sorted1, &sorted2)
    } else {
        ratio(&sorted1, &sorted2)
    }
}

fn token_set(p1: &str, p2: &str, partial: bool) -> u8 {
    use std::collections::BTreeSet;

    if p1.is_empty() || p2.is_empty() {
        return 0;
    }

    let tokens1: BTreeSet<&str> = p1.split_whitespace().collect();
    let tokens2: BTreeSet<&str> = p2.split_whitespace().collect();

    let join = |set: Vec<&str>| set.join(" ");
    let intersection = join(tokens1.intersection(&tokens2).copied().collect());
    let diff1to2 = join(tokens1.difference(&tokens2).copied().collect());
    let diff2to1 = join(tokens2.difference(&tokens1).copied().collect());

    let combined1to2 = format!("{} {}", intersection, diff1to2).trim().to_string();
    let combined2to1 = format!("{} {}", intersection, diff2to1).trim().to_string();

    let score = |x: &str, y: &str| {
        if partial {
            partial_ratio(x, y)
        } else {
            ratio(x, y)
        }
    };

    score(&intersection, &combined1to2)
        .max(score(&intersection, &combined2to1))
        .max(score(&combined1to2, &combined2to1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Block {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Matching blocks of `a` in `b`, found by recursively taking the longest common
/// substring of each unmatched region. Sorted, terminated by a `(len_a, len_b, 0)` sentinel.
pub(crate) fn matching_blocks(a: &[char], b: &[char]) -> Vec<Block> {
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut blocks = Vec::new();

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let found = longest_match(a, b, alo, ahi, blo, bhi);
        if found.size == 0 {
            continue;
        }
        if alo < found.a && blo < found.b {
            pending.push((alo, found.a, blo, found.b));
        }
        if found.a + found.size < ahi && found.b + found.size < bhi {
            pending.push((found.a + found.size, ahi, found.b + found.size, bhi));
        }
        blocks.push(found);
    }

    blocks.sort_unstable();
    blocks.push(Block {
        a: a.len(),
        b: b.len(),
        size: 0,
    });
    blocks
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
/// Earliest in `a` wins, then earliest in `b`.
fn longest_match(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
    let mut best = Block {
        a: alo,
        b: blo,
        size: 0,
    };
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];

    for i in alo..ahi {
        cur.fill(0);
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = prev[j - blo] + 1;
                cur[j - blo + 1] = k;
                if k > best.size {
                    best = Block {
                        a: i + 1 - k,
                        b: j + 1 - k,
                        size: k,
                    };
                }
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    best
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[b.len()]
}

fn indel_similarity(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    (2 * lcs_len(a, b)) as f64 / total as f64
}

fn to_score(similarity: f64) -> u8 {
    round_half_even(similarity * 100.0)
}

fn round_half_even(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 100.0) as u8
}
