//! Deterministic seeded sampling for paginated "shuffle" listings.
//!
//! A listing in random mode shuffles every candidate id with a seeded
//! Fisher–Yates pass and then slices one page out of the permutation. The
//! same (input order, seed) pair always yields the same permutation, so a
//! client that replays the seed gets stable pages across requests.

use chrono::Utc;
use utils::rng::Mulberry32;

/// One page of a seeded permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledPage<Id> {
    pub ids: Vec<Id>,
    pub has_more: bool,
    pub total: usize,
    /// The normalised seed the permutation was drawn with.
    pub seed: u32,
}

/// Reduce a caller-supplied seed to the 32-bit domain.
///
/// Absent seeds fall back to the low 32 bits of the current time in
/// milliseconds, which gives every fresh "shuffle" a new order.
pub fn normalize_seed(seed: Option<i64>) -> u32 {
    match seed {
        // Two's-complement truncation is reduction modulo 2^32.
        Some(seed) => seed as u32,
        None => Utc::now().timestamp_millis() as u32,
    }
}

/// Parse a seed from a request parameter.
///
/// Leading whitespace and an optional sign are accepted, then as many decimal
/// digits as follow; anything after the digits is ignored. Returns `None` when
/// there are no digits at all.
///
/// Digits are accumulated exactly, so a seed above 2^53 keeps its true low 32
/// bits. A JavaScript client parsing the same string rounds it to a double
/// first and may land on a different seed; only seeds the server has echoed
/// (always `u32`) are guaranteed to match across clients.
pub fn parse_seed(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value.wrapping_mul(10).wrapping_add(i64::from(byte - b'0'));
    }

    seen_digit.then(|| if negative { value.wrapping_neg() } else { value })
}

/// Return a seeded permutation of `items`; the input is left untouched.
pub fn shuffle_with_seed<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut rng = Mulberry32::new(seed);
    let mut result = items.to_vec();

    for i in (1..result.len()).rev() {
        let j = draw_index(&mut rng, i);
        result.swap(i, j);
    }

    result
}

/// Index in `[0, upper]` scaled from one PRNG draw.
fn draw_index(rng: &mut Mulberry32, upper: usize) -> usize {
    let scaled = (rng.next_f64() * (upper as f64 + 1.0)).floor() as usize;
    // A draw is strictly below 1.0, so this only guards against float rounding.
    scaled.min(upper)
}

/// Shuffle `all_ids` with `seed` and return the `[offset, offset + limit)` slice.
///
/// Never fails: an empty candidate set short-circuits without shuffling and an
/// offset past the end yields an empty page.
pub fn sample_page<Id: Clone>(
    all_ids: &[Id],
    seed: Option<i64>,
    offset: usize,
    limit: usize,
) -> SampledPage<Id> {
    let seed = normalize_seed(seed);
    let total = all_ids.len();

    if total == 0 {
        return SampledPage {
            ids: Vec::new(),
            has_more: false,
            total: 0,
            seed,
        };
    }

    let end = offset.saturating_add(limit);
    let ids = if offset >= total {
        Vec::new()
    } else {
        let shuffled = shuffle_with_seed(all_ids, seed);
        shuffled[offset..end.min(total)].to_vec()
    };

    SampledPage {
        ids,
        has_more: end < total,
        total,
        seed,
    }
}
