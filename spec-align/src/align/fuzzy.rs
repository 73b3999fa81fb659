//! Fuzzy key matching.
//!
//! Keys of two records that do not match verbatim may still be the same key
//! spelled differently. A candidate is accepted when its edit distance to the
//! queried key, relative to the length of the queried key, stays strictly
//! below a threshold.

/// Edit distance between two strings, counted in characters.
///
/// Insertions, deletions, substitutions and transpositions of two adjacent
/// characters each cost one edit (optimal string alignment distance).
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Three rolling rows: i-2, i-1 and i.
    let mut before: Vec<usize> = vec![0; b.len() + 1];
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        current[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (previous[j] + 1)
                .min(current[j - 1] + 1)
                .min(previous[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(before[j - 2] + 1);
            }
            current[j] = best;
        }
        std::mem::swap(&mut before, &mut previous);
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Finds the candidate closest to `key`.
///
/// Returns `None` for an empty key or when no candidate satisfies
/// `distance / key_length < allowed_errors`. Ties on distance go to the
/// candidate seen first.
pub fn find_closest_key<'a, I>(candidates: I, key: &str, allowed_errors: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let length = key.chars().count();
    if length == 0 {
        return None;
    }

    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        let distance = edit_distance(candidate, key);
        if (distance as f64) / (length as f64) >= allowed_errors {
            continue;
        }
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best.map(|(candidate, _)| candidate)
}
