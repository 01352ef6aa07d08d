//! Jaro and Jaro-Winkler string similarity.
//!
//! Both metrics return a score in `[0, 1]`, where `1` means identical.
//! Characters are compared per Unicode scalar value.

/// Parameters for the Winkler prefix bonus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinkler {
    /// The prefix bonus is only applied when the Jaro score is strictly above this.
    pub boost_threshold: f64,
    /// Maximum length of the common prefix that earns a bonus.
    pub prefix_size: usize,
}

/// Bonus weight per matching prefix character.
const PREFIX_SCALE: f64 = 0.1;

impl JaroWinkler {
    pub const fn new(boost_threshold: f64, prefix_size: usize) -> Self {
        Self {
            boost_threshold,
            prefix_size,
        }
    }

    /// Compute the Jaro-Winkler similarity of `a` and `b`.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let jaro = jaro_chars(&a, &b);
        if jaro <= self.boost_threshold {
            return jaro;
        }

        let limit = self.prefix_size.min(a.len()).min(b.len());
        let prefix = a
            .iter()
            .zip(&b)
            .take(limit)
            .take_while(|(x, y)| x == y)
            .count();

        jaro + PREFIX_SCALE * prefix as f64 * (1.0 - jaro)
    }
}

impl Default for JaroWinkler {
    /// Boost threshold 0.7, prefix of at most 4 characters
    fn default() -> Self {
        Self::new(0.7, 4)
    }
}

/// Compute the Jaro similarity of `a` and `b`.
pub fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    jaro_chars(&a, &b)
}

fn jaro_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Characters only match when they are at most this far apart
    let window = (a.len().max(b.len()) / 2).saturating_sub(1);

    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window).min(b.len() - 1);
        if start > end {
            continue;
        }
        for j in start..=end {
            if !b_matched[j] && b[j] == *ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let a_seq = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let b_seq = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let half_transpositions = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();
    let transpositions = half_transpositions as f64 / 2.0;

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions) / m) / 3.0
}
