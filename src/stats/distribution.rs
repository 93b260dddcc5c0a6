use serde::Serialize;

/// Min, max and mean of a set of per-category counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Distribution {
    pub min: usize,
    pub max: usize,
    /// Arithmetic mean rounded half away from zero to one decimal.
    pub mean: f64,
}

impl Distribution {
    /// All zeros for an empty slice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_counts(counts: &[usize]) -> Self {
        let (Some(&min), Some(&max)) = (counts.iter().min(), counts.iter().max()) else {
            return Self::default();
        };
        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        Self {
            min,
            max,
            mean: (mean * 10.0).round() / 10.0,
        }
    }

    /// Mean with exactly one decimal, e.g. `2.8`.
    #[must_use]
    pub fn mean_display(&self) -> String {
        format!("{:.1}", self.mean)
    }
}

/// Sort key that orders `C2` before `C10`: text prefix, then the first number.
#[must_use]
pub fn natural_key(key: &str) -> (&str, u64, &str) {
    let digits_start = key.find(|c: char| c.is_ascii_digit()).unwrap_or(key.len());
    let (prefix, rest) = key.split_at(digits_start);
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, suffix) = rest.split_at(digits_end);
    (prefix, digits.parse().unwrap_or(0), suffix)
}

/// The first `limit` items plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing<T> {
    pub shown: Vec<T>,
    pub remaining: usize,
}

impl<T> Listing<T> {
    #[must_use]
    pub fn truncate(mut items: Vec<T>, limit: usize) -> Self {
        let remaining = items.len().saturating_sub(limit);
        items.truncate(limit);
        Self {
            shown: items,
            remaining,
        }
    }
}
