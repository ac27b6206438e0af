//! Binomial coefficients and the Bernstein basis

/// Rows of Pascal's triangle kept in the lookup table
pub const BINOMIAL_ROWS: usize = 32;

const fn pascal() -> [[u64; BINOMIAL_ROWS]; BINOMIAL_ROWS] {
    let mut table = [[0u64; BINOMIAL_ROWS]; BINOMIAL_ROWS];
    let mut n = 0;
    while n < BINOMIAL_ROWS {
        table[n][0] = 1;
        let mut k = 1;
        while k <= n {
            table[n][k] = table[n - 1][k - 1] + table[n - 1][k];
            k += 1;
        }
        n += 1;
    }
    table
}

static BINOMIAL: [[u64; BINOMIAL_ROWS]; BINOMIAL_ROWS] = pascal();

/// Binomial coefficient C(n, k); zero when `k > n`
///
/// Rows below [`BINOMIAL_ROWS`] come from a table built at compile time,
/// larger rows from the multiplicative formula.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    if n < BINOMIAL_ROWS {
        return BINOMIAL[n][k] as f64;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Bernstein basis polynomial `C(n,k)·t^k·(1−t)^(n−k)`
#[inline]
pub fn bernstein(t: f64, k: usize, n: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    binomial(n, k) * t.powi(k as i32) * (1.0 - t).powi((n - k) as i32)
}
