//! Critical value tables for significance classification.
//!
//! Provides tabulated critical values for:
//! - The F distribution at alpha = 0.05 and alpha = 0.01
//! - The Studentized range (q) distribution at alpha = 0.05
//!
//! Both tables are static, read-only data. Lookups never fail: indices
//! outside the tabulated ranges fall back to [`NEVER_SIGNIFICANT`], a
//! deliberately huge threshold no test statistic will exceed.
//!
//! The denominator-df lookup rule is **largest tabulated breakpoint <= df**;
//! a df above the last finite breakpoint uses the infinity row, and a df
//! below the smallest breakpoint uses the smallest row. The numerator df of
//! the F table only spans 1..=6; larger values clamp to the df1 = 6 column,
//! a documented approximation of the underlying distribution rather than an
//! exact lookup.

/// Sentinel critical value returned for out-of-table lookups.
///
/// Comparing any F or q statistic against this value classifies it as not
/// significant, which is the intended degraded behavior when degrees of
/// freedom or group counts fall outside the tabulated ranges.
pub const NEVER_SIGNIFICANT: f64 = 999.0;

/// Largest numerator df carried by the F tables.
const F_MAX_DF1: usize = 6;

/// Denominator-df breakpoints shared by both F tables. Rows beyond the last
/// breakpoint use the trailing infinity row.
const F_DF2_BREAKS: [usize; 11] = [1, 2, 3, 4, 5, 10, 20, 30, 40, 60, 120];

/// Upper critical values of the F distribution at alpha = 0.05, columns
/// df1 = 1..=6, rows following `F_DF2_BREAKS` plus the infinity row.
const F_TABLE_05: [[f64; F_MAX_DF1]; 12] = [
    [161.4, 199.5, 215.7, 224.6, 230.2, 234.0],
    [18.51, 19.00, 19.16, 19.25, 19.30, 19.33],
    [10.13, 9.55, 9.28, 9.12, 9.01, 8.94],
    [7.71, 6.94, 6.59, 6.39, 6.26, 6.16],
    [6.61, 5.79, 5.41, 5.19, 5.05, 4.95],
    [4.96, 4.10, 3.71, 3.48, 3.33, 3.22],
    [4.35, 3.49, 3.10, 2.87, 2.71, 2.60],
    [4.17, 3.32, 2.92, 2.69, 2.53, 2.42],
    [4.08, 3.23, 2.84, 2.61, 2.45, 2.34],
    [4.00, 3.15, 2.76, 2.53, 2.37, 2.25],
    [3.92, 3.07, 2.68, 2.45, 2.29, 2.18],
    [3.84, 3.00, 2.60, 2.37, 2.21, 2.10],
];

/// Upper critical values of the F distribution at alpha = 0.01, same
/// indexing as `F_TABLE_05`.
const F_TABLE_01: [[f64; F_MAX_DF1]; 12] = [
    [4052.0, 4999.5, 5403.0, 5625.0, 5764.0, 5859.0],
    [98.50, 99.00, 99.17, 99.25, 99.30, 99.33],
    [34.12, 30.82, 29.46, 28.71, 28.24, 27.91],
    [21.20, 18.00, 16.69, 15.98, 15.52, 15.21],
    [16.26, 13.27, 12.06, 11.39, 10.97, 10.67],
    [10.04, 7.56, 6.55, 5.99, 5.64, 5.39],
    [8.10, 5.85, 4.94, 4.43, 4.10, 3.87],
    [7.56, 5.39, 4.51, 4.02, 3.70, 3.47],
    [7.31, 5.18, 4.31, 3.83, 3.51, 3.29],
    [7.08, 4.98, 4.13, 3.65, 3.34, 3.12],
    [6.85, 4.79, 3.95, 3.48, 3.17, 2.96],
    [6.63, 4.61, 3.78, 3.32, 3.02, 2.80],
];

/// Error-df breakpoints for the q table, plus a trailing infinity row.
const Q_DF_BREAKS: [usize; 7] = [10, 15, 20, 30, 40, 60, 120];

/// Upper critical values of the Studentized range at alpha = 0.05, columns
/// k = 2..=6 groups, rows following `Q_DF_BREAKS` plus the infinity row.
const Q_TABLE_05: [[f64; 5]; 8] = [
    [3.15, 3.88, 4.33, 4.65, 4.91],
    [3.01, 3.67, 4.08, 4.37, 4.59],
    [2.95, 3.58, 3.96, 4.23, 4.45],
    [2.89, 3.49, 3.85, 4.10, 4.30],
    [2.86, 3.44, 3.79, 4.04, 4.23],
    [2.83, 3.40, 3.74, 3.98, 4.16],
    [2.80, 3.36, 3.68, 3.92, 4.10],
    [2.77, 3.31, 3.63, 3.86, 4.03],
];

/// Row index for a denominator df: largest breakpoint <= `df`, the infinity
/// row past the last breakpoint, the smallest row below the first.
fn floor_row(breaks: &[usize], rows: usize, df: usize) -> usize {
    if df > breaks[breaks.len() - 1] {
        return rows - 1;
    }
    breaks.iter().rposition(|&b| b <= df).unwrap_or(0)
}

/// Tabulated F critical value for (`df1`, `df2`) at `alpha`.
///
/// # Arguments
/// * `df1` - Numerator degrees of freedom; values above 6 clamp to 6
/// * `df2` - Denominator degrees of freedom; floored to a tabulated breakpoint
/// * `alpha` - Significance level, 0.05 or 0.01
///
/// # Returns
/// * The tabulated critical value, or [`NEVER_SIGNIFICANT`] when `df1` or
///   `df2` is zero or `alpha` is not a tabulated level
///
/// # Examples
///
/// ```
/// use enquete::analysis::f_critical;
///
/// // df2 = 25 floors to the df2 = 20 breakpoint
/// assert_eq!(f_critical(3, 25, 0.05), 3.10);
/// assert_eq!(f_critical(1, 4, 0.01), 21.20);
/// ```
#[must_use]
pub fn f_critical(df1: usize, df2: usize, alpha: f64) -> f64 {
    if df1 == 0 || df2 == 0 {
        return NEVER_SIGNIFICANT;
    }

    let table = match alpha {
        a if (a - 0.05).abs() < 0.001 => &F_TABLE_05,
        a if (a - 0.01).abs() < 0.001 => &F_TABLE_01,
        _ => return NEVER_SIGNIFICANT,
    };

    let col = df1.min(F_MAX_DF1) - 1;
    let row = floor_row(&F_DF2_BREAKS, table.len(), df2);
    table[row][col]
}

/// Tabulated Studentized-range critical value for `groups` groups and
/// `df` error degrees of freedom at `alpha`.
///
/// Only alpha = 0.05 is tabulated; any other level, or a group count
/// outside 2..=6, returns [`NEVER_SIGNIFICANT`].
#[must_use]
pub fn q_critical(groups: usize, df: usize, alpha: f64) -> f64 {
    if (alpha - 0.05).abs() >= 0.001 || !(2..=6).contains(&groups) || df == 0 {
        return NEVER_SIGNIFICANT;
    }

    let row = floor_row(&Q_DF_BREAKS, Q_TABLE_05.len(), df);
    Q_TABLE_05[row][groups - 2]
}
