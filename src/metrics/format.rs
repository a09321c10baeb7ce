//! Compact number formatting for metric cards

/// Render a population or difference as `"<x> M"` or `"<x> K"`
///
/// Values above one million use millions: a whole number when evenly
/// divisible, otherwise one decimal place. Everything else, negative values
/// included, is floor-divided by 1000, so `500` renders as `"0 K"` and
/// `-50_500` as `"-51 K"`.
pub fn format_compact_number(n: i64) -> String {
    if n > 1_000_000 {
        if n % 1_000_000 == 0 {
            return format!("{} M", n / 1_000_000);
        }
        return format!("{:.1} M", n as f64 / 1_000_000.0);
    }
    format!("{} K", n.div_euclid(1000))
}
