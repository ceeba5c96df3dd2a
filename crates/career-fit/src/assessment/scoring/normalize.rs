/// Maps option `index` of `option_count` onto 0..=100.
///
/// Callers guarantee `option_count >= 2` (bank validation) and
/// `index < option_count` (answer resolution).
pub(crate) fn normalized_score(index: usize, option_count: usize) -> f64 {
    let top = option_count.saturating_sub(1);
    if top == 0 {
        return 0.0;
    }
    (index as f64 / top as f64) * 100.0
}
