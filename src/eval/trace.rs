//! Score-trace helpers for plotting consumers.

/// Extends every trace with its own last value up to the longest length.
///
/// Empty traces have no last value and stay empty.
///
/// # Examples
///
/// ```
/// use u_localsearch::eval::pad_traces;
///
/// let padded = pad_traces(&[vec![90.0, 95.0], vec![80.0, 85.0, 99.0, 100.0]]);
/// assert_eq!(padded[0], vec![90.0, 95.0, 95.0, 95.0]);
/// assert_eq!(padded[1].len(), 4);
/// ```
pub fn pad_traces(traces: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let longest = traces.iter().map(Vec::len).max().unwrap_or(0);
    traces
        .iter()
        .map(|trace| {
            let mut padded = trace.clone();
            if let Some(&last) = trace.last() {
                padded.resize(longest, last);
            }
            padded
        })
        .collect()
}
