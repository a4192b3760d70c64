/// Returns the candidate with the largest area.
///
/// Only a strictly greater area replaces the current pick, so on ties the
/// first candidate wins. The running maximum starts at zero, which means
/// zero-area candidates are never picked.
pub fn select_largest<T>(candidates: impl IntoIterator<Item = (T, f64)>) -> Option<(T, f64)> {
    let mut largest = None;
    let mut largest_area = 0.0;

    for (candidate, area) in candidates {
        if area > largest_area {
            largest_area = area;
            largest = Some(candidate);
        }
    }

    largest.map(|c| (c, largest_area))
}
