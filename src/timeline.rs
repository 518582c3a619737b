//! Progress mapping for the changelog timeline track.

/// Map the active node's position on the timeline to a fill percentage.
///
/// Nodes are laid out in chronological order, so the last index fills the
/// whole track. A single-node timeline is defined as fully progressed
/// (100%) — the lone release is the latest release — rather than dividing
/// by zero.
pub fn progress_percent(active_index: usize, total_count: usize) -> f64 {
    if total_count <= 1 {
        return 100.0;
    }
    let clamped = active_index.min(total_count - 1);
    clamped as f64 / (total_count - 1) as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_node_track() {
        assert_eq!(progress_percent(0, 3), 0.0);
        assert_eq!(progress_percent(1, 3), 50.0);
        assert_eq!(progress_percent(2, 3), 100.0);
    }

    #[test]
    fn test_single_node_is_full_not_nan() {
        let progress = progress_percent(0, 1);
        assert_eq!(progress, 100.0);
        assert!(!progress.is_nan());
    }

    #[test]
    fn test_empty_track_defined() {
        assert_eq!(progress_percent(0, 0), 100.0);
    }

    #[test]
    fn test_index_clamped_to_track() {
        assert_eq!(progress_percent(9, 3), 100.0);
    }
}
