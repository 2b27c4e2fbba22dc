use foundation::bounds::Span;
use foundation::math::inverse_lerp_clamped;

/// Animation progress through a scroll segment.
///
/// `offset` and `segment` share a coordinate space (document pixels). The
/// result is a pure function of `offset`: scrolling back reverses it
/// exactly.
pub fn segment_progress(offset: f64, segment: Span) -> f64 {
    if offset.is_nan() {
        return 0.0;
    }
    inverse_lerp_clamped(segment.start, segment.end, offset)
}

#[cfg(test)]
mod tests {
    use super::segment_progress;
    use foundation::bounds::Span;

    #[test]
    fn endpoints_and_midpoint() {
        let s = Span::new(100.0, 300.0);
        assert_eq!(segment_progress(100.0, s), 0.0);
        assert_eq!(segment_progress(200.0, s), 0.5);
        assert_eq!(segment_progress(300.0, s), 1.0);
        assert_eq!(segment_progress(-50.0, s), 0.0);
        assert_eq!(segment_progress(1e9, s), 1.0);
        assert_eq!(segment_progress(f64::NAN, s), 0.0);
    }

    #[test]
    fn monotonic_forward() {
        let s = Span::new(0.0, 1200.0);
        let mut last = 0.0;
        for step in -100..1400 {
            let p = segment_progress(step as f64, s);
            assert!(p >= last, "regressed at {step}");
            last = p;
        }
    }

    #[test]
    fn reversal_retraces_exactly() {
        let s = Span::new(240.0, 1440.0);
        let at = |i: i32| segment_progress(240.0 + i as f64 * 15.0, s);

        // Scroll forward to the middle of the segment, then turn around.
        let forward: Vec<f64> = (0..=40).map(at).collect();
        let backward: Vec<f64> = (0..=40).rev().map(at).collect();
        let mut retraced = backward.clone();
        retraced.reverse();
        assert_eq!(forward, retraced);

        // No jump at the turning point.
        assert_eq!(forward.last(), backward.first());
        for pair in backward.windows(2) {
            assert!(pair[0] >= pair[1]);
            assert!(pair[0] - pair[1] <= 15.0 / 1200.0 + 1e-12);
        }
    }
}
