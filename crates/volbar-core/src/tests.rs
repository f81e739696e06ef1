#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::controller::*;
    use crate::error::ConfigError;
    use crate::overscroll::*;
    use crate::signal::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const EPS: f32 = 1e-4;

    fn bar(initial: f32) -> VolumeBarController {
        VolumeBarController::new(VolumeBarConfig::default().with_initial(initial)).unwrap()
    }

    /// Simulate a drag of `delta` units upwards.
    fn drag(bar: &VolumeBarController, delta: f32) {
        bar.drag_changed(500.0, 500.0 - delta);
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let called = Rc::new(RefCell::new(0));

        let called_clone = called.clone();
        let id = sig.subscribe(move |_| {
            *called_clone.borrow_mut() += 1;
        });

        sig.set(42);
        assert!(!sig.set_distinct(42));
        assert!(sig.set_distinct(7));
        assert_eq!(*called.borrow(), 2);

        sig.unsubscribe(id);
        sig.set(1);
        assert_eq!(*called.borrow(), 2);
        assert_eq!(sig.subscriber_count(), 0);
    }

    #[test]
    fn test_signal_reuses_freed_slots() {
        let sig = signal(0);
        for _ in 0..100 {
            let id = sig.subscribe(|_| {});
            assert_eq!(id, 0);
            sig.unsubscribe(id);
        }
        let a = sig.subscribe(|_| {});
        let b = sig.subscribe(|_| {});
        sig.unsubscribe(a);
        assert_eq!(sig.subscribe(|_| {}), a);
        assert_ne!(a, b);
        assert_eq!(sig.subscriber_count(), 2);
    }

    #[test]
    fn test_subscriber_can_read_signal() {
        let sig = signal(1);
        let seen = Rc::new(RefCell::new(0));
        let (seen_clone, sig_clone) = (seen.clone(), sig.clone());
        sig.subscribe(move |_| *seen_clone.borrow_mut() = sig_clone.get());
        sig.set(5);
        assert_eq!(*seen.borrow(), 5);
    }

    #[test]
    fn test_config_defaults() {
        let c = VolumeBarConfig::default();
        assert_eq!(c.max, 300.0);
        assert_eq!(c.initial, 50.0);
        assert_eq!(c.validate().unwrap().max(), 300.0);
    }

    #[test]
    fn test_config_rejects_bad_max() {
        for max in [0.0, -1.0, f32::INFINITY] {
            let err = VolumeBarController::new(VolumeBarConfig::default().with_max(max))
                .err()
                .unwrap();
            assert_eq!(err, ConfigError::InvalidMax(max));
        }
        assert!(Bound::new(f32::NAN).is_err());
    }

    #[test]
    fn test_config_rejects_bad_fields() {
        let c = VolumeBarConfig::default();
        assert_eq!(
            c.with_initial(301.0).validate(),
            Err(ConfigError::InitialOutOfRange {
                initial: 301.0,
                max: 300.0
            })
        );
        assert_eq!(
            c.with_bar_width(0.0).validate(),
            Err(ConfigError::InvalidWidth(0.0))
        );
        assert_eq!(
            c.with_corner_radius(-2.0).validate(),
            Err(ConfigError::InvalidCornerRadius(-2.0))
        );
        assert_eq!(
            ConfigError::InvalidMax(0.0).to_string(),
            "bar maximum must be finite and greater than zero, got 0"
        );
    }

    #[test]
    fn test_settled_at_rest() {
        let b = bar(50.0);
        let f = b.frame();
        assert_eq!(f.scale, VisualScale::IDENTITY);
        assert_eq!(f.offset_y, 1.0);
        assert_eq!(f.regime, Regime::Settled);
    }

    #[test]
    fn test_overshoot_above_during_drag() {
        let b = bar(280.0);
        drag(&b, 50.0);
        let f = b.frame();
        assert_eq!(f.requested, 330.0);
        assert_eq!(f.scale.y, 1.05);
        assert_eq!(f.scale.x, 0.90);
        assert!((f.offset_y + 11.0).abs() < EPS);
        // Nothing committed mid-gesture.
        assert_eq!(b.value(), 280.0);
    }

    #[test]
    fn test_overshoot_below_during_drag() {
        let b = bar(10.0);
        drag(&b, -40.0);
        let f = b.frame();
        assert_eq!(f.requested, -30.0);
        assert_eq!(f.scale.y, 1.05);
        assert_eq!(f.scale.x, 0.90);
        assert!((f.offset_y - 11.0).abs() < EPS);
    }

    #[test]
    fn test_release_above_clamps_and_settles() {
        let b = bar(280.0);
        drag(&b, 50.0);
        assert_eq!(b.drag_ended(), 300.0);
        assert_eq!(b.value(), 300.0);
        assert_eq!(b.pending_delta(), 0.0);
        let f = b.frame();
        assert_eq!(f.scale, VisualScale::IDENTITY);
        assert_eq!(f.offset_y, 1.0);
        assert!(!b.is_dragging());
    }

    #[test]
    fn test_release_below_clamps_to_zero() {
        let b = bar(10.0);
        drag(&b, -40.0);
        assert_eq!(b.drag_ended(), 0.0);
        assert_eq!(b.pending_delta(), 0.0);
        assert_eq!(b.frame().regime, Regime::Settled);
    }

    #[test]
    fn test_cancel_commits_like_release() {
        let b = bar(100.0);
        drag(&b, 30.0);
        assert_eq!(b.drag_cancelled(), 130.0);
        assert_eq!(b.pending_delta(), 0.0);
    }

    #[test]
    fn test_non_finite_drag_keeps_value_in_range() {
        let b = bar(100.0);
        b.drag_changed(f32::INFINITY, f32::INFINITY);
        assert_eq!(b.drag_ended(), 100.0);
        assert!(b.bound().contains(b.value()));
        assert_eq!(b.pending_delta(), 0.0);

        drag(&b, 20.0);
        assert_eq!(b.drag_ended(), 120.0);
    }

    #[test]
    fn test_release_without_drag_is_noop() {
        let b = bar(100.0);
        assert_eq!(b.drag_ended(), 100.0);
        assert_eq!(b.pending_delta(), 0.0);
    }

    #[test]
    fn test_value_persists_across_gestures() {
        let b = bar(50.0);
        drag(&b, 100.0);
        b.drag_ended();
        drag(&b, -20.0);
        assert_eq!(b.requested(), 130.0);
        assert_eq!(b.drag_ended(), 130.0);
    }

    #[test]
    fn test_frames_skip_half_committed_state() {
        let b = bar(280.0);
        let frames = Rc::new(RefCell::new(Vec::new()));
        let frames_clone = frames.clone();
        b.subscribe_frames(move |f| frames_clone.borrow_mut().push(*f));

        drag(&b, 20.0);
        drag(&b, 50.0);
        b.drag_ended();

        let frames = frames.borrow();
        let regimes: Vec<_> = frames.iter().map(|f| f.regime).collect();
        assert_eq!(
            regimes,
            vec![Regime::Settled, Regime::Overshooting, Regime::Settled]
        );
        let last = frames.last().unwrap();
        assert_eq!((last.value, last.pending), (300.0, 0.0));
    }

    #[test]
    fn test_frame_matches_pure_function() {
        let b = bar(120.0);
        for d in [-500.0, -121.0, -1.0, 0.0, 60.0, 180.0, 181.0, 900.0] {
            drag(&b, d);
            let f = b.frame();
            let o = overscroll(b.bound(), b.value(), b.pending_delta());
            assert_eq!(f.scale, o.scale, "delta {d}");
            assert_eq!(f.offset_y, o.offset_y, "delta {d}");
            assert_eq!(f.regime == Regime::Overshooting, !b.bound().contains(f.requested));
        }
        let v = b.drag_ended();
        assert!(b.bound().contains(v));
    }
}
