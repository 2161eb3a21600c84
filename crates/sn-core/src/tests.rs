//! Unit tests for sn-core primitives.

#[cfg(test)]
mod time {
    use crate::{Clock, ManualClock, Timestamp};

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp(10);
        assert_eq!(t + 5, Timestamp(15));
        assert_eq!(t.offset(3), Timestamp(13));
        assert_eq!(Timestamp(15) - Timestamp(10), 5u64);
    }

    #[test]
    fn since_saturates_when_out_of_order() {
        assert_eq!(Timestamp(5).since(Timestamp(9)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Timestamp(250).to_string(), "250ms");
    }

    #[test]
    fn manual_clock_clones_share_state() {
        let clock = ManualClock::new(Timestamp(100));
        let handle = clock.clone();
        handle.advance(40);
        assert_eq!(clock.now(), Timestamp(140));
        clock.set(Timestamp(7));
        assert_eq!(handle.now(), Timestamp(7));
    }
}

#[cfg(test)]
mod geom {
    use crate::{Point, Polygon, Rect, Size};

    #[test]
    fn rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.origin(), Point::new(10, 20));
        assert_eq!(r.size(), Size::new(30, 40));
    }

    #[test]
    fn right_edge_does_not_overflow() {
        let r = Rect::new(i32::MAX, 0, 10, 10);
        assert_eq!(r.right(), i32::MAX as i64 + 10);
    }

    #[test]
    fn empty_sizes() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, -1).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn polygon_bounds() {
        let poly = Polygon::new(vec![
            Point::new(52, 115),
            Point::new(165, 175),
            Point::new(135, 190),
            Point::new(17, 130),
        ]);
        assert_eq!(poly.bounds(), Some(Rect::new(17, 115, 148, 75)));
        assert!(!poly.is_degenerate());
        assert_eq!(Polygon::default().bounds(), None);
    }

    #[test]
    fn offset_saturates_at_i32_limits() {
        assert_eq!(Point::new(i32::MAX - 100, 0).offset(165, 5), Point::new(i32::MAX, 5));
        assert_eq!(Point::new(i32::MIN + 1, 0).offset(-10, 0), Point::new(i32::MIN, 0));
    }

    #[test]
    fn bounds_of_extreme_polygon_saturate() {
        let poly = Polygon::new(vec![
            Point::new(i32::MIN, 0),
            Point::new(i32::MAX, 0),
            Point::new(0, 10),
        ]);
        assert_eq!(poly.bounds(), Some(Rect::new(i32::MIN, 0, i32::MAX, 10)));
    }
}

#[cfg(test)]
mod rng {
    use crate::GameRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = GameRng::new(12345);
        let mut r2 = GameRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.gen_range(0..1_000_000);
            let b: u64 = r2.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = GameRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(500u64..2_000);
            assert!((500..2_000).contains(&v));
        }
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = GameRng::new(3);
        let mut v: Vec<u32> = (0..10).collect();
        rng.shuffle(&mut v);
        v.sort_unstable();
        assert_eq!(v, (0..10).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, GameConfig, MsRange, Size};

    #[test]
    fn defaults_match_classic_tuning() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.attention.inattentive_ms, MsRange::new(6_000, 16_000));
        assert_eq!(cfg.attention.transition_ms, MsRange::new(500, 2_000));
        assert_eq!(cfg.attention.attentive_ms, MsRange::new(4_000, 8_000));
        assert_eq!(cfg.tick_period_ms, 20);
        assert_eq!(cfg.step_px, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_min_rejected() {
        let mut cfg = GameConfig::default();
        cfg.attention.transition_ms = MsRange::new(0, 100);
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn empty_range_rejected() {
        let mut cfg = GameConfig::default();
        cfg.attention.attentive_ms = MsRange::new(500, 500);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_tick_period_rejected() {
        let cfg = GameConfig { tick_period_ms: 0, ..GameConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn step_outside_slider_rejected() {
        let cfg = GameConfig { step_px: 21, ..GameConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_panel_rejected() {
        let cfg = GameConfig { panel: Size::new(0, 700), ..GameConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::EmptySize { what: "panel", .. })
        ));
    }

    #[test]
    fn range_contains_is_half_open() {
        let r = MsRange::new(500, 2_000);
        assert!(r.contains(500));
        assert!(r.contains(1_999));
        assert!(!r.contains(2_000));
    }
}
