mod tests {
    use core::f32::consts::{FRAC_PI_2, PI, TAU};

    use embassy_time::Instant;
    use led_gauge::{Rgb, SelfTimedGauge, SharedSelfTimedGauge, color::BLACK, render_gauge};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    static SHARED_GAUGE: SharedSelfTimedGauge = SharedSelfTimedGauge::new();

    #[test]
    fn test_first_frame_has_no_delta() {
        let mut gauge = SelfTimedGauge::new();
        assert_eq!(gauge.delta_seconds(Instant::from_millis(5_000)), 0.0);
        assert_eq!(gauge.delta_seconds(Instant::from_millis(5_250)), 0.25);
        assert_eq!(gauge.last_update(), Some(Instant::from_millis(5_250)));
    }

    #[test]
    fn test_epoch_baseline_uses_uptime() {
        let mut gauge = SelfTimedGauge::with_epoch_baseline();
        assert_eq!(gauge.delta_seconds(Instant::from_millis(1_500)), 1.5);
    }

    #[test]
    fn test_clock_going_backwards_yields_zero() {
        let mut gauge = SelfTimedGauge::new();
        gauge.delta_seconds(Instant::from_millis(2_000));
        assert_eq!(gauge.delta_seconds(Instant::from_millis(1_000)), 0.0);
    }

    #[test]
    fn test_advance_accumulates_phase() {
        let mut gauge = SelfTimedGauge::new();
        assert_eq!(gauge.advance(Instant::from_millis(100), 1.0), 0.0);
        let phase = gauge.advance(Instant::from_millis(350), 1.0);
        assert!((phase - FRAC_PI_2).abs() < 1.0e-5);
        let phase = gauge.advance(Instant::from_millis(850), -1.0);
        assert!((phase - (FRAC_PI_2 - PI + TAU)).abs() < 1.0e-5);
    }

    #[test]
    fn test_render_at_matches_caller_owned_phase() {
        let mut gauge = SelfTimedGauge::new();
        let mut timed = [BLACK; 20];
        let mut manual = [BLACK; 20];
        let mut phase = 0.0;

        gauge.render_at(Instant::from_millis(40), &mut timed, 0.7, RED, GREEN, BLUE, 0.6);
        render_gauge(&mut manual, 0.7, RED, GREEN, BLUE, 0.6, &mut phase, 0.0);
        assert_eq!(timed, manual);

        gauge.render_at(Instant::from_millis(140), &mut timed, 0.7, RED, GREEN, BLUE, 0.6);
        render_gauge(&mut manual, 0.7, RED, GREEN, BLUE, 0.6, &mut phase, 0.1);
        assert_eq!(timed, manual);
        assert_eq!(gauge.phase(), phase);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = SelfTimedGauge::new();
        let mut second = SelfTimedGauge::new();
        let mut leds = [BLACK; 8];

        first.render_at(Instant::from_millis(0), &mut leds, 1.0, RED, GREEN, BLUE, 1.0);
        first.render_at(Instant::from_millis(200), &mut leds, 1.0, RED, GREEN, BLUE, 1.0);
        second.render_at(Instant::from_millis(200), &mut leds, 1.0, RED, GREEN, BLUE, 1.0);

        assert!(first.phase() > 0.0);
        assert_eq!(second.phase(), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut gauge = SelfTimedGauge::new();
        gauge.advance(Instant::from_millis(0), 1.0);
        gauge.advance(Instant::from_millis(300), 1.0);
        gauge.reset();
        assert_eq!(gauge, SelfTimedGauge::new());
    }

    #[test]
    fn test_render_with_monotonic_clock() {
        let mut gauge = SelfTimedGauge::new();
        let mut leds = [BLACK; 10];
        for _ in 0..3 {
            gauge.render(&mut leds, 1.0, RED, GREEN, BLUE, 0.9);
            assert!((0.0..TAU).contains(&gauge.phase()));
        }
        assert!(gauge.last_update().is_some());
        assert!(leds.iter().all(|led| *led != BLACK));
    }

    #[test]
    fn test_shared_gauge_matches_owned() {
        let mut owned = SelfTimedGauge::new();
        let mut shared_leds = [BLACK; 16];
        let mut owned_leds = [BLACK; 16];

        for (ms, speed) in [(10, 0.4), (60, 0.4), (400, -0.8), (1_000, 1.0)] {
            let now = Instant::from_millis(ms);
            SHARED_GAUGE.render_at(now, &mut shared_leds, 0.8, RED, GREEN, BLUE, speed);
            owned.render_at(now, &mut owned_leds, 0.8, RED, GREEN, BLUE, speed);
            assert_eq!(shared_leds, owned_leds);
            assert_eq!(SHARED_GAUGE.phase(), owned.phase());
        }

        SHARED_GAUGE.reset();
        assert_eq!(SHARED_GAUGE.phase(), 0.0);
    }
}
