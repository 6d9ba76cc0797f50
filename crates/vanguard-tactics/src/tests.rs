#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_abs_diff_eq;
    use glam::DVec2;

    use vanguard_core::config::PathSegmentSpec;
    use vanguard_core::constants::PLAYER_FALLBACK_MARGIN;
    use vanguard_core::enums::{ShipClass, TacticPhase};
    use vanguard_core::types::Bounds;

    use crate::evaluator::PathEvaluator;
    use crate::path::{player_fallback, resolve, sinus_of, ResolveContext, SinusWave};
    use crate::profiles::get_profile;
    use crate::tactic::{Behavior, Tactic, TacticContext, Weave};

    fn screen() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    fn context(anchor: DVec2, player: Option<DVec2>) -> ResolveContext {
        ResolveContext {
            bounds: screen(),
            anchor,
            time_ms: 0.0,
            speed: 0.1,
            player,
        }
    }

    fn frame(delta_ms: f64, player: Option<DVec2>) -> TacticContext {
        TacticContext {
            bounds: screen(),
            player,
            delta_ms,
        }
    }

    // ---- Segment resolution ----

    #[test]
    fn test_coordinate_resolves_from_screen_fractions() {
        let segment = PathSegmentSpec::coordinate(0.5, 0.2);
        let point = resolve(&segment, &context(DVec2::new(13.0, 77.0), None)).unwrap();
        assert_eq!(point, DVec2::new(400.0, 120.0));
    }

    #[test]
    fn test_player_target_full_approach_is_player_position() {
        let segment = PathSegmentSpec::player_target(1.0);
        let player = DVec2::new(321.0, 456.0);
        for anchor in [DVec2::ZERO, DVec2::new(700.0, -50.0), DVec2::new(-20.0, 900.0)] {
            let point = resolve(&segment, &context(anchor, Some(player))).unwrap();
            assert_abs_diff_eq!(point.x, player.x, epsilon = 1e-9);
            assert_abs_diff_eq!(point.y, player.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_player_target_partial_approach_interpolates_from_anchor() {
        let segment = PathSegmentSpec::player_target(0.5);
        let ctx = context(DVec2::new(100.0, 100.0), Some(DVec2::new(500.0, 400.0)));
        assert_eq!(resolve(&segment, &ctx).unwrap(), DVec2::new(300.0, 250.0));
    }

    #[test]
    fn test_player_target_without_player_exits_below_screen() {
        let segment = PathSegmentSpec::player_target(0.5);
        let point = resolve(&segment, &context(DVec2::new(100.0, 100.0), None)).unwrap();
        assert!(PLAYER_FALLBACK_MARGIN > 0.0);
        assert_eq!(point, DVec2::new(400.0, 600.0 + PLAYER_FALLBACK_MARGIN));
        assert_eq!(point, player_fallback(&screen()));
    }

    #[test]
    fn test_sinus_resolves_to_wrapped_target() {
        let inner = PathSegmentSpec::coordinate(0.25, 0.75);
        let wrapped = inner.clone().with_sinus(80.0, 0.01);
        let ctx = context(DVec2::ZERO, None);
        assert_eq!(resolve(&wrapped, &ctx), resolve(&inner, &ctx));
        assert_eq!(sinus_of(&wrapped), Some(SinusWave::new(80.0, 0.01)));
        assert_eq!(sinus_of(&inner), None);
    }

    #[test]
    fn test_non_finite_segment_does_not_resolve() {
        let segment = PathSegmentSpec::coordinate(f64::NAN, 0.5);
        assert!(resolve(&segment, &context(DVec2::ZERO, None)).is_none());
    }

    // ---- Sine wave ----

    #[test]
    fn test_sinus_lateral_offset_is_perpendicular_to_travel() {
        let wave = SinusWave::new(100.0, 1.0);

        let offset = wave.lateral_offset(FRAC_PI_2, 0.0);
        assert_abs_diff_eq!(offset.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(offset.y, 100.0, epsilon = 1e-5);

        let offset = wave.lateral_offset(FRAC_PI_2, FRAC_PI_2);
        assert_abs_diff_eq!(offset.x, -100.0, epsilon = 1e-5);
        assert_abs_diff_eq!(offset.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sinus_rotation_adjustment_follows_wave_derivative() {
        let wave = SinusWave::new(100.0, 1.0);
        assert_abs_diff_eq!(wave.angle_adjustment(0.0, 100.0), FRAC_PI_4, epsilon = 1e-5);
        assert_abs_diff_eq!(wave.angle_adjustment(FRAC_PI_2, 100.0), 0.0, epsilon = 1e-5);
        // Swinging back the other way banks the other way.
        assert!(wave.angle_adjustment(PI, 100.0) < 0.0);
    }

    // ---- Path evaluator ----

    #[test]
    fn test_evaluator_interpolates_along_leg() {
        let mut path = PathEvaluator::new(
            vec![PathSegmentSpec::coordinate(0.5, 0.5)],
            0.1,
            DVec2::new(400.0, 0.0),
            DVec2::ZERO,
        );
        let sample = path.advance(1500.0, 1500.0, screen(), None);
        assert!(!sample.finished);
        assert_abs_diff_eq!(sample.position.x, 400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sample.position.y, 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sample.rotation, FRAC_PI_2, epsilon = 1e-9);
        assert_eq!(sample.wave_offset, DVec2::ZERO);
    }

    #[test]
    fn test_evaluator_carries_frame_time_across_waypoints() {
        let mut path = PathEvaluator::new(
            vec![
                PathSegmentSpec::coordinate(0.5, 0.5),
                PathSegmentSpec::coordinate(0.875, 0.5),
            ],
            1.0,
            DVec2::new(400.0, 0.0),
            DVec2::ZERO,
        );

        let sample = path.advance(300.0, 300.0, screen(), None);
        assert_eq!(sample.position, DVec2::new(400.0, 300.0));
        assert_eq!(path.segment_index(), 1);
        assert_abs_diff_eq!(path.heading(), 0.0, epsilon = 1e-9);

        let sample = path.advance(150.0, 450.0, screen(), None);
        assert_abs_diff_eq!(sample.position.x, 550.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sample.position.y, 300.0, epsilon = 1e-9);

        let sample = path.advance(200.0, 650.0, screen(), None);
        assert!(sample.finished);
        assert!(path.is_finished());
        assert_eq!(sample.position, DVec2::new(700.0, 300.0));
    }

    #[test]
    fn test_evaluator_re_resolves_player_target_every_frame() {
        let mut path = PathEvaluator::new(
            vec![PathSegmentSpec::player_target(1.0)],
            1.0,
            DVec2::ZERO,
            DVec2::ZERO,
        );
        let first = path.advance(10.0, 10.0, screen(), Some(DVec2::new(0.0, 100.0)));
        assert_abs_diff_eq!(first.position.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.position.y, 10.0, epsilon = 1e-9);

        // The player slides right; the same leg now bends toward them.
        let second = path.advance(10.0, 20.0, screen(), Some(DVec2::new(100.0, 10.0)));
        assert!(second.position.x > 15.0);
        assert!(second.position.y < 5.0);
    }

    #[test]
    fn test_evaluator_holds_when_segment_cannot_resolve() {
        let mut path = PathEvaluator::new(
            vec![
                PathSegmentSpec::coordinate(f64::NAN, 0.5),
                PathSegmentSpec::coordinate(0.5, 1.0),
            ],
            0.1,
            DVec2::new(400.0, 0.0),
            DVec2::ZERO,
        );
        let sample = path.advance(1000.0, 1000.0, screen(), None);
        assert!(sample.position.is_finite());
        assert!(!sample.finished);
        assert_abs_diff_eq!(sample.position.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_evaluator_offsets_every_waypoint() {
        let mut path = PathEvaluator::new(
            vec![PathSegmentSpec::coordinate(0.5, 0.5)],
            10.0,
            DVec2::new(420.0, 0.0),
            DVec2::new(20.0, 0.0),
        );
        let sample = path.advance(100.0, 100.0, screen(), None);
        assert!(sample.finished);
        assert_eq!(sample.position, DVec2::new(420.0, 300.0));
    }

    #[test]
    fn test_evaluator_applies_sinus_offset_and_bank() {
        let frequency = 0.01;
        let mut path = PathEvaluator::new(
            vec![PathSegmentSpec::coordinate(0.5, 1.0).with_sinus(50.0, frequency)],
            0.1,
            DVec2::new(400.0, 0.0),
            DVec2::ZERO,
        );
        // Halfway down the leg with the wave at its crest: full
        // displacement, and neither the wave nor its envelope is changing.
        let time = FRAC_PI_2 / frequency;
        let sample = path.advance(3000.0, time, screen(), None);
        assert_abs_diff_eq!(sample.position.x, 350.0, epsilon = 1e-6);
        assert_abs_diff_eq!(sample.position.y, 300.0, epsilon = 1e-6);
        assert_abs_diff_eq!(sample.rotation, FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_evaluator_sinus_leg_starts_and_ends_on_its_waypoints() {
        let mut path = PathEvaluator::new(
            vec![
                PathSegmentSpec::coordinate(0.5, 0.5).with_sinus(40.0, 0.004),
                PathSegmentSpec::coordinate(0.5, 1.0),
            ],
            0.1,
            DVec2::new(400.0, 0.0),
            DVec2::ZERO,
        );
        // Crest of the wave right at the start of the leg.
        let start = FRAC_PI_2 / 0.004;
        let first = path.advance(1e-6, start, screen(), None);
        assert_abs_diff_eq!(first.position.x, 400.0, epsilon = 1e-3);

        let sample = path.advance(3000.0, start + 3000.0, screen(), None);
        assert_eq!(path.segment_index(), 1);
        assert_abs_diff_eq!(sample.position.x, 400.0, epsilon = 1e-6);
        assert_abs_diff_eq!(sample.position.y, 300.0, epsilon = 1e-6);
    }

    #[test]
    fn test_evaluator_sinus_path_moves_smoothly_across_legs() {
        let (amplitude, frequency, speed) = (40.0, 0.004, 0.12);
        let mut path = PathEvaluator::new(
            vec![
                PathSegmentSpec::coordinate(0.5, 0.3).with_sinus(amplitude, frequency),
                PathSegmentSpec::player_target(0.6),
                PathSegmentSpec::coordinate(0.5, 1.3),
            ],
            speed,
            DVec2::new(400.0, -48.0),
            DVec2::ZERO,
        );
        let player = Some(DVec2::new(400.0, 540.0));
        let dt = 1000.0 / 60.0;
        // The first leg is 228px long: 1900ms at this speed.
        let first_leg_ms = 228.0 / speed;
        let limit = (speed + amplitude * (frequency + PI / first_leg_ms)) * dt + 1e-9;

        let mut previous = DVec2::new(400.0, -48.0);
        let mut time = 0.0;
        let mut largest: f64 = 0.0;
        while !path.is_finished() {
            time += dt;
            let sample = path.advance(dt, time, screen(), player);
            largest = largest.max(sample.position.distance(previous));
            previous = sample.position;
            assert!(time < 20_000.0, "path never finished");
        }
        assert!(largest <= limit, "step of {largest}px exceeds {limit}px");
        assert!(time > first_leg_ms);
    }

    // ---- Tactics ----

    #[test]
    fn test_tactic_waits_for_start_delay() {
        let velocity = DVec2::new(0.0, 0.2);
        let mut tactic = Tactic::straight(velocity).with_start_delay(100.0);

        let update = tactic.advance(&frame(50.0, None));
        assert_eq!(update.phase, TacticPhase::Pending);
        assert_eq!(update.velocity, None);

        let update = tactic.advance(&frame(60.0, None));
        assert_eq!(update.phase, TacticPhase::Active);
        assert_eq!(update.velocity, Some(velocity));
        assert_abs_diff_eq!(update.rotation.unwrap(), FRAC_PI_2, epsilon = 1e-9);

        // Velocity is handed over once; physics integrates it afterwards.
        let update = tactic.advance(&frame(16.0, None));
        assert_eq!(update.velocity, None);
        assert_eq!(update.position, None);
    }

    #[test]
    fn test_path_tactic_completes_and_coasts() {
        let path = PathEvaluator::new(
            vec![PathSegmentSpec::coordinate(0.5, 0.5)],
            1.0,
            DVec2::new(400.0, 0.0),
            DVec2::ZERO,
        );
        let mut tactic = Tactic::path(path, true);

        let update = tactic.advance(&frame(400.0, None));
        assert_eq!(update.phase, TacticPhase::Complete);
        assert!(tactic.is_complete());
        assert_eq!(update.position, Some(DVec2::new(400.0, 300.0)));
        let velocity = update.velocity.unwrap();
        assert_abs_diff_eq!(velocity.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(velocity.y, 1.0, epsilon = 1e-9);

        // Completed tactics leave the ship alone.
        assert_eq!(tactic.advance(&frame(16.0, None)).position, None);
    }

    #[test]
    fn test_path_tactic_without_facing_leaves_rotation() {
        let path = PathEvaluator::new(
            vec![PathSegmentSpec::coordinate(0.5, 1.0)],
            0.1,
            DVec2::new(400.0, 0.0),
            DVec2::ZERO,
        );
        let mut tactic = Tactic::path(path, false);
        let update = tactic.advance(&frame(16.0, None));
        assert!(update.position.is_some());
        assert_eq!(update.rotation, None);
        assert!(matches!(tactic.behavior(), Behavior::Path(_)));
    }

    #[test]
    fn test_weave_descends_with_lateral_sine() {
        let wave = SinusWave::new(10.0, 0.01);
        let mut tactic = Tactic::weave(Weave::new(DVec2::new(100.0, 0.0), 0.1, wave));
        let update = tactic.advance(&frame(100.0, None));

        let position = update.position.unwrap();
        // Travelling down-screen, the perpendicular points to -x.
        assert_abs_diff_eq!(position.x, 100.0 - 10.0 * 1.0_f64.sin(), epsilon = 1e-9);
        assert_abs_diff_eq!(position.y, 10.0, epsilon = 1e-9);
        let bank = (10.0 * 0.01 * 1.0_f64.cos()).atan2(0.1);
        assert_abs_diff_eq!(update.rotation.unwrap(), FRAC_PI_2 + bank, epsilon = 1e-9);
    }

    #[test]
    fn test_weave_time_offset_desyncs_ships() {
        let wave = SinusWave::new(30.0, 0.005);
        let origin = DVec2::new(200.0, 0.0);
        let mut a = Tactic::weave(Weave::new(origin, 0.1, wave));
        let mut b = Tactic::weave(Weave::new(origin, 0.1, wave)).with_time_offset(300.0);
        let pa = a.advance(&frame(16.0, None)).position.unwrap();
        let pb = b.advance(&frame(16.0, None)).position.unwrap();
        assert_abs_diff_eq!(pa.y, pb.y, epsilon = 1e-9);
        assert!((pa.x - pb.x).abs() > 1.0);
    }

    #[test]
    fn test_pending_leftover_counts_as_motion() {
        let wave = SinusWave::new(0.0, 0.0);
        let mut tactic =
            Tactic::weave(Weave::new(DVec2::ZERO, 0.1, wave)).with_start_delay(100.0);
        let update = tactic.advance(&frame(150.0, None));
        assert_eq!(update.phase, TacticPhase::Active);
        assert_abs_diff_eq!(update.position.unwrap().y, 5.0, epsilon = 1e-9);
    }

    // ---- Profiles ----

    #[test]
    fn test_every_class_moves_and_shoots() {
        for class in [
            ShipClass::Scout,
            ShipClass::Hunter,
            ShipClass::Gunship,
            ShipClass::Raider,
        ] {
            let profile = get_profile(class);
            assert!(profile.speed > 0.0, "{class:?} must move");
            assert!(profile.weapon.projectile_speed > 0.0);
            assert!(profile.weapon.damage > 0);
        }
    }
}
