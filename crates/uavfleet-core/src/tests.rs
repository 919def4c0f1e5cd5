#[cfg(test)]
mod tests {
    use std::f64::consts::{PI, TAU};

    use crate::commands::Command;
    use crate::config::{ConfigError, SimParams};
    use crate::state::FleetSnapshot;
    use crate::types::{normalize_azimuth, Position, SimTime, Waypoint};
    use crate::vehicle::VehicleState;

    fn valid_params() -> SimParams {
        SimParams {
            dt: 0.5,
            n_uav: 3,
            r: 5.0,
            x0: 1.0,
            y0: -2.0,
            z0: 100.0,
            v0: 10.0,
            az: PI / 2.0,
            time_lim: 10.0,
        }
    }

    #[test]
    fn test_normalize_azimuth_range() {
        for angle in [0.0, -0.1, TAU, 3.0 * TAU + 1.0, -1000.0 * TAU - 0.25, 1e9, -1e9] {
            let wrapped = normalize_azimuth(angle);
            assert!(
                (0.0..TAU).contains(&wrapped),
                "{angle} wrapped to {wrapped}"
            );
        }
    }

    #[test]
    fn test_normalize_azimuth_tiny_negative() {
        // -1e-17 rem_euclid TAU rounds to TAU; must come back as 0
        assert_eq!(normalize_azimuth(-1e-17), 0.0);
    }

    #[test]
    fn test_normalize_azimuth_preserves_direction() {
        let a = normalize_azimuth(-PI / 2.0);
        assert!((a - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_fleet_identical_except_id() {
        let params = valid_params();
        let fleet = VehicleState::fleet(&params);
        assert_eq!(fleet.len(), 3);
        for (i, v) in fleet.iter().enumerate() {
            assert_eq!(v.id, i as u32 + 1);
            assert_eq!(v.position, Position::new(1.0, -2.0, 100.0));
            assert_eq!(v.azimuth, PI / 2.0);
            assert_eq!(v.speed, 10.0);
            assert_eq!(v.turn_radius, 5.0);
            assert!(!v.in_loiter);
            assert!(!v.heading_snapped);
        }
    }

    #[test]
    fn test_fleet_normalizes_initial_azimuth() {
        let params = SimParams {
            az: -PI,
            ..valid_params()
        };
        let fleet = VehicleState::fleet(&params);
        assert!((fleet[0].azimuth - PI).abs() < 1e-12);
    }

    #[test]
    fn test_reset_mode_clears_both_bits() {
        let mut v = VehicleState::new(1, Position::default(), 0.0, 1.0, 1.0);
        v.in_loiter = true;
        v.heading_snapped = true;
        v.reset_mode();
        assert!(!v.in_loiter);
        assert!(!v.heading_snapped);
    }

    #[test]
    fn test_validate_accepts_valid() {
        assert_eq!(valid_params().validate(), Ok(()));
    }

    #[test]
    fn test_validate_defaults_rejected() {
        // All-zero params are what a missing file section produces
        assert_eq!(
            SimParams::default().validate(),
            Err(ConfigError::TimeStep(0.0))
        );
    }

    #[test]
    fn test_validate_each_field() {
        let p = SimParams {
            n_uav: 0,
            ..valid_params()
        };
        assert_eq!(p.validate(), Err(ConfigError::EmptyFleet));

        let p = SimParams {
            r: -1.0,
            ..valid_params()
        };
        assert_eq!(p.validate(), Err(ConfigError::TurnRadius(-1.0)));

        let p = SimParams {
            v0: 0.0,
            ..valid_params()
        };
        assert_eq!(p.validate(), Err(ConfigError::Speed(0.0)));

        let p = SimParams {
            time_lim: -1.0,
            ..valid_params()
        };
        assert_eq!(p.validate(), Err(ConfigError::TimeLimit(-1.0)));

        let p = SimParams {
            az: f64::NAN,
            ..valid_params()
        };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::NonFinite { field: "Az", .. })
        ));
    }

    #[test]
    fn test_record_count() {
        let p = valid_params();
        assert_eq!(p.record_count(), 21);

        let p = SimParams {
            dt: 0.1,
            time_lim: 1.0,
            ..valid_params()
        };
        assert_eq!(p.record_count(), 11);

        let p = SimParams {
            time_lim: 0.0,
            ..valid_params()
        };
        assert_eq!(p.record_count(), 1);
    }

    #[test]
    fn test_sim_time_advance_no_drift() {
        let mut t = SimTime::default();
        for _ in 0..1000 {
            t.advance(0.1);
        }
        assert_eq!(t.tick, 1000);
        assert_eq!(t.elapsed_secs, 100.0);
    }

    #[test]
    fn test_command_due_is_strict() {
        let c = Command::new(5.0, 1, 20.0, 0.0);
        assert!(!c.is_due(5.0));
        assert!(c.is_due(5.0 + 1e-9));
        assert_eq!(c.destination, Waypoint::new(20.0, 0.0));
    }

    #[test]
    fn test_horizontal_range_ignores_altitude() {
        let p = Position::new(3.0, 4.0, 1000.0);
        assert_eq!(p.horizontal_range_to(&Waypoint::new(0.0, 0.0)), 5.0);
    }

    #[test]
    fn test_params_serde() {
        let p = valid_params();
        let json = serde_json::to_string(&p).unwrap();
        let back: SimParams = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = FleetSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"vehicles\":[]"));
    }
}
