#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::{DiagnosticCode, GameEvent};
    use crate::player::Player;
    use crate::state::{Card, MatchSnapshot};
    use crate::types::{Position, SimTime, Velocity};
    use crate::weapons::{rarity_pool, Behavior, WeaponId};

    /// Verify the phase enum round-trips through serde_json.
    #[test]
    fn test_turn_phase_serde() {
        let variants = vec![
            TurnPhase::Lottery,
            TurnPhase::Aiming,
            TurnPhase::Firing,
            TurnPhase::Resolving,
            TurnPhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TurnPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_projectile_kind_serde() {
        let variants = vec![
            ProjectileKind::PrimaryShot,
            ProjectileKind::ClusterBomblet,
            ProjectileKind::AirburstFragment,
            ProjectileKind::StrafeBullet,
            ProjectileKind::Drill,
            ProjectileKind::Bouncer,
            ProjectileKind::HomingSeeker,
            ProjectileKind::Roller,
            ProjectileKind::VoidSplitterFragment,
            ProjectileKind::Anomaly,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ProjectileKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartMatch,
            PlayerCommand::SelectCard { index: 2 },
            PlayerCommand::RerollLottery,
            PlayerCommand::Aim {
                delta_radians: -0.05,
            },
            PlayerCommand::Charge { delta: 0.1 },
            PlayerCommand::Fire,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let _back: PlayerCommand = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_game_event_serde_tagged() {
        let event = GameEvent::Diagnostic {
            code: DiagnosticCode::SafetyCeilingForcedAdvance,
            detail: "resolution exceeded ceiling".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\""));
        let _back: GameEvent = serde_json::from_str(&json).unwrap();
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = MatchSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let _back: MatchSnapshot = serde_json::from_str(&json).unwrap();
    }

    // ---- Types ----

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_speed_and_heading() {
        let v = Velocity::new(10.0, 10.0);
        assert!((v.speed() - 200.0_f64.sqrt()).abs() < 1e-9);
        assert!((v.heading() - std::f64::consts::FRAC_PI_4).abs() < 1e-9);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..crate::constants::TICK_RATE {
            t.advance();
        }
        assert_eq!(t.tick, crate::constants::TICK_RATE as u64);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Rarity ordering ----

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
        assert!(!Rarity::Uncommon.is_rare_or_better());
        assert!(Rarity::Rare.is_rare_or_better());
    }

    // ---- Weapon tables ----

    /// Every rarity pool entry must carry the rarity it is pooled under.
    #[test]
    fn test_rarity_pools_consistent() {
        for rarity in Rarity::ALL {
            let pool = rarity_pool(rarity);
            assert!(!pool.is_empty(), "empty pool for {rarity:?}");
            for id in pool {
                assert_eq!(id.spec().rarity, rarity, "{id:?} pooled under wrong rarity");
            }
        }
    }

    /// Every weapon appears in exactly one rarity pool.
    #[test]
    fn test_every_weapon_pooled_once() {
        for id in WeaponId::ALL {
            let count = Rarity::ALL
                .iter()
                .filter(|r| rarity_pool(**r).contains(&id))
                .count();
            assert_eq!(count, 1, "{id:?} appears in {count} pools");
        }
    }

    #[test]
    fn test_weapon_specs_sane() {
        for id in WeaponId::ALL {
            let spec = id.spec();
            assert!(spec.damage > 0.0, "{id:?} has no damage");
            assert!(spec.blast_radius > 0.0, "{id:?} has no blast radius");
            assert!(spec.muzzle_speed > 0.0, "{id:?} has no muzzle speed");
            if let Behavior::Bounce { max_bounces } = spec.behavior {
                assert!(max_bounces > 0, "bouncer with zero bounce budget");
            }
            if let Behavior::Drill { depth } = spec.behavior {
                assert!(depth > 0.0, "drill with zero depth budget");
            }
        }
    }

    // ---- Player ----

    #[test]
    fn test_player_damage_clamps_at_zero() {
        let mut p = Player::new("tank", Position::new(0.0, 0.0), Controller::Human);
        let dealt = p.apply_damage(150.0);
        assert_eq!(dealt, 100.0);
        assert_eq!(p.health, 0.0);
        assert!(!p.alive);

        // Dead players take no further damage.
        assert_eq!(p.apply_damage(10.0), 0.0);
        assert_eq!(p.health, 0.0);
    }

    #[test]
    fn test_player_negative_damage_ignored() {
        let mut p = Player::new("tank", Position::new(0.0, 0.0), Controller::Ai);
        assert_eq!(p.apply_damage(-5.0), 0.0);
        assert_eq!(p.health, 100.0);
        assert!(p.alive);
    }

    #[test]
    fn test_card_equality() {
        let a = Card {
            weapon: WeaponId::Mortar,
            rarity: Rarity::Common,
            damage_display: 25,
        };
        assert_eq!(a, a);
    }
}
