use hud_core::{Localizer, TaskStatus, WorldView};

/// Translation key for the house upgrade countdown.
pub const HOUSE_UPGRADE_STATUS_KEY: &str = "house-upgrade-status";

/// Translation key for buildings under construction.
pub const BUILDING_STATUS_KEY: &str = "building-status";

/// Derive the builder's current status from world counters.
///
/// A pending house upgrade wins over any construction site.  For a site, the
/// larger of the two countdowns is reported; on a tie the "until available"
/// countdown is used.  Both site countdowns share one template.
pub fn evaluate(world: &dyn WorldView, i18n: &dyn Localizer) -> TaskStatus {
    let house_days = world.days_until_house_upgrade();
    if house_days > 0 {
        let message = i18n.format(HOUSE_UPGRADE_STATUS_KEY, &[&house_days]);
        return TaskStatus::active(message, house_days.unsigned_abs());
    }

    let Some(site) = world.building_under_construction() else {
        return TaskStatus::idle();
    };

    let days = if site.days_of_construction_left > site.days_until_available {
        site.days_of_construction_left
    } else {
        site.days_until_available
    };
    // TODO: give the "built but not yet usable" countdown its own translation key.
    let message = i18n.format(BUILDING_STATUS_KEY, &[&days]);
    TaskStatus::active(message, days.max(0).unsigned_abs())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use hud_core::{ConstructionSite, Point, TextureId};
    use std::fmt;

    /// World with fixed counters.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct FakeWorld {
        pub house_days: i32,
        pub site: Option<ConstructionSite>,
        pub cinematic: bool,
        pub pointer: Point,
        pub builder_sheet: Option<TextureId>,
    }

    impl WorldView for FakeWorld {
        fn days_until_house_upgrade(&self) -> i32 {
            self.house_days
        }

        fn building_under_construction(&self) -> Option<ConstructionSite> {
            self.site
        }

        fn is_cinematic_active(&self) -> bool {
            self.cinematic
        }

        fn pointer_position(&self) -> Point {
            self.pointer
        }

        fn character_sprite_sheet(&self, name: &str) -> Option<TextureId> {
            if name == "Robin" {
                self.builder_sheet
            } else {
                None
            }
        }
    }

    /// Renders `key:arg0,arg1` so tests can see which template and value were used.
    pub(crate) struct EchoLocalizer;

    impl Localizer for EchoLocalizer {
        fn format(&self, key: &str, args: &[&dyn fmt::Display]) -> String {
            let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
            format!("{key}:{}", args.join(","))
        }
    }

    fn site(left: i32, until_available: i32) -> Option<ConstructionSite> {
        Some(ConstructionSite {
            days_of_construction_left: left,
            days_until_available: until_available,
        })
    }

    #[test]
    fn house_upgrade_takes_precedence() {
        let world = FakeWorld {
            house_days: 3,
            site: site(9, 9),
            ..Default::default()
        };
        let status = evaluate(&world, &EchoLocalizer);
        assert!(status.in_progress());
        assert_eq!(status.message(), "house-upgrade-status:3");
        assert_eq!(status.remaining_days(), 3);
    }

    #[test]
    fn nothing_pending_is_idle() {
        for house_days in [0, -1, -30] {
            let world = FakeWorld {
                house_days,
                ..Default::default()
            };
            let status = evaluate(&world, &EchoLocalizer);
            assert!(!status.in_progress());
            assert_eq!(status.message(), "");
        }
    }

    #[test]
    fn construction_left_wins_when_larger() {
        let world = FakeWorld {
            site: site(5, 3),
            ..Default::default()
        };
        assert_eq!(evaluate(&world, &EchoLocalizer).message(), "building-status:5");
    }

    #[test]
    fn until_available_wins_when_larger() {
        let world = FakeWorld {
            site: site(3, 5),
            ..Default::default()
        };
        let status = evaluate(&world, &EchoLocalizer);
        assert_eq!(status.message(), "building-status:5");
        assert_eq!(status.remaining_days(), 5);
    }

    #[test]
    fn tie_uses_until_available() {
        let world = FakeWorld {
            house_days: -2,
            site: site(4, 4),
            ..Default::default()
        };
        let status = evaluate(&world, &EchoLocalizer);
        assert!(status.in_progress());
        assert_eq!(status.message(), "building-status:4");
    }

    #[test]
    fn finished_site_still_reports_in_progress() {
        let world = FakeWorld {
            site: site(0, -1),
            ..Default::default()
        };
        let status = evaluate(&world, &EchoLocalizer);
        assert!(status.in_progress());
        assert_eq!(status.message(), "building-status:0");
        assert_eq!(status.remaining_days(), 0);
    }
}
