use std::collections::HashMap;

use hud_config::ScenarioConfig;
use hud_core::{ConstructionSite, Point, TextureId, WorldView};

/// Synthetic world driven by a [`ScenarioConfig`].
///
/// Counts the house upgrade and the construction site down once per day.
/// The site is cleared once both of its counters reach zero.
#[derive(Debug, Clone)]
pub struct SimWorld {
    day: u32,
    days_until_house_upgrade: i32,
    construction: Option<ConstructionSite>,
    cinematic_days: Vec<u32>,
    pointer: Point,
    sprite_sheets: HashMap<String, TextureId>,
}

impl SimWorld {
    /// World on day 1 of `scenario`.  `builder` owns the scenario's texture, if any.
    pub fn from_scenario(scenario: &ScenarioConfig, builder: &str) -> Self {
        let sprite_sheets = scenario
            .builder_texture
            .map(|id| (builder.to_string(), TextureId(id)))
            .into_iter()
            .collect();

        Self {
            day: 1,
            days_until_house_upgrade: scenario.days_until_house_upgrade,
            construction: scenario.construction,
            cinematic_days: scenario.cinematic_days.clone(),
            pointer: Point::new(scenario.pointer[0], scenario.pointer[1]),
            sprite_sheets,
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Move to the next morning.
    pub fn advance_day(&mut self) {
        self.day += 1;

        if self.days_until_house_upgrade > 0 {
            self.days_until_house_upgrade -= 1;
        }

        if let Some(site) = self.construction.as_mut() {
            site.days_of_construction_left = (site.days_of_construction_left - 1).max(0);
            site.days_until_available = (site.days_until_available - 1).max(0);
            if site.days_of_construction_left == 0 && site.days_until_available == 0 {
                self.construction = None;
            }
        }
    }

    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    pub fn set_sprite_sheet(&mut self, character: &str, texture: Option<TextureId>) {
        match texture {
            Some(t) => self.sprite_sheets.insert(character.to_string(), t),
            None => self.sprite_sheets.remove(character),
        };
    }
}

impl WorldView for SimWorld {
    fn days_until_house_upgrade(&self) -> i32 {
        self.days_until_house_upgrade
    }

    fn building_under_construction(&self) -> Option<ConstructionSite> {
        self.construction
    }

    fn is_cinematic_active(&self) -> bool {
        self.cinematic_days.contains(&self.day)
    }

    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn character_sprite_sheet(&self, name: &str) -> Option<TextureId> {
        self.sprite_sheets.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> ScenarioConfig {
        ScenarioConfig {
            days_until_house_upgrade: 2,
            construction: Some(ConstructionSite {
                days_of_construction_left: 1,
                days_until_available: 2,
            }),
            builder_texture: Some(5),
            pointer: [1, 2],
            cinematic_days: vec![2],
        }
    }

    #[test]
    fn counters_tick_down_to_zero() {
        let mut world = SimWorld::from_scenario(&scenario(), "Robin");
        world.advance_day();
        world.advance_day();
        world.advance_day();
        assert_eq!(world.day(), 4);
        assert_eq!(world.days_until_house_upgrade(), 0);
    }

    #[test]
    fn site_clears_when_usable() {
        let mut world = SimWorld::from_scenario(&scenario(), "Robin");
        world.advance_day();
        assert_eq!(
            world.building_under_construction(),
            Some(ConstructionSite {
                days_of_construction_left: 0,
                days_until_available: 1,
            })
        );
        world.advance_day();
        assert_eq!(world.building_under_construction(), None);
    }

    #[test]
    fn cinematic_only_on_listed_days() {
        let mut world = SimWorld::from_scenario(&scenario(), "Robin");
        assert!(!world.is_cinematic_active());
        world.advance_day();
        assert!(world.is_cinematic_active());
        world.advance_day();
        assert!(!world.is_cinematic_active());
    }

    #[test]
    fn sprite_sheet_belongs_to_builder() {
        let mut world = SimWorld::from_scenario(&scenario(), "Robin");
        assert_eq!(world.character_sprite_sheet("Robin"), Some(TextureId(5)));
        assert_eq!(world.character_sprite_sheet("Pierre"), None);
        world.set_sprite_sheet("Robin", None);
        assert_eq!(world.character_sprite_sheet("Robin"), None);
    }
}
