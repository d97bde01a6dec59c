//! Level difficulty scaling
//!
//! Pure functions mapping the level number to the knobs the simulation
//! runs on. The only stateful piece is the time-budget recurrence, which
//! carries the previous level's budget and an RNG draw.

use rand::Rng;

use crate::consts::KILL_GOAL;

/// Everything the simulation needs to run one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    /// Seconds allowed to reach the kill goal. May be zero or negative
    /// on deep levels - the recurrence has no floor, and a level entered
    /// with no budget fails by timeout on its first tick.
    pub time_budget: i32,
    /// AI seek speed, pixels per tick
    pub ai_speed: f32,
    /// Player speed before the speed-powerup multiplier, pixels per tick
    pub player_speed: f32,
    /// Number of AI agents hunting the player
    pub enemy_count: usize,
    /// Kills required to clear the level
    pub kill_goal: u32,
}

/// AI seek speed: log growth from 1.2, capped at 2.0
pub fn ai_speed(level: u32) -> f32 {
    assert!(level >= 1, "level must be >= 1");
    (1.2 + (level as f32).ln() * 0.3).min(2.0)
}

/// Player base speed: +0.1 per level past the first
pub fn player_speed(level: u32) -> f32 {
    assert!(level >= 1, "level must be >= 1");
    5.0 + (level - 1) as f32 * 0.1
}

/// Enemy slots: 1 on levels 1-4, 2 on 5-9, 3 from 10 up
pub fn enemy_count(level: u32) -> usize {
    assert!(level >= 1, "level must be >= 1");
    if level >= 10 {
        3
    } else if level >= 5 {
        2
    } else {
        1
    }
}

/// Time budget recurrence: 30s on level 1, then the previous budget
/// minus 1 or 2 (random), with a +20s grace on levels 5 and 10.
fn time_budget(level: u32, previous: i32, rng: &mut impl Rng) -> i32 {
    let mut budget = if level == 1 {
        30
    } else {
        previous - rng.random_range(1..=2)
    };
    if level == 5 || level == 10 {
        budget += 20;
    }
    budget
}

/// Build the config for a level. `previous_time_budget` is the budget of
/// the level before it (ignored for level 1).
pub fn configure_level(level: u32, previous_time_budget: i32, rng: &mut impl Rng) -> LevelConfig {
    assert!(level >= 1, "level must be >= 1");
    LevelConfig {
        time_budget: time_budget(level, previous_time_budget, rng),
        ai_speed: ai_speed(level),
        player_speed: player_speed(level),
        enemy_count: enemy_count(level),
        kill_goal: KILL_GOAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_enemy_count_thresholds() {
        assert_eq!(enemy_count(1), 1);
        assert_eq!(enemy_count(4), 1);
        assert_eq!(enemy_count(5), 2);
        assert_eq!(enemy_count(9), 2);
        assert_eq!(enemy_count(10), 3);
        assert_eq!(enemy_count(25), 3);
    }

    #[test]
    fn test_ai_speed_endpoints() {
        // ln(1) = 0
        assert!((ai_speed(1) - 1.2).abs() < 1e-6);
        // ln(15)*0.3 > 0.8, so the cap kicks in
        assert_eq!(ai_speed(15), 2.0);
    }

    #[test]
    fn test_player_speed_scaling() {
        assert!((player_speed(1) - 5.0).abs() < 1e-6);
        assert!((player_speed(10) - 5.9).abs() < 1e-6);
    }

    #[test]
    fn test_level_one_budget_is_fixed() {
        let mut rng = Pcg32::seed_from_u64(1);
        // Previous budget is ignored for level 1
        assert_eq!(configure_level(1, 999, &mut rng).time_budget, 30);
    }

    #[test]
    fn test_budget_decrements_by_one_or_two() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let budget = configure_level(2, 30, &mut rng).time_budget;
            assert!(budget == 28 || budget == 29);
        }
    }

    #[test]
    fn test_bonus_levels_get_extra_time() {
        let mut rng = Pcg32::seed_from_u64(7);
        let budget = configure_level(5, 26, &mut rng).time_budget;
        assert!(budget == 44 || budget == 45);
        let budget = configure_level(10, 20, &mut rng).time_budget;
        assert!(budget == 38 || budget == 39);
    }

    #[test]
    fn test_budget_has_no_floor() {
        // The recurrence is allowed to go to zero and below
        let mut rng = Pcg32::seed_from_u64(3);
        let budget = configure_level(7, 1, &mut rng).time_budget;
        assert!(budget <= 0);
    }

    #[test]
    #[should_panic(expected = "level must be >= 1")]
    fn test_level_zero_asserts() {
        enemy_count(0);
    }

    proptest! {
        #[test]
        fn prop_ai_speed_bounded_and_monotone(level in 1u32..1000) {
            let s = ai_speed(level);
            prop_assert!(s >= 1.2);
            prop_assert!(s <= 2.0);
            prop_assert!(ai_speed(level + 1) >= s);
        }

        #[test]
        fn prop_enemy_count_in_range_and_monotone(level in 1u32..1000) {
            let n = enemy_count(level);
            prop_assert!((1..=3).contains(&n));
            prop_assert!(enemy_count(level + 1) >= n);
        }
    }
}
