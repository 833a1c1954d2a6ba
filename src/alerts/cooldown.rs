use chrono::{DateTime, Duration, Utc};

use crate::Category;

/// Per-category record of the last fired alert. Owns the decision whether an
/// alert of a category may fire now; categories do not interact.
#[derive(Debug, Clone)]
pub struct CooldownTracker {
    cooldown: Duration,
    last_fired: [Option<DateTime<Utc>>; 3],
}

impl CooldownTracker {
    pub fn new(cooldown_seconds: u64) -> Self {
        Self {
            cooldown: Duration::seconds(cooldown_seconds as i64),
            last_fired: [None; 3],
        }
    }

    /// True if the category has never fired, or its cooldown window has fully
    /// elapsed: `now - last_fired >= cooldown`.
    pub fn can_fire(&self, category: Category, now: DateTime<Utc>) -> bool {
        match self.last_fired[category.index()] {
            None => true,
            Some(last) => now - last >= self.cooldown,
        }
    }

    pub fn record_fire(&mut self, category: Category, now: DateTime<Utc>) {
        self.last_fired[category.index()] = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    #[test]
    fn unfired_category_may_fire() {
        let tracker = CooldownTracker::new(300);

        assert!(tracker.can_fire(Category::Cpu, at(0)));
    }

    #[test]
    fn fire_within_window_is_blocked() {
        let mut tracker = CooldownTracker::new(300);
        tracker.record_fire(Category::Cpu, at(0));

        assert!(!tracker.can_fire(Category::Cpu, at(1)));
        assert!(!tracker.can_fire(Category::Cpu, at(299)));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let mut tracker = CooldownTracker::new(300);
        tracker.record_fire(Category::Cpu, at(0));

        assert!(tracker.can_fire(Category::Cpu, at(300)));
    }

    #[test]
    fn categories_cool_down_independently() {
        let mut tracker = CooldownTracker::new(300);
        tracker.record_fire(Category::Cpu, at(0));

        assert!(!tracker.can_fire(Category::Cpu, at(10)));
        assert!(tracker.can_fire(Category::Memory, at(10)));
        assert!(tracker.can_fire(Category::Disk, at(10)));
    }

    #[test]
    fn zero_cooldown_never_blocks() {
        let mut tracker = CooldownTracker::new(0);
        tracker.record_fire(Category::Disk, at(5));

        assert!(tracker.can_fire(Category::Disk, at(5)));
    }
}
