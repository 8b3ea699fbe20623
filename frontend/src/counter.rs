use crate::config;
use crate::utils::timing::lerp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTarget {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

/// Stat cards, matched to `.stat-card` elements by position.
pub const STATS: [StatTarget; 4] = [
    StatTarget { target: 150, suffix: "+", label: "Projects completed" },
    StatTarget { target: 145, suffix: "+", label: "Happy clients" },
    StatTarget { target: 10, suffix: "+", label: "Years of experience" },
    StatTarget { target: 98, suffix: "%", label: "Client satisfaction" },
];

pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

impl StatTarget {
    /// Number shown at `progress`; the last frame lands exactly on the target.
    pub fn value_at(&self, progress: f64) -> u32 {
        if progress >= 1.0 {
            return self.target;
        }
        lerp(0.0, self.target as f64, ease_out_quart(progress)).floor() as u32
    }

    pub fn label_at(&self, progress: f64) -> String {
        format!("{}{}", self.value_at(progress), self.suffix)
    }

    pub fn initial_label(&self) -> String {
        format!("0{}", self.suffix)
    }
}

/// Tracks which cards already ran so the counter fires once per card.
#[derive(Debug, Clone, Default)]
pub struct CounterBoard {
    animated: Vec<bool>,
}

impl CounterBoard {
    pub fn new(cards: usize) -> Self {
        Self { animated: vec![false; cards] }
    }

    /// Marks every pending card as animated and returns `(index, start delay ms)`
    /// for each one. Cards without a configured target are skipped.
    pub fn claim(&mut self) -> Vec<(usize, u32)> {
        let mut started = Vec::new();
        for (index, done) in self.animated.iter_mut().enumerate() {
            if *done || index >= STATS.len() {
                continue;
            }
            *done = true;
            started.push((index, index as u32 * config::STAT_STAGGER_MS));
        }
        started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timing::progress;

    #[test]
    fn easing_hits_endpoints_and_is_monotonic() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        let mut last = 0.0;
        for step in 1..=100 {
            let eased = ease_out_quart(step as f64 / 100.0);
            assert!(eased >= last);
            last = eased;
        }
        assert!(ease_out_quart(0.5) > 0.9);
    }

    #[test]
    fn labels_follow_easing_and_finish_on_target() {
        let stat = STATS[3];
        assert_eq!(stat.label_at(0.0), "0%");
        assert_eq!(stat.label_at(0.5), "91%");
        assert_eq!(stat.label_at(1.0), "98%");
        assert_eq!(STATS[0].label_at(progress(2500.0, config::STAT_ANIMATION_DURATION)), "150+");
    }

    #[test]
    fn claim_staggers_and_runs_once() {
        let mut board = CounterBoard::new(4);
        assert_eq!(board.claim(), vec![(0, 0), (1, 150), (2, 300), (3, 450)]);
        assert!(board.animated.iter().all(|done| *done));
        assert!(board.claim().is_empty());
        assert!(board.claim().is_empty());
    }

    #[test]
    fn extra_cards_without_target_are_ignored() {
        let mut board = CounterBoard::new(6);
        assert_eq!(board.claim().len(), STATS.len());
        assert_eq!(board.animated, vec![true, true, true, true, false, false]);
    }
}
