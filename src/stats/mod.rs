use std::time::{Duration, Instant};

/// Running totals for one sitting: best score, games finished, time played.
pub struct SessionStats {
    started: Instant,
    pub high_score: u32,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            high_score: 0,
            games_played: 0,
        }
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed session time as `MM:SS`.
    pub fn format_elapsed(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_score_tracking() {
        let mut stats = SessionStats::new();

        stats.on_game_over(10);
        assert_eq!(stats.high_score, 10);
        assert_eq!(stats.games_played, 1);

        stats.on_game_over(5);
        assert_eq!(stats.high_score, 10);
        assert_eq!(stats.games_played, 2);

        stats.on_game_over(15);
        assert_eq!(stats.high_score, 15);
        assert_eq!(stats.games_played, 3);
    }

    #[test]
    fn test_elapsed_formatting() {
        let stats = SessionStats::new();
        assert_eq!(stats.format_elapsed(), "00:00");
    }
}
