//! # Fade-in
//!
//! Screens fade in when they become visible. A terminal has no alpha, so the
//! fade steps the foreground through dark grey and grey before settling on
//! the normal colour. A zero duration disables it.

use std::time::{Duration, Instant};

use ratatui::style::{Color, Style};

pub struct FadeIn {
    duration: Duration,
    started: Option<Instant>,
}

impl FadeIn {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
        }
    }

    pub fn restart(&mut self, now: Instant) {
        if !self.duration.is_zero() {
            self.started = Some(now);
        }
    }

    /// 0.0 at the start of the fade, 1.0 once finished (or never started).
    pub fn progress(&self, now: Instant) -> f32 {
        match self.started {
            Some(start) if !self.duration.is_zero() => {
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    /// Base style for screen content at `now`.
    pub fn style(&self, now: Instant) -> Style {
        let p = self.progress(now);
        if p < 1.0 / 3.0 {
            Style::default().fg(Color::DarkGray)
        } else if p < 2.0 / 3.0 {
            Style::default().fg(Color::Gray)
        } else {
            Style::default()
        }
    }
}
