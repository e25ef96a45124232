// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transient user-facing notices. Each notice schedules its own clear; a
//! clear only applies to the notice that scheduled it.

use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

pub const DEFAULT_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NoticeKind,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

/// A pending clear. Firing it is a no-op once a newer notice was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledClear {
    generation: u64,
    pub due: Instant,
}

#[derive(Debug)]
pub struct Notifier {
    current: Option<(Notification, Instant)>,
    generation: u64,
    display_for: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY)
    }
}

impl Notifier {
    pub fn new(display_for: Duration) -> Self {
        Self {
            current: None,
            generation: 0,
            display_for,
        }
    }

    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NoticeKind,
        now: Instant,
    ) -> ScheduledClear {
        self.generation += 1;
        let due = now + self.display_for;
        self.current = Some((
            Notification {
                message: message.into(),
                kind,
            },
            due,
        ));
        ScheduledClear {
            generation: self.generation,
            due,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) -> ScheduledClear {
        self.show(message, NoticeKind::Success, Instant::now())
    }

    pub fn error(&mut self, message: impl Into<String>) -> ScheduledClear {
        self.show(message, NoticeKind::Error, Instant::now())
    }

    /// Returns true when the clear applied.
    pub fn fire(&mut self, clear: ScheduledClear) -> bool {
        if clear.generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self, now: Instant) -> Option<&Notification> {
        match &self.current {
            Some((n, due)) if now < *due => Some(n),
            _ => None,
        }
    }

    /// The latest notice regardless of expiry.
    pub fn latest(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires_after_display_time() {
        let mut n = Notifier::new(Duration::from_secs(3));
        let t0 = Instant::now();
        n.show("saved", NoticeKind::Success, t0);
        assert_eq!(n.current(t0).unwrap().message, "saved");
        assert!(n.current(t0 + Duration::from_secs(3)).is_none());
    }

    #[test]
    fn stale_clear_does_not_erase_newer_notice() {
        let mut n = Notifier::default();
        let t0 = Instant::now();
        let first = n.show("first", NoticeKind::Success, t0);
        let second = n.show("second", NoticeKind::Error, t0 + Duration::from_secs(2));

        assert!(!n.fire(first));
        let shown = n.current(t0 + Duration::from_secs(4)).unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(shown.kind, NoticeKind::Error);

        assert!(n.fire(second));
        assert!(n.latest().is_none());
    }

    #[test]
    fn display_tags_kind() {
        let mut n = Notifier::default();
        n.error("Please fill all fields");
        assert_eq!(
            n.latest().unwrap().to_string(),
            "[error] Please fill all fields"
        );
    }
}
