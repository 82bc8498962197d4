//! In-app diagnostics: what the user did and how exports went.
//!
//! Entries are kept oldest first and capped at [`MAX_ENTRIES`]; the panel shows
//! them newest first.

use dioxus::prelude::*;

/// Oldest entries are dropped beyond this.
pub const MAX_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            LogLevel::Info => "activity-log-entry info",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Error => "activity-log-entry error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, timestamp: String, level: LogLevel, message: &str) {
        self.entries.push(LogEntry {
            timestamp,
            level,
            message: message.to_string(),
        });
        if self.entries.len() > MAX_ENTRIES {
            let overflow = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..overflow);
        }
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(current_time(), level, message);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    clock(date.get_hours(), date.get_minutes(), date.get_seconds())
}

// UTC; desktop has no cheap local-offset lookup.
#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    let secs = store::now_millis() / 1000;
    clock(((secs / 3600) % 24) as u32, ((secs / 60) % 60) as u32, (secs % 60) as u32)
}

fn clock(h: u32, m: u32, s: u32) -> String {
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_zero_padded() {
        assert_eq!(clock(7, 5, 9), "07:05:09");
        assert_eq!(clock(23, 59, 0), "23:59:00");
    }

    #[test]
    fn test_push_caps_history() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push("00:00:00".to_string(), LogLevel::Info, &format!("entry {i}"));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "entry 5");
        assert_eq!(log.entries.last().map(|e| e.message.as_str()), Some("entry 204"));
    }

    #[test]
    fn test_has_errors_and_clear() {
        let mut log = ActivityLog::default();
        log.push("12:00:00".to_string(), LogLevel::Success, "Generated card");
        assert!(!log.has_errors());

        log.push("12:00:01".to_string(), LogLevel::Error, "Export failed");
        assert!(log.has_errors());

        log.clear();
        assert!(log.entries.is_empty());
        assert!(!log.has_errors());
    }

    #[test]
    fn test_toggle_flips_visibility() {
        let mut log = ActivityLog::default();
        log.toggle();
        assert!(log.visible);
        log.toggle();
        assert!(!log.visible);
    }
}
