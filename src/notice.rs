use crate::error::{ErrorKind, PulseError};

pub type NoticeId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Danger,
}

impl NoticeLevel {
    pub fn css(&self) -> &'static str {
        match self {
            NoticeLevel::Warning => "notice notice-warning",
            NoticeLevel::Danger => "notice notice-danger",
        }
    }
}

/// A transient message shown in the corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub level: NoticeLevel,
    pub message: String,
}

/// Notices currently on screen, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notices {
    next_id: NoticeId,
    active: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> NoticeId {
        self.next_id += 1;
        let id = self.next_id;
        self.active.push(Notice {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Surface a failure. Validation errors carry their own user-facing
    /// text; anything else gets `fallback`.
    pub fn push_error(&mut self, err: &PulseError, fallback: &str) -> NoticeId {
        match err.kind() {
            ErrorKind::Validation => self.push(NoticeLevel::Warning, err.to_string()),
            ErrorKind::Network | ErrorKind::Config => self.push(NoticeLevel::Danger, fallback),
        }
    }

    pub fn dismiss(&mut self, id: NoticeId) {
        self.active.retain(|n| n.id != id);
    }

    pub fn active(&self) -> &[Notice] {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut notices = Notices::default();
        let a = notices.push(NoticeLevel::Warning, "a");
        let b = notices.push(NoticeLevel::Warning, "b");
        assert!(b > a);
        notices.dismiss(a);
        let c = notices.push(NoticeLevel::Warning, "c");
        assert!(c > b);
        assert_eq!(notices.active().len(), 2);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut notices = Notices::default();
        notices.push(NoticeLevel::Warning, "kept");
        notices.dismiss(999);
        assert_eq!(notices.active().len(), 1);
    }

    #[test]
    fn test_network_error_uses_generic_message() {
        let mut notices = Notices::default();
        let err = PulseError::Status {
            status: 502,
            url: "http://x/api/products".into(),
        };
        notices.push_error(&err, "Failed to load products. Please try again.");
        let shown = &notices.active()[0];
        assert_eq!(shown.level, NoticeLevel::Danger);
        assert_eq!(shown.message, "Failed to load products. Please try again.");
    }

    #[test]
    fn test_validation_error_keeps_its_text() {
        let mut notices = Notices::default();
        let err = PulseError::Validation("Please select at least 2 products to compare.".into());
        notices.push_error(&err, "unused");
        let shown = &notices.active()[0];
        assert_eq!(shown.level, NoticeLevel::Warning);
        assert_eq!(shown.message, "Please select at least 2 products to compare.");
    }
}
