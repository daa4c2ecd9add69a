//! Toast notices shown over every page.
//!
//! Rollbacks and fetch failures push an error notice here; the tray renders
//! the list and removes entries on dismiss or timeout.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    #[default]
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct NoticesState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticesState {
    /// Append a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, level, message: message.into() });
        id
    }

    pub fn push_error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, message)
    }

    /// Remove notice `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
