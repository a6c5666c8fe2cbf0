//! Notifications
//!
//! Transient toasts shown in the corner of the page.

/// How long a toast's exit animation runs before it is removed
pub const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Warning => "toast warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    /// Exit animation has started
    pub leaving: bool,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into(), leaving: false });
        id
    }

    pub fn begin_dismiss(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_get_unique_ids_in_order() {
        let mut notes = Notifications::default();
        let a = notes.push(ToastKind::Success, "Task added successfully!");
        let b = notes.push(ToastKind::Error, "Failed to load tasks");

        assert_ne!(a, b);
        let messages: Vec<&str> = notes.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Task added successfully!", "Failed to load tasks"]);
    }

    #[test]
    fn test_dismiss_marks_then_removes() {
        let mut notes = Notifications::default();
        let id = notes.push(ToastKind::Warning, "hidden tasks");

        notes.begin_dismiss(id);
        assert!(notes.toasts()[0].leaving);

        notes.remove(id);
        assert!(notes.toasts().is_empty());

        // ids are not reused after removal
        assert_eq!(notes.push(ToastKind::Success, "again"), id + 1);
        // unknown ids are ignored
        notes.begin_dismiss(999);
        notes.remove(999);
        assert_eq!(notes.toasts().len(), 1);
    }
}
