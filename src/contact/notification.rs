use std::time::Duration;

/// How long a notification stays up unless dismissed or replaced.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Identity of one raised notification. Expiry timers carry it so a late
/// timer can only ever hide the notification it was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

/// Hidden/Visible machine for the single toast slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    raised: u64,
    visible: Option<(NotificationId, Notification)>,
}

impl NotificationState {
    /// Shows `notification`, replacing whatever was visible.
    pub fn show(&mut self, notification: Notification) -> NotificationId {
        self.raised += 1;
        let id = NotificationId(self.raised);
        self.visible = Some((id, notification));
        id
    }

    pub fn dismiss(&mut self) {
        self.visible = None;
    }

    /// Hides the notification if `id` is still the one showing. Returns
    /// whether anything was hidden.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        match &self.visible {
            Some((current, _)) if *current == id => {
                self.visible = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.visible.as_ref().map(|(_, n)| n)
    }

    pub fn visible_id(&self) -> Option<NotificationId> {
        self.visible.as_ref().map(|(id, _)| *id)
    }

    pub fn is_visible(&self) -> bool {
        self.visible.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let state = NotificationState::default();
        assert!(!state.is_visible());
        assert_eq!(state.current(), None);
        assert_eq!(state.visible_id(), None);
    }

    #[test]
    fn test_show_then_expire() {
        let mut state = NotificationState::default();
        let id = state.show(Notification::success("Sent! I'll reply soon."));
        assert!(state.is_visible());
        assert_eq!(state.visible_id(), Some(id));
        assert_eq!(
            state.current().map(|n| n.kind),
            Some(NotificationKind::Success)
        );

        assert!(state.expire(id));
        assert!(!state.is_visible());
        // expiring twice is harmless
        assert!(!state.expire(id));
    }

    #[test]
    fn test_superseded_expiry_is_ignored() {
        let mut state = NotificationState::default();
        let first = state.show(Notification::error("Invalid email"));
        let second = state.show(Notification::error("Please fill all fields"));
        assert_ne!(first, second);

        // the first timer fires late and must not hide the newer message
        assert!(!state.expire(first));
        assert_eq!(
            state.current().map(|n| n.message.as_str()),
            Some("Please fill all fields")
        );

        assert!(state.expire(second));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_superseded_message_never_returns() {
        let mut state = NotificationState::default();
        state.show(Notification::error("Error. Try again."));
        let latest = state.show(Notification::success("Sent! I'll reply soon."));
        state.expire(latest);
        assert_eq!(state.current(), None);

        let again = state.show(Notification::error("Invalid email"));
        assert_eq!(
            state.current().map(|n| n.message.as_str()),
            Some("Invalid email")
        );
        assert_eq!(state.visible_id(), Some(again));
    }

    #[test]
    fn test_dismiss_hides_immediately() {
        let mut state = NotificationState::default();
        let id = state.show(Notification::success("Sent! I'll reply soon."));
        state.dismiss();
        assert!(!state.is_visible());
        // the pending timer for the dismissed toast finds nothing to do
        assert!(!state.expire(id));
    }

    #[test]
    fn test_dismiss_when_hidden_is_noop() {
        let mut state = NotificationState::default();
        state.dismiss();
        assert_eq!(state, NotificationState::default());
    }
}
