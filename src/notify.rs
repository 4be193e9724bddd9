/// How a notification should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Success,
    Info,
}

/// A user facing message emitted by a session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

/// The part of the frontend that shows notifications to the user.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);

    fn error(&mut self, message: &str) {
        self.notify(Notification {
            level: Level::Error,
            message: message.to_owned(),
        });
    }

    fn success(&mut self, message: &str) {
        self.notify(Notification {
            level: Level::Success,
            message: message.to_owned(),
        });
    }

    fn info(&mut self, message: &str) {
        self.notify(Notification {
            level: Level::Info,
            message: message.to_owned(),
        });
    }
}

/// Keeps every notification in memory, in the order they were emitted.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    pub notifications: Vec<Notification>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
