use serde::{Deserialize, Serialize};

/// Severity of a notification. Affects presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Info,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
            NotificationKind::Error => "error",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for NotificationKind {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info, // Unknown severities render as info
        }
    }
}

/// What a notification is about. Drives the icon shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Application,
    Interview,
    Deadline,
    System,
    Message,
}

impl NotificationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::Application => "application",
            NotificationCategory::Interview => "interview",
            NotificationCategory::Deadline => "deadline",
            NotificationCategory::System => "system",
            NotificationCategory::Message => "message",
        }
    }
}

impl std::fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NotificationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "application" => Ok(NotificationCategory::Application),
            "interview" => Ok(NotificationCategory::Interview),
            "deadline" => Ok(NotificationCategory::Deadline),
            "system" => Ok(NotificationCategory::System),
            "message" => Ok(NotificationCategory::Message),
            _ => Err(format!("Invalid notification category: {}", s)),
        }
    }
}

/// Lifecycle state of a notification within one feed.
///
/// `Unread -> Read` and `{Unread, Read} -> Deleted` are the only transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationState {
    Unread,
    Read,
    Deleted,
}

/// A single message in an actor's notification feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    /// Relative display time ("2 hours ago"), fixed when the entry is created
    pub timestamp: String,
    pub read: bool,
    #[serde(rename = "actionUrl", skip_serializing_if = "Option::is_none", default)]
    pub action_url: Option<String>,
}

impl Notification {
    /// Create an unread notification
    pub fn new(
        id: impl Into<String>,
        kind: NotificationKind,
        category: NotificationCategory,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            category,
            title: title.into(),
            message: message.into(),
            timestamp: timestamp.into(),
            read: false,
            action_url: None,
        }
    }

    /// Seed the notification as already read
    pub fn already_read(mut self) -> Self {
        self.read = true;
        self
    }

    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }

    pub fn state(&self) -> NotificationState {
        if self.read {
            NotificationState::Read
        } else {
            NotificationState::Unread
        }
    }
}
