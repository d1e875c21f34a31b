//! Display contract for the notification dropdown and header badge.
//!
//! The display layer draws whatever these view models describe; no styling
//! decisions are made outside this module.

use serde::Serialize;

use crate::models::{ActorRole, Notification, NotificationCategory, NotificationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Briefcase,
    Calendar,
    Clock,
    MessageSquare,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Blue,
    Purple,
    Orange,
}

impl NotificationCategory {
    pub fn icon(&self) -> Icon {
        match self {
            NotificationCategory::Application => Icon::Briefcase,
            NotificationCategory::Interview => Icon::Calendar,
            NotificationCategory::Deadline => Icon::Clock,
            NotificationCategory::Message => Icon::MessageSquare,
            NotificationCategory::System => Icon::Settings,
        }
    }
}

impl NotificationKind {
    pub fn tone(&self) -> Tone {
        match self {
            NotificationKind::Success => Tone::Green,
            NotificationKind::Warning => Tone::Yellow,
            NotificationKind::Error => Tone::Red,
            NotificationKind::Info => Tone::Blue,
        }
    }
}

/// Badge colour for a role in the header
pub fn role_tone(role: ActorRole) -> Tone {
    match role {
        ActorRole::Student => Tone::Blue,
        ActorRole::PlacementStaff => Tone::Green,
        ActorRole::FacultyMentor => Tone::Purple,
        ActorRole::Recruiter => Tone::Orange,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEntryView {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub icon: Icon,
    pub tone: Tone,
    /// Highlight and show the unread dot
    pub unread: bool,
    pub separator_after: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedView {
    /// Count on the bell icon, hidden when nothing is unread
    pub badge: Option<usize>,
    pub show_mark_all_read: bool,
    pub is_empty: bool,
    pub entries: Vec<NotificationEntryView>,
}

pub fn render_feed(feed: &[Notification]) -> FeedView {
    let unread = feed.iter().filter(|n| !n.read).count();
    let last = feed.len().saturating_sub(1);

    let entries = feed
        .iter()
        .enumerate()
        .map(|(index, n)| NotificationEntryView {
            id: n.id.clone(),
            title: n.title.clone(),
            message: n.message.clone(),
            timestamp: n.timestamp.clone(),
            icon: n.category.icon(),
            tone: n.kind.tone(),
            unread: !n.read,
            separator_after: index < last,
        })
        .collect();

    FeedView {
        badge: (unread > 0).then_some(unread),
        show_mark_all_read: unread > 0,
        is_empty: feed.is_empty(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::feed_selector::select_feed;

    #[test]
    fn test_category_icons() {
        assert_eq!(NotificationCategory::Application.icon(), Icon::Briefcase);
        assert_eq!(NotificationCategory::Deadline.icon(), Icon::Clock);
        assert_eq!(NotificationCategory::Message.icon(), Icon::MessageSquare);
    }

    #[test]
    fn test_kind_tones() {
        assert_eq!(NotificationKind::Success.tone(), Tone::Green);
        assert_eq!(NotificationKind::Error.tone(), Tone::Red);
        assert_eq!(NotificationKind::Info.tone(), Tone::Blue);
    }

    #[test]
    fn test_role_tones() {
        assert_eq!(role_tone(ActorRole::FacultyMentor), Tone::Purple);
        assert_eq!(role_tone(ActorRole::Recruiter), Tone::Orange);
    }

    #[test]
    fn test_render_seeded_feed() {
        let view = render_feed(&select_feed("student"));

        assert_eq!(view.badge, Some(2));
        assert!(view.show_mark_all_read);
        assert!(!view.is_empty);
        assert_eq!(view.entries.len(), 3);
        assert!(view.entries[0].separator_after);
        assert!(view.entries[1].separator_after);
        assert!(!view.entries[2].separator_after);
        assert!(!view.entries[2].unread);
    }

    #[test]
    fn test_render_all_read_hides_badge() {
        let mut feed = select_feed("recruiter");
        feed.iter_mut().for_each(|n| n.read = true);

        let view = render_feed(&feed);
        assert_eq!(view.badge, None);
        assert!(!view.show_mark_all_read);
    }

    #[test]
    fn test_render_empty_feed() {
        let view = render_feed(&[]);
        assert!(view.is_empty);
        assert!(view.entries.is_empty());
        assert_eq!(view.badge, None);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let json = serde_json::to_value(render_feed(&select_feed("student"))).unwrap();
        assert_eq!(json["showMarkAllRead"], true);
        assert_eq!(json["entries"][0]["icon"], "briefcase");
        assert_eq!(json["entries"][1]["separatorAfter"], true);
    }
}
