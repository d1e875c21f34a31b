use std::collections::HashMap;

use crate::models::{ActorRole, Notification, NotificationCategory, NotificationKind};

/// Produces the seed notifications for one role
pub type FeedRule = fn() -> Vec<Notification>;

/// Lookup table from role to the curated feed that role starts a session with.
///
/// Unrecognized roles get the baseline feed. Selection is a static lookup,
/// no ranking or filtering is applied.
#[derive(Clone)]
pub struct FeedSelector {
    rules: HashMap<ActorRole, FeedRule>,
    baseline: FeedRule,
}

impl FeedSelector {
    /// Selector with the portal's built-in feeds
    pub fn new() -> Self {
        let mut rules: HashMap<ActorRole, FeedRule> = HashMap::new();
        rules.insert(ActorRole::Student, student_feed);
        rules.insert(ActorRole::PlacementStaff, placement_staff_feed);
        rules.insert(ActorRole::FacultyMentor, faculty_mentor_feed);
        rules.insert(ActorRole::Recruiter, recruiter_feed);

        Self {
            rules,
            baseline: baseline_feed,
        }
    }

    /// Replace the rule used for `role`
    pub fn with_rule(mut self, role: ActorRole, rule: FeedRule) -> Self {
        self.rules.insert(role, rule);
        self
    }

    /// Replace the fallback rule
    pub fn with_baseline(mut self, rule: FeedRule) -> Self {
        self.baseline = rule;
        self
    }

    pub fn select(&self, role: ActorRole) -> Vec<Notification> {
        let rule = self.rules.get(&role).copied().unwrap_or(self.baseline);
        rule()
    }

    /// Select by the raw role string, degrading to the baseline feed.
    ///
    /// Names must match exactly; `"Recruiter"` gets the baseline feed.
    pub fn select_by_name(&self, role: &str) -> Vec<Notification> {
        match role.parse::<ActorRole>() {
            Ok(role) => self.select(role),
            Err(e) => {
                tracing::debug!("{}, serving baseline feed", e);
                self.baseline()
            }
        }
    }

    pub fn baseline(&self) -> Vec<Notification> {
        (self.baseline)()
    }
}

impl Default for FeedSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed feed for a role string using the built-in rules
pub fn select_feed(role: &str) -> Vec<Notification> {
    FeedSelector::new().select_by_name(role)
}

/// Generic feed served when no role-specific rule applies
pub fn baseline_feed() -> Vec<Notification> {
    vec![
        Notification::new(
            "1",
            NotificationKind::Success,
            NotificationCategory::Application,
            "Application Submitted",
            "Your application for Software Engineer Intern at TechCorp has been submitted successfully.",
            "2 hours ago",
        ),
        Notification::new(
            "2",
            NotificationKind::Info,
            NotificationCategory::Interview,
            "Interview Scheduled",
            "Technical interview scheduled for February 5th at 2:00 PM with TechCorp Inc.",
            "1 day ago",
        ),
        Notification::new(
            "3",
            NotificationKind::Warning,
            NotificationCategory::Deadline,
            "Application Deadline Approaching",
            "DataFlow Solutions internship application deadline is in 3 days.",
            "2 days ago",
        )
        .already_read(),
    ]
}

// Students track their own applications, which is exactly the baseline set.
fn student_feed() -> Vec<Notification> {
    baseline_feed()
}

fn placement_staff_feed() -> Vec<Notification> {
    vec![
        Notification::new(
            "1",
            NotificationKind::Info,
            NotificationCategory::System,
            "New Company Registration",
            "StartupXYZ has registered and posted 2 new job openings.",
            "1 hour ago",
        ),
        Notification::new(
            "2",
            NotificationKind::Warning,
            NotificationCategory::Application,
            "Pending Approvals",
            "5 student applications are waiting for faculty mentor approval.",
            "3 hours ago",
        ),
        Notification::new(
            "3",
            NotificationKind::Success,
            NotificationCategory::System,
            "Placement Drive Completed",
            "TechCorp placement drive completed with 8 successful hires.",
            "1 day ago",
        )
        .already_read(),
    ]
}

fn faculty_mentor_feed() -> Vec<Notification> {
    vec![
        Notification::new(
            "1",
            NotificationKind::Warning,
            NotificationCategory::Application,
            "Approval Request",
            "John Smith needs approval for Software Engineer Intern application.",
            "30 minutes ago",
        ),
        Notification::new(
            "2",
            NotificationKind::Info,
            NotificationCategory::Interview,
            "Interview Preparation",
            "Sarah Johnson has scheduled interview prep session for tomorrow.",
            "2 hours ago",
        ),
        Notification::new(
            "3",
            NotificationKind::Success,
            NotificationCategory::Application,
            "Student Placement",
            "Mike Wilson successfully placed at StartupXYZ as Full Stack Developer.",
            "1 day ago",
        )
        .already_read(),
    ]
}

fn recruiter_feed() -> Vec<Notification> {
    vec![
        Notification::new(
            "1",
            NotificationKind::Info,
            NotificationCategory::Application,
            "New Applications",
            "3 new applications received for Software Engineer Intern position.",
            "1 hour ago",
        ),
        Notification::new(
            "2",
            NotificationKind::Success,
            NotificationCategory::Interview,
            "Interview Completed",
            "Technical interview with John Smith completed successfully.",
            "4 hours ago",
        ),
        Notification::new(
            "3",
            NotificationKind::Warning,
            NotificationCategory::Deadline,
            "Application Deadline",
            "Data Science Intern position deadline is tomorrow.",
            "1 day ago",
        )
        .already_read(),
    ]
}
