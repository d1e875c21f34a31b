use serde::{Deserialize, Serialize};

use super::role::ActorRole;

/// A portal user viewing their own dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: ActorRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Year of study, students only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u8>,
    /// Employer, recruiters only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Actor {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: ActorRole,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into().to_lowercase(),
            name: name.into(),
            role,
            department: None,
            year: None,
            company: None,
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_year(mut self, year: u8) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// The seeded demo account for a role
    pub fn demo_for_role(role: ActorRole) -> Actor {
        match role {
            ActorRole::Student => Actor::new(
                "1",
                "john.student@university.edu",
                "John Smith",
                ActorRole::Student,
            )
            .with_department("Computer Science")
            .with_year(3),
            ActorRole::PlacementStaff => Actor::new(
                "2",
                "sarah.staff@university.edu",
                "Sarah Johnson",
                ActorRole::PlacementStaff,
            )
            .with_department("Placement Cell"),
            ActorRole::FacultyMentor => Actor::new(
                "3",
                "dr.mentor@university.edu",
                "Dr. Michael Brown",
                ActorRole::FacultyMentor,
            )
            .with_department("Computer Science"),
            ActorRole::Recruiter => Actor::new(
                "4",
                "recruiter@techcorp.com",
                "Emily Davis",
                ActorRole::Recruiter,
            )
            .with_company("TechCorp Inc."),
        }
    }
}

/// All seeded demo accounts, one per role
pub fn demo_actors() -> Vec<Actor> {
    ActorRole::ALL.into_iter().map(Actor::demo_for_role).collect()
}
