use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role held by the signed-in actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Student,
    PlacementStaff,
    FacultyMentor,
    Recruiter,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized actor role: {0}")]
pub struct UnknownRole(pub String);

impl ActorRole {
    pub const ALL: [ActorRole; 4] = [
        ActorRole::Student,
        ActorRole::PlacementStaff,
        ActorRole::FacultyMentor,
        ActorRole::Recruiter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActorRole::Student => "student",
            ActorRole::PlacementStaff => "placement_staff",
            ActorRole::FacultyMentor => "faculty_mentor",
            ActorRole::Recruiter => "recruiter",
        }
    }

    /// Case-insensitive parse ignoring surrounding whitespace, for operator input
    pub fn parse_lenient(s: &str) -> Result<Self, UnknownRole> {
        s.trim()
            .to_lowercase()
            .parse()
            .map_err(|_| UnknownRole(s.to_string()))
    }

    /// Human readable label shown in the header badge
    pub fn label(&self) -> &'static str {
        match self {
            ActorRole::Student => "Student",
            ActorRole::PlacementStaff => "Placement Staff",
            ActorRole::FacultyMentor => "Faculty Mentor",
            ActorRole::Recruiter => "Recruiter",
        }
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActorRole {
    type Err = UnknownRole;

    /// Exact match on the wire name, `"Recruiter"` is not a role
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(ActorRole::Student),
            "placement_staff" => Ok(ActorRole::PlacementStaff),
            "faculty_mentor" => Ok(ActorRole::FacultyMentor),
            "recruiter" => Ok(ActorRole::Recruiter),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in ActorRole::ALL {
            assert_eq!(role.as_str().parse::<ActorRole>(), Ok(role));
        }
    }

    #[test]
    fn test_role_parsing_is_exact() {
        assert!("Recruiter".parse::<ActorRole>().is_err());
        assert!(" student ".parse::<ActorRole>().is_err());
        assert!("PLACEMENT_STAFF".parse::<ActorRole>().is_err());
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(ActorRole::parse_lenient("Recruiter"), Ok(ActorRole::Recruiter));
        assert_eq!(ActorRole::parse_lenient(" student "), Ok(ActorRole::Student));
        assert_eq!(
            ActorRole::parse_lenient("dean"),
            Err(UnknownRole("dean".to_string()))
        );
    }

    #[test]
    fn test_unknown_role_is_an_error() {
        let err = "admin".parse::<ActorRole>().unwrap_err();
        assert_eq!(err, UnknownRole("admin".to_string()));
        assert_eq!(err.to_string(), "Unrecognized actor role: admin");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(ActorRole::PlacementStaff.label(), "Placement Staff");
        assert_eq!(ActorRole::FacultyMentor.label(), "Faculty Mentor");
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&ActorRole::PlacementStaff).unwrap();
        assert_eq!(json, "\"placement_staff\"");
    }
}
