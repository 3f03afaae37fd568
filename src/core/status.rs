use crate::error::DeskTicketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    /// All statuses in lifecycle order
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    /// Wire name, as stored in the ticket record
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Human label used in listings
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "in progress",
            other => other.as_str(),
        }
    }

    /// Targets reachable from this status in one step.
    ///
    /// The forward edge comes first, followed by the reopen edge where one
    /// exists. A closed ticket is terminal.
    pub const fn available_transitions(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::InProgress],
            Self::InProgress => &[Self::Resolved, Self::Open],
            Self::Resolved => &[Self::Closed, Self::Open],
            Self::Closed => &[],
        }
    }

    pub fn can_transition_to(self, target: Self) -> bool {
        self.available_transitions().contains(&target)
    }

    /// Name of the action that moves a ticket from `self` to `target`
    pub const fn action_name(self, target: Self) -> &'static str {
        match (self, target) {
            (Self::Open, Self::InProgress) => "start",
            (Self::InProgress, Self::Resolved) => "resolve",
            (Self::Resolved, Self::Closed) => "close",
            (_, Self::Open) => "reopen",
            _ => "move",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DeskTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "open" => Ok(Self::Open),
            "in-progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(DeskTicketError::InvalidInput(format!(
                "Unknown status '{s}'. Expected one of: open, in-progress, resolved, closed"
            ))),
        }
    }
}

/// Ticket priority, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = DeskTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(DeskTicketError::InvalidInput(format!(
                "Unknown priority '{s}'. Expected one of: low, medium, high, critical"
            ))),
        }
    }
}

/// What kind of problem a ticket is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Hardware,
    Software,
    Network,
    Access,
    Other,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Hardware,
        Self::Software,
        Self::Network,
        Self::Access,
        Self::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hardware => "hardware",
            Self::Software => "software",
            Self::Network => "network",
            Self::Access => "access",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DeskTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "hardware" => Ok(Self::Hardware),
            "software" => Ok(Self::Software),
            "network" => Ok(Self::Network),
            "access" => Ok(Self::Access),
            "other" => Ok(Self::Other),
            _ => Err(DeskTicketError::InvalidInput(format!(
                "Unknown category '{s}'. Expected one of: hardware, software, network, access, other"
            ))),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', ' '], "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: Status = serde_json::from_str("\"resolved\"").unwrap();
        assert_eq!(parsed, Status::Resolved);
    }

    #[test]
    fn test_status_parse_variants() {
        assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!(" CLOSED ".parse::<Status>().unwrap(), Status::Closed);
        assert!("done".parse::<Status>().is_err());
    }

    #[test]
    fn test_allowed_edges() {
        let allowed = [
            (Status::Open, Status::InProgress),
            (Status::InProgress, Status::Resolved),
            (Status::Resolved, Status::Closed),
            (Status::InProgress, Status::Open),
            (Status::Resolved, Status::Open),
        ];

        for from in Status::ALL {
            for to in Status::ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    allowed.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_action_names() {
        assert_eq!(Status::Open.action_name(Status::InProgress), "start");
        assert_eq!(Status::Resolved.action_name(Status::Open), "reopen");
        assert_eq!(Status::Resolved.action_name(Status::Closed), "close");
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::Low < Priority::Medium);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Network".parse::<Category>().unwrap(), Category::Network);
        assert_eq!(Category::default(), Category::Hardware);
        assert!("printer".parse::<Category>().is_err());
    }
}
