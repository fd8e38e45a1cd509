//! Team model — a registered pair of mus players.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, TeamId};

/// A registered pair. Immutable once the schedule has been generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier (derived from the team name)
    pub id: TeamId,

    /// Display name, unique across the tournament
    pub name: String,

    /// First player name
    pub player1: String,

    /// Second player name
    pub player2: String,

    /// When this team registered
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Create a new Team with auto-generated ID.
    pub fn new(name: String, player1: String, player2: String) -> Self {
        let id = EntityId::generate(&[&name]);
        Self {
            id,
            name,
            player1,
            player2,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_creation() {
        let team = Team::new(
            "Los Galácticos".to_string(),
            "Ana".to_string(),
            "Luis".to_string(),
        );

        assert_eq!(team.name, "Los Galácticos");
        assert_eq!(team.player1, "Ana");
        assert_eq!(team.player2, "Luis");
        assert!(!team.id.as_str().is_empty());
    }

    #[test]
    fn test_team_id_deterministic() {
        let t1 = Team::new("La Peña".to_string(), "Marta".to_string(), "Jon".to_string());
        let t2 = Team::new("La Peña".to_string(), "Marta".to_string(), "Jon".to_string());
        assert_eq!(t1.id, t2.id);
    }

    #[test]
    fn test_team_id_depends_on_name_only() {
        // Same name with different players collides by design: names are unique
        let t1 = Team::new("La Peña".to_string(), "Marta".to_string(), "Jon".to_string());
        let t2 = Team::new("La Peña".to_string(), "Iker".to_string(), "Eva".to_string());
        assert_eq!(t1.id, t2.id);
    }

    #[test]
    fn test_team_serialization() {
        let team = Team::new(
            "Los Galácticos".to_string(),
            "Ana".to_string(),
            "Luis".to_string(),
        );

        let json = serde_json::to_string(&team).unwrap();
        let deserialized: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(team.id, deserialized.id);
        assert_eq!(team.name, deserialized.name);
    }
}
