//! Project lifecycle status.
//!
//! Maps to the PostgreSQL `statut_projet` enum. The wire values keep the
//! product's French labels (`En_attente`, `En_cours`, `Termine`, `Archive`),
//! so an unknown status is rejected at deserialization, before any SQL runs.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "statut_projet")]
pub enum ProjectStatus {
    #[serde(rename = "En_attente")]
    #[sqlx(rename = "En_attente")]
    EnAttente,
    #[serde(rename = "En_cours")]
    #[sqlx(rename = "En_cours")]
    EnCours,
    #[serde(rename = "Termine")]
    #[sqlx(rename = "Termine")]
    Termine,
    #[serde(rename = "Archive")]
    #[sqlx(rename = "Archive")]
    Archive,
}

impl ProjectStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::EnAttente,
        ProjectStatus::EnCours,
        ProjectStatus::Termine,
        ProjectStatus::Archive,
    ];

    /// The wire label, as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::EnAttente => "En_attente",
            ProjectStatus::EnCours => "En_cours",
            ProjectStatus::Termine => "Termine",
            ProjectStatus::Archive => "Archive",
        }
    }

    /// Whether a transition from `self` to `next` is legal.
    ///
    /// The lifecycle is a convention rather than a strict ladder: a project
    /// can move between any two statuses (reopening a finished project,
    /// un-archiving, etc.). The table exists so the rule lives in one place
    /// and is checked at the API boundary, not hidden in UI affordances.
    pub fn can_transition_to(self, next: ProjectStatus) -> bool {
        match (self, next) {
            (ProjectStatus::EnAttente, _)
            | (ProjectStatus::EnCours, _)
            | (ProjectStatus::Termine, _)
            | (ProjectStatus::Archive, _) => true,
        }
    }

    /// `true` for every status except `Archive`.
    ///
    /// The dashboard's "active projects" statistics filter on this.
    pub fn is_active(self) -> bool {
        self != ProjectStatus::Archive
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
