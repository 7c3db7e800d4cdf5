//! Shared response envelope types for API handlers.
//!
//! Mutation endpoints acknowledge with `{ "message": ... }` and never echo
//! the mutated entity; the client resynchronizes with a full refetch.
//! Endpoints that create a row additionally return its id under a
//! resource-specific key (`idProjet`, `idPlan`, `idFichier`, ...).

use metr_core::types::DbId;
use serde::Serialize;

/// Standard `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement for a creation, carrying the new row's id.
///
/// The id key is resource-specific, so handlers construct this through
/// [`CreatedResponse::project`] and friends.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    #[serde(rename = "idProjet", skip_serializing_if = "Option::is_none")]
    pub id_projet: Option<DbId>,
    #[serde(rename = "idPlan", skip_serializing_if = "Option::is_none")]
    pub id_plan: Option<DbId>,
    #[serde(rename = "idFichier", skip_serializing_if = "Option::is_none")]
    pub id_fichier: Option<DbId>,
    #[serde(rename = "idTag", skip_serializing_if = "Option::is_none")]
    pub id_tag: Option<DbId>,
}

impl CreatedResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id_projet: None,
            id_plan: None,
            id_fichier: None,
            id_tag: None,
        }
    }

    pub fn project(message: impl Into<String>, id: DbId) -> Self {
        Self {
            id_projet: Some(id),
            ..Self::new(message)
        }
    }

    pub fn plan(message: impl Into<String>, id: DbId) -> Self {
        Self {
            id_plan: Some(id),
            ..Self::new(message)
        }
    }

    pub fn fichier(message: impl Into<String>, id: DbId) -> Self {
        Self {
            id_fichier: Some(id),
            ..Self::new(message)
        }
    }

    pub fn tag(message: impl Into<String>, id: DbId) -> Self {
        Self {
            id_tag: Some(id),
            ..Self::new(message)
        }
    }
}
