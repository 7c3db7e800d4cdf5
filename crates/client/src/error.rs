use metr_core::types::DbId;

/// Errors surfaced by [`crate::MetrClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A mutation is already in flight for this project.
    #[error("Une operation est deja en cours pour le projet {project_id}")]
    Busy { project_id: DbId },

    /// The server answered with a non-2xx status. `message` is the
    /// server-provided text, surfaced verbatim to the user.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A transport-level failure (connection refused, timeout, bad JSON).
    #[error("Erreur reseau: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience type alias for client call results.
pub type ClientResult<T> = Result<T, ClientError>;
