//! HTTP handler modules, one per resource.

pub mod article;
pub mod document;
pub mod library;
pub mod membership;
pub mod notification;
pub mod plan;
pub mod project;
pub mod tag;
