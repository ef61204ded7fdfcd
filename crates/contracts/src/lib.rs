//! Data-transfer types exchanged with the equipment checkout API.
//!
//! Everything here is a read-only snapshot of what the backend returns, plus
//! the request payload handed to the submission collaborator.

pub mod domain;
pub mod usecases;
