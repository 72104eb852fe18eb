pub mod commands;
pub mod contracts;
pub mod error;
pub mod scoring;
pub mod statement;

pub use contracts::envelope::SuccessEnvelope;
pub use error::{ScoreError, ScoreResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
