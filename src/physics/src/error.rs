use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a world or its particles.
///
/// The per-frame physics never fails; everything here is caught at
/// construction time.
#[derive(Debug, Error)]
pub enum Error {
	#[error("invalid parameter: {0}")]
	InvalidParam(String),
}

impl Error {
	pub(crate) fn param(msg: impl Into<String>) -> Self {
		Self::InvalidParam(msg.into())
	}
}
