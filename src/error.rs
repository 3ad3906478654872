//! Error types for layout resolution

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while configuring or running the layout interceptor
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
	/// A configuration value was rejected; the previous value is kept
	#[error("Invalid argument for '{setting}': {reason}")]
	InvalidArgument {
		setting: &'static str,
		reason: &'static str,
	},

	/// The pipeline passed a handler this interceptor cannot inspect
	#[error("Type mismatch: expected handler of type `{expected}`")]
	TypeMismatch { expected: &'static str },

	#[error("TOML error: {0}")]
	Settings(#[from] toml::de::Error),
}

impl LayoutError {
	pub(crate) fn empty(setting: &'static str) -> Self {
		Self::InvalidArgument {
			setting,
			reason: "value must not be empty",
		}
	}
}

/// Rejects empty configuration values
pub(crate) fn require_non_empty(setting: &'static str, value: &str) -> Result<()> {
	if value.is_empty() {
		return Err(LayoutError::empty(setting));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_require_non_empty() {
		assert!(require_non_empty("default_layout", "layouts/main").is_ok());

		let err = require_non_empty("default_layout", "").unwrap_err();
		assert!(matches!(
			err,
			LayoutError::InvalidArgument {
				setting: "default_layout",
				..
			}
		));
		assert_eq!(
			err.to_string(),
			"Invalid argument for 'default_layout': value must not be empty"
		);
	}

	#[test]
	fn test_type_mismatch_message() {
		let err = LayoutError::TypeMismatch {
			expected: "reinhardt_layouts::handler::HandlerMethod",
		};
		assert!(err.to_string().contains("HandlerMethod"));
	}
}
