//! Layout interceptor settings
//!
//! Settings are usually read from the `[layouts]` table of the project's
//! TOML configuration:
//!
//! ```toml
//! default_layout = "layouts/base"
//! view_attribute_name = "content_view"
//! ```
//!
//! Missing keys fall back to [`DEFAULT_LAYOUT`] and
//! [`DEFAULT_VIEW_ATTRIBUTE_NAME`].

use crate::error::{Result, require_non_empty};
use serde::{Deserialize, Serialize};

/// Layout used when a handler declares none
pub const DEFAULT_LAYOUT: &str = "layouts/default";

/// Model key under which the original view name is exposed to the layout
pub const DEFAULT_VIEW_ATTRIBUTE_NAME: &str = "view";

fn default_layout() -> String {
	DEFAULT_LAYOUT.to_string()
}

fn default_view_attribute_name() -> String {
	DEFAULT_VIEW_ATTRIBUTE_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutSettings {
	#[serde(default = "default_layout")]
	pub default_layout: String,
	#[serde(default = "default_view_attribute_name")]
	pub view_attribute_name: String,
}

impl LayoutSettings {
	/// Parses and validates settings from TOML.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_layouts::LayoutSettings;
	///
	/// let settings = LayoutSettings::from_toml_str(r#"default_layout = "layouts/base""#).unwrap();
	/// assert_eq!(settings.default_layout, "layouts/base");
	/// assert_eq!(settings.view_attribute_name, "view");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Both values must be non-empty.
	pub fn validate(&self) -> Result<()> {
		require_non_empty("default_layout", &self.default_layout)?;
		require_non_empty("view_attribute_name", &self.view_attribute_name)
	}
}

impl Default for LayoutSettings {
	fn default() -> Self {
		Self {
			default_layout: default_layout(),
			view_attribute_name: default_view_attribute_name(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::LayoutError;
	use rstest::rstest;

	#[test]
	fn test_empty_document_uses_defaults() {
		let settings = LayoutSettings::from_toml_str("").unwrap();
		assert_eq!(settings, LayoutSettings::default());
		assert_eq!(settings.default_layout, "layouts/default");
		assert_eq!(settings.view_attribute_name, "view");
	}

	#[test]
	fn test_overrides() {
		let settings = LayoutSettings::from_toml_str(
			r#"
			default_layout = "layouts/base"
			view_attribute_name = "content_view"
			"#,
		)
		.unwrap();

		assert_eq!(settings.default_layout, "layouts/base");
		assert_eq!(settings.view_attribute_name, "content_view");
	}

	#[rstest]
	#[case(r#"default_layout = """#, "default_layout")]
	#[case(r#"view_attribute_name = """#, "view_attribute_name")]
	fn test_empty_values_rejected(#[case] source: &str, #[case] expected: &str) {
		let err = LayoutSettings::from_toml_str(source).unwrap_err();
		match err {
			LayoutError::InvalidArgument { setting, .. } => assert_eq!(setting, expected),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[rstest]
	#[case::unknown_key(r#"layout_dir = "templates""#)]
	#[case::wrong_type("default_layout = 42")]
	#[case::malformed("default_layout = ")]
	fn test_parse_errors(#[case] source: &str) {
		let err = LayoutSettings::from_toml_str(source).unwrap_err();
		assert!(matches!(err, LayoutError::Settings(_)));
	}
}
