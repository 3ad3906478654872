//! View result produced by a handler

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Model entries handed to the template engine
pub type Model = HashMap<String, Value>;

/// Holder for a logical view name and the model it is rendered with
///
/// A `ModelAndView` without a view name means the handler produced nothing to
/// render (for example it wrote the response body itself).
///
/// # Examples
///
/// ```
/// use reinhardt_layouts::ModelAndView;
/// use serde_json::json;
///
/// let mav = ModelAndView::new("users/list").with_object("count", 3);
///
/// assert!(mav.has_view());
/// assert_eq!(mav.view_name(), Some("users/list"));
/// assert_eq!(mav.model().get("count"), Some(&json!(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelAndView {
	view: Option<String>,
	#[serde(default)]
	model: Model,
}

impl ModelAndView {
	pub fn new(view: impl Into<String>) -> Self {
		Self {
			view: Some(view.into()),
			model: Model::new(),
		}
	}

	/// Creates a result with no view name and an empty model.
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn has_view(&self) -> bool {
		self.view.is_some()
	}

	pub fn view_name(&self) -> Option<&str> {
		self.view.as_deref()
	}

	pub fn set_view_name(&mut self, view: impl Into<String>) {
		self.view = Some(view.into());
	}

	/// Adds a model entry, replacing any existing value under `key`.
	pub fn add_object(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.model.insert(key.into(), value.into());
	}

	pub fn with_object(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.add_object(key, value);
		self
	}

	pub fn model(&self) -> &Model {
		&self.model
	}

	pub fn model_mut(&mut self) -> &mut Model {
		&mut self.model
	}

	pub fn into_parts(self) -> (Option<String>, Model) {
		(self.view, self.model)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_empty_has_no_view() {
		let mav = ModelAndView::empty();
		assert!(!mav.has_view());
		assert_eq!(mav.view_name(), None);
		assert!(mav.model().is_empty());
	}

	#[test]
	fn test_add_object_overwrites() {
		let mut mav = ModelAndView::new("home").with_object("view", "stale");
		mav.add_object("view", "fresh");

		assert_eq!(mav.model().len(), 1);
		assert_eq!(mav.model()["view"], json!("fresh"));
	}

	#[test]
	fn test_set_view_name_on_empty() {
		let mut mav = ModelAndView::empty();
		mav.set_view_name("layouts/default");
		assert_eq!(mav.view_name(), Some("layouts/default"));
	}

	#[test]
	fn test_serializes_for_template_context() {
		let mav = ModelAndView::new("layouts/default").with_object("view", "loginView");
		let value = serde_json::to_value(&mav).unwrap();

		assert_eq!(
			value,
			json!({ "view": "layouts/default", "model": { "view": "loginView" } })
		);
	}

	#[test]
	fn test_into_parts() {
		let (view, model) = ModelAndView::new("about").with_object("title", "About").into_parts();
		assert_eq!(view.as_deref(), Some("about"));
		assert_eq!(model.get("title"), Some(&json!("About")));
	}
}
