//! Layout interceptor
//!
//! Wraps the view returned by a handler in a layout template. The handler's
//! view name is replaced by the layout name and the original name is stored
//! in the model, so the layout can include it as a sub-template.
//!
//! ```text
//! handler returns "loginView"
//!   -> view name  "layouts/default"
//!   -> model      { "view": "loginView" }
//! ```
//!
//! Views are left untouched when they are redirects (`redirect:`), forwards
//! (`forward:`) or fragment references (`file :: fragment`).

use crate::error::{LayoutError, Result, require_non_empty};
use crate::handler::HandlerMethod;
use crate::interceptor::HandlerInterceptor;
use crate::model_and_view::ModelAndView;
use crate::settings::{DEFAULT_LAYOUT, DEFAULT_VIEW_ATTRIBUTE_NAME, LayoutSettings};
use parking_lot::RwLock;
use std::any::{Any, type_name};
use std::sync::Arc;
use tracing::debug;

pub const REDIRECT_URL_PREFIX: &str = "redirect:";
pub const FORWARD_URL_PREFIX: &str = "forward:";
pub const FRAGMENT_SEPARATOR: &str = "::";

/// Returns `true` for views that transfer control instead of rendering.
pub fn is_redirect_or_forward(view_name: &str) -> bool {
	view_name.starts_with(REDIRECT_URL_PREFIX) || view_name.starts_with(FORWARD_URL_PREFIX)
}

/// Returns `true` for views that target a fragment of a template file.
pub fn is_fragment(view_name: &str) -> bool {
	view_name.contains(FRAGMENT_SEPARATOR)
}

/// Interceptor rendering handler views inside a layout
///
/// One instance is shared by every request. Both settings can be changed at
/// runtime; requests already past the read keep the values they saw.
///
/// # Examples
///
/// ```
/// use reinhardt_layouts::{DeclaresLayout, HandlerInterceptor, HandlerMethod, LayoutInterceptor, ModelAndView};
/// use serde_json::json;
///
/// struct UserController;
/// impl DeclaresLayout for UserController {}
///
/// let interceptor = LayoutInterceptor::new();
/// let handler = HandlerMethod::new::<UserController>("login");
/// let mut mav = ModelAndView::new("loginView");
///
/// interceptor.post_handle(&handler, Some(&mut mav)).unwrap();
///
/// assert_eq!(mav.view_name(), Some("layouts/default"));
/// assert_eq!(mav.model()["view"], json!("loginView"));
/// ```
#[derive(Debug)]
pub struct LayoutInterceptor {
	default_layout: RwLock<Arc<str>>,
	view_attribute_name: RwLock<Arc<str>>,
}

impl LayoutInterceptor {
	pub fn new() -> Self {
		Self {
			default_layout: RwLock::new(Arc::from(DEFAULT_LAYOUT)),
			view_attribute_name: RwLock::new(Arc::from(DEFAULT_VIEW_ATTRIBUTE_NAME)),
		}
	}

	/// Creates an interceptor from validated settings.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_layouts::{LayoutInterceptor, LayoutSettings};
	///
	/// let settings = LayoutSettings::from_toml_str(r#"view_attribute_name = "body""#).unwrap();
	/// let interceptor = LayoutInterceptor::from_settings(&settings).unwrap();
	/// assert_eq!(interceptor.view_attribute_name(), "body");
	/// ```
	pub fn from_settings(settings: &LayoutSettings) -> Result<Self> {
		settings.validate()?;
		Ok(Self {
			default_layout: RwLock::new(Arc::from(settings.default_layout.as_str())),
			view_attribute_name: RwLock::new(Arc::from(settings.view_attribute_name.as_str())),
		})
	}

	/// Replaces the layout used by handlers that declare none.
	///
	/// Fails with [`LayoutError::InvalidArgument`] on an empty name and keeps
	/// the current value.
	pub fn set_default_layout(&self, name: impl AsRef<str>) -> Result<()> {
		let name = name.as_ref();
		require_non_empty("default_layout", name)?;
		*self.default_layout.write() = Arc::from(name);
		Ok(())
	}

	/// Replaces the model key that carries the original view name.
	///
	/// Fails with [`LayoutError::InvalidArgument`] on an empty name and keeps
	/// the current value.
	pub fn set_view_attribute_name(&self, name: impl AsRef<str>) -> Result<()> {
		let name = name.as_ref();
		require_non_empty("view_attribute_name", name)?;
		*self.view_attribute_name.write() = Arc::from(name);
		Ok(())
	}

	pub fn default_layout(&self) -> String {
		self.default_layout.read().to_string()
	}

	pub fn view_attribute_name(&self) -> String {
		self.view_attribute_name.read().to_string()
	}

	/// Resolves the layout for `handler`.
	///
	/// The method-level declaration wins over the type-level one; without
	/// either the default layout is used.
	pub fn resolve_layout(&self, handler: &HandlerMethod) -> String {
		match handler.declared_layout() {
			Some(layout) => layout.to_string(),
			None => self.default_layout(),
		}
	}

	fn layout_for(&self, handler: &dyn Any) -> Result<String> {
		let handler = handler
			.downcast_ref::<HandlerMethod>()
			.ok_or(LayoutError::TypeMismatch {
				expected: type_name::<HandlerMethod>(),
			})?;
		Ok(self.resolve_layout(handler))
	}
}

impl Default for LayoutInterceptor {
	fn default() -> Self {
		Self::new()
	}
}

impl HandlerInterceptor for LayoutInterceptor {
	fn post_handle(&self, handler: &dyn Any, view: Option<&mut ModelAndView>) -> Result<()> {
		debug!("Layout interceptor post processing");

		let Some(mav) = view else {
			debug!("Request not applicable, skipping");
			return Ok(());
		};
		let Some(original_view) = mav.view_name().map(str::to_owned) else {
			debug!("Request not applicable, skipping");
			return Ok(());
		};

		if is_redirect_or_forward(&original_view) || is_fragment(&original_view) {
			debug!(view = %original_view, "View is a redirect/forward or a fragment, skipping");
			return Ok(());
		}

		let layout = self.layout_for(handler)?;
		let attribute = Arc::clone(&*self.view_attribute_name.read());

		mav.set_view_name(layout.as_str());
		mav.add_object(&*attribute, original_view.as_str());
		debug!(view = %original_view, layout = %layout, "Rendered view in layout");
		Ok(())
	}
}
