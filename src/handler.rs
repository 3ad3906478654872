//! Handler descriptors
//!
//! The dispatch pipeline hands interceptors an opaque reference to the
//! handler it selected. For controller-style handlers that reference is a
//! [`HandlerMethod`], which carries the layout metadata declared on the
//! method and on its enclosing type.

use crate::metadata::{DeclaresLayout, Layout};
use std::any::type_name;

/// The type a handler method belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerType {
	name: &'static str,
	layout: Option<Layout>,
}

impl HandlerType {
	/// Creates a type descriptor without a declared layout.
	///
	/// Prefer [`HandlerType::of`] when the handler type is available
	/// statically.
	pub fn new(name: &'static str) -> Self {
		Self { name, layout: None }
	}

	/// Captures the descriptor of `T`, including its declared layout.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_layouts::{DeclaresLayout, HandlerType, Layout};
	///
	/// struct Dashboard;
	/// impl DeclaresLayout for Dashboard {
	///     const LAYOUT: Option<Layout> = Some(Layout::new("layouts/wide"));
	/// }
	///
	/// let ty = HandlerType::of::<Dashboard>();
	/// assert!(ty.name().ends_with("Dashboard"));
	/// assert_eq!(ty.layout().map(Layout::as_str), Some("layouts/wide"));
	/// ```
	pub fn of<T: DeclaresLayout>() -> Self {
		Self {
			name: type_name::<T>(),
			layout: T::LAYOUT,
		}
	}

	pub fn with_layout(mut self, layout: impl Into<Layout>) -> Self {
		self.layout = Some(layout.into());
		self
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn layout(&self) -> Option<&Layout> {
		self.layout.as_ref()
	}
}

/// A single handler method selected by the dispatcher
///
/// # Examples
///
/// ```
/// use reinhardt_layouts::{DeclaresLayout, HandlerMethod, Layout};
///
/// struct UserController;
/// impl DeclaresLayout for UserController {}
///
/// let login = HandlerMethod::new::<UserController>("login")
///     .with_layout("layouts/alternate");
///
/// assert_eq!(login.method_name(), "login");
/// assert_eq!(login.method_layout().map(Layout::as_str), Some("layouts/alternate"));
/// assert_eq!(login.type_layout(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerMethod {
	handler_type: HandlerType,
	method: &'static str,
	layout: Option<Layout>,
}

impl HandlerMethod {
	pub fn new<T: DeclaresLayout>(method: &'static str) -> Self {
		Self::from_parts(HandlerType::of::<T>(), method)
	}

	/// Builds a descriptor from an explicitly registered handler type.
	pub fn from_parts(handler_type: HandlerType, method: &'static str) -> Self {
		Self {
			handler_type,
			method,
			layout: None,
		}
	}

	/// Attaches a method-level layout declaration.
	pub fn with_layout(mut self, layout: impl Into<Layout>) -> Self {
		self.layout = Some(layout.into());
		self
	}

	pub fn handler_type(&self) -> &HandlerType {
		&self.handler_type
	}

	pub fn method_name(&self) -> &'static str {
		self.method
	}

	pub fn method_layout(&self) -> Option<&Layout> {
		self.layout.as_ref()
	}

	pub fn type_layout(&self) -> Option<&Layout> {
		self.handler_type.layout()
	}

	/// Looks up the declared layout, method level first, then type level.
	pub fn declared_layout(&self) -> Option<&Layout> {
		self.method_layout().or_else(|| self.type_layout())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Bare;
	impl DeclaresLayout for Bare {}

	struct Themed;
	impl DeclaresLayout for Themed {
		const LAYOUT: Option<Layout> = Some(Layout::new("layouts/themed"));
	}

	#[rstest]
	#[case::nothing_declared(HandlerMethod::new::<Bare>("index"), None)]
	#[case::type_only(HandlerMethod::new::<Themed>("index"), Some("layouts/themed"))]
	#[case::method_only(
		HandlerMethod::new::<Bare>("index").with_layout("layouts/method"),
		Some("layouts/method")
	)]
	#[case::method_wins(
		HandlerMethod::new::<Themed>("index").with_layout("layouts/method"),
		Some("layouts/method")
	)]
	fn test_declared_layout(#[case] handler: HandlerMethod, #[case] expected: Option<&str>) {
		assert_eq!(handler.declared_layout().map(Layout::as_str), expected);
	}

	#[test]
	fn test_from_parts() {
		let ty = HandlerType::new("pages::About").with_layout("layouts/static");
		let handler = HandlerMethod::from_parts(ty, "show");

		assert_eq!(handler.handler_type().name(), "pages::About");
		assert_eq!(handler.method_name(), "show");
		assert_eq!(handler.type_layout().map(Layout::as_str), Some("layouts/static"));
		assert_eq!(handler.method_layout(), None);
	}

	#[test]
	fn test_type_name_is_captured() {
		let handler = HandlerMethod::new::<Themed>("index");
		assert!(handler.handler_type().name().ends_with("Themed"));
	}
}
