//! Shared fixtures for layout interceptor integration tests

// Not every test file uses every fixture.
#![allow(dead_code)]

use reinhardt_layouts::{DeclaresLayout, HandlerMethod, Layout, LayoutInterceptor, ModelAndView};
use rstest::fixture;

/// Controller without any layout declaration
pub struct UserController;

impl DeclaresLayout for UserController {}

/// Controller declaring a type-level layout
pub struct AdminController;

impl DeclaresLayout for AdminController {
	const LAYOUT: Option<Layout> = Some(Layout::new("layouts/admin"));
}

#[fixture]
pub fn interceptor() -> LayoutInterceptor {
	LayoutInterceptor::new()
}

#[fixture]
pub fn login_handler() -> HandlerMethod {
	HandlerMethod::new::<UserController>("login")
}

#[fixture]
pub fn admin_handler() -> HandlerMethod {
	HandlerMethod::new::<AdminController>("dashboard")
}

/// View result carrying a couple of unrelated model entries
pub fn populated_view(view: &str) -> ModelAndView {
	ModelAndView::new(view)
		.with_object("user", "alice")
		.with_object("items", serde_json::json!([1, 2, 3]))
}
