//! Declared layout metadata
//!
//! A handler declares the layout it wants to be rendered in at two levels:
//!
//! - the handler type, through [`DeclaresLayout::LAYOUT`]
//! - an individual handler method, through
//!   [`HandlerMethod::with_layout`](crate::HandlerMethod::with_layout)
//!
//! The method-level declaration always takes precedence.
//!
//! # Examples
//!
//! ```
//! use reinhardt_layouts::{DeclaresLayout, Layout};
//!
//! struct AccountController;
//!
//! impl DeclaresLayout for AccountController {
//!     const LAYOUT: Option<Layout> = Some(Layout::new("layouts/account"));
//! }
//!
//! assert_eq!(
//!     AccountController::LAYOUT.map(|l| l.to_string()),
//!     Some("layouts/account".to_string())
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Name of a layout template declared by a handler
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout(Cow<'static, str>);

impl Layout {
	/// Declares a layout from a static template name.
	///
	/// Usable in `const` position so handler types can declare their layout
	/// as an associated constant.
	pub const fn new(name: &'static str) -> Self {
		Self(Cow::Borrowed(name))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&'static str> for Layout {
	fn from(name: &'static str) -> Self {
		Self::new(name)
	}
}

impl From<String> for Layout {
	fn from(name: String) -> Self {
		Self(Cow::Owned(name))
	}
}

impl AsRef<str> for Layout {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl fmt::Display for Layout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Type-level layout declaration for handler types
///
/// Types that do not override [`LAYOUT`](Self::LAYOUT) fall back to the
/// interceptor's default layout.
pub trait DeclaresLayout {
	const LAYOUT: Option<Layout> = None;
}
