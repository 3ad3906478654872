//! # Reinhardt Layouts
//!
//! Layout decoration for server-rendered views.
//!
//! After a handler returns a view name, [`LayoutInterceptor`] swaps that name
//! for a layout template and exposes the original view to the layout through
//! the model. A layout then includes the page it decorates:
//!
//! ```text
//! <main>{{ include(view) }}</main>
//! ```
//!
//! ## Choosing a layout
//!
//! The layout is resolved in order from:
//!
//! 1. the handler method ([`HandlerMethod::with_layout`])
//! 2. the handler type ([`DeclaresLayout::LAYOUT`])
//! 3. the interceptor default (`"layouts/default"` unless configured)
//!
//! Redirects (`redirect:`), forwards (`forward:`) and fragment references
//! (`file :: fragment`) are never wrapped.
//!
//! ## Example
//!
//! ```
//! use reinhardt_layouts::{
//!     DeclaresLayout, HandlerMethod, InterceptorChain, Layout, LayoutInterceptor, ModelAndView,
//! };
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! struct AccountController;
//!
//! impl DeclaresLayout for AccountController {
//!     const LAYOUT: Option<Layout> = Some(Layout::new("layouts/account"));
//! }
//!
//! let chain = InterceptorChain::new().with_interceptor(Arc::new(LayoutInterceptor::new()));
//!
//! let handler = HandlerMethod::new::<AccountController>("profile");
//! let mut mav = ModelAndView::new("account/profile");
//! chain.apply_post_handle(&handler, Some(&mut mav)).unwrap();
//!
//! assert_eq!(mav.view_name(), Some("layouts/account"));
//! assert_eq!(mav.model()["view"], json!("account/profile"));
//! ```

pub mod error;
pub mod handler;
pub mod interceptor;
pub mod layout;
pub mod metadata;
pub mod model_and_view;
pub mod settings;

pub use error::{LayoutError, Result};
pub use handler::{HandlerMethod, HandlerType};
pub use interceptor::{HandlerInterceptor, InterceptorChain};
pub use layout::{
	FORWARD_URL_PREFIX, FRAGMENT_SEPARATOR, LayoutInterceptor, REDIRECT_URL_PREFIX, is_fragment,
	is_redirect_or_forward,
};
pub use metadata::{DeclaresLayout, Layout};
pub use model_and_view::{Model, ModelAndView};
pub use settings::{DEFAULT_LAYOUT, DEFAULT_VIEW_ATTRIBUTE_NAME, LayoutSettings};
