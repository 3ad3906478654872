//! Post-handle interceptor hook
//!
//! Interceptors run after the handler has produced its [`ModelAndView`] and
//! before the view is rendered. They may rewrite the view name and model in
//! place.

use crate::error::Result;
use crate::model_and_view::ModelAndView;
use std::any::Any;
use std::sync::Arc;

/// Hook invoked by the dispatch pipeline once per request
///
/// `handler` is the opaque handler selected for the request. `view` is `None`
/// when the handler produced no view result at all.
///
/// # Examples
///
/// ```
/// use reinhardt_layouts::{HandlerInterceptor, ModelAndView, Result};
/// use std::any::Any;
///
/// struct Stamp;
///
/// impl HandlerInterceptor for Stamp {
///     fn post_handle(&self, _handler: &dyn Any, view: Option<&mut ModelAndView>) -> Result<()> {
///         if let Some(view) = view {
///             view.add_object("stamped", true);
///         }
///         Ok(())
///     }
/// }
///
/// let mut mav = ModelAndView::new("home");
/// Stamp.post_handle(&(), Some(&mut mav)).unwrap();
/// assert_eq!(mav.model()["stamped"], true);
/// ```
pub trait HandlerInterceptor: Send + Sync {
	fn post_handle(&self, handler: &dyn Any, view: Option<&mut ModelAndView>) -> Result<()>;
}

/// Ordered list of interceptors
///
/// Post-handle hooks run in reverse registration order, so the first
/// registered interceptor is the outermost one and sees the result last.
#[derive(Default, Clone)]
pub struct InterceptorChain {
	interceptors: Vec<Arc<dyn HandlerInterceptor>>,
}

impl InterceptorChain {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an interceptor using builder pattern.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_layouts::{InterceptorChain, LayoutInterceptor};
	/// use std::sync::Arc;
	///
	/// let chain = InterceptorChain::new().with_interceptor(Arc::new(LayoutInterceptor::new()));
	/// assert_eq!(chain.len(), 1);
	/// ```
	pub fn with_interceptor(mut self, interceptor: Arc<dyn HandlerInterceptor>) -> Self {
		self.interceptors.push(interceptor);
		self
	}

	pub fn add_interceptor(&mut self, interceptor: Arc<dyn HandlerInterceptor>) {
		self.interceptors.push(interceptor);
	}

	pub fn len(&self) -> usize {
		self.interceptors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.interceptors.is_empty()
	}

	/// Runs every post-handle hook, stopping at the first error.
	pub fn apply_post_handle(
		&self,
		handler: &dyn Any,
		mut view: Option<&mut ModelAndView>,
	) -> Result<()> {
		for interceptor in self.interceptors.iter().rev() {
			interceptor.post_handle(handler, view.as_deref_mut())?;
		}
		Ok(())
	}
}

impl std::fmt::Debug for InterceptorChain {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("InterceptorChain")
			.field("interceptors", &self.interceptors.len())
			.finish()
	}
}
