//! Request context abstraction
//!
//! Derivation only needs one thing from the hosting web stack: the absolute
//! URI of the current request, used as the base of hyperlink and relationship
//! fields. The [`RequestContext`] trait keeps that dependency abstract so the
//! shim can sit under any HTTP front end.

use url::Url;

/// The slice of a web request the field deriver consumes.
pub trait RequestContext: Send + Sync {
	/// Path of the current request, e.g. `/api/cars/`.
	fn path(&self) -> &str;

	/// Build an absolute URI for the given path on the current host.
	fn build_absolute_uri(&self, path: &str) -> String;
}

/// Minimal [`RequestContext`] backed by a parsed base URL.
///
/// Suitable for hosts without a full HTTP stack and for tests.
///
/// # Examples
///
/// ```
/// use orm_serializers::{RequestContext, SimpleRequest};
///
/// let request = SimpleRequest::new("http://testserver", "/api/cars/").unwrap();
/// assert_eq!(
/// 	request.build_absolute_uri(request.path()),
/// 	"http://testserver/api/cars/"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SimpleRequest {
	base: Url,
	path: String,
}

impl SimpleRequest {
	/// Create a request context from a base URL and a request path.
	pub fn new(base: &str, path: impl Into<String>) -> Result<Self, url::ParseError> {
		Ok(Self {
			base: Url::parse(base)?,
			path: path.into(),
		})
	}
}

impl RequestContext for SimpleRequest {
	fn path(&self) -> &str {
		&self.path
	}

	fn build_absolute_uri(&self, path: &str) -> String {
		match self.base.join(path) {
			Ok(url) => url.to_string(),
			// join only fails on malformed input paths
			Err(_) => format!("{}{}", self.base, path),
		}
	}
}
