use wasm_bindgen::JsValue;

/// Everything that can go wrong while starting or driving a [`Catalog`](`crate::catalog::Catalog`).
///
/// Event handlers can't hand these to anyone, so they log them at `error` level instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("No element matches `{0}`.")]
	MissingElement(String),

	/// A DOM call threw. The payload is the debug rendering of the thrown [`JsValue`].
	#[error("DOM operation failed: {0}")]
	Dom(String),

	#[error("Malformed book template: {0}")]
	Template(#[from] handlebars::TemplateError),

	#[error("Failed to render book: {0}")]
	Render(#[from] handlebars::RenderError),

	#[error("Malformed data source: {0}")]
	Data(#[from] serde_json::Error),

	#[error("Data source can't be represented as JSON.")]
	Unserializable,

	#[error("Book link carries no usable `data-id` (found {0:?}).")]
	InvalidBookId(Option<String>),
}

impl Error {
	pub(crate) fn dom(thrown: &JsValue) -> Self {
		Self::Dom(format!("{:?}", thrown))
	}
}

impl From<Error> for JsValue {
	fn from(error: Error) -> Self {
		js_sys::Error::new(&error.to_string()).into()
	}
}
