//! The catalog's static data set.

use crate::{error::Error, web::to_json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};
use wasm_bindgen::JsValue;

/// One catalog entry, as supplied by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
	pub id: u32,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub price: f64,
	/// 0 to 10.
	pub rating: f64,
	/// Filter attributes, e.g. `"adults"` or `"nonFiction"`.
	/// Values aren't validated: any JSON value counts, by JavaScript truthiness.
	#[serde(default)]
	pub details: Map<String, Value>,
	/// Cover image URL.
	#[serde(default)]
	pub image: String,
	/// Any further fields, passed through to the template unchanged.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl BookRecord {
	/// Whether any of `filters` names a truthy attribute of this book.
	#[must_use]
	pub fn is_filtered_by<S: AsRef<str>>(&self, filters: &[S]) -> bool {
		filters.iter().any(|filter| self.details.get(filter.as_ref()).map_or(false, truthy))
	}
}

/// `false`, `null`, `0`, `NaN` and `""` are falsy. Everything else, including empty arrays and objects, is truthy.
fn truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(bool) => *bool,
		Value::Number(number) => number.as_f64().map_or(true, |number| number.abs() > 0.),
		Value::String(string) => !string.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSource {
	pub books: Vec<BookRecord>,
}

impl DataSource {
	/// Decodes `{"books": [...]}`.
	///
	/// # Errors
	///
	/// Iff `json` isn't JSON or has no `books` list.
	/// Individual malformed records are skipped with a warning instead.
	pub fn from_json(json: &str) -> Result<Self, Error> {
		Self::from_value(serde_json::from_str(json)?)
	}

	/// See [`DataSource::from_json`].
	///
	/// # Errors
	///
	/// Iff `value` isn't an object with a `books` list.
	#[instrument(skip(value))]
	pub fn from_value(value: Value) -> Result<Self, Error> {
		#[derive(Deserialize)]
		struct Shape {
			books: Vec<Value>,
		}

		let Shape { books: raw } = serde_json::from_value(value)?;
		let total = raw.len();
		let books: Vec<BookRecord> = raw
			.iter()
			.enumerate()
			.filter_map(|(index, raw)| match BookRecord::deserialize(raw) {
				Ok(book) => Some(book),
				Err(error) => {
					if cfg!(feature = "dangerous-logging") {
						warn!(index, %error, record = %raw, "Skipping malformed book record.");
					} else {
						warn!(index, %error, "Skipping malformed book record.");
					}
					None
				}
			})
			.collect();
		info!("Loaded {}/{} book record(s).", books.len(), total);
		Ok(Self { books })
	}

	/// Reads a data set that's already a JavaScript object, like the page's global `dataSource`.
	///
	/// # Errors
	///
	/// Iff `value` can't be passed through `JSON.stringify` or doesn't decode as in [`DataSource::from_json`].
	pub fn from_js(value: &JsValue) -> Result<Self, Error> {
		Self::from_json(&to_json(value)?)
	}
}
