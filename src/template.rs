//! Book item templates, in Handlebars syntax.
//!
//! The template is registered once and then rendered for each book with the book's record as context.
//! Missing values render as nothing.

use crate::error::Error;
use handlebars::Handlebars;
use serde_json::Value;
use tracing::{instrument, trace};

const NAME: &str = "book";

/// A compiled template, reusable for any number of [`BookTemplate::render`] calls.
pub struct BookTemplate {
	registry: Handlebars<'static>,
}

impl BookTemplate {
	/// # Errors
	///
	/// Iff `source` isn't a valid Handlebars template.
	#[instrument(skip(source))]
	pub fn compile(source: &str) -> Result<Self, Error> {
		let mut registry = Handlebars::new();
		registry.register_template_string(NAME, source)?;
		trace!("Compiled book template.");
		Ok(Self { registry })
	}

	/// Whole numbers in `context` render without fraction, like they would in JavaScript.
	///
	/// # Errors
	///
	/// Iff a helper fails, e.g. `{{#each}}` over something that isn't a collection.
	pub fn render(&self, context: &Value) -> Result<String, Error> {
		let mut context = context.clone();
		integral_numbers(&mut context);
		Ok(self.registry.render(NAME, &context)?)
	}
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral_numbers(value: &mut Value) {
	match value {
		Value::Number(number) => {
			if let Some(float) = number.as_f64().filter(|float| number.is_f64() && float.fract() == 0. && float.abs() < 1e15) {
				*value = Value::from(float as i64);
			}
		}
		Value::Array(items) => items.iter_mut().for_each(integral_numbers),
		Value::Object(fields) => fields.values_mut().for_each(integral_numbers),
		Value::Null | Value::Bool(_) | Value::String(_) => (),
	}
}
