use crate::{
	data::BookRecord,
	dom::Dom,
	error::Error,
	rating::{rating_background, rating_bar_width, RatingBackground},
	template::BookTemplate,
};
use serde_json::Value;
use tracing::{instrument, trace};

/// One rendered catalog entry.
///
/// A [`Book`] renders itself exactly once, when it's created.
/// Later visual changes (hidden, favorite) are applied to its element by the [`Catalog`](`crate::catalog::Catalog`).
#[derive(Debug, Clone)]
pub struct Book<E> {
	id: u32,
	record: BookRecord,
	rating_background: RatingBackground,
	rating_bar_width: f64,
	element: E,
}

impl<E: Clone> Book<E> {
	/// Renders `record` through `template` and appends the result to `list`.
	///
	/// # Errors
	///
	/// Iff the template fails to render or the markup can't be materialized or inserted.
	#[instrument(skip(record, template, dom, list))]
	pub fn new<D: Dom<Element = E>>(id: u32, record: BookRecord, template: &BookTemplate, dom: &D, list: &E) -> Result<Self, Error> {
		let rating_background = rating_background(record.rating);
		let rating_bar_width = rating_bar_width(record.rating);

		let markup = template.render(&Self::context(&record, rating_background, rating_bar_width)?)?;
		let element = dom.create_from_html(&markup)?;
		dom.append_child(list, &element)?;
		trace!(?rating_background, rating_bar_width, "Rendered book.");

		Ok(Self {
			id,
			record,
			rating_background,
			rating_bar_width,
			element,
		})
	}

	/// The record plus derived fields, under both the names page templates use and their long forms.
	fn context(record: &BookRecord, rating_background: RatingBackground, rating_bar_width: f64) -> Result<Value, Error> {
		let mut context = serde_json::to_value(record)?;
		if let Value::Object(fields) = &mut context {
			for &key in &["ratingBgc", "ratingBackground"] {
				fields.insert(key.to_owned(), rating_background.css().into());
			}
			for &key in &["ratingWidth", "ratingBarWidth"] {
				fields.insert(key.to_owned(), rating_bar_width.into());
			}
		}
		Ok(context)
	}

	#[must_use]
	pub fn id(&self) -> u32 {
		self.id
	}

	#[must_use]
	pub fn record(&self) -> &BookRecord {
		&self.record
	}

	#[must_use]
	pub fn rating_background(&self) -> RatingBackground {
		self.rating_background
	}

	#[must_use]
	pub fn rating_bar_width(&self) -> f64 {
		self.rating_bar_width
	}

	/// The element as inserted into the list. Note that visual state is applied to the element matching
	/// [`Config::book_link_selector`](`crate::config::Config::book_link_selector`) instead, which is usually a descendant.
	#[must_use]
	pub fn element(&self) -> &E {
		&self.element
	}
}
