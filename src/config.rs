//! Page contract: which elements the catalog looks for and which classes it toggles.
//!
//! Every field has a default matching the stock catalog page,
//! so hosts only need to pass the parts of their markup that differ.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
	pub selectors: Selectors,
	pub class_names: ClassNames,
	/// `name` attribute of the checkboxes that count as filters. Other inputs in the filter panel are ignored.
	pub filter_input_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
	/// The element whose inner HTML is the book template.
	pub book_template: String,
	pub books_list: String,
	/// Click listener target for filter maintenance.
	pub filters: String,
	/// Matched against the double-clicked element and its ancestors.
	pub book_image_link: String,
	/// Class selector used to look a book up by its `data-id`, without tag name.
	pub book_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
	pub favorite: String,
	pub hidden: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			selectors: Selectors::default(),
			class_names: ClassNames::default(),
			filter_input_name: "filter".to_owned(),
		}
	}
}

impl Default for Selectors {
	fn default() -> Self {
		Self {
			book_template: "#template-book".to_owned(),
			books_list: "ul.books-list".to_owned(),
			filters: ".filters".to_owned(),
			book_image_link: "a.book__image".to_owned(),
			book_image: ".book__image".to_owned(),
		}
	}
}

impl Default for ClassNames {
	fn default() -> Self {
		Self {
			favorite: "favorite".to_owned(),
			hidden: "hidden".to_owned(),
		}
	}
}

impl Config {
	/// Parses a (partial) configuration object, e.g. `{"classNames": {"hidden": "is-hidden"}}`.
	///
	/// # Errors
	///
	/// Iff `json` isn't a JSON object of the expected shape.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Selector for the one element that carries book `id`'s visual state.
	#[must_use]
	pub fn book_link_selector(&self, id: u32) -> String {
		format!(r#"{}[data-id="{}"]"#, self.selectors.book_image, id)
	}
}
