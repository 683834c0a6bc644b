//! [`Dom`] over the browser's document, and the JavaScript entry points.

use crate::{
	catalog::Catalog,
	config::Config,
	data::DataSource,
	dom::{Checkbox, Dom, Handler, Interaction},
	error::Error,
	listeners,
	template::BookTemplate,
};
use tracing::info;
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTemplateElement};

#[derive(Debug, Clone)]
pub struct WebDom {
	document: Document,
}

impl WebDom {
	#[must_use]
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	/// The current window's document.
	///
	/// # Errors
	///
	/// Iff there is no window or it has no document, e.g. in a worker.
	pub fn from_window() -> Result<Self, Error> {
		web_sys::window()
			.and_then(|window| window.document())
			.map(Self::new)
			.ok_or_else(|| Error::MissingElement("document".to_owned()))
	}

	#[must_use]
	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Reads the inner HTML of the element matching `selector`, which for a `<template>` is its content markup.
	///
	/// # Errors
	///
	/// Iff no element matches `selector`.
	pub fn inner_html(&self, selector: &str) -> Result<String, Error> {
		self.query_selector(selector)?.map(|element| element.inner_html()).ok_or_else(|| Error::MissingElement(selector.to_owned()))
	}
}

impl Dom for WebDom {
	type Element = Element;
	type Event = web_sys::Event;

	fn query_selector(&self, selector: &str) -> Result<Option<Element>, Error> {
		self.document.query_selector(selector).map_err(|thrown| Error::dom(&thrown))
	}

	fn create_from_html(&self, markup: &str) -> Result<Element, Error> {
		let template: HtmlTemplateElement = self
			.document
			.create_element("template")
			.map_err(|thrown| Error::dom(&thrown))?
			.dyn_into()
			.map_err(|element| Error::dom(&element))?;
		template.set_inner_html(markup.trim());
		template.content().first_element_child().ok_or_else(|| Error::MissingElement(format!("element in generated markup {:?}", markup)))
	}

	fn append_child(&self, parent: &Element, child: &Element) -> Result<(), Error> {
		parent.append_child(child).map(drop).map_err(|thrown| Error::dom(&thrown))
	}

	fn has_class(&self, element: &Element, class: &str) -> bool {
		element.class_list().contains(class)
	}

	fn add_class(&self, element: &Element, class: &str) -> Result<(), Error> {
		element.class_list().add_1(class).map_err(|thrown| Error::dom(&thrown))
	}

	fn remove_class(&self, element: &Element, class: &str) -> Result<(), Error> {
		element.class_list().remove_1(class).map_err(|thrown| Error::dom(&thrown))
	}

	fn attribute(&self, element: &Element, name: &str) -> Option<String> {
		element.get_attribute(name)
	}

	fn listen(&self, target: &Element, interaction: Interaction, handler: Handler<web_sys::Event>) -> Result<(), Error> {
		listeners::publish(target, interaction, handler).map_err(|thrown| Error::dom(&thrown))
	}

	fn prevent_default(&self, event: &web_sys::Event) {
		event.prevent_default();
	}

	fn closest_target(&self, event: &web_sys::Event, selector: &str) -> Option<Element> {
		let target = event.target()?;
		let element = target.dyn_ref::<Element>()?;
		element.closest(selector).ok().flatten()
	}

	fn checkbox_target(&self, event: &web_sys::Event) -> Option<Checkbox> {
		let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
		let element: &HtmlElement = input.as_ref();
		(element.tag_name() == "INPUT" && input.type_() == "checkbox").then(|| Checkbox {
			name: input.name(),
			value: input.value(),
			checked: input.checked(),
		})
	}
}

/// Starts the catalog on the current page.
///
/// `data_source` is the already-parsed `{ books: [...] }` set.
/// `config` is an optional object that may override any part of [`Config`]'s defaults.
///
/// # Errors
///
/// Iff the data set, configuration or book template is malformed, or the page lacks a required element.
#[wasm_bindgen(js_name = startCatalog)]
pub fn start_catalog(data_source: &JsValue, config: &JsValue) -> Result<(), JsValue> {
	#[cfg(feature = "console-log")]
	tracing_wasm::try_set_as_global_default().ok();

	let config = if config.is_undefined() || config.is_null() {
		Config::default()
	} else {
		Config::from_json(&to_json(config)?).map_err(Error::from)?
	};
	let data = DataSource::from_json(&to_json(data_source)?)?;
	let dom = WebDom::from_window()?;
	let template = BookTemplate::compile(&dom.inner_html(&config.selectors.book_template)?)?;

	let catalog = Catalog::start(dom, config, &template, data)?;
	info!("Catalog started with {} book(s).", catalog.borrow().books().len());
	Ok(())
}

/// Passes `value` through `JSON.stringify`.
pub(crate) fn to_json(value: &JsValue) -> Result<String, Error> {
	let json: JsValue = js_sys::JSON::stringify(value).map_err(|thrown| Error::dom(&thrown))?.into();
	json.as_string().ok_or(Error::Unserializable)
}

/// Detaches the catalog's listeners, which drops it.
#[wasm_bindgen(js_name = stopCatalog)]
pub fn stop_catalog() {
	let released = listeners::release(Interaction::FavoriteToggle) + listeners::release(Interaction::FilterChange);
	info!("Catalog stopped ({} listener(s) released).", released);
}
