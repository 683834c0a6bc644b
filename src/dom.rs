//! The DOM capabilities the catalog needs, as a trait so that its logic runs against fakes as well as [`WebDom`](`crate::web::WebDom`).

use crate::error::Error;

/// A user interaction the catalog subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
	/// Double-click inside the book list.
	FavoriteToggle,
	/// Click inside the filter panel.
	FilterChange,
}

impl Interaction {
	/// The DOM event type that drives this interaction.
	#[must_use]
	pub fn event_type(self) -> &'static str {
		match self {
			Self::FavoriteToggle => "dblclick",
			Self::FilterChange => "click",
		}
	}
}

/// State of a clicked checkbox, read after the click changed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
	pub name: String,
	pub value: String,
	pub checked: bool,
}

pub type Handler<E> = Box<dyn FnMut(&E)>;

pub trait Dom {
	type Element: Clone;
	type Event;

	/// # Errors
	///
	/// Iff `selector` is invalid.
	fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>, Error>;

	/// Materializes the first element in `markup`.
	///
	/// # Errors
	///
	/// Iff `markup` contains no element.
	fn create_from_html(&self, markup: &str) -> Result<Self::Element, Error>;

	/// # Errors
	///
	/// Iff the DOM refuses the insertion.
	fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), Error>;

	fn has_class(&self, element: &Self::Element, class: &str) -> bool;

	/// # Errors
	///
	/// Iff `class` isn't a valid token.
	fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), Error>;

	/// # Errors
	///
	/// Iff `class` isn't a valid token.
	fn remove_class(&self, element: &Self::Element, class: &str) -> Result<(), Error>;

	fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

	/// Registers `handler` for `interaction` on `target` for the rest of the page session.
	///
	/// # Errors
	///
	/// Iff the listener can't be attached.
	fn listen(&self, target: &Self::Element, interaction: Interaction, handler: Handler<Self::Event>) -> Result<(), Error>;

	fn prevent_default(&self, event: &Self::Event);

	/// The nearest element matching `selector`, starting at the event target and walking up.
	fn closest_target(&self, event: &Self::Event, selector: &str) -> Option<Self::Element>;

	/// The event target, iff it is a checkbox `<input>`.
	fn checkbox_target(&self, event: &Self::Event) -> Option<Checkbox>;
}
