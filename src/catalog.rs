use crate::{
	book::Book,
	config::Config,
	data::DataSource,
	dom::{Checkbox, Dom, Interaction},
	error::Error,
	template::BookTemplate,
};
use core::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info, instrument, trace};

/// Owns the rendered books, the favorites and the active filters for one page session.
///
/// # Lifecycle
///
/// [`Catalog::start`] renders every book, applies the (initially empty) filters once and subscribes to
/// [`Interaction::FavoriteToggle`] on the book list and [`Interaction::FilterChange`] on the filter panel.
/// The returned handle is shared with those listeners, so the catalog lives as long as they do.
pub struct Catalog<D: Dom> {
	dom: D,
	config: Config,
	list: D::Element,
	filters_panel: D::Element,
	books: Vec<Book<D::Element>>,
	favorites: Vec<u32>,
	filters: Vec<String>,
}

impl<D: Dom + 'static> Catalog<D> {
	/// # Errors
	///
	/// Iff the book list or filter panel is missing, a book can't be rendered or a listener can't be attached.
	#[instrument(skip(dom, config, template, data))]
	pub fn start(dom: D, config: Config, template: &BookTemplate, data: DataSource) -> Result<Rc<RefCell<Self>>, Error> {
		let catalog = Self::render(dom, config, template, data)?;
		catalog.filter_books()?;

		let catalog = Rc::new(RefCell::new(catalog));
		Self::init_actions(&catalog)?;
		Self::init_filtering(&catalog)?;
		info!("Catalog ready.");
		Ok(catalog)
	}

	fn init_actions(this: &Rc<RefCell<Self>>) -> Result<(), Error> {
		let catalog = Rc::clone(this);
		let this = this.borrow();
		this.dom.listen(
			&this.list,
			Interaction::FavoriteToggle,
			Box::new(move |event: &D::Event| {
				if let Err(error) = catalog.borrow_mut().on_favorite_toggle(event) {
					error!(%error, "Failed to toggle favorite.");
				}
			}),
		)
	}

	fn init_filtering(this: &Rc<RefCell<Self>>) -> Result<(), Error> {
		let catalog = Rc::clone(this);
		let this = this.borrow();
		this.dom.listen(
			&this.filters_panel,
			Interaction::FilterChange,
			Box::new(move |event: &D::Event| {
				if let Err(error) = catalog.borrow_mut().on_filter_click(event) {
					error!(%error, "Failed to apply filters.");
				}
			}),
		)
	}
}

impl<D: Dom> Catalog<D> {
	/// Renders every record into the book list, without filtering or subscribing to anything.
	///
	/// # Errors
	///
	/// Iff the book list or filter panel is missing, or a book can't be rendered.
	#[instrument(skip(dom, config, template, data))]
	pub fn render(dom: D, config: Config, template: &BookTemplate, data: DataSource) -> Result<Self, Error> {
		let list = Self::require(&dom, &config.selectors.books_list)?;
		let filters_panel = Self::require(&dom, &config.selectors.filters)?;

		let books = data
			.books
			.into_iter()
			.map(|record| Book::new(record.id, record, template, &dom, &list))
			.collect::<Result<Vec<_>, _>>()?;
		info!("Rendered {} book(s).", books.len());

		Ok(Self {
			dom,
			config,
			list,
			filters_panel,
			books,
			favorites: Vec::new(),
			filters: Vec::new(),
		})
	}

	fn require(dom: &D, selector: &str) -> Result<D::Element, Error> {
		dom.query_selector(selector)?.ok_or_else(|| Error::MissingElement(selector.to_owned()))
	}

	fn book_link(&self, id: u32) -> Result<D::Element, Error> {
		Self::require(&self.dom, &self.config.book_link_selector(id))
	}

	/// Double-click handler: toggles the favorite state of the book whose image link was double-clicked.
	/// Double-clicks elsewhere in the list are ignored.
	///
	/// # Errors
	///
	/// Iff the book link has no numeric `data-id`, or its classes can't be changed.
	pub fn on_favorite_toggle(&mut self, event: &D::Event) -> Result<(), Error> {
		self.dom.prevent_default(event);
		match self.dom.closest_target(event, &self.config.selectors.book_image_link) {
			Some(link) => self.toggle_favorite(&link).map(drop),
			None => {
				trace!("Double-click outside of book image links.");
				Ok(())
			}
		}
	}

	/// Flips `link`'s favorite marker and records or forgets its book id accordingly.
	/// Returns whether the book is a favorite now.
	///
	/// # Errors
	///
	/// Iff `link` has no numeric `data-id`, or its classes can't be changed.
	#[instrument(skip(self, link))]
	pub fn toggle_favorite(&mut self, link: &D::Element) -> Result<bool, Error> {
		let data_id = self.dom.attribute(link, "data-id");
		let id = match data_id.as_deref().map(str::trim).map(str::parse::<u32>) {
			Some(Ok(id)) => id,
			_ => return Err(Error::InvalidBookId(data_id)),
		};

		let favorite = &self.config.class_names.favorite;
		let now_favorite = if self.dom.has_class(link, favorite) {
			self.dom.remove_class(link, favorite)?;
			remove_first(&mut self.favorites, &id);
			false
		} else {
			self.dom.add_class(link, favorite)?;
			self.favorites.push(id);
			true
		};
		debug!(id, now_favorite, favorites = ?self.favorites, "Toggled favorite.");
		Ok(now_favorite)
	}

	/// Click handler for the filter panel: updates the active filters if a filter checkbox was clicked, then refilters.
	///
	/// The filter pass runs after every click in the panel, whether or not it changed anything.
	///
	/// # Errors
	///
	/// Iff a book's element is missing or its classes can't be changed.
	pub fn on_filter_click(&mut self, event: &D::Event) -> Result<(), Error> {
		if let Some(checkbox) = self.dom.checkbox_target(event) {
			self.apply_checkbox(&checkbox);
		}
		self.filter_books()
	}

	/// Adds or removes `checkbox`'s value from the active filters, iff it's a filter checkbox.
	/// Doesn't refilter. Returns whether the checkbox was a filter checkbox.
	pub fn apply_checkbox(&mut self, checkbox: &Checkbox) -> bool {
		if checkbox.name != self.config.filter_input_name {
			return false;
		}

		if checkbox.checked {
			self.filters.push(checkbox.value.clone());
		} else {
			remove_first(&mut self.filters, &checkbox.value);
		}
		debug!(filters = ?self.filters, "Updated filters.");
		true
	}

	/// Shows or hides every book according to the active filters.
	///
	/// Book elements are looked up anew on each pass.
	///
	/// # Errors
	///
	/// Iff a book's element is missing or its classes can't be changed.
	#[instrument(skip(self), fields(filters = ?self.filters))]
	pub fn filter_books(&self) -> Result<(), Error> {
		let hidden = &self.config.class_names.hidden;
		let mut hidden_count = 0_usize;
		for book in &self.books {
			let element = self.book_link(book.id())?;
			if book.record().is_filtered_by(self.filters.as_slice()) {
				self.dom.add_class(&element, hidden)?;
				hidden_count += 1;
			} else {
				self.dom.remove_class(&element, hidden)?;
			}
		}
		debug!("{}/{} book(s) hidden.", hidden_count, self.books.len());
		Ok(())
	}

	#[must_use]
	pub fn books(&self) -> &[Book<D::Element>] {
		&self.books
	}

	/// Favorite book ids, in the order they were marked.
	#[must_use]
	pub fn favorites(&self) -> &[u32] {
		&self.favorites
	}

	/// Active filter names, in the order they were checked.
	#[must_use]
	pub fn filters(&self) -> &[String] {
		&self.filters
	}

	#[must_use]
	pub fn config(&self) -> &Config {
		&self.config
	}

	#[must_use]
	pub fn dom(&self) -> &D {
		&self.dom
	}

	/// # Errors
	///
	/// Iff book `id` has no element.
	pub fn is_hidden(&self, id: u32) -> Result<bool, Error> {
		Ok(self.dom.has_class(&self.book_link(id)?, &self.config.class_names.hidden))
	}

	/// # Errors
	///
	/// Iff book `id` has no element.
	pub fn is_favorite(&self, id: u32) -> Result<bool, Error> {
		Ok(self.dom.has_class(&self.book_link(id)?, &self.config.class_names.favorite))
	}
}

fn remove_first<T: PartialEq>(items: &mut Vec<T>, item: &T) {
	if let Some(index) = items.iter().position(|candidate| candidate == item) {
		items.remove(index);
	}
}
