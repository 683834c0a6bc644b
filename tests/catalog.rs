use bookshelf_dom::{
	config::Config,
	data::DataSource,
	dom::{Checkbox, Dom, Interaction},
	rating::RatingBackground,
	template::BookTemplate,
	Catalog, Error,
};
use std::{cell::RefCell, rc::Rc};

use fake_dom_::{FakeDom, FakeElement, FakeEvent};

const TEMPLATE: &str = r#"
<li class="book">
	<a href="" class="book__image" data-id="{{ id }}">
		<h2 class="book__name">{{ name }}</h2>
		<div class="book__rating__fill" style="width: {{ ratingWidth }}%; background: {{{ ratingBgc }}}"></div>
	</a>
</li>"#;

fn two_books() -> DataSource {
	DataSource::from_json(
		r#"{"books": [
			{"id": 1, "name": "The Wicked King", "price": 55.04, "rating": 7, "details": {"adults": false, "nonFiction": false}, "image": "images/books/1.jpg"},
			{"id": 2, "name": "Sapiens", "price": 32.25, "rating": 9, "details": {"adults": true, "nonFiction": true}, "image": "images/books/2.jpg"}
		]}"#,
	)
	.unwrap()
}

fn start(dom: &FakeDom, data: DataSource) -> Rc<RefCell<Catalog<FakeDom>>> {
	Catalog::start(dom.clone(), Config::default(), &BookTemplate::compile(TEMPLATE).unwrap(), data).unwrap()
}

fn double_click(dom: &FakeDom, id: u32) {
	assert_eq!(dom.dispatch(Interaction::FavoriteToggle, &FakeEvent::DoubleClick { target: Some(dom.link(id)) }), 1);
}

fn click_checkbox(dom: &FakeDom, name: &str, value: &str, checked: bool) {
	let checkbox = Checkbox {
		name: name.to_owned(),
		value: value.to_owned(),
		checked,
	};
	assert_eq!(dom.dispatch(Interaction::FilterChange, &FakeEvent::Click { checkbox: Some(checkbox) }), 1);
}

fn hidden(dom: &FakeDom) -> Vec<u32> {
	let mut hidden: Vec<u32> = [1, 2].iter().copied().filter(|&id| dom.link(id).has_class("hidden")).collect();
	hidden.sort_unstable();
	hidden
}

#[test]
fn renders_every_book_once_in_order() {
	let dom = FakeDom::page();
	let catalog = start(&dom, two_books());

	let list = dom.root("ul.books-list");
	let children = list.children();
	assert_eq!(children.len(), 2);
	assert_eq!(children[0].attribute("data-id").as_deref(), Some("1"));
	assert_eq!(children[1].attribute("data-id").as_deref(), Some("2"));

	assert!(children[0].markup().contains("width: 70%"));
	assert!(children[0].markup().contains(RatingBackground::Good.css()));
	assert!(children[1].markup().contains("width: 90%"));
	assert!(children[1].markup().contains(RatingBackground::Great.css()));
	assert!(children[0].markup().contains("The Wicked King"));

	let catalog = catalog.borrow();
	assert_eq!(catalog.books()[0].rating_background(), RatingBackground::Good);
	assert!((catalog.books()[1].rating_bar_width() - 90.).abs() < f64::EPSILON);
	assert_eq!(catalog.books()[1].element(), &children[1]);
	assert!(catalog.favorites().is_empty());
	assert!(catalog.filters().is_empty());
}

#[test]
fn subscribes_to_list_and_filter_panel() {
	let dom = FakeDom::page();
	let _catalog = start(&dom, two_books());

	assert_eq!(dom.listeners(Interaction::FavoriteToggle), [dom.root("ul.books-list")]);
	assert_eq!(dom.listeners(Interaction::FilterChange), [dom.root(".filters")]);
}

#[test]
fn end_to_end() {
	let dom = FakeDom::page();
	let catalog = start(
		&dom,
		DataSource::from_json(r#"{"books": [{"id": 1, "rating": 7, "details": {"adults": false}}, {"id": 2, "rating": 9, "details": {"adults": true}}]}"#).unwrap(),
	);
	assert!(hidden(&dom).is_empty());

	click_checkbox(&dom, "filter", "adults", true);
	assert_eq!(hidden(&dom), [2]);
	assert_eq!(catalog.borrow().filters(), ["adults"]);

	click_checkbox(&dom, "filter", "adults", false);
	assert!(hidden(&dom).is_empty());
	assert!(catalog.borrow().filters().is_empty());

	double_click(&dom, 1);
	assert_eq!(catalog.borrow().favorites(), [1]);
	assert!(dom.link(1).has_class("favorite"));
	assert!(catalog.borrow().is_favorite(1).unwrap());

	double_click(&dom, 1);
	assert!(catalog.borrow().favorites().is_empty());
	assert!(!dom.link(1).has_class("favorite"));

	assert_eq!(dom.root("ul.books-list").children().len(), 2);
}

#[test]
fn favorites_keep_marking_order() {
	let dom = FakeDom::page();
	let catalog = start(&dom, two_books());

	double_click(&dom, 2);
	double_click(&dom, 1);
	assert_eq!(catalog.borrow().favorites(), [2, 1]);

	double_click(&dom, 2);
	assert_eq!(catalog.borrow().favorites(), [1]);
	assert!(!dom.link(2).has_class("favorite"));
	assert!(dom.link(1).has_class("favorite"));
}

#[test]
fn double_click_outside_links_only_prevents_default() {
	let dom = FakeDom::page();
	let catalog = start(&dom, two_books());

	assert_eq!(dom.dispatch(Interaction::FavoriteToggle, &FakeEvent::DoubleClick { target: None }), 1);
	assert_eq!(dom.prevented(), 1);
	assert!(catalog.borrow().favorites().is_empty());
	assert!(dom.link(1).classes().is_empty());
}

#[test]
fn link_without_numeric_id_is_rejected_untouched() {
	let dom = FakeDom::page();
	let catalog = start(&dom, two_books());

	let link = FakeElement::with_attribute("data-id", "two");
	match catalog.borrow_mut().toggle_favorite(&link) {
		Err(Error::InvalidBookId(Some(found))) => assert_eq!(found, "two"),
		other => panic!("Unexpected result: {:?}", other),
	}
	assert!(!link.has_class("favorite"));

	// Handlers log the same failure instead of panicking.
	assert_eq!(dom.dispatch(Interaction::FavoriteToggle, &FakeEvent::DoubleClick { target: Some(FakeElement::default()) }), 1);
	assert!(catalog.borrow().favorites().is_empty());
}

#[test]
fn filters_hide_books_with_any_matching_detail() {
	let dom = FakeDom::page();
	let catalog = start(&dom, two_books());

	click_checkbox(&dom, "filter", "nonFiction", true);
	assert_eq!(hidden(&dom), [2]);
	assert!(catalog.borrow().is_hidden(2).unwrap());
	assert!(!catalog.borrow().is_hidden(1).unwrap());

	click_checkbox(&dom, "filter", "adults", true);
	assert_eq!(catalog.borrow().filters(), ["nonFiction", "adults"]);
	assert_eq!(hidden(&dom), [2]);

	click_checkbox(&dom, "filter", "nonFiction", false);
	assert_eq!(catalog.borrow().filters(), ["adults"]);
	assert_eq!(hidden(&dom), [2]);

	click_checkbox(&dom, "filter", "adults", false);
	assert!(hidden(&dom).is_empty());
}

#[test]
fn other_clicks_rerun_the_filter_pass_without_changing_filters() {
	let dom = FakeDom::page();
	let catalog = start(&dom, two_books());

	dom.add_class(&dom.link(1), "hidden").unwrap();
	click_checkbox(&dom, "sort", "price", true);
	assert!(catalog.borrow().filters().is_empty());
	assert!(hidden(&dom).is_empty());

	dom.add_class(&dom.link(1), "hidden").unwrap();
	assert_eq!(dom.dispatch(Interaction::FilterChange, &FakeEvent::Click { checkbox: None }), 1);
	assert!(hidden(&dom).is_empty());
}

#[test]
fn unchecking_an_inactive_filter_changes_nothing() {
	let dom = FakeDom::page();
	let catalog = start(&dom, two_books());

	click_checkbox(&dom, "filter", "adults", true);
	click_checkbox(&dom, "filter", "nonFiction", false);
	assert_eq!(catalog.borrow().filters(), ["adults"]);
}

#[test]
fn missing_book_element_fails_the_pass() {
	let dom = FakeDom::page();
	let catalog = start(&dom, two_books());

	dom.remove_book(1);
	match catalog.borrow().filter_books() {
		Err(Error::MissingElement(selector)) => assert_eq!(selector, r#".book__image[data-id="1"]"#),
		other => panic!("Unexpected result: {:?}", other),
	}

	// The handler logs it and keeps going for the next event.
	click_checkbox(&dom, "filter", "adults", true);
	assert_eq!(catalog.borrow().filters(), ["adults"]);
}

#[test]
fn missing_containers() {
	let dom = FakeDom::default();
	dom.add_root(".filters");
	let result = Catalog::start(dom, Config::default(), &BookTemplate::compile(TEMPLATE).unwrap(), two_books());
	assert!(matches!(result, Err(Error::MissingElement(selector)) if selector == "ul.books-list"));
}

#[test]
fn custom_class_names() {
	let dom = FakeDom::page();
	let config = Config::from_json(r#"{"classNames": {"favorite": "is-favorite", "hidden": "is-hidden"}}"#).unwrap();
	let catalog = Catalog::start(dom.clone(), config, &BookTemplate::compile(TEMPLATE).unwrap(), two_books()).unwrap();

	click_checkbox(&dom, "filter", "adults", true);
	double_click(&dom, 1);
	assert!(dom.link(2).has_class("is-hidden"));
	assert!(dom.link(1).has_class("is-favorite"));
	assert!(catalog.borrow().is_hidden(2).unwrap());
}

#[test]
fn render_alone_neither_filters_nor_subscribes() {
	let dom = FakeDom::page();
	let mut catalog = Catalog::render(dom.clone(), Config::default(), &BookTemplate::compile(TEMPLATE).unwrap(), two_books()).unwrap();
	assert!(dom.listeners(Interaction::FavoriteToggle).is_empty());
	assert!(dom.listeners(Interaction::FilterChange).is_empty());

	assert!(catalog.apply_checkbox(&Checkbox {
		name: "filter".to_owned(),
		value: "adults".to_owned(),
		checked: true,
	}));
	assert!(hidden(&dom).is_empty());
	catalog.filter_books().unwrap();
	assert_eq!(hidden(&dom), [2]);
}

#[test]
fn handlebars_blocks_and_loose_details() {
	let dom = FakeDom::page();
	let template = BookTemplate::compile(r#"<li><a class="book__image" data-id="{{ id }}">{{#if details.adults}}<span>18+</span>{{/if}}{{ name }}</a></li>"#).unwrap();
	let data = DataSource::from_json(
		r#"{"books": [
			{"id": 1, "name": "One", "rating": 7, "details": {"adults": null, "nonFiction": 0}},
			{"id": 2, "name": "Two", "rating": 9, "details": {"adults": 1, "nonFiction": "yes"}}
		]}"#,
	)
	.unwrap();
	let catalog = Catalog::start(dom.clone(), Config::default(), &template, data).unwrap();

	let children = dom.root("ul.books-list").children();
	assert_eq!(children.len(), 2);
	assert!(!children[0].markup().contains("18+"));
	assert!(children[1].markup().contains("<span>18+</span>Two"));

	click_checkbox(&dom, "filter", "adults", true);
	assert_eq!(hidden(&dom), [2]);
	click_checkbox(&dom, "filter", "nonFiction", true);
	assert_eq!(hidden(&dom), [2]);
	assert_eq!(catalog.borrow().filters(), ["adults", "nonFiction"]);
}
