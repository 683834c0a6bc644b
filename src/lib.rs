#![doc(html_root_url = "https://docs.rs/bookshelf-dom/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod book;
pub mod catalog;
pub mod config;
pub mod data;
pub mod dom;
pub mod error;
pub mod listeners;
pub mod rating;
pub mod template;
pub mod web;

pub use catalog::Catalog;
pub use error::Error;
