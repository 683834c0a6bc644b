use crate::dom::Interaction;
use core::cell::RefCell;
use hashbrown::HashMap;
use js_sys::Function;
use tracing::{trace, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::EventTarget;

struct Listener {
	target: EventTarget,
	closure: Closure<dyn FnMut(web_sys::Event)>,
}

thread_local! {
	static LISTENERS: RefCell<HashMap<Interaction, Vec<Listener>>> = RefCell::default();
}

/// Attaches `handler` to `target` and keeps it alive until [`release`].
pub(crate) fn publish(target: &EventTarget, interaction: Interaction, mut handler: Box<dyn FnMut(&web_sys::Event)>) -> Result<(), wasm_bindgen::JsValue> {
	let closure = Closure::wrap(Box::new(move |event: web_sys::Event| handler(&event)) as Box<dyn FnMut(web_sys::Event)>);
	target.add_event_listener_with_callback(interaction.event_type(), closure.as_ref().unchecked_ref::<Function>())?;
	LISTENERS.with(move |listeners| {
		listeners.borrow_mut().entry(interaction).or_default().push(Listener { target: target.clone(), closure });
	});
	trace!(?interaction, "Created listener closure.");
	Ok(())
}

/// Number of live listeners for `interaction`.
#[must_use]
pub fn count(interaction: Interaction) -> usize {
	LISTENERS.with(|listeners| listeners.borrow().get(&interaction).map_or(0, Vec::len))
}

/// Detaches and drops all listeners for `interaction`, returning how many there were.
///
/// Any state captured by the handlers (usually a [`Catalog`](`crate::catalog::Catalog`)) is dropped with them.
pub fn release(interaction: Interaction) -> usize {
	// Taken out first so that dropped handlers can't observe the registry mid-borrow.
	let released = LISTENERS.with(|listeners| listeners.borrow_mut().remove(&interaction)).unwrap_or_default();
	for Listener { target, closure } in &released {
		if let Err(error) = target.remove_event_listener_with_callback(interaction.event_type(), closure.as_ref().unchecked_ref()) {
			warn!(?interaction, ?error, "Failed to detach listener.");
		}
	}
	trace!(?interaction, "Destroyed {} listener closure(s).", released.len());
	released.len()
}
