//! Text rendering of the calculator card.

pub mod form;

pub use form::render_form;
