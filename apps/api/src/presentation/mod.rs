// Presentation layer: the server-rendered form bound to the prompt registry,
// tone selection, and numbered-list rendering of results.

pub mod form;
pub mod handlers;
pub mod numbered_list;
pub mod page;
