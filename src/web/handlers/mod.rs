pub mod htmx;
pub mod public;
