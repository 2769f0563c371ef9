pub mod apod;
pub mod embed;
pub mod facts;
pub mod gallery;
pub mod modal;
pub mod store;
