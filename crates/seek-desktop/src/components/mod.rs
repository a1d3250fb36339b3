//! UI Components

mod search_form;

pub use search_form::SearchForm;
