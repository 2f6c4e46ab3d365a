pub mod catalog;
pub mod locale;
pub mod translations;
