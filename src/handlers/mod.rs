pub mod contact_handlers;
pub mod pages;
