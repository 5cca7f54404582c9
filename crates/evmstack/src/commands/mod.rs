pub mod accounts;
pub mod autocomplete;
pub mod config;
