//! Display formatting utilities.

pub mod text;

pub use text::{format_token_name, shorten_middle};
