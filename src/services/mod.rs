pub mod filter;
pub mod store;
pub mod toast;
pub mod validation;
