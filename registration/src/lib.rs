pub mod config;
pub mod form;
pub mod paths;
pub mod session;
