//! Application initialization.
//!
//! The run only needs a configured logger; the WHOIS client is built per run
//! from [`crate::Config`].

mod logger;

// Re-export public API
pub use logger::init_logger_with;
