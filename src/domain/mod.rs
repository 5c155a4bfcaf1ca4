//! # Domain Layer
//!
//! Entities, value objects, and business-rule errors for the trade order
//! execution core. Free of I/O: everything here is pure book-keeping that
//! the application layer drives inside its critical section.

pub mod entities;
pub mod errors;
pub mod value_objects;
