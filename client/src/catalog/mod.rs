//! Hand-authored catalog data.
//!
//! DESIGN
//! ======
//! Static pages render from immutable module-level tables known at build
//! time. There is no backing system behind these entries; the tables are the
//! product content.

pub mod assessments;
pub mod faq;
pub mod playgrounds;
