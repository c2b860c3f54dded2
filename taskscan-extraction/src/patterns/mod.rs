//! Static lookup tables driving extraction: task verbs, category keywords,
//! and due-date patterns. Read-only, process lifetime.

pub mod categories;
pub mod dates;
pub mod verbs;
