//! Concrete calendars with compiled-in holiday tables.

/// Israel (Friday/Saturday weekend, Hebrew-calendar holidays).
pub mod israel;
