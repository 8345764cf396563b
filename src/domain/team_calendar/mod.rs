//! Team calendar domain — sprints exposed to the team calendars integration.

pub mod client;
