//! Resource clients organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Query option types and constants for the resource
//! - `client.rs` — Sub-client mapping method calls onto a path, method, query
//!   and body, dispatched through a [`RequestExecutor`](crate::http::RequestExecutor)

pub mod board;
pub mod rapid_view;
pub mod sprint;
pub mod team_calendar;

#[cfg(test)]
pub(crate) mod test_support;
