//! Core types and storage for the encontros ecosystem.
//!
//! This crate provides what both the CLI and the HTTP server build on:
//! - domain records (`Event`, `Attendance`, `User`)
//! - the embedded record store facade (`store::Store`)
//! - the CSV attendance report and calendar deep links
//! - configuration loading

pub mod attendance;
pub mod config;
pub mod error;
pub mod event;
pub mod report;
pub mod share;
pub mod store;
pub mod user;

pub use attendance::{Attendance, NewAttendance};
pub use error::{StoreError, StoreResult};
pub use event::{Event, NewEvent};
pub use store::Store;
pub use user::User;
