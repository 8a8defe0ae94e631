//! Task access control and sharing for taskhub.
//!
//! Access to a task is binary: a user may act on it when they own it or
//! hold a sharing grant ([`domain::TaskShare`]) for it. There are no roles
//! or permission levels beyond that.
//!
//! - [`services::TaskAccessAuthority`] answers whether a user may act on a
//!   task and is consulted before every task-scoped read or write by a
//!   non-creating caller.
//! - [`services::SharingPolicy`] validates grant requests in a fixed order
//!   and removes grants, individually or in bulk when a task or user goes
//!   away.
//! - [`services::SharingService`] is the entry point for sharing by email
//!   and for listing collaborators.
//!
//! Duplicate checks here are check-then-act; concurrent requests rely on the
//! repository rejecting a second grant for the same pair.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
