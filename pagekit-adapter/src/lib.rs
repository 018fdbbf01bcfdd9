//! Adapter utilities for the `pagekit` crate.
//!
//! The `pagekit` crate is UI-agnostic and owns the menu and content state machines. This crate
//! provides small, framework-neutral helpers commonly needed by hosts:
//!
//! - Tween-driven animation progress for the components' pending animations
//! - Event queues that turn delegate callbacks into values
//! - `PagingController`, which keeps a menu and its content in lockstep
//!
//! This crate is framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod animator;
mod controller;
mod events;
mod tween;

#[cfg(test)]
mod tests;

pub use animator::Animator;
pub use controller::{PagingController, PagingDelegate};
pub use events::{ContentEvent, EventQueue, MenuEvent};
pub use tween::{Easing, Tween};
