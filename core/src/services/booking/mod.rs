//! Booking lifecycle service
//!
//! Validates booking requests, computes totals via the pricing engine, and
//! drives the create/read/update/delete lifecycle against the entity store.

mod service;

#[cfg(test)]
mod tests;

pub use service::{BookingRequest, BookingService};
