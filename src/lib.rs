//! Patient Portal - data-access and validation core for a medical
//! practice patient-management client.
//!
//! Patients register, log in, select or change a doctor, and view their
//! bookings; doctors carry certifications. This crate is the data gateway
//! behind those flows: it maps entities to and from the practice store
//! through parameterized stored-procedure calls, enforces field-level
//! validation before any mutation, and surfaces a typed error taxonomy
//! the presentation layer relies on for control flow.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
