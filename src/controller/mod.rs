//! HTTP request handlers.
//!
//! Controllers extract request data, enforce access with the auth guard,
//! call repositories and services, and convert results to DTOs.

pub mod appointment;
pub mod auth;
pub mod booking;
pub mod doctor;
pub mod payment;
pub mod user;
