//! Service layer for business logic and orchestration.
//!
//! Sits between the controller layer and the repositories. The three
//! services cover the only logic in the system that is more than a single
//! collection call: the remaining-slot computation, bearer token
//! issue/verify, and the payment processor bridge.

pub mod availability;
pub mod stripe;
pub mod token;
