//! Repository layer for all five collections.
//!
//! This module contains repository structs that handle database operations for each
//! collection in the application. Repositories wrap a typed `mongodb::Collection`
//! handle built from the shared `Database`, keeping `doc!` filters and driver
//! details out of the controller layer.

pub mod appointment;
pub mod booking;
pub mod doctor;
pub mod payment;
pub mod user;

use mongodb::error::{Error, ErrorKind, WriteFailure};

const DUPLICATE_KEY_CODE: i32 = 11000;

/// Whether a write failed because it violated a unique index.
///
/// Duplicate bookings and duplicate user emails are expected outcomes, not
/// faults; callers map them to soft rejections.
pub(crate) fn is_duplicate_key(err: &Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
