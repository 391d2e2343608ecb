//! Wire types exchanged with the wizard frontend and the generative model.

use std::time::SystemTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod brand;
pub mod design_system;
pub mod fonts;
pub mod health;
pub mod palette;
pub mod validation;

/// Format a system time as RFC 3339 for wire payloads.
pub(crate) fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
