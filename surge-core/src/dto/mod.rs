//! Wire-format objects for the endpoint API
//!
//! DTOs mirror the JSON exchanged with the remote execution service and
//! convert into the domain types in `crate::domain`. The conversions are
//! where the output/error exclusivity invariant is enforced: whatever a
//! response carries, a domain `Job` only ever exposes `output` in the
//! Completed state and `error_detail` in the Failed state.

pub mod job;
