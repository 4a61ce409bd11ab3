//! Registry entries grouped by site area.
//!
//! Each area module declares one [`ComponentEntry`](crate::ComponentEntry)
//! per kind: its path, rendering unit, props root, legacy ids, adapter and
//! required paths.

pub(crate) mod about;
pub(crate) mod hr;
pub(crate) mod industries;
pub(crate) mod landing;
pub(crate) mod payroll;
pub(crate) mod services;
pub(crate) mod shared;
