//! Read-only navigation and scalar coercion over a parsed [`crate::Document`].
//!
//! Every function here is a pure read against the tree [`crate::parse`]
//! already built: none of them allocate, and none of them are meaningful to
//! call on a [`crate::Document`] whose `error` is `Some(_)` (the partial
//! tree up to the failure point is not guaranteed well-formed — spec.md §5).
//!
//! Three groups, cheapest first:
//! - Navigation: [`seek`], [`seek_recursive`], [`child_count`],
//!   [`array_elem`], [`array_len`].
//! - Scalar coercion of one already-located token: [`get_string`],
//!   [`get_double`], [`get_i32`], [`get_u32`], [`get_i64`], [`get_u64`],
//!   [`get_bool`].
//! - Composition of the two (`seekget_*`, `seekget_array_*`), for the
//!   common "read this key, or fall back to a default" shape a
//!   config-reading host hits at nearly every call site.

mod error;
mod scalar;
mod seek;
mod seekget;

pub use error::AccessError;
pub use scalar::{get_bool, get_double, get_i32, get_i64, get_string, get_u32, get_u64};
pub use seek::{array_elem, array_len, child_count, seek, seek_recursive};
pub use seekget::{
    seekget_array_bool, seekget_array_double, seekget_array_i32, seekget_array_i64, seekget_array_string,
    seekget_array_u32, seekget_array_u64, seekget_bool, seekget_double, seekget_i32, seekget_i64, seekget_string,
    seekget_u32, seekget_u64,
};
