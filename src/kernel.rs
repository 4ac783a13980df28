/*!
The Schubfach-style conversion kernels (§4.6–§4.8). Each is a free function
generic over [`Format`], dispatched to from [`crate::decimal`]'s top-level
classifier. None of these ever allocate, recurse, or fail; every branch is
resolved by comparing already-computed integers.
*/

mod directed;
mod normal;
mod shorter;

pub(crate) use directed::{compute_left_closed_directed, compute_right_closed_directed};
pub(crate) use normal::compute_nearest_normal;
pub(crate) use shorter::compute_nearest_shorter;
