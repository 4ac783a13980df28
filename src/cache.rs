/*!
Selects between the full power-of-ten cache (one entry per `k`) and the compact
one (entries reconstructed from every 27th base entry), per §4.3.
*/

use crate::format::Format;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePolicy {
    Full,
    Compact,
}

impl Default for CachePolicy {
    fn default() -> Self {
        CachePolicy::Full
    }
}

impl CachePolicy {
    #[inline]
    pub(crate) fn get<F: Format>(self, k: i32) -> F::Cache {
        match self {
            CachePolicy::Full => F::cache_full(k),
            CachePolicy::Compact => F::cache_compact(k),
        }
    }
}
