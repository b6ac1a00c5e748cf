use ahash::RandomState;

pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, RandomState>;
pub(crate) type HashSet<T> = std::collections::HashSet<T, RandomState>;

pub use combopt_challenges::Error;

#[cfg(feature = "knapsack")]
pub mod knapsack;
#[cfg(feature = "max_distance")]
pub mod max_distance;
#[cfg(feature = "set_cover")]
pub mod set_cover;
