pub const BUILD_TIME_PATH: &str = env!("CARGO_MANIFEST_DIR");

/// Declares a generation track: a plain struct that (de)serializes as a
/// `key=value,key=value` string, e.g. `n_items=50,budget=25`.
macro_rules! impl_kv_string_serde {
    ($name:ident { $( $field:ident : $ty:ty ),* $(,)? }) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( pub $field : $ty ),*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let parts: Vec<String> = vec![
                    $( format!("{}={}", stringify!($field), self.$field) ),*
                ];
                write!(f, "{}", parts.join(","))
            }
        }

        impl std::str::FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> anyhow::Result<Self> {
                let mut kv = std::collections::HashMap::new();
                for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                    let (k, v) = part
                        .split_once('=')
                        .ok_or_else(|| anyhow::anyhow!("Expected key=value, got '{}'", part))?;
                    kv.insert(k.trim(), v.trim());
                }
                $(
                    let $field: $ty = kv
                        .remove(stringify!($field))
                        .ok_or_else(|| anyhow::anyhow!("Missing '{}'", stringify!($field)))?
                        .parse()
                        .map_err(|_| anyhow::anyhow!("Invalid value for '{}'", stringify!($field)))?;
                )*
                if let Some(k) = kv.keys().next() {
                    return Err(anyhow::anyhow!("Unknown key '{}'", k));
                }
                Ok(Self { $( $field ),* })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

mod error;
pub use error::Error;

pub mod knapsack;
pub mod max_distance;
pub mod set_cover;
