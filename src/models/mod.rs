pub mod booking;
pub mod cash;
pub mod currency;
pub mod pagination;
pub mod range;
pub mod transaction;
pub mod user;

use serde::{Deserialize, Deserializer};

// Upstream payloads send `null` where a value is absent; read it as the
// type's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
