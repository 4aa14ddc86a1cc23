//! Copier that round-trips values through `serde_json`.

use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::DeepCopier;
use crate::error::CopyError;

/// Copier that serializes a value into a [`serde_json::Value`] and
/// deserializes it back.
///
/// Works for any `T: Serialize + DeserializeOwned` without a
/// [`DeepCopy`](super::DeepCopy) implementation. The round-trip is typed, so
/// integers stay integers. Values whose representation does not survive the
/// round-trip (non-finite floats, maps with non-string keys) fail with
/// [`CopyError::Serialization`].
///
/// # Examples
///
/// ```rust
/// use isoseq::copy::{DeepCopier, SerdeCopier};
///
/// let copier = SerdeCopier;
/// assert_eq!(copier.copy(&vec![1_i64, 2, 3]).unwrap(), vec![1, 2, 3]);
///
/// assert!(copier.copy(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SerdeCopier;

impl<T> DeepCopier<T> for SerdeCopier
where
    T: Serialize + DeserializeOwned,
{
    fn copy(&self, value: &T) -> Result<T, CopyError> {
        let intermediate =
            serde_json::to_value(value).map_err(|error| serialization_error::<T>(&error))?;
        serde_json::from_value(intermediate).map_err(|error| serialization_error::<T>(&error))
    }
}

fn serialization_error<T>(error: &serde_json::Error) -> CopyError {
    CopyError::Serialization {
        type_name: type_name::<T>(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    fn test_integers_stay_integral() {
        let copier = SerdeCopier;
        assert_eq!(copier.copy(&i64::MAX), Ok(i64::MAX));
        assert_eq!(copier.copy(&u64::MAX), Ok(u64::MAX));
    }

    #[rstest]
    fn test_nan_fails_round_trip() {
        let copier = SerdeCopier;
        let result = copier.copy(&f64::NAN);
        assert!(matches!(
            result,
            Err(CopyError::Serialization { type_name: "f64", .. })
        ));
    }

    #[rstest]
    fn test_non_string_map_keys_fail() {
        let copier = SerdeCopier;
        let map: HashMap<(i32, i32), i32> = [((1, 2), 3)].into_iter().collect();
        assert!(matches!(
            copier.copy(&map),
            Err(CopyError::Serialization { .. })
        ));
    }
}
