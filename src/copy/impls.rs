//! [`DeepCopy`] implementations for standard library types.

use std::any::type_name;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock, TryLockError};
use std::time::Duration;

use super::{DeepCopy, traversal};
use crate::error::CopyError;

// =============================================================================
// Plain Values
// =============================================================================

macro_rules! impl_deep_copy_for_plain {
    ($($plain:ty),* $(,)?) => {
        $(
            impl DeepCopy for $plain {
                #[inline]
                fn deep_copy(&self) -> Result<Self, CopyError> {
                    Ok(*self)
                }
            }
        )*
    };
}

impl_deep_copy_for_plain!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    Duration,
    &'static str,
);

impl DeepCopy for String {
    #[inline]
    fn deep_copy(&self) -> Result<Self, CopyError> {
        Ok(self.clone())
    }
}

impl<T: ?Sized> DeepCopy for PhantomData<T> {
    #[inline]
    fn deep_copy(&self) -> Result<Self, CopyError> {
        Ok(Self)
    }
}

// =============================================================================
// Owning Wrappers
// =============================================================================

impl<T: DeepCopy> DeepCopy for Box<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        (**self).deep_copy().map(Box::new)
    }
}

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.as_ref().map(DeepCopy::deep_copy).transpose()
    }
}

impl<T: DeepCopy, E: DeepCopy> DeepCopy for Result<T, E> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        match self {
            Ok(value) => value.deep_copy().map(Ok),
            Err(error) => error.deep_copy().map(Err),
        }
    }
}

// Shared pointers are never cloned: the copy gets its own allocation so the
// two sides cannot reach each other through the pointer. A pointer met again
// while its pointee is still being copied closes a cycle.

impl<T: DeepCopy> DeepCopy for Rc<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        let _entered = traversal::enter::<Self>(Self::as_ptr(self).addr())?;
        (**self).deep_copy().map(Rc::new)
    }
}

impl<T: DeepCopy> DeepCopy for Arc<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        let _entered = traversal::enter::<Self>(Self::as_ptr(self).addr())?;
        (**self).deep_copy().map(Arc::new)
    }
}

// =============================================================================
// Interior Mutability
// =============================================================================

impl<T: Copy + DeepCopy> DeepCopy for Cell<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.get().deep_copy().map(Cell::new)
    }
}

impl<T: DeepCopy> DeepCopy for RefCell<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        let borrowed = self.try_borrow().map_err(|_| CopyError::Borrowed {
            type_name: type_name::<Self>(),
        })?;
        borrowed.deep_copy().map(RefCell::new)
    }
}

// A lock the caller may hold is only tried, so copying cannot deadlock on the
// caller's own guard. Locks inside values a sequence already owns are only
// ever taken by copies, so those are waited on.

impl<T: DeepCopy> DeepCopy for Mutex<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        let guard = if traversal::waits_for_locks() {
            self.lock().map_err(|_| poisoned::<Self>())?
        } else {
            self.try_lock().map_err(|error| try_lock_error::<Self, _>(&error))?
        };
        guard.deep_copy().map(Mutex::new)
    }
}

impl<T: DeepCopy> DeepCopy for RwLock<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        let guard = if traversal::waits_for_locks() {
            self.read().map_err(|_| poisoned::<Self>())?
        } else {
            self.try_read().map_err(|error| try_lock_error::<Self, _>(&error))?
        };
        guard.deep_copy().map(RwLock::new)
    }
}

fn poisoned<T>() -> CopyError {
    CopyError::Poisoned {
        type_name: type_name::<T>(),
    }
}

fn try_lock_error<T, G>(error: &TryLockError<G>) -> CopyError {
    match error {
        TryLockError::WouldBlock => CopyError::Locked {
            type_name: type_name::<T>(),
        },
        TryLockError::Poisoned(_) => poisoned::<T>(),
    }
}

// =============================================================================
// Collections
// =============================================================================

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<T: DeepCopy> DeepCopy for VecDeque<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<T: DeepCopy + Ord> DeepCopy for BTreeSet<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<K: DeepCopy + Ord, V: DeepCopy> DeepCopy for BTreeMap<K, V> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.iter()
            .map(|(key, value)| Ok::<_, CopyError>((key.deep_copy()?, value.deep_copy()?)))
            .collect()
    }
}

impl<T, S> DeepCopy for HashSet<T, S>
where
    T: DeepCopy + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<K, V, S> DeepCopy for HashMap<K, V, S>
where
    K: DeepCopy + Eq + Hash,
    V: DeepCopy,
    S: BuildHasher + Default,
{
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.iter()
            .map(|(key, value)| Ok::<_, CopyError>((key.deep_copy()?, value.deep_copy()?)))
            .collect()
    }
}

// =============================================================================
// Tuples
// =============================================================================

macro_rules! impl_deep_copy_for_tuple {
    ($(($($name:ident : $index:tt),+)),* $(,)?) => {
        $(
            impl<$($name: DeepCopy),+> DeepCopy for ($($name,)+) {
                fn deep_copy(&self) -> Result<Self, CopyError> {
                    Ok(($(self.$index.deep_copy()?,)+))
                }
            }
        )*
    };
}

impl_deep_copy_for_tuple!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7),
);
