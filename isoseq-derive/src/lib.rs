//! Derive macro for isoseq's `DeepCopy` trait.
//!
//! # Available Derive Macros
//!
//! - [`DeepCopy`]: Generates a field-wise `DeepCopy` implementation
//!
//! # Example
//!
//! ```rust,ignore
//! use isoseq::copy::DeepCopy;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(DeepCopy)]
//! struct Node {
//!     label: String,
//!     children: Vec<Rc<RefCell<Node>>>,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod deep_copy;

use proc_macro::TokenStream;

/// Derive macro for generating `DeepCopy` implementations.
///
/// Every field is copied with `DeepCopy::deep_copy` and the first failure is
/// returned. Works for structs (named, tuple and unit) and enums.
///
/// # Field Attributes
///
/// - `#[deep_copy(clone)]`: duplicate this field with `Clone` instead. Only
///   sound for types whose `Clone` shares no mutable state.
///
/// # Generics
///
/// Each type parameter receives a `DeepCopy` bound.
///
/// # Example
///
/// ```rust,ignore
/// use isoseq::copy::DeepCopy;
///
/// #[derive(Debug, PartialEq, DeepCopy)]
/// enum Event {
///     Created { id: u64, name: String },
///     Renamed(u64, String),
///     Cleared,
/// }
///
/// let event = Event::Renamed(7, "seven".to_string());
/// assert_eq!(event.deep_copy().unwrap(), event);
/// ```
///
/// # Errors
///
/// Unions are rejected at compile time, as are unknown `deep_copy`
/// attribute arguments.
#[proc_macro_derive(DeepCopy, attributes(deep_copy))]
pub fn derive_deep_copy(input: TokenStream) -> TokenStream {
    deep_copy::derive_deep_copy_impl(input)
}
