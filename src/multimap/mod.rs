//! Ordered Multi-Value Map.
//!
//! [`MultiMap`] maps one key to an ordered sequence of values. Distinct keys keep their insertion
//! order, and a repeated key appends to the values of its existing entry.
//!
//! Key comparison is chosen by a [`Fold`] type parameter: [`Exact`] for case-sensitive data such as
//! query parameters, and [`IgnoreAsciiCase`] for header names.
mod fold;
mod map;
mod iter;

pub use fold::{Fold, Exact, IgnoreAsciiCase};
pub use map::MultiMap;
pub use iter::{Iter, Keys};

#[cfg(test)]
mod test;
