//! A ring buffer with fixed capacity.
//!
//! Elements are put at the back and read either first-in first-out from the
//! front (`get`, `peek`) or last-in first-out from the back (`get_last`,
//! `peek_last`). All of these are `O(1)`; bulk transfers are `O(count)`.
//! The contained elements are not required to be copyable.
//!
//! A full buffer either overwrites its oldest element or rejects the put,
//! depending on its [`Behavior`], which can be changed at runtime. The
//! capacity never grows on its own; it only changes through
//! `RingBuffer::set_capacity`.
//!
//! [`Behavior`]: enum.Behavior.html
//!
//! # Feature Flags
//! The **ringbuffer** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; `Error` then implements `std::error::Error`
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringbuffer = "0.1"
//! ```
//!
//! Without the standard library, only `alloc` is required:
//!
//! ```toml
//! [dependencies]
//! ringbuffer = { version = "0.1", default-features = false }
//! ```
//!
//! # Logging
//!
//! The crate reports through the [`log`] facade: capacity changes and clears
//! at `debug`, overwrites, skips and rejected puts at `trace`. It never
//! installs a logger itself.
//!
//! [`log`]: https://docs.rs/log
//!
//! # Examples
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buf = RingBuffer::new(3);
//! assert_eq!(buf.capacity(), 3);
//! assert_eq!(buf.len(), 0);
//!
//! buf.put("Alpha").unwrap();
//! buf.put("Beta").unwrap();
//! buf.put("Gamma").unwrap();
//! assert_eq!(buf.put("Delta"), Ok(Some("Alpha")));
//!
//! assert_eq!(buf.get(), Ok("Beta"));
//! assert_eq!(buf.get_last(), Ok("Delta"));
//! assert_eq!(buf.len(), 1);
//! ```
//!
//! # Saturating
//! ```
//! use ringbuffer::{Behavior, Error, RingBuffer};
//!
//! let mut buf = RingBuffer::with_behavior(2, Behavior::Saturating);
//!
//! buf.put(1).unwrap();
//! buf.put(2).unwrap();
//! assert_eq!(buf.put(3), Err(Error::Full));
//! assert!(buf.is_full());
//!
//! // a batch that does not fit is rejected as a whole
//! buf.get().unwrap();
//! assert_eq!(buf.put_slice(&[3, 4]), Err(Error::Full));
//! assert_eq!(buf.to_vec(), vec![2]);
//! ```
//!
//! # Peek
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buf = RingBuffer::new(5);
//! buf.put_slice(&["a", "b", "c", "d", "e", "f", "g"]).unwrap();
//!
//! assert_eq!(buf.peek_many(3), Ok(vec!["c", "d", "e"]));
//! assert_eq!(buf.peek_last_many(3), Ok(vec!["e", "f", "g"]));
//! assert_eq!(buf.peek_at(1), Ok(&"d"));
//! assert_eq!(buf.len(), 5);
//! ```
//!
//! # Resize
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buf = RingBuffer::new(3);
//! buf.extend(0..5);
//!
//! buf.set_capacity(5).unwrap();
//! buf.extend(5..7);
//! assert_eq!(format!("{:?}", buf), "[2, 3, 4, 5, 6]");
//!
//! assert!(buf.set_capacity(4).is_err());
//! ```
//!
//! # Iterator
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let buf: RingBuffer<_> = (0..5).collect();
//!
//! let refs: Vec<_> = buf.iter().rev().collect();
//! assert_eq!(refs, vec![&4, &3, &2, &1, &0]);
//!
//! let items: Vec<_> = buf.into_iter().collect();
//! assert_eq!(items, vec![0, 1, 2, 3, 4]);
//! ```

#![cfg_attr(not(any(feature="std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;

pub use odds::IndexRange as RangeArgument;

mod behavior;
mod collection;
pub mod error;
mod logic;
mod ringbuffer;
mod utils;

pub use behavior::Behavior;
pub use collection::Collection;
pub use error::{Error, Result};
pub use ringbuffer::{IntoIter, Iter, RingBuffer};
