//! Error chain types and utilities.
//!
//! # Examples
//!
//! ```
//! use chainlog::ErrorChain;
//!
//! let err = ErrorChain::new("connection refused")
//!     .caused_at("could not reach database", "pool::acquire")
//!     .set_code(503);
//!
//! println!("{}", err.stack_trace());
//! // root cause: connection refused
//! // caused: could not reach database
//! //     at: pool::acquire
//! ```
use smallvec::SmallVec;

pub mod annotation;
pub mod error_chain;
pub mod log_string;

pub use annotation::*;
pub use error_chain::*;
pub use log_string::*;

/// SmallVec-backed collection used for the annotation stack.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case of a shallow chain.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Default base failure type: any thread-safe error behind a box.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias that carries failures as an [`ErrorChain`].
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The base failure type
pub type ChainResult<T, E = BoxError> = Result<T, ErrorChain<E>>;
