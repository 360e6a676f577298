//! Password strength checking library
//!
//! This library grades a candidate password against five fixed criteria
//! (minimum length, uppercase, lowercase, digit, special character) and
//! reports one of four strength labels, for real-time signup form
//! feedback.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_checker::{evaluate_password_strength, PasswordInput, PasswordStrength};
//!
//! let input = PasswordInput::from("MyP@ssw0rd!");
//! let evaluation = evaluate_password_strength(&input);
//!
//! assert_eq!(evaluation.strength(), PasswordStrength::VeryStrong);
//! assert_eq!(evaluation.strength().as_str(), "very strong");
//!
//! // Non-text form input evaluates as weak instead of failing.
//! let evaluation = evaluate_password_strength(&PasswordInput::Other);
//! assert_eq!(evaluation.strength(), PasswordStrength::Weak);
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;

// Public API
pub use evaluator::evaluate_password_strength;
pub use types::{PasswordEvaluation, PasswordInput, PasswordStrength};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
