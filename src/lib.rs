//! Password strength check library
//!
//! Scores a password against five character-class criteria (length,
//! uppercase, lowercase, digit, punctuation) and maps the number satisfied
//! to one of three labels: strong (all five), medium (three or four) or
//! weak (two or fewer).
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_check::{check_password_strength, evaluate_password_strength, PasswordStrength};
//! use secrecy::SecretString;
//!
//! assert_eq!(check_password_strength("Ab1!defg"), "Strong password 💪");
//!
//! let password = SecretString::new("Abcdefg1".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.score.value(), 4);
//! assert_eq!(evaluation.strength(), PasswordStrength::Medium);
//! println!("Missing: {:?}", evaluation.reasons);
//! ```

// Internal modules
mod evaluator;
mod prompt;
mod sections;
mod types;

// Public API
pub use evaluator::{check_password_strength, evaluate_password_strength};
pub use prompt::{read_password, run_prompt, PromptError, PROMPT};
pub use sections::{SectionResult, PUNCTUATION};
pub use types::{Criterion, PasswordEvaluation, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
