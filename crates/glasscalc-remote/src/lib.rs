//! # glasscalc-remote - Evaluation Service Client
//!
//! Talks to the remote evaluation service. All arithmetic happens there; this
//! crate only encodes requests and decodes replies.
//!
//! Depends on [`glasscalc_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Protocol
//! - [`CalculateRequest`], [`FunctionRequest`] - Request bodies
//! - [`ServiceReply`] - Decoded reply (value or rejection)
//! - [`decode_reply()`] - Decode a reply body
//!
//! ### Evaluators
//! - [`RemoteEvaluator`] - Async trait implemented by service clients
//! - [`HttpEvaluator`] - reqwest-based client
//! - [`reply_to_outcome()`] - Collapse a call result into an [`glasscalc_core::EvalOutcome`]

pub mod evaluator;
pub mod http;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use evaluator::{reply_to_outcome, LocalRemoteEvaluator, RemoteEvaluator};
pub use http::{parse_base_url, HttpEvaluator, DEFAULT_SERVICE_URL};
pub use protocol::{decode_reply, CalculateRequest, FunctionRequest, ServiceReply};
