//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio chrome. Interactive ones (endpoint cards,
//! typing prompt) own their state locally; the rest are presentational.

pub mod badge;
pub mod card;
pub mod endpoint_card;
pub mod query_params;
pub mod typing_prompt;
