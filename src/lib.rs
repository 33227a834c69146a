//! # evatr
//!
//! Client for the German Federal Central Tax Office (BZSt) eVatR service,
//! which confirms foreign EU VAT identification numbers on behalf of a German
//! VAT ID holder.
//!
//! - **Simple check**: is the foreign VAT ID valid?
//! - **Qualified check**: additionally, do company name, city, zip code and
//!   street match the foreign registry?
//!
//! The endpoint speaks an XML-RPC-like dialect: a flat list of key/value
//! pairs. [`rpc::parse_response`] turns that payload into a typed
//! [`CheckResult`](core::CheckResult) with German error descriptions.
//!
//! ## Quick Start
//!
//! ```rust
//! use evatr::core::*;
//! use evatr::rpc;
//!
//! let request = CheckRequestBuilder::new("DE115235681", "CZ00177041").build().unwrap();
//! let query = rpc::build_query(&request).unwrap();
//! assert_eq!(query, "UstId_1=DE115235681&UstId_2=CZ00177041");
//!
//! assert_eq!(error_description(200), Some("Die angefragte USt-IdNr. ist gültig."));
//! assert_eq!(ResultType::from_code("A").unwrap().description(), "stimmt überein");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Request/result types, query builder, response parser |
//! | `client` | Async HTTP client (`reqwest`) |
//! | `cli` | `evatr` command-line binary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod rpc;

#[cfg(feature = "client")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
