//! Wire format of the eVatR XML-RPC endpoint: query strings out, payloads in.
//!
//! Both directions are pure functions, so they can be used with any HTTP
//! client.
//!
//! # Example
//!
//! ```
//! use evatr::core::CheckRequest;
//! use evatr::rpc;
//!
//! let request = CheckRequest::simple("DE115235681", "CZ00177041");
//! assert_eq!(
//!     rpc::build_query(&request).unwrap(),
//!     "UstId_1=DE115235681&UstId_2=CZ00177041"
//! );
//!
//! let xml = "<params>\
//!     <param><value><array><data><value><string>ErrorCode</string></value>\
//!     <value><string>200</string></value></data></array></value></param>\
//!     </params>";
//! let err = rpc::parse_response(xml, false, false).unwrap_err();
//! assert_eq!(err.missing_field(), Some("Datum"));
//! ```

mod payload;
mod query;
mod response;

pub use query::{build_query, build_simple_query, keys};
pub use response::{ResponseFields, fields, parse_response};
