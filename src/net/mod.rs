//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! target URL
//!     → exchange.rs (URL check, deadline, buffer ownership)
//!     → transport.rs (reqwest GET, redirects, user agent)
//!     → chunks streamed into buffer::ResponseBuffer
//!     → response.rs (Page handed back to the caller)
//!
//! Exchange States:
//!     Requesting → Receiving → Complete | Failed | TimedOut
//! ```
//!
//! # Design Decisions
//! - Transport is a trait so the exchange can run against scripted transports
//! - Bodies are streamed chunk by chunk, never collected by the client library
//! - One exchange per process run, no connection reuse

pub mod exchange;
pub mod response;
pub mod transport;

pub use exchange::{fetch_into, fetch_page, parse_target, ExchangeError};
pub use response::Page;
pub use transport::{ReqwestTransport, TransferSummary, Transport, TransportError};
