//! The conversational search flow.
//!
//! The server is stateless: the occupation → (region →) prefecture
//! progression lives entirely in the postback data the client echoes back,
//! so every handler re-validates keys against the catalog before use.

pub mod dispatch;
pub mod handlers;
pub mod replies;
pub mod search_url;
