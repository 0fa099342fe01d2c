//! Mock authentication module.
//!
//! Simulates login/register/logout against hardcoded demo credentials, with
//! an artificial delay standing in for the network. Not wired to the cart.

mod session;

pub use session::{AuthError, AuthGateway, Role, Session, User};
