//! HTTP game hosting.
//!
//! Each player gets a [`Session`] with its own history and model, registered
//! in the [`Arcade`] under a typed id. The [`Server`] exposes sessions over
//! JSON routes.
mod arcade;
mod handlers;
mod request;
mod response;
mod server;
mod session;

pub use arcade::*;
pub use handlers::*;
pub use request::*;
pub use response::*;
pub use server::*;
pub use session::*;
