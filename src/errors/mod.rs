pub mod auth_gate;
pub mod login;
pub mod refresh;
pub mod token;

pub use auth_gate::*;
pub use login::*;
pub use refresh::*;
pub use token::*;
