pub mod claims;
pub mod data_stores;
pub mod email;
pub mod login_request;
pub mod refresh_request;
pub mod token_pair;
mod user;

pub use claims::*;
pub use data_stores::*;
pub use email::*;
pub use login_request::*;
pub use refresh_request::*;
pub use token_pair::*;
pub use user::*;
