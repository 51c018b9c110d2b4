pub(crate) mod login;
pub(crate) mod me;
pub(crate) mod refresh;
pub(crate) mod require_auth;

// re-export items from sub-modules
pub use login::*;
pub use me::*;
pub use refresh::*;
pub use require_auth::*;
