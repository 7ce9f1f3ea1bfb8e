pub mod authority;
pub mod claims;
pub mod errors;

pub use authority::TokenAuthority;
pub use authority::TokenPurpose;
pub use claims::Claims;
pub use errors::TokenError;
