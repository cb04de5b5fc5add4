mod api_ext;
pub mod jwt;
mod stored_credentials;

pub use self::stored_credentials::StoredCredentials;
