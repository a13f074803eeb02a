mod tokens;

pub use tokens::CredentialSource;
pub use tokens::FileTokenStore;
pub use tokens::StoreError;
pub use tokens::TokenProvider;
pub use tokens::TokenStore;
