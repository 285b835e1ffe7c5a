
pub(crate) mod fixtures {
    use std::sync::Arc;

    use crate::services::token::KeyManager;

    pub const ACCESS_PRIVATE_PEM: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/keys/access_private_key.pem"));
    pub const ACCESS_PUBLIC_PEM: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/keys/access_public_key.pem"));
    pub const REFRESH_PRIVATE_PEM: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/keys/refresh_private_key.pem"));
    pub const REFRESH_PUBLIC_PEM: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/keys/refresh_public_key.pem"));

    pub fn key_manager() -> Arc<KeyManager> {
        Arc::new(
            KeyManager::from_pem_strings(
                ACCESS_PRIVATE_PEM,
                ACCESS_PUBLIC_PEM,
                REFRESH_PRIVATE_PEM,
                REFRESH_PUBLIC_PEM,
            )
            .expect("dev keys must parse"),
        )
    }
}
