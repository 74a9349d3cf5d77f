//! Auth token persistence.
//!
//! The token issued at login is kept in browser local storage under a fixed
//! key and attached to API requests as `Authorization: Token <value>`. No
//! client-side authorization checks happen here; the server decides.

const AUTH_TOKEN_KEY: &str = "cultural_atlas.auth_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn stored_token() -> Option<String> {
    local_storage()?.get_item(AUTH_TOKEN_KEY).ok()?
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        // Storage quota failures leave the user logged out on next reload,
        // which the startup check handles anyway.
        let _ = storage.set_item(AUTH_TOKEN_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
    }
}
