use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::{AuthState, SessionState};
use crate::{auth, get_api_client};

/// Hook to restore the session from a stored token on startup.
///
/// With no stored token the user is simply logged out. A token that the
/// backend rejects is discarded so the next startup skips the round trip.
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<SessionState>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            if auth::stored_token().is_none() {
                dispatch.reduce_mut(|state| {
                    state.auth_state = AuthState::LoggedOut;
                });
                return;
            }

            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.user_profile().await {
                    Ok(profile) => {
                        dispatch.reduce_mut(|state| {
                            state.auth_state = AuthState::LoggedIn(profile);
                        });
                    }
                    Err(_) => {
                        auth::clear_token();
                        dispatch.reduce_mut(|state| {
                            state.auth_state = AuthState::LoggedOut;
                        });
                    }
                }
            });
        }
    });
}
