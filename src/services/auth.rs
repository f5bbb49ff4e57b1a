use crate::domain::models::Session;
use crate::services::config::{simulate_delay, Config};
use crate::services::storage;

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("not signed in (run `safepath login` first)")]
    NotSignedIn,
    #[error("email and password are required")]
    MissingCredentials,
    #[error("authentication failed, please check your credentials and try again")]
    Failed,
}

/// Gate for protected commands, the redirect-to-login analog.
pub fn require_auth(session: &Session) -> Result<(), AuthError> {
    if session.authenticated {
        Ok(())
    } else {
        Err(AuthError::NotSignedIn)
    }
}

/// Simulated sign-in: any non-empty submission succeeds after a delay. The
/// generic failure arm mirrors the original's catch-all and is not reachable
/// through normal storage.
pub fn login(
    config: &Config,
    email: &str,
    password: &str,
    register: bool,
    name: Option<&str>,
) -> Result<Session, AuthError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    simulate_delay(config.simulation.login_delay_ms);

    let mut session = storage::load_session().map_err(|_| AuthError::Failed)?;
    session.authenticated = true;
    if register {
        session.user_name = name.map(|n| n.to_string());
    }
    storage::save_session(&session).map_err(|_| AuthError::Failed)?;
    Ok(session)
}

pub fn logout() -> anyhow::Result<()> {
    storage::clear_session()
}
