use crate::github::ContentGateway;
use crate::{Error, Result};
use tracing::debug;

/// Login of the authenticated user; resolved fresh on every call
pub async fn resolve_owner_login(gateway: &dyn ContentGateway) -> Result<String> {
    let user = gateway.current_user().await?;

    if user.login.trim().is_empty() {
        return Err(Error::Gateway(
            "GitHub returned an empty login for the current user".to_string(),
        ));
    }

    debug!("Resolved acting user: {}", user.login);
    Ok(user.login)
}
