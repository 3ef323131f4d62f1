use tracing::info;

use crate::auth::{password, repo::User};
use crate::error::AuthError;
use crate::state::AppState;

/// Seed the bootstrap administrator account at startup. Skipped unless both
/// admin credentials are configured; idempotent across restarts.
pub async fn seed_admin(state: &AppState) -> anyhow::Result<()> {
    let Some(admin) = &state.config.admin else {
        info!("ADMIN_EMAIL or ADMIN_PASSWORD not set; skipping admin seeding");
        return Ok(());
    };

    let email = admin.email.trim().to_lowercase();
    if User::find_by_email(&state.db, &email).await?.is_some() {
        info!(email = %email, "admin user already exists");
        return Ok(());
    }

    let hash = password::hash_password(&admin.password)?;
    match User::create(&state.db, &email, &hash).await {
        Ok(user) => {
            info!(user_id = %user.id, email = %email, "admin user created");
            Ok(())
        }
        // Another instance may have seeded between the lookup and the insert.
        Err(AuthError::DuplicateAccount) => {
            info!(email = %email, "admin user already exists");
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(e)),
    }
}
