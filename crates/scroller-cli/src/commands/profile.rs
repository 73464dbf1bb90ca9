//! Profile commands.

use anyhow::Result;
use scroller_api::{ChangePasswordRequest, UpdateProfileRequest};

use crate::cli::ProfileCommands;
use crate::commands::Ctx;
use crate::output;

const MIN_PASSWORD_LEN: usize = 6;

pub async fn run(ctx: &Ctx, command: ProfileCommands) -> Result<()> {
    let state = ctx.core.session.current();
    let (Some(token), Some(user)) = (state.token, state.user) else {
        output::notify_error("Login Required", "Please login to manage your profile.");
        return Ok(());
    };
    let Some(user_id) = user.id else {
        output::notify_error("Profile unavailable", "The session user has no id.");
        return Ok(());
    };

    match command {
        ProfileCommands::Update { name, photo_url } => {
            let updated = ctx
                .api
                .update_profile(
                    user_id,
                    &UpdateProfileRequest {
                        full_name: name,
                        photo_url,
                    },
                    &token,
                )
                .await?;

            // Republish the refreshed user against the existing token.
            ctx.core.session.update_user(updated)?;
            println!("Profile updated.");
        }
        ProfileCommands::Password => {
            let current = rpassword::prompt_password("Current password: ")?;
            let new = rpassword::prompt_password("New password: ")?;
            if new.len() < MIN_PASSWORD_LEN {
                output::notify_error(
                    "Password too short",
                    "Passwords must be at least 6 characters.",
                );
                return Ok(());
            }
            let confirm = rpassword::prompt_password("Confirm new password: ")?;
            if new != confirm {
                output::notify_error("Password mismatch", "The new passwords do not match.");
                return Ok(());
            }

            ctx.api
                .change_password(
                    user_id,
                    &ChangePasswordRequest {
                        current_password: current,
                        new_password: new,
                    },
                    &token,
                )
                .await?;
            println!("Password changed successfully.");
        }
    }
    Ok(())
}
