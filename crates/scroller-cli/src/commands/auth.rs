//! Session commands: login, register, logout, whoami.

use anyhow::Result;
use scroller_api::{LoginCredentials, RegisterData};

use crate::commands::Ctx;
use crate::output;

pub async fn login(ctx: &Ctx, email: String) -> Result<()> {
    let password = rpassword::prompt_password("Password: ")?;

    let response = ctx
        .api
        .login(&LoginCredentials { email, password })
        .await?;

    // Commit only a complete token + user pair; a partial response leaves
    // the session untouched.
    ctx.core.session.login(response.token, response.user)?;

    match ctx.core.session.current().user {
        Some(user) => {
            let name = user
                .display_name
                .or(user.email)
                .unwrap_or_else(|| "unknown".to_string());
            println!("Logged in as {}", name);
        }
        None => output::notify_error(
            "Login incomplete",
            "The server response was missing a token or user.",
        ),
    }
    Ok(())
}

pub async fn register(ctx: &Ctx, name: String, email: String) -> Result<()> {
    let password = rpassword::prompt_password("Password: ")?;
    let confirm = rpassword::prompt_password("Confirm password: ")?;
    if password != confirm {
        output::notify_error("Registration failed", "Passwords do not match.");
        return Ok(());
    }

    let response = ctx
        .api
        .register(&RegisterData {
            full_name: name,
            email,
            password,
        })
        .await?;

    ctx.core.session.login(response.token, response.user)?;

    if ctx.core.session.is_authenticated() {
        println!("Account created, you are now logged in.");
    } else {
        output::notify_error(
            "Registration incomplete",
            "The server response was missing a token or user.",
        );
    }
    Ok(())
}

pub fn logout(ctx: &Ctx) -> Result<()> {
    ctx.core.session.logout()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(ctx: &Ctx) -> Result<()> {
    let state = ctx.core.session.current();
    match state.user {
        Some(ref user) => {
            println!(
                "{} <{}>{}",
                user.display_name.as_deref().unwrap_or("(no name)"),
                user.email.as_deref().unwrap_or("no email"),
                if state.is_admin() { " [admin]" } else { "" }
            );
        }
        None => println!("Not logged in."),
    }
    Ok(())
}
