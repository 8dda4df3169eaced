//! Login page cases.

use super::SUCCESS_TEXT;
use crate::assertion::{assert_not_visible, assert_text_eq, assert_visible};
use crate::case::{CaseContext, TestCase};
use crate::fixture::Credentials;
use crate::page::{LoginPage, PageObject};
use crate::result::EnsayoError;

/// Log in with the run's credentials and check the success message.
#[must_use]
pub fn valid_login_case() -> TestCase {
    TestCase::new(
        "Validate login with valid credentials",
        &["smoke"],
        |ctx: CaseContext| async move {
            let credentials = ctx.credentials()?;
            let page = LoginPage::new(ctx.driver(), ctx.config().clone());
            page.open().await?;
            page.login(&credentials).await?;

            let handle = page.success_message().await?;
            assert_visible("#success_lgn", page.driver().is_visible(&handle).await?)?;
            assert_text_eq(
                "success message",
                &page.driver().text_of(&handle).await?,
                SUCCESS_TEXT,
            )
        },
    )
}

/// Log in with made-up credentials and check no success message shows.
///
/// The application gives no explicit error on a failed login, so absence
/// is checked both ways: the message either never resolves or resolves
/// invisible.
#[must_use]
pub fn invalid_login_case() -> TestCase {
    TestCase::new(
        "Validate no success message with invalid credentials",
        &["smoke"],
        |ctx: CaseContext| async move {
            let page = LoginPage::new(ctx.driver(), ctx.config().clone());
            page.open().await?;
            page.login(&Credentials::new("NotAUser", "BadPassword1"))
                .await?;

            match page.success_message().await {
                Err(EnsayoError::ElementNotFound { .. }) => Ok(()),
                Ok(handle) => {
                    assert_not_visible("#success_lgn", page.driver().is_visible(&handle).await?)
                }
                Err(e) => Err(e),
            }
        },
    )
}
