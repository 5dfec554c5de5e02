//! Shared fixtures for handler tests.

use crate::domain::calendar::CalendarDate;
use crate::domain::foundation::{AuthenticatedUser, SessionContext, UserId, UserRole};

pub fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).unwrap()
}

pub fn user(id: &str, email: &str) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(id).unwrap(), email)
}

pub fn admin_ctx() -> SessionContext {
    SessionContext::new(user("u-zack", "zack@example.com"), UserRole::Admin, "Zack")
}

pub fn member_ctx() -> SessionContext {
    SessionContext::new(user("u-jeff", "jeff@example.com"), UserRole::Member, "Jeff")
}
