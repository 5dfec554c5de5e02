//! Wire rows for the REST tables.
//!
//! Rows are validated when converted into domain types. A row that breaks a
//! domain invariant is reported as `CorruptRecord` instead of being
//! silently repaired.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::access::{AccessRequest, AccessRequestStatus};
use crate::domain::booking::Booking;
use crate::domain::calendar::{BookingInterval, CalendarDate};
use crate::domain::foundation::{
    AccessRequestId, BookingId, DomainError, ErrorCode, Timestamp, UserId, UserRole,
};
use crate::domain::user::Profile;

fn corrupt(table: &str, id: impl std::fmt::Display, reason: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::CorruptRecord,
        format!("Stored {} row {} is invalid: {}", table, id, reason),
    )
    .with_detail("table", table)
}

// ════════════════════════════════════════════════════════════════════════════
// bookings
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct BookingRow {
    pub id: Uuid,
    pub label: String,
    pub start_date: String,
    /// Exclusive end.
    pub end_date: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub is_blocked: bool,
}

impl From<&Booking> for BookingRow {
    fn from(booking: &Booking) -> Self {
        Self {
            id: *booking.id.as_uuid(),
            label: booking.label.clone(),
            start_date: booking.start().to_string(),
            end_date: booking.end().to_string(),
            notes: booking.notes.clone(),
            created_by: booking.created_by.clone(),
            is_blocked: booking.is_blocked,
        }
    }
}

impl TryFrom<BookingRow> for Booking {
    type Error = DomainError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let start = CalendarDate::parse(&row.start_date).map_err(|e| corrupt("bookings", row.id, e))?;
        let end = CalendarDate::parse(&row.end_date).map_err(|e| corrupt("bookings", row.id, e))?;
        let interval = BookingInterval::new(start, end).map_err(|e| corrupt("bookings", row.id, e))?;
        if row.label.trim().is_empty() {
            return Err(corrupt("bookings", row.id, "label is blank"));
        }

        Ok(Booking::restore(
            BookingId::from_uuid(row.id),
            row.label,
            interval,
            row.notes,
            row.created_by,
            row.is_blocked,
        ))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// access_requests
// ════════════════════════════════════════════════════════════════════════════

/// Insert payload; the store assigns `status` and `created_at` defaults
/// but we send them so the row matches the domain value.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewAccessRequestRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: Option<&'a str>,
    pub invite_code: Option<&'a str>,
    pub status: &'static str,
    pub created_at: Timestamp,
}

impl<'a> From<&'a AccessRequest> for NewAccessRequestRow<'a> {
    fn from(request: &'a AccessRequest) -> Self {
        Self {
            id: *request.id.as_uuid(),
            email: &request.email,
            first_name: &request.first_name,
            last_name: &request.last_name,
            phone: request.phone.as_deref(),
            invite_code: request.invite_code.as_deref(),
            status: request.status.as_str(),
            created_at: request.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AccessRequestRow {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub invite_code: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

impl TryFrom<AccessRequestRow> for AccessRequest {
    type Error = DomainError;

    fn try_from(row: AccessRequestRow) -> Result<Self, Self::Error> {
        let status = AccessRequestStatus::parse(&row.status)
            .ok_or_else(|| corrupt("access_requests", row.id, format!("unknown status '{}'", row.status)))?;

        Ok(AccessRequest {
            id: AccessRequestId::from_uuid(row.id),
            email: row.email,
            first_name: row.first_name.unwrap_or_default(),
            last_name: row.last_name.unwrap_or_default(),
            phone: row.phone.filter(|p| !p.trim().is_empty()),
            invite_code: row.invite_code.filter(|c| !c.trim().is_empty()),
            status,
            created_at: row.created_at,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// profiles
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProfileRow {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let id = UserId::new(row.id.clone()).map_err(|e| corrupt("profiles", &row.id, e))?;
        let role = match row.role.as_deref() {
            Some("admin") => UserRole::Admin,
            Some("member") | None => UserRole::Member,
            Some(other) => return Err(corrupt("profiles", &row.id, format!("unknown role '{}'", other))),
        };

        Ok(Profile {
            id,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            avatar_url: row.avatar_url,
            role,
            is_active: row.is_active.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_row(start: &str, end: &str) -> BookingRow {
        BookingRow {
            id: Uuid::new_v4(),
            label: "Zack".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            notes: None,
            created_by: Some("Zack".to_string()),
            is_blocked: false,
        }
    }

    #[test]
    fn valid_booking_row_converts() {
        let booking = Booking::try_from(booking_row("2026-01-16", "2026-01-19")).unwrap();
        assert_eq!(booking.start().to_string(), "2026-01-16");
        assert_eq!(booking.end().to_string(), "2026-01-19");
        assert_eq!(BookingRow::from(&booking).end_date, "2026-01-19");
    }

    #[test]
    fn booking_on_latest_bookable_day_survives_storage() {
        let booking = Booking::try_from(booking_row("9999-12-30", "9999-12-31")).unwrap();
        let row = BookingRow::from(&booking);
        assert_eq!(row.end_date, "9999-12-31");
        assert_eq!(Booking::try_from(row).unwrap(), booking);
    }

    #[test]
    fn booking_row_with_end_not_after_start_is_corrupt() {
        let err = Booking::try_from(booking_row("2026-01-19", "2026-01-19")).unwrap_err();
        assert_eq!(err.code, ErrorCode::CorruptRecord);
        assert_eq!(err.details.get("table").map(String::as_str), Some("bookings"));
    }

    #[test]
    fn booking_row_with_bad_date_is_corrupt() {
        let err = Booking::try_from(booking_row("2026-02-30", "2026-03-02")).unwrap_err();
        assert_eq!(err.code, ErrorCode::CorruptRecord);
    }

    #[test]
    fn booking_row_deserializes_without_optional_columns() {
        let row: BookingRow = serde_json::from_str(
            r#"{"id":"6a4f0c1e-7d0f-4c55-9a55-0d0b5b8f5e11","label":"Family","start_date":"2026-02-06","end_date":"2026-02-09"}"#,
        )
        .unwrap();
        assert!(!row.is_blocked);
        assert!(Booking::try_from(row).is_ok());
    }

    #[test]
    fn access_request_row_rejects_unknown_status() {
        let row: AccessRequestRow = serde_json::from_str(
            r#"{"id":"6a4f0c1e-7d0f-4c55-9a55-0d0b5b8f5e11","email":"a@b.co","status":"maybe","created_at":"2026-01-02T03:04:05Z"}"#,
        )
        .unwrap();
        let err = AccessRequest::try_from(row).unwrap_err();
        assert_eq!(err.code, ErrorCode::CorruptRecord);
    }

    #[test]
    fn access_request_row_blank_optionals_become_none() {
        let row: AccessRequestRow = serde_json::from_str(
            r#"{"id":"6a4f0c1e-7d0f-4c55-9a55-0d0b5b8f5e11","email":"a@b.co","first_name":"Amy","last_name":"Lee","phone":" ","status":"pending","created_at":"2026-01-02T03:04:05Z"}"#,
        )
        .unwrap();
        let request = AccessRequest::try_from(row).unwrap();
        assert!(request.phone.is_none());
        assert!(request.is_pending());
    }

    #[test]
    fn profile_row_defaults_to_inactive_member() {
        let row: ProfileRow = serde_json::from_str(r#"{"id":"u3","email":"rob@example.com"}"#).unwrap();
        let profile = Profile::try_from(row).unwrap();
        assert_eq!(profile.role, UserRole::Member);
        assert!(!profile.is_active);
    }

    #[test]
    fn profile_row_with_unknown_role_is_corrupt() {
        let row: ProfileRow = serde_json::from_str(r#"{"id":"u3","role":"owner"}"#).unwrap();
        let err = Profile::try_from(row).unwrap_err();
        assert_eq!(err.code, ErrorCode::CorruptRecord);
    }
}
