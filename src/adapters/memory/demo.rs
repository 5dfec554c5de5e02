//! Seeded in-memory backend for demo mode.
//!
//! Three accounts (Zack the admin, Jeff, and Rob who is still waiting for
//! approval), a few overlapping winter stays and one maintenance block.
//! Zack starts signed in.

use std::sync::Arc;

use crate::domain::access::{AccessRequest, AccessRequestStatus};
use crate::domain::booking::Booking;
use crate::domain::calendar::{BookingInterval, CalendarDate};
use crate::domain::foundation::{
    AccessRequestId, AuthenticatedUser, BookingId, DomainError, Timestamp, UserId, UserRole,
};
use crate::domain::user::Profile;

use super::{
    InMemoryAccessRequestRepository, InMemoryBookingRepository, InMemoryFileStore,
    InMemoryProfileRepository, MockIdentityProvider,
};

/// Every port backed by seeded in-memory state.
pub struct DemoBackend {
    pub bookings: Arc<InMemoryBookingRepository>,
    pub access_requests: Arc<InMemoryAccessRequestRepository>,
    pub profiles: Arc<InMemoryProfileRepository>,
    pub identity: Arc<MockIdentityProvider>,
    pub files: Arc<InMemoryFileStore>,
}

struct Stay {
    label: &'static str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    notes: &'static str,
    created_by: &'static str,
    is_blocked: bool,
}

const STAYS: [Stay; 4] = [
    Stay {
        label: "Zack",
        start: (2026, 1, 16),
        end: (2026, 1, 19),
        notes: "Arriving Friday evening. Leaving Sunday afternoon.",
        created_by: "Zack",
        is_blocked: false,
    },
    Stay {
        label: "Family",
        start: (2026, 2, 6),
        end: (2026, 2, 9),
        notes: "Weekend hang.",
        created_by: "Mom",
        is_blocked: false,
    },
    Stay {
        label: "Cousins",
        start: (2026, 2, 8),
        end: (2026, 2, 12),
        notes: "Overlap is allowed for visibility.",
        created_by: "Jeff",
        is_blocked: false,
    },
    Stay {
        label: "Blocked: Maintenance",
        start: (2026, 2, 20),
        end: (2026, 2, 23),
        notes: "Plumbing work scheduled.",
        created_by: "Admin",
        is_blocked: true,
    },
];

fn day((year, month, day): (i32, u32, u32)) -> Result<CalendarDate, DomainError> {
    Ok(CalendarDate::from_ymd(year, month, day)?)
}

fn seed_bookings() -> Result<Vec<Booking>, DomainError> {
    STAYS
        .iter()
        .map(|stay| {
            let interval = BookingInterval::new(day(stay.start)?, day(stay.end)?)?;
            Ok(Booking::restore(
                BookingId::new(),
                stay.label,
                interval,
                Some(stay.notes.to_string()),
                Some(stay.created_by.to_string()),
                stay.is_blocked,
            ))
        })
        .collect()
}

fn seed_profiles() -> Result<Vec<Profile>, DomainError> {
    Ok(vec![
        Profile::new(UserId::new("u1")?, "zack@example.com")
            .with_names("Zack", "")
            .with_role(UserRole::Admin)
            .activated(),
        Profile::new(UserId::new("u2")?, "jeff@example.com")
            .with_names("Jeff", "")
            .activated(),
        Profile::new(UserId::new("u3")?, "rob@example.com").with_names("Rob", ""),
    ])
}

impl DemoBackend {
    pub fn seeded() -> Result<Self, DomainError> {
        let profiles = seed_profiles()?;

        let mut identity = MockIdentityProvider::new();
        for profile in &profiles {
            if let Some(email) = &profile.email {
                identity = identity.with_account(AuthenticatedUser::new(profile.id.clone(), email));
            }
        }
        let zack = AuthenticatedUser::new(UserId::new("u1")?, "zack@example.com");
        let identity = identity.signed_in_as(zack);

        let access_requests = InMemoryAccessRequestRepository::with_requests(vec![AccessRequest {
            id: AccessRequestId::new(),
            email: "rob@example.com".to_string(),
            first_name: "Rob".to_string(),
            last_name: String::new(),
            phone: None,
            invite_code: None,
            status: AccessRequestStatus::Pending,
            created_at: Timestamp::now(),
        }]);

        Ok(Self {
            bookings: Arc::new(InMemoryBookingRepository::with_bookings(seed_bookings()?)),
            access_requests: Arc::new(access_requests),
            profiles: Arc::new(InMemoryProfileRepository::with_profiles(profiles)),
            identity: Arc::new(identity),
            files: Arc::new(InMemoryFileStore::default()),
        })
    }
}
