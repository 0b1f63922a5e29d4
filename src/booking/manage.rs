//! Dashboard-side view of bookings: filtering, stats, customer scoping and
//! the mutations the backend does not offer yet.

use crate::models::{Booking, BookingId, BookingStatus};

/// Booking changes the dashboards expose as buttons. The backend has no
/// endpoint for any of them, so they resolve to a notice and never send a
/// request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingBackendOperation {
    UpdateStatus {
        booking_id: BookingId,
        status: BookingStatus,
    },
    Edit {
        booking_id: BookingId,
    },
    Cancel {
        booking_id: BookingId,
    },
    Delete {
        booking_id: BookingId,
    },
}

impl PendingBackendOperation {
    pub fn booking_id(&self) -> BookingId {
        match *self {
            PendingBackendOperation::UpdateStatus { booking_id, .. }
            | PendingBackendOperation::Edit { booking_id }
            | PendingBackendOperation::Cancel { booking_id }
            | PendingBackendOperation::Delete { booking_id } => booking_id,
        }
    }

    /// Question to ask before going ahead, if any
    pub fn confirmation_prompt(&self) -> Option<&'static str> {
        match self {
            PendingBackendOperation::Delete { .. } => {
                Some("Are you sure you want to delete this booking?")
            }
            _ => None,
        }
    }

    pub fn notice(&self) -> &'static str {
        match self {
            PendingBackendOperation::UpdateStatus { .. } => {
                "Update booking status feature coming soon!"
            }
            PendingBackendOperation::Edit { .. } => "Edit booking feature coming soon!",
            PendingBackendOperation::Cancel { .. } => "Cancel booking feature coming soon!",
            PendingBackendOperation::Delete { .. } => "Delete booking feature coming soon!",
        }
    }
}

/// Admin dashboard status filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingFilter {
    #[default]
    All,
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingFilter {
    pub const ALL: [BookingFilter; 4] = [
        BookingFilter::All,
        BookingFilter::Pending,
        BookingFilter::Confirmed,
        BookingFilter::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingFilter::All => "all",
            BookingFilter::Pending => "pending",
            BookingFilter::Confirmed => "confirmed",
            BookingFilter::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingFilter::All => "All Bookings",
            BookingFilter::Pending => "Pending",
            BookingFilter::Confirmed => "Confirmed",
            BookingFilter::Cancelled => "Cancelled",
        }
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        match self {
            BookingFilter::All => true,
            BookingFilter::Pending => booking.status() == BookingStatus::Pending,
            BookingFilter::Confirmed => booking.status() == BookingStatus::Confirmed,
            BookingFilter::Cancelled => booking.status() == BookingStatus::Cancelled,
        }
    }

    pub fn apply<'a>(&self, bookings: &'a [Booking]) -> Vec<&'a Booking> {
        bookings.iter().filter(|b| self.matches(b)).collect()
    }

    /// Empty-list message
    pub fn empty_message(&self) -> String {
        match self {
            BookingFilter::All => "No bookings have been made yet.".to_string(),
            other => format!("No {} bookings found.", other.as_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
}

impl BookingStats {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        bookings.iter().fold(Self::default(), |mut stats, b| {
            stats.total += 1;
            match b.status() {
                BookingStatus::Confirmed => stats.confirmed += 1,
                BookingStatus::Pending => stats.pending += 1,
                _ => {}
            }
            stats
        })
    }
}

/// Bookings to show a customer.
///
/// `GET /bookings` returns every booking. With an e-mail on the session the
/// list is narrowed to that address (case-insensitive); without one the full
/// list is returned and the caller is told it was not scoped.
pub fn scope_to_customer(bookings: Vec<Booking>, email: Option<&str>) -> (Vec<Booking>, bool) {
    match email.map(str::trim).filter(|e| !e.is_empty()) {
        Some(email) => (
            bookings
                .into_iter()
                .filter(|b| b.customer_email.trim().eq_ignore_ascii_case(email))
                .collect(),
            true,
        ),
        None => (bookings, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: BookingId, status: &str, email: &str) -> Booking {
        Booking {
            id,
            status: status.into(),
            customer_email: email.into(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking(1, "confirmed", "ann@example.com"),
            booking(2, "pending", "bob@example.com"),
            booking(3, "Pending", "ANN@example.com"),
            booking(4, "cancelled", "cy@example.com"),
            booking(5, "completed", "ann@example.com"),
        ]
    }

    #[test]
    fn stats_count_total_confirmed_pending() {
        assert_eq!(
            BookingStats::from_bookings(&sample()),
            BookingStats {
                total: 5,
                confirmed: 1,
                pending: 2
            }
        );
    }

    #[test]
    fn filter_is_case_insensitive_on_status() {
        let bookings = sample();
        let ids = |f: BookingFilter| f.apply(&bookings).iter().map(|b| b.id).collect::<Vec<_>>();
        assert_eq!(ids(BookingFilter::All).len(), 5);
        assert_eq!(ids(BookingFilter::Pending), vec![2, 3]);
        assert_eq!(ids(BookingFilter::Cancelled), vec![4]);
        assert_eq!(BookingFilter::parse("confirmed"), BookingFilter::Confirmed);
        assert_eq!(BookingFilter::parse("bogus"), BookingFilter::All);
        assert_eq!(
            BookingFilter::Pending.empty_message(),
            "No pending bookings found."
        );
    }

    #[test]
    fn customer_scope_uses_session_email() {
        let (mine, scoped) = scope_to_customer(sample(), Some("ann@example.com"));
        assert!(scoped);
        assert_eq!(mine.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 3, 5]);

        let (all, scoped) = scope_to_customer(sample(), None);
        assert!(!scoped);
        assert_eq!(all.len(), 5);

        let (all, scoped) = scope_to_customer(sample(), Some("  "));
        assert!(!scoped);
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn only_delete_asks_first() {
        let delete = PendingBackendOperation::Delete { booking_id: 9 };
        assert!(delete.confirmation_prompt().is_some());
        assert_eq!(delete.notice(), "Delete booking feature coming soon!");
        assert_eq!(delete.booking_id(), 9);

        let confirm = PendingBackendOperation::UpdateStatus {
            booking_id: 9,
            status: BookingStatus::Confirmed,
        };
        assert!(confirm.confirmation_prompt().is_none());
        assert_eq!(confirm.notice(), "Update booking status feature coming soon!");
    }
}
