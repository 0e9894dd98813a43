//! Shared domain enums and state-machine transition rules

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Asset availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[repr(i16)]
pub enum AssetStatus {
    Available = 0,
    InUse = 1,
    Maintenance = 2,
}

impl From<i16> for AssetStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => AssetStatus::InUse,
            2 => AssetStatus::Maintenance,
            _ => AssetStatus::Available,
        }
    }
}

impl From<AssetStatus> for i16 {
    fn from(s: AssetStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AssetStatus::Available => "Available",
            AssetStatus::InUse => "In Use",
            AssetStatus::Maintenance => "Maintenance",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// AssetCondition
// ---------------------------------------------------------------------------

/// Physical condition of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[repr(i16)]
pub enum AssetCondition {
    Good = 0,
    Fair = 1,
    NeedsRepair = 2,
}

impl From<i16> for AssetCondition {
    fn from(v: i16) -> Self {
        match v {
            1 => AssetCondition::Fair,
            2 => AssetCondition::NeedsRepair,
            _ => AssetCondition::Good,
        }
    }
}

impl From<AssetCondition> for i16 {
    fn from(c: AssetCondition) -> Self {
        c as i16
    }
}

impl std::fmt::Display for AssetCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AssetCondition::Good => "Good",
            AssetCondition::Fair => "Fair",
            AssetCondition::NeedsRepair => "Needs Repair",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Booking approval status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[repr(i16)]
pub enum BookingStatus {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

impl BookingStatus {
    /// Valid transitions: Pending -> Approved, Pending -> Rejected,
    /// Approved -> Rejected (cancel of a prior approval). Rejected is terminal.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Approved)
                | (BookingStatus::Pending, BookingStatus::Rejected)
                | (BookingStatus::Approved, BookingStatus::Rejected)
        )
    }

    /// Only Pending bookings may be cancelled (hard-deleted) by their requester
    pub fn can_cancel(self) -> bool {
        self == BookingStatus::Pending
    }
}

impl From<i16> for BookingStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => BookingStatus::Approved,
            2 => BookingStatus::Rejected,
            _ => BookingStatus::Pending,
        }
    }
}

impl From<BookingStatus> for i16 {
    fn from(s: BookingStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Rejected => "Rejected",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Maintenance ticket status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[repr(i16)]
pub enum TicketStatus {
    Pending = 0,
    Assigned = 1,
    InProgress = 2,
    Resolved = 3,
}

impl TicketStatus {
    /// Resolved is terminal: no reopen path
    pub fn is_terminal(self) -> bool {
        self == TicketStatus::Resolved
    }

    /// Work may start from Pending or Assigned only
    pub fn can_start(self) -> bool {
        matches!(self, TicketStatus::Pending | TicketStatus::Assigned)
    }

    /// A ticket may be resolved from any non-terminal state
    pub fn can_resolve(self) -> bool {
        !self.is_terminal()
    }

    /// A technician may be (re)assigned on any non-terminal state
    pub fn can_assign_technician(self) -> bool {
        !self.is_terminal()
    }

    /// Status after setting a technician: Pending advances to Assigned,
    /// anything else is left unchanged
    pub fn after_technician_assigned(self) -> TicketStatus {
        match self {
            TicketStatus::Pending => TicketStatus::Assigned,
            other => other,
        }
    }
}

impl From<i16> for TicketStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => TicketStatus::Assigned,
            2 => TicketStatus::InProgress,
            3 => TicketStatus::Resolved,
            _ => TicketStatus::Pending,
        }
    }
}

impl From<TicketStatus> for i16 {
    fn from(s: TicketStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TicketStatus::Pending => "Pending",
            TicketStatus::Assigned => "Assigned",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Booking / ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[repr(i16)]
pub enum Priority {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl From<i16> for Priority {
    fn from(v: i16) -> Self {
        match v {
            0 => Priority::Low,
            2 => Priority::High,
            _ => Priority::Medium,
        }
    }
}

impl From<Priority> for i16 {
    fn from(p: Priority) -> Self {
        p as i16
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role. Set explicitly at account creation, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[repr(i16)]
pub enum Role {
    Admin = 0,
    Employee = 1,
    Technician = 2,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    /// Roles allowed to work maintenance tickets
    pub fn is_maintenance_staff(self) -> bool {
        matches!(self, Role::Admin | Role::Technician)
    }
}

impl From<i16> for Role {
    fn from(v: i16) -> Self {
        match v {
            0 => Role::Admin,
            2 => Role::Technician,
            _ => Role::Employee,
        }
    }
}

impl From<Role> for i16 {
    fn from(r: Role) -> Self {
        r as i16
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
            Role::Technician => "Technician",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// UserStatus
// ---------------------------------------------------------------------------

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[repr(i16)]
pub enum UserStatus {
    Active = 0,
    Inactive = 1,
}

impl From<i16> for UserStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => UserStatus::Inactive,
            _ => UserStatus::Active,
        }
    }
}

impl From<UserStatus> for i16 {
    fn from(s: UserStatus) -> Self {
        s as i16
    }
}

// ---------------------------------------------------------------------------
// VerificationStatus
// ---------------------------------------------------------------------------

/// Asset verification request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[repr(i16)]
pub enum VerificationStatus {
    Pending = 0,
    Completed = 1,
}

impl From<i16> for VerificationStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => VerificationStatus::Completed,
            _ => VerificationStatus::Pending,
        }
    }
}

impl From<VerificationStatus> for i16 {
    fn from(s: VerificationStatus) -> Self {
        s as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_transitions_out_of_pending() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Approved));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Rejected));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn booking_approval_can_be_cancelled() {
        assert!(BookingStatus::Approved.can_transition_to(BookingStatus::Rejected));
        assert!(!BookingStatus::Approved.can_transition_to(BookingStatus::Approved));
        assert!(!BookingStatus::Approved.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn booking_rejected_is_terminal() {
        assert!(!BookingStatus::Rejected.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Rejected.can_transition_to(BookingStatus::Approved));
        assert!(!BookingStatus::Rejected.can_transition_to(BookingStatus::Rejected));
    }

    #[test]
    fn booking_cancel_only_while_pending() {
        assert!(BookingStatus::Pending.can_cancel());
        assert!(!BookingStatus::Approved.can_cancel());
        assert!(!BookingStatus::Rejected.can_cancel());
    }

    #[test]
    fn ticket_start_only_from_pending_or_assigned() {
        assert!(TicketStatus::Pending.can_start());
        assert!(TicketStatus::Assigned.can_start());
        assert!(!TicketStatus::InProgress.can_start());
        assert!(!TicketStatus::Resolved.can_start());
    }

    #[test]
    fn ticket_resolve_from_any_open_state() {
        assert!(TicketStatus::Pending.can_resolve());
        assert!(TicketStatus::Assigned.can_resolve());
        assert!(TicketStatus::InProgress.can_resolve());
        assert!(!TicketStatus::Resolved.can_resolve());
    }

    #[test]
    fn ticket_technician_assignment_advances_pending_only() {
        assert_eq!(
            TicketStatus::Pending.after_technician_assigned(),
            TicketStatus::Assigned
        );
        assert_eq!(
            TicketStatus::InProgress.after_technician_assigned(),
            TicketStatus::InProgress
        );
        assert_eq!(
            TicketStatus::Assigned.after_technician_assigned(),
            TicketStatus::Assigned
        );
        assert!(!TicketStatus::Resolved.can_assign_technician());
    }

    #[test]
    fn status_roundtrips_through_i16() {
        for s in [AssetStatus::Available, AssetStatus::InUse, AssetStatus::Maintenance] {
            assert_eq!(AssetStatus::from(i16::from(s)), s);
        }
        for s in [
            TicketStatus::Pending,
            TicketStatus::Assigned,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
        ] {
            assert_eq!(TicketStatus::from(i16::from(s)), s);
        }
    }

    #[test]
    fn display_labels_match_ui_strings() {
        assert_eq!(AssetStatus::InUse.to_string(), "In Use");
        assert_eq!(AssetCondition::NeedsRepair.to_string(), "Needs Repair");
        assert_eq!(TicketStatus::InProgress.to_string(), "In Progress");
    }
}
