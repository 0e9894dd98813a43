//! Data models for AssetHub

pub mod asset;
pub mod booking;
pub mod enums;
pub mod feedback;
pub mod maintenance;
pub mod team;
pub mod user;
pub mod verification;

// Re-export commonly used types
pub use asset::Asset;
pub use booking::Booking;
pub use enums::{
    AssetCondition, AssetStatus, BookingStatus, Priority, Role, TicketStatus, UserStatus,
    VerificationStatus,
};
pub use maintenance::MaintenanceTicket;
pub use team::Team;
pub use user::{User, UserClaims};
pub use verification::Verification;
