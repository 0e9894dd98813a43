//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    assets, auth, bookings, feedback, health, maintenance, stats, teams, users, verifications,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AssetHub API",
        version = "1.0.0",
        description = "Asset Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::register,
        auth::me,
        // Assets
        assets::list_assets,
        assets::list_my_assets,
        assets::get_asset,
        assets::create_asset,
        assets::update_asset,
        assets::delete_asset,
        assets::assign_asset,
        assets::unassign_asset,
        assets::report_issue,
        assets::upload_asset_image,
        // Bookings
        bookings::list_bookings,
        bookings::list_my_bookings,
        bookings::create_booking,
        bookings::approve_booking,
        bookings::reject_booking,
        bookings::cancel_booking,
        // Maintenance
        maintenance::list_tickets,
        maintenance::get_ticket,
        maintenance::create_ticket,
        maintenance::assign_technician,
        maintenance::start_ticket,
        maintenance::resolve_ticket,
        // Teams
        teams::list_teams,
        teams::get_team,
        teams::create_team,
        teams::update_team,
        teams::delete_team,
        teams::add_team_member,
        teams::remove_team_member,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Feedback
        feedback::list_feedback,
        feedback::create_feedback,
        // Verifications
        verifications::create_verification,
        verifications::list_my_verifications,
        verifications::complete_verification,
        // Stats
        stats::dashboard_stats,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Assets
            crate::models::asset::Asset,
            crate::models::asset::CreateAsset,
            crate::models::asset::UpdateAsset,
            crate::models::asset::AssignAsset,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::CreateBooking,
            crate::models::booking::RejectBooking,
            // Maintenance
            crate::models::maintenance::MaintenanceTicket,
            crate::models::maintenance::CreateTicket,
            crate::models::maintenance::AssignTechnician,
            crate::models::maintenance::ResolveTicket,
            // Teams
            crate::models::team::Team,
            crate::models::team::TeamDetails,
            crate::models::team::CreateTeam,
            crate::models::team::UpdateTeam,
            // Users
            crate::models::user::User,
            crate::models::user::UserDetails,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Feedback
            crate::models::feedback::Feedback,
            crate::models::feedback::CreateFeedback,
            // Verifications
            crate::models::verification::Verification,
            crate::models::verification::CreateVerification,
            // Enums
            crate::models::enums::AssetStatus,
            crate::models::enums::AssetCondition,
            crate::models::enums::BookingStatus,
            crate::models::enums::TicketStatus,
            crate::models::enums::Priority,
            crate::models::enums::Role,
            crate::models::enums::UserStatus,
            crate::models::enums::VerificationStatus,
            // Stats
            crate::services::stats::DashboardStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "assets", description = "Asset inventory management"),
        (name = "bookings", description = "Asset booking requests and approvals"),
        (name = "maintenance", description = "Maintenance ticket tracking"),
        (name = "teams", description = "Team management"),
        (name = "users", description = "User management"),
        (name = "feedback", description = "User feedback"),
        (name = "verifications", description = "Periodic asset possession checks"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
