//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AssignRosterRequest, AvailabilityRequest, CreateGameRequest, LinkPlayerRequest,
    PostSummaryRequest, SetPreferenceRequest, SetWebhookRequest, UpdateGameRequest,
    UpsertMemberRequest, WithdrawRequest,
};

pub use responses::{
    DataResponse, DiscordIdResponse, GameResponse, HealthChecks, HealthResponse, LinkResponse,
    MeResponse, MemberResponse, MembersResponse, PreferenceResponse, QueuedResponse,
    ReadinessResponse, ReminderRunResponse, SessionResponse, SignInResponse, SuccessResponse,
    WebhookStatusResponse,
};

pub use mappers::MemberWithLink;
