//! Axum route handlers for the Outreach API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::campaign::CampaignRow;
use crate::models::prospect::{MessageRow, ProspectRow};
use crate::outreach::generator::{generate_bulk, generate_message_set, BulkMessage};
use crate::outreach::message_set::GeneratedMessageSet;
use crate::outreach::store;
use crate::outreach::types::{CampaignConfig, ProspectProfile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CampaignDetailResponse {
    pub campaign: CampaignRow,
    pub prospect_count: usize,
    pub prospects: Vec<ProspectRow>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeProspectRequest {
    #[serde(flatten)]
    pub prospect: ProspectProfile,
    pub profile_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeProspectResponse {
    pub prospect_id: Uuid,
    pub campaign_id: Uuid,
    pub messages: GeneratedMessageSet,
}

#[derive(Debug, Deserialize)]
pub struct BulkGenerateRequest {
    pub prospects: Vec<ProspectProfile>,
}

#[derive(Debug, Serialize)]
pub struct BulkGenerateResponse {
    pub campaign_id: Uuid,
    pub results: Vec<BulkMessage>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/campaigns
pub async fn handle_create_campaign(
    State(state): State<AppState>,
    Json(campaign): Json<CampaignConfig>,
) -> Result<(StatusCode, Json<CampaignRow>), AppError> {
    if campaign.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let row = store::insert_campaign(&state.db, &campaign).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/campaigns
pub async fn handle_list_campaigns(
    State(state): State<AppState>,
) -> Result<Json<Vec<CampaignRow>>, AppError> {
    Ok(Json(store::list_campaigns(&state.db).await?))
}

/// GET /api/v1/campaigns/:id
///
/// Campaign management view: the campaign plus every prospect added to it.
pub async fn handle_get_campaign(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<CampaignDetailResponse>, AppError> {
    let campaign = load_campaign(&state, campaign_id).await?;
    let prospects = store::list_prospects(&state.db, campaign_id).await?;

    Ok(Json(CampaignDetailResponse {
        campaign,
        prospect_count: prospects.len(),
        prospects,
    }))
}

/// POST /api/v1/campaigns/:id/prospects
///
/// Generates the connection message and follow-up sequence for a prospect,
/// then saves both to the campaign. Generation failures and unparsed
/// follow-ups are still saved and reported through the status fields.
pub async fn handle_analyze_prospect(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
    Json(request): Json<AnalyzeProspectRequest>,
) -> Result<(StatusCode, Json<AnalyzeProspectResponse>), AppError> {
    let campaign = load_campaign(&state, campaign_id).await?.to_config();

    let messages =
        generate_message_set(state.generator.as_ref(), &campaign, &request.prospect).await;

    let profile_url = request
        .profile_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty());

    let prospect_id = store::insert_prospect(
        &state.db,
        campaign_id,
        &request.prospect,
        profile_url,
        &messages,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(AnalyzeProspectResponse {
            prospect_id,
            campaign_id,
            messages,
        }),
    ))
}

/// GET /api/v1/campaigns/:id/prospects
pub async fn handle_list_prospects(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<Vec<ProspectRow>>, AppError> {
    load_campaign(&state, campaign_id).await?;
    Ok(Json(store::list_prospects(&state.db, campaign_id).await?))
}

/// GET /api/v1/prospects/:id/messages
pub async fn handle_list_messages(
    State(state): State<AppState>,
    Path(prospect_id): Path<Uuid>,
) -> Result<Json<Vec<MessageRow>>, AppError> {
    if !store::prospect_exists(&state.db, prospect_id).await? {
        return Err(AppError::NotFound(format!("Prospect {prospect_id} not found")));
    }
    Ok(Json(store::list_messages(&state.db, prospect_id).await?))
}

/// POST /api/v1/campaigns/:id/messages/bulk
///
/// Generates connection messages for a batch of prospects, sequentially and
/// in input order. Results are returned, not saved.
pub async fn handle_bulk_generate(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
    Json(request): Json<BulkGenerateRequest>,
) -> Result<Json<BulkGenerateResponse>, AppError> {
    if request.prospects.is_empty() {
        return Err(AppError::Validation(
            "prospects cannot be empty".to_string(),
        ));
    }

    let campaign = load_campaign(&state, campaign_id).await?.to_config();
    let results = generate_bulk(state.generator.as_ref(), &campaign, &request.prospects).await;

    Ok(Json(BulkGenerateResponse {
        campaign_id,
        results,
    }))
}

async fn load_campaign(state: &AppState, campaign_id: Uuid) -> Result<CampaignRow, AppError> {
    store::find_campaign(&state.db, campaign_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Campaign {campaign_id} not found")))
}
