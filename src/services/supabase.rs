use crate::models::{
    BriefRecord, BriefResponse, BudgetRange, Campaign, CampaignListItem, Creator, CreatorAudience,
    CreatorPost,
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur when interacting with the Supabase REST API
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Supabase (PostgREST) client
///
/// Handles all communication with the record store:
/// - Campaign lookup and listing
/// - Bulk creator listing
/// - Persisted outreach briefs
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
}

/// Campaign row as stored (snake_case columns, audience-facing camelCase
/// only appears inside jsonb payloads)
#[derive(Debug, Deserialize)]
struct CampaignRow {
    id: String,
    brand: String,
    objective: String,
    target_country: String,
    target_gender: String,
    target_age_range: String,
    #[serde(default)]
    niches: Vec<String>,
    #[serde(default)]
    preferred_hook_types: Vec<String>,
    min_avg_watch_time: f64,
    min_followers: i64,
    max_followers: i64,
    tone: String,
    #[serde(default)]
    do_not_use_words: Vec<String>,
}

impl From<CampaignRow> for Campaign {
    fn from(row: CampaignRow) -> Self {
        Campaign {
            id: row.id,
            brand: row.brand,
            objective: row.objective,
            target_country: row.target_country,
            target_gender: row.target_gender,
            target_age_range: row.target_age_range,
            niches: row.niches,
            preferred_hook_types: row.preferred_hook_types,
            min_avg_watch_time: row.min_avg_watch_time,
            budget_range: BudgetRange {
                min_followers: row.min_followers,
                max_followers: row.max_followers,
            },
            tone: row.tone,
            do_not_use_words: row.do_not_use_words,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CampaignListRow {
    id: String,
    brand: String,
    objective: String,
    target_country: String,
}

#[derive(Debug, Deserialize)]
struct CreatorRow {
    id: String,
    username: String,
    country: String,
    #[serde(default)]
    niches: Vec<String>,
    followers: i64,
    engagement_rate: f64,
    avg_watch_time: f64,
    content_style: String,
    primary_hook_type: String,
    #[serde(default)]
    brand_safety_flags: Vec<String>,
    audience: CreatorAudience,
    #[serde(default)]
    last_posts: Vec<CreatorPost>,
}

impl From<CreatorRow> for Creator {
    fn from(row: CreatorRow) -> Self {
        Creator {
            id: row.id,
            username: row.username,
            country: row.country,
            niches: row.niches,
            followers: row.followers,
            engagement_rate: row.engagement_rate,
            avg_watch_time: row.avg_watch_time,
            content_style: row.content_style,
            primary_hook_type: row.primary_hook_type,
            brand_safety_flags: row.brand_safety_flags,
            audience: row.audience,
            last_posts: row.last_posts,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BriefRow {
    id: String,
    campaign_id: String,
    creator_id: String,
    response_json: Value,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl SupabaseClient {
    /// Create a new Supabase client using the service-role key
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            table
        )
    }

    async fn get_rows(&self, url: &str) -> Result<Vec<Value>, SupabaseError> {
        tracing::debug!("Fetching rows from: {}", url);

        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Request to {} failed: {}",
                url,
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        json.as_array()
            .cloned()
            .ok_or_else(|| SupabaseError::InvalidResponse("Expected JSON array".into()))
    }

    /// Fetch a campaign by id
    pub async fn get_campaign(&self, campaign_id: &str) -> Result<Campaign, SupabaseError> {
        let url = format!(
            "{}?select=*&id=eq.{}",
            self.table_url("campaigns"),
            urlencoding::encode(campaign_id)
        );

        let rows = self.get_rows(&url).await?;

        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| SupabaseError::NotFound(format!("Campaign {} not found", campaign_id)))?;

        let parsed: CampaignRow = serde_json::from_value(row)
            .map_err(|e| SupabaseError::InvalidResponse(format!("Malformed campaign row: {}", e)))?;

        Ok(parsed.into())
    }

    /// List all campaigns (slim rows for list views)
    pub async fn list_campaigns(&self) -> Result<Vec<CampaignListItem>, SupabaseError> {
        let url = format!(
            "{}?select=id,brand,objective,target_country",
            self.table_url("campaigns")
        );

        let rows = self.get_rows(&url).await?;

        let mut campaigns = Vec::with_capacity(rows.len());
        for row in rows {
            match serde_json::from_value::<CampaignListRow>(row) {
                Ok(r) => campaigns.push(CampaignListItem {
                    id: r.id,
                    brand: r.brand,
                    objective: r.objective,
                    target_country: r.target_country,
                }),
                Err(e) => tracing::warn!("Skipping malformed campaign row: {}", e),
            }
        }

        Ok(campaigns)
    }

    /// Fetch every creator in the store
    ///
    /// Malformed rows are skipped with a warning rather than failing the
    /// whole listing; filtering bad records is the store layer's job.
    pub async fn get_all_creators(&self) -> Result<Vec<Creator>, SupabaseError> {
        let url = format!("{}?select=*", self.table_url("creators"));

        let rows = self.get_rows(&url).await?;

        let mut creators = Vec::with_capacity(rows.len());
        for row in rows {
            match serde_json::from_value::<CreatorRow>(row) {
                Ok(r) => creators.push(r.into()),
                Err(e) => tracing::warn!("Skipping malformed creator row: {}", e),
            }
        }

        Ok(creators)
    }

    /// Look up a persisted brief for a (campaign, creator) pair
    pub async fn find_brief(
        &self,
        campaign_id: &str,
        creator_id: &str,
    ) -> Result<Option<BriefRecord>, SupabaseError> {
        let url = format!(
            "{}?select=*&campaign_id=eq.{}&creator_id=eq.{}",
            self.table_url("ai_briefs"),
            urlencoding::encode(campaign_id),
            urlencoding::encode(creator_id)
        );

        let rows = self.get_rows(&url).await?;

        let Some(row) = rows.into_iter().next() else {
            return Ok(None);
        };

        let parsed: BriefRow = serde_json::from_value(row)
            .map_err(|e| SupabaseError::InvalidResponse(format!("Malformed brief row: {}", e)))?;

        // A stored payload that no longer validates is treated as a miss
        let response: BriefResponse = match serde_json::from_value(parsed.response_json) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(
                    "Stored brief for ({}, {}) failed to parse: {}",
                    campaign_id,
                    creator_id,
                    e
                );
                return Ok(None);
            }
        };

        if response.validate().is_err() {
            return Ok(None);
        }

        Ok(Some(BriefRecord {
            id: parsed.id,
            campaign_id: parsed.campaign_id,
            creator_id: parsed.creator_id,
            response_json: response,
            created_at: parsed.created_at,
        }))
    }

    /// Persist a generated brief
    pub async fn insert_brief(
        &self,
        campaign_id: &str,
        creator_id: &str,
        payload: &BriefResponse,
    ) -> Result<(), SupabaseError> {
        let url = self.table_url("ai_briefs");

        let body = serde_json::json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "campaign_id": campaign_id,
            "creator_id": creator_id,
            "response_json": payload,
        });

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Failed to persist brief: {}",
                response.status()
            )));
        }

        Ok(())
    }
}
