use crate::models::{BriefResponse, Campaign, Creator};
use crate::services::groq::GroqClient;
use crate::services::supabase::{SupabaseClient, SupabaseError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

const MAX_ATTEMPTS: usize = 2;

/// Errors that can occur while producing an outreach brief
#[derive(Debug, Error)]
pub enum BriefError {
    #[error("Campaign {0} not found")]
    CampaignNotFound(String),

    #[error("Creator {0} not found")]
    CreatorNotFound(String),

    #[error("Store error: {0}")]
    StoreError(#[from] SupabaseError),

    #[error("Failed to generate brief: {0}")]
    GenerationFailed(String),
}

/// A brief plus whether it was served from the store or cache
#[derive(Debug, Clone)]
pub struct BriefOutcome {
    pub brief: BriefResponse,
    pub cached: bool,
}

/// Produces structured outreach briefs per (campaign, creator) pair
///
/// Persisted briefs are reused; an in-process cache fronts the store
/// lookup so repeat requests skip the round trip entirely.
pub struct BriefService {
    supabase: Arc<SupabaseClient>,
    groq: Arc<GroqClient>,
    cache: moka::future::Cache<String, BriefResponse>,
}

impl BriefService {
    pub fn new(
        supabase: Arc<SupabaseClient>,
        groq: Arc<GroqClient>,
        cache_size: u64,
        cache_ttl_secs: u64,
    ) -> Self {
        let cache = moka::future::CacheBuilder::new(cache_size)
            .time_to_live(Duration::from_secs(cache_ttl_secs))
            .build();

        Self {
            supabase,
            groq,
            cache,
        }
    }

    /// Generate (or reuse) a brief for a (campaign, creator) pair
    pub async fn generate(
        &self,
        campaign_id: &str,
        creator_id: &str,
    ) -> Result<BriefOutcome, BriefError> {
        let cache_key = format!("{}:{}", campaign_id, creator_id);

        if let Some(brief) = self.cache.get(&cache_key).await {
            tracing::debug!("Brief cache hit: {}", cache_key);
            return Ok(BriefOutcome {
                brief,
                cached: true,
            });
        }

        if let Some(record) = self.supabase.find_brief(campaign_id, creator_id).await? {
            self.cache
                .insert(cache_key, record.response_json.clone())
                .await;
            return Ok(BriefOutcome {
                brief: record.response_json,
                cached: true,
            });
        }

        let campaign = match self.supabase.get_campaign(campaign_id).await {
            Ok(c) => c,
            Err(SupabaseError::NotFound(_)) => {
                return Err(BriefError::CampaignNotFound(campaign_id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let creators = self.supabase.get_all_creators().await?;
        let creator = creators
            .into_iter()
            .find(|c| c.id == creator_id)
            .ok_or_else(|| BriefError::CreatorNotFound(creator_id.to_string()))?;

        let prompt = build_brief_prompt(&campaign, &creator);

        let mut last_error = String::from("Unknown error");

        for attempt in 0..MAX_ATTEMPTS {
            let raw = match self.groq.generate(&prompt).await {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("Brief generation attempt {} failed: {}", attempt + 1, e);
                    last_error = e.to_string();
                    continue;
                }
            };

            let Some(parsed) = parse_brief_from_raw(&raw) else {
                tracing::warn!("Brief generation attempt {} produced invalid JSON", attempt + 1);
                last_error = "Validation failed".to_string();
                continue;
            };

            if let Err(e) = self
                .supabase
                .insert_brief(campaign_id, creator_id, &parsed)
                .await
            {
                last_error = e.to_string();
                continue;
            }

            self.cache.insert(cache_key, parsed.clone()).await;
            return Ok(BriefOutcome {
                brief: parsed,
                cached: false,
            });
        }

        Err(BriefError::GenerationFailed(last_error))
    }
}

/// Build the generation prompt from campaign and creator fields
pub fn build_brief_prompt(campaign: &Campaign, creator: &Creator) -> String {
    let blocked = campaign.do_not_use_words.join(", ");

    let mut lines = vec![
        format!(
            "You are helping the brand {} run a {} campaign.",
            campaign.brand, campaign.objective
        ),
        "Campaign details:".to_string(),
        format!("- Target country: {}", campaign.target_country),
        format!("- Target gender: {}", campaign.target_gender),
        format!("- Target age range: {}", campaign.target_age_range),
        format!("- Niches: {}", campaign.niches.join(", ")),
        format!(
            "- Preferred hook types: {}",
            campaign.preferred_hook_types.join(", ")
        ),
        format!("- Tone: {}", campaign.tone),
    ];

    if !blocked.is_empty() {
        lines.push(format!("- Do not use words: {}", blocked));
    }

    lines.extend([
        String::new(),
        "Creator details:".to_string(),
        format!("- Handle: @{}", creator.username),
        format!("- Country: {}", creator.country),
        format!("- Niches: {}", creator.niches.join(", ")),
        format!("- Followers: {}", creator.followers),
        format!("- Engagement rate: {:.1}%", creator.engagement_rate * 100.0),
        format!("- Avg watch time: {:.1}s", creator.avg_watch_time),
        format!("- Primary hook type: {}", creator.primary_hook_type),
        String::new(),
        "Generate a structured brief as strict JSON with the following shape (no markdown, no comments, no extra text):".to_string(),
        r#"{"outreachMessage": string, "contentIdeas": string[5], "hookSuggestions": string[3]}"#.to_string(),
    ]);

    lines.join("\n")
}

/// Slice out the outermost JSON object from free-form model output
pub fn extract_json(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => text[start..=end].trim(),
        _ => text.trim(),
    }
}

/// Fix common LLM JSON mistakes so serde_json can succeed: strip a leading
/// BOM and drop trailing commas before `]` or `}`
pub fn repair_json(json_str: &str) -> String {
    let s = json_str.trim().trim_start_matches('\u{feff}');

    let mut out = String::with_capacity(s.len());
    let chars: Vec<char> = s.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c == ',' {
            let next_significant = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
            if matches!(next_significant, Some('}') | Some(']')) {
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// Parse and validate a brief from raw model output, or None if neither the
/// cleaned nor the repaired text yields a valid payload
pub fn parse_brief_from_raw(raw: &str) -> Option<BriefResponse> {
    let cleaned = extract_json(raw)
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string();

    for candidate in [cleaned.clone(), repair_json(&cleaned)] {
        let Ok(parsed) = serde_json::from_str::<BriefResponse>(&candidate) else {
            continue;
        };
        if parsed.validate().is_ok() {
            return Some(parsed);
        }
    }

    None
}
