// Service exports
pub mod briefs;
pub mod groq;
pub mod supabase;

pub use briefs::{BriefError, BriefOutcome, BriefService};
pub use groq::{GroqClient, GroqError};
pub use supabase::{SupabaseClient, SupabaseError};
