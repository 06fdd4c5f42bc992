use crate::domain::error::DomainError;
use crate::domain::ports::coach_provider::CoachProvider;
use crate::domain::values::coach::CoachRequest;

/// Used when no API key is configured; every ask degrades to the fallback text.
pub struct NoopCoach;

#[async_trait::async_trait]
impl CoachProvider for NoopCoach {
    async fn generate(&self, _request: &CoachRequest) -> Result<String, DomainError> {
        Err(DomainError::Coach("no coach provider configured".into()))
    }

    fn name(&self) -> &str {
        "noop"
    }
}
