use crate::domain::error::DomainError;
use crate::domain::values::coach::CoachRequest;

#[async_trait::async_trait]
pub trait CoachProvider: Send + Sync {
    /// Free-text reply from the model. Empty replies are reported as-is;
    /// the caller decides what to substitute.
    async fn generate(&self, request: &CoachRequest) -> Result<String, DomainError>;
    fn name(&self) -> &str;
}
