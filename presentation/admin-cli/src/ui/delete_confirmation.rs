use std::time::{Duration, Instant};

use business::domain::product::value_objects::ProductId;

pub const CONFIRMATION_WINDOW: Duration = Duration::from_secs(5);

/// Two-step delete: the first request arms, a second one for the same id
/// inside the window confirms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteConfirmation {
    #[default]
    Idle,
    Pending { id: ProductId, expires_at: Instant },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteDecision {
    /// Asked once; the caller should prompt to repeat the request.
    Armed,
    Confirmed,
}

impl DeleteConfirmation {
    pub fn request(&mut self, id: &ProductId, now: Instant) -> DeleteDecision {
        let confirmed = matches!(
            self,
            DeleteConfirmation::Pending { id: pending, expires_at }
                if *pending == *id && now < *expires_at
        );

        if confirmed {
            *self = DeleteConfirmation::Idle;
            return DeleteDecision::Confirmed;
        }

        *self = DeleteConfirmation::Pending {
            id: id.clone(),
            expires_at: now + CONFIRMATION_WINDOW,
        };
        DeleteDecision::Armed
    }

    pub fn reset(&mut self) {
        *self = DeleteConfirmation::Idle;
    }

    pub fn pending_id(&self, now: Instant) -> Option<&ProductId> {
        match self {
            DeleteConfirmation::Pending { id, expires_at } if now < *expires_at => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_arm_on_first_request_and_confirm_on_second() {
        let mut confirmation = DeleteConfirmation::default();
        let id = ProductId::new("p-1");
        let start = Instant::now();

        assert_eq!(confirmation.request(&id, start), DeleteDecision::Armed);
        assert_eq!(confirmation.pending_id(start), Some(&id));
        assert_eq!(
            confirmation.request(&id, start + Duration::from_secs(2)),
            DeleteDecision::Confirmed
        );
        assert_eq!(confirmation, DeleteConfirmation::Idle);
    }

    #[test]
    fn should_rearm_after_window_expires() {
        let mut confirmation = DeleteConfirmation::default();
        let id = ProductId::new("p-1");
        let start = Instant::now();

        confirmation.request(&id, start);
        let late = start + CONFIRMATION_WINDOW;

        assert_eq!(confirmation.pending_id(late), None);
        assert_eq!(confirmation.request(&id, late), DeleteDecision::Armed);
    }

    #[test]
    fn should_rearm_for_different_product() {
        let mut confirmation = DeleteConfirmation::default();
        let first = ProductId::new("p-1");
        let second = ProductId::new("p-2");
        let start = Instant::now();

        confirmation.request(&first, start);

        assert_eq!(confirmation.request(&second, start), DeleteDecision::Armed);
        assert_eq!(confirmation.pending_id(start), Some(&second));
    }

    #[test]
    fn should_return_to_idle_on_reset() {
        let mut confirmation = DeleteConfirmation::default();
        let id = ProductId::new("p-1");
        let now = Instant::now();
        confirmation.request(&id, now);

        confirmation.reset();

        assert_eq!(confirmation.request(&id, now), DeleteDecision::Armed);
    }
}
