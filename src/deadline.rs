//! Wall-clock budget threaded through the scan and extraction loops.
//!
//! The baseline design had no cancellation; a deadline lets a caller bound a
//! scan of a very large tree. Loops call [`Deadline::check`] at their top and
//! surface [`crate::ArchError::DeadlineExceeded`] when the budget is spent.

use std::time::{Duration, Instant};

use crate::types::{ArchError, Result};

#[derive(Debug, Clone)]
pub struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn new(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn expired(&self) -> bool {
        self.started.elapsed() >= self.budget
    }

    pub fn check(&self) -> Result<()> {
        if self.expired() {
            return Err(ArchError::DeadlineExceeded {
                elapsed: self.started.elapsed(),
            });
        }
        Ok(())
    }
}

/// Check an optional deadline; `None` never expires.
pub fn check(deadline: Option<&Deadline>) -> Result<()> {
    match deadline {
        Some(d) => d.check(),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_deadline_passes() {
        let deadline = Deadline::from_secs(3600);
        assert!(!deadline.expired());
        assert!(deadline.check().is_ok());
        assert!(check(Some(&deadline)).is_ok());
    }

    #[test]
    fn test_zero_budget_expires() {
        let deadline = Deadline::new(Duration::ZERO);
        assert!(deadline.expired());
        assert!(matches!(
            deadline.check(),
            Err(ArchError::DeadlineExceeded { .. })
        ));
    }

    #[test]
    fn test_absent_deadline_never_expires() {
        assert!(check(None).is_ok());
    }
}
