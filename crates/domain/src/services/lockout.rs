//! Login lockout and OTP resend throttling for administrator accounts.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Administrator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockoutPolicy {
    /// Consecutive failures that lock the account.
    pub max_failed_attempts: u32,
    pub lockout_minutes: i64,
    pub otp_resend_cooldown_secs: i64,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_failed_attempts: 5,
            lockout_minutes: 30,
            otp_resend_cooldown_secs: 60,
        }
    }
}

impl Administrator {
    /// Locked while `now` is before `locked_until`.
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Counts a failed login and returns whether the account is now locked.
    pub fn record_failed_login(&mut self, policy: &LockoutPolicy, now: DateTime<Utc>) -> bool {
        // An expired lock starts a fresh window.
        if self.locked_until.is_some_and(|until| now >= until) {
            self.clear_lockout();
        }

        self.failed_login_attempts = self.failed_login_attempts.saturating_add(1);
        if self.failed_login_attempts >= policy.max_failed_attempts {
            let until = now + Duration::minutes(policy.lockout_minutes);
            warn!(
                admin_id = %self.id,
                attempts = self.failed_login_attempts,
                locked_until = %until,
                "Administrator account locked"
            );
            self.locked_until = Some(until);
        }
        self.updated_at = now;
        self.is_locked(now)
    }

    pub fn record_successful_login(&mut self, now: DateTime<Utc>) {
        self.clear_lockout();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    pub fn clear_lockout(&mut self) {
        self.failed_login_attempts = 0;
        self.locked_until = None;
    }

    pub fn can_send_otp(&self, policy: &LockoutPolicy, now: DateTime<Utc>) -> bool {
        self.last_otp_sent_at
            .map_or(true, |sent| now - sent >= Duration::seconds(policy.otp_resend_cooldown_secs))
    }

    pub fn mark_otp_sent(&mut self, now: DateTime<Utc>) {
        self.last_otp_sent_at = Some(now);
    }
}
