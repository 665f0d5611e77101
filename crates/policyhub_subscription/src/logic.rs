// --- File: crates/policyhub_subscription/src/logic.rs ---
//! Subscription lifecycle: trial on registration, flat renewal on payment.
//!
//! ```text
//! [no account] --register--> [trial-active]
//! [trial-active] --window elapses--> [expired]
//! [any] --pay--> [paid-active, full window from now]
//! ```
//!
//! Only `subscription_expiry` gates access. `has_paid` records that a payment
//! happened and never affects [`is_active`].

use crate::error::SubscriptionError;
use chrono::{DateTime, Duration, Utc};
use policyhub_config::SubscriptionConfig;
use policyhub_db::{User, UserRepository};
use tracing::{debug, info, warn};

/// Computes and persists access windows for users.
#[derive(Debug, Clone)]
pub struct SubscriptionLifecycle<R> {
    users: R,
    trial_days: i64,
    renewal_days: i64,
}

/// `now` plus a window of `days`, refusing non-positive or unrepresentable windows.
fn window_end(now: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, SubscriptionError> {
    Duration::try_days(days)
        .filter(|window| *window > Duration::zero())
        .and_then(|window| now.checked_add_signed(window))
        .ok_or(SubscriptionError::InvalidWindow(days))
}

impl<R: UserRepository> SubscriptionLifecycle<R> {
    pub fn new(users: R, config: &SubscriptionConfig) -> Self {
        Self {
            users,
            trial_days: config.trial_days,
            renewal_days: config.renewal_days,
        }
    }

    /// The repository the lifecycle writes through.
    pub fn users(&self) -> &R {
        &self.users
    }

    /// Opens the trial window for a freshly created user.
    ///
    /// Returns the trial end that was written.
    pub async fn grant_trial(&self, user_id: i64) -> Result<DateTime<Utc>, SubscriptionError> {
        let trial_ends = window_end(Utc::now(), self.trial_days)?;
        let updated = self
            .users
            .set_subscription_expiry(user_id, Some(trial_ends))
            .await?;
        if updated == 0 {
            warn!("Trial granted to unknown user {}", user_id);
        }
        info!("Trial for user {} ends at {}", user_id, trial_ends);
        Ok(trial_ends)
    }

    /// Records a payment and resets the window to a full period from now.
    ///
    /// Remaining time on a still-valid subscription is discarded, not carried
    /// over. The reference is not checked here; see [`PaymentVerifier`].
    /// An unknown user id is not an error: the update simply touches no row.
    ///
    /// [`PaymentVerifier`]: policyhub_common::PaymentVerifier
    pub async fn renew(
        &self,
        user_id: i64,
        reference: &str,
    ) -> Result<DateTime<Utc>, SubscriptionError> {
        if reference.is_empty() {
            return Err(SubscriptionError::MissingField("reference".to_string()));
        }

        let new_expiry = window_end(Utc::now(), self.renewal_days)?;
        let updated = self.users.record_payment(user_id, new_expiry).await?;
        if updated == 0 {
            warn!(
                "Payment {} recorded for unknown user {}; no row updated",
                reference, user_id
            );
        } else {
            info!(
                "Subscription for user {} renewed until {} (reference {})",
                user_id, new_expiry, reference
            );
        }
        Ok(new_expiry)
    }
}

/// True iff the user has an expiry strictly after `now`.
pub fn is_active_at(user: &User, now: DateTime<Utc>) -> bool {
    let active = user.subscription_expiry.is_some_and(|expiry| expiry > now);
    debug!(
        "User {} expiry {:?} active at {}: {}",
        user.id, user.subscription_expiry, now, active
    );
    active
}

/// [`is_active_at`] evaluated against the current time.
pub fn is_active(user: &User) -> bool {
    is_active_at(user, Utc::now())
}
