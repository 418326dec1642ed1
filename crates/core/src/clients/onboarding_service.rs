//! Onboarding draft with explicit beneficiary list operations.

use chrono::{NaiveDate, Utc};
use log::debug;
use uuid::Uuid;

use crate::errors::Result;

use super::{Beneficiary, ClientProfile, NewClient};

/// In-progress onboarding record.
///
/// Beneficiaries form an ordered list manipulated through `add_beneficiary`
/// and `remove_beneficiary`; submission validates the whole record and
/// produces an immutable [`ClientProfile`].
#[derive(Debug, Clone, Default)]
pub struct OnboardingDraft {
    pub client: NewClient,
}

impl OnboardingDraft {
    /// Starts an empty draft with form defaults (balanced risk tolerance,
    /// no preferences, no beneficiaries).
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a draft from an already partially filled record.
    pub fn from_client(client: NewClient) -> Self {
        Self { client }
    }

    /// Appends a beneficiary, assigning it an id when it has none.
    pub fn add_beneficiary(&mut self, mut beneficiary: Beneficiary) {
        if beneficiary.id.is_none() {
            beneficiary.id = Some(Uuid::new_v4().to_string());
        }
        self.client.beneficiaries.push(beneficiary);
    }

    /// Removes the beneficiary at `index`, preserving the order of the
    /// remaining entries. Returns `None` when the index is out of bounds.
    pub fn remove_beneficiary(&mut self, index: usize) -> Option<Beneficiary> {
        if index < self.client.beneficiaries.len() {
            Some(self.client.beneficiaries.remove(index))
        } else {
            None
        }
    }

    /// Sum of beneficiary shares, counting malformed entries as zero.
    pub fn total_beneficiary_share(&self) -> f64 {
        self.client
            .beneficiaries
            .iter()
            .map(|b| if b.share_pct.is_finite() { b.share_pct } else { 0.0 })
            .sum()
    }

    /// Validates the draft and, on success, produces a `ClientProfile` with
    /// a fresh id and creation timestamp. The draft is consumed.
    pub fn submit(self, today: NaiveDate) -> Result<ClientProfile> {
        self.client.validate(today)?;
        let dob = self.client.parsed_dob()?;

        let id = Uuid::new_v4().to_string();
        debug!(
            "Onboarding accepted for {} {} (client {})",
            self.client.first_name, self.client.last_name, id
        );

        Ok(ClientProfile {
            id,
            first_name: self.client.first_name,
            last_name: self.client.last_name,
            email: self.client.email,
            phone: self.client.phone,
            dob,
            ssn_last4: self.client.ssn_last4,
            address: self.client.address,
            initial_deposit: self.client.initial_deposit,
            risk_tolerance: self.client.risk_tolerance,
            investment_preferences: self.client.investment_preferences,
            beneficiaries: self.client.beneficiaries,
            created_at: Utc::now().naive_utc(),
        })
    }
}
