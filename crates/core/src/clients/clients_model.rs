//! Client onboarding domain models.
//!
//! These records carry the onboarding data flow independently of any form
//! framework: a `NewClient` is a plain input record validated as a whole,
//! and beneficiaries are an ordered list manipulated by explicit operations
//! on [`super::OnboardingDraft`].

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{DAYS_PER_YEAR, MIN_CLIENT_AGE_YEARS};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::num_utils::lenient_num;

use super::{MAX_BENEFICIARY_SHARE_PCT, MIN_BENEFICIARY_SHARE_PCT, MIN_FIRST_NAME_LENGTH};

lazy_static! {
    /// Anything of the shape local@domain.tld, with no whitespace
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern");

    /// Optional leading +, then at least seven digits/separators
    static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?[0-9\-\s()]{7,}$").expect("Invalid regex pattern");

    /// Last four digits of an SSN
    static ref SSN_LAST4_REGEX: Regex =
        Regex::new(r"^\d{4}$").expect("Invalid regex pattern");

    /// US ZIP or ZIP+4
    static ref ZIP_REGEX: Regex =
        Regex::new(r"^\d{5}(-\d{4})?$").expect("Invalid regex pattern");
}

/// Client risk tolerance selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Balanced,
    Aggressive,
}

/// Investment preference tags a client can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentPreference {
    Equities,
    FixedIncome,
    Esg,
}

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// One beneficiary entry with its share of the estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub relation: String,
    #[serde(default, with = "lenient_num")]
    pub share_pct: f64,
}

/// Input record for creating a new client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// ISO date string, parsed and checked during validation
    pub dob: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn_last4: Option<String>,
    pub address: Address,
    #[serde(default, with = "lenient_num")]
    pub initial_deposit: f64,
    pub risk_tolerance: RiskTolerance,
    #[serde(default)]
    pub investment_preferences: Vec<InvestmentPreference>,
    #[serde(default)]
    pub beneficiaries: Vec<Beneficiary>,
    pub accept_terms: bool,
}

impl NewClient {
    /// Parses the date of birth, failing when it is absent or malformed.
    pub fn parsed_dob(&self) -> Result<NaiveDate> {
        if self.dob.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "dob".to_string(),
            )));
        }
        let dob = self
            .dob
            .parse::<NaiveDate>()
            .map_err(ValidationError::DateTimeParse)?;
        Ok(dob)
    }

    /// Validates the record against the onboarding rules. The first
    /// violation encountered is returned.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.first_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "firstName".to_string(),
            )));
        }
        if self.first_name.trim().chars().count() < MIN_FIRST_NAME_LENGTH {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "First name is too short".to_string(),
            )));
        }
        if self.last_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "lastName".to_string(),
            )));
        }
        if self.email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }
        if !EMAIL_REGEX.is_match(self.email.trim()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Invalid email address: {}",
                self.email
            ))));
        }
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            if !PHONE_REGEX.is_match(phone.trim()) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Invalid phone number: {}",
                    phone
                ))));
            }
        }

        let dob = self.parsed_dob()?;
        let age_years = (today - dob).num_days() as f64 / DAYS_PER_YEAR;
        if age_years < MIN_CLIENT_AGE_YEARS {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Client must be at least 18 years old".to_string(),
            )));
        }

        if let Some(ssn) = self.ssn_last4.as_deref().filter(|s| !s.trim().is_empty()) {
            if !SSN_LAST4_REGEX.is_match(ssn.trim()) {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "SSN must be the last 4 digits only".to_string(),
                )));
            }
        }

        if self.address.line1.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "address.line1".to_string(),
            )));
        }
        if self.address.city.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "address.city".to_string(),
            )));
        }
        if self.address.state.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "address.state".to_string(),
            )));
        }
        if self.address.zip.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "address.zip".to_string(),
            )));
        }
        if !ZIP_REGEX.is_match(self.address.zip.trim()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Invalid ZIP code: {}",
                self.address.zip
            ))));
        }

        if !self.initial_deposit.is_finite() || self.initial_deposit < 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Initial deposit must be a non-negative amount".to_string(),
            )));
        }

        for (index, beneficiary) in self.beneficiaries.iter().enumerate() {
            if beneficiary.name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::MissingField(format!(
                    "beneficiaries[{}].name",
                    index
                ))));
            }
            if !beneficiary.share_pct.is_finite()
                || beneficiary.share_pct < MIN_BENEFICIARY_SHARE_PCT
                || beneficiary.share_pct > MAX_BENEFICIARY_SHARE_PCT
            {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Beneficiary share must be between 0 and 100, got {}",
                    beneficiary.share_pct
                ))));
            }
        }

        if !self.accept_terms {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Terms must be accepted".to_string(),
            )));
        }

        Ok(())
    }
}

/// Domain model representing a validated, accepted client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub dob: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn_last4: Option<String>,
    pub address: Address,
    pub initial_deposit: f64,
    pub risk_tolerance: RiskTolerance,
    pub investment_preferences: Vec<InvestmentPreference>,
    pub beneficiaries: Vec<Beneficiary>,
    pub created_at: NaiveDateTime,
}
