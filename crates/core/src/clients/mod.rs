//! Clients module - onboarding records, validation, and draft operations.

mod clients_constants;
mod clients_model;
mod onboarding_service;


// Re-export the public interface
pub use clients_constants::*;
pub use clients_model::{
    Address, Beneficiary, ClientProfile, InvestmentPreference, NewClient, RiskTolerance,
};
pub use onboarding_service::OnboardingDraft;
