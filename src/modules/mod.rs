pub mod followup;
pub mod reward;
