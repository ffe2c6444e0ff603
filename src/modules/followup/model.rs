use bson::serde_helpers::serialize_u32_as_i32;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled post-consultation follow-up for a pet.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Followup {
    pub pet_name: String,
    pub owner_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: NaiveDate,
    /// `HH:MM`
    pub time: String,
    pub status: String,
    pub notes: String,
    #[serde(rename = "pointsOnComplete", serialize_with = "serialize_u32_as_i32")]
    pub points_on_complete: u32,
}
