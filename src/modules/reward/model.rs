use bson::serde_helpers::serialize_u32_as_i32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reward {
    pub title: String,
    pub desc: String,
    /// Points needed to redeem.
    #[serde(serialize_with = "serialize_u32_as_i32")]
    pub cost: u32,
    pub img: String,
}
