use chrono::NaiveDate;
use mongodb::Database;

use crate::modules::followup::model::Followup;
use crate::services::seeder::{replace_collection, SeedError};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

pub fn records() -> Vec<Followup> {
    vec![
        Followup {
            pet_name: "Rocky".to_string(),
            owner_name: "Ana Pérez".to_string(),
            kind: "Seguimiento de recuperación".to_string(),
            date: day(2025, 5, 12),
            time: "10:00".to_string(),
            status: "Pendiente".to_string(),
            notes: "Revisar sutura".to_string(),
            points_on_complete: 100,
        },
        Followup {
            pet_name: "Luna".to_string(),
            owner_name: "Carlos R.".to_string(),
            kind: "Vacunación programada".to_string(),
            date: day(2025, 6, 2),
            time: "16:30".to_string(),
            status: "Enviado recordatorio".to_string(),
            notes: "Vacuna antirrábica".to_string(),
            points_on_complete: 100,
        },
        Followup {
            pet_name: "Milo".to_string(),
            owner_name: "Laura S.".to_string(),
            kind: "Encuesta de satisfacción".to_string(),
            date: day(2025, 4, 30),
            time: "09:00".to_string(),
            status: "Completado".to_string(),
            notes: "Excelente recuperación".to_string(),
            points_on_complete: 30,
        },
    ]
}

pub async fn seed_followups(db: &Database, collection_name: &str) -> Result<u64, SeedError> {
    replace_collection(db, collection_name, &records()).await
}
