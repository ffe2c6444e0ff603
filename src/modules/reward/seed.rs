use mongodb::Database;

use crate::modules::reward::model::Reward;
use crate::services::seeder::{replace_collection, SeedError};

fn reward(title: &str, desc: &str, cost: u32, img: &str) -> Reward {
    Reward {
        title: title.to_string(),
        desc: desc.to_string(),
        cost,
        img: img.to_string(),
    }
}

pub fn records() -> Vec<Reward> {
    vec![
        reward(
            "Cepillo profesional",
            "Cepillo ergonómico para perros mediano/grande.",
            400,
            "https://images.unsplash.com/photo-1546182990-dffeafbe841d?auto=format&fit=crop&w=600&q=60",
        ),
        reward(
            "Desparasitación (1 aplicación)",
            "Servicio en clínica, incluye revisión.",
            800,
            "https://images.unsplash.com/photo-1517849845537-4d257902454a?auto=format&fit=crop&w=600&q=60",
        ),
        reward(
            "Snack saludable (pack)",
            "Pack de snacks naturales para mascotas.",
            250,
            "https://www.shutterstock.com/shutterstock/photos/479587543/display_1500/stock-photo-healthy-dog-food-isolated-on-white-479587543.jpg",
        ),
    ]
}

pub async fn seed_rewards(db: &Database, collection_name: &str) -> Result<u64, SeedError> {
    replace_collection(db, collection_name, &records()).await
}
