//! Factory inventory.
//!
//! Loaded on first launch, before the user has saved an inventory of their
//! own. Kept as raw records (the same shape the external editor persists)
//! so it flows through normalization like any other input.

use serde_json::{json, Value};

/// The factory rate list, one raw record per vehicle.
pub fn factory_inventory() -> Vec<Value> {
    vec![
        // Economy
        json!({ "id": "1",  "name": "Mazda CX-5",                   "type": "Econ",         "fuel": "Gasoline", "deposit": 400, "lowSeasonPrice": 60,  "highSeasonPrice": 72 }),
        json!({ "id": "2",  "name": "Chevrolet Equinox",            "type": "Econ",         "fuel": "Gasoline", "deposit": 400, "lowSeasonPrice": 60,  "highSeasonPrice": 72 }),
        json!({ "id": "3",  "name": "New Beetle",                   "type": "Econ",         "fuel": "Gasoline", "deposit": 400, "lowSeasonPrice": 56,  "highSeasonPrice": 62 }),
        // Sedan
        json!({ "id": "4",  "name": "Toyota Camry",                 "type": "Sedan",        "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 62,  "highSeasonPrice": 69 }),
        // Electric
        json!({ "id": "5",  "name": "Tesla Model 3",                "type": "Electric",     "fuel": "Electric", "deposit": 600, "lowSeasonPrice": 75,  "highSeasonPrice": 87,  "seats": 5 }),
        // Pick up
        json!({ "id": "6",  "name": "Dodge Ram 1500",               "type": "Pick Up",      "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 97,  "highSeasonPrice": 112, "seats": 5 }),
        // SUV
        json!({ "id": "7",  "name": "Volkswagen Tiguan",            "type": "Suv",          "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 72,  "highSeasonPrice": 82 }),
        json!({ "id": "8",  "name": "BMW X3",                       "type": "Suv",          "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 72,  "highSeasonPrice": 82 }),
        json!({ "id": "9",  "name": "Hyundai Santa Fe",             "type": "Suv",          "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 72,  "highSeasonPrice": 82 }),
        json!({ "id": "10", "name": "Toyota RAV4 Hybrid",           "type": "Suv",          "fuel": "Hybrid",   "deposit": 500, "lowSeasonPrice": 72,  "highSeasonPrice": 82 }),
        json!({ "id": "11", "name": "Nissan Rogue",                 "type": "Suv",          "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 72,  "highSeasonPrice": 82 }),
        // SUV premium
        json!({ "id": "12", "name": "BMW X1",                       "type": "Suv Premium",  "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 85,  "highSeasonPrice": 95 }),
        json!({ "id": "13", "name": "Audi Q5",                      "type": "Suv Premium",  "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 85,  "highSeasonPrice": 95 }),
        json!({ "id": "14", "name": "BMW X4",                       "type": "Suv Premium",  "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 85,  "highSeasonPrice": 95 }),
        json!({ "id": "15", "name": "Mercedes-Benz A220",           "type": "Suv Premium",  "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 85,  "highSeasonPrice": 95 }),
        // SUV family
        json!({ "id": "16", "name": "Chrysler Pacifica",            "type": "Suv Familiar", "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 85,  "highSeasonPrice": 95,  "seats": 7 }),
        json!({ "id": "17", "name": "Toyota Highlander",            "type": "Suv Familiar", "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 85,  "highSeasonPrice": 95,  "seats": 7 }),
        json!({ "id": "18", "name": "Kia Carnival",                 "type": "Suv Familiar", "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 95,  "highSeasonPrice": 112, "seats": 8 }),
        json!({ "id": "19", "name": "Ford Expedition",              "type": "Suv Familiar", "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 95,  "highSeasonPrice": 110, "seats": 7 }),
        json!({ "id": "20", "name": "Chevrolet Suburban",           "type": "Suv Familiar", "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 95,  "highSeasonPrice": 110, "seats": 7 }),
        json!({ "id": "21", "name": "Cadillac Escalade",            "type": "Suv Familiar", "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 199, "highSeasonPrice": 220, "seats": 7 }),
        // SUV lux
        json!({ "id": "22", "name": "Jeep Grand Cherokee",          "type": "Suv Lux",      "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 92,  "highSeasonPrice": 112, "seats": 5 }),
        json!({ "id": "23", "name": "BMW X7",                       "type": "Suv Lux",      "fuel": "Gasoline", "deposit": 800, "lowSeasonPrice": 180, "highSeasonPrice": 210, "seats": 7 }),
        // Lux (sports / cabrio)
        json!({ "id": "24", "name": "Mustang Cabrio",               "type": "Lux",          "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 75,  "highSeasonPrice": 90,  "seats": 5 }),
        json!({ "id": "25", "name": "Porsche Boxster",              "type": "Lux",          "fuel": "Gasoline", "deposit": 500, "lowSeasonPrice": 220, "highSeasonPrice": 250, "seats": 2 }),
    ]
}
