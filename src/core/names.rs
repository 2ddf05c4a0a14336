//! Display-name pool for simulated users

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Aino", "Alex", "Amanda", "Anna", "Antti", "Ben", "Carla", "Chris", "Daniel", "David",
    "Eero", "Elena", "Emma", "Eric", "Frank", "Grace", "Hanna", "Henry", "Ida", "Isaac",
    "James", "Jenna", "John", "Julia", "Kalle", "Karen", "Laura", "Leo", "Linda", "Lucas",
    "Maria", "Mark", "Matti", "Mia", "Nina", "Noah", "Olivia", "Oskari", "Paul", "Petra",
    "Robert", "Sara", "Sofia", "Thomas", "Tiina", "Veera", "Victor", "William", "Ville", "Zoe",
];

/// Pick a first name from the pool
pub fn random_first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    FIRST_NAMES
        .choose(rng)
        .copied()
        .unwrap_or("Anonymous")
        .to_string()
}
