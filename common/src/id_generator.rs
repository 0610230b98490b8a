use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use crate::identifiers::SessionId;

const ADJECTIVES: &[&str] = &[
    "Swift", "Brave", "Clever", "Mighty", "Silent", "Golden", "Wild", "Noble",
    "Fierce", "Gentle", "Quick", "Wise", "Bold", "Proud", "Cunning", "Sly",
];

const NOUNS: &[&str] = &[
    "Python", "Cobra", "Viper", "Adder", "Mamba", "Boa", "Asp", "Krait",
    "Taipan", "Racer", "Garter", "Anaconda", "Sidewinder", "Rattler", "Copperhead", "Kingsnake",
];

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Human-readable session name. The trailing counter keeps names unique within the process.
pub fn generate_session_id() -> SessionId {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let number = SESSION_COUNTER.fetch_add(1, Ordering::Relaxed);
    SessionId::new(format!("{}-{}-{}", adjective, noun, number))
}
