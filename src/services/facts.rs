use rand::seq::SliceRandom;
use rand::Rng;

pub const SPACE_FACTS: [&str; 10] = [
    "Did you know? A day on Venus is longer than a year on Venus!",
    "Did you know? Neutron stars can spin at a rate of 600 rotations per second!",
    "Did you know? There are more trees on Earth than stars in the Milky Way.",
    "Did you know? One million Earths could fit inside the Sun!",
    "Did you know? The footprints on the Moon will be there for millions of years.",
    "Did you know? Jupiter has 95 known moons!",
    "Did you know? Space is completely silent\u{2014}there\u{2019}s no air for sound to travel.",
    "Did you know? The hottest planet in our solar system is Venus.",
    "Did you know? Saturn would float if you could put it in water!",
    "Did you know? The International Space Station travels at 28,000 km/h!",
];

pub fn pick_fact<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SPACE_FACTS.choose(rng).copied().unwrap_or(SPACE_FACTS[0])
}

pub fn random_fact() -> &'static str {
    pick_fact(&mut rand::thread_rng())
}
