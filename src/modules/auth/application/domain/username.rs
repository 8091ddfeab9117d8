use rand::Rng;

const WORDS: &[&str] = &[
    "aurora", "breeze", "cedar", "comet", "drift", "ember", "fable", "harbor", "indigo", "juniper",
    "lumen", "meadow", "nimbus", "onyx", "pebble", "quartz", "raven", "sierra", "tundra", "willow",
];

/// Signup-time username: a dictionary word plus four digits, always lowercase.
/// The account module treats these as unclaimed; a user replaces it exactly
/// once via the claim flow.
pub fn generate_username<R: Rng>(rng: &mut R) -> String {
    let word = WORDS[rng.gen_range(0..WORDS.len())];
    let digits: u16 = rng.gen_range(1000..10000);
    format!("{word}{digits}")
}
