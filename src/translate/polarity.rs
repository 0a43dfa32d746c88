//! Lexicon-based polarity scoring for translated English text.
//!
//! Polarity is the average valence of matched tokens, clamped to [-1, 1];
//! text with no lexicon hits scores 0. A negator directly before a matched
//! token flips and dampens its valence.

/// Signed word valences
const VALENCE: &[(&str, f64)] = &[
    // positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("wonderful", 1.0),
    ("amazing", 0.9),
    ("happy", 0.8),
    ("glad", 0.6),
    ("love", 0.8),
    ("like", 0.4),
    ("hope", 0.5),
    ("hopeful", 0.6),
    ("confident", 0.7),
    ("sure", 0.5),
    ("certain", 0.5),
    ("success", 0.7),
    ("successful", 0.8),
    ("calm", 0.4),
    ("comfortable", 0.5),
    ("optimistic", 0.7),
    ("positive", 0.6),
    ("strong", 0.4),
    ("best", 0.9),
    ("better", 0.5),
    ("enjoy", 0.6),
    ("proud", 0.6),
    ("perfect", 1.0),
    ("helpful", 0.5),
    ("easy", 0.4),
    // negative
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -0.9),
    ("horrible", -1.0),
    ("sad", -0.7),
    ("unhappy", -0.7),
    ("hate", -0.8),
    ("fear", -0.6),
    ("afraid", -0.6),
    ("scared", -0.6),
    ("anxious", -0.6),
    ("anxiety", -0.6),
    ("stress", -0.5),
    ("stressed", -0.6),
    ("worried", -0.5),
    ("worry", -0.5),
    ("problem", -0.4),
    ("difficult", -0.5),
    ("hard", -0.3),
    ("pain", -0.6),
    ("painful", -0.7),
    ("crisis", -0.7),
    ("angry", -0.7),
    ("anger", -0.6),
    ("failure", -0.7),
    ("fail", -0.6),
    ("worst", -0.9),
    ("worse", -0.5),
    ("wrong", -0.5),
    ("doubt", -0.4),
];

/// Negators that flip the following token's valence
const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "without"];

/// Dampening applied to a negated valence
const NEGATION_FACTOR: f64 = -0.5;

/// Polarity of an English fragment in [-1, 1]
pub fn polarity(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let mut sum = 0.0;
    let mut matched = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        let Some((_, valence)) = VALENCE.iter().find(|(word, _)| word == token) else {
            continue;
        };
        let negated = index > 0 && NEGATORS.contains(&tokens[index - 1]);
        sum += if negated {
            valence * NEGATION_FACTOR
        } else {
            *valence
        };
        matched += 1;
    }

    if matched == 0 {
        0.0
    } else {
        (sum / matched as f64).clamp(-1.0, 1.0)
    }
}
