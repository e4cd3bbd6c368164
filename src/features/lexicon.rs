//! Sentiment lexicon for polarity scoring
//!
//! A compact valence word list in the AFINN style, scores pre-normalized to
//! [-1, 1]. Coverage is slanted towards the vocabulary of video titles and
//! descriptions (hype words, reaction words, tutorial phrasing).

/// (word, valence) pairs; valence in [-1, 1]
pub const LEXICON: &[(&str, f64)] = &[
    ("amazing", 0.8),
    ("awesome", 0.8),
    ("best", 0.6),
    ("brilliant", 0.8),
    ("great", 0.6),
    ("good", 0.4),
    ("incredible", 0.8),
    ("insane", 0.4),
    ("love", 0.6),
    ("loved", 0.6),
    ("perfect", 0.8),
    ("fantastic", 0.8),
    ("fun", 0.6),
    ("funny", 0.5),
    ("happy", 0.6),
    ("beautiful", 0.7),
    ("easy", 0.4),
    ("simple", 0.3),
    ("free", 0.3),
    ("win", 0.5),
    ("winner", 0.6),
    ("epic", 0.6),
    ("wow", 0.6),
    ("ultimate", 0.4),
    ("top", 0.3),
    ("pro", 0.3),
    ("excited", 0.6),
    ("exciting", 0.6),
    ("helpful", 0.5),
    ("useful", 0.5),
    ("recommended", 0.4),
    ("success", 0.5),
    ("successful", 0.5),
    ("enjoy", 0.5),
    ("clear", 0.3),
    ("powerful", 0.4),
    ("fast", 0.3),
    ("smart", 0.4),
    ("cool", 0.4),
    ("nice", 0.4),
    ("like", 0.3),
    ("thanks", 0.4),
    ("thank", 0.4),
    ("bad", -0.5),
    ("worst", -0.8),
    ("terrible", -0.8),
    ("horrible", -0.8),
    ("awful", -0.8),
    ("hate", -0.6),
    ("hated", -0.6),
    ("boring", -0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.6),
    ("broken", -0.5),
    ("wrong", -0.4),
    ("hard", -0.2),
    ("difficult", -0.3),
    ("problem", -0.3),
    ("problems", -0.3),
    ("error", -0.4),
    ("errors", -0.4),
    ("bug", -0.3),
    ("bugs", -0.3),
    ("scam", -0.8),
    ("fake", -0.5),
    ("waste", -0.6),
    ("annoying", -0.5),
    ("ugly", -0.5),
    ("sad", -0.5),
    ("angry", -0.5),
    ("disappointing", -0.6),
    ("disappointed", -0.6),
    ("mistake", -0.4),
    ("mistakes", -0.4),
    ("slow", -0.3),
    ("crash", -0.4),
    ("crashes", -0.4),
    ("dead", -0.5),
    ("never", -0.2),
    ("stop", -0.2),
    ("avoid", -0.3),
];

/// Polarity of a text in [-1, 1]: mean valence over matched words.
/// Missing or sentiment-free text scores neutral (0.0).
pub fn polarity(text: &str) -> f64 {
    let mut sum = 0.0;
    let mut matched = 0usize;

    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let lower = word.to_lowercase();
        if let Some((_, score)) = LEXICON.iter().find(|(w, _)| *w == lower) {
            sum += score;
            matched += 1;
        }
    }

    if matched == 0 {
        0.0
    } else {
        (sum / matched as f64).clamp(-1.0, 1.0)
    }
}
