use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{DEFAULT_OPTION_COUNT, QuizConfig, ShortOptionPolicy};
use crate::models::{Difficulty, QuizQuestion, StudyCard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Options per question, the correct answer included.
    pub option_count: usize,
    pub policy: ShortOptionPolicy,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            option_count: DEFAULT_OPTION_COUNT,
            policy: ShortOptionPolicy::AllowFewer,
        }
    }
}

impl From<&QuizConfig> for GeneratorOptions {
    fn from(config: &QuizConfig) -> Self {
        Self {
            option_count: config.option_count,
            policy: config.short_option_policy,
        }
    }
}

pub fn prompt_for(term: &str) -> String {
    format!("What is the definition of “{}”?", term)
}

/// Builds up to `count` multiple-choice questions using the thread RNG and default options.
pub fn generate(cards: &[StudyCard], count: usize) -> Vec<QuizQuestion> {
    generate_with(
        cards,
        count,
        &GeneratorOptions::default(),
        &mut rand::thread_rng(),
    )
}

/// Picks cards uniformly without replacement (partial Fisher-Yates over an
/// index pool) and turns each into a question whose wrong options are the
/// definitions of cards not consumed yet, in deck order.
pub fn generate_with<R: Rng + ?Sized>(
    cards: &[StudyCard],
    count: usize,
    options: &GeneratorOptions,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let take = count.min(cards.len());
    let wanted = options.option_count.saturating_sub(1);
    let mut pool: Vec<usize> = (0..cards.len()).collect();
    let mut consumed = vec![false; cards.len()];
    let mut questions = Vec::with_capacity(take);

    for slot in 0..take {
        let pick = rng.gen_range(slot..pool.len());
        pool.swap(slot, pick);
        let card_index = pool[slot];
        consumed[card_index] = true;
        let card = &cards[card_index];

        let mut wrong = Vec::with_capacity(wanted);
        push_distractors(cards, &card.definition, wanted, |i| !consumed[i], &mut wrong);

        if wrong.len() < wanted {
            match options.policy {
                ShortOptionPolicy::AllowFewer => {}
                ShortOptionPolicy::Backfill => push_distractors(
                    cards,
                    &card.definition,
                    wanted,
                    |i| i != card_index && consumed[i],
                    &mut wrong,
                ),
                ShortOptionPolicy::SkipQuestion => continue,
            }
        }

        let mut choices = wrong;
        choices.push(card.definition.clone());
        choices.shuffle(rng);

        questions.push(QuizQuestion {
            id: questions.len() as u32 + 1,
            card_id: card.id,
            prompt: prompt_for(&card.term),
            options: choices,
            correct_answer: card.definition.clone(),
            difficulty: Difficulty::Medium,
            topic: card.topic.clone(),
        });
    }

    questions
}

fn push_distractors(
    cards: &[StudyCard],
    correct: &str,
    wanted: usize,
    eligible: impl Fn(usize) -> bool,
    wrong: &mut Vec<String>,
) {
    for (i, card) in cards.iter().enumerate() {
        if wrong.len() >= wanted {
            break;
        }
        if !eligible(i) || card.definition == correct || wrong.contains(&card.definition) {
            continue;
        }
        wrong.push(card.definition.clone());
    }
}
