use std::collections::BTreeSet;

use crate::domain::BusinessProfile;
use crate::error::AnswerError;

use super::{AnswerCache, OpenaiClient};

pub enum AnswerStrategy {
    Heuristic,
    OpenAi(OpenaiClient),
}

pub struct EngineAnswer {
    pub message: String,
    pub cached: bool,
}

pub struct AnswerEngine {
    strategy: AnswerStrategy,
    cache: AnswerCache,
}

impl AnswerEngine {
    pub fn new(strategy: AnswerStrategy, cache: AnswerCache) -> Self {
        AnswerEngine { strategy, cache }
    }

    pub async fn answer(
        &self,
        profile: &BusinessProfile,
        question: &str,
    ) -> Result<EngineAnswer, AnswerError> {
        if question.trim().is_empty() {
            return Err(AnswerError::EmptyQuestion);
        }

        // The raw question text is the key: casing and whitespace variants
        // are distinct entries.
        if let Some(message) = self.cache.get(&profile.name, question) {
            return Ok(EngineAnswer {
                message,
                cached: true,
            });
        }

        let message = match &self.strategy {
            AnswerStrategy::Heuristic => heuristic_answer(profile, question),
            AnswerStrategy::OpenAi(client) => {
                let prompt = build_prompt(profile, question);
                client.get_answer(&prompt).await?
            }
        };

        // Lookup and insert are separate lock acquisitions: two concurrent
        // misses on the same key both generate and the last write wins.
        self.cache
            .insert(profile.name.clone(), question.to_string(), message.clone());

        Ok(EngineAnswer {
            message,
            cached: false,
        })
    }
}

fn build_prompt(profile: &BusinessProfile, question: &str) -> String {
    format!(
        "You are a senior business intelligence consultant. A client is asking about the following business.\n\n\
         Business name: {}\n\
         Description: {}\n\
         Emails found on the website: {}\n\
         Phone numbers found on the website: {}\n\n\
         Client question: {}\n\n\
         Rules:\n\
         - Answer only from the information above.\n\
         - If something is not known, say so instead of inventing facts.\n\
         - Keep the answer short and concrete.",
        profile.name,
        profile.description,
        join_contacts(&profile.emails),
        join_contacts(&profile.phones),
        question
    )
}

fn join_contacts(values: &BTreeSet<String>) -> String {
    match values.is_empty() {
        true => "None found".to_string(),
        false => values
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

// Keyword routing, checked in priority order.
fn heuristic_answer(profile: &BusinessProfile, question: &str) -> String {
    let question = question.to_lowercase();

    if question.contains("market") || question.contains("sector") {
        format!(
            "{} positions itself as: {}. That self-description is the strongest market signal available from its website.",
            profile.name, profile.description
        )
    } else if question.contains("competitor") {
        format!(
            "{} does not name its competitors on the website. Its closest competitors are likely businesses describing themselves similarly to: {}.",
            profile.name, profile.description
        )
    } else if question.contains("revenue") || question.contains("money") {
        format!(
            "{} publishes no revenue figures. Its most plausible revenue model follows from what it offers: {}.",
            profile.name, profile.description
        )
    } else {
        format!(
            "{}: {}. The website exposes {} email address(es) and {} phone number(s) as contact signals.",
            profile.name,
            profile.description,
            profile.emails.len(),
            profile.phones.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{build_prompt, heuristic_answer, AnswerCache, AnswerEngine, AnswerStrategy};
    use crate::domain::BusinessProfile;
    use crate::error::AnswerError;

    fn acme() -> BusinessProfile {
        BusinessProfile {
            name: "Acme Co".to_string(),
            description: "We sell widgets".to_string(),
            emails: ["a@b.com".to_string()].into(),
            phones: ["+1 555-123-4567".to_string()].into(),
            scrape_time: 0.5,
        }
    }

    fn heuristic_engine() -> AnswerEngine {
        AnswerEngine::new(AnswerStrategy::Heuristic, AnswerCache::default())
    }

    #[tokio::test]
    async fn empty_question_is_rejected() {
        let engine = heuristic_engine();
        let result = engine.answer(&acme(), "   ").await;

        assert!(matches!(result, Err(AnswerError::EmptyQuestion)));
    }

    #[tokio::test]
    async fn second_identical_question_is_served_from_cache() {
        let engine = heuristic_engine();

        let first = engine.answer(&acme(), "Tell me about this business").await.unwrap();
        let second = engine.answer(&acme(), "Tell me about this business").await.unwrap();

        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(first.message, second.message);
    }

    #[tokio::test]
    async fn cache_keys_are_case_sensitive() {
        let engine = heuristic_engine();

        let first = engine.answer(&acme(), "who are you?").await.unwrap();
        let variant = engine.answer(&acme(), "Who are you?").await.unwrap();

        assert!(!first.cached);
        assert!(!variant.cached);
    }

    #[tokio::test]
    async fn competitor_questions_route_to_competitor_template() {
        let engine = heuristic_engine();

        for question in ["Who are the competitors?", "BIGGEST COMPETITOR?", "competitor?"] {
            let answer = engine.answer(&acme(), question).await.unwrap();
            assert!(
                answer.message.contains("competitors"),
                "unexpected answer for {question:?}: {}",
                answer.message
            );
        }
    }

    #[test]
    fn market_outranks_competitor() {
        let answer = heuristic_answer(&acme(), "market position vs competitors?");
        assert!(answer.contains("market signal"));
    }

    #[test]
    fn revenue_questions_route_to_revenue_template() {
        let answer = heuristic_answer(&acme(), "How do they make money?");
        assert!(answer.contains("revenue"));
    }

    #[test]
    fn unmatched_questions_fall_back_to_summary_with_counts() {
        let answer = heuristic_answer(&acme(), "What is this?");
        assert!(answer.contains("1 email address(es)"));
        assert!(answer.contains("1 phone number(s)"));
    }

    #[test]
    fn prompt_carries_profile_and_verbatim_question() {
        let prompt = build_prompt(&acme(), "Who runs this?");

        assert!(prompt.contains("Acme Co"));
        assert!(prompt.contains("We sell widgets"));
        assert!(prompt.contains("a@b.com"));
        assert!(prompt.contains("Who runs this?"));
    }

    #[test]
    fn prompt_marks_missing_contacts() {
        let profile = BusinessProfile {
            emails: Default::default(),
            phones: Default::default(),
            ..acme()
        };
        let prompt = build_prompt(&profile, "anything?");

        assert!(prompt.contains("Emails found on the website: None found"));
        assert!(prompt.contains("Phone numbers found on the website: None found"));
    }
}
