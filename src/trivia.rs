// src/trivia.rs
//
// External question source (Open Trivia DB wire format) plus the bundled
// fallback bank used whenever the source cannot be reached.

use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::{
    config::Config, error::AppError, models::question::QuizQuestion, utils::html::decode_entities,
};

/// Wire format of the trivia API response body.
#[derive(Debug, Deserialize)]
struct TriviaResponse {
    /// 0 means success; any other value is an API-level failure.
    response_code: i32,
    #[serde(default)]
    results: Vec<TriviaItem>,
}

/// One question item as returned by the API. All text fields may be
/// HTML-entity-encoded.
#[derive(Debug, Deserialize)]
struct TriviaItem {
    category: Option<String>,
    difficulty: Option<String>,
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

/// Requests a batch of questions from the external source.
///
/// Transport failures, non-success statuses, and nonzero API response codes
/// all surface as `AppError::ExternalSource`; the caller is expected to
/// absorb the error and fall back to [`fallback_questions`].
pub async fn fetch_questions(
    client: &reqwest::Client,
    config: &Config,
) -> Result<Vec<QuizQuestion>, AppError> {
    let mut params = vec![("amount", config.question_count.to_string())];
    if let Some(category) = config.trivia_category {
        params.push(("category", category.to_string()));
    }
    if let Some(difficulty) = &config.trivia_difficulty {
        params.push(("difficulty", difficulty.clone()));
    }

    let response = client
        .get(&config.trivia_api_url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?;

    let body: TriviaResponse = response.json().await?;
    if body.response_code != 0 {
        return Err(AppError::ExternalSource(format!(
            "Trivia API returned response_code {}",
            body.response_code
        )));
    }

    Ok(body.results.into_iter().map(into_question).collect())
}

/// Merges the correct and incorrect answers into one option list, decodes
/// HTML entities in every text field, then shuffles the options uniformly.
///
/// The decoded correct answer always appears in the final options, verbatim
/// and exactly once (assuming the source never lists it among the incorrect
/// answers).
fn into_question(item: TriviaItem) -> QuizQuestion {
    let correct_answer = decode_entities(&item.correct_answer);

    let mut options: Vec<String> = item
        .incorrect_answers
        .iter()
        .map(|a| decode_entities(a))
        .collect();
    options.push(correct_answer.clone());
    options.shuffle(&mut rand::thread_rng());

    QuizQuestion {
        question: decode_entities(&item.question),
        options,
        correct_answer,
        explanation: None,
        category: item.category,
        difficulty: item.difficulty,
    }
}

/// The static ten-question bank shipped with the application, served
/// whenever the external source is unavailable.
pub fn fallback_questions() -> Vec<QuizQuestion> {
    fn q(question: &str, options: [&str; 4], correct: &str, explanation: &str) -> QuizQuestion {
        QuizQuestion {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
            explanation: Some(explanation.to_string()),
            category: None,
            difficulty: None,
        }
    }

    vec![
        q(
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            "Paris",
            "Paris is the capital and most populous city of France.",
        ),
        q(
            "Which planet is known as the Red Planet?",
            ["Earth", "Mars", "Jupiter", "Venus"],
            "Mars",
            "Mars is called the Red Planet because of the reddish iron oxide on its surface.",
        ),
        q(
            "What is the largest mammal in the world?",
            ["Elephant", "Blue Whale", "Giraffe", "Polar Bear"],
            "Blue Whale",
            "The Blue Whale is the largest animal known to have ever existed, reaching lengths of up to 100 feet.",
        ),
        q(
            "Which of these elements has the chemical symbol 'O'?",
            ["Gold", "Oxygen", "Osmium", "Oganesson"],
            "Oxygen",
            "Oxygen has the chemical symbol 'O' and is essential for human respiration.",
        ),
        q(
            "Who painted the Mona Lisa?",
            [
                "Vincent van Gogh",
                "Pablo Picasso",
                "Leonardo da Vinci",
                "Michelangelo",
            ],
            "Leonardo da Vinci",
            "The Mona Lisa was painted by Italian Renaissance artist Leonardo da Vinci between 1503 and 1519.",
        ),
        q(
            "What is the largest organ in the human body?",
            ["Heart", "Liver", "Brain", "Skin"],
            "Skin",
            "The skin is the largest organ of the human body, covering an area of about 2 square meters in adults.",
        ),
        q(
            "Which country is home to the Great Barrier Reef?",
            ["Brazil", "Australia", "Thailand", "Mexico"],
            "Australia",
            "The Great Barrier Reef is located off the coast of Queensland, Australia, and is the world's largest coral reef system.",
        ),
        q(
            "What is the main component of the Sun?",
            ["Helium", "Oxygen", "Hydrogen", "Carbon"],
            "Hydrogen",
            "The Sun is composed primarily of hydrogen (about 73% of its mass), which it fuses into helium in its core.",
        ),
        q(
            "Which of these is NOT a programming language?",
            ["Java", "Python", "Cobra", "Photoshop"],
            "Photoshop",
            "Photoshop is an image editing software, not a programming language. Java, Python, and Cobra are all programming languages.",
        ),
        q(
            "What year did the first iPhone release?",
            ["2005", "2007", "2009", "2010"],
            "2007",
            "The first iPhone was announced by Steve Jobs on January 9, 2007, and released on June 29, 2007.",
        ),
    ]
}
