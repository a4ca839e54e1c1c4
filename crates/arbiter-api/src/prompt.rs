//! Prompt construction for the judge and topic-generation calls
//!
//! Every inference call starts from one of the fixed system instructions
//! below; the judge call adds a user message interpolating the submitted
//! case verbatim.

use arbiter_llm::{ChatMessage, ChatRequest};

use crate::routes::CaseRequest;

/// Judging persona and evaluation rules
const JUDGE_SYSTEM_PROMPT: &str = "You are The Arbiter, a ruthless but fair AI judge in a Web3 game. \
     Evaluate the two arguments logically based on the provided debate topic. \
     Declare a clear winner (Player 1 or Player 2) and give a 2-sentence explanation.";

/// Topic-generation persona
const TOPIC_SYSTEM_PROMPT: &str = "You are a creative game master for a Web3 debate game. \
     Generate one short, funny, or controversial debate topic about crypto, technology, or internet culture.";

/// Build the two-message judge request for a submitted case
pub fn judge_request(case: &CaseRequest) -> ChatRequest {
    let user_prompt = format!(
        "Debate Topic: {}\nPlayer 1: {}\nPlayer 2: {}",
        case.topic, case.player_1_argument, case.player_2_argument
    );

    ChatRequest::new(vec![
        ChatMessage::system(JUDGE_SYSTEM_PROMPT),
        ChatMessage::user(user_prompt),
    ])
}

/// Build the single-message topic-generation request
pub fn topic_request() -> ChatRequest {
    ChatRequest::new(vec![ChatMessage::system(TOPIC_SYSTEM_PROMPT)])
}
