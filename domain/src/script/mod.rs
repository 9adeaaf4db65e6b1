//! Scripted conversation content
//!
//! The fixed greeting, prompts, menu entries, and canned visitor answers.
//! This table is configuration data owned by the dialogue core, looked up
//! by option payload; it is not an external collaborator.

use crate::conversation::entities::ChoiceOption;

/// Option payload identifiers
pub mod payload {
    pub const ROLE_STUDENT: &str = "role_student";
    pub const ROLE_VISITOR: &str = "role_parent_visitor";
    pub const ASK_OTHER_QUERY: &str = "ask_other_query";
    pub const END_CHAT: &str = "end_chat";
    pub const VISITOR_Q1: &str = "visitor_q1";
    pub const VISITOR_Q2: &str = "visitor_q2";
    pub const VISITOR_Q3: &str = "visitor_q3";
    pub const VISITOR_Q4: &str = "visitor_q4";
    pub const VISITOR_Q5: &str = "visitor_q5";
}

pub const GREETING: &str =
    "Welcome to LDRP! I'm here to assist you. To get started, please select your role.";

pub const VISITOR_WELCOME: &str = "Welcome! Please select a question below, or ask your own.";

pub const STUDENT_PROMPT: &str =
    "Great! Please select your details below, then type your question.";

pub const AGENT_PROMPT: &str = "The agent is now active. Please type your question below.";

pub const MENU_REENTRY: &str = "You can select another question or ask a different query.";

pub const FAREWELL: &str = "Thank you for visiting. Have a great day!";

pub const DISPATCH_FAILURE: &str = "⚠ Sorry, I'm having trouble connecting to the server.";

/// Shown when the query service responds without a usable answer.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't find an answer.";

/// Canned visitor answers, keyed by option payload, in scan order.
///
/// `visitor_q5` has an answer but no menu entry; it is reachable only if a
/// menu offers it, which the current menus don't.
const SCRIPTED_ANSWERS: [(&str, &str); 5] = [
    (
        payload::VISITOR_Q1,
        "The college operates from 9:00 AM to 5:00 PM, Monday to Saturday.",
    ),
    (
        payload::VISITOR_Q2,
        "For admission, you'll need your 10th and 12th mark sheets, school leaving certificate, and passport-sized photographs.",
    ),
    (
        payload::VISITOR_Q3,
        "The detailed fee structure for each course is available on our website's admission page. Please visit ldrp.ac.in/admissions.",
    ),
    (
        payload::VISITOR_Q4,
        "Yes, LDRP has a zero-tolerance policy towards ragging. A dedicated anti-ragging committee is in place to handle any incidents.",
    ),
    (
        payload::VISITOR_Q5,
        "We have a dedicated placement cell that works with top companies. Our placement record has been consistently excellent. More details are on our website.",
    ),
];

/// Look up the canned answer for a payload, if one is scripted.
pub fn scripted_answer(payload: &str) -> Option<&'static str> {
    SCRIPTED_ANSWERS
        .iter()
        .find(|(key, _)| *key == payload)
        .map(|(_, answer)| *answer)
}

/// Options attached to the greeting turn.
pub fn role_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("I am a Student", payload::ROLE_STUDENT),
        ChoiceOption::new("I am a Parent / Visitor", payload::ROLE_VISITOR),
    ]
}

/// The visitor question menu, ending with the free-text escape hatch.
pub fn visitor_questions() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("College Timings", payload::VISITOR_Q1),
        ChoiceOption::new("Admission Documents", payload::VISITOR_Q2),
        ChoiceOption::new("Fee Structure", payload::VISITOR_Q3),
        ChoiceOption::new("Anti-Ragging Policies", payload::VISITOR_Q4),
        ChoiceOption::new("Ask Other Query", payload::ASK_OTHER_QUERY),
    ]
}

/// The re-entry menu shown after a scripted answer or agent turn.
pub fn visitor_questions_with_end() -> Vec<ChoiceOption> {
    let mut options = visitor_questions();
    options.push(ChoiceOption::new("End Chat", payload::END_CHAT));
    options
}

pub fn correction_notice_text(corrected: &str) -> String {
    format!("Did you mean: \"{corrected}\"?")
}

pub fn voice_unavailable_text(language_name: &str) -> String {
    format!("A voice for {language_name} is not available on your device.")
}
