//! Prompt templates and shaping of generated text.

use crate::web::persona::Persona;

const MAX_SUGGESTIONS: usize = 3;

pub fn suggest_prompt(text: &str) -> String {
    format!(
        "Someone said: \"{}\"\n\
         Write 3 short, friendly and helpful replies to this message.\n\
         Each reply should be on a new line, under 20 words, and not repeat the original message.",
        text
    )
}

pub fn complete_prompt(prompt: &str) -> String {
    format!(
        "Continue this personal sentence in first person without asking a question.\n\
         It should sound emotionally consistent and coherent.\n\
         Input: {}\n\
         Output:",
        prompt
    )
}

pub fn insight_prompt(messages: &[String]) -> String {
    format!(
        "Here are the last 10 messages in a conversation:\n\n{}\n\n\
         Please summarize the conversation and provide the overall mood and interaction tone. \
         Also include a breakdown of the emotions expressed if any.",
        messages.join("\n")
    )
}

pub fn auto_reply_prompt(persona: Persona, message: &str, context: &str) -> String {
    let context_block = if context.trim().is_empty() {
        String::new()
    } else {
        format!("Conversation context:\n{}", context)
    };

    format!(
        "{}\n\
         You are replying as a normal person in a chat conversation.\n\
         Respond to the message: \"{}\"\n\
         {}\n\
         Your reply should be realistic, concise (under 25 words), and practical.\n\
         Don't repeat the original message. Avoid dramatic or poetic language.\n\
         Reply like how you would respond in a chat app.\n\n\
         Reply:",
        persona.tone(),
        message,
        context_block
    )
}

pub fn smart_search_prompt(query: &str, history: &[String]) -> String {
    format!(
        "Here is a chat history, one message per line:\n\n{}\n\n\
         Find the messages that are relevant to this search: \"{}\"\n\
         Return only the matching messages exactly as written, one per line. \
         If nothing matches, return nothing.",
        history.join("\n"),
        query
    )
}

/// Turn a generated list of replies into at most three clean suggestions.
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    raw.trim()
        .split('\n')
        .map(|line| strip_bullet(line).trim().to_string())
        .filter(|line| !line.is_empty())
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Non-empty trimmed lines of a generated answer.
pub fn parse_lines(raw: &str) -> Vec<String> {
    raw.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Bullets and numbering are trimmed from both ends; markdown `*` and `1)`
/// markers only as a leading prefix so closing parentheses survive.
fn strip_bullet(line: &str) -> &str {
    line.trim_matches(|c: char| matches!(c, '-' | '•' | '.' | ' ') || c.is_ascii_digit())
        .trim_start_matches(|c: char| {
            matches!(c, '-' | '•' | '*' | '.' | ')') || c.is_ascii_digit() || c.is_whitespace()
        })
}
