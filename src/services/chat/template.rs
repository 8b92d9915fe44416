use async_trait::async_trait;
use rand::seq::SliceRandom;
use regex::Regex;

use super::{ChatError, ChatResponder};

type Reply = fn(&str) -> String;

/// Rule-based replies: the first matching pattern wins, otherwise a random generic answer.
pub struct TemplateResponder {
    rules: Vec<(Regex, Reply)>,
}

fn greeting(_: &str) -> String {
    "Hello! I'm an AI assistant ready to help you. What would you like to know about?".to_string()
}

fn identity(_: &str) -> String {
    "I'm a simulated AI assistant designed to help answer your questions and provide information \
     on various topics."
        .to_string()
}

fn wellbeing(_: &str) -> String {
    "I'm functioning well, thank you for asking! How can I assist you today?".to_string()
}

fn gratitude(_: &str) -> String {
    "You're welcome! If you have more questions, feel free to ask.".to_string()
}

fn technology(prompt: &str) -> String {
    format!(
        "Regarding {}, technology is constantly evolving. Recent advancements have made \
         significant impacts across industries, from AI and machine learning to cloud computing \
         and edge devices. What specific aspect interests you the most?",
        prompt
    )
}

fn science(prompt: &str) -> String {
    format!(
        "{} touches on fascinating scientific concepts. Science helps us understand the universe \
         through systematic observation and experimentation. There have been remarkable \
         discoveries in this field recently that have changed our understanding.",
        prompt
    )
}

fn history(prompt: &str) -> String {
    format!(
        "When discussing {}, it's important to consider the historical context. History provides \
         valuable lessons and insights into human development, societal structures, and how past \
         events continue to shape our present world.",
        prompt
    )
}

const RULES: &[(&str, Reply)] = &[
    (r"^(hi|hello|hey|greetings|howdy)", greeting),
    (r"(who are you|what are you|about yourself|your name)", identity),
    (r"(how are you|how's it going|how do you feel|how are things)", wellbeing),
    (r"(thank you|thanks|appreciate it|grateful)", gratitude),
    (
        concat!(
            r"(computer|technology|internet|software|hardware|programming|code|ai|",
            r"artificial intelligence)"
        ),
        technology,
    ),
    (
        r"(science|scientific|physics|chemistry|biology|astronomy|space|planet|star|galaxy)",
        science,
    ),
    (
        r"(history|historical|ancient|medieval|century|war|civilization|empire|kingdom)",
        history,
    ),
];

pub fn generic_replies(prompt: &str) -> [String; 5] {
    [
        format!(
            "Regarding {}, there are several key points to consider. First, context is essential \
             for a complete understanding. Second, this topic has evolved significantly over time \
             as new research has emerged.",
            prompt
        ),
        format!(
            "{} is a fascinating subject with multiple dimensions. Experts in the field have \
             various perspectives, ranging from traditional interpretations to more contemporary \
             analyses based on recent findings.",
            prompt
        ),
        format!(
            "When examining {}, it's worth noting the interconnected factors that influence this \
             topic. Recent developments have added new layers of understanding that challenge \
             some previously held assumptions.",
            prompt
        ),
        format!(
            "The topic of {} has been studied extensively across different disciplines. What \
             makes this particularly interesting is how different fields contribute unique \
             insights, creating a more comprehensive understanding.",
            prompt
        ),
        format!(
            "Analyzing {} requires considering both theoretical frameworks and practical \
             applications. The balance between these approaches helps develop a more nuanced \
             understanding of the subject matter.",
            prompt
        ),
    ]
}

impl TemplateResponder {
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .filter_map(|(pattern, reply)| match Regex::new(pattern) {
                Ok(regex) => Some((regex, *reply)),
                Err(e) => {
                    log::error!("Skipping invalid chat pattern {}: {}", pattern, e);
                    None
                }
            })
            .collect();
        Self { rules }
    }

    pub fn reply(&self, prompt: &str) -> String {
        let normalized = prompt.trim().to_lowercase();
        if let Some((_, reply)) = self.rules.iter().find(|(regex, _)| regex.is_match(&normalized)) {
            return reply(prompt);
        }

        generic_replies(prompt)
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for TemplateResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatResponder for TemplateResponder {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn respond(&self, prompt: &str) -> Result<String, ChatError> {
        Ok(self.reply(prompt))
    }
}
