//! Local keyword responder used when the workflow webhook is unreachable.

/// Map a message text to a canned reply. Pure and total: first matching
/// keyword wins, anything else gets the echo reply, so every input (including
/// the empty string) produces a non-empty answer.
pub fn simple_reply(message_text: &str) -> String {
    let text = message_text.to_lowercase();

    if text.contains("hello") || text.contains("hi") || text.contains("hey") {
        "👋 Hello! How can I help you today?".to_string()
    } else if text.contains("help") {
        "🤖 I'm a chatbot. You can ask me anything!\n\nAvailable commands:\n- Say \"hello\" to greet me\n- Say \"help\" for this message\n- Say \"bye\" to end conversation".to_string()
    } else if text.contains("bye") || text.contains("goodbye") {
        "👋 Goodbye! Have a great day!".to_string()
    } else if text.contains("thank") {
        "😊 You're welcome! Happy to help!".to_string()
    } else {
        format!(
            "I received your message: \"{message_text}\"\n\nI'm still learning! Try saying \"help\" for available commands."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_keywords_match_case_insensitively() {
        for input in ["hello", "Hi there", "HEY you"] {
            assert_eq!(simple_reply(input), "👋 Hello! How can I help you today?");
        }
    }

    #[test]
    fn greeting_takes_priority_over_other_keywords() {
        // "hello help" contains both triggers; the greeting branch wins.
        assert_eq!(
            simple_reply("hello help"),
            "👋 Hello! How can I help you today?"
        );
    }

    #[test]
    fn help_reply_lists_commands() {
        let reply = simple_reply("I need some help");
        assert!(reply.contains("Available commands"));
        assert!(reply.contains("\"hello\""));
        assert!(reply.contains("\"bye\""));
    }

    #[test]
    fn farewell_and_thanks() {
        assert_eq!(simple_reply("ok bye now"), "👋 Goodbye! Have a great day!");
        assert_eq!(
            simple_reply("Thanks a lot!"),
            "😊 You're welcome! Happy to help!"
        );
    }

    #[test]
    fn unknown_text_echoes_original_casing() {
        let reply = simple_reply("What Is The Weather");
        assert!(reply.contains("\"What Is The Weather\""));
        assert!(reply.contains("help"));
    }

    #[test]
    fn empty_input_falls_through_to_echo() {
        let reply = simple_reply("");
        assert!(!reply.is_empty());
        assert!(reply.contains("I received your message"));
    }

    #[test]
    fn deterministic_for_same_input() {
        assert_eq!(simple_reply("whatever"), simple_reply("whatever"));
    }

    #[test]
    fn total_over_arbitrary_inputs() {
        for input in ["", " ", "1234", "¿qué tal?", "\n\t", "no keywords at all"] {
            assert!(!simple_reply(input).is_empty());
        }
    }
}
