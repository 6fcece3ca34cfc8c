//! Prompt construction for the summary request.

use tally_core::Todo;

/// Fixed system role for the completion call.
pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant that summarizes \
to-do lists into concise, actionable summaries with priority insights.";

/// Render todos as one bulleted line each, in the order given. The pipeline
/// never re-sorts; the same text goes into the prompt and the chat message.
pub fn render_task_list(todos: &[Todo]) -> String {
    todos
        .iter()
        .map(|todo| format!("- {}", todo.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap the task list in the fixed instruction template.
pub fn build_user_prompt(task_list: &str) -> String {
    format!(
        "Please summarize the following to-do list in a few sentences. \
         Identify main themes, priorities, and group similar tasks. \
         Return a concise, professional summary suitable for sharing with \
         colleagues:\n\n{task_list}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::TodoId;

    fn todo(content: &str) -> Todo {
        Todo {
            id: TodoId::new(),
            content: content.into(),
            completed: false,
            created_at: String::new(),
        }
    }

    #[test]
    fn task_list_preserves_order_and_content() {
        let todos = vec![todo("Write report"), todo("Call client"), todo("Buy milk")];
        let list = render_task_list(&todos);
        assert_eq!(list, "- Write report\n- Call client\n- Buy milk");
    }

    #[test]
    fn single_todo_has_no_trailing_newline() {
        let list = render_task_list(&[todo("only one")]);
        assert_eq!(list, "- only one");
    }

    #[test]
    fn user_prompt_ends_with_task_list() {
        let prompt = build_user_prompt("- a\n- b");
        assert!(prompt.ends_with("\n\n- a\n- b"));
        assert!(prompt.starts_with("Please summarize"));
    }

    #[test]
    fn system_prompt_mentions_todo_lists() {
        assert!(SYSTEM_PROMPT.contains("to-do lists"));
    }
}
