//! Pretty output formatting.

use todos_core::todo::TodoItem;

/// Format a to-do item for display.
pub fn format_todo(todo: &TodoItem) -> String {
    let check = if todo.done { "x" } else { " " };
    let mut output = format!(
        "[{}] {}\n  ID: {}\n  Due: {}",
        check, todo.name, todo.todo_id, todo.due_date
    );
    if let Some(url) = &todo.attachment_url {
        output.push_str(&format!("\n  Attachment: {}", url));
    }
    if let Some(created_at) = &todo.created_at {
        output.push_str(&format!("\n  Created: {}", created_at));
    }
    output
}

/// Format to-do items for display.
pub fn format_todos(todos: &[TodoItem]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }
    let mut output = format!("TODOS ({})\n", todos.len());
    output.push_str(&"-".repeat(40));
    for todo in todos {
        output.push_str(&format!("\n{}", format_todo(todo)));
        output.push('\n');
    }
    output
}
