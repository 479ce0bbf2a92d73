mod requests;
mod types;

pub use requests::CreateTodoRequest;
pub use types::{TodoItem, TodoUpdate};
