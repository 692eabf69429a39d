mod todo;

pub use todo::{Task, TaskId, TodoList};
