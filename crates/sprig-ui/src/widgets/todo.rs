use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use sprig_dom::{Attrs, Child, Children, Document, Listeners, NodeId};
use tracing::debug;

use crate::component::{Component, Scope};

/// Identifier for one task, derived from its creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TaskId(u64);

/// One to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Task list component: ordered tasks plus the pending input buffer.
pub struct TodoList {
    tasks: Vec<Task>,
    draft: String,
    last_id: u64,
}

impl TodoList {
    /// Start with three example tasks and an empty input buffer
    pub fn new() -> Self {
        let mut list = Self {
            tasks: Vec::new(),
            draft: String::new(),
            last_id: 0,
        };
        for (text, completed) in [
            ("Do the homework", false),
            ("Finish the practice", true),
            ("Go home", false),
        ] {
            let id = list.next_task_id();
            list.tasks.push(Task {
                id,
                text: text.to_string(),
                completed,
            });
        }
        list
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Ids seed from wall-clock millis but always bump past the last one
    /// handed out, so additions within the same millisecond stay unique and
    /// monotonic.
    fn next_task_id(&mut self) -> TaskId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_id = now.max(self.last_id + 1);
        TaskId(self.last_id)
    }

    /// Store the raw input text. The live input value stays the source of
    /// truth for display, so this never asks for a re-render.
    pub fn on_input_change(&mut self, raw: &str) -> bool {
        self.draft = raw.to_string();
        false
    }

    /// Trim the buffer and append a pending task; empty-after-trim
    /// submissions change nothing
    pub fn on_add_submit(&mut self) -> bool {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return false;
        }
        let text = trimmed.to_string();
        let id = self.next_task_id();
        self.tasks.push(Task {
            id,
            text,
            completed: false,
        });
        self.draft.clear();
        debug!(?id, "task added");
        true
    }

    /// Flip the completed flag of the matching task; unknown ids leave the
    /// list untouched
    pub fn on_toggle(&mut self, id: TaskId) -> bool {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
        true
    }

    /// Remove the matching task; unknown ids leave the list untouched
    pub fn on_delete(&mut self, id: TaskId) -> bool {
        self.tasks.retain(|t| t.id != id);
        true
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TodoList {
    fn render(&self, dom: &mut Document, scope: &Scope<Self>) -> NodeId {
        let items: Vec<Child> = self
            .tasks
            .iter()
            .map(|task| {
                let id = task.id;
                let checkbox = dom.build(
                    "input",
                    Attrs::new().set("type", "checkbox").set("checked", task.completed),
                    Children::None,
                    Listeners::new().on(
                        "change",
                        scope.callback(move |list: &mut Self, _| list.on_toggle(id)),
                    ),
                );
                let label = dom.build(
                    "label",
                    Attrs::new(),
                    Children::from(task.text.as_str()),
                    Listeners::new(),
                );
                let delete = dom.build(
                    "button",
                    Attrs::new(),
                    Children::from("x"),
                    Listeners::new().on(
                        "click",
                        scope.callback(move |list: &mut Self, _| list.on_delete(id)),
                    ),
                );
                let class = if task.completed { "completed" } else { "" };
                Child::Node(dom.build(
                    "li",
                    Attrs::new().set("class", class),
                    Children::from(vec![
                        Child::Node(checkbox),
                        Child::Node(label),
                        Child::Node(delete),
                    ]),
                    Listeners::new(),
                ))
            })
            .collect();

        let heading = dom.build("h1", Attrs::new(), Children::from("TODO List"), Listeners::new());

        let field = dom.build(
            "input",
            Attrs::new()
                .set("id", "new-todo")
                .set("type", "text")
                .set("placeholder", "What needs doing?")
                .set("value", self.draft.as_str()),
            Children::None,
            Listeners::new().on(
                "input",
                scope.callback(|list: &mut Self, event| match event.value() {
                    Some(value) => list.on_input_change(value),
                    None => false,
                }),
            ),
        );
        let add = dom.build(
            "button",
            Attrs::new().set("id", "add-btn"),
            Children::from("+"),
            Listeners::new().on(
                "click",
                scope.callback(|list: &mut Self, _| list.on_add_submit()),
            ),
        );
        let add_row = dom.build(
            "div",
            Attrs::new().set("class", "add-todo"),
            Children::from(vec![Child::Node(field), Child::Node(add)]),
            Listeners::new(),
        );
        let list = dom.build(
            "ul",
            Attrs::new().set("id", "todos"),
            Children::from(items),
            Listeners::new(),
        );

        dom.build(
            "div",
            Attrs::new().set("class", "todo-list"),
            Children::from(vec![
                Child::Node(heading),
                Child::Node(add_row),
                Child::Node(list),
            ]),
            Listeners::new(),
        )
    }
}
