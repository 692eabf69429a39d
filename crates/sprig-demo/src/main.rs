use anyhow::Result;
use sprig_dom::{to_html, Attrs, Children, Listeners, NodeId};
use sprig_ui::widgets::TodoList;
use sprig_ui::{App, TreeRenderer, UiEvent};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut app = App::new(TreeRenderer::new());
    let body = app
        .dom()
        .borrow_mut()
        .build("body", Attrs::new(), Children::None, Listeners::new());
    let todo = app.mount(TodoList::new(), body)?;

    // Scripted session: type a task, add it, toggle it, then delete the
    // first seed task. Node ids change on every re-render, so each step
    // re-queries the tree before queueing its event.
    let field = text_field(&app, body);
    app.push_event(UiEvent::input(field, "Buy milk"));
    app.pump();

    let add = find_with_attr(&app, body, "button", "id", "add-btn");
    app.push_event(UiEvent::click(add));
    app.pump();

    let last_item = *app.dom().borrow().find_all(body, "li").last().unwrap();
    let checkbox = app.dom().borrow().find(last_item, "input").unwrap();
    app.push_event(UiEvent::toggle(checkbox, true));
    app.pump();

    let first_item = app.dom().borrow().find(body, "li").unwrap();
    let delete = app.dom().borrow().find(first_item, "button").unwrap();
    app.push_event(UiEvent::click(delete));
    app.pump();

    info!(tasks = todo.with(|list| list.tasks().len()), "session done");

    println!("\n{}", to_html(&app.dom().borrow(), body));
    let tasks = todo.with(|list| list.tasks().to_vec());
    println!("\n{}", serde_json::to_string_pretty(&tasks)?);

    Ok(())
}

fn text_field(app: &App<TreeRenderer>, root: NodeId) -> NodeId {
    find_with_attr(app, root, "input", "type", "text")
}

fn find_with_attr(
    app: &App<TreeRenderer>,
    root: NodeId,
    tag: &str,
    name: &str,
    value: &str,
) -> NodeId {
    let doc = app.dom().borrow();
    doc.find_all(root, tag)
        .into_iter()
        .find(|&id| doc.attr(id, name) == Some(value))
        .unwrap_or_else(|| panic!("no <{tag} {name}={value}> in tree"))
}
