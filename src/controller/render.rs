use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::model::Task;

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created at")]
    created_at: String,
    #[tabled(rename = "Last update")]
    updated_at: String,
}

impl From<&Task> for Row {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            description: task.description.clone(),
            status: task.status.to_string(),
            created_at: task.created_at.to_string(),
            updated_at: task.updated_at.to_string(),
        }
    }
}

/// Renders tasks as a box-drawn grid with a header row.
pub fn table(tasks: &[Task]) -> String {
    let mut table = Table::new(tasks.iter().map(Row::from));
    table.with(Style::modern());
    table.to_string()
}
