use crate::todo::{Filter, Priority};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Todo operations
    AddTodo,
    DeleteTodo(u64),
    ToggleComplete(u64),
    SetPriority(u64, Priority),
    ClearCompleted,

    // Edit mode
    StartEdit(u64),
    UpdateTodo(u64),
    CancelEdit,

    // View
    SetFilter(Filter),

    // Text input, routed to the new-item buffer or the edit draft
    InputChar(char),
    InputBackspace,

    None,
}

impl Action {
    /// Whether applying this action changes the persisted list.
    pub fn mutates_items(&self) -> bool {
        matches!(
            self,
            Action::AddTodo
                | Action::DeleteTodo(_)
                | Action::ToggleComplete(_)
                | Action::SetPriority(_, _)
                | Action::ClearCompleted
                | Action::UpdateTodo(_)
        )
    }
}
