#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddWord,
    ListWords,
    Practice,
    ListLearned,
    ListGlobal,
    ListGlobalByCategory,
    CopyGlobal,
    RemoveWord,
    ClearWords,
    Translate,
    SwitchUser,
    Exit,
}

impl MenuAction {
    /// Menu order; an action's number is its position plus one
    pub const ALL: [MenuAction; 12] = [
        MenuAction::AddWord,
        MenuAction::ListWords,
        MenuAction::Practice,
        MenuAction::ListLearned,
        MenuAction::ListGlobal,
        MenuAction::ListGlobalByCategory,
        MenuAction::CopyGlobal,
        MenuAction::RemoveWord,
        MenuAction::ClearWords,
        MenuAction::Translate,
        MenuAction::SwitchUser,
        MenuAction::Exit,
    ];

    pub fn parse(choice: &str) -> Option<Self> {
        let number: usize = choice.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddWord => "Add word",
            MenuAction::ListWords => "List my words",
            MenuAction::Practice => "Practice",
            MenuAction::ListLearned => "List learned words",
            MenuAction::ListGlobal => "List global words",
            MenuAction::ListGlobalByCategory => "List global words by category",
            MenuAction::CopyGlobal => "Copy global words to my list",
            MenuAction::RemoveWord => "Remove a word",
            MenuAction::ClearWords => "Clear my words",
            MenuAction::Translate => "Translate a term",
            MenuAction::SwitchUser => "Switch user",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Full menu text with a header for the current user
pub fn render(user: &str, learned: usize, total: usize) -> String {
    let mut text = format!("---- Main menu ({user}, {learned}/{total} learned) ----\n");
    for (i, action) in MenuAction::ALL.iter().enumerate() {
        text.push_str(&format!("{:>2}. {}\n", i + 1, action.label()));
    }
    text
}
