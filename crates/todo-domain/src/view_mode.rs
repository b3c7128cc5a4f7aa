use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Active,
    Archived,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Active => ViewMode::Archived,
            ViewMode::Archived => ViewMode::Active,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Active => "Tasks",
            ViewMode::Archived => "Archive",
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = todo_core::TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ViewMode::Active),
            "archived" | "archive" => Ok(ViewMode::Archived),
            other => Err(todo_core::TodoError::validation(format!(
                "unknown view mode '{}', expected 'active' or 'archived'",
                other
            ))),
        }
    }
}
