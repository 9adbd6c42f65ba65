use maud::{html, Markup};

/// Flash banner driven by the `msg` query parameter of a redirect target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notice {
    Deleted,
    DeleteFailed,
    LoadFailed,
}

impl Notice {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "deleted" => Some(Notice::Deleted),
            "delete_failed" => Some(Notice::DeleteFailed),
            "load_failed" => Some(Notice::LoadFailed),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Notice::Deleted => "deleted",
            Notice::DeleteFailed => "delete_failed",
            Notice::LoadFailed => "load_failed",
        }
    }

    fn text(&self) -> &'static str {
        match self {
            Notice::Deleted => "Item deleted successfully",
            Notice::DeleteFailed => "Failed to delete item",
            Notice::LoadFailed => "Failed to load items",
        }
    }

    fn is_error(&self) -> bool {
        !matches!(self, Notice::Deleted)
    }
}

pub fn notice_banner(notice: Notice) -> Markup {
    let class = if notice.is_error() {
        "notice error"
    } else {
        "notice success"
    };
    html! {
        div class=(class) { (notice.text()) }
    }
}
