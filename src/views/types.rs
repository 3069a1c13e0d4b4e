use crate::{detail::ViewCommand, gallery::Key};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct OpenRequest {
    pub id: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedView {
    pub view_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandRequest {
    OpenAt { index: usize },
    Close,
    Next,
    Prev,
    Select { index: usize },
    Key { key: String },
    ImageLoaded { index: usize },
    ImageFailed { index: usize },
    Retry,
}

impl From<CommandRequest> for ViewCommand {
    fn from(request: CommandRequest) -> Self {
        match request {
            CommandRequest::OpenAt { index } => ViewCommand::OpenAt { index },
            CommandRequest::Close => ViewCommand::Close,
            CommandRequest::Next => ViewCommand::Next,
            CommandRequest::Prev => ViewCommand::Prev,
            CommandRequest::Select { index } => ViewCommand::Select { index },
            CommandRequest::Key { key } => ViewCommand::Key {
                key: Key::from_name(&key),
            },
            CommandRequest::ImageLoaded { index } => ViewCommand::ImageLoaded { index },
            CommandRequest::ImageFailed { index } => ViewCommand::ImageFailed { index },
            CommandRequest::Retry => ViewCommand::Retry,
        }
    }
}
