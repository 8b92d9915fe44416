use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A transient toast shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }
}

/// Where the client should go next, with the state it carries there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Navigation<T> {
    pub redirect: String,
    pub state: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

impl<T> Navigation<T> {
    pub fn to(redirect: impl Into<String>, state: T) -> Self {
        Self {
            redirect: redirect.into(),
            state,
            notification: None,
        }
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }
}

/// A mutated record plus the toast announcing the change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Updated<T> {
    pub item: T,
    pub notification: Notification,
}
