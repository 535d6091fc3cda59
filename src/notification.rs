use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn info(title: &str, body: &str) -> Self {
        Self {
            severity: Severity::Info,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    pub fn error(title: &str, body: &str) -> Self {
        Self {
            severity: Severity::Error,
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

/// Toasts currently on screen, newest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationQueue {
    limit: usize,
    next_id: u32,
    toasts: Vec<Toast>,
}

impl NotificationQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            next_id: 1,
            toasts: Vec::new(),
        }
    }

    /// Shows `notification`, evicting the oldest toasts past the limit.
    pub fn push(&mut self, notification: Notification) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.insert(0, Toast { id, notification });
        self.toasts.truncate(self.limit);
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum QueueAction {
    Push(Notification),
    Dismiss(u32),
}

impl Reducible for NotificationQueue {
    type Action = QueueAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            QueueAction::Push(notification) => {
                next.push(notification);
            }
            QueueAction::Dismiss(id) => next.dismiss(id),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_replaces_oldest_at_limit() {
        let mut queue = NotificationQueue::new(1);
        queue.push(Notification::error("first", "a"));
        let second = queue.push(Notification::info("second", "b"));

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
        assert_eq!(queue.toasts()[0].notification.title, "second");
    }

    #[test]
    fn ids_keep_increasing_after_dismissal() {
        let mut queue = NotificationQueue::new(3);
        let a = queue.push(Notification::info("a", ""));
        queue.dismiss(a);
        let b = queue.push(Notification::info("b", ""));
        assert!(b > a);
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut queue = NotificationQueue::new(3);
        let a = queue.push(Notification::info("a", ""));
        let b = queue.push(Notification::info("b", ""));
        queue.dismiss(a);
        queue.dismiss(999);

        let ids: Vec<u32> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![b]);
    }

    #[test]
    fn reducer_pushes_then_dismisses() {
        let queue = Rc::new(NotificationQueue::new(1));
        let queue = queue.reduce(QueueAction::Push(Notification::info("a", "b")));
        let id = queue.toasts()[0].id;
        let queue = queue.reduce(QueueAction::Dismiss(id));
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn zero_limit_still_shows_one() {
        let mut queue = NotificationQueue::new(0);
        queue.push(Notification::info("a", ""));
        assert_eq!(queue.toasts().len(), 1);
    }
}
