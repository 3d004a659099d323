//! 通知を stderr に出す実装（toast 相当）

use crate::ports::outbound::Notifier;

/// stderr へ 1 行ずつ通知を出す
#[derive(Debug, Clone, Default)]
pub struct StderrNotifier;

impl StderrNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for StderrNotifier {
    fn success(&self, message: &str) {
        eprintln!("[success] {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("[error] {}", message);
    }
}
