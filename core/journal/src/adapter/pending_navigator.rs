//! 遷移要求を保持するだけの Navigator 実装
//!
//! コントローラが navigate したパスを Route にして保持し、シェルが take して次の画面をマウントする。

use crate::domain::Route;
use crate::ports::outbound::Navigator;
use common::error::Error;
use std::sync::Mutex;

/// 保留中の遷移先を 1 つ持つ Navigator
#[derive(Debug, Default)]
pub struct PendingNavigator {
    pending: Mutex<Option<Route>>,
}

impl PendingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保留中の遷移先を取り出す
    pub fn take(&self) -> Option<Route> {
        self.pending.lock().ok().and_then(|mut p| p.take())
    }
}

impl Navigator for PendingNavigator {
    fn navigate(&self, path: &str) -> Result<(), Error> {
        let route = Route::parse(path)?;
        let mut pending = self
            .pending
            .lock()
            .map_err(|_| Error::system("navigator lock poisoned"))?;
        *pending = Some(route);
        Ok(())
    }
}
