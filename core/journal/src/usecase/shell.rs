//! ナビゲーションシェル
//!
//! パスに応じてコントローラを 1 つだけマウントする。別の画面を開くと前の画面はアンマウントして捨てる。

use crate::adapter::PendingNavigator;
use crate::domain::Route;
use crate::usecase::create::CreateController;
use crate::usecase::edit::EditController;
use crate::usecase::list::ListController;
use crate::usecase::ControllerDeps;
use common::error::Error;
use common::ports::outbound::LogLevel;
use std::sync::Arc;

/// 遷移を辿る上限（コントローラが遷移を繰り返しても止まるように）
const MAX_FOLLOW: usize = 8;

/// マウント中の画面
pub enum Screen {
    List(ListController),
    Create(CreateController),
    Edit(EditController),
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(_) => f.write_str("Screen::List"),
            Self::Create(_) => f.write_str("Screen::Create"),
            Self::Edit(_) => f.write_str("Screen::Edit"),
        }
    }
}

impl Screen {
    fn unmount(&mut self) {
        match self {
            Self::List(c) => c.unmount(),
            Self::Create(c) => c.unmount(),
            Self::Edit(c) => c.unmount(),
        }
    }
}

/// ナビゲーションシェル
pub struct Shell {
    deps: ControllerDeps,
    navigator: Arc<PendingNavigator>,
    route: Option<Route>,
    screen: Option<Screen>,
}

impl Shell {
    /// deps.navigator には navigator と同じ PendingNavigator を渡しておくこと
    pub fn new(deps: ControllerDeps, navigator: Arc<PendingNavigator>) -> Self {
        Self {
            deps,
            navigator,
            route: None,
            screen: None,
        }
    }

    /// パスを開く（不明なパスなら Err、画面は変えない）
    pub fn open(&mut self, path: &str) -> Result<&mut Screen, Error> {
        let route = Route::parse(path)?;
        Ok(self.mount(route))
    }

    /// ルートの画面をマウントして起動する
    pub fn mount(&mut self, route: Route) -> &mut Screen {
        if let Some(old) = self.screen.as_mut() {
            old.unmount();
        }
        self.deps.log_event(LogLevel::Info, "navigation", format!("mount {}", route));
        let screen = match &route {
            Route::List => {
                let mut c = ListController::new(self.deps.clone());
                c.activate();
                Screen::List(c)
            }
            Route::AddEntry => Screen::Create(CreateController::new(self.deps.clone())),
            Route::Edit(id) => {
                let mut c = EditController::new(self.deps.clone(), id.clone());
                c.activate();
                Screen::Edit(c)
            }
        };
        self.route = Some(route);
        self.screen.insert(screen)
    }

    /// 保留中の遷移があれば次の画面をマウントする。遷移したら true
    pub fn follow(&mut self) -> bool {
        let mut moved = false;
        for _ in 0..MAX_FOLLOW {
            match self.navigator.take() {
                Some(route) => {
                    self.mount(route);
                    moved = true;
                }
                None => break,
            }
        }
        moved
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn screen(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    pub fn screen_mut(&mut self) -> Option<&mut Screen> {
        self.screen.as_mut()
    }

    pub fn list_mut(&mut self) -> Option<&mut ListController> {
        match self.screen.as_mut() {
            Some(Screen::List(c)) => Some(c),
            _ => None,
        }
    }

    pub fn create_mut(&mut self) -> Option<&mut CreateController> {
        match self.screen.as_mut() {
            Some(Screen::Create(c)) => Some(c),
            _ => None,
        }
    }

    pub fn edit_mut(&mut self) -> Option<&mut EditController> {
        match self.screen.as_mut() {
            Some(Screen::Edit(c)) => Some(c),
            _ => None,
        }
    }
}
