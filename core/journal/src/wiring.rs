//! 配線: 標準アダプタでアプリを組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, HttpJournalResource, NoopLog, StderrLog, StdEnvResolver, TeeLog};
use common::config::{load_file_config, resolve_client_config};
use common::error::Error;
use common::ports::outbound::{EnvResolver, JournalResource, Log, LogLevel, LogRecord};

use crate::adapter::{
    AssumeYesConfirmation, CliConfirmation, NonInteractiveConfirmation, PendingNavigator,
    StderrNotifier,
};
use crate::cli::Config;
use crate::ports::outbound::{Confirmation, Notifier};
use crate::usecase::shell::Shell;
use crate::usecase::ControllerDeps;

/// 組み立て済みのアプリ（画面ごとにシェルを作る）
pub struct App {
    pub resource: Arc<dyn JournalResource>,
    pub confirmation: Arc<dyn Confirmation>,
    pub notifier: Arc<dyn Notifier>,
    pub log: Arc<dyn Log>,
}

impl App {
    /// 新しいナビゲーションシェル（遷移要求はこのシェル専用の PendingNavigator に溜まる）
    pub fn shell(&self) -> Shell {
        let navigator = Arc::new(PendingNavigator::new());
        let deps = ControllerDeps {
            resource: Arc::clone(&self.resource),
            confirmation: Arc::clone(&self.confirmation),
            notifier: Arc::clone(&self.notifier),
            navigator: navigator.clone(),
            log: Arc::clone(&self.log),
        };
        Shell::new(deps, navigator)
    }
}

fn wire_log(env: &dyn EnvResolver, verbose: bool) -> Arc<dyn Log> {
    let mut logs: Vec<Arc<dyn Log>> = Vec::new();
    if let Ok(home) = env.resolve_home_dir() {
        logs.push(Arc::new(FileJsonLog::new(home.log_path())));
    }
    if verbose {
        logs.push(Arc::new(StderrLog::new()));
    }
    if logs.is_empty() {
        Arc::new(NoopLog)
    } else {
        Arc::new(TeeLog::new(logs))
    }
}

fn wire_confirmation(config: &Config) -> Arc<dyn Confirmation> {
    if config.assume_yes {
        Arc::new(AssumeYesConfirmation)
    } else if config.non_interactive {
        Arc::new(NonInteractiveConfirmation)
    } else {
        Arc::new(CliConfirmation::new())
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_journal(config: &Config) -> Result<App, Error> {
    let env = StdEnvResolver;
    let log = wire_log(&env, config.verbose);

    let file_config = match env.resolve_home_dir() {
        Ok(home) => load_file_config(&home)?,
        Err(_) => None,
    };
    let client = resolve_client_config(config.base_url.as_ref(), &env, file_config.as_ref());
    let _ = log.log(
        &LogRecord::new(LogLevel::Debug, "client configured")
            .layer("wiring")
            .kind("config")
            .field("base_url", client.base_url.to_string())
            .field("timeout_secs", client.timeout.as_secs()),
    );

    let resource: Arc<dyn JournalResource> = Arc::new(
        HttpJournalResource::new(client.base_url, client.timeout)?.with_log(Arc::clone(&log)),
    );

    Ok(App {
        resource,
        confirmation: wire_confirmation(config),
        notifier: Arc::new(StderrNotifier::new()),
        log,
    })
}
