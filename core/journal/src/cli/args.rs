use crate::domain::command::FieldInputs;
use crate::domain::{Field, JournalCommand};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{BaseUrl, EntryId};
use common::error::Error;

/// 解析済みのサブコマンド
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    List,
    View,
    Delete,
    Edit,
    Add,
    Open,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -y / --yes: 確認ダイアログを常に承認する
    pub assume_yes: bool,
    /// --no-interactive: 確認プロンプトを出さず常に拒否する（CI 等でブロックしない）
    pub non_interactive: bool,
    /// -v / --verbose: 構造化ログを stderr にも出す
    pub verbose: bool,
    /// --base-url: リモートリソースのベース URL（環境変数・config.json より優先）
    pub base_url: Option<BaseUrl>,
    pub action: Action,
    /// view / delete / edit の id、open のパス
    pub target: Option<String>,
    /// open: フィールド指定が無くても送信する
    pub submit: bool,
    pub title: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn field_args() -> Vec<clap::Arg> {
    Field::ALL
        .iter()
        .map(|f| {
            clap::Arg::new(f.name())
                .long(f.name())
                .value_name(f.name())
                .help(format!("{} field value", f.label()))
                .num_args(1)
        })
        .collect()
}

fn id_arg() -> clap::Arg {
    clap::Arg::new("target")
        .value_name("id")
        .help("Entry id")
        .required(true)
        .index(1)
}

pub(crate) fn build_clap_command() -> clap::Command {
    clap::Command::new("journal")
        .about("Manage travel journal entries on a remote journal service")
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Answer yes to confirmation prompts")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-interactive")
                .long("no-interactive")
                .help("Do not prompt for confirmations (always declined)")
                .global(true)
                .conflicts_with("yes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit structured logs to stderr as well")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("base-url")
                .long("base-url")
                .value_name("url")
                .help("Base URL of the journal service (default: http://localhost:5000)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .subcommand(clap::Command::new("list").about("Show all entries (/)"))
        .subcommand(
            clap::Command::new("view")
                .about("Show the details of an entry")
                .arg(id_arg()),
        )
        .subcommand(
            clap::Command::new("delete")
                .about("Delete an entry (asks for confirmation)")
                .arg(id_arg()),
        )
        .subcommand(
            clap::Command::new("edit")
                .about("Edit an entry (asks for confirmation, then submits the edit form)")
                .arg(id_arg())
                .args(field_args()),
        )
        .subcommand(
            clap::Command::new("add")
                .about("Add a new entry (/add-entry)")
                .args(field_args()),
        )
        .subcommand(
            clap::Command::new("open")
                .about("Open a path directly (/, /add-entry, /edit/:id)")
                .arg(
                    clap::Arg::new("target")
                        .value_name("path")
                        .help("Path to open")
                        .required(true)
                        .index(1),
                )
                .arg(
                    clap::Arg::new("submit")
                        .long("submit")
                        .help("Submit the form even without field values")
                        .action(ArgAction::SetTrue),
                )
                .args(field_args()),
        )
}

fn get_string(matches: &clap::ArgMatches, id: &str) -> Option<String> {
    matches
        .try_get_one::<String>(id)
        .ok()
        .flatten()
        .cloned()
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let mut config = Config {
        help: matches.get_flag("help"),
        assume_yes: matches.get_flag("yes"),
        non_interactive: matches.get_flag("no-interactive"),
        verbose: matches.get_flag("verbose"),
        base_url: get_string(matches, "base-url").map(BaseUrl::new),
        ..Default::default()
    };

    let (action, sub) = match matches.subcommand() {
        Some(("view", sub)) => (Action::View, Some(sub)),
        Some(("delete", sub)) => (Action::Delete, Some(sub)),
        Some(("edit", sub)) => (Action::Edit, Some(sub)),
        Some(("add", sub)) => (Action::Add, Some(sub)),
        Some(("open", sub)) => (Action::Open, Some(sub)),
        Some((_, sub)) => (Action::List, Some(sub)),
        None => (Action::List, None),
    };
    config.action = action;

    if let Some(sub) = sub {
        // グローバル引数はサブコマンド側にも入る
        config.help |= sub.get_flag("help");
        config.assume_yes |= sub.get_flag("yes");
        config.non_interactive |= sub.get_flag("no-interactive");
        config.verbose |= sub.get_flag("verbose");
        if let Some(url) = get_string(sub, "base-url") {
            config.base_url = Some(BaseUrl::new(url));
        }
        config.target = get_string(sub, "target");
        config.submit = sub.try_get_one::<bool>("submit").ok().flatten().copied().unwrap_or(false);
        config.title = get_string(sub, "title");
        config.location = get_string(sub, "location");
        config.date = get_string(sub, "date");
        config.description = get_string(sub, "description");
    }
    config
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_outcome(build_clap_command().try_get_matches())
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    parse_outcome(build_clap_command().try_get_matches_from(args))
}

fn parse_outcome(matches: Result<clap::ArgMatches, clap::Error>) -> Result<ParseOutcome, Error> {
    let matches = matches.map_err(|e| Error::invalid_argument(e.to_string()))?;
    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }
    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "journal", &mut std::io::stdout());
}

fn field_inputs(config: &Config) -> FieldInputs {
    [
        (Field::Title, &config.title),
        (Field::Location, &config.location),
        (Field::Date, &config.date),
        (Field::Description, &config.description),
    ]
    .into_iter()
    .filter_map(|(f, v)| v.clone().map(|v| (f, v)))
    .collect()
}

fn target_id(config: &Config) -> Result<EntryId, Error> {
    config
        .target
        .as_deref()
        .and_then(EntryId::from_segment)
        .ok_or_else(|| Error::invalid_argument("An entry id is required"))
}

/// Config を JournalCommand に変換する
pub fn config_to_command(config: Config) -> Result<JournalCommand, Error> {
    if config.help {
        return Ok(JournalCommand::Help);
    }
    let inputs = field_inputs(&config);
    let cmd = match config.action {
        Action::List => JournalCommand::List,
        Action::View => JournalCommand::View {
            id: target_id(&config)?,
        },
        Action::Delete => JournalCommand::Delete {
            id: target_id(&config)?,
        },
        Action::Edit => JournalCommand::Edit {
            id: target_id(&config)?,
            inputs,
        },
        Action::Add => JournalCommand::Add { inputs },
        Action::Open => JournalCommand::Open {
            path: config
                .target
                .clone()
                .ok_or_else(|| Error::invalid_argument("A path is required"))?,
            inputs,
            submit: config.submit,
        },
    };
    Ok(cmd)
}
