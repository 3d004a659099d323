mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod view;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::{self, Write};
use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::domain::EntryId;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::command::FieldInputs;
use domain::{JournalCommand, Route};
use ports::inbound::UseCaseRunner;
use usecase::list::{DeleteOutcome, EditOutcome};
use usecase::shell::{Screen, Shell};
use usecase::SubmitOutcome;
use wiring::{wire_journal, App};

/// 失敗を通知済みで終わったときの終了コード
const EXIT_ACTION_FAILED: i32 = 1;

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config)?;
        let command_name = cmd.name();
        let _ = self.app.log.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let stdout = io::stdout();
        let result = self.execute(cmd, &mut stdout.lock());

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.log.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.log.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

impl Runner {
    /// シェル上でユーザー操作を行い、最後に表示中の画面を描画する
    fn execute(&self, cmd: JournalCommand, out: &mut dyn Write) -> Result<i32, Error> {
        if cmd == JournalCommand::Help {
            print_help(out)?;
            return Ok(0);
        }

        let mut shell = self.app.shell();
        let code = match cmd {
            JournalCommand::Help => 0,
            JournalCommand::List => {
                shell.mount(Route::List);
                0
            }
            JournalCommand::View { id } => {
                if mount_list(&mut shell)?.view(&id).is_none() {
                    return Err(not_listed(&id));
                }
                0
            }
            JournalCommand::Delete { id } => match mount_list(&mut shell)?.delete(&id) {
                DeleteOutcome::NotListed => return Err(not_listed(&id)),
                DeleteOutcome::Failed => EXIT_ACTION_FAILED,
                DeleteOutcome::Declined | DeleteOutcome::Deleted | DeleteOutcome::Ignored => 0,
            },
            JournalCommand::Edit { id, inputs } => match mount_list(&mut shell)?.edit(&id) {
                EditOutcome::NotListed => return Err(not_listed(&id)),
                EditOutcome::Declined => 0,
                EditOutcome::Failed => EXIT_ACTION_FAILED,
                EditOutcome::Transferred => {
                    shell.follow();
                    drive_form(&mut shell, &inputs, true)?
                }
            },
            JournalCommand::Add { inputs } => {
                shell.mount(Route::AddEntry);
                drive_form(&mut shell, &inputs, true)?
            }
            JournalCommand::Open {
                path,
                inputs,
                submit,
            } => {
                shell.open(&path)?;
                let submit = submit || !inputs.is_empty();
                drive_form(&mut shell, &inputs, submit)?
            }
        };

        writeln!(out, "{}", view::render(shell.screen()))?;
        Ok(code)
    }
}

fn not_listed(id: &EntryId) -> Error {
    Error::invalid_argument(format!("No entry with id {} in the list", id))
}

fn mount_list(shell: &mut Shell) -> Result<&mut usecase::list::ListController, Error> {
    match shell.mount(Route::List) {
        Screen::List(c) => Ok(c),
        _ => Err(Error::system("list screen was not mounted")),
    }
}

/// フォーム画面に入力し、必要なら送信する。送信後は遷移を辿る
fn drive_form(shell: &mut Shell, inputs: &FieldInputs, submit: bool) -> Result<i32, Error> {
    let outcome = match shell.screen_mut() {
        Some(Screen::Create(c)) => {
            for (field, value) in inputs {
                c.set_field(*field, value.clone());
            }
            if !submit {
                return Ok(0);
            }
            c.submit()?
        }
        Some(Screen::Edit(c)) => {
            // 読み込めなかった場合は何も表示せずに終わる
            if !c.is_ready() {
                return Ok(EXIT_ACTION_FAILED);
            }
            for (field, value) in inputs {
                c.set_field(*field, value.clone())?;
            }
            if !submit {
                return Ok(0);
            }
            c.submit()?
        }
        _ => {
            if !inputs.is_empty() {
                return Err(Error::invalid_argument(
                    "Field values can only be given for /add-entry or /edit/:id",
                ));
            }
            return Ok(0);
        }
    };
    shell.follow();
    Ok(match outcome {
        SubmitOutcome::Saved => 0,
        _ => EXIT_ACTION_FAILED,
    })
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("journal: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_journal(&config)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: journal [options] [list|view|delete|edit|add|open] [args...]");
}

fn print_help(out: &mut dyn Write) -> io::Result<()> {
    let text = "\
Usage: journal [options] [command] [args...]

Commands:
  list                          Show all entries (default)
  view <id>                     Show the details of an entry
  delete <id>                   Delete an entry (asks for confirmation)
  edit <id> [fields]            Edit an entry (asks for confirmation, then submits)
  add <fields>                  Add a new entry
  open <path> [fields] [--submit]
                                Open /, /add-entry or /edit/:id directly

Fields:
  --title <title>               Title (required, max 140 characters on add)
  --location <location>         Location (required, max 140 characters on add)
  --date <YYYY-MM-DD>           Date (required)
  --description <description>   Description (required, max 140 characters on add)

Options:
  -h, --help                    Show this help message
  -y, --yes                     Answer yes to confirmation prompts
  --no-interactive              Do not prompt for confirmations (always declined)
  -v, --verbose                 Emit structured logs to stderr as well
  --base-url <url>              Base URL of the journal service
  --generate <shell>            Generate shell completion script (bash, zsh, fish)

Environment:
  JOURNAL_BASE_URL   Base URL of the journal service (default: http://localhost:5000)
  JOURNAL_HOME       Home directory. Config: $JOURNAL_HOME/config.json; log: $JOURNAL_HOME/log/journal.jsonl
                     If unset, $XDG_CONFIG_HOME/journal (e.g. ~/.config/journal) is used.

Examples:
  journal
  journal add --title \"Paris Trip\" --location Paris --date 2024-05-01 --description \"Great trip\"
  journal edit 3 --location Lyon
  journal delete 3 --yes
";
    out.write_all(text.as_bytes())
}
