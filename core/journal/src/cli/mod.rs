//! CLI 境界（引数解析と Config）

mod args;

#[allow(unused_imports)]
pub use args::{
    config_to_command, parse_args, parse_args_from, print_completion, Action, Config, ParseOutcome,
};
