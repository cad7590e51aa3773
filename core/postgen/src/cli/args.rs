use clap::builder::ArgAction;
use clap::value_parser;
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    pub provider: Option<ProviderName>,
    pub model: Option<ModelName>,
    /// --retries: 生成呼び出しの上限回数
    pub retries: Option<u32>,
    /// --temperature: 生成温度の上書き
    pub temperature: Option<f64>,
    /// --history: {role, content} の JSON 配列ファイル
    pub history: Option<PathBuf>,
    /// --log-file: JSONL ログの出力先（未指定ならログなし）
    pub log_file: Option<PathBuf>,
    /// --json: チャンクを流さず検証済みレスポンスを JSON で出力
    pub json: bool,
    pub topic_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            provider: None,
            model: None,
            retries: None,
            temperature: None,
            history: None,
            log_file: None,
            json: false,
            topic_args: Vec::new(),
        }
    }
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("postgen")
        .about("Generate validated social media post drafts from a topic")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("provider")
                .help("Specify LLM provider (groq, echo)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. llama-3.3-70b-versatile)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("retries")
                .long("retries")
                .value_name("n")
                .help("Maximum number of generation attempts")
                .value_parser(value_parser!(u32))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("temperature")
                .long("temperature")
                .value_name("t")
                .help("Sampling temperature override")
                .value_parser(value_parser!(f64))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("history")
                .long("history")
                .value_name("file")
                .help("JSON file with prior {role, content} messages")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("log-file")
                .long("log-file")
                .value_name("file")
                .help("Append structured JSONL logs to this file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Print the validated response as JSON instead of streaming chunks")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("topic")
                .index(1)
                .help("Topic words to generate posts for")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help");
    let provider = matches
        .get_one::<String>("provider")
        .map(|s| ProviderName::new(s.clone()));
    let model = matches
        .get_one::<String>("model")
        .map(|s| ModelName::new(s.clone()));
    let retries = matches.get_one::<u32>("retries").copied();
    let temperature = matches.get_one::<f64>("temperature").copied();
    let history = matches.get_one::<PathBuf>("history").cloned();
    let log_file = matches.get_one::<PathBuf>("log-file").cloned();
    let json = matches.get_flag("json");
    let topic_args: Vec<String> = matches
        .get_many::<String>("topic")
        .map(|i| i.cloned().collect())
        .unwrap_or_default();

    Config {
        help,
        provider,
        model,
        retries,
        temperature,
        history,
        log_file,
        json,
        topic_args,
    }
}

/// コマンドラインを解析する
pub fn parse_args() -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}
