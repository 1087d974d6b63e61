use crate::domain::{AtheneaCommand, CodeInput};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::audit::AuditKind;
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -L / --list-profiles: 現在有効なプロファイル一覧を表示
    pub list_profiles: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    /// --access-code: アクセスゲートのコード（未指定なら ATHENEA_ACCESS_CODE）
    pub access_code: Option<String>,
    /// --svg-out: transcribe の SVG を書き出すファイル
    pub svg_out: Option<PathBuf>,
    /// --out: dossier の出力先（未指定ならカレントに既定の名前で）
    pub out: Option<PathBuf>,
    /// サブコマンドの語と引数
    pub words: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("athenea")
        .about("ATHENEA audit client: strategic audits of a target through an LLM")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-profiles")
                .short('L')
                .long("list-profiles")
                .help("List currently available provider profiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit logs to stderr as well as the log file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify LLM profile (gemini, echo, or a name from config.json)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. gemini-2.5-flash)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("access-code")
                .long("access-code")
                .value_name("code")
                .help("Access code for the startup gate")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("svg-out")
                .long("svg-out")
                .value_name("file")
                .help("Write the transcription SVG to this file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("out")
                .short('o')
                .long("out")
                .value_name("file")
                .help("Dossier output file")
                .value_parser(value_parser!(PathBuf))
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
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .help("Command word then its arguments (audit, advanced, harmony, transcribe, history, dossier, prompt)")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        list_profiles: matches.get_flag("list-profiles"),
        verbose: matches.get_flag("verbose"),
        profile: matches
            .get_one::<String>("profile")
            .map(|s| ProviderName::new(s.clone())),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        access_code: matches.get_one::<String>("access-code").cloned(),
        svg_out: matches.get_one::<PathBuf>("svg-out").cloned(),
        out: matches.get_one::<PathBuf>("out").cloned(),
        words: matches
            .get_many::<String>("positional")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "athenea", &mut std::io::stdout());
}

fn parse_index(word: Option<&String>) -> Result<Option<usize>, Error> {
    word.map(|w| {
        w.parse::<usize>()
            .map_err(|_| Error::invalid_argument(format!("Invalid history index: '{}'", w)))
    })
    .transpose()
}

fn joined(rest: &[String]) -> String {
    rest.join(" ").trim().to_string()
}

/// Config を AtheneaCommand に変換する
pub fn config_to_command(config: Config) -> Result<AtheneaCommand, Error> {
    if config.help {
        return Ok(AtheneaCommand::Help);
    }
    if config.list_profiles {
        return Ok(AtheneaCommand::ListProfiles);
    }

    let Some((word, rest)) = config.words.split_first() else {
        return Err(Error::invalid_argument(
            "No command given. Try `athenea audit <target>` or `athenea --help`.",
        ));
    };

    match word.as_str() {
        "audit" => {
            let target = joined(rest);
            if target.is_empty() {
                return Err(Error::invalid_argument("audit requires a target"));
            }
            Ok(AtheneaCommand::Audit { target })
        }
        "advanced" => {
            let Some((name, target)) = rest.split_first() else {
                return Err(Error::invalid_argument(
                    "advanced requires an analysis: faith, fingerprint, failure or comparison",
                ));
            };
            let kind = AuditKind::from_name(name)
                .filter(|k| k.is_advanced())
                .ok_or_else(|| {
                    Error::invalid_argument(format!(
                        "Unknown advanced analysis: '{}'. Available: faith, fingerprint, failure, comparison",
                        name
                    ))
                })?;
            let target = Some(joined(target)).filter(|t| !t.is_empty());
            Ok(AtheneaCommand::Advanced { kind, target })
        }
        "harmony" => Ok(AtheneaCommand::Harmony {
            input: CodeInput::from_arg(rest.first().map(String::as_str)),
        }),
        "transcribe" => Ok(AtheneaCommand::Transcribe {
            input: CodeInput::from_arg(rest.first().map(String::as_str)),
            svg_out: config.svg_out,
        }),
        "history" => Ok(AtheneaCommand::History {
            index: parse_index(rest.first())?,
        }),
        "dossier" => Ok(AtheneaCommand::Dossier {
            index: parse_index(rest.first())?,
            out: config.out,
        }),
        "prompt" => {
            let Some((name, param)) = rest.split_first() else {
                return Err(Error::invalid_argument("prompt requires an audit kind"));
            };
            let kind = AuditKind::from_name(name).ok_or_else(|| {
                Error::invalid_argument(format!("Unknown audit kind: '{}'", name))
            })?;
            Ok(AtheneaCommand::Prompt {
                kind,
                param: param.join(" "),
            })
        }
        other => Err(Error::invalid_argument(format!(
            "Unknown command: '{}'",
            other
        ))),
    }
}
