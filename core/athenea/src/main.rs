mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::process;

use cli::render::{
    render_failure, render_gate, render_history, render_narrative, render_supremacy,
    render_transcription,
};
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::audit::{build, AuditError, AuditKind, AuditParams, AuditPayload, RequiredParam};
use common::error::Error;
use common::llm::ProviderType;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{AtheneaCommand, CodeInput};
use ports::inbound::UseCaseRunner;
use wiring::{wire_athenea, App};

const ACCESS_CODE_ENV: &str = "ATHENEA_ACCESS_CODE";

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let access_code = config.access_code.clone();
        let cmd = config_to_command(config)?;
        let command_name = cmd.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started", "cli", "lifecycle")
                .with_field("command", command_name),
        );

        let result = self
            .check_access(&cmd, access_code)
            .and_then(|_| self.dispatch(cmd));

        let code = result.as_ref().copied().unwrap_or_else(|e| e.exit_code());
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished", "cli", "lifecycle")
                .with_field("command", command_name)
                .with_field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, e.to_string(), "cli", "error"));
        }
        result
    }
}

impl Runner {
    /// config.json にアクセスコードのハッシュがあれば、監査・履歴の前にゲートを通す
    fn check_access(&self, cmd: &AtheneaCommand, access_code: Option<String>) -> Result<(), Error> {
        let Some(expected) = self.app.config.access_code_sha256.as_deref() else {
            return Ok(());
        };
        if !cmd.needs_access() {
            return Ok(());
        }
        let code = access_code.or_else(|| self.app.env_resolver.var(ACCESS_CODE_ENV));
        let outcome = self.app.access_use_case.require(code.as_deref(), expected)?;
        eprint!("{}", render_gate(&outcome));
        Ok(())
    }

    fn dispatch(&self, cmd: AtheneaCommand) -> Result<i32, Error> {
        match cmd {
            AtheneaCommand::Help => {
                print_help();
                Ok(0)
            }
            AtheneaCommand::ListProfiles => {
                let default = self
                    .app
                    .config
                    .default_provider
                    .clone()
                    .unwrap_or_else(|| ProviderType::Gemini.as_str().to_string());
                for name in self.app.config.profile_names() {
                    if name == default {
                        println!("{} (default)", name);
                    } else {
                        println!("{}", name);
                    }
                }
                Ok(0)
            }
            AtheneaCommand::Audit { target } => {
                self.run_and_print(AuditKind::Supremacy, AuditParams::target(target), None)
            }
            AtheneaCommand::Advanced { kind, target } => {
                let target = self.app.audit_use_case.advanced_target(target.as_deref())?;
                self.run_and_print(kind, AuditParams::target(target), None)
            }
            AtheneaCommand::Harmony { input } => {
                let code = self.read_code(&input)?;
                self.run_and_print(AuditKind::CodeHarmony, AuditParams::code(code), None)
            }
            AtheneaCommand::Transcribe { input, svg_out } => {
                let code = self.read_code(&input)?;
                self.run_and_print(
                    AuditKind::SynapticTranscription,
                    AuditParams::code(code),
                    svg_out,
                )
            }
            AtheneaCommand::History { index: None } => {
                print!("{}", render_history(self.app.audit_use_case.snapshot().history()));
                Ok(0)
            }
            AtheneaCommand::History { index: Some(i) } => {
                let entry = self.app.audit_use_case.history_entry(i)?;
                print!("{}", render_supremacy(&entry));
                Ok(0)
            }
            AtheneaCommand::Dossier { index, out } => {
                let (file_name, body) = self.app.audit_use_case.dossier(index.unwrap_or(0))?;
                let path = out.unwrap_or_else(|| PathBuf::from(file_name));
                self.app.fs.write(&path, &body)?;
                println!("Dossier written: {}", path.display());
                Ok(0)
            }
            AtheneaCommand::Prompt { kind, param } => {
                let params = match kind.required_param() {
                    RequiredParam::Target => AuditParams::target(param),
                    RequiredParam::Code => AuditParams::code(param),
                };
                let prompt = build(kind, &params).map_err(AuditError::from)?;
                println!("{}", prompt);
                Ok(0)
            }
        }
    }

    fn read_code(&self, input: &CodeInput) -> Result<String, Error> {
        match input {
            CodeInput::Stdin => Ok(std::io::read_to_string(std::io::stdin())?),
            CodeInput::File(path) => self.app.fs.read_to_string(path),
        }
    }

    fn run_and_print(
        &self,
        kind: AuditKind,
        params: AuditParams,
        svg_out: Option<PathBuf>,
    ) -> Result<i32, Error> {
        let payload = match self.app.audit_use_case.run_audit(kind, &params) {
            Ok(p) => p,
            Err(e) => {
                if matches!(e, AuditError::Transport(_) | AuditError::Parse(_)) {
                    print!("{}", render_failure(kind));
                }
                return Err(e.into());
            }
        };
        match payload {
            AuditPayload::Supremacy(r) => print!("{}", render_supremacy(&r)),
            AuditPayload::Narrative(n) => print!("{}", render_narrative(kind, &n)),
            AuditPayload::Transcription(t) => {
                print!("{}", render_transcription(&t));
                match svg_out {
                    Some(path) => {
                        self.app.fs.write(&path, &t.svg_markup)?;
                        println!("SVG written: {}", path.display());
                    }
                    None => println!("{}", t.svg_markup),
                }
            }
        }
        Ok(0)
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("athenea: {}", e);
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
    let app = wire_athenea(&config)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: athenea [options] <command> [args...]");
}

fn print_help() {
    println!("Usage: athenea [options] <command> [args...]");
    println!("Commands:");
    println!("  audit <target>                 Run the supremacy audit (CTS, HRL, PENSUM, SÓNICA) and record it in history");
    println!("  advanced <analysis> [target]   faith | fingerprint | failure | comparison. Target defaults to the latest audit");
    println!("  harmony [file|-]               Code optimization report for a code fragment (stdin when omitted)");
    println!("  transcribe [file|-]            Synaptic transcription of a code fragment into an SVG mockup");
    println!("  history [index]                List recorded audits (0 = most recent) or show one in detail");
    println!("  dossier [index]                Write an audit from history as a text dossier (default: most recent)");
    println!("  prompt <kind> <param...>       Print the prompt that would be sent, without sending it");
    println!("Options:");
    println!("  -h, --help                     Show this help message");
    println!("  -L, --list-profiles            List currently available provider profiles (from config.json + built-ins)");
    println!("  -v, --verbose                  Emit logs to stderr as well as the log file");
    println!("  -p, --profile <profile>        Specify LLM profile (gemini, echo, ...). Default: config.json default, or gemini");
    println!("  -m, --model <model>            Specify model name. Default: profile default");
    println!("  --access-code <code>           Access code for the startup gate (when config.json sets access_code_sha256)");
    println!("  --svg-out <file>               transcribe: write the SVG to a file instead of stdout");
    println!("  -o, --out <file>               dossier: output file (default: DOSSIER_AAS_<target>.txt)");
    println!("  --generate <shell>             Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  ATHENEA_HOME         Home directory. Config: $ATHENEA_HOME/config.json; history and logs live here too.");
    println!("                       If unset, $XDG_CONFIG_HOME/athenea (e.g. ~/.config/athenea) is used.");
    println!("  ATHENEA_ACCESS_CODE  Access code when --access-code is not given.");
    println!("  GEMINI_API_KEY       API key for the gemini profile (or the api_key_env of the profile).");
    println!();
    println!("Examples:");
    println!("  athenea audit example.com");
    println!("  athenea advanced faith");
    println!("  athenea --svg-out ui.svg transcribe ui.html");
    println!("  athenea -p echo prompt supremacy example.com");
}
