//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, StdClock, StdEnvResolver, StdFileSystem, StderrLog, TeeLog};
use common::config::AtheneaConfig;
use common::domain::HomeDir;
use common::error::Error;
use common::llm::load_config;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log};

use crate::adapter::{
    ConsoleNarrator, FileHistoryStore, NoopInterruptChecker, PlatformSignatureProbe,
    ProcessorCadenceProbe, SigintChecker, StdLlmCompletion,
};
use crate::cli::Config;
use crate::ports::outbound::{Completion, GateProbe, InterruptChecker};
use crate::usecase::access::AccessUseCase;
use crate::usecase::app::{AuditDeps, AuditUseCase};

/// 配線で組み立てたアプリ（Runner が保持）
pub struct App {
    pub audit_use_case: AuditUseCase,
    pub access_use_case: AccessUseCase,
    pub fs: Arc<dyn FileSystem>,
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
    pub config: AtheneaConfig,
}

/// 配線: 環境変数からホームを解決して App を組み立てる
pub fn wire_athenea(config: &Config) -> Result<App, Error> {
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let home = env_resolver.resolve_home_dir()?;
    wire_with_home(config, env_resolver, home)
}

/// 配線: ホームを指定して App を組み立てる（テストでは一時ディレクトリを渡す）
pub fn wire_with_home(
    config: &Config,
    env_resolver: Arc<dyn EnvResolver>,
    home: HomeDir,
) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(
        Arc::clone(&fs),
        home.join("logs").join("athenea.jsonl"),
    ));
    let logger: Arc<dyn Log> = if config.verbose {
        Arc::new(TeeLog::new(vec![file_log, Arc::new(StderrLog)]))
    } else {
        file_log
    };

    let athenea_config = load_config(fs.as_ref(), &home.join("config.json"))?;
    let completion: Arc<dyn Completion> = Arc::new(StdLlmCompletion::new(
        athenea_config.clone(),
        config.profile.clone(),
        config.model.clone(),
    ));
    let history_store = Arc::new(FileHistoryStore::new(
        Arc::clone(&fs),
        home.join(athenea_config.history_file()),
        Arc::clone(&logger),
    ));
    let interrupt_checker: Arc<dyn InterruptChecker> = match SigintChecker::install() {
        Ok(c) => Arc::new(c),
        Err(_) => Arc::new(NoopInterruptChecker),
    };
    let clock: Arc<dyn Clock> = Arc::new(StdClock);

    let audit_use_case = AuditUseCase::load(AuditDeps {
        completion,
        history_store,
        narrator: Arc::new(ConsoleNarrator),
        interrupt_checker,
        clock,
        log: Arc::clone(&logger),
    })?;
    let probes: Vec<Arc<dyn GateProbe>> = vec![
        Arc::new(PlatformSignatureProbe),
        Arc::new(ProcessorCadenceProbe::default()),
    ];
    let access_use_case = AccessUseCase::new(probes, Arc::clone(&logger));

    Ok(App {
        audit_use_case,
        access_use_case,
        fs,
        env_resolver,
        logger,
        config: athenea_config,
    })
}
