//! Shell module - runs one or more commands

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::environment::Environment;
use crate::modules::{
    error::{ModuleError, ValidationError},
    interface::{Module, ModuleOutput},
    params::{array_param, bool_param, string_param, ModuleParams},
};

/// Shell module - runs one or more commands
///
/// `command` takes a single command or a list run in order. Commands are
/// split with shell quoting rules and run directly unless `shell: true`
/// hands each one to `sh -c`. If `creates` names a path that already
/// exists nothing is run.
///
/// After running, publishes `stdout`, `stderr` and `rc` of the last
/// command. When `creates` skips the rule nothing is published.
pub struct ShellModule {
    config: Arc<Config>,
    stdout: String,
    stderr: String,
    rc: i32,
    ran: bool,
}

impl ShellModule {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            stdout: String::new(),
            stderr: String::new(),
            rc: 0,
            ran: false,
        }
    }

    pub fn create(config: Arc<Config>, _env: Arc<Environment>) -> Box<dyn Module> {
        Box::new(Self::new(config))
    }

    fn build_command(
        &self,
        command: &str,
        use_shell: bool,
        dir: &Path,
    ) -> Result<Command, ValidationError> {
        let mut cmd = if use_shell {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        } else {
            let argv = shell_words::split(command)?;
            let (program, args) = argv
                .split_first()
                .ok_or_else(|| ValidationError::invalid("command", command, "empty command"))?;
            let mut cmd = Command::new(program);
            cmd.args(args);
            cmd
        };
        cmd.current_dir(dir);
        Ok(cmd)
    }

    fn working_dir(&self, params: &ModuleParams) -> PathBuf {
        match string_param(params, "chdir") {
            dir if dir.is_empty() => self.config.working_directory.clone(),
            dir => self.config.resolve_path(&dir),
        }
    }
}

impl Module for ShellModule {
    fn check(&mut self, params: &ModuleParams) -> Result<(), ValidationError> {
        let commands = array_param(params, "command");
        if commands.is_empty() {
            return Err(ValidationError::missing("command"));
        }

        if bool_param(params, "shell").unwrap_or(false) {
            return Ok(());
        }

        for command in &commands {
            if shell_words::split(command)?.is_empty() {
                return Err(ValidationError::invalid("command", command, "empty command"));
            }
        }
        Ok(())
    }

    fn execute(&mut self, params: &ModuleParams) -> Result<bool, ModuleError> {
        let creates = string_param(params, "creates");
        if !creates.is_empty() && self.config.resolve_path(&creates).exists() {
            debug!(%creates, "path exists, skipping commands");
            return Ok(false);
        }

        let use_shell = bool_param(params, "shell").unwrap_or(false);
        let dir = self.working_dir(params);

        for command in array_param(params, "command") {
            debug!(%command, dir = %dir.display(), "running command");

            let output = self
                .build_command(&command, use_shell, &dir)?
                .output()
                .map_err(|e| ModuleError::io("spawn", &command, e))?;

            self.stdout = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
            self.stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            self.rc = output.status.code().unwrap_or(-1);
            self.ran = true;

            if !output.status.success() {
                return Err(ModuleError::CommandFailed {
                    command,
                    code: self.rc,
                    stderr: self.stderr.clone(),
                });
            }
        }

        Ok(true)
    }

    fn as_output(&self) -> Option<&dyn ModuleOutput> {
        if self.ran {
            Some(self)
        } else {
            None
        }
    }
}

impl ModuleOutput for ShellModule {
    fn outputs(&self) -> HashMap<String, String> {
        HashMap::from([
            ("stdout".to_string(), self.stdout.clone()),
            ("stderr".to_string(), self.stderr.clone()),
            ("rc".to_string(), self.rc.to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn module() -> ShellModule {
        ShellModule::new(Arc::new(Config::default()))
    }

    #[test]
    fn test_check_requires_command() {
        assert!(matches!(
            module().check(&ModuleParams::new()),
            Err(ValidationError::MissingRequiredArg { .. })
        ));

        let params = ModuleParams::from([("command".to_string(), json!(42))]);
        assert!(module().check(&params).is_err());
    }

    #[test]
    fn test_check_rejects_unbalanced_quotes() {
        let params = ModuleParams::from([("command".to_string(), json!("echo 'oops"))]);
        assert!(matches!(
            module().check(&params),
            Err(ValidationError::InvalidArgValue { .. })
        ));
    }

    #[test]
    fn test_check_accepts_list() {
        let params = ModuleParams::from([("command".to_string(), json!(["true", "echo hi"]))]);
        assert!(module().check(&params).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_captures_output() {
        let mut shell = module();
        let params = ModuleParams::from([("command".to_string(), json!("echo 'hello world'"))]);

        assert!(shell.check(&params).is_ok());
        assert!(shell.execute(&params).unwrap());

        let outputs = shell.as_output().unwrap().outputs();
        assert_eq!(outputs["stdout"], "hello world");
        assert_eq!(outputs["stderr"], "");
        assert_eq!(outputs["rc"], "0");
    }

    #[test]
    fn test_skipped_run_publishes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("done"), "").unwrap();

        let config = Config::default().with_working_directory(tmp.path());
        let mut shell = ShellModule::new(Arc::new(config));
        let params = ModuleParams::from([
            ("command".to_string(), json!("false")),
            ("creates".to_string(), json!("done")),
        ]);

        assert!(!shell.execute(&params).unwrap());
        assert!(shell.as_output().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_reports_failure() {
        let mut shell = module();
        let params = ModuleParams::from([
            ("command".to_string(), json!("exit 3")),
            ("shell".to_string(), json!(true)),
        ]);

        match shell.execute(&params) {
            Err(ModuleError::CommandFailed { code, .. }) => assert_eq!(code, 3),
            other => panic!("expected command failure, got {other:?}"),
        }
    }
}
