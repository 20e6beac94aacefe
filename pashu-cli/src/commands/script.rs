//! Script command - drive the flow from a file of commands.
//!
//! One command per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! get-started
//! login aadhaar 1234 5678 9012
//! expect recognition
//! image ./cow.jpg
//! submit
//! details
//! show
//! ```

use colored::Colorize;
use pashu_auth::{Credential, CredentialKind};
use pashu_core::{Completion, DashboardTab, Flow, FlowError, QuickAction, Screen, Transition};
use pashu_log::debug;
use pashu_recognition::ImageInput;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{CliError, CliResult};
use crate::render;

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    GetStarted,
    ChooseLanguage,
    Language(String),
    Continue,
    Login(CredentialKind, String),
    Image(PathBuf),
    Submit,
    Details,
    TryAgain,
    Scan,
    Tab(DashboardTab),
    Action(QuickAction),
    Open(Screen),
    Back,
    Refresh,
    Logout,
    Show,
    Expect(Screen),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let needs_arg = |what: &str| {
            if rest.is_empty() {
                Err(format!("`{}` needs {}", word, what))
            } else {
                Ok(rest)
            }
        };

        let step = match word.to_lowercase().as_str() {
            "get-started" => Step::GetStarted,
            "choose-language" => Step::ChooseLanguage,
            "language" | "lang" => Step::Language(needs_arg("a language code")?.to_string()),
            "continue" => Step::Continue,
            "login" => {
                let rest = needs_arg("a kind and a number")?;
                let (kind, value) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| "`login` needs a kind and a number".to_string())?;
                let kind = match kind.to_lowercase().as_str() {
                    "aadhaar" => CredentialKind::Aadhaar,
                    "phone" => CredentialKind::Phone,
                    other => return Err(format!("unknown credential kind: {}", other)),
                };
                Step::Login(kind, value.trim().to_string())
            }
            "image" => Step::Image(PathBuf::from(needs_arg("a file path")?)),
            "submit" => Step::Submit,
            "details" => Step::Details,
            "try-again" => Step::TryAgain,
            "scan" => Step::Scan,
            "tab" => Step::Tab(needs_arg("a tab")?.parse()?),
            "action" => Step::Action(match needs_arg("an action")?.to_lowercase().as_str() {
                "scan" => QuickAction::ScanNewBreed,
                "schemes" => QuickAction::ViewSchemes,
                "vet" | "vets" => QuickAction::FindVet,
                other => return Err(format!("unknown quick action: {}", other)),
            }),
            "open" => Step::Open(needs_arg("a screen")?.parse()?),
            "back" => Step::Back,
            "refresh" => Step::Refresh,
            "logout" => Step::Logout,
            "show" => Step::Show,
            "expect" => Step::Expect(needs_arg("a screen")?.parse()?),
            other => return Err(format!("unknown command: {}", other)),
        };

        Ok(step)
    }
}

/// Parse a whole script, keeping 1-based line numbers.
pub fn parse(source: &str) -> CliResult<Vec<(usize, Step)>> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            text.parse()
                .map(|step| (line, step))
                .map_err(|message| CliError::Script { line, message })
        })
        .collect()
}

/// Run a script file, or stdin when `path` is `-`.
pub async fn run(flow: &mut Flow, path: &Path) -> CliResult<()> {
    let source = if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        source
    } else {
        tokio::fs::read_to_string(path).await?
    };

    for (line, step) in parse(&source)? {
        debug!(target: "pashu::cli", "Line {}: {:?}", line, step);
        apply(flow, &step)
            .await
            .map_err(|e| CliError::Script { line, message: e.to_string() })?;
        render::print_notices(flow);
    }

    Ok(())
}

async fn apply(flow: &mut Flow, step: &Step) -> CliResult<()> {
    match step {
        Step::GetStarted => report(flow.get_started()?),
        Step::ChooseLanguage => report(flow.choose_language()?),
        Step::Language(code) => {
            let language = flow.select_language(code)?;
            println!("  {} {}", "→".cyan(), language.native_name());
        }
        Step::Continue => report(flow.continue_to_login()?),
        Step::Login(kind, raw) => {
            let credential = Credential::from_input(*kind, raw);
            // a refused credential is reported as a notice, not a script error
            match flow.login(credential).await {
                Ok(completion) => report_completion(flow, completion),
                Err(FlowError::Validation(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Step::Image(path) => {
            let image = ImageInput::from_path(path).await?;
            flow.select_image(image)?;
        }
        Step::Submit => {
            match flow.submit_image().await {
                Ok(completion) => report_completion(flow, completion),
                Err(FlowError::NoImage) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Step::Details => report(flow.view_details()?),
        Step::TryAgain => flow.try_again()?,
        Step::Scan => report(flow.scan_new_breed()?),
        Step::Tab(tab) => flow.select_tab(*tab)?,
        Step::Action(action) => report(flow.quick_action(*action)?),
        Step::Open(screen) => report(flow.open(*screen)),
        Step::Back => report(flow.navigate_back()),
        Step::Refresh => report(flow.refresh()),
        Step::Logout => report(flow.logout()),
        Step::Show => render::print_screen(flow),
        Step::Expect(screen) => {
            if flow.screen() != *screen {
                return Err(CliError::Validation(format!(
                    "expected the {} screen, on {}",
                    screen,
                    flow.screen()
                )));
            }
        }
    }
    Ok(())
}

fn report(transition: Transition) {
    match transition {
        Transition::Entered(screen) => println!("  {} {}", "→".cyan(), screen.path()),
        Transition::Redirected { requested, to } => println!(
            "  {} {} {} {}",
            "↪".yellow(),
            requested.path().dimmed(),
            "→".yellow(),
            to.path()
        ),
        Transition::Stayed(screen) => println!("  {} {}", "·".dimmed(), screen.path()),
    }
}

fn report_completion(flow: &Flow, completion: Completion) {
    if completion == Completion::Applied {
        println!("  {} {}", "→".cyan(), flow.screen().path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!("get-started".parse::<Step>().unwrap(), Step::GetStarted);
        assert_eq!(
            "login aadhaar 1234 5678 9012".parse::<Step>().unwrap(),
            Step::Login(CredentialKind::Aadhaar, "1234 5678 9012".into())
        );
        assert_eq!("tab vet".parse::<Step>().unwrap(), Step::Tab(DashboardTab::Vet));
        assert_eq!("open /dashboard".parse::<Step>().unwrap(), Step::Open(Screen::Dashboard));
        assert_eq!("action schemes".parse::<Step>().unwrap(), Step::Action(QuickAction::ViewSchemes));
    }

    #[test]
    fn test_parse_errors() {
        assert!("login".parse::<Step>().is_err());
        assert!("login email a@b.c".parse::<Step>().is_err());
        assert!("fly".parse::<Step>().is_err());
        assert!("open nowhere".parse::<Step>().is_err());
    }

    #[test]
    fn test_parse_script_skips_comments() {
        let steps = parse("# login flow\n\nget-started\n  expect login\n").unwrap();
        assert_eq!(steps, vec![(3, Step::GetStarted), (4, Step::Expect(Screen::Login))]);

        match parse("get-started\nbogus") {
            Err(CliError::Script { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected script error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_apply_expect_mismatch() {
        let mut flow = Flow::default();
        assert!(apply(&mut flow, &Step::Expect(Screen::Landing)).await.is_ok());
        assert!(apply(&mut flow, &Step::Expect(Screen::Login)).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_step_rejects_overlong_and_mixed_input() {
        for (kind, raw) in [
            (CredentialKind::Aadhaar, "1234567890123"),
            (CredentialKind::Phone, "98765abc43210"),
        ] {
            let mut flow = Flow::default();
            flow.get_started().unwrap();

            apply(&mut flow, &Step::Login(kind, raw.into())).await.unwrap();

            assert_eq!(flow.screen(), Screen::Login);
            assert!(!flow.session().is_authenticated());
        }
    }
}
