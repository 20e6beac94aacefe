//! Run command - interactive walk through the flow.

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use pashu_auth::{Credential, CredentialKind};
use pashu_core::{DashboardTab, Flow, FlowError, QuickAction, Screen};
use pashu_i18n::Language;
use pashu_recognition::ImageInput;

use crate::error::CliResult;
use crate::{create_spinner, render, warn};

/// Menu entries offered on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    GetStarted,
    ChooseLanguage,
    Language(Language),
    Continue,
    Login(CredentialKind),
    Image,
    Submit,
    Details,
    TryAgain,
    Tab(DashboardTab),
    Action(QuickAction),
    Back,
    Logout,
    Quit,
}

impl MenuItem {
    pub fn label(&self, flow: &Flow) -> String {
        match self {
            MenuItem::GetStarted => flow.t("getStarted"),
            MenuItem::ChooseLanguage => flow.t("selectLanguage"),
            MenuItem::Language(language) => language.native_name().to_string(),
            MenuItem::Continue => flow.t("continue"),
            MenuItem::Login(kind) => format!("{} {}", flow.t("loginWith"), flow.t(kind.field())),
            MenuItem::Image => flow.t("uploadImage"),
            MenuItem::Submit => flow.t("submitForAnalysis"),
            MenuItem::Details => flow.t("viewDetails"),
            MenuItem::TryAgain => flow.t("tryAgain"),
            MenuItem::Tab(tab) => flow.t(tab.key()),
            MenuItem::Action(action) => flow.t(action.key()),
            MenuItem::Back => flow.t("back"),
            MenuItem::Logout => flow.t("logout"),
            MenuItem::Quit => "Quit".to_string(),
        }
    }
}

/// What the current screen offers, in display order.
pub fn menu(flow: &Flow) -> Vec<MenuItem> {
    let mut items = match flow.screen() {
        Screen::Landing => vec![MenuItem::GetStarted, MenuItem::ChooseLanguage],

        Screen::LanguageSelection => {
            let mut items: Vec<_> = Language::ALL.into_iter().map(MenuItem::Language).collect();
            items.extend([MenuItem::Continue, MenuItem::Back]);
            items
        }

        Screen::Login => vec![
            MenuItem::Login(CredentialKind::Aadhaar),
            MenuItem::Login(CredentialKind::Phone),
            MenuItem::Back,
        ],

        Screen::Recognition => {
            let view = flow.recognition();
            let mut items = vec![MenuItem::Image];
            if view.result().is_some() {
                items.push(MenuItem::Details);
            } else if view.selected_image().is_some() {
                items.push(MenuItem::Submit);
            }
            if view.selected_image().is_some() {
                items.push(MenuItem::TryAgain);
            }
            items.extend([MenuItem::Back, MenuItem::Logout]);
            items
        }

        Screen::Dashboard => {
            let mut items: Vec<_> = DashboardTab::ALL
                .into_iter()
                .filter(|tab| *tab != flow.tab())
                .map(MenuItem::Tab)
                .collect();
            if let Some(view) = flow.dashboard() {
                items.extend(view.home.quick_actions.iter().map(|(action, _)| MenuItem::Action(*action)));
            }
            items.extend([MenuItem::Back, MenuItem::Logout]);
            items
        }
    };

    items.push(MenuItem::Quit);
    items
}

/// Drive the flow from terminal menus until the user quits.
pub async fn run(flow: &mut Flow) -> CliResult<()> {
    let theme = ColorfulTheme::default();

    loop {
        render::print_screen(flow);

        let items = menu(flow);
        let labels: Vec<String> = items.iter().map(|item| item.label(flow)).collect();
        let choice = Select::with_theme(&theme)
            .items(&labels)
            .default(0)
            .interact()?;

        match items[choice] {
            MenuItem::Quit => break,
            item => perform(flow, item, &theme).await?,
        }

        render::print_notices(flow);
    }

    Ok(())
}

async fn perform(flow: &mut Flow, item: MenuItem, theme: &ColorfulTheme) -> CliResult<()> {
    match item {
        MenuItem::GetStarted => {
            flow.get_started()?;
        }
        MenuItem::ChooseLanguage => {
            flow.choose_language()?;
        }
        MenuItem::Language(language) => flow.set_language(language),
        MenuItem::Continue => {
            flow.continue_to_login()?;
        }
        MenuItem::Login(kind) => {
            let prompt = match kind {
                CredentialKind::Aadhaar => flow.t("enterAadhaar"),
                CredentialKind::Phone => flow.t("enterPhone"),
            };
            let raw: String = Input::with_theme(theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;

            let spinner = create_spinner(&flow.t("loading"));
            let outcome = flow.login(Credential::from_input(kind, &raw)).await;
            spinner.finish_and_clear();

            match outcome {
                Ok(_) | Err(FlowError::Validation(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }
        MenuItem::Image => {
            let path: String = Input::with_theme(theme)
                .with_prompt(flow.t("uploadDesc"))
                .interact_text()?;

            match ImageInput::from_path(path.trim()).await {
                Ok(image) => flow.select_image(image)?,
                Err(e) => warn(&format!("{}: {}", path.trim(), e)),
            }
        }
        MenuItem::Submit => {
            let spinner = create_spinner(&flow.t("analyzing"));
            let outcome = flow.submit_image().await;
            spinner.finish_and_clear();

            match outcome {
                Ok(_) | Err(FlowError::NoImage) => {}
                Err(e) => return Err(e.into()),
            }
        }
        MenuItem::Details => {
            flow.view_details()?;
        }
        MenuItem::TryAgain => flow.try_again()?,
        MenuItem::Tab(tab) => flow.select_tab(tab)?,
        MenuItem::Action(action) => {
            flow.quick_action(action)?;
        }
        MenuItem::Back => {
            flow.navigate_back();
        }
        MenuItem::Logout => {
            flow.logout();
            println!("  {} {}", "→".cyan(), flow.t("logout"));
        }
        MenuItem::Quit => {}
    }

    Ok(())
}
