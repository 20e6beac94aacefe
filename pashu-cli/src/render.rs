//! Text rendering of the current screen.

use colored::Colorize;
use pashu_core::dashboard::{AboutBreed, DashboardTab, DashboardView};
use pashu_core::{Flow, Notice, NoticeLevel, PendingKind, Screen};
use pashu_i18n::Language;

const FEATURES: [(&str, &str); 4] = [
    ("aiPowered", "aiPoweredDesc"),
    ("multiBreed", "multiBreedDesc"),
    ("instant", "instantDesc"),
    ("offline", "offlineDesc"),
];

/// The screen as plain lines; the first line is the title.
pub fn screen_lines(flow: &Flow) -> Vec<String> {
    let t = |key: &str| flow.t(key);

    match flow.screen() {
        Screen::Landing => {
            let mut lines = vec![t("appName"), t("appFullName"), t("tagline"), String::new()];
            lines.push(format!("{}:", t("features")));
            lines.extend(FEATURES.iter().map(|(title, desc)| format!("  • {}: {}", t(title), t(desc))));
            lines
        }

        Screen::LanguageSelection => {
            let mut lines = vec![t("chooseLanguage"), t("chooseLanguageDesc")];
            lines.extend(Language::ALL.iter().map(|language| {
                let marker = if *language == flow.language() { "●" } else { "○" };
                format!("  {} {} ({})", marker, language.native_name(), language.code())
            }));
            lines
        }

        Screen::Login => vec![
            t("loginTitle"),
            t("loginSubtitle"),
            format!("  {}: {}", t("aadhaarNumber"), t("enterAadhaar")),
            format!("  {}: {}", t("phoneNumber"), t("enterPhone")),
        ],

        Screen::Recognition => {
            let view = flow.recognition();
            let mut lines = vec![t("breedRecognitionTitle")];

            match view.selected_image() {
                Some(image) => {
                    lines.push(format!(
                        "{}: {} ({} bytes)",
                        t("selectedImage"),
                        image.name().unwrap_or("-"),
                        image.len()
                    ));
                    if view.result().is_none() {
                        lines.push(t("reviewImage"));
                    }
                }
                None => {
                    lines.push(t("uploadTitle"));
                    lines.push(t("uploadDesc"));
                }
            }

            if flow.pending() == Some(PendingKind::Recognition) {
                lines.push(t("analyzing"));
            }

            if let Some(result) = view.result() {
                lines.push(format!("{}:", t("result")));
                lines.push(format!("  {}: {}", t("breedIdentified"), result.breed));
                lines.push(format!("  {}: {}", t("confidence"), result.confidence));
                if let Some(description) = &result.description {
                    lines.push(format!("  {}", description));
                }
            }
            lines
        }

        Screen::Dashboard => match flow.dashboard() {
            Some(view) => dashboard_lines(&view),
            None => Vec::new(),
        },
    }
}

fn dashboard_lines(view: &DashboardView) -> Vec<String> {
    let tabs = view
        .tabs
        .iter()
        .map(|(tab, label)| {
            if *tab == view.active_tab {
                format!("[{}]", label)
            } else {
                label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let mut lines = vec![view.app_name.clone(), tabs];

    match view.active_tab {
        DashboardTab::Home => {
            let home = &view.home;
            if let Some(last) = &home.last_identification {
                lines.push(format!("{}: {} ({})", last.title, last.breed, last.confidence));
                if let Some(description) = &last.description {
                    lines.push(format!("  {}", description));
                }
            }

            lines.push(format!("{}: {}", home.quick_actions_title, home.quick_actions_description));
            lines.extend(home.quick_actions.iter().map(|(_, label)| format!("  • {}", label)));

            lines.push(format!("{}:", home.about_title));
            match &home.about {
                AboutBreed::Placeholder(text) => lines.push(format!("  {}", text)),
                AboutBreed::Details { characteristics, care } => {
                    for section in [characteristics, care] {
                        lines.push(format!("  {}: {}", section.title, section.body));
                    }
                }
            }
        }

        DashboardTab::Vet => {
            lines.push(format!("{}: {}", view.vets_title, view.vets_description));
            for vet in &view.vets {
                let emergency = vet
                    .emergency_label
                    .as_ref()
                    .map(|label| format!(" [{}]", label))
                    .unwrap_or_default();
                lines.push(format!("  {}{}", vet.name, emergency));
                lines.push(format!("    {} · {} · {}", vet.specialization, vet.address, vet.phone));
            }
        }

        DashboardTab::Schemes => {
            lines.push(format!("{}: {}", view.schemes_title, view.schemes_description));
            for scheme in &view.schemes {
                let relevant = scheme
                    .relevant_label
                    .as_ref()
                    .map(|label| format!(" ★ {}", label))
                    .unwrap_or_default();
                lines.push(format!("  {}{}", scheme.title, relevant));
                lines.push(format!("    {}", scheme.description));
                lines.push(format!("    {}: {}", scheme.benefits_label, scheme.benefits));
                lines.push(format!("    {}: {}", scheme.learn_more, scheme.website));
            }
        }
    }

    lines
}

pub fn print_screen(flow: &Flow) {
    let lines = screen_lines(flow);
    let Some((title, body)) = lines.split_first() else {
        return;
    };

    println!();
    println!(
        "  {} {}",
        format!("[{}]", flow.screen().id()).dimmed(),
        title.bright_white().bold()
    );
    for line in body {
        println!("  {}", line);
    }
    println!();
}

/// Print and clear the flow's queued notices.
pub fn print_notices(flow: &mut Flow) {
    for notice in flow.drain_notices() {
        print_notice(flow, &notice);
    }
}

fn print_notice(flow: &Flow, notice: &Notice) {
    let text = notice.text(flow.i18n(), flow.language());
    match notice.level {
        NoticeLevel::Success => println!("  {} {}", "✓".green().bold(), text.green()),
        NoticeLevel::Info => println!("  {} {}", "→".cyan(), text),
        NoticeLevel::Error => println!("  {} {}", "✗".red().bold(), text.red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pashu_config::AppConfig;
    use pashu_core::FlowBuilder;

    #[test]
    fn test_landing_lines() {
        let flow = FlowBuilder::new().with_config(AppConfig::instant()).build();
        let lines = screen_lines(&flow);

        assert_eq!(lines[0], "P.A.S.H.U");
        assert!(lines.iter().any(|l| l.contains("AI-Powered Recognition")));
    }

    #[test]
    fn test_language_marker_follows_selection() {
        let mut flow = FlowBuilder::new().with_config(AppConfig::instant()).build();
        flow.choose_language().unwrap();
        flow.select_language("hi").unwrap();

        let lines = screen_lines(&flow);
        assert!(lines.iter().any(|l| l.contains("● हिंदी (hi)")));
        assert!(lines.iter().any(|l| l.contains("○ English (en)")));
    }
}
