//! Dashboard view model
//!
//! Everything the dashboard shows, already resolved to display text in the
//! active language. Built fresh on every call, so a language change is
//! reflected immediately.

use crate::directory::Directory;
use pashu_i18n::{I18n, Language};
use pashu_recognition::RecognitionResult;
use std::fmt;
use std::str::FromStr;

/// Dashboard tabs. Every dashboard entry starts on `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashboardTab {
    #[default]
    Home,
    Vet,
    Schemes,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [DashboardTab::Home, DashboardTab::Vet, DashboardTab::Schemes];

    /// Locale key of the tab label; doubles as the tab id.
    pub fn key(&self) -> &'static str {
        match self {
            DashboardTab::Home => "home",
            DashboardTab::Vet => "vet",
            DashboardTab::Schemes => "schemes",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DashboardTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        DashboardTab::ALL
            .into_iter()
            .find(|tab| tab.key() == s)
            .ok_or_else(|| format!("unknown tab: {}", s))
    }
}

/// Buttons in the "quick actions" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    ScanNewBreed,
    ViewSchemes,
    FindVet,
}

impl QuickAction {
    pub fn key(&self) -> &'static str {
        match self {
            QuickAction::ScanNewBreed => "scanNewBreed",
            QuickAction::ViewSchemes => "viewSchemes",
            QuickAction::FindVet => "findVet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifiedBreed {
    pub title: String,
    pub breed: String,
    pub description: Option<String>,
    /// e.g. `"92% Confidence"`
    pub confidence: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

/// The "about this breed" card: details once a breed is known, otherwise a
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AboutBreed {
    Placeholder(String),
    Details {
        characteristics: Section,
        care: Section,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePanel {
    pub last_identification: Option<IdentifiedBreed>,
    pub quick_actions_title: String,
    pub quick_actions_description: String,
    pub quick_actions: Vec<(QuickAction, String)>,
    pub about_title: String,
    pub about: AboutBreed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VetCard {
    pub name: String,
    pub specialization: String,
    pub address: String,
    pub phone: String,
    pub emergency_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeCard {
    pub title: String,
    pub description: String,
    pub benefits_label: String,
    pub benefits: String,
    pub website: String,
    pub learn_more: String,
    pub relevant_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub app_name: String,
    pub logout_label: String,
    pub active_tab: DashboardTab,
    pub tabs: Vec<(DashboardTab, String)>,
    pub home: HomePanel,
    pub vets_title: String,
    pub vets_description: String,
    pub vets: Vec<VetCard>,
    pub schemes_title: String,
    pub schemes_description: String,
    pub schemes: Vec<SchemeCard>,
}

impl DashboardView {
    pub fn build(
        i18n: &I18n,
        language: Language,
        payload: Option<&RecognitionResult>,
        active_tab: DashboardTab,
    ) -> Self {
        let t = |key: &str| i18n.t(key, language);

        let last_identification = payload.map(|result| IdentifiedBreed {
            title: t("lastIdentification"),
            breed: result.breed.clone(),
            description: result.description.clone(),
            confidence: format!("{}% {}", result.confidence.value(), t("confidence")),
        });

        let mut actions = vec![QuickAction::ScanNewBreed];
        if payload.is_some() {
            actions.extend([QuickAction::ViewSchemes, QuickAction::FindVet]);
        }

        let about = match payload {
            Some(_) => AboutBreed::Details {
                characteristics: Section {
                    title: t("characteristics"),
                    body: t("characteristicsPlaceholder"),
                },
                care: Section {
                    title: t("careRequirements"),
                    body: t("careRequirementsPlaceholder"),
                },
            },
            None => AboutBreed::Placeholder(t("scanBreedToViewInfo")),
        };

        let vets = Directory
            .vets()
            .iter()
            .map(|vet| VetCard {
                name: vet.name.to_string(),
                specialization: vet.specialization.to_string(),
                address: vet.address.to_string(),
                phone: vet.phone.to_string(),
                emergency_label: vet.emergency.then(|| t("emergency")),
            })
            .collect();

        let schemes = Directory
            .schemes()
            .iter()
            .map(|scheme| SchemeCard {
                title: t(&scheme.title_key()),
                description: t(&scheme.description_key()),
                benefits_label: t("benefits"),
                benefits: t(&scheme.benefits_key()),
                website: scheme.website.to_string(),
                learn_more: t("learnMore"),
                relevant_label: (scheme.breed_relevant && payload.is_some())
                    .then(|| t("relevantToYourBreed")),
            })
            .collect();

        Self {
            app_name: t("appName"),
            logout_label: t("logout"),
            active_tab,
            tabs: DashboardTab::ALL.into_iter().map(|tab| (tab, t(tab.key()))).collect(),
            home: HomePanel {
                last_identification,
                quick_actions_title: t("quickActions"),
                quick_actions_description: t("quickActionsDesc"),
                quick_actions: actions.into_iter().map(|a| (a, t(a.key()))).collect(),
                about_title: t("aboutBreed"),
                about,
            },
            vets_title: t("nearbyVets"),
            vets_description: t("nearbyVetsDesc"),
            vets,
            schemes_title: t("governmentSchemes"),
            schemes_description: t("governmentSchemesDesc"),
            schemes,
        }
    }
}
