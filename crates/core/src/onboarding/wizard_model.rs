use serde::Serialize;

/// Steps of the first-run wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Welcome,
    Account,
    Transaction,
    Summary,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Welcome,
        WizardStep::Account,
        WizardStep::Transaction,
        WizardStep::Summary,
    ];

    pub fn index(&self) -> u8 {
        match self {
            WizardStep::Welcome => 0,
            WizardStep::Account => 1,
            WizardStep::Transaction => 2,
            WizardStep::Summary => 3,
        }
    }

    /// Step at `index`, clamped to the last step.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => WizardStep::Welcome,
            1 => WizardStep::Account,
            2 => WizardStep::Transaction,
            _ => WizardStep::Summary,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index().saturating_add(1))
    }

    pub fn previous(&self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            WizardStep::Welcome => "onboarding.steps.welcome",
            WizardStep::Account => "onboarding.steps.account",
            WizardStep::Transaction => "onboarding.steps.transaction",
            WizardStep::Summary => "onboarding.steps.summary",
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, WizardStep::Transaction)
    }
}

/// One entry of the stepper shown above the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDescriptor {
    pub id: u8,
    pub title_key: &'static str,
    pub completed: bool,
    pub optional: bool,
}

/// What the final step shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSummary {
    pub account_name: Option<String>,
    pub has_transaction: bool,
}
