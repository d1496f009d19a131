/// A marketing journey. The two flows differ only in copy and in the
/// post-submit redirect target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    TalentFlow,
    PayFlow,
}

impl Flow {
    pub const ALL: [Flow; 2] = [Flow::TalentFlow, Flow::PayFlow];

    pub fn slug(self) -> &'static str {
        match self {
            Flow::TalentFlow => "talentflow",
            Flow::PayFlow => "payflow",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Flow> {
        match slug {
            "talentflow" => Some(Flow::TalentFlow),
            "payflow" => Some(Flow::PayFlow),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Flow::TalentFlow => "TalentFlow",
            Flow::PayFlow => "PayFlow",
        }
    }

    /// Card copy on the chooser page.
    pub fn tagline(self) -> &'static str {
        match self {
            Flow::TalentFlow => "Hire with confidence, aligned to your culture",
            Flow::PayFlow => "Take the pain out of payroll and invoices",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Flow::TalentFlow => "Enter your information to get started with TalentFlow",
            Flow::PayFlow => "Enter your information to get started with PayFlow",
        }
    }

    pub fn button_text(self) -> &'static str {
        match self {
            Flow::TalentFlow => "Continue to TalentFlow",
            Flow::PayFlow => "Continue to PayFlow",
        }
    }

    /// External destination visited after a successful submission.
    pub fn redirect_url(self) -> &'static str {
        match self {
            Flow::TalentFlow => "https://clickchain.ai/talentacquisition/talentflow",
            Flow::PayFlow => "https://clickchain.ai/dev/accounting/payflow",
        }
    }
}
