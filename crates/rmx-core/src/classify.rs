//! Category classification
//!
//! Derives a coarse functional category for a task from its free-text
//! description. Classification is total and deterministic: keyword groups
//! are tested in a fixed priority order, the first group with a matching
//! keyword wins, and anything unmatched falls through to
//! [`Category::GeneralProjectTasks`].

use serde::{Deserialize, Serialize};

/// Functional grouping of tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Contracts, signatures, agreements
    #[serde(rename = "Contract Management")]
    ContractManagement,
    /// Payments, invoices, budgets
    #[serde(rename = "Financial Management")]
    FinancialManagement,
    /// Permits, drawings, documents
    #[serde(rename = "Documentation & Permits")]
    DocumentationPermits,
    /// Schedules, meetings, coordination
    #[serde(rename = "Project Coordination")]
    ProjectCoordination,
    /// Safety, quality, inspections
    #[serde(rename = "Quality & Safety")]
    QualitySafety,
    /// Submittals, RFIs, BIM, design
    #[serde(rename = "Design & Submittals")]
    DesignSubmittals,
    /// Procurement, buyout, subcontracts
    #[serde(rename = "Procurement & Buyout")]
    ProcurementBuyout,
    /// Reports and recurring administration
    #[serde(rename = "Reporting & Administration")]
    ReportingAdministration,
    /// Default when no keyword group matches
    #[serde(rename = "General Project Tasks")]
    GeneralProjectTasks,
}

impl Category {
    /// All categories, in classifier priority order (default last)
    pub const ALL: [Self; 9] = [
        Self::ContractManagement,
        Self::FinancialManagement,
        Self::DocumentationPermits,
        Self::ProjectCoordination,
        Self::QualitySafety,
        Self::DesignSubmittals,
        Self::ProcurementBuyout,
        Self::ReportingAdministration,
        Self::GeneralProjectTasks,
    ];

    /// Human-readable label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ContractManagement => "Contract Management",
            Self::FinancialManagement => "Financial Management",
            Self::DocumentationPermits => "Documentation & Permits",
            Self::ProjectCoordination => "Project Coordination",
            Self::QualitySafety => "Quality & Safety",
            Self::DesignSubmittals => "Design & Submittals",
            Self::ProcurementBuyout => "Procurement & Buyout",
            Self::ReportingAdministration => "Reporting & Administration",
            Self::GeneralProjectTasks => "General Project Tasks",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword groups in priority order; first matching group wins.
///
/// Matching is case-insensitive substring containment, not word-boundary.
const KEYWORD_GROUPS: &[(Category, &[&str])] = &[
    (Category::ContractManagement, &["contract", "sign", "agreement"]),
    (
        Category::FinancialManagement,
        &["payment", "invoice", "financial", "budget", "cost", "billing"],
    ),
    (
        Category::DocumentationPermits,
        &["permit", "drawing", "document", "license", "certificate"],
    ),
    (
        Category::ProjectCoordination,
        &["schedule", "meeting", "coordination", "kickoff", "turnover"],
    ),
    (
        Category::QualitySafety,
        &["safety", "quality", "inspection", "punch", "warranty"],
    ),
    (Category::DesignSubmittals, &["submittal", "rfi", "bim", "design"]),
    (
        Category::ProcurementBuyout,
        &["procurement", "buy", "subcontract", "allocation", "award"],
    ),
    (
        Category::ReportingAdministration,
        &["report", "due", "monthly", "weekly", "daily"],
    ),
];

/// Classify a task description into a category
///
/// Total function: empty or unmatched descriptions classify as
/// [`Category::GeneralProjectTasks`].
#[must_use]
pub fn classify(description: &str) -> Category {
    let haystack = description.to_lowercase();
    for (category, keywords) in KEYWORD_GROUPS {
        if keywords.iter().any(|keyword| haystack.contains(keyword)) {
            return *category;
        }
    }
    Category::GeneralProjectTasks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_each_group() {
        assert_eq!(classify("Execute owner agreement"), Category::ContractManagement);
        assert_eq!(classify("Approve monthly invoice"), Category::FinancialManagement);
        assert_eq!(classify("Pull building permit"), Category::DocumentationPermits);
        assert_eq!(classify("Run OAC meeting"), Category::ProjectCoordination);
        assert_eq!(classify("Walk punch list"), Category::QualitySafety);
        assert_eq!(classify("Log structural RFI"), Category::DesignSubmittals);
        assert_eq!(classify("Award steel subcontract"), Category::ContractManagement);
        assert_eq!(classify("File weekly manpower numbers"), Category::ReportingAdministration);
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify("SIGN THE CHANGE ORDER"), Category::ContractManagement);
        assert_eq!(classify("sign the change order"), Category::ContractManagement);
    }

    #[test]
    fn classify_priority_first_group_wins() {
        // Contains both a contract keyword and a financial keyword;
        // group declaration order decides.
        assert_eq!(classify("Sign the invoice contract"), Category::ContractManagement);
        // Financial before documentation.
        assert_eq!(classify("Budget the permit fees"), Category::FinancialManagement);
    }

    #[test]
    fn classify_defaults_to_general() {
        assert_eq!(classify(""), Category::GeneralProjectTasks);
        assert_eq!(classify("Walk the site"), Category::GeneralProjectTasks);
    }

    #[test]
    fn classify_procurement_without_earlier_keywords() {
        assert_eq!(classify("Buyout electrical scope"), Category::ProcurementBuyout);
    }

    #[test]
    fn category_serde_uses_labels() {
        let json = serde_json::to_string(&Category::QualitySafety).unwrap();
        assert_eq!(json, "\"Quality & Safety\"");

        let back: Category = serde_json::from_str("\"Procurement & Buyout\"").unwrap();
        assert_eq!(back, Category::ProcurementBuyout);
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
