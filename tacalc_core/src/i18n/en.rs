use super::TextKey;

pub(super) static MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub(super) fn text(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        AppTitle => "Test Automation Calculations",
        LanguageLabel => "Language",
        Instructions => "Intended usage: Follow the questions one by one to avoid financial losses and frustrations.",
        UnitHours => "hours",
        UnitMinutes => "min",

        Q1Title => "How many work hours can be saved by automating the test suite?",
        Q1InputManual => "Manual Test Run Time of Test Suite (in hours):",
        Q1InputAutomated => "Automated Test Run Time of Test Suite (in minutes):",
        Q1InputDevelopment => "Automation Development Time (in hours):",
        Q1ResultMessage => "Each automated test run will save you about {time} hours.",
        Q1FirstRunGain => "In implementation stage and with the very 1st run, you can save approximately {time} hours with test automation.",
        Q1FirstRunLoss => "In implementation stage and with the very 1st run, you will lose approximately {time} hours.",
        Q1Amortization => "The initial time deficit is balanced out with {runs} additional runs of the automation suite.",
        Q1ChartTitle => "Time Comparison: Manual vs Automated Test Suite",
        Q1ChartYAxis => "Time (hours)",
        Q1LabelManual => "Manual",
        Q1LabelAutomated => "Automated",
        Q1LabelSaved => "Time Saved",

        Q2Title => "How many test runs are needed to counter-balance the initial time investment for automating a test suite?",
        Q2InputInvestment => "Initial investment for automation (in hours)",
        Q2InputSavings => "Time savings per run (in hours)",
        Q2ResultMessage => "Number of test runs needed to counter-balance the initial investment: {runs}",
        Q2ResultNever => "Without positive time savings per run, the initial investment is never counter-balanced.",
        Q2ChartTitle => "Reaching Break-even Point for Automated Test Suite",
        Q2ChartXAxis => "Number of Test Runs",
        Q2ChartYAxis => "Cumulative Time Savings (hours)",
        Q2ChartAnnotation => "Initial Investment",
        Q2ChartTrace => "Cumulative Time Savings",

        Q3Title => "Can the team \"afford\" the maintenance of [n] more automated tests?",
        Q3InputTh => "Monthly hours available for maintenance tasks (TH):",
        Q3InputMt => "Monthly hours currently used to maintain existing automated tests (MT):",
        Q3InputN => "Total count of all current automated tests (N):",
        Q3InputA => "Count of new automated tests to be added next month (A):",
        Q3WarningMessage => "Adding more tests will lead to decay of the automation test suite.",
        Q3SuccessMessage => "You can afford to add and maintain {count} more automated tests next month.",
        Q3ChartTitle => "6-Month Prediction of Potential (P) for Adding {count} More Tests Each Month",
        Q3ChartXAxis => "Months",
        Q3ChartYAxis => "Potential to add more tests (P)",

        PdfTitle => "Test Automation Executive Summary",
        PdfGeneratedDate => "Generated on:",
        PdfExecutiveSummary => "Executive Summary",
        PdfSummaryIntro => "This report summarizes whether investing in test automation pays off, based on the values entered in the calculator.",
        PdfQ1SummaryLabel => "Time Savings per Automated Run",
        PdfQ2SummaryLabel => "Break-even Point of the Automation Investment",
        PdfQ3SummaryLabel => "Maintenance Capacity for New Automated Tests",
        PdfInputsLabel => "Inputs",
        PdfResultsLabel => "Results",
        PdfFooterNote => "All figures are estimates derived from the entered values. Review them with the team before making investment decisions.",
    }
}
