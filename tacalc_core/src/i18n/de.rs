use super::TextKey;

pub(super) static MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

pub(super) fn text(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        AppTitle => "Testautomatisierungs-Kalkulationen",
        LanguageLabel => "Sprache",
        Instructions => "Verwendungszweck: Folgen Sie den Fragen nacheinander, um finanzielle Verluste und Frustrationen zu vermeiden.",
        UnitHours => "Stunden",
        UnitMinutes => "Min.",

        Q1Title => "Wie viele Arbeitsstunden können durch die Automatisierung der Testsuite eingespart werden?",
        Q1InputManual => "Manuelle Testlaufzeit der Testsuite (in Stunden):",
        Q1InputAutomated => "Automatisierte Testlaufzeit der Testsuite (in Minuten):",
        Q1InputDevelopment => "Entwicklungszeit der Automatisierung (in Stunden):",
        Q1ResultMessage => "Jeder automatisierte Testlauf spart Ihnen etwa {time} Stunden.",
        Q1FirstRunGain => "In der Implementierungsphase und mit dem allerersten Lauf sparen Sie mit Testautomatisierung etwa {time} Stunden.",
        Q1FirstRunLoss => "In der Implementierungsphase und mit dem allerersten Lauf verlieren Sie etwa {time} Stunden.",
        Q1Amortization => "Das anfängliche Zeitdefizit ist nach {runs} weiteren Läufen der Automatisierungssuite ausgeglichen.",
        Q1ChartTitle => "Zeitvergleich: Manuelle vs. automatisierte Testsuite",
        Q1ChartYAxis => "Zeit (Stunden)",
        Q1LabelManual => "Manuell",
        Q1LabelAutomated => "Automatisiert",
        Q1LabelSaved => "Zeitersparnis",

        Q2Title => "Wie viele Testläufe sind erforderlich, um die anfängliche Zeitinvestition für die Automatisierung einer Testsuite auszugleichen?",
        Q2InputInvestment => "Anfangsinvestition für Automatisierung (in Stunden)",
        Q2InputSavings => "Zeitersparnis pro Lauf (in Stunden)",
        Q2ResultMessage => "Anzahl der Testläufe, die erforderlich sind, um die anfängliche Investition auszugleichen: {runs}",
        Q2ResultNever => "Ohne positive Zeitersparnis pro Lauf wird die anfängliche Investition nie ausgeglichen.",
        Q2ChartTitle => "Erreichen des Break-Even-Punkts für automatisierte Testsuite",
        Q2ChartXAxis => "Anzahl der Testläufe",
        Q2ChartYAxis => "Kumulative Zeitersparnis (Stunden)",
        Q2ChartAnnotation => "Anfangsinvestition",
        Q2ChartTrace => "Kumulative Zeitersparnis",

        Q3Title => "Kann sich das Team die Wartung von [n] weiteren automatisierten Tests „leisten\"?",
        Q3InputTh => "Monatlich verfügbare Stunden für Wartungsaufgaben (TH):",
        Q3InputMt => "Monatlich verwendete Stunden für die Wartung bestehender automatisierter Tests (MT):",
        Q3InputN => "Gesamtzahl aller aktuellen automatisierten Tests (N):",
        Q3InputA => "Anzahl neuer automatisierter Tests, die im nächsten Monat hinzugefügt werden sollen (A):",
        Q3WarningMessage => "Das Hinzufügen weiterer Tests führt zum Verfall der automatisierten Testsuite.",
        Q3SuccessMessage => "Sie können sich leisten, {count} weitere automatisierte Tests im nächsten Monat hinzuzufügen und zu warten.",
        Q3ChartTitle => "6-Monats-Prognose des Potenzials (P) beim Hinzufügen von {count} weiteren Tests pro Monat",
        Q3ChartXAxis => "Monate",
        Q3ChartYAxis => "Potenzial für weitere Tests (P)",

        PdfTitle => "Management-Zusammenfassung Testautomatisierung",
        PdfGeneratedDate => "Erstellt am:",
        PdfExecutiveSummary => "Zusammenfassung",
        PdfSummaryIntro => "Dieser Bericht fasst zusammen, ob sich eine Investition in Testautomatisierung lohnt, basierend auf den im Rechner eingegebenen Werten.",
        PdfQ1SummaryLabel => "Zeitersparnis pro automatisiertem Lauf",
        PdfQ2SummaryLabel => "Break-Even-Punkt der Automatisierungsinvestition",
        PdfQ3SummaryLabel => "Wartungskapazität für neue automatisierte Tests",
        PdfInputsLabel => "Eingaben",
        PdfResultsLabel => "Ergebnisse",
        PdfFooterNote => "Alle Zahlen sind Schätzungen auf Basis der eingegebenen Werte. Prüfen Sie diese mit dem Team, bevor Sie Investitionsentscheidungen treffen.",
    }
}
