use super::TextKey;

pub(super) static MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "Mäe.", "Abr.", "Mee", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

pub(super) fn text(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        AppTitle => "Testautomatiséierungs-Berechnungen",
        LanguageLabel => "Sprooch",
        Instructions => "Virgesinnte Gebrauch: Follt d'Froen eent no deem aneren fir finanziell Verloschter a Frustratiounen ze vermeiden.",
        UnitHours => "Stonnen",
        UnitMinutes => "Min.",

        Q1Title => "Wéivill Aarbechtsstonnen kënne gespuert ginn duerch d'Automatiséierung vun der Testsuite?",
        Q1InputManual => "Manuell Testlafzäit vun der Testsuite (a Stonnen):",
        Q1InputAutomated => "Automatiséiert Testlafzäit vun der Testsuite (a Minutten):",
        Q1InputDevelopment => "Entwécklungszäit vun der Automatiséierung (a Stonnen):",
        Q1ResultMessage => "All automatiséierten Testlaf spuert Iech ongeféier {time} Stonnen.",
        Q1FirstRunGain => "An der Implementéierungsphas a mam alleréischte Laf spuert Dir mat Testautomatiséierung ongeféier {time} Stonnen.",
        Q1FirstRunLoss => "An der Implementéierungsphas a mam alleréischte Laf verléiert Dir ongeféier {time} Stonnen.",
        Q1Amortization => "Den initialen Zäitdefizit ass no {runs} weidere Leef vun der Automatiséierungssuite ausgeglach.",
        Q1ChartTitle => "Zäitverglach: Manuell vs automatiséiert Testsuite",
        Q1ChartYAxis => "Zäit (Stonnen)",
        Q1LabelManual => "Manuell",
        Q1LabelAutomated => "Automatiséiert",
        Q1LabelSaved => "Zäiterspuernis",

        Q2Title => "Wéivill Testleefer si néideg fir déi initial Zäitinvestitioun fir d'Automatiséierung vun enger Testsuite auszegläichen?",
        Q2InputInvestment => "Initial Investitioun fir Automatiséierung (a Stonnen)",
        Q2InputSavings => "Zäiterspuernis pro Laf (a Stonnen)",
        Q2ResultMessage => "Unzuel vun Testleefer déi néideg si fir déi initial Investitioun auszegläichen: {runs}",
        Q2ResultNever => "Ouni positiv Zäiterspuernis pro Laf gëtt déi initial Investitioun ni ausgeglach.",
        Q2ChartTitle => "Erreeche vum Break-Even-Punkt fir automatiséiert Testsuite",
        Q2ChartXAxis => "Unzuel vun Testleefer",
        Q2ChartYAxis => "Kumulativ Zäiterspuernis (Stonnen)",
        Q2ChartAnnotation => "Initial Investitioun",
        Q2ChartTrace => "Kumulativ Zäiterspuernis",

        Q3Title => "Kann d'Team sech d'Maintenance vun [n] méi automatiséierte Tester \"leeschten\"?",
        Q3InputTh => "Monatlech verfügbar Stonnen fir Maintenance-Aufgaben (TH):",
        Q3InputMt => "Monatlech benotzt Stonnen fir d'Maintenance vun existéierende automatiséierte Tester (MT):",
        Q3InputN => "Gesamtzuel vun allen aktuellen automatiséierte Tester (N):",
        Q3InputA => "Unzuel vun neien automatiséierte Tester déi nächste Mount derbäigesat ginn (A):",
        Q3WarningMessage => "Derbäisetze vu méi Tester féiert zum Verfall vun der automatiséierter Testsuite.",
        Q3SuccessMessage => "Dir kënnt Iech leeschten {count} méi automatiséiert Tester am nächste Mount derbäizesetzen a ze erhalen.",
        Q3ChartTitle => "6-Méint-Prognos vum Potenzial (P) beim Derbäisetze vun {count} méi Tester all Mount",
        Q3ChartXAxis => "Méint",
        Q3ChartYAxis => "Potenzial fir méi Tester (P)",

        PdfTitle => "Resumé Testautomatiséierung",
        PdfGeneratedDate => "Erstallt den:",
        PdfExecutiveSummary => "Resumé",
        PdfSummaryIntro => "Dëse Bericht resuméiert, ob sech eng Investitioun an Testautomatiséierung rentéiert, op Basis vun de Wäerter, déi am Rechner aginn goufen.",
        PdfQ1SummaryLabel => "Zäiterspuernis pro automatiséierte Laf",
        PdfQ2SummaryLabel => "Break-Even-Punkt vun der Automatiséierungsinvestitioun",
        PdfQ3SummaryLabel => "Maintenance-Kapazitéit fir nei automatiséiert Tester",
        PdfInputsLabel => "Agaben",
        PdfResultsLabel => "Resultater",
        PdfFooterNote => "All Zuelen sinn Schätzungen op Basis vun den aginnene Wäerter. Iwwerpréift se mam Team, ier Dir Investitiounsdecisiounen huelt.",
    }
}
