use super::TextKey;

pub(super) static MONTHS: [&str; 12] = [
    "jan.", "fév.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc.",
];

pub(super) fn text(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        AppTitle => "Calculs d'automatisation de tests",
        LanguageLabel => "Langue",
        Instructions => "Usage prévu : suivez les questions une par une pour éviter les pertes financières et les frustrations.",
        UnitHours => "heures",
        UnitMinutes => "min",

        Q1Title => "Combien d'heures de travail peuvent être économisées en automatisant la suite de tests ?",
        Q1InputManual => "Durée d'exécution manuelle de la suite de tests (en heures) :",
        Q1InputAutomated => "Durée d'exécution automatisée de la suite de tests (en minutes) :",
        Q1InputDevelopment => "Temps de développement de l'automatisation (en heures) :",
        Q1ResultMessage => "Chaque exécution de test automatisée vous fera économiser environ {time} heures.",
        Q1FirstRunGain => "En phase de mise en œuvre et dès la toute première exécution, l'automatisation vous fait économiser environ {time} heures.",
        Q1FirstRunLoss => "En phase de mise en œuvre et avec la toute première exécution, vous perdrez environ {time} heures.",
        Q1Amortization => "Le déficit de temps initial est compensé après {runs} exécutions supplémentaires de la suite automatisée.",
        Q1ChartTitle => "Comparaison de temps : Suite de tests manuelle vs automatisée",
        Q1ChartYAxis => "Temps (heures)",
        Q1LabelManual => "Manuel",
        Q1LabelAutomated => "Automatisé",
        Q1LabelSaved => "Temps économisé",

        Q2Title => "Combien de cycles de tests sont nécessaires pour compenser l'investissement initial en temps pour l'automatisation d'une suite de tests ?",
        Q2InputInvestment => "Investissement initial pour l'automatisation (en heures)",
        Q2InputSavings => "Économie de temps par exécution (en heures)",
        Q2ResultMessage => "Nombre de cycles de tests nécessaires pour compenser l'investissement initial : {runs}",
        Q2ResultNever => "Sans économie de temps positive par exécution, l'investissement initial n'est jamais compensé.",
        Q2ChartTitle => "Atteindre le seuil de rentabilité pour la suite de tests automatisée",
        Q2ChartXAxis => "Nombre de cycles de tests",
        Q2ChartYAxis => "Économies de temps cumulatives (heures)",
        Q2ChartAnnotation => "Investissement initial",
        Q2ChartTrace => "Économies de temps cumulatives",

        Q3Title => "L'équipe peut-elle « se permettre » la maintenance de [n] tests automatisés supplémentaires ?",
        Q3InputTh => "Heures mensuelles disponibles pour les tâches de maintenance (TH) :",
        Q3InputMt => "Heures mensuelles actuellement utilisées pour maintenir les tests automatisés existants (MT) :",
        Q3InputN => "Nombre total de tous les tests automatisés actuels (N) :",
        Q3InputA => "Nombre de nouveaux tests automatisés à ajouter le mois prochain (A) :",
        Q3WarningMessage => "L'ajout de tests supplémentaires entraînera la dégradation de la suite de tests automatisée.",
        Q3SuccessMessage => "Vous pouvez vous permettre d'ajouter et de maintenir {count} tests automatisés supplémentaires le mois prochain.",
        Q3ChartTitle => "Prévision sur 6 mois du potentiel (P) en ajoutant {count} tests supplémentaires par mois",
        Q3ChartXAxis => "Mois",
        Q3ChartYAxis => "Potentiel pour ajouter plus de tests (P)",

        PdfTitle => "Synthèse de l'automatisation des tests",
        PdfGeneratedDate => "Généré le :",
        PdfExecutiveSummary => "Synthèse",
        PdfSummaryIntro => "Ce rapport résume si l'investissement dans l'automatisation des tests est rentable, à partir des valeurs saisies dans le calculateur.",
        PdfQ1SummaryLabel => "Économie de temps par exécution automatisée",
        PdfQ2SummaryLabel => "Seuil de rentabilité de l'investissement",
        PdfQ3SummaryLabel => "Capacité de maintenance pour de nouveaux tests automatisés",
        PdfInputsLabel => "Données saisies",
        PdfResultsLabel => "Résultats",
        PdfFooterNote => "Tous les chiffres sont des estimations issues des valeurs saisies. Vérifiez-les avec l'équipe avant toute décision d'investissement.",
    }
}
