use super::calculations::{format_percent, is_optimal_ph};
use crate::models::FieldAttributes;

/// Nitrogen level (kg/ha) above which the soil is reported as adequately supplied
pub const ADEQUATE_NITROGEN: f64 = 50.0;

/// Build the justification clauses for a recommended crop.
///
/// Clause order is fixed: pH, irrigation, nitrogen, then the suitability
/// score, which is always present. Clauses whose input is missing are left out.
pub fn generate_explanation(crop: &str, field: &FieldAttributes, score: f64) -> Vec<String> {
    let mut clauses = Vec::with_capacity(4);

    if let Some(ph) = field.soil_ph {
        if is_optimal_ph(ph) {
            clauses.push(format!("Optimal soil pH ({:.1}) for {}", ph, crop));
        } else {
            clauses.push(format!("pH adjustment may be needed for {}", crop));
        }
    }

    if field.irrigation_available {
        clauses.push("Irrigation availability supports good yield".to_string());
    }

    if field.soil_n.is_some_and(|n| n > ADEQUATE_NITROGEN) {
        clauses.push("Adequate nitrogen levels detected".to_string());
    }

    clauses.push(format!("High suitability score: {}", format_percent(score)));

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_clauses_in_order() {
        let field = FieldAttributes::new(20.0, 78.0, 2.0)
            .with_soil_ph(6.5)
            .with_npk(Some(70.0), None, None)
            .with_irrigation(true);

        assert_eq!(
            generate_explanation("wheat", &field, 0.7),
            vec![
                "Optimal soil pH (6.5) for wheat",
                "Irrigation availability supports good yield",
                "Adequate nitrogen levels detected",
                "High suitability score: 70.0%",
            ]
        );
    }

    #[test]
    fn only_score_clause_when_nothing_known() {
        let field = FieldAttributes::new(20.0, 78.0, 2.0);
        assert_eq!(
            generate_explanation("rice", &field, 0.4567),
            vec!["High suitability score: 45.7%"]
        );
    }

    #[test]
    fn ph_outside_optimal_band_needs_adjustment() {
        for ph in [4.0, 5.5, 7.8, 9.0, 0.0] {
            let field = FieldAttributes::new(20.0, 78.0, 2.0).with_soil_ph(ph);
            let clauses = generate_explanation("maize", &field, 0.7);
            assert_eq!(clauses[0], "pH adjustment may be needed for maize");
            assert_eq!(clauses.len(), 2);
        }
    }

    #[test]
    fn ph_is_formatted_with_one_decimal() {
        let field = FieldAttributes::new(20.0, 78.0, 2.0).with_soil_ph(7.25);
        let clauses = generate_explanation("cotton", &field, 0.7);
        assert!(clauses[0].starts_with("Optimal soil pH (7."));
        assert!(clauses[0].ends_with(") for cotton"));
    }

    #[test]
    fn nitrogen_threshold_is_exclusive() {
        let at_threshold = FieldAttributes::new(20.0, 78.0, 2.0).with_npk(Some(50.0), None, None);
        let above = FieldAttributes::new(20.0, 78.0, 2.0).with_npk(Some(50.1), None, None);

        assert!(!generate_explanation("wheat", &at_threshold, 0.7)
            .contains(&"Adequate nitrogen levels detected".to_string()));
        assert!(generate_explanation("wheat", &above, 0.7)
            .contains(&"Adequate nitrogen levels detected".to_string()));
    }

    #[test]
    fn score_clause_always_last() {
        let field = FieldAttributes::new(20.0, 78.0, 2.0)
            .with_soil_ph(6.0)
            .with_irrigation(true);
        let clauses = generate_explanation("wheat", &field, 0.9123);
        assert_eq!(clauses.last().unwrap(), "High suitability score: 91.2%");
    }
}
