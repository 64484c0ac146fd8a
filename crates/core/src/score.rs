//! The fixed clinical risk rubric.
//!
//! Three independent category rubrics (age, temperature, blood pressure),
//! each producing a point value and the justifications for it, summed into a
//! per-patient total. Every function here is pure and total: the input has
//! already been range-validated by the normalizer, so there is no failure
//! path.

use triage_types::{CategoryScore, PatientVitals, RiskResult};

/// Temperature at or above this reads as fever (low band).
pub const FEVER_THRESHOLD_F: f64 = 99.6;

/// Temperature at or above this reads as high fever.
pub const HIGH_FEVER_THRESHOLD_F: f64 = 101.0;

/// Points and justifications for one rubric category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubricScore {
    pub points: u32,
    pub reasons: Vec<String>,
}

impl RubricScore {
    fn new(points: u32, reason: &str) -> Self {
        Self {
            points,
            reasons: vec![reason.to_string()],
        }
    }
}

/// Age rubric.
///
/// The rubric names three bands (under 40, 40-65, over 65) but the two
/// lower bands score identically; only crossing 65 adds risk.
pub fn age_risk_points(age: i64) -> RubricScore {
    if age > 65 {
        RubricScore::new(2, "age > 65")
    } else {
        RubricScore::new(1, "age ≤ 65")
    }
}

/// Temperature rubric. The fever *flag* on [`RiskResult`] is derived from
/// [`FEVER_THRESHOLD_F`] independently of the points awarded here.
pub fn temp_risk_points(temperature_f: f64) -> RubricScore {
    if temperature_f >= HIGH_FEVER_THRESHOLD_F {
        RubricScore::new(2, "temp ≥ 101.0°F (high fever)")
    } else if temperature_f >= FEVER_THRESHOLD_F {
        RubricScore::new(1, "temp 99.6–100.9°F (low fever)")
    } else {
        RubricScore::new(0, "temp ≤ 99.5°F (normal)")
    }
}

/// Blood-pressure rubric.
///
/// Each axis is staged on its own (normal/elevated/stage 1/stage 2) and the
/// higher-risk stage wins when the two disagree. The combined "elevated"
/// band (systolic 120-129 AND diastolic < 80) is a joint condition that no
/// single axis expresses, so it floors the result at 2 points when it
/// applies. The reasons always carry both axis descriptions, plus a note
/// when the combined band applies.
pub fn bp_risk_points(systolic: i64, diastolic: i64) -> RubricScore {
    let (sys_points, sys_reason) = if systolic >= 140 {
        (4, "systolic ≥ 140 (stage 2)")
    } else if systolic >= 130 {
        (3, "systolic 130–139 (stage 1)")
    } else if systolic >= 120 {
        (2, "systolic 120–129 (elevated)")
    } else {
        (1, "systolic < 120 (normal)")
    };

    let (dia_points, dia_reason) = if diastolic >= 90 {
        (4, "diastolic ≥ 90 (stage 2)")
    } else if diastolic >= 80 {
        (3, "diastolic 80–89 (stage 1)")
    } else {
        (1, "diastolic < 80 (normal/elevated condition)")
    };

    let elevated_combo = (120..=129).contains(&systolic) && diastolic < 80;

    let mut points = sys_points.max(dia_points);
    if elevated_combo {
        points = points.max(2);
    }

    let mut reasons = vec![sys_reason.to_string(), dia_reason.to_string()];
    if elevated_combo {
        reasons.push("meets elevated combo (120–129 AND <80)".to_string());
    }

    RubricScore { points, reasons }
}

/// Scores one validated patient.
///
/// Categories are emitted in fixed order (age, temperature, blood pressure)
/// and `total_risk` is their sum.
pub fn score_patient(vitals: &PatientVitals) -> RiskResult {
    let age = age_risk_points(vitals.age);
    let temp = temp_risk_points(vitals.temperature_f);
    let bp = bp_risk_points(vitals.systolic, vitals.diastolic);

    let categories = vec![
        CategoryScore {
            key: "age".to_string(),
            label: "Age".to_string(),
            score: age.points,
            reasons: age.reasons,
        },
        CategoryScore {
            key: "temp".to_string(),
            label: "Temperature".to_string(),
            score: temp.points,
            reasons: temp.reasons,
        },
        CategoryScore {
            key: "bp".to_string(),
            label: "Blood Pressure".to_string(),
            score: bp.points,
            reasons: bp.reasons,
        },
    ];

    let total_risk = categories.iter().map(|category| category.score).sum();

    RiskResult {
        id: vitals.id.clone(),
        total_risk,
        categories,
        fever: vitals.temperature_f >= FEVER_THRESHOLD_F,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vitals(age: i64, temperature_f: f64, systolic: i64, diastolic: i64) -> PatientVitals {
        PatientVitals {
            id: "t".to_string(),
            age,
            temperature_f,
            systolic,
            diastolic,
        }
    }

    #[test]
    fn test_age_rubric_only_distinguishes_over_65() {
        // The rubric names an under-40 band, but it scores the same as 40-65.
        assert_eq!(age_risk_points(30).points, 1);
        assert_eq!(age_risk_points(65).points, 1);
        assert_eq!(age_risk_points(66).points, 2);
    }

    #[test]
    fn test_temp_rubric_bands() {
        assert_eq!(temp_risk_points(99.5).points, 0);
        assert_eq!(temp_risk_points(99.6).points, 1);
        assert_eq!(temp_risk_points(100.9).points, 1);
        assert_eq!(temp_risk_points(101.0).points, 2);
    }

    #[test]
    fn test_temp_rubric_reasons_name_the_band() {
        assert_eq!(temp_risk_points(101.4).reasons, vec!["temp ≥ 101.0°F (high fever)"]);
        assert_eq!(temp_risk_points(98.6).reasons, vec!["temp ≤ 99.5°F (normal)"]);
    }

    #[test]
    fn test_bp_normal_both_axes() {
        let score = bp_risk_points(119, 79);
        assert_eq!(score.points, 1);
        assert_eq!(
            score.reasons,
            vec![
                "systolic < 120 (normal)",
                "diastolic < 80 (normal/elevated condition)",
            ]
        );
    }

    #[test]
    fn test_bp_elevated_combo_scores_two_with_note() {
        let score = bp_risk_points(125, 79);
        assert_eq!(score.points, 2);
        assert_eq!(
            score.reasons,
            vec![
                "systolic 120–129 (elevated)",
                "diastolic < 80 (normal/elevated condition)",
                "meets elevated combo (120–129 AND <80)",
            ]
        );
    }

    #[test]
    fn test_bp_higher_risk_stage_wins() {
        // Diastolic stage 2 dominates a systolic stage 1.
        assert_eq!(bp_risk_points(135, 95).points, 4);
        // Systolic stage 2 dominates a normal diastolic.
        assert_eq!(bp_risk_points(145, 70).points, 4);
    }

    #[test]
    fn test_bp_stage_one_on_either_axis() {
        assert_eq!(bp_risk_points(132, 75).points, 3);
        assert_eq!(bp_risk_points(110, 85).points, 3);
    }

    #[test]
    fn test_bp_combo_note_absent_outside_the_band() {
        assert!(bp_risk_points(125, 82)
            .reasons
            .iter()
            .all(|reason| !reason.contains("combo")));
    }

    #[test]
    fn test_score_patient_sums_categories_in_fixed_order() {
        let result = score_patient(&vitals(70, 101.5, 150, 95));
        let keys: Vec<&str> = result.categories.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["age", "temp", "bp"]);

        let recomputed = age_risk_points(70).points
            + temp_risk_points(101.5).points
            + bp_risk_points(150, 95).points;
        assert_eq!(result.total_risk, recomputed);
        assert_eq!(result.total_risk, 8);
    }

    #[test]
    fn test_fever_flag_follows_threshold_not_points() {
        assert!(score_patient(&vitals(30, 99.6, 110, 70)).fever);
        assert!(!score_patient(&vitals(30, 99.5, 110, 70)).fever);
        // High fever also sets the flag.
        assert!(score_patient(&vitals(30, 102.0, 110, 70)).fever);
    }

    #[test]
    fn test_every_category_carries_reasons() {
        let result = score_patient(&vitals(40, 98.6, 118, 76));
        assert!(result.categories.iter().all(|c| !c.reasons.is_empty()));
        assert_eq!(result.total_risk, 2);
    }
}
