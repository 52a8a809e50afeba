//! Built-in onboarding question set

use super::types::{Category, Question};

const ADOLESCENT_AGES: &[&str] = &["below_13", "13_15", "16_18"];

/// The onboarding questions in the order they are asked
pub fn onboarding_questions() -> Vec<Question> {
    use Category::*;

    vec![
        // Basic profile
        Question::single_choice("age_group", "What is your age group?", BasicProfile)
            .option("Below 13", "below_13")
            .option("13–15", "13_15")
            .option("16–18", "16_18")
            .option("19–25", "19_25")
            .option("26–35", "26_35")
            .option("36+", "36_plus"),
        Question::single_choice("first_period_age", "Age at first period (if applicable):", BasicProfile)
            .option("Not started yet", "not_started")
            .weighted("Below 10", "below_10", 8)
            .option("10–12", "10_12")
            .option("13–15", "13_15")
            .weighted("After 15", "after_15", 5),
        Question::single_choice("body_type", "Current body type (self-perceived):", BasicProfile)
            .option("Underweight", "underweight")
            .option("Average", "average")
            .weighted("Slightly overweight", "slightly_overweight", 5)
            .weighted("Overweight", "overweight", 10),
        Question::single_choice(
            "hormonal_med",
            "Are you currently on hormonal medication/birth control?",
            BasicProfile,
        )
        .option("Yes", "yes")
        .option("No", "no")
        .option("Not sure", "not_sure"),
        // Menstrual health
        Question::single_choice("period_regularity", "How regular are your periods?", MenstrualHealth)
            .weighted("Regular (21–35 days)", "regular", 0)
            .weighted("Sometimes irregular", "sometimes", 10)
            .weighted("Very irregular", "very_irregular", 20)
            .weighted("Periods stopped / not started", "stopped", 25),
        Question::single_choice("cycle_length_avg", "Average cycle length:", MenstrualHealth)
            .weighted("Less than 21 days", "less_21", 10)
            .weighted("21–35 days", "21_35", 0)
            .weighted("More than 35 days", "more_35", 15)
            .weighted("Unsure", "unsure", 5),
        Question::single_choice("bleeding_duration", "Duration of bleeding:", MenstrualHealth)
            .weighted("1–2 days", "1_2", 5)
            .weighted("3–5 days", "3_5", 0)
            .weighted("6–7 days", "6_7", 2)
            .weighted("More than 7 days", "more_7", 8),
        Question::single_choice("flow_intensity", "Menstrual flow intensity:", MenstrualHealth)
            .option("Light", "light")
            .option("Normal", "normal")
            .weighted("Heavy", "heavy", 5)
            .weighted("Very heavy", "very_heavy", 10),
        Question::single_choice("period_symptoms", "Period symptoms you experience:", MenstrualHealth)
            .option("Mild discomfort", "mild")
            .weighted("Pain needing medication", "medication", 5)
            .weighted("Severe pain affecting daily activities", "severe", 15)
            .option("No pain", "none"),
        // PCOD / PCOS indicators
        Question::single_choice("excess_hair", "Excess facial/body hair growth?", PcosIndicators)
            .option("No", "no")
            .weighted("Mild", "mild", 5)
            .weighted("Moderate", "moderate", 10)
            .weighted("Severe", "severe", 15),
        Question::single_choice("adult_acne", "Acne after teenage years:", PcosIndicators)
            .option("None", "none")
            .weighted("Occasional", "occasional", 3)
            .weighted("Persistent", "persistent", 8)
            .weighted("Severe", "severe", 12),
        Question::single_choice("weight_changes", "Weight changes in last year:", PcosIndicators)
            .option("Stable", "stable")
            .weighted("Mild gain", "mild_gain", 4)
            .weighted("Sudden/unexplained gain", "sudden_gain", 12)
            .weighted("Sudden loss", "sudden_loss", 5),
        Question::single_choice("hair_loss", "Hair fall or thinning on scalp:", PcosIndicators)
            .option("No", "no")
            .weighted("Mild", "mild", 3)
            .weighted("Moderate", "moderate", 7)
            .weighted("Severe", "severe", 10),
        Question::single_choice("dark_patches", "Dark skin patches:", PcosIndicators)
            .option("No", "no")
            .weighted("Slight", "slight", 5)
            .weighted("Clearly visible", "clear", 10)
            .option("Unsure", "unsure"),
        Question::single_choice("family_history", "Family history of PCOS/diabetes/thyroid?", PcosIndicators)
            .weighted("Yes", "yes", 10)
            .option("No", "no")
            .weighted("Not sure", "not_sure", 2),
        // Lifestyle & metabolic health
        Question::single_choice("activity_level", "Physical activity level:", LifestyleMetabolic)
            .option("Daily", "daily")
            .option("3–4 times/week", "3_4_times")
            .weighted("1–2 times/week", "1_2_times", 3)
            .weighted("Rarely", "rarely", 8),
        Question::single_choice("sleep_duration", "Average sleep per night:", LifestyleMetabolic)
            .weighted("Less than 5 hours", "less_5", 10)
            .weighted("5–6 hours", "5_6", 5)
            .option("7–8 hours", "7_8")
            .option("More than 8 hours", "more_8"),
        Question::single_choice("energy_levels", "Energy levels:", LifestyleMetabolic)
            .option("Energetic", "energetic")
            .weighted("Slightly tired", "tired", 2)
            .weighted("Often exhausted", "exhausted", 7)
            .weighted("Extremely fatigued", "fatigued", 12),
        Question::single_choice("diet_pattern", "Diet pattern:", LifestyleMetabolic)
            .option("Mostly balanced", "balanced")
            .weighted("Mixed", "mixed", 2)
            .weighted("High sugar/junk", "sugar_junk", 10)
            .weighted("Irregular/skipped meals", "irregular_skipped", 5),
        // Mental health
        Question::single_choice("emotional_drain", "Emotional drainage (last 2 weeks):", MentalHealth)
            .option("Never", "never")
            .weighted("Sometimes", "sometimes", 4)
            .weighted("Often", "often", 8)
            .weighted("Almost always", "always", 12),
        Question::single_choice("stress_level", "Stress levels:", MentalHealth)
            .option("Low", "low")
            .weighted("Moderate", "moderate", 4)
            .weighted("High", "high", 8)
            .weighted("Extreme", "extreme", 15),
        Question::single_choice("concentration_diff", "Difficulty concentrating?", MentalHealth)
            .option("No", "no")
            .weighted("Occasionally", "occasionally", 3)
            .weighted("Frequently", "frequently", 7)
            .weighted("Almost daily", "daily", 10),
        Question::single_choice("mood_changes", "Mood changes:", MentalHealth)
            .option("Rare", "rare")
            .weighted("Occasional", "occasional", 2)
            .weighted("Frequent", "frequent", 6)
            .weighted("Constant", "constant", 10),
        // Adolescent health, only asked of under-19s
        Question::single_choice("adolescent_regularity", "Period regularity since starting:", AdolescentHealth)
            .shown_if("age_group", ADOLESCENT_AGES)
            .option("Regular", "regular")
            .weighted("Irregular but improving", "improving", 2)
            .weighted("Still very irregular", "very_irregular", 8)
            .option("Not started", "not_started"),
        Question::single_choice("academic_pressure", "Academic pressure:", AdolescentHealth)
            .shown_if("age_group", ADOLESCENT_AGES)
            .option("No impact", "none")
            .weighted("Mild stress", "mild", 2)
            .weighted("High stress", "high", 6)
            .weighted("Overwhelming", "overwhelming", 10),
        Question::single_choice("eating_habits", "Eating habits:", AdolescentHealth)
            .shown_if("age_group", ADOLESCENT_AGES)
            .option("Regular meals", "regular")
            .weighted("Sometimes skip meals", "skip_sometimes", 3)
            .weighted("Frequently skip meals", "skip_frequent", 8)
            .weighted("Restrictive eating", "restrictive", 12),
        // Red-flag safety check
        Question::single_choice("self_harm", "Thoughts of self-harm?", RedFlagSafety)
            .option("No", "no")
            .weighted("Rare", "rare", 10)
            .weighted("Sometimes", "sometimes", 25)
            .weighted("Often", "often", 50),
        Question::single_choice("period_stop_3m", "Periods stopped for 3 months?", RedFlagSafety)
            .option("No", "no")
            .weighted("Yes", "yes", 30)
            .weighted("Not sure", "not_sure", 5),
        Question::single_choice("severe_pelvic_pain", "Severe pelvic pain?", RedFlagSafety)
            .option("No", "no")
            .weighted("Mild", "mild", 5)
            .weighted("Severe", "severe", 25)
            .weighted("Ongoing", "ongoing", 20),
    ]
}
