//! Terminal rendering for questions and assessments

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::onboarding::AssessmentRecord;
use crate::questions::{Question, QuestionKind};
use crate::risk::{RiskLevel, RiskResult};

pub fn level_colored(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::Low => level.as_str().green().bold(),
        RiskLevel::Medium => level.as_str().yellow().bold(),
        RiskLevel::High => level.as_str().red().bold(),
    }
}

/// Show welcome banner
pub fn show_banner(version: &str) {
    let width = 64;
    println!("\n{}", "=".repeat(width).magenta());
    println!("{}", format!("  SHEra {} - Onboarding", version).bold().magenta());
    println!("{}", "  Answer by number or value, 'b' to go back, 'q' to pause".dimmed());
    println!("{}\n", "=".repeat(width).magenta());
}

/// Draw a one-off progress bar for the current position
pub fn show_progress(position: usize, total: usize, fraction: f64) {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{bar:32.magenta/white}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb.set_position(position as u64);
    pb.set_message(format!("{:.0}%", fraction * 100.0));
    pb.abandon();
}

pub fn show_question(question: &Question) {
    println!("\n{}", question.category.label().dimmed());
    println!("{}", question.prompt.bold());

    match question.kind {
        QuestionKind::SingleChoice | QuestionKind::MultiChoice => {
            for (i, option) in question.options.iter().enumerate() {
                println!("  {} {}", format!("{:>2}.", i + 1).cyan(), option.label);
            }
            if question.kind == QuestionKind::MultiChoice {
                println!("{}", "  (comma-separated)".dimmed());
            }
        }
        QuestionKind::Numeric => println!("{}", "  (number)".dimmed()),
        QuestionKind::Date => println!("{}", "  (YYYY-MM-DD)".dimmed()),
        QuestionKind::Text => {}
    }
}

/// List questions with option weights
pub fn show_question_list<'a>(questions: impl IntoIterator<Item = &'a Question>) {
    let mut category = None;
    for question in questions {
        if category != Some(question.category) {
            category = Some(question.category);
            println!("\n{}", question.category.label().bold().magenta());
        }

        let conditional = match &question.condition {
            Some(condition) => format!(
                " (if {} in {})",
                condition.depends_on,
                condition.show_if.iter().cloned().collect::<Vec<_>>().join("/")
            ),
            None => String::new(),
        };
        let kind = match question.kind {
            QuestionKind::SingleChoice => String::new(),
            other => format!(" [{}]", other.as_str()),
        };
        let max = match question.max_weight() {
            0 => String::new(),
            w => format!(" max +{}", w),
        };
        println!(
            "  {} {}{}{}{}",
            question.id.cyan(),
            question.prompt,
            kind.dimmed(),
            conditional.dimmed(),
            max.yellow()
        );

        for option in &question.options {
            let weight = match option.weight {
                Some(w) if w > 0 => format!("+{}", w).yellow().to_string(),
                _ => String::new(),
            };
            println!("      {:<22} {}", option.value, weight);
        }
    }
}

pub fn show_result(result: &RiskResult) {
    println!(
        "\n{} {}   {} {}",
        "Risk level:".bold(),
        level_colored(result.level),
        "Score:".bold(),
        format!("{}/100", result.score)
    );

    if !result.indicators.is_empty() {
        println!("\n{}", "Indicators".bold());
        for indicator in &result.indicators {
            println!("  • {}", indicator);
        }
    }

    println!("\n{}", result.recommendation);
}

pub fn show_record(record: &AssessmentRecord) {
    println!(
        "{}",
        format!(
            "Assessment {} completed {}",
            record.id,
            record.completed_at.format("%Y-%m-%d %H:%M UTC")
        )
        .dimmed()
    );
    show_result(&record.result);
}

/// Answers that still count towards the score but belong to questions
/// the current answers no longer show
pub fn show_hidden_answers(ids: &[&str]) {
    if ids.is_empty() {
        return;
    }
    println!(
        "\n{} {}",
        "Also scored (no longer shown):".dimmed(),
        ids.join(", ").dimmed()
    );
}

pub fn show_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn show_info(message: &str) {
    println!("{} {}", "ℹ".cyan(), message);
}
