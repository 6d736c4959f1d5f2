//! Terminal rendering of the page view models.

use colored::{ColoredString, Colorize};

use digestdesk_application::{CardOptions, PaperCard};
use digestdesk_core::paper::ScoreTier;

fn score(card: &PaperCard) -> ColoredString {
    let Some(label) = &card.score_label else {
        return " -- ".bright_black();
    };
    let label = format!("{:>4}", label);
    match card.tier {
        ScoreTier::High => label.bright_green().bold(),
        ScoreTier::Medium => label.green(),
        ScoreTier::Low => label.yellow(),
        ScoreTier::None => label.bright_black(),
    }
}

pub fn print_card(card: &PaperCard, options: &CardOptions) {
    let marker = if options.show_save && options.saved {
        " ★ saved".bright_yellow().to_string()
    } else {
        String::new()
    };
    println!("{} {}{}", score(card), card.title.bold(), marker);
    println!("     {} {}", card.arxiv_id.cyan(), card.link.bright_black());
    if !card.authors.is_empty() {
        println!("     {}", card.authors);
    }
    if let Some(reason) = &card.reason {
        println!("     {}", reason.italic());
    }
    if let Some(note) = &card.note {
        println!("     {} {}", "Note:".yellow(), note);
    }
    if let Some(saved_at) = &card.saved_at {
        println!("     {}", format!("Saved on {}", saved_at).bright_black());
    }
    println!();
}

pub fn print_cards(cards: &[(PaperCard, CardOptions)], empty_message: &str) {
    if cards.is_empty() {
        println!("{}", empty_message.bright_black());
        return;
    }
    for (card, options) in cards {
        print_card(card, options);
    }
}
